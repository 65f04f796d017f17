use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::info;

use crate::config::game::GameConfig;
use crate::error::AppError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
/// Shipped dataset, anchored to the crate directory so the server starts
/// from any working directory. A relative `DATASET_PATH` is still resolved
/// against the working directory.
pub const DEFAULT_DATASET_PATH: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/data/llm_owasp_top10.json");
pub const DEFAULT_CHECK_RATE_LIMIT_PER_MINUTE: u64 = 30;

/// Process configuration read from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub dataset_path: PathBuf,
    /// Submissions allowed per client IP per minute on `/check`
    pub check_rate_limit_per_minute: u64,
    pub game: GameConfig,
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset. Unparseable values are a config error.
    pub fn from_env() -> Result<Self, AppError> {
        let check_rate_limit_per_minute =
            parsed_var("CHECK_RATE_LIMIT_PER_MINUTE", DEFAULT_CHECK_RATE_LIMIT_PER_MINUTE)?;
        if check_rate_limit_per_minute == 0 {
            return Err(AppError::config(
                "CHECK_RATE_LIMIT_PER_MINUTE must be at least 1",
            ));
        }

        Ok(Self {
            host: var_or("HOST", DEFAULT_HOST),
            port: parsed_var("PORT", DEFAULT_PORT)?,
            dataset_path: PathBuf::from(var_or("DATASET_PATH", DEFAULT_DATASET_PATH)),
            check_rate_limit_per_minute,
            game: GameConfig {
                final_flag: env::var("FINAL_FLAG")
                    .unwrap_or_else(|_| GameConfig::default().final_flag),
                ..GameConfig::default()
            },
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            check_rate_limit_per_minute: DEFAULT_CHECK_RATE_LIMIT_PER_MINUTE,
            game: GameConfig::default(),
        }
    }
}

/// Get environment variable or a default (logged)
fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!(key, default, "config.default_used");
        default.to_string()
    })
}

/// Parse an environment variable, using `default` when it is unset
fn parsed_var<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("{key} must be a valid value, got '{raw}': {e}"))),
        Err(_) => {
            info!(key, default = %default, "config.default_used");
            Ok(default)
        }
    }
}
