//! Rate limiting for answer submissions.
//!
//! `/check` is the only endpoint worth guessing against, so it alone is
//! limited per client IP. Game payloads, health, and static assets are exempt.

use std::time::Duration;

use actix_extensible_rate_limit::backend::SimpleInputFunctionBuilder;
use actix_web::{HttpResponse, ResponseError};

use crate::error::AppError;
use crate::logging::security;

/// Window used for the per-IP submission budget.
pub const CHECK_WINDOW: Duration = Duration::from_secs(60);

/// Input function config for `/check`: `per_minute` requests per IP.
///
/// Keys on the real-IP value, which honours `Forwarded`/`X-Forwarded-For`;
/// the limit only holds behind a trusted proxy that overwrites those headers.
pub fn check_rate_limit_config(per_minute: u64) -> SimpleInputFunctionBuilder {
    SimpleInputFunctionBuilder::new(CHECK_WINDOW, per_minute).real_ip_key()
}

/// Response sent once a client exhausts its budget.
pub fn check_rate_limited_response() -> HttpResponse {
    security::rate_limit_hit("/check");
    AppError::rate_limited().error_response()
}
