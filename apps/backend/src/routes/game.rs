use actix_extensible_rate_limit::backend::memory::InMemoryBackend;
use actix_extensible_rate_limit::RateLimiter;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::middleware::rate_limit::{check_rate_limit_config, check_rate_limited_response};
use crate::state::app_state::AppState;

/// Body of `POST /check`.
///
/// `pairs` stays untyped here so a missing or non-array value can be
/// reported with the game's own message instead of a generic parse error.
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub pairs: Option<Value>,
}

async fn new_game(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let payload = app_state.game_session().new_game(&mut rand::rng());
    Ok(HttpResponse::Ok().json(payload))
}

async fn check(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CheckRequest>,
) -> Result<HttpResponse, AppError> {
    let outcome = app_state.game_session().check(body.into_inner().pairs)?;
    Ok(HttpResponse::Ok().json(outcome))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/game", web::get().to(new_game))
        .route("/check", web::post().to(check));
}

pub fn configure_routes_with_limit(
    cfg: &mut web::ServiceConfig,
    backend: InMemoryBackend,
    check_per_minute: u64,
) {
    let limiter = RateLimiter::builder(backend, check_rate_limit_config(check_per_minute).build())
        .add_headers()
        .request_denied_response(|_| check_rate_limited_response())
        .build();

    cfg.route("/api/game", web::get().to(new_game)).service(
        web::resource("/check")
            .wrap(limiter)
            .route(web::post().to(check)),
    );
}
