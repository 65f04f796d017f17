use actix_extensible_rate_limit::backend::memory::InMemoryBackend;
use actix_web::web;

pub mod assets;
pub mod game;
pub mod health;

/// Configure application routes without rate limiting.
///
/// Used by tests and any context that does not need per-IP limits. Production
/// calls [`configure_with_limits`], which registers the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(game::configure_routes)
        .configure(assets::configure_routes);
}

/// Configure application routes with `/check` limited per client IP.
///
/// `backend` holds the counters and must be shared across workers.
pub fn configure_with_limits(
    cfg: &mut web::ServiceConfig,
    backend: InMemoryBackend,
    check_per_minute: u64,
) {
    cfg.configure(health::configure_routes)
        .configure(|cfg| game::configure_routes_with_limit(cfg, backend, check_per_minute))
        .configure(assets::configure_routes);
}
