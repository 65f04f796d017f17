use actix_extensible_rate_limit::backend::memory::InMemoryBackend;
use actix_web::{web, App, HttpServer};
use matcher_backend::config::AppConfig;
use matcher_backend::infra::state::build_state;
use matcher_backend::middleware::{
    cors_middleware, RequestTrace, SecurityHeaders, StructuredLogger, TraceSpan,
};
use matcher_backend::{routes, telemetry};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "startup.config_invalid");
            std::process::exit(1);
        }
    };

    // The dataset is a hard startup precondition: no dataset, no server.
    let app_state = match build_state()
        .with_dataset_path(config.dataset_path.clone())
        .with_game_config(config.game.clone())
        .build()
    {
        Ok(state) => state,
        Err(e) => {
            error!(
                error = %e,
                path = %config.dataset_path.display(),
                "startup.dataset_unavailable"
            );
            std::process::exit(1);
        }
    };

    info!(
        host = %config.host,
        port = config.port,
        categories = app_state.dataset.len(),
        "OWASP LLM Top 10 matcher running at http://{}:{}",
        config.host,
        config.port
    );

    let data = web::Data::new(app_state);
    let limiter_backend = InMemoryBackend::builder().build();
    let check_per_minute = config.check_rate_limit_per_minute;

    HttpServer::new(move || {
        let backend = limiter_backend.clone();
        App::new()
            .wrap(cors_middleware())
            .wrap(SecurityHeaders)
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(|cfg| routes::configure_with_limits(cfg, backend, check_per_minute))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
