use actix_extensible_rate_limit::backend::memory::InMemoryBackend;
use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use matcher_backend::middleware::{RequestTrace, SecurityHeaders, StructuredLogger, TraceSpan};
use matcher_backend::routes;
use matcher_backend::AppState;

/// Type alias for route configuration functions
type RouteConfigFn = Box<dyn FnOnce(&mut web::ServiceConfig)>;

enum RouteSetup {
    Prod,
    ProdWithCheckLimit(u64),
    Custom(RouteConfigFn),
}

/// Builder for creating test Actix service instances
///
/// Wires the same middleware stack as `main.rs` (CORS aside) so headers and
/// trace ids can be asserted end to end.
pub struct TestAppBuilder {
    state: AppState,
    routes: RouteSetup,
}

impl TestAppBuilder {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            routes: RouteSetup::Prod,
        }
    }

    /// Production routes without rate limiting (the default)
    pub fn with_prod_routes(mut self) -> Self {
        self.routes = RouteSetup::Prod;
        self
    }

    /// Production routes with `/check` limited to `per_minute` per IP
    pub fn with_check_limit(mut self, per_minute: u64) -> Self {
        self.routes = RouteSetup::ProdWithCheckLimit(per_minute);
        self
    }

    /// Custom routes
    pub fn with_routes<F>(mut self, config_fn: F) -> Self
    where
        F: FnOnce(&mut web::ServiceConfig) + 'static,
    {
        self.routes = RouteSetup::Custom(Box::new(config_fn));
        self
    }

    pub async fn build(
        self,
    ) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
        let data = web::Data::new(self.state);
        let route_setup = self.routes;

        test::init_service(
            App::new()
                .wrap(SecurityHeaders)
                .wrap(StructuredLogger)
                .wrap(TraceSpan)
                .wrap(RequestTrace)
                .app_data(data)
                .configure(move |cfg| match route_setup {
                    RouteSetup::Prod => routes::configure(cfg),
                    RouteSetup::ProdWithCheckLimit(per_minute) => routes::configure_with_limits(
                        cfg,
                        InMemoryBackend::builder().build(),
                        per_minute,
                    ),
                    RouteSetup::Custom(config_fn) => config_fn(cfg),
                }),
        )
        .await
    }
}

pub fn create_test_app(state: AppState) -> TestAppBuilder {
    TestAppBuilder::new(state)
}
