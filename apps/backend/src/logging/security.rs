use tracing::warn;

use crate::web::trace_ctx;

/// Log a security-relevant rate-limit event.
pub fn rate_limit_hit(endpoint: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_RATE_LIMIT_HIT",
        %trace_id,
        endpoint,
        "Rate limit exceeded"
    );
}
