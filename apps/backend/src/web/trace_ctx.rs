//! Task-local trace id for the request currently being handled.
//!
//! `RequestTrace` opens the scope; error rendering and security logging read
//! it so every response and log line can be correlated without threading
//! the id through handler signatures.

use tokio::task_local;

/// Placeholder used when no request scope is active.
pub const UNKNOWN_TRACE_ID: &str = "unknown";

task_local! {
    static TRACE_ID: String;
}

/// Trace id of the current request, or [`UNKNOWN_TRACE_ID`] outside one.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| UNKNOWN_TRACE_ID.to_string())
}

/// Run `future` with `trace_id` visible through [`trace_id()`].
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
