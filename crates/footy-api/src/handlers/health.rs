//! GET /v1/ — liveness probe.

/// Handle `GET /v1/` with a fixed literal body.
pub async fn check() -> &'static str {
    "I'm alive"
}
