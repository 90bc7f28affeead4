use super::error::{ApiError, ErrorBody, StatusCode};
use axum::extract::State;
use axum::http::header;
use axum::{Json, response::IntoResponse};
use std::sync::LazyLock;
use std::time::Instant;
use tracing::warn;
use vhub_database::SharedExecutor;
use vhub_derive::{api_handler, api_model};
use vhub_domain::constants::SYSTEM_TAG;

fn no_cache() -> [(header::HeaderName, &'static str); 2] {
    [(header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"), (header::PRAGMA, "no-cache")]
}

#[api_model]
/// Liveness report
pub(super) struct HealthResponse {
    /// Always `up` while the process serves requests
    status: &'static str,
    /// Crate version
    version: &'static str,
    /// Uptime in seconds
    uptime: u64,
}

#[api_model]
/// Readiness report
pub(super) struct ReadinessResponse {
    /// `ready` when every dependency answered
    status: &'static str,
    /// Database round trip result
    database: &'static str,
}

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

#[api_handler(
    get,
    path = "/health",
    responses((status = OK, description = "Liveness probe", body = HealthResponse)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn health_handler() -> impl IntoResponse {
    let body = HealthResponse {
        status: "up",
        version: env!("CARGO_PKG_VERSION"),
        uptime: START_TIME.elapsed().as_secs(),
    };

    (no_cache(), Json(body))
}

#[api_handler(
    get,
    path = "/ready",
    responses(
        (status = OK, description = "Database reachable", body = ReadinessResponse),
        (status = SERVICE_UNAVAILABLE, description = "Database unreachable", body = ErrorBody),
    ),
    tag = SYSTEM_TAG,
)]
pub(super) async fn readiness_handler(
    State(database): State<SharedExecutor>,
) -> Result<impl IntoResponse, ApiError> {
    if let Err(e) = database.ping().await {
        warn!(error = %e, "Readiness probe failed");
        return Err(ApiError::new(StatusCode::SERVICE_UNAVAILABLE, "Database unavailable"));
    }

    Ok((no_cache(), Json(ReadinessResponse { status: "ready", database: "up" })))
}
