use super::health;
use axum::extract::FromRef;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use vhub_database::SharedExecutor;

/// Liveness and readiness probes.
pub fn system_router<S>() -> OpenApiRouter<S>
where
    S: Send + Sync + Clone + 'static,
    SharedExecutor: FromRef<S>,
{
    OpenApiRouter::<S>::new()
        .routes(routes!(health::health_handler))
        .routes(routes!(health::readiness_handler))
}
