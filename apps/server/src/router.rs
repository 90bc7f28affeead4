use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};
use vhub::kernel::prelude::ApiState;
use vhub::server::router::{feature_router, system_router};

#[derive(OpenApi)]
#[openapi(info(title = "Vendor Hub API"))]
struct ApiDoc;

/// Mount point of the interactive API reference.
pub(crate) const DOCS_PATH: &str = "/docs";

pub(crate) fn init(state: ApiState) -> Router {
    let api = ApiDoc::openapi();

    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(api)
        .merge(system_router())
        .merge(feature_router(&state))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    Router::new().merge(openapi_routes).merge(Scalar::with_url(DOCS_PATH, api_doc))
}
