use avatar::kernel::prelude::ApiState;
use avatar::server::router::{avatar_router, system_router};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

pub(crate) const DOCS_PATH: &str = "/api-docs";
pub(crate) const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "Avatar API", description = "Composable cartoon avatars as SVG or PNG"),
    tags(
        (name = "Avatar", description = "Avatar generation"),
        (name = "System", description = "Service health"),
    )
)]
struct ApiDoc;

pub(crate) fn init(state: ApiState) -> Router {
    let static_dir = state.config.storage.static_dir.clone();

    // Separate the OpenAPI routes and the API documentation object
    let (api_routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(system_router())
        .merge(avatar_router())
        .with_state(state)
        .split_for_parts();

    let spec = api_doc.clone();
    let openapi_json = Router::new().route(
        OPENAPI_PATH,
        get(move || {
            let spec = spec.clone();
            async move { Json(spec) }
        }),
    );

    Router::new()
        .merge(api_routes)
        .merge(Scalar::with_url(DOCS_PATH, api_doc))
        .merge(openapi_json)
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
