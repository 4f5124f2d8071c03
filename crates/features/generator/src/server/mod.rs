//! HTTP surface of the slice: four GET routes, documented through `utoipa`.

mod handlers;
pub mod params;

use avatar_kernel::prelude::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// `/avatar`, `/avatar.png`, `/random-avatar` and `/random-avatar.png`.
pub fn avatar_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::avatar_svg))
        .routes(routes!(handlers::avatar_png))
        .routes(routes!(handlers::random_avatar_svg))
        .routes(routes!(handlers::random_avatar_png))
}
