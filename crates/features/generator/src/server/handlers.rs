use super::params::{FeatureParams, RasterParams};
use crate::{GenerateError, generate_png, generate_svg, random_png, take_dimensions};
use avatar_derive::api_handler;
use avatar_domain::AvatarOptions;
use avatar_domain::config::ApiConfig;
use avatar_domain::constants::{AVATAR_TAG, PNG_CONTENT_TYPE, SVG_CONTENT_TYPE};
use avatar_kernel::prelude::{ApiError, ErrorBody};
use avatar_renderer::{RasterImage, VectorDocument};
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

/// Which route failed; picks the fixed message returned on server errors.
#[derive(Debug, Clone, Copy)]
enum Operation {
    Avatar,
    AvatarPng,
    RandomAvatar,
    RandomAvatarPng,
}

impl Operation {
    const fn failure(self) -> &'static str {
        match self {
            Self::Avatar => "Failed to generate avatar",
            Self::AvatarPng => "Failed to generate PNG avatar",
            Self::RandomAvatar => "Failed to generate random avatar",
            Self::RandomAvatarPng => "Failed to generate random PNG avatar",
        }
    }

    /// Logs `err` and maps it to the public response.
    fn reject(self, err: &GenerateError) -> ApiError {
        match err {
            GenerateError::InvalidOption { source, .. } => {
                warn!(kind = err.kind(), "{source}");
                ApiError::bad_request(source.to_string())
            }
            _ => {
                error!(kind = err.kind(), error = %err, "{}", self.failure());
                ApiError::internal(self.failure())
            }
        }
    }
}

fn svg(doc: VectorDocument) -> Response {
    ([(header::CONTENT_TYPE, SVG_CONTENT_TYPE)], doc.into_string()).into_response()
}

fn png(image: RasterImage) -> Response {
    ([(header::CONTENT_TYPE, PNG_CONTENT_TYPE)], image.bytes).into_response()
}

#[api_handler(
    get,
    path = "/avatar",
    params(FeatureParams),
    responses(
        (status = OK, description = "Composed avatar", content_type = "image/svg+xml", body = String),
        (status = BAD_REQUEST, description = "A value is not in the catalog", body = ErrorBody),
        (status = INTERNAL_SERVER_ERROR, description = "Generation failed", body = ErrorBody),
    ),
    tag = AVATAR_TAG,
)]
pub(super) async fn avatar_svg(
    Query(options): Query<AvatarOptions>,
) -> Result<Response, ApiError> {
    let op = Operation::Avatar;
    generate_svg(&options).map(svg).map_err(|e| op.reject(&e))
}

#[api_handler(
    get,
    path = "/avatar.png",
    params(FeatureParams, RasterParams),
    responses(
        (status = OK, description = "Rasterized avatar", content_type = "image/png", body = Vec<u8>),
        (status = BAD_REQUEST, description = "A value is not in the catalog", body = ErrorBody),
        (status = INTERNAL_SERVER_ERROR, description = "Generation failed", body = ErrorBody),
    ),
    tag = AVATAR_TAG,
)]
pub(super) async fn avatar_png(
    State(config): State<ApiConfig>,
    Query(mut options): Query<AvatarOptions>,
) -> Result<Response, ApiError> {
    let op = Operation::AvatarPng;
    let dims = take_dimensions(&mut options, &config.render).map_err(|e| op.reject(&e))?;
    generate_png(&options, dims).await.map(png).map_err(|e| op.reject(&e))
}

#[api_handler(
    get,
    path = "/random-avatar",
    responses(
        (status = OK, description = "Random avatar", content_type = "image/svg+xml", body = String),
        (status = INTERNAL_SERVER_ERROR, description = "Generation failed", body = ErrorBody),
    ),
    tag = AVATAR_TAG,
)]
pub(super) async fn random_avatar_svg() -> Result<Response, ApiError> {
    let op = Operation::RandomAvatar;
    generate_svg(&AvatarOptions::new()).map(svg).map_err(|e| op.reject(&e))
}

#[api_handler(
    get,
    path = "/random-avatar.png",
    params(RasterParams),
    responses(
        (status = OK, description = "Random rasterized avatar", content_type = "image/png", body = Vec<u8>),
        (status = INTERNAL_SERVER_ERROR, description = "Generation failed", body = ErrorBody),
    ),
    tag = AVATAR_TAG,
)]
pub(super) async fn random_avatar_png(
    State(config): State<ApiConfig>,
    Query(mut options): Query<AvatarOptions>,
) -> Result<Response, ApiError> {
    let op = Operation::RandomAvatarPng;
    let dims = take_dimensions(&mut options, &config.render).map_err(|e| op.reject(&e))?;
    random_png(dims).await.map(png).map_err(|e| op.reject(&e))
}
