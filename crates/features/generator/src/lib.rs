//! Avatar generation slice.
//!
//! Glues the resolver and the renderer together: sparse options become a
//! [`FeatureSet`](avatar_domain::FeatureSet), the set becomes a [`VectorDocument`], and
//! for PNG output the document is rasterized on Tokio's blocking pool. With the `server`
//! feature the crate also exposes the four avatar routes through
//! [`server::avatar_router`].

mod error;
#[cfg(feature = "server")]
pub mod server;

pub use crate::error::{GenerateError, GenerateErrorExt};

use avatar_domain::config::RenderConfig;
use avatar_domain::constants::{HEIGHT_PARAM, WIDTH_PARAM};
use avatar_domain::AvatarOptions;
use avatar_renderer::{Dimensions, RasterImage, VectorDocument, compose, rasterize};
use rand::Rng;
use tracing::debug;

/// Resolves `options` and composes the matching document.
///
/// # Errors
/// Returns [`GenerateError::InvalidOption`] if a supplied value is outside the catalog.
pub fn generate_svg(options: &AvatarOptions) -> Result<VectorDocument, GenerateError> {
    generate_svg_with(options, &mut rand::rng())
}

/// Same as [`generate_svg`], drawing from `rng` when `options` is empty.
///
/// # Errors
/// See [`generate_svg`].
pub fn generate_svg_with<R>(
    options: &AvatarOptions,
    rng: &mut R,
) -> Result<VectorDocument, GenerateError>
where
    R: Rng + ?Sized,
{
    let set = avatar_resolver::resolve_with(options, rng)?;
    Ok(compose(&set))
}

/// Composes a fully random avatar.
#[must_use]
pub fn random_svg() -> VectorDocument {
    random_svg_with(&mut rand::rng())
}

#[must_use]
pub fn random_svg_with<R>(rng: &mut R) -> VectorDocument
where
    R: Rng + ?Sized,
{
    compose(&avatar_resolver::random_with(rng))
}

/// Resolves `options`, composes and rasterizes to `dims`.
///
/// # Errors
/// Returns [`GenerateError::InvalidOption`] for catalog violations and
/// [`GenerateError::Render`] or [`GenerateError::Task`] when rasterization fails.
pub async fn generate_png(
    options: &AvatarOptions,
    dims: Dimensions,
) -> Result<RasterImage, GenerateError> {
    let doc = generate_svg(options)?;
    rasterize_blocking(doc, dims).await
}

/// Rasterizes a fully random avatar to `dims`.
///
/// # Errors
/// See [`rasterize_blocking`].
pub async fn random_png(dims: Dimensions) -> Result<RasterImage, GenerateError> {
    let doc = random_svg();
    rasterize_blocking(doc, dims).await
}

/// Rasterizes `doc` on the blocking pool; the async worker only awaits the result.
///
/// # Errors
/// Returns [`GenerateError::Render`] if rasterization fails and [`GenerateError::Task`]
/// if the blocking task dies.
pub async fn rasterize_blocking(
    doc: VectorDocument,
    dims: Dimensions,
) -> Result<RasterImage, GenerateError> {
    let image = tokio::task::spawn_blocking(move || rasterize(&doc, dims))
        .await
        .context("Awaiting rasterization")??;
    debug!(width = image.width, height = image.height, "Generated PNG avatar");
    Ok(image)
}

/// Removes `width`/`height` from `options` and turns them into raster dimensions.
///
/// The keys are always removed, so a request that only sizes the output resolves in
/// random mode. Missing or non-numeric text falls back to the configured defaults.
///
/// # Errors
/// Returns [`GenerateError::Render`] for zero, negative or oversized edges.
pub fn take_dimensions(
    options: &mut AvatarOptions,
    render: &RenderConfig,
) -> Result<Dimensions, GenerateError> {
    let width = options.remove(WIDTH_PARAM);
    let height = options.remove(HEIGHT_PARAM);
    let fallback = Dimensions::new(i64::from(render.default_width), i64::from(render.default_height))
        .context("Configured default size")?;

    let dims = Dimensions::from_query(width.as_deref(), height.as_deref(), fallback)
        .and_then(|dims| dims.limit(render.max_dimension))?;
    Ok(dims)
}
