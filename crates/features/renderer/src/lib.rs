//! Image renderer slice.
//!
//! [`compose`] maps a [`FeatureSet`](avatar_domain::FeatureSet) onto fixed per-feature SVG
//! fragments and [`rasterize`] scales the result onto a PNG canvas with `resvg`.
//! Composition is infallible; every rasterization failure is a
//! [`RenderError::Rasterization`].

mod compose;
mod error;
mod palette;
mod parts;
mod raster;

pub use crate::compose::{CANVAS_HEIGHT, CANVAS_WIDTH, VectorDocument, compose, marker};
pub use crate::error::{RenderError, RenderErrorExt};
pub use crate::raster::{
    Dimensions, MAX_RASTER_EDGE, RasterImage, XML_PREAMBLE, rasterize, rasterize_svg,
    with_preamble,
};
