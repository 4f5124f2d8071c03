use crate::compose::VectorDocument;
use crate::error::{RenderError, RenderErrorExt};
use avatar_domain::constants::DEFAULT_RASTER_SIZE;
use resvg::{tiny_skia, usvg};
use std::borrow::Cow;
use tracing::debug;

/// XML declaration supplied when the markup lacks one.
pub const XML_PREAMBLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Hard ceiling on either raster edge, whatever the configured limit says.
pub const MAX_RASTER_EDGE: u32 = 16_384;

/// Target raster size in pixels. Both edges are within `1..=MAX_RASTER_EDGE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self { width: DEFAULT_RASTER_SIZE, height: DEFAULT_RASTER_SIZE }
    }
}

impl Dimensions {
    /// # Errors
    /// Returns [`RenderError::Rasterization`] for zero, negative or oversized edges.
    pub fn new(width: i64, height: i64) -> Result<Self, RenderError> {
        Ok(Self { width: edge("width", width)?, height: edge("height", height)? })
    }

    /// Builds dimensions from raw query text.
    ///
    /// Text is read like a lenient integer parse: optional sign, then leading digits, the
    /// rest ignored (`"64px"` is 64). Missing text or text without leading digits falls
    /// back to `fallback`; anything that does parse is validated by [`Dimensions::new`].
    ///
    /// # Errors
    /// See [`Dimensions::new`].
    pub fn from_query(
        width: Option<&str>,
        height: Option<&str>,
        fallback: Self,
    ) -> Result<Self, RenderError> {
        let width = width.and_then(leading_int).unwrap_or_else(|| i64::from(fallback.width));
        let height = height.and_then(leading_int).unwrap_or_else(|| i64::from(fallback.height));
        Self::new(width, height)
    }

    /// Rejects sizes beyond a configured per-edge maximum.
    ///
    /// # Errors
    /// Returns [`RenderError::Rasterization`] if either edge exceeds `max`.
    pub fn limit(self, max: u32) -> Result<Self, RenderError> {
        if self.width > max || self.height > max {
            return Err(RenderError::rasterization(format!(
                "{}x{} exceeds the maximum edge of {max}px",
                self.width, self.height
            )));
        }
        Ok(self)
    }

    #[must_use]
    pub const fn width(self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(self) -> u32 {
        self.height
    }
}

fn edge(name: &str, value: i64) -> Result<u32, RenderError> {
    u32::try_from(value)
        .ok()
        .filter(|v| (1..=MAX_RASTER_EDGE).contains(v))
        .ok_or_else(|| {
            RenderError::rasterization(format!(
                "{name} must be within 1..={MAX_RASTER_EDGE}, got {value}"
            ))
        })
}

fn leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (sign, digits) = match text.as_bytes().first() {
        Some(b'-') => (-1, &text[1..]),
        Some(b'+') => (1, &text[1..]),
        _ => (1, text),
    };
    let end = digits.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }
    // Absurdly long digit runs saturate and then fail the range check.
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * magnitude)
}

/// An encoded PNG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Rasterizes a composed document to a PNG of exactly `dims`.
///
/// # Errors
/// See [`rasterize_svg`].
pub fn rasterize(doc: &VectorDocument, dims: Dimensions) -> Result<RasterImage, RenderError> {
    rasterize_svg(doc.as_str(), dims)
}

/// Rasterizes SVG markup to a PNG of exactly `dims`.
///
/// The whole view box is scaled onto the canvas, non-uniformly if the aspect ratios
/// differ, so nothing is cropped. An XML preamble is prepended when missing.
///
/// # Errors
/// Returns [`RenderError::Rasterization`] if the markup does not parse, has an empty
/// size, or the PNG cannot be encoded.
#[allow(clippy::cast_precision_loss)]
pub fn rasterize_svg(markup: &str, dims: Dimensions) -> Result<RasterImage, RenderError> {
    let markup = with_preamble(markup);
    let tree = usvg::Tree::from_str(&markup, &usvg::Options::default())
        .map_err(|e| RenderError::rasterization(e.to_string()))
        .context("Parsing vector document")?;

    let size = tree.size();
    let mut pixmap = tiny_skia::Pixmap::new(dims.width, dims.height)
        .ok_or_else(|| RenderError::rasterization("failed to allocate pixmap"))?;

    let sx = dims.width as f32 / size.width();
    let sy = dims.height as f32 / size.height();
    resvg::render(&tree, tiny_skia::Transform::from_scale(sx, sy), &mut pixmap.as_mut());

    let bytes = pixmap
        .encode_png()
        .map_err(|e| RenderError::rasterization(e.to_string()))
        .context("Encoding PNG")?;

    debug!(width = dims.width, height = dims.height, bytes = bytes.len(), "Rasterized avatar");
    Ok(RasterImage { bytes, width: dims.width, height: dims.height })
}

/// Prepends [`XML_PREAMBLE`] unless the markup already starts with an XML declaration.
///
/// A leading byte-order mark and whitespace are dropped either way, since nothing may
/// precede the declaration.
#[must_use]
pub fn with_preamble(markup: &str) -> Cow<'_, str> {
    let trimmed = markup.trim_start_matches(|c: char| c == '\u{FEFF}' || c.is_whitespace());
    if trimmed.starts_with("<?xml") {
        Cow::Borrowed(trimmed)
    } else {
        Cow::Owned(format!("{XML_PREAMBLE}{trimmed}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_reject_non_positive_and_huge_edges() {
        assert!(Dimensions::new(0, 10).is_err());
        assert!(Dimensions::new(10, -5).is_err());
        assert!(Dimensions::new(i64::from(MAX_RASTER_EDGE) + 1, 10).is_err());
        assert_eq!(Dimensions::new(1, 1).unwrap().width(), 1);
    }

    #[test]
    fn query_text_is_parsed_leniently() {
        let fallback = Dimensions::default();
        let dims = Dimensions::from_query(Some("64"), Some("48px"), fallback).unwrap();
        assert_eq!((dims.width(), dims.height()), (64, 48));

        let dims = Dimensions::from_query(Some("abc"), None, fallback).unwrap();
        assert_eq!((dims.width(), dims.height()), (300, 300));

        let dims = Dimensions::from_query(Some(" +12"), Some(""), fallback).unwrap();
        assert_eq!((dims.width(), dims.height()), (12, 300));

        assert!(Dimensions::from_query(Some("0"), None, fallback).is_err());
        assert!(Dimensions::from_query(Some("-3"), None, fallback).is_err());
        assert!(Dimensions::from_query(Some("99999999999999999999999"), None, fallback).is_err());
    }

    #[test]
    fn limit_applies_configured_maximum() {
        let dims = Dimensions::new(1024, 512).unwrap();
        assert!(dims.limit(1024).is_ok());
        let err = dims.limit(1000).unwrap_err();
        assert!(err.to_string().contains("exceeds the maximum edge of 1000px"), "{err}");
    }

    #[test]
    fn preamble_is_added_once() {
        let bare = "<svg/>";
        let prefixed = with_preamble(bare);
        assert_eq!(prefixed, format!("{XML_PREAMBLE}<svg/>"));
        assert_eq!(with_preamble(&prefixed), prefixed);
        assert!(matches!(with_preamble(&prefixed), Cow::Borrowed(_)));
    }

    #[test]
    fn byte_order_mark_is_dropped() {
        let declared = format!("\u{FEFF}{XML_PREAMBLE}<svg/>");
        assert_eq!(with_preamble(&declared), format!("{XML_PREAMBLE}<svg/>"));

        let bare = with_preamble("\u{FEFF}\n<svg/>");
        assert_eq!(bare, format!("{XML_PREAMBLE}<svg/>"));
        assert_eq!(bare.matches("<?xml").count(), 1);
    }
}
