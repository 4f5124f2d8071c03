//! Fixed lookup tables from catalog variant to SVG fragment.
//!
//! Every function here is total over its enum and writes nothing but markup; the
//! wrapping `<g>` with the marker `id` is the composer's job. Coordinates are in the
//! 264 × 280 canvas: head centered at (132, 112), eyes at x = 110 / 154.

pub(crate) mod accessories;
pub(crate) mod clothing;
pub(crate) mod face;
pub(crate) mod facial_hair;
pub(crate) mod top;

/// Shared stroke for line-drawn facial features.
const INK_STROKE: &str = r##"stroke="#000000" stroke-opacity="0.6" stroke-width="4" stroke-linecap="round" fill="none""##;
/// Shared fill for solid facial features.
const INK_FILL: &str = r##"fill="#000000" fill-opacity="0.6""##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_and_fill_share_one_ink() {
        let ink = |attrs: &str| {
            let start = attrs.find('#').unwrap();
            attrs[start..start + 7].to_owned()
        };
        assert_eq!(ink(INK_STROKE), "#000000");
        assert_eq!(ink(INK_STROKE), ink(INK_FILL));
        assert!(INK_STROKE.contains(r#"stroke-opacity="0.6""#));
        assert!(INK_FILL.contains(r#"fill-opacity="0.6""#));
    }
}
