use avatar_domain::catalog::{AvatarStyle, ClotheColor, EyeType, SkinColor, TopType};
use avatar_domain::{AvatarOptions, Feature, FeatureSet};
use avatar_renderer::{
    Dimensions, RenderError, XML_PREAMBLE, compose, marker, rasterize, rasterize_svg,
};
use strum::VariantArray;

fn with(feature: Feature, variant: &str) -> FeatureSet {
    let options = AvatarOptions::from([(feature.key().to_owned(), variant.to_owned())]);
    avatar_resolver::explicit(&options).unwrap()
}

fn decode(bytes: &[u8]) -> image::DynamicImage {
    image::load_from_memory_with_format(bytes, image::ImageFormat::Png).unwrap()
}

#[test]
fn every_variant_is_marked_in_the_document() {
    for &feature in Feature::VARIANTS {
        for &variant in feature.variants() {
            let doc = compose(&with(feature, variant));
            let expected = marker(feature, variant);
            assert!(doc.as_str().contains(&expected), "{feature}={variant}: missing {expected}");

            for &other in feature.variants().iter().filter(|&&v| v != variant) {
                assert!(
                    !doc.as_str().contains(&marker(feature, other)),
                    "{feature}={variant}: unexpected marker for {other}"
                );
            }
        }
    }
}

#[test]
fn every_variant_rasterizes() {
    let dims = Dimensions::new(32, 32).unwrap();
    for &feature in Feature::VARIANTS {
        for &variant in feature.variants() {
            let image = rasterize(&compose(&with(feature, variant)), dims)
                .unwrap_or_else(|e| panic!("{feature}={variant}: {e}"));
            assert_eq!((image.width, image.height), (32, 32));
        }
    }
}

#[test]
fn composition_is_deterministic() {
    let set = FeatureSet {
        top_type: TopType::LongHairFroBand,
        skin_color: SkinColor::DarkBrown,
        clothe_color: ClotheColor::PastelGreen,
        ..FeatureSet::default()
    };
    assert_eq!(compose(&set), compose(&set));

    let dims = Dimensions::default();
    assert_eq!(rasterize(&compose(&set), dims).unwrap(), rasterize(&compose(&set), dims).unwrap());
}

#[test]
fn default_set_carries_every_default_marker() {
    let doc = compose(&FeatureSet::default());
    for &feature in Feature::VARIANTS {
        assert!(doc.as_str().contains(&marker(feature, feature.default_variant())), "{feature}");
    }
}

#[test]
fn raster_matches_requested_size() {
    let doc = compose(&FeatureSet::default());
    for (width, height) in [(1, 1), (300, 300), (1024, 1024), (64, 32), (40, 120)] {
        let image = rasterize(&doc, Dimensions::new(width, height).unwrap()).unwrap();
        let decoded = decode(&image.bytes);
        assert_eq!(u32::try_from(width).unwrap(), decoded.width());
        assert_eq!(u32::try_from(height).unwrap(), decoded.height());
    }
}

#[test]
fn whole_canvas_is_scaled_without_cropping() {
    // The circle backdrop reaches the bottom edge of the canvas; a cropped render would
    // leave the bottom row empty.
    let doc = compose(&FeatureSet::default());
    let decoded = decode(&rasterize(&doc, Dimensions::new(66, 35).unwrap()).unwrap().bytes);
    let rgba = decoded.to_rgba8();
    let bottom_painted = (0..rgba.width()).any(|x| rgba.get_pixel(x, rgba.height() - 1)[3] > 0);
    assert!(bottom_painted);
}

#[test]
fn transparent_style_leaves_corners_clear() {
    let set = FeatureSet { avatar_style: AvatarStyle::Transparent, ..FeatureSet::default() };
    let decoded = decode(&rasterize(&compose(&set), Dimensions::default()).unwrap().bytes);
    assert_eq!(decoded.to_rgba8().get_pixel(0, 0)[3], 0);
}

#[test]
fn preamble_does_not_change_output() {
    let set = FeatureSet { eye_type: EyeType::Hearts, ..FeatureSet::default() };
    let doc = compose(&set);
    let dims = Dimensions::new(48, 48).unwrap();

    let bare = rasterize_svg(doc.as_str(), dims).unwrap();
    let prefixed = rasterize_svg(&format!("{XML_PREAMBLE}{doc}"), dims).unwrap();
    assert_eq!(bare, prefixed);
}

#[test]
fn byte_order_mark_does_not_break_parsing() {
    let doc = compose(&FeatureSet::default());
    let dims = Dimensions::new(24, 24).unwrap();
    let plain = rasterize_svg(doc.as_str(), dims).unwrap();

    let declared = rasterize_svg(&format!("\u{FEFF}{XML_PREAMBLE}{doc}"), dims).unwrap();
    assert_eq!(declared, plain);
    let bare = rasterize_svg(&format!("\u{FEFF}{doc}"), dims).unwrap();
    assert_eq!(bare, plain);
}

#[test]
fn malformed_markup_fails() {
    let err = rasterize_svg("<svg><g></svg>", Dimensions::default()).unwrap_err();
    assert!(matches!(err, RenderError::Rasterization { .. }));
    assert!(err.to_string().starts_with("Rasterization failed (Parsing vector document)"), "{err}");

    assert!(rasterize_svg("not markup at all", Dimensions::default()).is_err());
}

#[test]
fn unusable_dimensions_fail() {
    assert!(Dimensions::new(0, 300).is_err());
    assert!(Dimensions::new(300, -1).is_err());
    let err = Dimensions::from_query(Some("0"), Some("0"), Dimensions::default()).unwrap_err();
    assert_eq!(err.kind(), "Rasterization");
}
