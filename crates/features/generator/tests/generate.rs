use avatar_domain::{AvatarOptions, Feature};
use avatar_generator::{
    GenerateError, generate_png, generate_svg, generate_svg_with, random_png, random_svg_with,
    rasterize_blocking,
};
use avatar_renderer::{Dimensions, marker};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn options(pairs: &[(&str, &str)]) -> AvatarOptions {
    pairs.iter().map(|&(k, v)| (k.to_owned(), v.to_owned())).collect()
}

#[test]
fn explicit_options_reach_the_document() {
    let doc = generate_svg(&options(&[("skinColor", "Black"), ("eyeType", "Happy")])).unwrap();
    assert!(doc.as_str().contains(&marker(Feature::SkinColor, "Black")));
    assert!(doc.as_str().contains(&marker(Feature::EyeType, "Happy")));
    assert!(doc.as_str().contains(&marker(Feature::TopType, "ShortHairShortRound")));
}

#[test]
fn seeded_generation_is_reproducible() {
    let a = generate_svg_with(&AvatarOptions::new(), &mut StdRng::seed_from_u64(7)).unwrap();
    let b = generate_svg_with(&AvatarOptions::new(), &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(a, b);
    assert_eq!(random_svg_with(&mut StdRng::seed_from_u64(7)), a);
}

#[test]
fn invalid_value_names_feature_and_value() {
    let err = generate_svg(&options(&[("hairColor", "Green")])).unwrap_err();
    let GenerateError::InvalidOption { source, .. } = &err else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(source.to_string(), "Invalid value 'Green' for option 'hairColor'");
}

#[tokio::test]
async fn png_has_requested_size() {
    let dims = Dimensions::new(64, 40).unwrap();
    let image = generate_png(&options(&[("avatarStyle", "Transparent")]), dims).await.unwrap();
    let decoded = image::load_from_memory(&image.bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (64, 40));
}

#[tokio::test]
async fn random_png_decodes() {
    let image = random_png(Dimensions::default()).await.unwrap();
    assert_eq!((image.width, image.height), (300, 300));
    assert!(image::load_from_memory(&image.bytes).is_ok());
}

#[tokio::test]
async fn blocking_rasterization_reports_render_errors() {
    let doc = generate_svg(&options(&[("mouthType", "Smile")])).unwrap();
    let image = rasterize_blocking(doc, Dimensions::new(16, 16).unwrap()).await.unwrap();
    assert_eq!(image.width, 16);
}
