use avatar_domain::catalog::{EyeType, SkinColor, TopType};
use avatar_domain::{Feature, FeatureSet};
use serde_json::json;
use strum::VariantArray;

#[test]
fn catalog_has_eleven_non_empty_features() {
    assert_eq!(Feature::VARIANTS.len(), 11);
    for feature in Feature::VARIANTS {
        assert!(!feature.variants().is_empty(), "{feature} has no variants");
        assert!(
            feature.accepts(feature.default_variant()),
            "default of {feature} must be one of its variants"
        );
    }
}

#[test]
fn catalog_sizes_match_the_published_enumerations() {
    let sizes: Vec<(&str, usize)> =
        Feature::VARIANTS.iter().map(|f| (f.key(), f.variants().len())).collect();
    assert_eq!(
        sizes,
        vec![
            ("avatarStyle", 2),
            ("topType", 35),
            ("accessoriesType", 7),
            ("hairColor", 10),
            ("facialHairType", 6),
            ("clotheType", 9),
            ("clotheColor", 15),
            ("eyeType", 12),
            ("eyebrowType", 12),
            ("mouthType", 12),
            ("skinColor", 7),
        ]
    );
}

#[test]
fn defaults_match_the_documented_table() {
    let defaults: Vec<&str> = Feature::VARIANTS.iter().map(|f| f.default_variant()).collect();
    assert_eq!(
        defaults,
        vec![
            "Circle",
            "ShortHairShortRound",
            "Blank",
            "BrownDark",
            "Blank",
            "Hoodie",
            "Black",
            "Default",
            "Default",
            "Default",
            "Light",
        ]
    );

    let set = FeatureSet::default();
    for feature in Feature::VARIANTS {
        assert_eq!(set.get(*feature), feature.default_variant());
    }
}

#[test]
fn feature_set_serializes_with_query_keys() {
    let set = FeatureSet {
        skin_color: SkinColor::Black,
        eye_type: EyeType::Happy,
        top_type: TopType::LongHairBob,
        ..FeatureSet::default()
    };

    let value = serde_json::to_value(set).expect("serialize");
    assert_eq!(value["skinColor"], json!("Black"));
    assert_eq!(value["eyeType"], json!("Happy"));
    assert_eq!(value["topType"], json!("LongHairBob"));

    let back: FeatureSet = serde_json::from_value(value).expect("deserialize");
    assert_eq!(back, set);
}

#[test]
fn feature_set_rejects_unknown_fields() {
    let mut value = serde_json::to_value(FeatureSet::default()).expect("serialize");
    value["hatColor"] = json!("Red");
    assert!(serde_json::from_value::<FeatureSet>(value).is_err());
}
