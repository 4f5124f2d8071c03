use avatar_domain::{AvatarOptions, Feature, FeatureSet};
use avatar_resolver::{ResolveError, explicit, random_with, resolve, resolve_with};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use strum::VariantArray;

const DRAWS: usize = 2_000;

#[test]
fn random_draws_are_catalog_members_and_cover_every_variant() {
    let mut rng = StdRng::seed_from_u64(0x00A7_A7A2);
    let sets: Vec<FeatureSet> = (0..DRAWS).map(|_| random_with(&mut rng)).collect();

    for feature in Feature::VARIANTS {
        let seen: HashSet<&str> = sets.iter().map(|set| set.get(*feature)).collect();
        assert!(seen.iter().all(|v| feature.accepts(v)), "{feature} drew a foreign value");
        // 2000 draws over at most 35 variants: missing one is astronomically unlikely.
        assert_eq!(seen.len(), feature.variants().len(), "{feature} never drew some variants");
    }

    let distinct: HashSet<String> = sets.iter().map(ToString::to_string).collect();
    assert!(distinct.len() > DRAWS / 2, "random sets should rarely repeat");
}

#[test]
fn thread_local_generator_varies() {
    let distinct: HashSet<String> =
        (0..16).map(|_| resolve(&AvatarOptions::new()).unwrap().to_string()).collect();
    assert!(distinct.len() > 1);
}

#[test]
fn every_catalog_value_is_accepted_explicitly() {
    for feature in Feature::VARIANTS {
        for variant in feature.variants() {
            let options = AvatarOptions::from([(feature.key().to_owned(), (*variant).to_owned())]);
            let set = explicit(&options).unwrap();
            assert_eq!(set.get(*feature), *variant);
        }
    }
}

#[test]
fn first_invalid_feature_in_catalog_order_is_reported() {
    let options = AvatarOptions::from([
        ("skinColor".to_owned(), "Green".to_owned()),
        ("topType".to_owned(), "Crown".to_owned()),
    ]);
    let mut rng = StdRng::seed_from_u64(1);
    let err = resolve_with(&options, &mut rng).unwrap_err();
    assert!(matches!(
        err,
        ResolveError::InvalidOption { feature: Feature::TopType, ref value, .. } if value == "Crown"
    ));
}

fn catalog_choice() -> impl Strategy<Value = (Feature, &'static str)> {
    (0..Feature::VARIANTS.len()).prop_flat_map(|i| {
        let feature = Feature::VARIANTS[i];
        proptest::sample::select(feature.variants()).prop_map(move |v| (feature, v))
    })
}

proptest! {
    #[test]
    fn explicit_keeps_supplied_and_defaults_the_rest(
        choices in proptest::collection::vec(catalog_choice(), 1..8)
    ) {
        let options: AvatarOptions =
            choices.iter().map(|(f, v)| (f.key().to_owned(), (*v).to_owned())).collect();
        let set = explicit(&options).unwrap();

        for feature in Feature::VARIANTS {
            let expected = options
                .get(feature.key())
                .map_or(feature.default_variant(), String::as_str);
            prop_assert_eq!(set.get(*feature), expected);
        }
    }

    #[test]
    fn out_of_catalog_values_are_rejected(
        index in 0..Feature::VARIANTS.len(),
        value in "[A-Za-z0-9]{1,12}"
    ) {
        let feature = Feature::VARIANTS[index];
        prop_assume!(!feature.accepts(&value));

        let options = AvatarOptions::from([(feature.key().to_owned(), value.clone())]);
        let err = explicit(&options).unwrap_err();
        prop_assert_eq!(
            err.to_string(),
            format!("Invalid value '{value}' for option '{}'", feature.key())
        );
    }

    #[test]
    fn any_seed_yields_a_valid_set(seed in any::<u64>()) {
        let set = random_with(&mut StdRng::seed_from_u64(seed));
        for (feature, variant) in set.entries() {
            prop_assert!(feature.accepts(variant));
        }
    }
}
