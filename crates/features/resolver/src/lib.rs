//! Option resolver slice.
//!
//! Turns the sparse option map of a request into a complete [`FeatureSet`]:
//!
//! * no options at all: every feature is drawn uniformly from its variants;
//! * otherwise: supplied values are validated against the catalog and omitted features
//!   take their default. Keys that name no feature are ignored, and an empty value counts
//!   as omitted.

mod error;

pub use crate::error::{ResolveError, ResolveErrorExt};

use avatar_domain::{AvatarOptions, Feature, FeatureSet};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::str::FromStr;
use strum::VariantArray;
use tracing::debug;

/// Resolves `options` using the thread-local generator for random mode.
///
/// # Errors
/// Returns [`ResolveError::InvalidOption`] for the first supplied value outside its
/// feature's variants.
pub fn resolve(options: &AvatarOptions) -> Result<FeatureSet, ResolveError> {
    resolve_with(options, &mut rand::rng())
}

/// Resolves `options`, drawing from `rng` when the map is empty.
///
/// # Errors
/// See [`resolve`].
pub fn resolve_with<R>(options: &AvatarOptions, rng: &mut R) -> Result<FeatureSet, ResolveError>
where
    R: Rng + ?Sized,
{
    if options.is_empty() {
        let set = random_with(rng);
        debug!(features = %set, "Resolved random feature set");
        return Ok(set);
    }

    let set = explicit(options)?;
    debug!(features = %set, "Resolved explicit feature set");
    Ok(set)
}

/// Draws every feature independently and uniformly.
pub fn random_with<R>(rng: &mut R) -> FeatureSet
where
    R: Rng + ?Sized,
{
    FeatureSet {
        avatar_style: draw(rng),
        top_type: draw(rng),
        accessories_type: draw(rng),
        hair_color: draw(rng),
        facial_hair_type: draw(rng),
        clothe_type: draw(rng),
        clothe_color: draw(rng),
        eye_type: draw(rng),
        eyebrow_type: draw(rng),
        mouth_type: draw(rng),
        skin_color: draw(rng),
    }
}

/// Validates supplied values and fills the rest with defaults.
///
/// # Errors
/// See [`resolve`].
pub fn explicit(options: &AvatarOptions) -> Result<FeatureSet, ResolveError> {
    Ok(FeatureSet {
        avatar_style: pick(options, Feature::AvatarStyle)?,
        top_type: pick(options, Feature::TopType)?,
        accessories_type: pick(options, Feature::AccessoriesType)?,
        hair_color: pick(options, Feature::HairColor)?,
        facial_hair_type: pick(options, Feature::FacialHairType)?,
        clothe_type: pick(options, Feature::ClotheType)?,
        clothe_color: pick(options, Feature::ClotheColor)?,
        eye_type: pick(options, Feature::EyeType)?,
        eyebrow_type: pick(options, Feature::EyebrowType)?,
        mouth_type: pick(options, Feature::MouthType)?,
        skin_color: pick(options, Feature::SkinColor)?,
    })
}

fn draw<T, R>(rng: &mut R) -> T
where
    T: VariantArray + Copy + Default,
    R: Rng + ?Sized,
{
    // Catalog enums are never empty, so the fallback is unreachable.
    T::VARIANTS.choose(rng).copied().unwrap_or_default()
}

fn pick<T>(options: &AvatarOptions, feature: Feature) -> Result<T, ResolveError>
where
    T: FromStr + Default,
{
    match options.get(feature.key()).map(String::as_str) {
        None | Some("") => Ok(T::default()),
        Some(value) => value.parse().map_err(|_| ResolveError::invalid(feature, value)),
    }
}
