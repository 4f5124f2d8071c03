//! Query parameter documentation.
//!
//! Handlers read the raw query map so that unknown keys are ignored and bad values get
//! the catalog error message; these structs only describe the accepted keys.

use avatar_domain::catalog::{
    AccessoriesType, AvatarStyle, ClotheColor, ClotheType, EyeType, EyebrowType,
    FacialHairType, HairColor, MouthType, SkinColor, TopType,
};
use utoipa::IntoParams;

/// Feature choices. Omitted features take their default unless every feature is
/// omitted, in which case all of them are drawn at random.
#[derive(Debug, IntoParams)]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct FeatureParams {
    #[param(inline)]
    pub avatar_style: Option<AvatarStyle>,
    #[param(inline)]
    pub top_type: Option<TopType>,
    #[param(inline)]
    pub accessories_type: Option<AccessoriesType>,
    #[param(inline)]
    pub hair_color: Option<HairColor>,
    #[param(inline)]
    pub facial_hair_type: Option<FacialHairType>,
    #[param(inline)]
    pub clothe_type: Option<ClotheType>,
    #[param(inline)]
    pub clothe_color: Option<ClotheColor>,
    #[param(inline)]
    pub eye_type: Option<EyeType>,
    #[param(inline)]
    pub eyebrow_type: Option<EyebrowType>,
    #[param(inline)]
    pub mouth_type: Option<MouthType>,
    #[param(inline)]
    pub skin_color: Option<SkinColor>,
}

/// Raster size. Missing or non-numeric values fall back to the configured default.
#[derive(Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RasterParams {
    /// Output width in pixels
    #[param(minimum = 1, example = 300)]
    pub width: Option<u32>,
    /// Output height in pixels
    #[param(minimum = 1, example = 300)]
    pub height: Option<u32>,
}
