//! Fill colors for the tinted features.

use avatar_domain::catalog::{ClotheColor, HairColor, SkinColor};

pub(crate) const fn skin(color: SkinColor) -> &'static str {
    match color {
        SkinColor::Tanned => "#FD9841",
        SkinColor::Yellow => "#F8D25C",
        SkinColor::Pale => "#FFDBB4",
        SkinColor::Light => "#EDB98A",
        SkinColor::Brown => "#D08B5B",
        SkinColor::DarkBrown => "#AE5D29",
        SkinColor::Black => "#614335",
    }
}

pub(crate) const fn hair(color: HairColor) -> &'static str {
    match color {
        HairColor::Auburn => "#A55728",
        HairColor::Black => "#2C1B18",
        HairColor::Blonde => "#B58143",
        HairColor::BlondeGolden => "#D6B370",
        HairColor::Brown => "#724133",
        HairColor::BrownDark => "#4A312C",
        HairColor::PastelPink => "#F59797",
        HairColor::Platinum => "#ECDCBF",
        HairColor::Red => "#C93305",
        HairColor::SilverGray => "#E8E1E1",
    }
}

pub(crate) const fn clothe(color: ClotheColor) -> &'static str {
    match color {
        ClotheColor::Black => "#262E33",
        ClotheColor::Blue01 => "#65C9FF",
        ClotheColor::Blue02 => "#5199E4",
        ClotheColor::Blue03 => "#25557C",
        ClotheColor::Gray01 => "#E6E6E6",
        ClotheColor::Gray02 => "#929598",
        ClotheColor::Heather => "#3C4F5C",
        ClotheColor::PastelBlue => "#B1E2FF",
        ClotheColor::PastelGreen => "#A7FFC4",
        ClotheColor::PastelOrange => "#FFDEB5",
        ClotheColor::PastelRed => "#FFAFB9",
        ClotheColor::PastelYellow => "#FFFFB1",
        ClotheColor::Pink => "#FF488E",
        ClotheColor::Red => "#FF5C5C",
        ClotheColor::White => "#FFFFFF",
    }
}

/// Background disc of the `Circle` style.
pub(crate) const BACKDROP: &str = "#65C9FF";
/// Fixed fabric color of hats, hijabs and turbans.
pub(crate) const FABRIC: &str = "#3C4F5C";
pub(crate) const WHITE: &str = "#FFFFFF";
