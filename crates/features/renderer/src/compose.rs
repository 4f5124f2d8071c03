use crate::palette::{self, BACKDROP};
use crate::parts::{accessories, clothing, face, facial_hair, top};
use avatar_domain::catalog::AvatarStyle;
use avatar_domain::{Feature, FeatureSet};
use std::fmt;

/// Logical canvas size; rasterization scales it onto the requested raster.
pub const CANVAS_WIDTH: u32 = 264;
pub const CANVAS_HEIGHT: u32 = 280;

/// Bottom half of the backdrop circle plus everything above its center.
const FRAME_CLIP: &str = "M12,160 A120,120 0 0 0 252,160 L252,0 L12,0 Z";

/// Composed SVG markup, without an XML preamble.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VectorDocument(String);

impl VectorDocument {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for VectorDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VectorDocument {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<VectorDocument> for String {
    fn from(doc: VectorDocument) -> Self {
        doc.0
    }
}

/// Composes the head-and-shoulders figure for `set`.
///
/// Pure: the same set always yields byte-identical markup.
#[must_use]
pub fn compose(set: &FeatureSet) -> VectorDocument {
    VectorDocument(Figure(set).to_string())
}

/// The attribute text that identifies `variant` of `feature` in a composed document.
///
/// Shapes are grouped as `<Layer>/<Variant>` ids; the two garment/hair colors are carried
/// as `data-*` attributes on the group they tint.
#[must_use]
pub fn marker(feature: Feature, variant: &str) -> String {
    match feature {
        Feature::AvatarStyle => format!(r#"id="Style/{variant}""#),
        Feature::TopType => format!(r#"id="Top/{variant}""#),
        Feature::AccessoriesType => format!(r#"id="Accessories/{variant}""#),
        Feature::HairColor => format!(r#"data-hair-color="{variant}""#),
        Feature::FacialHairType => format!(r#"id="FacialHair/{variant}""#),
        Feature::ClotheType => format!(r#"id="Clothing/{variant}""#),
        Feature::ClotheColor => format!(r#"data-clothe-color="{variant}""#),
        Feature::EyeType => format!(r#"id="Eyes/{variant}""#),
        Feature::EyebrowType => format!(r#"id="Eyebrow/{variant}""#),
        Feature::MouthType => format!(r#"id="Mouth/{variant}""#),
        Feature::SkinColor => format!(r#"id="Skin/{variant}""#),
    }
}

struct Figure<'a>(&'a FeatureSet);

impl fmt::Display for Figure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let set = self.0;
        let skin = palette::skin(set.skin_color);
        let hair = palette::hair(set.hair_color);
        let cloth = palette::clothe(set.clothe_color);

        write!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{CANVAS_WIDTH}" height="{CANVAS_HEIGHT}" viewBox="0 0 {CANVAS_WIDTH} {CANVAS_HEIGHT}">"#
        )?;
        write!(f, r#"<defs><clipPath id="avatar-frame"><path d="{FRAME_CLIP}"/></clipPath></defs>"#)?;

        write!(f, r#"<g {}>"#, marker(Feature::AvatarStyle, set.avatar_style.into()))?;
        if set.avatar_style == AvatarStyle::Circle {
            write!(f, r#"<circle cx="132" cy="160" r="120" fill="{BACKDROP}"/>"#)?;
        }
        f.write_str("</g>")?;

        match set.avatar_style {
            AvatarStyle::Circle => f.write_str(r#"<g clip-path="url(#avatar-frame)">"#)?,
            AvatarStyle::Transparent => f.write_str("<g>")?,
        }

        write!(f, r#"<g id="TopBack/{}">"#, set.top_type)?;
        top::back(set.top_type, hair, f)?;
        f.write_str("</g>")?;

        write!(f, r#"<g {} fill="{skin}">"#, marker(Feature::SkinColor, set.skin_color.into()))?;
        f.write_str(concat!(
            r#"<rect x="112" y="150" width="40" height="60"/>"#,
            r#"<circle cx="78" cy="116" r="10"/><circle cx="186" cy="116" r="10"/>"#,
            r#"<ellipse cx="132" cy="112" rx="54" ry="62"/>"#,
            r##"<path d="M112,170 C120,184 144,184 152,170 L152,182 C144,196 120,196 112,182 Z" fill="#000000" fill-opacity="0.1"/>"##,
        ))?;
        f.write_str("</g>")?;

        write!(
            f,
            r#"<g {} {}>"#,
            marker(Feature::ClotheType, set.clothe_type.into()),
            marker(Feature::ClotheColor, set.clothe_color.into())
        )?;
        clothing::clothing(set.clothe_type, cloth, skin, f)?;
        f.write_str("</g>")?;

        f.write_str(r#"<g id="Face">"#)?;
        write!(f, r#"<g {}>"#, marker(Feature::MouthType, set.mouth_type.into()))?;
        face::mouth(set.mouth_type, f)?;
        f.write_str(r#"</g><g id="Nose">"#)?;
        face::nose(f)?;
        write!(f, r#"</g><g {}>"#, marker(Feature::EyeType, set.eye_type.into()))?;
        face::eyes(set.eye_type, f)?;
        write!(f, r#"</g><g {}>"#, marker(Feature::EyebrowType, set.eyebrow_type.into()))?;
        face::eyebrows(set.eyebrow_type, f)?;
        f.write_str("</g></g>")?;

        write!(f, r#"<g {}>"#, marker(Feature::FacialHairType, set.facial_hair_type.into()))?;
        facial_hair::facial_hair(set.facial_hair_type, hair, f)?;
        f.write_str("</g>")?;

        write!(
            f,
            r#"<g {} {}>"#,
            marker(Feature::TopType, set.top_type.into()),
            marker(Feature::HairColor, set.hair_color.into())
        )?;
        top::front(set.top_type, hair, f)?;
        f.write_str("</g>")?;

        write!(f, r#"<g {}>"#, marker(Feature::AccessoriesType, set.accessories_type.into()))?;
        accessories::accessories(set.accessories_type, f)?;
        f.write_str("</g>")?;

        f.write_str("</g></svg>")
    }
}
