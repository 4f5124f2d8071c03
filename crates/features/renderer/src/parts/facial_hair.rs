use avatar_domain::catalog::FacialHairType;
use std::fmt;

// Beards leave an opening around the mouth (even-odd hole).
const MOUTH_HOLE: &str = "M116,156 C116,146 148,146 148,156 C148,166 116,166 116,156 Z";
const BEARD: &str = "M80,118 C80,172 104,196 132,196 C160,196 184,172 184,118 C178,148 166,158 154,160 C146,150 118,150 110,160 C98,158 86,148 80,118 Z";
const BEARD_MAJESTIC: &str = "M74,112 C72,190 100,226 132,226 C164,226 192,190 190,112 C182,150 168,160 154,162 C146,150 118,150 110,162 C96,160 82,150 74,112 Z";
const MOUSTACHE_FANCY: &str = "M132,140 C124,132 108,134 104,146 C100,140 94,140 92,144 C100,152 118,150 132,144 C146,150 164,152 172,144 C170,140 164,140 160,146 C156,134 140,132 132,140 Z";
const MOUSTACHE_MAGNUM: &str = "M132,138 C118,132 98,136 96,152 C104,146 118,146 132,146 C146,146 160,146 168,152 C166,136 146,132 132,138 Z";

pub(crate) fn facial_hair(kind: FacialHairType, hair: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match kind {
        FacialHairType::Blank => Ok(()),
        FacialHairType::BeardMedium => beard(f, BEARD, hair, "1"),
        FacialHairType::BeardLight => beard(f, BEARD, hair, "0.6"),
        FacialHairType::BeardMajestic => {
            beard(f, BEARD_MAJESTIC, hair, "1")?;
            write!(f, r#"<path d="{MOUSTACHE_MAGNUM}" fill="{hair}"/>"#)
        }
        FacialHairType::MoustacheFancy => write!(f, r#"<path d="{MOUSTACHE_FANCY}" fill="{hair}"/>"#),
        FacialHairType::MoustacheMagnum => {
            write!(f, r#"<path d="{MOUSTACHE_MAGNUM}" fill="{hair}"/>"#)
        }
    }
}

fn beard(f: &mut fmt::Formatter<'_>, outline: &str, hair: &str, opacity: &str) -> fmt::Result {
    write!(
        f,
        r#"<path fill-rule="evenodd" d="{outline} {MOUTH_HOLE}" fill="{hair}" fill-opacity="{opacity}"/>"#
    )
}
