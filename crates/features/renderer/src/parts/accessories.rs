use avatar_domain::catalog::AccessoriesType;
use std::fmt;

const FRAME: &str = "#252C2F";
const BRIDGE: &str = "M128,110 L136,110 M92,106 L80,102 M172,106 L184,102";

pub(crate) fn accessories(kind: AccessoriesType, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match kind {
        AccessoriesType::Blank => Ok(()),
        AccessoriesType::Kurt => {
            f.write_str(concat!(
                r##"<g fill="#F4F4F4" fill-opacity="0.5" stroke="#000000" stroke-width="3">"##,
                r#"<ellipse cx="108" cy="112" rx="20" ry="16"/><ellipse cx="156" cy="112" rx="20" ry="16"/></g>"#,
            ))?;
            bridge(f, 3)
        }
        AccessoriesType::Prescription01 => {
            write!(
                f,
                r#"<g fill="none" stroke="{FRAME}" stroke-width="3"><rect x="92" y="100" width="36" height="22" rx="4"/><rect x="136" y="100" width="36" height="22" rx="4"/></g>"#
            )?;
            bridge(f, 3)
        }
        AccessoriesType::Prescription02 => {
            write!(
                f,
                r#"<g fill="none" stroke="{FRAME}" stroke-width="5"><rect x="90" y="98" width="38" height="26" rx="10"/><rect x="136" y="98" width="38" height="26" rx="10"/></g>"#
            )?;
            bridge(f, 5)
        }
        AccessoriesType::Round => {
            write!(
                f,
                r#"<g fill="none" stroke="{FRAME}" stroke-width="3"><circle cx="110" cy="110" r="15"/><circle cx="154" cy="110" r="15"/></g>"#
            )?;
            bridge(f, 3)
        }
        AccessoriesType::Sunglasses => {
            f.write_str(
                r##"<path d="M92,102 L128,102 C128,120 120,126 110,126 C100,126 92,120 92,102 Z M136,102 L172,102 C172,120 164,126 154,126 C144,126 136,120 136,102 Z" fill="#000000" fill-opacity="0.7"/>"##,
            )?;
            bridge(f, 3)
        }
        AccessoriesType::Wayfarers => {
            write!(
                f,
                r##"<path d="M90,100 L130,100 L126,122 L96,122 Z M134,100 L174,100 L168,122 L138,122 Z" fill="#000000" fill-opacity="0.8" stroke="{FRAME}" stroke-width="3"/>"##
            )?;
            bridge(f, 3)
        }
    }
}

fn bridge(f: &mut fmt::Formatter<'_>, width: u32) -> fmt::Result {
    write!(f, r#"<path d="{BRIDGE}" stroke="{FRAME}" stroke-width="{width}" fill="none"/>"#)
}
