use crate::palette::WHITE;
use avatar_domain::catalog::ClotheType;
use std::fmt;

const BODY: &str =
    "M36,280 L36,256 C36,222 70,202 108,198 L156,198 C194,202 228,222 228,256 L228,280 Z";
const SHADOW: &str = r##"fill="#000000" fill-opacity="0.16""##;

/// Torso garment in `color`, with the neckline cut out in `skin`.
pub(crate) fn clothing(
    kind: ClotheType,
    color: &str,
    skin: &str,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    if kind == ClotheType::Overall {
        write!(f, r#"<path d="{BODY}" fill="{WHITE}"/>"#)?;
    } else {
        write!(f, r#"<path d="{BODY}" fill="{color}"/>"#)?;
    }

    match kind {
        ClotheType::BlazerShirt => {
            write!(f, r#"<path d="M108,198 L132,244 L156,198 Z" fill="{WHITE}"/>"#)?;
            write!(f, r#"<path d="M116,198 L132,222 L148,198 Z" fill="{skin}"/>"#)?;
            lapels(f)
        }
        ClotheType::BlazerSweater => {
            f.write_str(r##"<path d="M108,198 L132,250 L156,198 Z" fill="#E6E6E6"/>"##)?;
            write!(f, r#"<path d="M118,198 Q132,214 146,198 Z" fill="{skin}"/>"#)?;
            lapels(f)
        }
        ClotheType::CollarSweater => {
            write!(f, r#"<path d="M104,198 C112,220 152,220 160,198 L150,198 C144,210 120,210 114,198 Z" {SHADOW}/>"#)?;
            write!(f, r#"<path d="M114,198 C120,210 144,210 150,198 Z" fill="{skin}"/>"#)
        }
        ClotheType::GraphicShirt => {
            write!(f, r#"<path d="M116,198 Q132,212 148,198 Z" fill="{skin}"/>"#)?;
            write!(
                f,
                r#"<path d="M132,228 L137,240 L150,240 L140,248 L144,260 L132,252 L120,260 L124,248 L114,240 L127,240 Z" fill="{WHITE}" fill-opacity="0.8"/>"#
            )
        }
        ClotheType::Hoodie => {
            write!(f, r#"<path d="M96,202 C100,228 164,228 168,202 L156,198 C150,214 114,214 108,198 Z" {SHADOW}/>"#)?;
            write!(f, r#"<path d="M108,198 C114,214 150,214 156,198 Z" fill="{skin}"/>"#)?;
            write!(
                f,
                r#"<path d="M118,214 L118,250 M146,214 L146,250" stroke="{WHITE}" stroke-width="3" stroke-linecap="round"/>"#
            )
        }
        ClotheType::Overall => {
            write!(f, r#"<path d="M116,198 Q132,212 148,198 Z" fill="{skin}"/>"#)?;
            write!(
                f,
                r#"<path d="M84,280 L84,236 L180,236 L180,280 Z M84,236 L96,204 L104,206 L96,236 Z M180,236 L168,204 L160,206 L168,236 Z" fill="{color}"/>"#
            )?;
            write!(f, r#"<circle cx="98" cy="246" r="4" fill="{WHITE}"/><circle cx="166" cy="246" r="4" fill="{WHITE}"/>"#)
        }
        ClotheType::ShirtCrewNeck => {
            write!(f, r#"<path d="M114,198 Q132,214 150,198 Z" fill="{skin}"/>"#)?;
            f.write_str(
                r##"<path d="M112,198 Q132,218 152,198" stroke="#000000" stroke-opacity="0.16" stroke-width="3" fill="none"/>"##,
            )
        }
        ClotheType::ShirtScoopNeck => {
            write!(f, r#"<path d="M106,198 Q132,236 158,198 Z" fill="{skin}"/>"#)
        }
        ClotheType::ShirtVNeck => write!(f, r#"<path d="M110,198 L132,234 L154,198 Z" fill="{skin}"/>"#),
    }
}

fn lapels(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, r#"<path d="M108,198 L124,250 L100,230 Z M156,198 L140,250 L164,230 Z" {SHADOW}/>"#)
}
