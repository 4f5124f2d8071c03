use super::{INK_FILL, INK_STROKE};
use crate::palette::WHITE;
use avatar_domain::catalog::{EyeType, EyebrowType, MouthType};
use std::fmt;

const HEART: &str = "#FF5353";
const TEAR: &str = "#92D9FF";
const TONGUE: &str = "#FF4F6D";
const BLUSH: &str = r##"fill="#FF4646" fill-opacity="0.2""##;
const OPEN_MOUTH: &str = r##"fill="#000000" fill-opacity="0.7""##;

pub(crate) fn eyes(eye: EyeType, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match eye {
        EyeType::Close => {
            write!(f, r#"<path d="M100,112 Q110,118 120,112 M144,112 Q154,118 164,112" {INK_STROKE}/>"#)
        }
        EyeType::Cry => {
            pupils(f, 110, 154, 110, 6)?;
            write!(f, r#"<path d="M104,120 C99,130 99,138 104,140 C109,138 109,130 104,120 Z" fill="{TEAR}"/>"#)
        }
        EyeType::Default => pupils(f, 110, 154, 110, 6),
        EyeType::Dizzy => write!(
            f,
            r#"<path d="M104,104 L116,116 M116,104 L104,116 M148,104 L160,116 M160,104 L148,116" {INK_STROKE}/>"#
        ),
        EyeType::EyeRoll => {
            whites(f, 10)?;
            pupils(f, 110, 154, 104, 5)
        }
        EyeType::Happy => {
            write!(f, r#"<path d="M100,114 Q110,102 120,114 M144,114 Q154,102 164,114" {INK_STROKE}/>"#)
        }
        EyeType::Hearts => write!(
            f,
            concat!(
                r#"<path d="M110,118 L100,108 C96,102 104,96 110,102 C116,96 124,102 120,108 Z" fill="{heart}"/>"#,
                r#"<path d="M154,118 L144,108 C140,102 148,96 154,102 C160,96 168,102 164,108 Z" fill="{heart}"/>"#,
            ),
            heart = HEART
        ),
        EyeType::Side => {
            whites(f, 10)?;
            pupils(f, 104, 148, 110, 5)
        }
        EyeType::Squint => write!(
            f,
            r#"<path d="M100,110 Q110,103 120,110 Q110,115 100,110 Z M144,110 Q154,103 164,110 Q154,115 144,110 Z" {INK_FILL}/>"#
        ),
        EyeType::Surprised => {
            whites(f, 11)?;
            pupils(f, 110, 154, 110, 5)
        }
        EyeType::Wink => {
            write!(f, r#"<circle cx="110" cy="110" r="6" {INK_FILL}/>"#)?;
            write!(f, r#"<path d="M144,112 Q154,104 164,112" {INK_STROKE}/>"#)
        }
        EyeType::WinkWacky => {
            write!(f, r#"<path d="M100,112 Q110,104 120,112" {INK_STROKE}/>"#)?;
            write!(f, r#"<circle cx="154" cy="108" r="13" fill="{WHITE}"/>"#)?;
            write!(f, r#"<circle cx="156" cy="110" r="6" {INK_FILL}/>"#)
        }
    }
}

fn whites(f: &mut fmt::Formatter<'_>, r: u32) -> fmt::Result {
    write!(
        f,
        r#"<circle cx="110" cy="110" r="{r}" fill="{WHITE}"/><circle cx="154" cy="110" r="{r}" fill="{WHITE}"/>"#
    )
}

fn pupils(f: &mut fmt::Formatter<'_>, left: u32, right: u32, cy: u32, r: u32) -> fmt::Result {
    write!(
        f,
        r#"<circle cx="{left}" cy="{cy}" r="{r}" {INK_FILL}/><circle cx="{right}" cy="{cy}" r="{r}" {INK_FILL}/>"#
    )
}

pub(crate) fn eyebrows(brow: EyebrowType, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let (line, natural) = match brow {
        EyebrowType::Angry => ("M100,86 L120,94 M164,86 L144,94", false),
        EyebrowType::AngryNatural => {
            ("M98,84 L122,92 L120,97 L97,89 Z M166,84 L142,92 L144,97 L167,89 Z", true)
        }
        EyebrowType::Default => ("M100,92 Q110,84 120,90 M144,90 Q154,84 164,92", false),
        EyebrowType::DefaultNatural => (
            "M98,92 Q110,80 122,88 L121,92 Q110,86 99,95 Z M166,92 Q154,80 142,88 L143,92 Q154,86 165,95 Z",
            true,
        ),
        EyebrowType::FlatNatural => {
            ("M98,88 L122,88 L122,93 L98,93 Z M142,88 L166,88 L166,93 L142,93 Z", true)
        }
        EyebrowType::RaisedExcited => ("M100,84 Q110,74 120,82 M144,82 Q154,74 164,84", false),
        EyebrowType::RaisedExcitedNatural => (
            "M98,84 Q110,70 122,80 L121,84 Q110,76 99,88 Z M166,84 Q154,70 142,80 L143,84 Q154,76 165,88 Z",
            true,
        ),
        EyebrowType::SadConcerned => ("M100,92 L120,84 M144,84 L164,92", false),
        EyebrowType::SadConcernedNatural => {
            ("M98,92 L122,82 L123,87 L99,97 Z M166,92 L142,82 L141,87 L165,97 Z", true)
        }
        EyebrowType::UnibrowNatural => ("M96,90 Q132,78 168,90 L168,95 Q132,84 96,95 Z", true),
        EyebrowType::UpDown => ("M100,84 Q110,76 120,82 M144,92 L164,92", false),
        EyebrowType::UpDownNatural => {
            ("M98,84 Q110,72 122,80 L121,84 Q110,78 99,88 Z M142,90 L166,90 L166,95 L142,95 Z", true)
        }
    };

    let paint = if natural { INK_FILL } else { INK_STROKE };
    write!(f, r#"<path d="{line}" {paint}/>"#)
}

pub(crate) fn nose(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(
        r##"<path d="M126,126 Q132,134 138,126" stroke="#000000" stroke-opacity="0.16" stroke-width="4" stroke-linecap="round" fill="none"/>"##,
    )
}

pub(crate) fn mouth(mouth: MouthType, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match mouth {
        MouthType::Concerned => {
            write!(f, r#"<path d="M116,156 C118,144 146,144 148,156 Z" {OPEN_MOUTH}/>"#)
        }
        MouthType::Default => write!(f, r#"<path d="M120,148 Q132,156 144,148" {INK_STROKE}/>"#),
        MouthType::Disbelief => {
            write!(f, r#"<path d="M120,156 Q132,146 144,156" {INK_STROKE}/>"#)
        }
        MouthType::Eating => {
            write!(f, r#"<circle cx="96" cy="142" r="10" {BLUSH}/><circle cx="168" cy="142" r="10" {BLUSH}/>"#)?;
            write!(f, r#"<path d="M122,150 L142,150" {INK_STROKE}/>"#)
        }
        MouthType::Grimace => {
            write!(
                f,
                r##"<rect x="112" y="142" width="40" height="16" rx="8" fill="{WHITE}" stroke="#000000" stroke-opacity="0.6" stroke-width="2"/>"##
            )?;
            f.write_str(
                r##"<path d="M112,150 L152,150 M122,142 L122,158 M132,142 L132,158 M142,142 L142,158" stroke="#000000" stroke-opacity="0.3" stroke-width="1.5"/>"##,
            )
        }
        MouthType::Sad => write!(f, r#"<path d="M118,158 Q132,142 146,158" {INK_STROKE}/>"#),
        MouthType::ScreamOpen => {
            write!(f, r#"<ellipse cx="132" cy="154" rx="14" ry="16" {OPEN_MOUTH}/>"#)?;
            write!(f, r#"<ellipse cx="132" cy="164" rx="8" ry="5" fill="{TONGUE}"/>"#)
        }
        MouthType::Serious => write!(f, r#"<path d="M118,152 L146,152" {INK_STROKE}/>"#),
        MouthType::Smile => {
            write!(f, r#"<path d="M114,144 Q132,168 150,144 Z" {OPEN_MOUTH}/>"#)?;
            write!(f, r#"<path d="M118,146 L146,146 L144,150 L120,150 Z" fill="{WHITE}"/>"#)
        }
        MouthType::Tongue => {
            write!(f, r#"<path d="M114,144 Q132,168 150,144 Z" {OPEN_MOUTH}/>"#)?;
            write!(f, r#"<path d="M124,152 C124,166 140,166 140,152 Z" fill="{TONGUE}"/>"#)
        }
        MouthType::Twinkle => write!(f, r#"<path d="M124,148 Q132,154 140,148" {INK_STROKE}/>"#),
        MouthType::Vomit => {
            write!(f, r#"<path d="M116,146 Q132,160 148,146 Z" {OPEN_MOUTH}/>"#)?;
            f.write_str(
                r##"<path d="M124,150 L140,150 L140,176 C140,182 132,182 132,176 C132,182 124,182 124,176 Z" fill="#7BB24B"/>"##,
            )
        }
    }
}
