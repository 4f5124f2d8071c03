use crate::palette::FABRIC;
use avatar_domain::catalog::TopType;
use std::fmt;

// Hair caps hugging the skull, open towards the forehead.
const CAP_ROUND: &str =
    "M78,112 C72,62 98,42 132,42 C166,42 192,62 186,112 C182,86 164,68 132,68 C100,68 82,86 78,112 Z";
const CAP_FLAT: &str =
    "M78,106 L78,70 C78,52 100,46 132,46 C164,46 186,52 186,70 L186,106 C180,84 162,72 132,72 C102,72 84,84 78,106 Z";
const CAP_CAESAR: &str = "M80,100 C78,60 102,46 132,46 C162,46 186,60 184,100 L182,80 L82,80 Z";

// Long hair: falls behind the head and shoulders.
const LONG_BACK: &str =
    "M66,112 C62,58 96,34 132,34 C168,34 202,58 198,112 L204,214 C176,224 88,224 60,214 Z";
const FRINGE_SWEPT: &str =
    "M76,118 C70,62 100,40 132,40 C164,40 194,62 188,118 C184,92 170,70 140,66 C118,72 96,86 76,118 Z";
const FRINGE_CENTER: &str =
    "M76,118 C70,60 100,40 132,40 C164,40 194,60 188,118 C184,84 160,64 132,60 C104,64 80,84 76,118 Z";

const SHADE: &str = r##"stroke="#000000" stroke-opacity="0.24" stroke-width="4" fill="none""##;

/// Parts drawn behind the head (long hair, drapes, buns).
pub(crate) fn back(top: TopType, hair: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match top {
        TopType::LongHairBigHair => {
            write!(f, r#"<ellipse cx="132" cy="120" rx="84" ry="96" fill="{hair}"/>"#)
        }
        TopType::LongHairBob => write!(
            f,
            r#"<path d="M68,112 C64,58 98,36 132,36 C166,36 200,58 196,112 L200,178 C186,186 78,186 64,178 Z" fill="{hair}"/>"#
        ),
        TopType::LongHairBun => write!(f, r#"<circle cx="132" cy="38" r="22" fill="{hair}"/>"#),
        TopType::LongHairCurly => {
            hair_path(f, LONG_BACK, hair)?;
            for (cx, cy) in [(66, 150), (62, 182), (198, 150), (202, 182)] {
                write!(f, r#"<circle cx="{cx}" cy="{cy}" r="16" fill="{hair}"/>"#)?;
            }
            Ok(())
        }
        TopType::LongHairCurvy => write!(
            f,
            r#"<path d="M66,112 C62,58 96,34 132,34 C168,34 202,58 198,112 C214,140 190,160 206,190 C214,206 196,220 184,216 L80,216 C68,220 50,206 58,190 C74,160 50,140 66,112 Z" fill="{hair}"/>"#
        ),
        TopType::LongHairDreads => {
            hair_path(f, LONG_BACK, hair)?;
            strands(f, hair, 8, &[(70, 120, 70, 232), (84, 130, 82, 236), (180, 130, 182, 236), (194, 120, 194, 232)])
        }
        TopType::LongHairFrida => {
            for cy in [140, 160, 180, 200] {
                write!(f, r#"<circle cx="74" cy="{cy}" r="10" fill="{hair}"/><circle cx="190" cy="{cy}" r="10" fill="{hair}"/>"#)?;
            }
            Ok(())
        }
        TopType::LongHairFro | TopType::LongHairFroBand => {
            write!(f, r#"<circle cx="132" cy="96" r="84" fill="{hair}"/>"#)
        }
        TopType::LongHairNotTooLong => write!(
            f,
            r#"<path d="M66,112 C62,58 96,34 132,34 C168,34 202,58 198,112 L200,190 C176,198 88,198 64,190 Z" fill="{hair}"/>"#
        ),
        TopType::LongHairShavedSides => write!(
            f,
            r#"<path d="M132,34 C168,34 202,58 198,112 L202,196 C186,204 150,204 132,200 Z" fill="{hair}"/>"#
        ),
        TopType::LongHairMiaWallace => write!(
            f,
            r#"<path d="M70,112 C66,56 98,36 132,36 C166,36 198,56 194,112 L196,186 L68,186 Z" fill="{hair}"/>"#
        ),
        TopType::LongHairStraight | TopType::LongHairStraightStrand => {
            hair_path(f, LONG_BACK, hair)
        }
        TopType::LongHairStraight2 => write!(
            f,
            r#"<path d="M66,112 C62,58 96,34 132,34 C168,34 202,58 198,112 L206,230 L58,230 Z" fill="{hair}"/>"#
        ),
        TopType::ShortHairShaggyMullet => write!(
            f,
            r#"<path d="M76,112 L72,182 C90,190 174,190 192,182 L188,112 Z" fill="{hair}"/>"#
        ),
        TopType::Hijab => write!(
            f,
            r#"<path d="M60,118 C56,50 94,30 132,30 C170,30 208,50 204,118 L214,230 C180,246 84,246 50,230 Z" fill="{FABRIC}"/>"#
        ),
        TopType::NoHair
        | TopType::Eyepatch
        | TopType::Hat
        | TopType::Turban
        | TopType::WinterHat1
        | TopType::WinterHat2
        | TopType::WinterHat3
        | TopType::WinterHat4
        | TopType::ShortHairDreads01
        | TopType::ShortHairDreads02
        | TopType::ShortHairFrizzle
        | TopType::ShortHairShortCurly
        | TopType::ShortHairShortFlat
        | TopType::ShortHairShortRound
        | TopType::ShortHairShortWaved
        | TopType::ShortHairSides
        | TopType::ShortHairTheCaesar
        | TopType::ShortHairTheCaesarSidePart => Ok(()),
    }
}

/// Parts drawn over the face (fringes, caps, hats).
pub(crate) fn front(top: TopType, hair: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match top {
        TopType::NoHair => Ok(()),
        TopType::Eyepatch => f.write_str(concat!(
            r##"<path d="M80,82 L184,132" stroke="#28354B" stroke-width="4"/>"##,
            r##"<ellipse cx="154" cy="112" rx="16" ry="14" fill="#28354B"/>"##,
        )),
        TopType::Hat => {
            write!(
                f,
                r#"<path d="M88,84 L92,34 C104,26 160,26 172,34 L176,84 Z" fill="{FABRIC}"/><path d="M62,86 C62,76 202,76 202,86 C202,96 62,96 62,86 Z" fill="{FABRIC}"/>"#
            )?;
            f.write_str(r##"<rect x="90" y="66" width="84" height="10" fill="#000000" fill-opacity="0.3"/>"##)
        }
        TopType::Hijab => write!(
            f,
            r#"<path fill-rule="evenodd" d="M66,120 C62,60 96,40 132,40 C168,40 202,60 198,120 L198,200 L66,200 Z M132,60 C100,60 84,84 84,116 C84,150 104,172 132,172 C160,172 180,150 180,116 C180,84 164,60 132,60 Z" fill="{FABRIC}"/>"#
        ),
        TopType::Turban => {
            write!(
                f,
                r#"<path d="M74,96 C70,46 100,26 132,26 C164,26 194,46 190,96 C170,78 150,74 132,84 C114,74 94,78 74,96 Z" fill="{FABRIC}"/>"#
            )?;
            write!(f, r#"<path d="M84,70 C104,50 150,44 180,66 M92,52 C110,40 150,38 170,48" {SHADE}/>"#)
        }
        TopType::WinterHat1 => beanie(f, FABRIC),
        TopType::WinterHat2 => {
            beanie(f, "#25557C")?;
            f.write_str(concat!(
                r##"<path d="M74,96 L72,134 C78,140 86,138 90,130 L90,96 Z M190,96 L192,134 C186,140 178,138 174,130 L174,96 Z" fill="#25557C"/>"##,
                r##"<path d="M80,138 L80,170 M184,138 L184,170" stroke="#FFFFFF" stroke-width="3" stroke-linecap="round"/>"##,
            ))
        }
        TopType::WinterHat3 => {
            beanie(f, "#FF5C5C")?;
            f.write_str(r##"<circle cx="132" cy="22" r="14" fill="#FFFFFF"/>"##)
        }
        TopType::WinterHat4 => {
            f.write_str(r##"<path d="M82,60 L88,20 L112,40 Z M182,60 L176,20 L152,40 Z" fill="#FF488E"/>"##)?;
            beanie(f, "#FF488E")
        }
        TopType::LongHairBigHair | TopType::LongHairCurvy | TopType::LongHairNotTooLong => {
            hair_path(f, FRINGE_SWEPT, hair)
        }
        TopType::LongHairStraight2 => hair_path(
            f,
            "M76,118 C70,62 100,40 132,40 C164,40 194,62 188,118 C168,86 146,72 124,66 C100,72 84,92 76,118 Z",
            hair,
        ),
        TopType::LongHairBob => hair_path(
            f,
            "M78,110 C74,58 100,40 132,40 C164,40 190,58 186,110 L184,84 L80,84 Z",
            hair,
        ),
        TopType::LongHairBun | TopType::LongHairDreads | TopType::LongHairFro => {
            hair_path(f, CAP_ROUND, hair)
        }
        TopType::LongHairCurly => {
            hair_path(f, CAP_ROUND, hair)?;
            for (cx, cy) in [(100, 66), (122, 60), (144, 60), (166, 66)] {
                write!(f, r#"<circle cx="{cx}" cy="{cy}" r="12" fill="{hair}"/>"#)?;
            }
            Ok(())
        }
        TopType::LongHairFrida => {
            hair_path(f, CAP_ROUND, hair)?;
            for cx in [96, 114, 132, 150, 168] {
                write!(
                    f,
                    r##"<circle cx="{cx}" cy="50" r="11" fill="{hair}" stroke="#000000" stroke-opacity="0.16" stroke-width="2"/>"##
                )?;
            }
            f.write_str(r##"<circle cx="88" cy="60" r="8" fill="#FF5C5C"/><circle cx="176" cy="60" r="8" fill="#FFFFB1"/>"##)
        }
        TopType::LongHairFroBand => {
            hair_path(f, CAP_ROUND, hair)?;
            f.write_str(r##"<path d="M80,80 C100,64 164,64 184,80 L184,94 C164,80 100,80 80,94 Z" fill="#FF488E"/>"##)
        }
        TopType::LongHairShavedSides => hair_path(
            f,
            "M90,84 C96,52 120,38 146,38 C174,38 198,60 198,112 C188,86 166,70 132,72 C114,74 100,78 90,84 Z",
            hair,
        ),
        TopType::LongHairMiaWallace => hair_path(
            f,
            "M74,112 C70,56 100,38 132,38 C164,38 194,56 190,112 L188,80 L76,80 Z",
            hair,
        ),
        TopType::LongHairStraight => hair_path(f, FRINGE_CENTER, hair),
        TopType::LongHairStraightStrand => {
            hair_path(f, FRINGE_CENTER, hair)?;
            hair_path(f, "M172,70 C184,110 178,150 186,190 L176,190 C168,150 172,110 162,72 Z", hair)
        }
        TopType::ShortHairDreads01 => {
            hair_path(f, CAP_ROUND, hair)?;
            strands(f, hair, 7, &STUBS)
        }
        TopType::ShortHairDreads02 => {
            hair_path(f, CAP_ROUND, hair)?;
            strands(f, hair, 7, &STUBS)?;
            strands(f, hair, 7, &[(80, 100, 76, 140), (90, 80, 84, 126), (184, 100, 188, 140), (174, 80, 180, 126)])
        }
        TopType::ShortHairFrizzle => {
            hair_path(f, CAP_ROUND, hair)?;
            hair_path(
                f,
                "M80,92 L86,64 L96,74 L104,48 L116,62 L126,42 L136,60 L148,44 L156,62 L168,50 L174,74 L184,66 L186,94 Z",
                hair,
            )
        }
        TopType::ShortHairShaggyMullet => {
            hair_path(f, CAP_FLAT, hair)?;
            hair_path(
                f,
                "M84,84 L96,100 L104,80 L118,98 L128,78 L140,98 L150,78 L162,98 L172,80 L180,96 L184,74 L82,74 Z",
                hair,
            )
        }
        TopType::ShortHairShortCurly => {
            hair_path(f, CAP_ROUND, hair)?;
            for (cx, cy) in [(92, 66), (108, 54), (126, 48), (144, 48), (162, 54), (176, 66)] {
                write!(f, r#"<circle cx="{cx}" cy="{cy}" r="12" fill="{hair}"/>"#)?;
            }
            Ok(())
        }
        TopType::ShortHairShortFlat => hair_path(f, CAP_FLAT, hair),
        TopType::ShortHairShortRound => hair_path(f, CAP_ROUND, hair),
        TopType::ShortHairShortWaved => {
            hair_path(f, CAP_ROUND, hair)?;
            write!(f, r#"<path d="M92,62 Q104,52 116,62 Q128,72 140,62 Q152,52 164,62" {SHADE}/>"#)
        }
        TopType::ShortHairSides => hair_path(
            f,
            "M78,116 C76,96 80,84 88,76 L94,100 C90,106 88,112 88,120 Z M186,116 C188,96 184,84 176,76 L170,100 C174,106 176,112 176,120 Z",
            hair,
        ),
        TopType::ShortHairTheCaesar => hair_path(f, CAP_CAESAR, hair),
        TopType::ShortHairTheCaesarSidePart => {
            hair_path(f, CAP_CAESAR, hair)?;
            f.write_str(
                r##"<path d="M112,48 L106,80" stroke="#FFFFFF" stroke-opacity="0.35" stroke-width="3"/>"##,
            )
        }
    }
}

// Short dread stubs along the crown.
const STUBS: [(u32, u32, u32, u32); 5] =
    [(96, 60, 90, 44), (114, 52, 112, 36), (132, 50, 132, 34), (150, 52, 152, 36), (168, 60, 174, 44)];

fn hair_path(f: &mut fmt::Formatter<'_>, d: &str, hair: &str) -> fmt::Result {
    write!(f, r#"<path d="{d}" fill="{hair}"/>"#)
}

fn strands(
    f: &mut fmt::Formatter<'_>,
    hair: &str,
    width: u32,
    lines: &[(u32, u32, u32, u32)],
) -> fmt::Result {
    for (x1, y1, x2, y2) in lines {
        write!(
            f,
            r#"<path d="M{x1},{y1} L{x2},{y2}" stroke="{hair}" stroke-width="{width}" stroke-linecap="round"/>"#
        )?;
    }
    Ok(())
}

fn beanie(f: &mut fmt::Formatter<'_>, color: &str) -> fmt::Result {
    write!(
        f,
        r#"<path d="M76,92 C76,44 100,26 132,26 C164,26 188,44 188,92 Z" fill="{color}"/><rect x="72" y="80" width="120" height="20" rx="8" fill="{color}"/>"#
    )?;
    f.write_str(r##"<rect x="72" y="80" width="120" height="20" rx="8" fill="#000000" fill-opacity="0.16"/>"##)
}
