//! The feature catalog.
//!
//! Every feature is a closed enum; its variants are the only values a caller may choose
//! and its `#[default]` variant is what an explicit request gets when the feature is
//! omitted. [`Feature`] names the features by their query key and [`FeatureSet`] holds
//! one variant of each.

use avatar_derive::api_model;
use std::collections::HashMap;
use std::fmt;
use strum::{VariantArray, VariantNames};
use strum_macros::{AsRefStr, Display, EnumString, IntoStaticStr};

/// Sparse caller input: feature key to raw, unvalidated value.
pub type AvatarOptions = HashMap<String, String>;

macro_rules! catalog {
    ($(
        $(#[$meta:meta])*
        $field:ident: $name:ident { $($(#[$vmeta:meta])* $variant:ident),+ $(,)? }
    )+) => {
        $(
            $(#[$meta])*
            #[api_model]
            #[derive(
                Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, IntoStaticStr,
                strum_macros::VariantArray, strum_macros::VariantNames,
            )]
            pub enum $name { $($(#[$vmeta])* $variant),+ }
        )+

        /// The eleven independently selectable features, named by their query key.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString,
            IntoStaticStr, strum_macros::VariantArray,
        )]
        #[strum(serialize_all = "camelCase")]
        pub enum Feature { $($name),+ }

        impl Feature {
            /// Query key, e.g. `skinColor`.
            #[must_use]
            pub fn key(self) -> &'static str {
                self.into()
            }

            /// Every valid variant name, in catalog order.
            #[must_use]
            pub const fn variants(self) -> &'static [&'static str] {
                match self {
                    $(Self::$name => <$name as VariantNames>::VARIANTS,)+
                }
            }

            /// Variant used when an explicit request omits this feature.
            #[must_use]
            pub fn default_variant(self) -> &'static str {
                match self {
                    $(Self::$name => $name::default().into(),)+
                }
            }

            /// Whether `value` is one of this feature's variants (case-sensitive).
            #[must_use]
            pub fn accepts(self, value: &str) -> bool {
                self.variants().contains(&value)
            }
        }

        /// One complete choice of variant per feature.
        #[api_model]
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct FeatureSet {
            $(pub $field: $name,)+
        }

        impl FeatureSet {
            /// Variant name chosen for `feature`.
            #[must_use]
            pub fn get(&self, feature: Feature) -> &'static str {
                match feature {
                    $(Feature::$name => self.$field.into(),)+
                }
            }
        }
    };
}

catalog! {
    /// Frame drawn behind the figure.
    avatar_style: AvatarStyle { #[default] Circle, Transparent }

    /// Hair style or head covering.
    top_type: TopType {
        NoHair, Eyepatch, Hat, Hijab, Turban, WinterHat1, WinterHat2, WinterHat3, WinterHat4,
        LongHairBigHair, LongHairBob, LongHairBun, LongHairCurly, LongHairCurvy, LongHairDreads,
        LongHairFrida, LongHairFro, LongHairFroBand, LongHairNotTooLong, LongHairShavedSides,
        LongHairMiaWallace, LongHairStraight, LongHairStraight2, LongHairStraightStrand,
        ShortHairDreads01, ShortHairDreads02, ShortHairFrizzle, ShortHairShaggyMullet,
        ShortHairShortCurly, ShortHairShortFlat, #[default] ShortHairShortRound,
        ShortHairShortWaved, ShortHairSides, ShortHairTheCaesar, ShortHairTheCaesarSidePart,
    }

    /// Eyewear overlay.
    accessories_type: AccessoriesType {
        #[default] Blank, Kurt, Prescription01, Prescription02, Round, Sunglasses, Wayfarers,
    }

    hair_color: HairColor {
        Auburn, Black, Blonde, BlondeGolden, Brown, #[default] BrownDark, PastelPink,
        Platinum, Red, SilverGray,
    }

    facial_hair_type: FacialHairType {
        #[default] Blank, BeardMedium, BeardLight, BeardMajestic, MoustacheFancy,
        MoustacheMagnum,
    }

    clothe_type: ClotheType {
        BlazerShirt, BlazerSweater, CollarSweater, GraphicShirt, #[default] Hoodie, Overall,
        ShirtCrewNeck, ShirtScoopNeck, ShirtVNeck,
    }

    clothe_color: ClotheColor {
        #[default] Black, Blue01, Blue02, Blue03, Gray01, Gray02, Heather, PastelBlue,
        PastelGreen, PastelOrange, PastelRed, PastelYellow, Pink, Red, White,
    }

    eye_type: EyeType {
        Close, Cry, #[default] Default, Dizzy, EyeRoll, Happy, Hearts, Side, Squint, Surprised,
        Wink, WinkWacky,
    }

    eyebrow_type: EyebrowType {
        Angry, AngryNatural, #[default] Default, DefaultNatural, FlatNatural, RaisedExcited,
        RaisedExcitedNatural, SadConcerned, SadConcernedNatural, UnibrowNatural, UpDown,
        UpDownNatural,
    }

    mouth_type: MouthType {
        Concerned, #[default] Default, Disbelief, Eating, Grimace, Sad, ScreamOpen, Serious,
        Smile, Tongue, Twinkle, Vomit,
    }

    skin_color: SkinColor { Tanned, Yellow, Pale, #[default] Light, Brown, DarkBrown, Black }
}

impl FeatureSet {
    /// `(feature, variant)` pairs in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = (Feature, &'static str)> + '_ {
        Feature::VARIANTS.iter().map(move |&feature| (feature, self.get(feature)))
    }
}

/// Query-string form, e.g. `avatarStyle=Circle&topType=Hat&...`.
impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (feature, variant)) in self.entries().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={variant}", feature.key())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_keys_are_camel_case() {
        assert_eq!(Feature::AvatarStyle.key(), "avatarStyle");
        assert_eq!(Feature::EyebrowType.key(), "eyebrowType");
        assert_eq!(Feature::SkinColor.key(), "skinColor");
        assert_eq!("clotheColor".parse::<Feature>().unwrap(), Feature::ClotheColor);
    }

    #[test]
    fn variants_parse_case_sensitively() {
        assert_eq!("Happy".parse::<EyeType>().unwrap(), EyeType::Happy);
        assert!("happy".parse::<EyeType>().is_err());
        assert!(Feature::EyeType.accepts("WinkWacky"));
        assert!(!Feature::EyeType.accepts("Sleepy"));
    }

    #[test]
    fn display_is_a_query_string() {
        let rendered = FeatureSet::default().to_string();
        assert!(rendered.starts_with("avatarStyle=Circle&topType=ShortHairShortRound&"));
        assert!(rendered.ends_with("&skinColor=Light"));
        assert_eq!(rendered.matches('&').count(), Feature::VARIANTS.len() - 1);
    }
}
