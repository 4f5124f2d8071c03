use avatar_domain::Feature;
use std::borrow::Cow;

#[avatar_derive::avatar_error]
pub enum ResolveError {
    /// A caller-supplied value is not a variant of its feature.
    #[error("Invalid value '{value}' for option '{feature}'{}", format_context(.context))]
    InvalidOption {
        feature: Feature,
        value: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },
}

impl ResolveError {
    pub(crate) fn invalid(feature: Feature, value: &str) -> Self {
        Self::InvalidOption { feature, value: Cow::Owned(value.to_owned()), context: None }
    }
}
