use std::borrow::Cow;

#[avatar_derive::avatar_error]
pub enum RenderError {
    /// Vector-to-raster conversion failed: bad markup, unusable dimensions or encoding.
    #[error("Rasterization failed{}: {message}", format_context(.context))]
    Rasterization { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl RenderError {
    pub(crate) fn rasterization(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Rasterization { message: message.into(), context: None }
    }
}
