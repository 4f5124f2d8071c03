use avatar_renderer::RenderError;
use avatar_resolver::ResolveError;
use std::borrow::Cow;

#[avatar_derive::avatar_error]
pub enum GenerateError {
    /// The caller picked a value outside the catalog. The only client error.
    #[error("Invalid avatar options{}: {source}", format_context(.context))]
    InvalidOption { source: ResolveError, context: Option<Cow<'static, str>> },

    #[error("Avatar rendering failed{}: {source}", format_context(.context))]
    Render { source: RenderError, context: Option<Cow<'static, str>> },

    /// The blocking rasterization task panicked or was cancelled.
    #[error("Rasterization task failed{}: {source}", format_context(.context))]
    Task { source: tokio::task::JoinError, context: Option<Cow<'static, str>> },
}

impl GenerateError {
    /// Whether the failure was caused by the request rather than the service.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidOption { .. })
    }
}
