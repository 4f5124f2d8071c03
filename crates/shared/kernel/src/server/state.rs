use avatar_domain::config::ApiConfig;
use axum::extract::FromRef;
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;

#[avatar_derive::avatar_error]
pub enum ApiStateError {
    #[error("State validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[derive(Debug)]
pub struct ApiStateInner {
    pub config: ApiConfig,
}

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    #[must_use]
    pub fn builder() -> ApiStateBuilder {
        ApiStateBuilder::default()
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<ApiState> for ApiConfig {
    fn from_ref(state: &ApiState) -> Self {
        state.inner.config.clone()
    }
}

#[derive(Debug, Default)]
pub struct ApiStateBuilder {
    config: Option<ApiConfig>,
}

impl ApiStateBuilder {
    #[must_use]
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// # Errors
    /// Returns [`ApiStateError::Validation`] when no config was provided or the render
    /// settings are unusable.
    pub fn build(self) -> Result<ApiState, ApiStateError> {
        let config = self.config.ok_or_else(|| ApiStateError::Validation {
            message: "ApiConfig not provided".into(),
            context: None,
        })?;

        let render = &config.render;
        if render.max_dimension == 0 {
            return Err(ApiStateError::Validation {
                message: "render.max_dimension must be greater than zero".into(),
                context: None,
            });
        }
        if render.default_width == 0
            || render.default_height == 0
            || render.default_width > render.max_dimension
            || render.default_height > render.max_dimension
        {
            return Err(ApiStateError::Validation {
                message: format!(
                    "default raster size {}x{} must lie within 1..={}",
                    render.default_width, render.default_height, render.max_dimension
                )
                .into(),
                context: None,
            });
        }

        Ok(ApiState { inner: Arc::new(ApiStateInner { config }) })
    }
}
