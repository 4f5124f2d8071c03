#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every crate in the workspace.
//!
//! * [`macro@avatar_error`] turns an enum into a `thiserror` error with context support.
//! * [`macro@api_model`] stamps the serde/`OpenAPI` policy onto response bodies and
//!   catalog enums.
//! * [`macro@api_handler`] documents an Axum handler with `utoipa` and wraps it in a
//!   `tracing` span.
//!
//! Examples are `ignore`d because a proc-macro crate cannot use its own macros;
//! the consuming crates exercise them in their tests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, parse_macro_input};

/// Attribute macro to define a standard API data model.
///
/// Works on structs (response bodies) and fieldless enums (catalog variants).
///
/// # Injected Behaviors
///
/// * **Derives**: Adds `Debug`, `Serialize`, and `Deserialize` if missing.
/// * **`OpenAPI`**: Adds `utoipa::ToSchema` when the `server` feature is enabled.
/// * **Serde Policy (structs)**:
///     * `rename_all = "camelCase"` by default (can be overridden).
///     * `deny_unknown_fields` by default (can be disabled).
/// * **Serde Policy (enums)**: variant names are kept verbatim unless `rename_all` is given;
///   `deny_unknown_fields` is never applied.
///
/// # Example
///
/// ```rust,ignore
/// use avatar_derive::api_model;
///
/// #[api_model]
/// pub struct ErrorBody {
///     pub error: String,
/// }
///
/// #[api_model]
/// #[derive(Clone, Copy, Default)]
/// pub enum AvatarStyle {
///     #[default]
///     Circle,
///     Transparent,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Attribute macro to bridge Axum handlers with `OpenAPI` documentation.
///
/// Accepts standard `utoipa::path` arguments such as `get`, `path = "..."`,
/// `params(...)`, `responses(...)`, and `tag = "..."`.
///
/// # Features
///
/// * **Documentation**: Registers handler metadata via `utoipa::path` when the `server`
///   feature is enabled.
/// * **Tracing**: Opens a `tracing` span named after the handler; arguments are skipped so
///   query strings never leak into logs wholesale.
/// * **Linting**: Applies `#[allow(clippy::unused_async)]`.
///
/// # Example
///
/// ```rust,ignore
/// use avatar_derive::api_handler;
///
/// #[api_handler(
///     get,
///     path = "/health",
///     responses((status = OK, body = HealthResponse)),
///     tag = "System"
/// )]
/// pub async fn health_handler() -> Json<HealthResponse> {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// A high-level attribute macro for defining domain-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]`.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `source` field,
///   enabling the use of the `?` operator for upstream errors.
/// * **Kind**: Generates `kind(&self) -> &'static str` returning the variant name, used as a
///   structured logging field.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping external errors must include a `source: T` field or a field marked
///    with `#[source]`/`#[from]`, and must then also carry a context field.
/// 4. Tuple or unit variants are rejected.
/// 5. One error enum per module: the generated `format_context` helper is a module item.
///
/// # Example
///
/// ```rust,ignore
/// use avatar_derive::avatar_error;
/// use std::borrow::Cow;
///
/// #[avatar_error]
/// pub enum RenderError {
///     #[error("Rasterization failed{}: {message}", format_context(.context))]
///     Rasterization { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn avatar_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
