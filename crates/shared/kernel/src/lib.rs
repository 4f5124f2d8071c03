//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it holds config loading and, behind the `server` feature,
//! the shared API state, the HTTP error type and the system routes.
//!
//! ## Config loading
//! ```rust,no_run
//! use avatar_kernel::config::load_config;
//! use avatar_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("server")).unwrap_or_default();
//! assert!(cfg.server.port > 0);
//! ```
pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use avatar_domain as domain;
