//! Facade crate for the avatar service.
//! Re-exports domain/kernel primitives and the feature slices under one name.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `avatar` with the `server` feature to get the HTTP routers.
//! - Library users can call [`generate_svg`] / [`generate_png`] directly.

pub use avatar_domain as domain;
pub use avatar_kernel as kernel;

pub use avatar_generator::{GenerateError, generate_png, generate_svg, random_png, random_svg};

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use avatar_generator::server::avatar_router;
        pub use avatar_kernel::server::router::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use avatar_generator as generator;
    pub use avatar_renderer as renderer;
    pub use avatar_resolver as resolver;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "resolver",
        "renderer",
        "generator",
        #[cfg(feature = "server")]
        "server",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::features;

    #[test]
    fn core_slices_are_always_enabled() {
        assert!(features::is_enabled("resolver"));
        assert!(features::is_enabled("renderer"));
        assert!(features::is_enabled("generator"));
        assert!(!features::is_enabled("persistence"));
    }
}
