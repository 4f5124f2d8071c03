pub use crate::config::{ConfigError, ConfigErrorExt, ConfigLoader, load_config};
pub use avatar_domain::config::ApiConfig;
pub use avatar_domain::constants::*;

#[cfg(feature = "server")]
pub use crate::server::{
    error::{ApiError, ErrorBody},
    router::system_router,
    state::{ApiState, ApiStateBuilder, ApiStateError},
};
