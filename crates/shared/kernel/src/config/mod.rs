use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment prefix; `AVATAR__SERVER__PORT` maps to `server.port`.
pub const ENV_PREFIX: &str = "AVATAR";
/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "AVATAR_CONFIG";
/// Config file looked up (with any supported extension) when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "server";

#[avatar_derive::avatar_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Layered configuration: an optional file overlaid with `AVATAR__`-prefixed environment
/// variables.
///
/// An explicitly given file must exist; the implicit `server` file may be absent, in which
/// case every field keeps its `serde` default.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    path: Option<PathBuf>,
    env: Option<Map<String, String>>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Replaces the process environment with `vars`.
    #[must_use]
    pub fn env_source(mut self, vars: Map<String, String>) -> Self {
        self.env = Some(vars);
        self
    }

    /// The file this loader reads and whether it must exist.
    #[must_use]
    pub fn source(&self) -> (&Path, bool) {
        self.path.as_deref().map_or((Path::new(DEFAULT_CONFIG_FILE), false), |path| (path, true))
    }

    /// Builds and deserializes the configuration.
    ///
    /// Runs before any subscriber is installed in the server, so it only logs at `debug`.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if an explicit file is missing or unreadable, or if the merged
    /// values do not fit `T`.
    pub fn load<T>(self) -> Result<T, ConfigError>
    where
        T: DeserializeOwned,
    {
        let (path, required) = self.source();
        debug!(path = %path.display(), required, "Loading config");

        let builder = Config::builder()
            .add_source(File::from(path).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .source(self.env),
            );

        let config = builder
            .build()
            .context("Failed to build config")?
            .try_deserialize::<T>()
            .context("Failed to deserialize config")?;

        Ok(config)
    }
}

/// Loads `T` from `path` (or the optional `server` file) plus environment overrides.
///
/// # Errors
/// See [`ConfigLoader::load`].
///
/// # Example
/// ```rust,no_run
/// use avatar_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let loader = ConfigLoader::new();
    match path {
        Some(path) => loader.file(path),
        None => loader,
    }
    .load()
}
