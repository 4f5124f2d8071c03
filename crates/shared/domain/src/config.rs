use crate::constants::{DEFAULT_MAX_DIMENSION, DEFAULT_RASTER_SIZE};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level service configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub render: RenderConfig,
    pub runtime: RuntimeConfig,
    pub log: LogConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into handlers.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Static assets (the browser UI).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub static_dir: PathBuf,
}

/// Raster output knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub default_width: u32,
    pub default_height: u32,
    /// Largest accepted width or height; larger requests fail rasterization.
    pub max_dimension: u32,
}

/// Tokio runtime sizing. `None` worker threads means "one per core".
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub worker_threads: Option<usize>,
    pub max_blocking_threads: usize,
}

/// Logging output.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level: `trace`, `debug`, `info`, `warn` or `error`.
    pub level: String,
    /// Extra `EnvFilter` directives, e.g. `avatar=debug,tower_http=info`.
    pub filter: Option<String>,
    /// Directory for rolling log files; console only when absent.
    pub path: Option<PathBuf>,
    /// JSON lines in the log files.
    pub json: bool,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 3000, ssl: None }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { static_dir: PathBuf::from("public") }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_width: DEFAULT_RASTER_SIZE,
            default_height: DEFAULT_RASTER_SIZE,
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self { worker_threads: None, max_blocking_threads: 64 }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, path: None, json: false }
    }
}
