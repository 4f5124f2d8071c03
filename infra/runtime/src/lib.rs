//! # Runtime
//!
//! Builds the multi-threaded [Tokio](https://tokio.rs) runtime the server runs on.
//!
//! Rasterization is CPU-bound and runs on the blocking pool, so the pool size is a
//! first-class setting next to the worker count.
//!
//! ## Example
//!
//! ```rust
//! use avatar_runtime::{RuntimeProfile, build_runtime};
//!
//! let runtime = build_runtime(&RuntimeProfile::default().with_worker_threads(2))?;
//! runtime.block_on(async {});
//! # Ok::<(), anyhow::Error>(())
//! ```

pub use anyhow::Result;

use anyhow::anyhow;
use avatar_domain::config::RuntimeConfig;
use std::{thread::available_parallelism, time::Duration};
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, info};

/// The default number of worker threads if detection fails.
const DEFAULT_WORKER_THREADS: usize = 4;
const MAX_WORKER_THREADS: usize = 1024;
const DEFAULT_BLOCKING_THREADS: usize = 64;
/// The default stack size for threads (3 `MiB`).
const DEFAULT_STACK_SIZE: usize = 3 * 1024 * 1024;
const MIN_STACK_SIZE: usize = 1024 * 1024;
const MAX_STACK_SIZE: usize = 16 * 1024 * 1024;
/// How long an idle blocking thread stays alive.
const THREAD_KEEP_ALIVE: Duration = Duration::from_secs(60);
const DEFAULT_THREAD_NAME: &str = "avatar-worker";

fn detect_worker_threads() -> usize {
    available_parallelism().map_or(DEFAULT_WORKER_THREADS, std::num::NonZero::get)
}

/// Resolved runtime sizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeProfile {
    pub worker_threads: usize,
    pub max_blocking_threads: usize,
    pub stack_size: usize,
    pub thread_name: String,
    pub thread_keep_alive: Duration,
}

impl Default for RuntimeProfile {
    fn default() -> Self {
        Self {
            worker_threads: detect_worker_threads(),
            max_blocking_threads: DEFAULT_BLOCKING_THREADS,
            stack_size: DEFAULT_STACK_SIZE,
            thread_name: DEFAULT_THREAD_NAME.to_owned(),
            thread_keep_alive: THREAD_KEEP_ALIVE,
        }
    }
}

impl RuntimeProfile {
    /// Applies the `[runtime]` config section; unset worker threads means one per core.
    #[must_use]
    pub fn from_config(config: &RuntimeConfig) -> Self {
        let profile = Self::default().with_max_blocking_threads(config.max_blocking_threads);
        match config.worker_threads {
            Some(threads) => profile.with_worker_threads(threads),
            None => profile,
        }
    }

    #[must_use]
    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = threads.clamp(1, MAX_WORKER_THREADS);
        self
    }

    #[must_use]
    pub fn with_max_blocking_threads(mut self, threads: usize) -> Self {
        self.max_blocking_threads = threads.max(1);
        self
    }

    #[must_use]
    pub fn with_stack_size(mut self, size: usize) -> Self {
        self.stack_size = size.clamp(MIN_STACK_SIZE, MAX_STACK_SIZE);
        self
    }

    #[must_use]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.thread_name =
            if name.trim().is_empty() { DEFAULT_THREAD_NAME.to_owned() } else { name };
        self
    }
}

/// Builds a multi-threaded runtime with I/O and timers enabled.
///
/// # Errors
/// Returns an [`anyhow::Error`] if the OS refuses to create the runtime threads.
pub fn build_runtime(profile: &RuntimeProfile) -> Result<Runtime> {
    debug!(profile = ?profile, "Building tokio runtime");

    let mut builder = Builder::new_multi_thread();
    builder
        .worker_threads(profile.worker_threads)
        .max_blocking_threads(profile.max_blocking_threads)
        .thread_name(&profile.thread_name)
        .thread_stack_size(profile.stack_size)
        .thread_keep_alive(profile.thread_keep_alive)
        .enable_all();

    builder.build().map_err(|e| anyhow!("Failed to initialize runtime: {e}"))
}

/// Builds the service runtime from the `[runtime]` config section.
///
/// # Errors
/// See [`build_runtime`].
pub fn build_service_runtime(config: &RuntimeConfig) -> Result<Runtime> {
    let profile = RuntimeProfile::from_config(config);
    info!(
        workers = profile.worker_threads,
        blocking = profile.max_blocking_threads,
        "Initializing service runtime"
    );
    build_runtime(&profile)
}
