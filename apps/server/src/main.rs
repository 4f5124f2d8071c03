use anyhow::Context;
use avatar::domain::config::ApiConfig;
use avatar::kernel::config::{CONFIG_PATH_ENV, ConfigLoader};
use avatar_logger::Logger;
use avatar_server::Server;

fn main() -> anyhow::Result<()> {
    let path = std::env::var_os(CONFIG_PATH_ENV);
    let loader = path.map_or_else(ConfigLoader::new, |path| ConfigLoader::new().file(path));
    let (source, required) = loader.source();
    let source = source.to_path_buf();
    let cfg: ApiConfig = loader.load().context("Critical: Configuration is malformed")?;

    let _log = Logger::from_config(env!("CARGO_PKG_NAME"), &cfg.log)?;
    tracing::info!(source = %source.display(), required, "Configuration loaded");

    let runtime = avatar_runtime::build_service_runtime(&cfg.runtime)?;
    runtime.block_on(async { Server::builder().config(cfg).build()?.run().await })
}
