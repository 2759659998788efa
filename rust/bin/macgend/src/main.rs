//! `macgend`: the MAC generator server binary.
//!
//! Usage:
//!   macgend [-c <config.toml>] [--listen <addr>] [--data-dir <dir>]
//!
//! Without `-c` the built-in defaults are used. Flags override the file.

mod routes;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use macgen::service::MacGenService;
use macgen::MacGenModule;
use macgen_core::{Module, ServiceConfig};
use tracing::info;

/// MAC generator server.
#[derive(Parser, Debug)]
#[command(name = "macgend", about = "MAC-address work-order allocation server")]
struct Cli {
    /// Path to a TOML config file.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Listen address (overrides the config file).
    #[arg(long = "listen")]
    listen: Option<String>,

    /// Data directory (overrides the config file).
    #[arg(long = "data-dir")]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            ServiceConfig::load(path)?
        }
        None => ServiceConfig::default(),
    };
    if let Some(listen) = cli.listen {
        config.listen = listen;
    }
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }

    // Initialize storage.
    if let Some(dir) = &config.data_dir {
        std::fs::create_dir_all(dir)?;
    }
    let db_path = config.resolve_db_path();
    let kv: Arc<dyn macgen_kv::KVStore> = Arc::new(
        macgen_kv::RedbStore::open(&db_path)
            .map_err(|e| anyhow::anyhow!("failed to open KV store: {}", e))?,
    );
    info!("KV store opened at {}", db_path.display());

    let module = MacGenModule::new(MacGenService::new(kv, &config));
    info!("{} module initialized", module.name());

    let app = routes::build_router(vec![(module.name(), module.routes())]);

    let listener = tokio::net::TcpListener::bind(&config.listen).await?;
    info!("macgend listening on {}", config.listen);
    axum::serve(listener, app).await?;

    Ok(())
}
