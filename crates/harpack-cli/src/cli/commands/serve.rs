//! `harpack serve` – resident capture store plus socket listener.

use anyhow::{Context, Result};
use harpack_core::config::HarpackConfig;
use harpack_core::store::spawn_store_service;

use crate::cli::store_socket::spawn_store_listener;

pub async fn run_serve(cfg: &HarpackConfig) -> Result<()> {
    let socket_path = cfg.store_socket_path()?;
    if let Some(parent) = socket_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create state dir: {}", parent.display()))?;
    }

    let (handle, service) = spawn_store_service();
    let listener = spawn_store_listener(handle, &socket_path)?;
    println!("harpack store listening on {}", socket_path.display());
    println!("press ctrl-c to stop (captured data is in-memory only)");

    tokio::signal::ctrl_c().await.context("wait for ctrl-c")?;

    tracing::info!("shutting down store service");
    listener.abort();
    service.abort();
    let _ = std::fs::remove_file(&socket_path);
    Ok(())
}
