//! `harpack import <path>` – replay a HAR file into the resident store.

use anyhow::Result;
use harpack_core::collector::Collector;
use harpack_core::config::HarpackConfig;
use harpack_core::har;
use harpack_core::store::StoreRequest;
use std::path::Path;

use crate::cli::store_socket::{send_request, SocketStore};

pub async fn run_import(cfg: &HarpackConfig, path: &Path) -> Result<()> {
    let socket_path = cfg.store_socket_path()?;

    // Probe once up front so a missing service fails once, not per entry.
    if send_request(&socket_path, &StoreRequest::GetStats).await.is_none() {
        println!("capture store is not running; start `harpack serve` first");
        return Ok(());
    }

    let har = har::load_har(path)?;
    let total = har.log.entries.len();

    let collector = Collector::new(SocketStore::new(socket_path));
    let accepted = har::replay(&har, &collector).await;

    println!("Imported {accepted}/{total} entries from {}", path.display());
    Ok(())
}
