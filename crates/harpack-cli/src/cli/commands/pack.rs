//! `harpack pack <path>` – one-shot pipeline: import a HAR and export
//! directly, no resident store required.

use anyhow::{Context, Result};
use harpack_core::collector::Collector;
use harpack_core::config::HarpackConfig;
use harpack_core::har;
use harpack_core::store::{spawn_store_service, StoreRequest, StoreResponse};
use std::path::Path;

use super::write_archive;

pub async fn run_pack(
    cfg: &HarpackConfig,
    path: &Path,
    types: &[String],
    output: Option<&Path>,
) -> Result<()> {
    let har = har::load_har(path)?;
    let total = har.log.entries.len();

    let (handle, service) = spawn_store_service();
    let collector = Collector::new(handle.clone());
    let accepted = har::replay(&har, &collector).await;
    tracing::info!("collected {accepted}/{total} records from {}", path.display());

    let response = handle
        .request(StoreRequest::GetAllData)
        .await
        .context("snapshot capture store")?;
    let StoreResponse::AllData {
        resources,
        api_requests,
    } = response
    else {
        anyhow::bail!("unexpected store response");
    };

    // Drop every handle so the service loop ends on its own.
    drop(collector);
    drop(handle);
    let _ = service.await;

    write_archive(cfg, &resources, &api_requests, types, output)
}
