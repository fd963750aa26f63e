//! `harpack export` – snapshot the resident store and write the archive.

use anyhow::{Context, Result};
use chrono::Local;
use harpack_core::config::HarpackConfig;
use harpack_core::export::{self, format_size, ExportOutcome};
use harpack_core::store::{CapturedApiCall, CapturedResource, StoreRequest, StoreResponse};
use std::path::{Path, PathBuf};

use crate::cli::store_socket::send_request;

pub async fn run_export(
    cfg: &HarpackConfig,
    types: &[String],
    output: Option<&Path>,
) -> Result<()> {
    let socket_path = cfg.store_socket_path()?;
    let Some(response) = send_request(&socket_path, &StoreRequest::GetAllData).await else {
        println!("capture store is not running");
        return Ok(());
    };

    let StoreResponse::AllData {
        resources,
        api_requests,
    } = response
    else {
        tracing::warn!("unexpected store response");
        println!("unexpected store response");
        return Ok(());
    };

    write_archive(cfg, &resources, &api_requests, types, output)
}

/// Shared by `export` and `pack`: resolve the selection, run the
/// exporter, write the archive file.
pub fn write_archive(
    cfg: &HarpackConfig,
    resources: &[CapturedResource],
    api_calls: &[CapturedApiCall],
    types: &[String],
    output: Option<&Path>,
) -> Result<()> {
    let selected = export::resolve_selection(types, resources);
    let outcome = export::export(
        resources,
        api_calls,
        &selected,
        &cfg.archive_prefix,
        Local::now(),
    )
    .context("export failed")?;

    match outcome {
        ExportOutcome::NothingSelected => {
            println!("Nothing selected: no resources match the selection and no API calls were captured.");
        }
        ExportOutcome::Archive(archive) => {
            let path = output
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(&archive.file_name));
            std::fs::write(&path, &archive.bytes)
                .with_context(|| format!("write archive: {}", path.display()))?;
            println!(
                "Wrote {} ({})",
                path.display(),
                format_size(archive.bytes.len() as u64)
            );
        }
    }
    Ok(())
}
