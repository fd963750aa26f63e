//! `harpack status` – capture counts from the resident store.

use anyhow::Result;
use harpack_core::config::HarpackConfig;
use harpack_core::store::{StoreRequest, StoreResponse};

use crate::cli::store_socket::send_request;

pub async fn run_status(cfg: &HarpackConfig) -> Result<()> {
    let socket_path = cfg.store_socket_path()?;
    let Some(response) = send_request(&socket_path, &StoreRequest::GetStats).await else {
        println!("capture store is not running");
        return Ok(());
    };

    match response {
        StoreResponse::Stats(stats) => {
            println!("{:<10} {}", "RESOURCES", stats.resource_count);
            println!("{:<10} {}", "API CALLS", stats.api_count);
        }
        other => {
            tracing::warn!("unexpected store response: {:?}", other);
            println!("unexpected store response");
        }
    }
    Ok(())
}
