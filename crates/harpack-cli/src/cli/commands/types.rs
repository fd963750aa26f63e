//! `harpack types` – distinct captured resource types.

use anyhow::Result;
use harpack_core::config::HarpackConfig;
use harpack_core::store::{StoreRequest, StoreResponse};

use crate::cli::store_socket::send_request;

pub async fn run_types(cfg: &HarpackConfig) -> Result<()> {
    let socket_path = cfg.store_socket_path()?;
    let Some(response) = send_request(&socket_path, &StoreRequest::GetResourceTypes).await else {
        println!("capture store is not running");
        return Ok(());
    };

    match response {
        StoreResponse::Types { types } => {
            if types.is_empty() {
                println!("No resources captured yet.");
            } else {
                for kind in types {
                    println!("{kind}");
                }
            }
        }
        other => {
            tracing::warn!("unexpected store response: {:?}", other);
            println!("unexpected store response");
        }
    }
    Ok(())
}
