//! `harpack clear` – wipe the resident store, with confirmation.

use anyhow::Result;
use harpack_core::config::HarpackConfig;
use harpack_core::store::{StoreRequest, StoreResponse};
use std::io::Write;

use crate::cli::store_socket::send_request;

pub async fn run_clear(cfg: &HarpackConfig, yes: bool) -> Result<()> {
    if !yes && !confirm("Clear all captured data? [y/N] ")? {
        println!("Aborted.");
        return Ok(());
    }

    let socket_path = cfg.store_socket_path()?;
    let Some(response) = send_request(&socket_path, &StoreRequest::ClearData).await else {
        println!("capture store is not running");
        return Ok(());
    };

    match response {
        StoreResponse::Ack { success: true } => println!("Cleared."),
        other => {
            tracing::warn!("unexpected store response: {:?}", other);
            println!("Clear failed.");
        }
    }
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
