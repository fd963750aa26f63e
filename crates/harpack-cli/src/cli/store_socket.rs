//! Store socket: server (during `harpack serve`) and client (for every
//! other subcommand). Protocol: one JSON request per line, one JSON
//! response per line, the shapes defined in `harpack_core::store`.

use anyhow::Result;
use harpack_core::store::{StoreHandle, StoreRequest, StoreResponse, StoreSink};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{UnixListener, UnixStream};

/// Spawns a listener that forwards each JSON-line request to the store
/// service and writes the JSON response back. Malformed lines are logged
/// and skipped.
pub fn spawn_store_listener(
    handle: StoreHandle,
    path: impl AsRef<Path>,
) -> Result<tokio::task::JoinHandle<()>> {
    let path = path.as_ref().to_path_buf();
    let task = tokio::spawn(async move {
        let _ = std::fs::remove_file(&path);
        let listener = match UnixListener::bind(&path) {
            Ok(l) => l,
            Err(e) => {
                tracing::warn!(path = %path.display(), "store socket bind: {}", e);
                return;
            }
        };
        loop {
            match listener.accept().await {
                Ok((stream, _)) => {
                    let handle = handle.clone();
                    tokio::spawn(async move {
                        serve_connection(stream, handle).await;
                    });
                }
                Err(e) => tracing::debug!("store socket accept: {}", e),
            }
        }
    });
    Ok(task)
}

async fn serve_connection(stream: UnixStream, handle: StoreHandle) {
    let (read, mut write) = stream.into_split();
    let mut lines = BufReader::new(read).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let request: StoreRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!("malformed store request: {}", e);
                continue;
            }
        };
        let response = match handle.request(request).await {
            Ok(response) => response,
            // Service gone: nothing sensible to answer, drop the connection.
            Err(_) => break,
        };
        let mut encoded = match serde_json::to_string(&response) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::warn!("encode store response: {}", e);
                continue;
            }
        };
        encoded.push('\n');
        if write.write_all(encoded.as_bytes()).await.is_err() {
            break;
        }
    }
}

/// Client side: sends one request and awaits its response line. Returns
/// `None` (with a warning) when the resident store is unreachable — the
/// caller abandons the operation instead of crashing.
pub async fn send_request(socket_path: &Path, request: &StoreRequest) -> Option<StoreResponse> {
    if !socket_path.exists() {
        tracing::warn!(
            path = %socket_path.display(),
            "store socket not found; is `harpack serve` running?"
        );
        return None;
    }
    match try_send(socket_path, request).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("store request failed: {:#}", e);
            None
        }
    }
}

async fn try_send(socket_path: &Path, request: &StoreRequest) -> Result<Option<StoreResponse>> {
    let stream = UnixStream::connect(socket_path).await?;
    let (read, mut write) = stream.into_split();

    let mut encoded = serde_json::to_string(request)?;
    encoded.push('\n');
    write.write_all(encoded.as_bytes()).await?;

    let mut lines = BufReader::new(read).lines();
    match lines.next_line().await? {
        Some(line) => Ok(Some(serde_json::from_str(&line)?)),
        None => Ok(None),
    }
}

/// Socket-backed sink for the collector, used by `harpack import`.
#[derive(Debug, Clone)]
pub struct SocketStore {
    path: PathBuf,
}

impl SocketStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl StoreSink for SocketStore {
    async fn submit(&self, request: StoreRequest) -> Result<bool> {
        match send_request(&self.path, &request).await {
            Some(StoreResponse::Ack { success }) => Ok(success),
            Some(other) => anyhow::bail!("unexpected store response: {other:?}"),
            None => anyhow::bail!("capture store unreachable"),
        }
    }
}
