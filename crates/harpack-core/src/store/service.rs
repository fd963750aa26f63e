//! In-process store service: a single-consumer loop over an mpsc channel.
//!
//! The loop handles one request to completion before receiving the next,
//! which is the store's only concurrency guarantee and the only one it
//! needs. Clients hold a cheap clonable [`StoreHandle`]; each request
//! carries its own oneshot reply channel.

use std::future::Future;

use anyhow::Result;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use super::protocol::{StoreRequest, StoreResponse};
use super::CaptureStore;

/// Depth of the request queue feeding the service loop.
const REQUEST_QUEUE_DEPTH: usize = 64;

struct Envelope {
    request: StoreRequest,
    reply: oneshot::Sender<StoreResponse>,
}

/// The service loop has shut down (every handle dropped or task gone).
#[derive(Debug, Error)]
#[error("capture store service is not available")]
pub struct StoreUnavailable;

/// Client handle to the store service.
#[derive(Debug, Clone)]
pub struct StoreHandle {
    tx: mpsc::Sender<Envelope>,
}

impl StoreHandle {
    /// Sends one request and awaits its response.
    pub async fn request(&self, request: StoreRequest) -> Result<StoreResponse, StoreUnavailable> {
        let (reply, response) = oneshot::channel();
        self.tx
            .send(Envelope { request, reply })
            .await
            .map_err(|_| StoreUnavailable)?;
        response.await.map_err(|_| StoreUnavailable)
    }
}

/// Where finished collector records go. Implemented by the in-process
/// [`StoreHandle`] and by the CLI's socket client.
pub trait StoreSink {
    /// Submits one record message; resolves to the store's success flag.
    fn submit(&self, request: StoreRequest) -> impl Future<Output = Result<bool>> + Send;
}

impl StoreSink for StoreHandle {
    async fn submit(&self, request: StoreRequest) -> Result<bool> {
        match self.request(request).await? {
            StoreResponse::Ack { success } => Ok(success),
            other => anyhow::bail!("unexpected store response: {other:?}"),
        }
    }
}

/// Spawns the service loop around a fresh [`CaptureStore`]. The loop
/// ends when the last handle is dropped.
pub fn spawn_store_service() -> (StoreHandle, JoinHandle<()>) {
    let (tx, mut rx) = mpsc::channel::<Envelope>(REQUEST_QUEUE_DEPTH);
    let task = tokio::spawn(async move {
        let mut store = CaptureStore::new();
        while let Some(Envelope { request, reply }) = rx.recv().await {
            let response = store.handle(request);
            // A dropped reply just means the client went away mid-request.
            let _ = reply.send(response);
        }
        tracing::debug!("capture store service stopped");
    });
    (StoreHandle { tx }, task)
}
