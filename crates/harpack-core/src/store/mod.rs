//! Process-wide capture store.
//!
//! Keeps every captured record in memory for the process lifetime:
//! resources keyed by URL (first write wins), API calls appended without
//! deduplication. All access goes through [`CaptureStore::handle`] with a
//! [`StoreRequest`], normally driven by the single-consumer service loop
//! in [`service`], so each request completes before the next is seen and
//! no partial mutation is ever visible. Nothing is persisted to disk.

mod protocol;
mod service;
mod types;

pub use protocol::{StoreRequest, StoreResponse, StoreStats};
pub use service::{spawn_store_service, StoreHandle, StoreSink, StoreUnavailable};
pub use types::{ApiBody, CapturedApiCall, CapturedResource, BINARY_BODY_SENTINEL};

use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;

/// In-memory capture state. Owned by the service loop; consumers only
/// ever see snapshots produced by `GET_ALL_DATA`.
#[derive(Debug, Default)]
pub struct CaptureStore {
    resources: Vec<CapturedResource>,
    resource_urls: HashSet<String>,
    api_calls: Vec<CapturedApiCall>,
}

impl CaptureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatches one request against the state and produces its response.
    pub fn handle(&mut self, request: StoreRequest) -> StoreResponse {
        match request {
            StoreRequest::AddResource(resource) => {
                self.add_resource(*resource);
                StoreResponse::Ack { success: true }
            }
            StoreRequest::AddApiCall(call) => {
                self.api_calls.push(*call);
                StoreResponse::Ack { success: true }
            }
            StoreRequest::GetAllData => StoreResponse::AllData {
                resources: self.resources.clone(),
                api_requests: self.api_calls.clone(),
            },
            StoreRequest::GetResourceTypes => StoreResponse::Types {
                types: self.resource_types(),
            },
            StoreRequest::GetStats => StoreResponse::Stats(StoreStats {
                resource_count: self.resources.len(),
                api_count: self.api_calls.len(),
            }),
            StoreRequest::ClearData => {
                self.resources.clear();
                self.resource_urls.clear();
                self.api_calls.clear();
                StoreResponse::Ack { success: true }
            }
        }
    }

    /// First write wins: later captures of an already-seen URL are
    /// silently dropped.
    fn add_resource(&mut self, resource: CapturedResource) {
        if self.resource_urls.insert(resource.url.clone()) {
            self.resources.push(resource);
        }
    }

    fn resource_types(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.resources.iter().map(|r| r.kind.as_str()).collect();
        set.into_iter().map(String::from).collect()
    }
}

/// Default path for the store socket (XDG state dir).
pub fn default_store_socket_path() -> std::io::Result<PathBuf> {
    let dir = xdg::BaseDirectories::with_prefix("harpack")?.get_state_home();
    Ok(dir.join("store.sock"))
}
