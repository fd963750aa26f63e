//! Typed request/response protocol for the capture store.
//!
//! Requests travel as `{"type": "ADD_RESOURCE", "data": {...}}`;
//! responses are bare object shapes (`{"success": true}`,
//! `{"resources": [...], "apiRequests": [...]}`, ...). One request
//! yields exactly one response.

use serde::{Deserialize, Serialize};

use super::types::{CapturedApiCall, CapturedResource};

/// The six store operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum StoreRequest {
    /// Insert a resource iff its URL is not already present.
    #[serde(rename = "ADD_RESOURCE")]
    AddResource(Box<CapturedResource>),
    /// Insert an API call unconditionally.
    #[serde(rename = "ADD_API_REQUEST")]
    AddApiCall(Box<CapturedApiCall>),
    /// Snapshot both sequences in insertion order.
    #[serde(rename = "GET_ALL_DATA")]
    GetAllData,
    /// Sorted distinct resource-type tags.
    #[serde(rename = "GET_RESOURCE_TYPES")]
    GetResourceTypes,
    /// Counts of both mappings.
    #[serde(rename = "GET_STATS")]
    GetStats,
    /// Empty both mappings.
    #[serde(rename = "CLEAR_DATA")]
    ClearData,
}

/// Counts returned by `GET_STATS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub resource_count: usize,
    pub api_count: usize,
}

/// Response shapes, one family per request kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoreResponse {
    /// `ADD_*` / `CLEAR_DATA` acknowledgement.
    Ack { success: bool },
    /// `GET_ALL_DATA` snapshot.
    #[serde(rename_all = "camelCase")]
    AllData {
        resources: Vec<CapturedResource>,
        api_requests: Vec<CapturedApiCall>,
    },
    /// `GET_RESOURCE_TYPES`.
    Types { types: Vec<String> },
    /// `GET_STATS`.
    Stats(StoreStats),
}
