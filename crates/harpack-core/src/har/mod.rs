//! HAR (HTTP Archive) feed: parse a devtools network log and replay its
//! entries through the collector, embedded bodies standing in for the
//! host's asynchronous body fetch.

mod convert;
mod parse;

pub use convert::exchange_from_entry;
pub use parse::{
    HarContent, HarEntry, HarLog, HarParam, HarPostData, HarRequest, HarResponse, HarRoot,
};

use anyhow::{Context, Result};
use std::path::Path;

use crate::collector::Collector;
use crate::store::StoreSink;

/// Parses a HAR file from disk.
pub fn load_har(path: &Path) -> Result<HarLog> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read HAR file: {}", path.display()))?;
    let har: HarLog = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse HAR JSON: {}", path.display()))?;
    Ok(har)
}

/// Replays every entry through `collector`, in recorded order. Returns
/// the number of records the store acknowledged.
pub async fn replay<S: StoreSink>(har: &HarLog, collector: &Collector<S>) -> usize {
    let mut accepted = 0;
    for entry in &har.log.entries {
        let (exchange, body) = exchange_from_entry(entry);
        if collector.observe(exchange, async move { Ok(body) }).await {
            accepted += 1;
        }
    }
    accepted
}
