//! Snapshot and price-table input.
//!
//! The host drops the current exchange book into a JSON file; the watcher
//! reloads it on an interval and publishes it over a `watch` channel.

use crate::analysis::PriceTable;
use crate::errors::Result;
use crate::models::OrderBookSnapshot;
use std::path::{Path, PathBuf};
use tokio::sync::watch;
use tracing::warn;

/// Read and decode one snapshot file.
pub async fn load_snapshot(path: &Path) -> Result<OrderBookSnapshot> {
    let raw = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}

/// Read a `{ "<base name>": value }` price table.
pub async fn load_price_table(path: &Path) -> Result<PriceTable> {
    let raw = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}

/// Spawn a task that reloads `path` every `interval_secs` and publishes the
/// snapshot whenever it differs from the last one. Failed reads keep the
/// previous snapshot.
pub async fn spawn_snapshot_watcher(
    path: PathBuf,
    interval_secs: u64,
    snapshot_tx: watch::Sender<Option<OrderBookSnapshot>>,
) -> Result<tokio::task::JoinHandle<()>> {
    let handle = tokio::spawn(async move {
        let mut ticker =
            tokio::time::interval(std::time::Duration::from_secs(interval_secs.max(1)));
        loop {
            ticker.tick().await;
            match load_snapshot(&path).await {
                Ok(snapshot) => {
                    snapshot_tx.send_if_modified(|current| {
                        if current.as_ref() == Some(&snapshot) {
                            return false;
                        }
                        *current = Some(snapshot);
                        true
                    });
                }
                Err(e) => {
                    warn!(error = %e, path = %path.display(), "[FEED] snapshot load failed");
                }
            }
        }
    });

    Ok(handle)
}
