//! Bounded fan-out of delete requests.
//!
//! # Design
//! A fixed number of scoped worker threads pull indices from a shared counter
//! and push `(index, result)` pairs back over a channel. The caller's thread
//! collects everything before returning, so state is still only mutated by
//! the controller that owns it. Results come back in input order, one per id.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;

use tracing::{debug, warn};

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::ItemId;

/// Per-id outcome of a bulk delete.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BulkDeleteReport {
    pub results: Vec<(ItemId, Result<(), ApiError>)>,
}

impl BulkDeleteReport {
    pub fn deleted(&self) -> Vec<ItemId> {
        self.results
            .iter()
            .filter(|(_, result)| result.is_ok())
            .map(|(id, _)| id.clone())
            .collect()
    }

    pub fn failed(&self) -> Vec<(ItemId, ApiError)> {
        self.results
            .iter()
            .filter_map(|(id, result)| result.as_ref().err().map(|e| (id.clone(), e.clone())))
            .collect()
    }

    pub fn all_succeeded(&self) -> bool {
        self.results.iter().all(|(_, result)| result.is_ok())
    }
}

/// Delete every id in `ids` using at most `workers` concurrent requests.
pub fn delete_all<T: Transport + ?Sized>(
    client: &TodoClient,
    transport: &T,
    ids: &[ItemId],
    workers: usize,
) -> BulkDeleteReport {
    if ids.is_empty() {
        return BulkDeleteReport::default();
    }
    let workers = workers.clamp(1, ids.len());
    debug!(count = ids.len(), workers, "dispatching bulk delete");

    let next = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel();

    thread::scope(|scope| {
        for _ in 0..workers {
            let tx = tx.clone();
            let next = &next;
            scope.spawn(move || loop {
                let index = next.fetch_add(1, Ordering::Relaxed);
                let Some(id) = ids.get(index) else {
                    break;
                };
                let result = transport
                    .execute(client.build_delete_item(id))
                    .and_then(|response| client.parse_delete_item(response));
                if let Err(e) = &result {
                    warn!(%id, error = %e, "delete failed");
                }
                if tx.send((index, result)).is_err() {
                    break;
                }
            });
        }
    });
    drop(tx);

    let mut slots: Vec<Option<Result<(), ApiError>>> = vec![None; ids.len()];
    for (index, result) in rx {
        slots[index] = Some(result);
    }

    let results = ids
        .iter()
        .cloned()
        .zip(slots)
        .map(|(id, slot)| {
            let result = slot
                .unwrap_or_else(|| Err(ApiError::Network("delete was not dispatched".into())));
            (id, result)
        })
        .collect();
    BulkDeleteReport { results }
}
