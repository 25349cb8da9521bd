//! Background fetch worker.
//!
//! Searches run off the UI thread so the event loop stays responsive while a
//! request is in flight. Every query carries a monotonically increasing id;
//! the shared latest-id atomic lets the worker skip requests that were
//! superseded before they started, and the event loop drops results whose id
//! is no longer the latest. Out-of-order responses therefore cannot
//! overwrite a newer search.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use crate::api::{ApiError, SearchClient};
use crate::types::SaltRecord;

#[derive(Debug)]
pub(crate) enum FetchCommand {
    Query { id: u64, term: String },
    Shutdown,
}

#[derive(Debug)]
pub(crate) struct FetchResult {
    pub(crate) id: u64,
    pub(crate) term: String,
    pub(crate) outcome: Result<Vec<SaltRecord>, ApiError>,
}

pub(crate) fn spawn(
    client: SearchClient,
) -> (Sender<FetchCommand>, Receiver<FetchResult>, Arc<AtomicU64>) {
    let (command_tx, command_rx) = mpsc::channel();
    let (result_tx, result_rx) = mpsc::channel::<FetchResult>();
    let latest_query_id = Arc::new(AtomicU64::new(0));
    let thread_latest = Arc::clone(&latest_query_id);

    thread::spawn(move || {
        while let Ok(command) = command_rx.recv() {
            match command {
                FetchCommand::Query { id, term } => {
                    if should_abort(id, &thread_latest) {
                        continue;
                    }
                    let outcome = client.search(&term);
                    if result_tx.send(FetchResult { id, term, outcome }).is_err() {
                        break;
                    }
                }
                FetchCommand::Shutdown => break,
            }
        }
    });

    (command_tx, result_rx, latest_query_id)
}

fn should_abort(id: u64, latest_query_id: &AtomicU64) -> bool {
    latest_query_id.load(AtomicOrdering::Acquire) != id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn superseded_queries_are_abortable() {
        let latest = AtomicU64::new(3);
        assert!(should_abort(2, &latest));
        assert!(!should_abort(3, &latest));
    }
}
