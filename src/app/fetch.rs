use std::sync::mpsc::TryRecvError;

use crate::fetch::FetchResult;
use crate::selection::SaltCard;

use super::state::{Tier, ViewMode};
use super::App;

impl App<'_> {
    /// Drain any fetch results waiting on the receiver channel.
    pub(crate) fn pump_fetch_results(&mut self) {
        loop {
            match self.fetch_rx.try_recv() {
                Ok(result) => self.handle_fetch_result(result),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    /// Apply a fetch result if it corresponds to the most recent query.
    /// Stale responses are dropped so an out-of-order arrival can never
    /// overwrite a newer search.
    pub(crate) fn handle_fetch_result(&mut self, result: FetchResult) {
        if Some(result.id) != self.latest_query_id {
            return;
        }
        self.fetch_in_flight = false;

        match result.outcome {
            Ok(records) => {
                tracing::debug!(term = %result.term, count = records.len(), "search completed");
                self.cards = records.into_iter().map(SaltCard::with_defaults).collect();
                self.selected = 0;
                self.scroll = 0;
                self.tier = Tier::Form;
                self.mode = ViewMode::Results;
            }
            Err(err) => {
                // The UI stays in its prior state; the failure is only logged.
                tracing::warn!(term = %result.term, error = %err, "salt search failed");
            }
        }
    }
}
