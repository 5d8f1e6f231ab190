//! Offline visit queue.
//!
//! DESIGN
//! ======
//! Visits recorded while the browser is offline are appended to the JSON
//! array under `visitas_offline`. A sync sends a snapshot of the queue and
//! then removes only the entries that were accepted from the live queue, so
//! visits queued while the sync is in flight survive it. Entries that carry
//! an id are edits of existing visits and are sent as updates.

#[cfg(test)]
#[path = "visit_queue_test.rs"]
mod visit_queue_test;

use std::future::Future;

use crate::net::error::ApiError;
use crate::net::types::VisitaPayload;
use crate::util::storage;

/// How a queued visit is sent once the browser is back online.
#[derive(Clone, Debug, PartialEq)]
pub enum QueuedSend {
    Create(VisitaPayload),
    Update(i64, VisitaPayload),
}

impl QueuedSend {
    #[must_use]
    pub fn for_visit(visit: VisitaPayload) -> Self {
        match visit.id {
            Some(id) => Self::Update(id, visit),
            None => Self::Create(visit),
        }
    }
}

/// Outcome of one synchronization pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub sent: usize,
    pub failed: usize,
}

/// Result of sending a snapshot: counts plus the accepted visits, which
/// [`VisitQueue::drop_sent`] removes from the live queue.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SyncOutcome {
    pub report: SyncReport,
    pub sent: Vec<VisitaPayload>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisitQueue {
    pending: Vec<VisitaPayload>,
}

impl VisitQueue {
    /// Read the persisted queue; an unreadable value counts as empty.
    #[must_use]
    pub fn load() -> Self {
        Self::from_items(storage::load_json(storage::OFFLINE_VISITS_KEY).unwrap_or_default())
    }

    #[must_use]
    pub fn from_items(pending: Vec<VisitaPayload>) -> Self {
        Self { pending }
    }

    #[must_use]
    pub fn items(&self) -> &[VisitaPayload] {
        &self.pending
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Append a visit and persist the queue.
    pub fn enqueue(&mut self, visit: VisitaPayload) {
        self.pending.push(visit);
        self.persist();
        log::info!("visit queued offline ({} pending)", self.pending.len());
    }

    /// Remove one queued entry per accepted visit and persist the rest.
    /// Entries queued after the snapshot was taken are kept.
    pub fn drop_sent(&mut self, sent: &[VisitaPayload]) {
        for visit in sent {
            if let Some(index) = self.pending.iter().position(|p| p == visit) {
                self.pending.remove(index);
            }
        }
        self.persist();
    }

    fn persist(&self) {
        if self.pending.is_empty() {
            storage::remove(storage::OFFLINE_VISITS_KEY);
        } else {
            storage::save_json(storage::OFFLINE_VISITS_KEY, &self.pending);
        }
    }
}

/// Send every visit of `batch` in order through `send`. Failures are
/// logged and left out of [`SyncOutcome::sent`].
pub async fn sync_batch<F, Fut>(batch: Vec<VisitaPayload>, send: F) -> SyncOutcome
where
    F: Fn(QueuedSend) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let mut outcome = SyncOutcome::default();
    for visit in batch {
        match send(QueuedSend::for_visit(visit.clone())).await {
            Ok(()) => {
                outcome.report.sent += 1;
                outcome.sent.push(visit);
            }
            Err(e) => {
                log::warn!("offline visit for patient {} not synced: {e}", visit.paciente_id);
                outcome.report.failed += 1;
            }
        }
    }
    outcome
}
