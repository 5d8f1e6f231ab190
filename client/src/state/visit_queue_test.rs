use std::cell::RefCell;
use std::future::ready;

use futures::executor::block_on;

use super::*;
use crate::net::types::Visita;
use crate::state::forms::visit::{VisitForm, VisitRoute};

fn visit(paciente_id: i64) -> VisitaPayload {
    VisitaPayload { paciente_id, gestor_id: 1, fecha_visita: "2024-04-01".into(), ..VisitaPayload::default() }
}

fn patients(queue: &VisitQueue) -> Vec<i64> {
    queue.items().iter().map(|v| v.paciente_id).collect()
}

fn sync_all_ok(queue: &VisitQueue) -> SyncOutcome {
    block_on(sync_batch(queue.items().to_vec(), |_| ready(Ok(()))))
}

// =============================================================
// Queue
// =============================================================

#[test]
fn enqueue_appends_in_order() {
    let mut queue = VisitQueue::default();
    queue.enqueue(visit(1));
    queue.enqueue(visit(2));
    assert_eq!(patients(&queue), vec![1, 2]);
}

#[test]
fn load_without_browser_is_empty() {
    assert!(VisitQueue::load().is_empty());
}

#[test]
fn drop_sent_removes_one_entry_per_sent_visit() {
    let mut queue = VisitQueue::from_items(vec![visit(1), visit(1), visit(2)]);
    queue.drop_sent(&[visit(1)]);
    assert_eq!(patients(&queue), vec![1, 2]);
}

// =============================================================
// Sync
// =============================================================

#[test]
fn sync_keeps_only_failed_visits() {
    let mut queue = VisitQueue::from_items(vec![visit(1), visit(2), visit(3)]);
    let outcome = block_on(sync_batch(queue.items().to_vec(), |send| {
        let failing = matches!(&send, QueuedSend::Create(v) if v.paciente_id == 2);
        ready(if failing { Err(ApiError::Network("offline".into())) } else { Ok(()) })
    }));
    assert_eq!(outcome.report, SyncReport { sent: 2, failed: 1 });
    queue.drop_sent(&outcome.sent);
    assert_eq!(patients(&queue), vec![2]);
}

#[test]
fn sync_sends_each_visit_once_in_order() {
    let sent = RefCell::new(Vec::new());
    let mut queue = VisitQueue::from_items(vec![visit(4), visit(5)]);
    let outcome = block_on(sync_batch(queue.items().to_vec(), |send| {
        if let QueuedSend::Create(v) = send {
            sent.borrow_mut().push(v.paciente_id);
        }
        ready(Ok(()))
    }));
    assert_eq!(*sent.borrow(), vec![4, 5]);
    queue.drop_sent(&outcome.sent);
    assert!(queue.is_empty());
}

#[test]
fn empty_queue_sync_is_noop() {
    let queue = VisitQueue::default();
    assert_eq!(sync_all_ok(&queue), SyncOutcome::default());
}

#[test]
fn visit_queued_during_sync_survives_it() {
    let mut queue = VisitQueue::from_items(vec![visit(1)]);
    let batch = queue.items().to_vec();
    queue.enqueue(visit(2));
    let outcome = block_on(sync_batch(batch, |_| ready(Ok(()))));
    queue.drop_sent(&outcome.sent);
    assert_eq!(patients(&queue), vec![2]);
}

#[test]
fn offline_edit_syncs_as_update_of_the_same_visit() {
    let existing = Visita { id: 42, paciente_id: 3, gestor_id: 7, fecha_visita: "2024-04-01".into(), ..Visita::default() };
    let form = VisitForm::from_visit(&existing);
    assert_eq!(form.route(false), VisitRoute::Queue);

    let mut queue = VisitQueue::default();
    queue.enqueue(form.validate().expect("valid"));
    queue.enqueue(visit(9));

    let sent = RefCell::new(Vec::new());
    let outcome = block_on(sync_batch(queue.items().to_vec(), |send| {
        sent.borrow_mut().push(match send {
            QueuedSend::Create(v) => (None, v.paciente_id),
            QueuedSend::Update(id, v) => (Some(id), v.paciente_id),
        });
        ready(Ok(()))
    }));
    assert_eq!(*sent.borrow(), vec![(Some(42), 3), (None, 9)]);
    queue.drop_sent(&outcome.sent);
    assert!(queue.is_empty());
}
