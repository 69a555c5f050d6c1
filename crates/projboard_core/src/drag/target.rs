//! Bucket drop targets.
//!
//! # Invariants
//! - A target only gates acceptance (payload kind); the store decides
//!   whether a drop changes anything.
//! - The hover highlight is set only for accepted payloads and cleared on
//!   leave and on every drop.

use crate::drag::session::{CancelReason, DragPayload, DropOutcome, PLAIN_TEXT_KIND};
use crate::model::item::ItemStatus;
use crate::store::item_store::ItemStore;
use log::{debug, info};

/// Drop zone representing one bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTarget {
    bucket: ItemStatus,
    accepted_kind: String,
    highlighted: bool,
}

impl DropTarget {
    /// Target accepting the default `text/plain` carrier.
    pub fn new(bucket: ItemStatus) -> Self {
        Self::with_accepted_kind(bucket, PLAIN_TEXT_KIND)
    }

    pub fn with_accepted_kind(bucket: ItemStatus, accepted_kind: impl Into<String>) -> Self {
        Self {
            bucket,
            accepted_kind: accepted_kind.into(),
            highlighted: false,
        }
    }

    pub fn bucket(&self) -> ItemStatus {
        self.bucket
    }

    pub fn accepted_kind(&self) -> &str {
        &self.accepted_kind
    }

    pub fn accepts(&self, payload: &DragPayload) -> bool {
        payload.kind == self.accepted_kind
    }

    /// Hover over the target. Returns whether a drop would be accepted.
    pub fn drag_over(&mut self, payload: &DragPayload) -> bool {
        let accepted = self.accepts(payload);
        if accepted {
            self.highlighted = true;
        }
        accepted
    }

    pub fn drag_leave(&mut self) {
        self.highlighted = false;
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Moves the carried item into this target's bucket when accepted.
    pub fn handle_drop(&mut self, payload: &DragPayload, store: &mut ItemStore) -> DropOutcome {
        self.highlighted = false;
        if !self.accepts(payload) {
            debug!(
                "event=drag_cancelled module=drag item_id={} reason={} target={}",
                payload.item_id,
                CancelReason::KindMismatch,
                self.bucket
            );
            return DropOutcome::Cancelled(CancelReason::KindMismatch);
        }

        let outcome = store.move_item(payload.item_id, self.bucket);
        let source = payload.source.map_or("unknown", ItemStatus::as_str);
        info!(
            "event=drag_dropped module=drag item_id={} source={} target={} moved={}",
            payload.item_id,
            source,
            self.bucket,
            outcome.is_moved()
        );
        DropOutcome::Dropped(outcome)
    }

    /// Drop arriving as a raw transport pair instead of a session.
    pub fn handle_transfer(
        &mut self,
        kind: &str,
        data: &str,
        store: &mut ItemStore,
    ) -> DropOutcome {
        if kind != self.accepted_kind {
            self.highlighted = false;
            debug!(
                "event=drag_cancelled module=drag reason={} target={}",
                CancelReason::KindMismatch,
                self.bucket
            );
            return DropOutcome::Cancelled(CancelReason::KindMismatch);
        }
        match DragPayload::from_transfer(kind, data) {
            Some(payload) => self.handle_drop(&payload, store),
            None => {
                self.highlighted = false;
                debug!(
                    "event=drag_cancelled module=drag reason={} target={}",
                    CancelReason::MalformedPayload,
                    self.bucket
                );
                DropOutcome::Cancelled(CancelReason::MalformedPayload)
            }
        }
    }
}
