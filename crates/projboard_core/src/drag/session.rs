//! Drag session lifecycle.
//!
//! A gesture moves through `Idle -> Dragging -> {Dropped | Cancelled} -> Idle`.
//! `Dragging` is the lifetime of a `DragSession` value; both terminal states
//! consume it, so a session completes at most once.

use crate::drag::target::DropTarget;
use crate::model::item::{ItemId, ItemStatus};
use crate::store::item_store::{ItemStore, MoveOutcome};
use log::debug;
use std::fmt::{Display, Formatter};

/// Payload kind written by draggable items.
pub const PLAIN_TEXT_KIND: &str = "text/plain";

/// Message carried by a gesture from its source to a drop target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    /// Transfer kind the carrier was written with.
    pub kind: String,
    pub item_id: ItemId,
    /// Bucket the gesture began in. `None` when decoded from raw transfer
    /// data, which carries the id only.
    pub source: Option<ItemStatus>,
}

impl DragPayload {
    pub fn new(item_id: ItemId, source: ItemStatus) -> Self {
        Self {
            kind: PLAIN_TEXT_KIND.to_string(),
            item_id,
            source: Some(source),
        }
    }

    /// Decodes a raw transport pair (kind + text data).
    ///
    /// Returns `None` when `data` is not an item id. The source bucket is
    /// unknown on this path.
    pub fn from_transfer(kind: &str, data: &str) -> Option<Self> {
        let item_id = data.trim().parse::<ItemId>().ok()?;
        Some(Self {
            kind: kind.to_string(),
            item_id,
            source: None,
        })
    }
}

/// Why a gesture ended without touching the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// Gesture ended outside every drop target.
    NoTarget,
    /// Target does not accept the carrier's payload kind.
    KindMismatch,
    /// Transfer data did not decode to an item id.
    MalformedPayload,
    /// Gesture was aborted by the user or platform.
    Aborted,
}

impl Display for CancelReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::NoTarget => "no_target",
            Self::KindMismatch => "kind_mismatch",
            Self::MalformedPayload => "malformed_payload",
            Self::Aborted => "aborted",
        };
        f.write_str(value)
    }
}

/// Terminal state of one gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Target accepted the payload; the store decided the effect.
    Dropped(MoveOutcome),
    Cancelled(CancelReason),
}

impl DropOutcome {
    /// Whether the store actually changed.
    pub fn changed_store(self) -> bool {
        matches!(self, Self::Dropped(outcome) if outcome.is_moved())
    }
}

/// An in-flight drag gesture over one item.
///
/// Not `Clone`: completing or cancelling consumes the session.
#[derive(Debug, PartialEq, Eq)]
pub struct DragSession {
    payload: DragPayload,
    source: ItemStatus,
}

impl DragSession {
    /// Starts a gesture on `item_id`.
    ///
    /// Returns `None` (stays idle) when the store has no such item. The
    /// item's current status becomes the source bucket.
    pub fn start(store: &ItemStore, item_id: ItemId) -> Option<Self> {
        let Some(item) = store.get(item_id) else {
            debug!("event=drag_ignored module=drag reason=not_found item_id={item_id}");
            return None;
        };

        debug!(
            "event=drag_started module=drag item_id={} source={}",
            item_id, item.status
        );
        Some(Self {
            payload: DragPayload::new(item_id, item.status),
            source: item.status,
        })
    }

    pub fn payload(&self) -> &DragPayload {
        &self.payload
    }

    pub fn item_id(&self) -> ItemId {
        self.payload.item_id
    }

    /// Bucket the gesture began in.
    pub fn source(&self) -> ItemStatus {
        self.source
    }

    /// Completes the gesture over `target`.
    pub fn drop_on(self, target: &mut DropTarget, store: &mut ItemStore) -> DropOutcome {
        target.handle_drop(&self.payload, store)
    }

    /// Completes the gesture wherever it ended; `None` means outside any target.
    pub fn finish(self, over: Option<&mut DropTarget>, store: &mut ItemStore) -> DropOutcome {
        match over {
            Some(target) => self.drop_on(target, store),
            None => self.cancelled(CancelReason::NoTarget),
        }
    }

    /// Aborts the gesture with no side effect.
    pub fn cancel(self) -> DropOutcome {
        self.cancelled(CancelReason::Aborted)
    }

    fn cancelled(self, reason: CancelReason) -> DropOutcome {
        debug!(
            "event=drag_cancelled module=drag item_id={} reason={}",
            self.payload.item_id, reason
        );
        DropOutcome::Cancelled(reason)
    }
}
