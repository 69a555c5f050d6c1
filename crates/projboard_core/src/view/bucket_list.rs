//! Subscriber-side projection of one bucket.
//!
//! # Responsibility
//! - Keep the items of one bucket current by subscribing to the store.
//! - Derive the display strings a renderer needs.
//!
//! # Invariants
//! - The projection is only written from store notifications.
//! - Dropping the list releases its store subscription.

use crate::model::item::{Item, ItemId, ItemStatus};
use crate::store::item_store::ItemStore;
use crate::store::snapshot::Snapshot;
use crate::store::subscription::Subscription;
use std::cell::RefCell;
use std::rc::Rc;

/// Display data for one rendered list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketEntry {
    pub id: ItemId,
    pub title: String,
    /// e.g. `3 persons assigned`.
    pub assignees: String,
    pub description: String,
}

impl From<&Item> for BucketEntry {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            assignees: format!("{} assigned", item.assignee_label()),
            description: item.description.clone(),
        }
    }
}

#[derive(Debug, Default)]
struct BucketState {
    items: Vec<Item>,
    refreshes: usize,
}

/// Live list of the items in one bucket.
#[derive(Debug)]
pub struct BucketList {
    bucket: ItemStatus,
    state: Rc<RefCell<BucketState>>,
    _subscription: Subscription,
}

impl BucketList {
    /// Subscribes a new list for `bucket`. Starts from the store's current items.
    pub fn attach(store: &ItemStore, bucket: ItemStatus) -> Self {
        let state = Rc::new(RefCell::new(BucketState {
            items: store.items_with_status(bucket).cloned().collect(),
            refreshes: 0,
        }));

        let sink = Rc::clone(&state);
        let subscription = store.subscribe(move |snapshot: &Snapshot| {
            let mut state = sink.borrow_mut();
            state.items = snapshot.in_bucket(bucket).cloned().collect();
            state.refreshes += 1;
        });

        Self {
            bucket,
            state,
            _subscription: subscription,
        }
    }

    pub fn bucket(&self) -> ItemStatus {
        self.bucket
    }

    /// List heading, e.g. `ACTIVE PROJECTS`.
    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.bucket.as_str().to_uppercase())
    }

    pub fn items(&self) -> Vec<Item> {
        self.state.borrow().items.clone()
    }

    pub fn entries(&self) -> Vec<BucketEntry> {
        self.state
            .borrow()
            .items
            .iter()
            .map(BucketEntry::from)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.state.borrow().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().items.is_empty()
    }

    /// Number of store notifications received so far.
    pub fn refresh_count(&self) -> usize {
        self.state.borrow().refreshes
    }
}
