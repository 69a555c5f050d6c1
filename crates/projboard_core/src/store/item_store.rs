//! In-memory item store with synchronous change notification.
//!
//! # Responsibility
//! - Own item lifetime: creation and status changes.
//! - Notify subscribers with a snapshot after every effective change.
//!
//! # Invariants
//! - Items keep creation order; status changes never reorder them.
//! - Redundant moves and moves of unknown ids notify nobody.
//! - Subscribers see the store only after a change is complete.

use crate::model::item::{Item, ItemId, ItemStatus};
use crate::store::snapshot::Snapshot;
use crate::store::subscription::{SubscriberRegistry, Subscription};
use log::{debug, info};
use std::cell::RefCell;
use std::rc::Rc;

/// Result of `ItemStore::move_item`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Status changed and subscribers were notified.
    Moved { from: ItemStatus },
    /// Item already had the requested status.
    Unchanged,
    /// No item with that id.
    NotFound,
}

impl MoveOutcome {
    pub fn is_moved(self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Single source of truth for the board's items.
///
/// Construct once per board and hand it to consumers explicitly. The store
/// is single-threaded (`!Send`): all calls run to completion in order.
#[derive(Default)]
pub struct ItemStore {
    items: Vec<Item>,
    subscribers: Rc<RefCell<SubscriberRegistry>>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new active item and notifies subscribers.
    ///
    /// Inputs are expected to be validated already; see `ProjectForm`.
    pub fn add_item(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people_count: u32,
    ) -> ItemId {
        let item = Item::new(title, description, people_count);
        let id = item.id;
        self.items.push(item);

        info!(
            "event=item_added module=store item_id={} people_count={} total={}",
            id,
            people_count,
            self.items.len()
        );
        self.notify();
        id
    }

    /// Reclassifies one item into `new_status`.
    ///
    /// Unknown ids and same-status moves are benign no-ops.
    pub fn move_item(&mut self, id: ItemId, new_status: ItemStatus) -> MoveOutcome {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            debug!("event=move_ignored module=store reason=not_found item_id={id}");
            return MoveOutcome::NotFound;
        };
        if item.status == new_status {
            debug!(
                "event=move_ignored module=store reason=unchanged item_id={id} status={new_status}"
            );
            return MoveOutcome::Unchanged;
        }

        let from = item.status;
        item.status = new_status;
        info!("event=item_moved module=store item_id={id} from={from} to={new_status}");
        self.notify();
        MoveOutcome::Moved { from }
    }

    /// Registers `callback` for every future change.
    ///
    /// The callback is not invoked for the current state.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: FnMut(&Snapshot) + 'static,
    {
        let listener: Rc<RefCell<dyn FnMut(&Snapshot)>> = Rc::new(RefCell::new(callback));
        let id = self.subscribers.borrow_mut().insert(listener);
        debug!("event=subscriber_added module=store subscription_id={id}");
        Subscription::new(id, Rc::downgrade(&self.subscribers))
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.items)
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items_with_status(&self, status: ItemStatus) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter().filter(move |item| item.is_in(status))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        // Registry borrow ends here so listeners may drop their own tokens.
        let listeners = self.subscribers.borrow().listeners();
        for listener in listeners {
            let mut callback = listener.borrow_mut();
            (&mut *callback)(&snapshot);
        }
    }
}

impl std::fmt::Debug for ItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemStore")
            .field("items", &self.items)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{ItemStore, MoveOutcome};
    use crate::model::item::ItemStatus;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn subscriber_is_not_called_retroactively() {
        let mut store = ItemStore::new();
        store.add_item("first", "first item", 1);

        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let _subscription = store.subscribe(move |_| *counter.borrow_mut() += 1);

        assert_eq!(*calls.borrow(), 0);
        store.add_item("second", "second item", 2);
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn move_keeps_creation_order() {
        let mut store = ItemStore::new();
        let first = store.add_item("first", "first item", 1);
        let second = store.add_item("second", "second item", 2);

        assert!(store.move_item(first, ItemStatus::Finished).is_moved());
        let order: Vec<_> = store.items().iter().map(|item| item.id).collect();
        assert_eq!(order, vec![first, second]);
    }

    #[test]
    fn move_reports_previous_status() {
        let mut store = ItemStore::new();
        let id = store.add_item("first", "first item", 1);
        assert_eq!(
            store.move_item(id, ItemStatus::Finished),
            MoveOutcome::Moved {
                from: ItemStatus::Active
            }
        );
        assert_eq!(
            store.move_item(id, ItemStatus::Finished),
            MoveOutcome::Unchanged
        );
    }

    #[test]
    fn dropped_subscription_is_released() {
        let store = ItemStore::new();
        let subscription = store.subscribe(|_| {});
        assert_eq!(store.subscriber_count(), 1);
        drop(subscription);
        assert_eq!(store.subscriber_count(), 0);

        store.subscribe(|_| {}).detach();
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn token_outliving_store_is_harmless() {
        let store = ItemStore::new();
        let subscription = store.subscribe(|_| {});
        drop(store);
        subscription.unsubscribe();
    }
}
