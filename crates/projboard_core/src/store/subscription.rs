//! Subscriber registry and scoped subscription tokens.
//!
//! # Invariants
//! - Listeners are notified in registration order.
//! - A listener is removed exactly once: on `unsubscribe`, on token drop,
//!   or never when the token is detached.
//! - Tokens outliving their store release nothing and never panic.

use crate::store::snapshot::Snapshot;
use log::debug;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener = Rc<RefCell<dyn FnMut(&Snapshot)>>;

/// Registration handle id, unique per store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub(crate) struct SubscriberRegistry {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl SubscriberRegistry {
    pub(crate) fn insert(&mut self, listener: Listener) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.listeners.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        before != self.listeners.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Clones the current listener list so delivery runs without holding the
    /// registry borrow.
    pub(crate) fn listeners(&self) -> Vec<Listener> {
        self.listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect()
    }
}

/// Scoped registration returned by `ItemStore::subscribe`.
///
/// Dropping the token unsubscribes. Call `detach` to keep the listener for
/// the lifetime of the store.
#[must_use = "dropping a Subscription unsubscribes its listener immediately"]
pub struct Subscription {
    id: SubscriptionId,
    registry: Weak<RefCell<SubscriberRegistry>>,
    active: bool,
}

impl Subscription {
    pub(crate) fn new(id: SubscriptionId, registry: Weak<RefCell<SubscriberRegistry>>) -> Self {
        Self {
            id,
            registry,
            active: true,
        }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Removes the listener now.
    pub fn unsubscribe(mut self) {
        self.release();
    }

    /// Keeps the listener registered until the store itself is dropped.
    pub fn detach(mut self) {
        self.active = false;
    }

    fn release(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;

        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        if registry.borrow_mut().remove(self.id) {
            debug!(
                "event=subscriber_removed module=store subscription_id={}",
                self.id.0
            );
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.active)
            .finish()
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
