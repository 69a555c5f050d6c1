//! Immutable item sequence handed to subscribers.

use crate::model::item::{Item, ItemId, ItemStatus};
use std::ops::Deref;
use std::rc::Rc;

/// Read-only copy of the store's items at one point in time.
///
/// Cloning a snapshot shares the same buffer; nothing reachable from it can
/// mutate the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    items: Rc<[Item]>,
}

impl Snapshot {
    pub(crate) fn capture(items: &[Item]) -> Self {
        Self {
            items: Rc::from(items),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Items of one bucket, in creation order.
    pub fn in_bucket(&self, status: ItemStatus) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter().filter(move |item| item.is_in(status))
    }

    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }
}

impl Deref for Snapshot {
    type Target = [Item];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}
