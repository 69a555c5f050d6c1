//! Work item domain model.
//!
//! # Responsibility
//! - Define the canonical record rendered by both bucket lists.
//! - Define the two-bucket status partition and its wire names.
//!
//! # Invariants
//! - `id` is generated once and never reassigned.
//! - `status` is always one of the two `ItemStatus` buckets.
//! - Only `ItemStore` changes `status` after creation.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier of one work item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = Uuid;

/// Bucket an item is currently classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    /// Newly created, still being worked on.
    Active,
    /// Moved to the finished bucket.
    Finished,
}

impl ItemStatus {
    /// Bucket name as used in events and labels.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl Display for ItemStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a bucket name is neither `active` nor `finished`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl Display for UnknownStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown bucket `{}`; expected active|finished", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for ItemStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// One unit of work with its assignee count and bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Generated at creation; unique for the store lifetime.
    pub id: ItemId,
    pub title: String,
    pub description: String,
    /// Number of people assigned.
    pub people_count: u32,
    pub status: ItemStatus,
}

impl Item {
    /// Creates a new active item with a freshly generated random id.
    ///
    /// Ids are v4 UUIDs; collisions are not reconciled.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people_count: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            people_count,
            status: ItemStatus::Active,
        }
    }

    /// Human-readable assignee count, e.g. `1 person` or `3 persons`.
    pub fn assignee_label(&self) -> String {
        if self.people_count == 1 {
            "1 person".to_string()
        } else {
            format!("{} persons", self.people_count)
        }
    }

    pub fn is_in(&self, status: ItemStatus) -> bool {
        self.status == status
    }
}
