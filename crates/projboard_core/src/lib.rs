//! Core domain logic for the project board.
//! Owns the item store, the drag reclassification protocol and form validation.

pub mod board;
pub mod config;
pub mod drag;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod validation;
pub mod view;

pub use board::{Board, BoardEvent, EventOutcome};
pub use config::{BoardConfig, ConfigError, FieldRules, FormRules, LogConfig};
pub use drag::session::{CancelReason, DragPayload, DragSession, DropOutcome, PLAIN_TEXT_KIND};
pub use drag::target::DropTarget;
pub use logging::{default_log_level, init_logging, init_logging_from, logging_status};
pub use model::item::{Item, ItemId, ItemStatus, UnknownStatus};
pub use service::project_form::{gather_input, FormError, FormField, ProjectForm, ProjectInput};
pub use store::item_store::{ItemStore, MoveOutcome};
pub use store::snapshot::Snapshot;
pub use store::subscription::{Subscription, SubscriptionId};
pub use validation::validator::{validate, FieldValue, RuleViolation, Validatable};
pub use view::bucket_list::{BucketEntry, BucketList};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
