//! Reactive item state.
//!
//! # Responsibility
//! - Hold the ordered item sequence and its subscriber registry.
//! - Hand out read-only snapshots and scoped subscription tokens.
//!
//! # Invariants
//! - Only the store mutates items.
//! - Every effective change produces exactly one notification per subscriber.

pub mod item_store;
pub mod snapshot;
pub mod subscription;
