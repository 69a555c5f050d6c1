//! Domain model for the project board.
//!
//! # Responsibility
//! - Define the item record shared by store, drag protocol and views.
//!
//! # Invariants
//! - Every item is identified by a stable `ItemId`.
//! - Bucket membership is derived from `status` only.

pub mod item;
