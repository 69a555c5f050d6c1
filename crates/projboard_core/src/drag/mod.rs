//! Drag-and-drop reclassification protocol.
//!
//! # Responsibility
//! - Carry one item id from the gesture source to a bucket drop target.
//! - Gate drops on payload kind and forward accepted drops to the store.
//!
//! # Invariants
//! - The item id lives only in the gesture's own payload, never in shared state.
//! - Cancelled gestures never mutate the store.

pub mod session;
pub mod target;
