//! Core use-case services.
//!
//! # Responsibility
//! - Turn raw user input into store operations.
//! - Keep presentation layers decoupled from validation details.

pub mod project_form;
