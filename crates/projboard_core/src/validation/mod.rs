//! Input validation rules.
//!
//! # Responsibility
//! - Provide the pure `validate` check used by the form pipeline.

pub mod validator;
