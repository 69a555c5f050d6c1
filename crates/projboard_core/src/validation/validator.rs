//! Field value validator.
//!
//! # Responsibility
//! - Check one raw field value against a declarative rule set.
//!
//! # Invariants
//! - Validation is pure: no side effects, never panics.
//! - Length rules apply only to text values; bound rules apply only to numbers.
//! - All present rules are ANDed; absent rules impose nothing.

use std::fmt::{Display, Formatter};

/// Raw value of one form field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    /// Text coercion used by the `required` rule.
    ///
    /// Integral numbers render without a fraction so `3.0` coerces to `3`.
    fn coerce_to_text(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Number(value) => value.to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// One failed rule, reported in declaration order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleViolation {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Min(f64),
    Max(f64),
}

impl Display for RuleViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => f.write_str("required"),
            Self::MinLength(limit) => write!(f, "min_length={limit}"),
            Self::MaxLength(limit) => write!(f, "max_length={limit}"),
            Self::Min(limit) => write!(f, "min={limit}"),
            Self::Max(limit) => write!(f, "max={limit}"),
        }
    }
}

/// A value together with the rules it must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: FieldValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    /// Creates an unconstrained validatable value.
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            value: value.into(),
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, limit: usize) -> Self {
        self.min_length = Some(limit);
        self
    }

    pub fn max_length(mut self, limit: usize) -> Self {
        self.max_length = Some(limit);
        self
    }

    pub fn min(mut self, limit: f64) -> Self {
        self.min = Some(limit);
        self
    }

    pub fn max(mut self, limit: f64) -> Self {
        self.max = Some(limit);
        self
    }

    /// Returns every failed rule, in the order rules are declared.
    pub fn violations(&self) -> Vec<RuleViolation> {
        let mut failed = Vec::new();

        if self.required && self.value.coerce_to_text().trim().is_empty() {
            failed.push(RuleViolation::Required);
        }

        match &self.value {
            FieldValue::Text(text) => {
                // Character count, measured on the untrimmed value.
                let length = text.chars().count();
                if let Some(limit) = self.min_length {
                    if length < limit {
                        failed.push(RuleViolation::MinLength(limit));
                    }
                }
                if let Some(limit) = self.max_length {
                    if length > limit {
                        failed.push(RuleViolation::MaxLength(limit));
                    }
                }
            }
            FieldValue::Number(number) => {
                // NaN fails any present bound.
                if let Some(limit) = self.min {
                    if number.is_nan() || *number < limit {
                        failed.push(RuleViolation::Min(limit));
                    }
                }
                if let Some(limit) = self.max {
                    if number.is_nan() || *number > limit {
                        failed.push(RuleViolation::Max(limit));
                    }
                }
            }
        }

        failed
    }
}

/// Returns whether `input` satisfies all of its rules.
pub fn validate(input: &Validatable) -> bool {
    input.violations().is_empty()
}
