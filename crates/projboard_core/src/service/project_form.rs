//! Project form submission use-case.
//!
//! # Responsibility
//! - Hold the three raw form field buffers.
//! - Convert, validate and forward a submission to the item store.
//!
//! # Invariants
//! - A submission either adds exactly one item or changes nothing.
//! - Field buffers are cleared only after `add_item` succeeded.
//! - Rejections are reported as one aggregate error.

use crate::config::FormRules;
use crate::model::item::ItemId;
use crate::store::item_store::ItemStore;
use crate::validation::validator::Validatable;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

const REJECTION_MESSAGE: &str = "Invalid input, please try again";

/// Form field identifiers used in rejection diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    People,
}

impl FormField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::People => "people",
        }
    }
}

/// Submission rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// At least one field failed its rules; `fields` lists which.
    InvalidInput { fields: Vec<FormField> },
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { .. } => f.write_str(REJECTION_MESSAGE),
        }
    }
}

impl Error for FormError {}

/// Submission that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub people_count: u32,
}

/// Raw project form state.
#[derive(Debug, Clone, Default)]
pub struct ProjectForm {
    title: String,
    description: String,
    people: String,
    rules: FormRules,
}

impl ProjectForm {
    /// Creates an empty form checked against `rules`.
    pub fn new(rules: FormRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    pub fn set_people(&mut self, value: impl Into<String>) {
        self.people = value.into();
    }

    /// Current `(title, description, people)` buffers.
    pub fn fields(&self) -> (&str, &str, &str) {
        (&self.title, &self.description, &self.people)
    }

    pub fn rules(&self) -> &FormRules {
        &self.rules
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }

    /// Validates the buffers without touching them.
    pub fn gather(&self) -> Result<ProjectInput, FormError> {
        gather_input(&self.rules, &self.title, &self.description, &self.people)
    }

    /// Validates and adds one item, then clears the buffers.
    ///
    /// # Errors
    /// Returns `FormError::InvalidInput` and leaves buffers and store untouched
    /// when any field fails.
    pub fn submit(&mut self, store: &mut ItemStore) -> Result<ItemId, FormError> {
        let input = self.gather()?;
        let id = store.add_item(input.title, input.description, input.people_count);
        self.clear();
        Ok(id)
    }
}

/// Converts and validates three raw field values.
///
/// The people count is read as a number from the trimmed text; anything
/// unparsable becomes NaN and fails the numeric bounds. Fractional counts
/// are rejected.
///
/// # Errors
/// Returns `FormError::InvalidInput` naming every failing field.
pub fn gather_input(
    rules: &FormRules,
    title: &str,
    description: &str,
    people: &str,
) -> Result<ProjectInput, FormError> {
    let people_value = parse_people(people);
    let checks = [
        (FormField::Title, rules.title.to_validatable(title)),
        (
            FormField::Description,
            rules.description.to_validatable(description),
        ),
        (FormField::People, rules.people.to_validatable(people_value)),
    ];

    let mut rejected = Vec::new();
    for (field, input) in &checks {
        if !report_violations(*field, input) {
            rejected.push(*field);
        }
    }
    if !is_whole_count(people_value) && !rejected.contains(&FormField::People) {
        warn!("event=form_rejected module=form field=people rule=whole_number");
        rejected.push(FormField::People);
    }

    if !rejected.is_empty() {
        return Err(FormError::InvalidInput { fields: rejected });
    }

    info!("event=form_accepted module=form people_count={people_value}");
    Ok(ProjectInput {
        title: title.to_string(),
        description: description.to_string(),
        people_count: people_value as u32,
    })
}

fn report_violations(field: FormField, input: &Validatable) -> bool {
    let violations = input.violations();
    for rule in &violations {
        warn!(
            "event=form_rejected module=form field={} rule={}",
            field.as_str(),
            rule
        );
    }
    violations.is_empty()
}

/// Numeric coercion of the people field: blank is 0, unparsable is NaN.
///
/// Unsigned `0x`/`0b`/`0o` integer literals are accepted alongside decimal text.
fn parse_people(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix_literal(text: &str) -> Option<f64> {
    let (radix, digits) = match text.get(..2)? {
        "0x" | "0X" => (16, &text[2..]),
        "0b" | "0B" => (2, &text[2..]),
        "0o" | "0O" => (8, &text[2..]),
        _ => return None,
    };
    if digits.starts_with(['+', '-']) {
        return Some(f64::NAN);
    }
    Some(u64::from_str_radix(digits, radix).map_or(f64::NAN, |value| value as f64))
}

fn is_whole_count(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0 && value >= 0.0 && value <= f64::from(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::{gather_input, parse_people, FormError, FormField};
    use crate::config::FormRules;

    #[test]
    fn parse_people_treats_blank_as_zero_and_garbage_as_nan() {
        assert_eq!(parse_people(" 3 "), 3.0);
        assert_eq!(parse_people(""), 0.0);
        assert!(parse_people("three").is_nan());
    }

    #[test]
    fn parse_people_accepts_prefixed_integer_literals() {
        assert_eq!(parse_people("0x3"), 3.0);
        assert_eq!(parse_people(" 0B11 "), 3.0);
        assert_eq!(parse_people("0o4"), 4.0);
        assert!(parse_people("0x").is_nan());
        assert!(parse_people("0x-3").is_nan());
        assert!(parse_people("-0x3").is_nan());
        assert!(parse_people("0b2").is_nan());

        let input = gather_input(&FormRules::default(), "API", "REST endpoints", "0x3").unwrap();
        assert_eq!(input.people_count, 3);
    }

    #[test]
    fn rejection_lists_every_failing_field() {
        let err = gather_input(&FormRules::default(), "", "x", "9").unwrap_err();
        assert_eq!(
            err,
            FormError::InvalidInput {
                fields: vec![FormField::Title, FormField::Description, FormField::People],
            }
        );
        assert_eq!(err.to_string(), "Invalid input, please try again");
    }

    #[test]
    fn fractional_people_count_is_rejected() {
        let err = gather_input(&FormRules::default(), "API", "REST endpoints", "2.5").unwrap_err();
        assert_eq!(
            err,
            FormError::InvalidInput {
                fields: vec![FormField::People],
            }
        );
    }

    #[test]
    fn accepted_input_keeps_raw_text() {
        let input = gather_input(&FormRules::default(), " API ", "REST endpoints", "5").unwrap();
        assert_eq!(input.title, " API ");
        assert_eq!(input.people_count, 5);
    }
}
