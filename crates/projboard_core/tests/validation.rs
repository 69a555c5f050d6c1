use projboard_core::{validate, FieldValue, Validatable};

#[test]
fn reference_cases() {
    assert!(!validate(&Validatable::new("").required()));
    assert!(!validate(&Validatable::new("hi").required().min_length(5)));
    assert!(validate(&Validatable::new("hello!").required().min_length(5)));
    assert!(validate(&Validatable::new(3.0).min(1.0).max(5.0)));
    assert!(!validate(&Validatable::new(7.0).min(1.0).max(5.0)));
}

#[test]
fn absent_rules_impose_nothing() {
    assert!(validate(&Validatable::new("")));
    assert!(validate(&Validatable::new(FieldValue::Number(-40.0))));
}

#[test]
fn max_length_is_inclusive() {
    assert!(validate(&Validatable::new("abcde").max_length(5)));
    assert!(!validate(&Validatable::new("abcdef").max_length(5)));
}

#[test]
fn min_length_counts_surrounding_whitespace() {
    assert!(validate(&Validatable::new("  ab ").min_length(5)));
    assert!(!validate(&Validatable::new("  ab ").required().min_length(6)));
}
