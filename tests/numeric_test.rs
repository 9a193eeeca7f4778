//! Tests for the numeric comparison validators.

use changeset_validators::{Changeset, Validate, Validator};
use serde_json::{json, Value};

fn age(value: Value) -> Changeset {
    Changeset::new().put_change("age", value)
}

#[test]
fn test_greater_than_boundary_fails() {
    let result = Validate::greater_than(["age"], 18)
        .validate(&age(json!(18)))
        .unwrap();

    let errors = result.errors_on("age");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].validation, "greater than");
    assert_eq!(errors[0].message, "must be greater than 18");
    assert_eq!(errors[0].attribute("number"), Some(&json!(18)));

    let result = Validate::greater_than(["age"], 18)
        .validate(&age(json!(19)))
        .unwrap();
    assert!(result.is_valid());
}

#[test]
fn test_less_than() {
    let less_than = Validate::less_than(["age"], 65);
    assert!(less_than.validate(&age(json!(64))).unwrap().is_valid());

    let result = less_than.validate(&age(json!(65))).unwrap();
    assert_eq!(result.errors_on("age")[0].message, "must be less than 65");
    assert_eq!(result.errors_on("age")[0].validation, "less than");
}

#[test]
fn test_inclusive_comparisons() {
    let at_most = Validate::less_than_or_equal_to(["age"], 10);
    assert!(at_most.validate(&age(json!(10))).unwrap().is_valid());
    let result = at_most.validate(&age(json!(11))).unwrap();
    assert_eq!(
        result.errors_on("age")[0].message,
        "must be less than or equal to 10"
    );

    let at_least = Validate::greater_than_or_equal_to(["age"], 10);
    assert!(at_least.validate(&age(json!(10))).unwrap().is_valid());
    let result = at_least.validate(&age(json!(9))).unwrap();
    assert_eq!(
        result.errors_on("age")[0].validation,
        "greater than or equal to"
    );
}

#[test]
fn test_equal_to() {
    let equal = Validate::equal_to(["age"], 42);
    assert!(equal.validate(&age(json!(42))).unwrap().is_valid());
    assert!(equal.validate(&age(json!(42.0))).unwrap().is_valid());

    let result = equal.validate(&age(json!(41))).unwrap();
    assert_eq!(result.errors_on("age")[0].message, "must be equal to 42");
    assert_eq!(result.errors_on("age")[0].validation, "equal to");
}

#[test]
fn test_permissive_coercion() {
    let adult = Validate::greater_than_or_equal_to(["age"], 18);

    assert!(adult.validate(&age(json!("21"))).unwrap().is_valid());
    assert_eq!(adult.validate(&age(json!("12"))).unwrap().error_count(), 1);
    assert_eq!(adult.validate(&age(json!("old"))).unwrap().error_count(), 1);
    assert_eq!(adult.validate(&age(json!([21]))).unwrap().error_count(), 1);
}

#[test]
fn test_message_override() {
    let result = Validate::greater_than(["age"], 18)
        .message("you must be an adult")
        .validate(&age(json!(3)))
        .unwrap();

    let error = &result.errors_on("age")[0];
    assert_eq!(error.message, "you must be an adult");
    assert_eq!(error.validation, "greater than");
}

#[test]
fn test_no_pending_change_is_noop() {
    let changeset = Changeset::from_data([("age", json!(3))]);
    let result = Validate::greater_than(["age"], 18).validate(&changeset).unwrap();
    assert!(result.is_valid());
}

#[test]
fn test_bounds_from_wide_integers() {
    let max_items: usize = 5;
    let floor: i64 = -10;
    let changeset = Changeset::new()
        .put_change("items", json!(6))
        .put_change("temp", json!(-11));

    let items = Validate::less_than_or_equal_to(["items"], max_items);
    let temp = Validate::greater_than_or_equal_to(["temp"], floor);
    let result = temp.validate(&items.validate(&changeset).unwrap()).unwrap();

    assert_eq!(result.errors_on("items")[0].message, "must be less than or equal to 5");
    assert_eq!(result.errors_on("temp")[0].message, "must be greater than or equal to -10");
}
