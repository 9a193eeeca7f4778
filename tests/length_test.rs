//! Tests for the `length` validator.

use changeset_validators::{Changeset, MisuseError, Validate, Validator};
use serde_json::json;

fn name(value: serde_json::Value) -> Changeset {
    Changeset::new().put_change("name", value)
}

#[test]
fn test_below_exact_length() {
    let result = Validate::length(["name"], 3, 3)
        .validate(&name(json!("ab")))
        .unwrap();

    let errors = result.errors_on("name");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].validation, "length");
    assert_eq!(errors[0].message, "should be at least 3 character(s)");
    assert_eq!(errors[0].attribute("min"), Some(&json!(3)));
    assert_eq!(errors[0].attribute("max"), Some(&json!(3)));
}

#[test]
fn test_exact_length_passes() {
    let result = Validate::length(["name"], 3, 3)
        .validate(&name(json!("abc")))
        .unwrap();
    assert!(result.is_valid());
}

#[test]
fn test_above_exact_length() {
    let result = Validate::length(["name"], 3, 3)
        .validate(&name(json!("abcd")))
        .unwrap();
    assert_eq!(
        result.errors_on("name")[0].message,
        "should be at most 3 character(s)"
    );
}

#[test]
fn test_array_too_long() {
    let changeset = Changeset::new().put_change("tags", json!(["a", "b", "c", "d", "e", "f"]));
    let result = Validate::length(["tags"], 2, 5).validate(&changeset).unwrap();

    assert_eq!(result.errors_on("tags")[0].message, "should be at most 5 items(s)");
}

#[test]
fn test_array_too_short() {
    let changeset = Changeset::new().put_change("tags", json!(["a"]));
    let result = Validate::length(["tags"], 2, 5).validate(&changeset).unwrap();

    assert_eq!(
        result.errors_on("tags")[0].message,
        "should be at least 2 items(s)"
    );
}

#[test]
fn test_within_bounds() {
    let changeset = Changeset::new()
        .put_change("name", json!("Ada"))
        .put_change("tags", json!([1, 2]));
    let result = Validate::length(["name", "tags"], 2, 5)
        .validate(&changeset)
        .unwrap();
    assert!(result.is_valid());
}

#[test]
fn test_custom_message() {
    let result = Validate::length(["name"], 5, 10)
        .message("is the wrong size")
        .validate(&name(json!("ab")))
        .unwrap();

    let error = &result.errors_on("name")[0];
    assert_eq!(error.message, "is the wrong size");
    assert_eq!(error.attribute("min"), Some(&json!(5)));
}

#[test]
fn test_no_pending_change_is_noop() {
    let changeset = Changeset::from_data([("name", json!("a"))]);
    let result = Validate::length(["name"], 3, 10).validate(&changeset).unwrap();
    assert_eq!(result, changeset);
}

#[test]
fn test_wrong_type_is_misuse() {
    for value in [json!(42), json!(true), json!({"a": 1})] {
        let err = Validate::length(["name"], 1, 3)
            .validate(&name(value))
            .unwrap_err();
        assert!(matches!(err, MisuseError::ExpectedLengthValue { .. }));
        assert_eq!(err.field(), "name");
    }
}

#[test]
fn test_misuse_stops_at_first_bad_field() {
    let changeset = Changeset::new()
        .put_change("a", json!("x"))
        .put_change("b", json!(5))
        .put_change("c", json!(6));

    let err = Validate::length(["a", "b", "c"], 2, 3)
        .validate(&changeset)
        .unwrap_err();
    assert_eq!(err.field(), "b");
}
