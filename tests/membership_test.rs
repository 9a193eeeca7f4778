//! Tests for the `inclusion` and `exclusion` validators.

use changeset_validators::{Changeset, Validate, Validator};
use serde_json::json;

#[test]
fn test_inclusion() {
    let inclusion = Validate::inclusion(["role"], [json!("admin"), json!("user")]);

    let guest = Changeset::new().put_change("role", json!("guest"));
    let result = inclusion.validate(&guest).unwrap();
    let errors = result.errors_on("role");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].validation, "inclusion");

    let admin = Changeset::new().put_change("role", json!("admin"));
    assert!(inclusion.validate(&admin).unwrap().is_valid());
}

#[test]
fn test_exclusion() {
    let exclusion = Validate::exclusion(["username"], [json!("admin"), json!("root")]);

    let root = Changeset::new().put_change("username", json!("root"));
    let result = exclusion.validate(&root).unwrap();
    let errors = result.errors_on("username");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].validation, "exclusion");
    assert_eq!(errors[0].message, "is reserved");

    let ada = Changeset::new().put_change("username", json!("ada"));
    assert!(exclusion.validate(&ada).unwrap().is_valid());
}

#[test]
fn test_no_coercion() {
    let inclusion = Validate::inclusion(["level"], [json!(1), json!(2)]);

    let as_string = Changeset::new().put_change("level", json!("1"));
    assert_eq!(inclusion.validate(&as_string).unwrap().error_count(), 1);

    let as_bool = Changeset::new().put_change("level", json!(true));
    assert_eq!(inclusion.validate(&as_bool).unwrap().error_count(), 1);
}

#[test]
fn test_structured_values() {
    let inclusion = Validate::inclusion(["point"], [json!({"x": 0, "y": 0})]);
    let changeset = Changeset::new().put_change("point", json!({"y": 0, "x": 0}));
    assert!(inclusion.validate(&changeset).unwrap().is_valid());
}

#[test]
fn test_custom_messages() {
    let changeset = Changeset::new()
        .put_change("role", json!("guest"))
        .put_change("username", json!("root"));

    let role = Validate::inclusion(["role"], [json!("admin")]).message("is not a known role");
    let name = Validate::exclusion(["username"], [json!("root")]).message("is taken");

    let result = name.validate(&role.validate(&changeset).unwrap()).unwrap();
    assert_eq!(result.errors_on("role")[0].message, "is not a known role");
    assert_eq!(result.errors_on("username")[0].message, "is taken");
}

#[test]
fn test_float_form_of_listed_number() {
    let changeset = Changeset::new().put_change("level", json!(1.0));

    let inclusion = Validate::inclusion(["level"], [json!(1), json!(2)]);
    assert!(inclusion.validate(&changeset).unwrap().is_valid());

    let exclusion = Validate::exclusion(["level"], [json!(1)]);
    let result = exclusion.validate(&changeset).unwrap();
    assert_eq!(result.errors_on("level").len(), 1);
    assert_eq!(result.errors_on("level")[0].validation, "exclusion");
}
