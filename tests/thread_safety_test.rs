//! Tests for sharing pipelines and registries across threads.

use changeset_validators::{Changeset, Pipeline, PipelineRegistry, Validate};
use serde_json::json;
use std::sync::Arc;
use std::thread;

fn user() -> Pipeline {
    Pipeline::new()
        .then(Validate::required(["name", "age"]))
        .then(Validate::greater_than(["age"], 0))
}

#[test]
fn test_concurrent_validation() {
    let registry = Arc::new(PipelineRegistry::new());
    registry.register("User", user()).unwrap();

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let changeset = Changeset::new()
                    .put_change("name", json!(format!("User{}", i)))
                    .put_change("age", json!(20 + i));
                let result = registry.validate("User", &changeset).unwrap();
                assert!(result.is_valid());
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_registration() {
    let registry = PipelineRegistry::new();

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let registry = registry.clone();
            thread::spawn(move || {
                registry.register(format!("form{}", i), user()).unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(registry.names().len(), 10);
}

#[test]
fn test_shared_pipeline() {
    let pipeline = Arc::new(user());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let pipeline = Arc::clone(&pipeline);
            thread::spawn(move || {
                let changeset = Changeset::new()
                    .put_change("name", json!("x"))
                    .put_change("age", json!(i));
                pipeline.validate(&changeset).unwrap().is_valid()
            })
        })
        .collect();

    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![false, true, true, true, true, true, true, true]);
}
