//! Tests for concurrent validation.

use serde_json::{json, Value};
use shapecheck::{validate_batch, Definition, DefinitionRegistry};
use std::sync::Arc;
use std::thread;

#[test]
fn test_concurrent_validation() {
    let registry = Arc::new(DefinitionRegistry::new());
    registry
        .register(
            "User",
            Definition::object([("name", Definition::string()), ("age", Definition::number())]),
        )
        .unwrap();

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let result = registry
                    .validate("User", &json!({"name": format!("User{}", i), "age": 20 + i}))
                    .unwrap();
                assert!(result.is_success());
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_registration() {
    let registry = DefinitionRegistry::new();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = registry.clone();
            thread::spawn(move || {
                registry
                    .register(format!("Def{}", i), Definition::number())
                    .unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(registry.names().len(), 8);
}

#[test]
fn test_batch_preserves_order() {
    let def = Definition::array_of(Definition::number());
    let sources: Vec<Value> = (0..64)
        .map(|i| if i % 3 == 0 { json!([i, "x"]) } else { json!([i]) })
        .collect();

    let results = validate_batch(&def, &sources);

    assert_eq!(results.len(), sources.len());
    for (i, result) in results.iter().enumerate() {
        assert_eq!(result.is_failure(), i % 3 == 0, "source {i}");
    }
}
