//! Serde and JsonSchema checks for the persisted and rendered entity types.

use pretty_assertions::assert_eq;
use schemars::schema_for;
use shelf_core::entities::{Category, Session, User};

fn schema_errors(schema: &serde_json::Value, instance: &serde_json::Value) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn demo_user() -> User {
    User {
        id: "user-123".into(),
        name: "Demo User".into(),
        email: "demo@example.com".into(),
    }
}

#[test]
fn category_json_uses_snake_case_and_validates() {
    let category = Category {
        id: "cat-0a1b2c3d".into(),
        name: "Hats".into(),
        item_count: 36,
        image: "https://example.com/hats.jpg".into(),
    };

    let json = serde_json::to_value(&category).unwrap();
    assert_eq!(json["item_count"], 36);

    let schema = serde_json::to_value(schema_for!(Category)).unwrap();
    assert!(schema_errors(&schema, &json).is_empty());
}

#[test]
fn negative_item_count_fails_category_schema() {
    let schema = serde_json::to_value(schema_for!(Category)).unwrap();
    let instance = serde_json::json!({
        "id": "cat-1",
        "name": "Broken",
        "item_count": -4,
        "image": ""
    });
    assert!(!schema_errors(&schema, &instance).is_empty());
}

#[test]
fn persisted_user_roundtrips() {
    let raw = serde_json::to_string(&demo_user()).unwrap();
    let back: User = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, demo_user());
}

#[test]
fn session_validates_against_schema() {
    let session = Session {
        token: "mock-jwt-token".into(),
        user: demo_user(),
    };
    let schema = serde_json::to_value(schema_for!(Session)).unwrap();
    let instance = serde_json::to_value(&session).unwrap();
    assert!(schema_errors(&schema, &instance).is_empty());
}
