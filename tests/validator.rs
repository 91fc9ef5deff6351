//! Tests for the dynamic schema builder and field constraints.
mod common;
use common::*;
use hyouji::prelude::*;
use serde_json::{Value, json};

#[test]
fn test_hidden_field_contributes_no_constraint() {
    let builder = SchemaBuilder::new(license_form()).unwrap();

    // With age 16 the license field is hidden: validating an empty snapshot
    // must not produce a license error, even though license is required.
    let values = json!({ "age": "16" });
    let report = builder.schema(&values).unwrap().validate(&values);
    assert!(report.valid);
    assert!(!report.errors.contains_key("license"));
}

#[test]
fn test_visible_required_field_fails_when_empty() {
    let builder = SchemaBuilder::new(license_form()).unwrap();

    let values = json!({ "age": 18, "license": "" });
    let report = builder.schema(&values).unwrap().validate(&values);
    assert!(!report.valid);
    assert_eq!(
        report.errors.get("license").map(String::as_str),
        Some("This field is required")
    );

    let values = json!({ "age": 18, "license": "B-1234" });
    let report = builder.schema(&values).unwrap().validate(&values);
    assert!(report.valid);
}

#[test]
fn test_required_text_rejects_null_and_absent() {
    let form = Form {
        id: "f".to_string(),
        name: "F".to_string(),
        spacing: None,
        elements: vec![vec![element("name", "text", true)]],
    };
    let builder = SchemaBuilder::new(form).unwrap();

    for values in [json!({}), json!({ "name": null }), json!({ "name": "" })] {
        let report = builder.schema(&values).unwrap().validate(&values);
        assert!(!report.valid, "expected failure for {}", values);
    }
}

#[test]
fn test_required_checkbox_with_choices() {
    let builder = SchemaBuilder::new(consent_form()).unwrap();

    let cases: Vec<(Value, bool)> = vec![
        (json!({ "consent": [] }), false),
        (json!({ "consent": ["yes"] }), true),
        // An id outside the element's own choice set never satisfies it.
        (json!({ "consent": ["no"] }), false),
        (json!({}), false),
        (json!({ "consent": "yes" }), false),
    ];
    for (values, expected_valid) in cases {
        let report = builder.schema(&values).unwrap().validate(&values);
        assert_eq!(report.valid, expected_valid, "for values {}", values);
        if !expected_valid {
            assert_eq!(
                report.errors.get("consent").map(String::as_str),
                Some("This field must be checked")
            );
        }
    }
}

#[test]
fn test_optional_checkbox_accepts_absent_but_not_foreign_ids() {
    let mut form = consent_form();
    form.elements[0][0].required = false;
    let builder = SchemaBuilder::new(form).unwrap();

    let values = json!({});
    assert!(builder.schema(&values).unwrap().validate(&values).valid);

    let values = json!({ "consent": ["no"] });
    assert!(!builder.schema(&values).unwrap().validate(&values).valid);
}

#[test]
fn test_required_checkbox_without_choices_is_boolean() {
    let form = Form {
        id: "f".to_string(),
        name: "F".to_string(),
        spacing: None,
        elements: vec![vec![element("tos", "checkbox", true)]],
    };
    let builder = SchemaBuilder::new(form).unwrap();

    let values = json!({ "tos": true });
    assert!(builder.schema(&values).unwrap().validate(&values).valid);

    for values in [json!({ "tos": false }), json!({}), json!({ "tos": "true" })] {
        let report = builder.schema(&values).unwrap().validate(&values);
        assert!(!report.valid, "expected failure for {}", values);
    }
}

#[test]
fn test_unregistered_type_falls_back_to_presence_check() {
    let form = Form {
        id: "f".to_string(),
        name: "F".to_string(),
        spacing: None,
        elements: vec![vec![element("avatar", "file-upload", true)]],
    };
    let builder = SchemaBuilder::new(form).unwrap();

    let values = json!({});
    let report = builder.schema(&values).unwrap().validate(&values);
    assert!(!report.valid);
    assert_eq!(
        report.errors.get("avatar").map(String::as_str),
        Some("This field is required")
    );

    let values = json!({ "avatar": { "path": "a.png" } });
    assert!(builder.schema(&values).unwrap().validate(&values).valid);
}

#[test]
fn test_type_mapping_reuses_builtin_behavior() {
    let form = Form {
        id: "f".to_string(),
        name: "F".to_string(),
        spacing: None,
        elements: vec![vec![element("bio", "textarea", true)]],
    };
    let builder = SchemaBuilder::new(form)
        .unwrap()
        .with_type_mapping("textarea", "text");

    // Mapped onto "text", an empty string now fails instead of passing the
    // fallback presence check.
    let values = json!({ "bio": "" });
    assert!(!builder.schema(&values).unwrap().validate(&values).valid);
}

#[test]
fn test_custom_constraint_builder() {
    struct EvenNumberBuilder;
    struct EvenNumberConstraint {
        required: bool,
    }
    impl Constraint for EvenNumberConstraint {
        fn check(&self, value: Option<&Value>) -> Option<String> {
            match value.and_then(Value::as_i64) {
                Some(n) if n % 2 == 0 => None,
                Some(_) => Some("Must be even".to_string()),
                None if self.required => Some("This field is required".to_string()),
                None => None,
            }
        }
    }
    impl ConstraintBuilder for EvenNumberBuilder {
        fn type_tag(&self) -> &str {
            "even-number"
        }
        fn build(&self, el: &Element) -> std::result::Result<Box<dyn Constraint>, SchemaError> {
            Ok(Box::new(EvenNumberConstraint {
                required: el.required,
            }))
        }
    }

    let form = Form {
        id: "f".to_string(),
        name: "F".to_string(),
        spacing: None,
        elements: vec![vec![element("seats", "even-number", true)]],
    };
    let builder = SchemaBuilder::new(form)
        .unwrap()
        .with_custom_builder(Box::new(EvenNumberBuilder));

    let values = json!({ "seats": 4 });
    assert!(builder.schema(&values).unwrap().validate(&values).valid);

    let values = json!({ "seats": 3 });
    let report = builder.schema(&values).unwrap().validate(&values);
    assert_eq!(
        report.errors.get("seats").map(String::as_str),
        Some("Must be even")
    );
}

#[test]
fn test_duplicate_element_id_is_a_hard_error() {
    let form = Form {
        id: "f".to_string(),
        name: "F".to_string(),
        spacing: None,
        elements: vec![
            vec![element("name", "text", false)],
            vec![element("name", "text", false)],
        ],
    };
    let result = SchemaBuilder::new(form);
    assert!(matches!(
        result,
        Err(FormError::DuplicateElementId { element_id }) if element_id == "name"
    ));
}

#[test]
fn test_unknown_value_keys_are_ignored() {
    let builder = SchemaBuilder::new(license_form()).unwrap();
    let values = json!({ "age": 18, "license": "B-1", "ghost": "boo" });
    let report = builder.schema(&values).unwrap().validate(&values);
    assert!(report.valid);
}

#[test]
fn test_schema_cache_reuses_schemas_per_visible_set() {
    let builder = SchemaBuilder::new(license_form()).unwrap();
    let mut cache = SchemaCache::new();

    // Two snapshots with the same visible set share one cache entry.
    cache.schema_for(&builder, &json!({ "age": 18 })).unwrap();
    cache.schema_for(&builder, &json!({ "age": 30 })).unwrap();
    assert_eq!(cache.len(), 1);

    // Hiding the license field changes the visible set and misses the cache.
    cache.schema_for(&builder, &json!({ "age": 10 })).unwrap();
    assert_eq!(cache.len(), 2);

    let schema = cache.schema_for(&builder, &json!({ "age": 10 })).unwrap();
    let ids: Vec<&str> = schema.field_ids().collect();
    assert_eq!(ids, vec!["age"]);
}
