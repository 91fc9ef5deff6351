//! Common test utilities for building form definitions and value snapshots.
use hyouji::prelude::*;
use serde_json::Value;

/// Builds a bare element of the given type with no rules or choices.
#[allow(dead_code)]
pub fn element(id: &str, element_type: &str, required: bool) -> Element {
    Element {
        id: id.to_string(),
        label: format!("Label for {}", id),
        element_type: element_type.to_string(),
        required,
        choices: None,
        props: None,
        rules: None,
    }
}

/// Builds a single condition.
#[allow(dead_code)]
pub fn condition(element_id: &str, operator: Operator, value: Value) -> Condition {
    Condition {
        element_id: element_id.to_string(),
        operator,
        value,
    }
}

/// Builds a rule from an operation and conditions.
#[allow(dead_code)]
pub fn rule(operation: RuleOperation, conditions: Vec<Condition>) -> Rule {
    Rule {
        operation,
        conditions,
    }
}

/// A form where the `license` field is visible only while `age > 17`.
///
/// Row 1: `age` (text, required). Row 2: `license` (text, required, gated).
#[allow(dead_code)]
pub fn license_form() -> Form {
    let mut license = element("license", "text", true);
    license.rules = Some(vec![rule(
        RuleOperation::And,
        vec![condition(
            "age",
            Operator::GreaterThan,
            serde_json::json!(17),
        )],
    )]);

    Form {
        id: "registration".to_string(),
        name: "Registration".to_string(),
        spacing: None,
        elements: vec![vec![element("age", "text", true)], vec![license]],
    }
}

/// A form with a single required checkbox offering one choice (`yes`).
#[allow(dead_code)]
pub fn consent_form() -> Form {
    let mut consent = element("consent", "checkbox", true);
    consent.choices = Some(vec![Choice {
        id: "yes".to_string(),
        name: "I agree".to_string(),
    }]);

    Form {
        id: "consent".to_string(),
        name: "Consent".to_string(),
        spacing: None,
        elements: vec![vec![consent]],
    }
}

/// The `license_form` expressed in the source JSON document format,
/// including the camelCase `elementId` spelling.
#[allow(dead_code)]
pub const LICENSE_FORM_JSON: &str = r#"{
    "id": "registration",
    "name": "Registration",
    "spacing": 2,
    "elements": [
        [
            { "id": "age", "label": "Age", "type": "text", "required": true }
        ],
        [
            {
                "id": "license",
                "label": "License number",
                "type": "text",
                "required": true,
                "rules": [
                    {
                        "operation": "AND",
                        "conditions": [
                            { "elementId": "age", "operator": "GREATER_THAN", "value": 17 }
                        ]
                    }
                ]
            }
        ]
    ]
}"#;

/// A form mixing text, checkbox and an unregistered custom type, with an
/// OR-gated element depending on two other fields.
#[allow(dead_code)]
pub const SURVEY_FORM_JSON: &str = r#"{
    "id": "survey",
    "name": "Survey",
    "elements": [
        [
            { "id": "name", "label": "Name", "type": "text", "required": true },
            {
                "id": "colors",
                "label": "Favourite colors",
                "type": "checkbox",
                "choices": [
                    { "id": "red", "name": "Red" },
                    { "id": "blue", "name": "Blue" }
                ]
            }
        ],
        [
            {
                "id": "red_reason",
                "label": "Why red?",
                "type": "textarea",
                "required": true,
                "rules": [
                    {
                        "operation": "OR",
                        "conditions": [
                            { "elementId": "colors", "operator": "INCLUDES", "value": "red" },
                            { "elementId": "name", "operator": "EQUALS", "value": "ruby" }
                        ]
                    }
                ]
            }
        ]
    ]
}"#;
