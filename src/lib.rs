//! # Hyouji - Conditional Visibility and Validation Engine
//!
//! **Hyouji** is a declarative, data-driven conditional-logic engine for
//! multi-field forms. Given a form schema (fields grouped into rows) and
//! rule sets attached to individual fields, it determines which fields are
//! currently visible given the live values of other fields, and which
//! validation constraints apply to the currently-visible fields.
//!
//! ## Core Workflow
//!
//! The engine owns no state: the host's form-state manager keeps the live
//! values and hands the engine a read-only snapshot at evaluation time.
//! The primary workflow is:
//!
//! 1.  **Load the form**: Parse a form document with `Form::from_json`
//!     (or build a `Form` directly; implement `Snapshot` for custom
//!     value stores).
//! 2.  **Wire subscriptions**: At mount time, ask `dependencies_of` which
//!     element ids each field's visibility depends on, and re-resolve that
//!     field whenever one of them changes.
//! 3.  **Resolve visibility**: On every change of a watched value, call
//!     `is_visible` (or `resolve_visibility` for the whole form).
//!     Evaluation is pure, cheap and idempotent.
//! 4.  **Validate**: On submit, derive a schema for the current snapshot
//!     with `SchemaBuilder::schema` and run
//!     `ValidationSchema::validate`. Hidden fields contribute no
//!     constraint and can never fail validation.
//!
//! ## Quick Start
//!
//! ```rust
//! use hyouji::prelude::*;
//! use serde_json::json;
//!
//! fn main() -> Result<()> {
//!     let form = Form::from_json(
//!         r#"{
//!             "id": "registration",
//!             "name": "Registration",
//!             "elements": [
//!                 [
//!                     { "id": "age", "label": "Age", "type": "text", "required": true }
//!                 ],
//!                 [
//!                     {
//!                         "id": "license", "label": "License number", "type": "text",
//!                         "required": true,
//!                         "rules": [
//!                             {
//!                                 "operation": "AND",
//!                                 "conditions": [
//!                                     { "elementId": "age", "operator": "GREATER_THAN", "value": 17 }
//!                                 ]
//!                             }
//!                         ]
//!                     }
//!                 ]
//!             ]
//!         }"#,
//!     )?;
//!
//!     // The host re-resolves `license` whenever `age` changes.
//!     let license = form.element("license").unwrap();
//!     assert_eq!(dependencies_of(license.rules()), vec!["age".to_string()]);
//!
//!     let values = json!({ "age": 18 });
//!     assert!(is_visible(license, &values));
//!     assert!(!is_visible(license, &json!({ "age": 16 })));
//!
//!     // Validation covers only the currently-visible fields.
//!     let builder = SchemaBuilder::new(form)?;
//!     let report = builder.schema(&values)?.validate(&values);
//!     assert!(!report.valid); // license is visible, required and empty
//!     assert!(report.errors.contains_key("license"));
//!
//!     Ok(())
//! }
//! ```

pub mod engine;
pub mod error;
pub mod form;
pub mod prelude;
pub mod snapshot;
pub mod validator;

#[cfg(feature = "python-bindings")]
mod python;
