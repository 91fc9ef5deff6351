//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions from the hyouji
//! crate. Import this module to get access to the core functionality
//! without having to import each item individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use hyouji::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let form_json = std::fs::read_to_string("path/to/form.json")?;
//! let values_json = std::fs::read_to_string("path/to/values.json")?;
//!
//! let form = Form::from_json(&form_json)?;
//! let values: serde_json::Value = serde_json::from_str(&values_json)?;
//!
//! let visibility = resolve_visibility(&form, &values);
//! println!("Visibility: {:?}", visibility);
//!
//! let builder = SchemaBuilder::new(form)?;
//! let report = builder.schema(&values)?.validate(&values);
//! println!("Validation: {:?}", report);
//! # Ok(())
//! # }
//! ```

// Form data model
pub use crate::form::{Choice, Condition, Element, Form, Operator, Rule, RuleOperation};

// Evaluation core
pub use crate::engine::{
    VisibilityMap, VisibilityTrace, dependencies_of, dependency_map, evaluate_condition,
    evaluate_rule, explain_visibility, is_visible, resolve_visibility, trace_visibility,
};

// Snapshot access
pub use crate::snapshot::Snapshot;

// Validation
pub use crate::validator::{
    Constraint, ConstraintBuilder, SchemaBuilder, SchemaCache, ValidationReport, ValidationSchema,
};

// Error types
pub use crate::error::{FormError, SchemaError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
