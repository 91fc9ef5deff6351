//! The dynamic schema builder: derives a validation schema covering only
//! the currently-visible elements of a form.
//!
//! Visibility is itself a function of live values, so the schema must be
//! re-derived per snapshot rather than computed once at form-construction
//! time. A hidden field contributes no constraint at all and can never fail
//! validation, regardless of its own `required` flag. For larger forms the
//! [`SchemaCache`] memoizes built schemas keyed on the visible-field set.

pub mod cache;
pub mod constraint;
pub mod registry;

pub use cache::SchemaCache;
pub use constraint::{CHECKED_MESSAGE, Constraint, REQUIRED_MESSAGE};
pub use registry::ConstraintBuilder;

use crate::engine::is_visible;
use crate::error::{FormError, SchemaError};
use crate::form::Form;
use crate::snapshot::Snapshot;
use ahash::AHashMap;
use registry::{FallbackBuilder, create_builder_by_name, register_default_builders};
use serde::Serialize;
use std::collections::BTreeMap;

/// The result of one validation pass: per-field messages keyed by element
/// id. There is no form-level fatal error; an empty error map means valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: BTreeMap<String, String>,
}

/// A validation schema for one concrete visible-field set.
///
/// Produced by [`SchemaBuilder::schema`] and valid for as long as the
/// visible-field set it was built from; build a fresh one (or go through a
/// [`SchemaCache`]) whenever the snapshot changes.
pub struct ValidationSchema {
    fields: Vec<(String, Box<dyn Constraint>)>,
}

impl ValidationSchema {
    /// Runs every field constraint against the submitted values. Keys in
    /// `values` without a constraint (hidden fields, unknown keys) are
    /// ignored.
    pub fn validate(&self, values: &dyn Snapshot) -> ValidationReport {
        let mut errors = BTreeMap::new();
        for (id, constraint) in &self.fields {
            if let Some(message) = constraint.check(values.value(id)) {
                errors.insert(id.clone(), message);
            }
        }
        ValidationReport {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// The ids of the fields this schema constrains, in form order.
    pub fn field_ids(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(id, _)| id.as_str())
    }
}

/// Builds validation schemas for a form, dispatching on each element's type
/// tag through a registry of [`ConstraintBuilder`]s.
pub struct SchemaBuilder {
    form: Form,
    registry: AHashMap<String, Box<dyn ConstraintBuilder>>,
    fallback: Box<dyn ConstraintBuilder>,
}

impl SchemaBuilder {
    /// Creates a builder for the given form with the built-in constraint
    /// builders (`"text"`, `"checkbox"`) registered. Fails if the form
    /// violates its id-uniqueness invariants; this is the hard-error point
    /// for defective schema documents.
    pub fn new(form: Form) -> Result<Self, FormError> {
        form.check()?;
        let mut registry: AHashMap<String, Box<dyn ConstraintBuilder>> = AHashMap::new();
        register_default_builders(&mut registry);
        Ok(Self {
            form,
            registry,
            fallback: Box::new(FallbackBuilder),
        })
    }

    /// Registers a built-in builder under an additional user-defined type
    /// tag, e.g. mapping `"textarea"` onto the `"text"` behavior.
    pub fn with_type_mapping(mut self, user_tag: &str, builtin_tag: &str) -> Self {
        if let Some(builder) = create_builder_by_name(builtin_tag) {
            self.registry.insert(user_tag.to_string(), builder);
        }
        self
    }

    /// Registers a custom constraint builder under its own type tag.
    pub fn with_custom_builder(mut self, builder: Box<dyn ConstraintBuilder>) -> Self {
        self.registry
            .insert(builder.type_tag().to_string(), builder);
        self
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Derives the validation schema for the current snapshot: every
    /// visible element contributes one constraint from the registry (or the
    /// fallback for unregistered tags), hidden elements contribute nothing.
    pub fn schema(&self, snapshot: &dyn Snapshot) -> Result<ValidationSchema, SchemaError> {
        let mut fields = Vec::new();
        for element in self.form.iter_elements() {
            if !is_visible(element, snapshot) {
                continue;
            }
            let builder = self
                .registry
                .get(&element.element_type)
                .unwrap_or(&self.fallback);
            fields.push((element.id.clone(), builder.build(element)?));
        }
        Ok(ValidationSchema { fields })
    }
}
