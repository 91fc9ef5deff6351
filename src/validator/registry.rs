use crate::error::SchemaError;
use crate::form::Element;
use crate::validator::constraint::{AnyConstraint, CheckboxConstraint, Constraint, TextConstraint};
use ahash::AHashMap;

/// Defines the contract for turning one element of a given type tag into a
/// validation constraint.
///
/// The element's `type` is an open string enum; registering a builder for a
/// new tag is the extension point for custom field types. Builders may
/// reject a malformed element definition with `SchemaError`, which is the
/// single error path out of schema construction.
pub trait ConstraintBuilder: Send + Sync {
    /// The element type tag this builder handles.
    fn type_tag(&self) -> &str;

    fn build(&self, element: &Element) -> Result<Box<dyn Constraint>, SchemaError>;
}

struct TextBuilder;
impl ConstraintBuilder for TextBuilder {
    fn type_tag(&self) -> &str {
        "text"
    }
    fn build(&self, element: &Element) -> Result<Box<dyn Constraint>, SchemaError> {
        Ok(Box::new(TextConstraint {
            required: element.required,
        }))
    }
}

struct CheckboxBuilder;
impl ConstraintBuilder for CheckboxBuilder {
    fn type_tag(&self) -> &str {
        "checkbox"
    }
    fn build(&self, element: &Element) -> Result<Box<dyn Constraint>, SchemaError> {
        let allowed = element
            .choices
            .as_deref()
            .map(|choices| choices.iter().map(|c| c.id.clone()).collect());
        Ok(Box::new(CheckboxConstraint {
            required: element.required,
            allowed,
        }))
    }
}

/// The default entry used for every unregistered type tag.
pub(super) struct FallbackBuilder;
impl ConstraintBuilder for FallbackBuilder {
    fn type_tag(&self) -> &str {
        "*"
    }
    fn build(&self, element: &Element) -> Result<Box<dyn Constraint>, SchemaError> {
        Ok(Box::new(AnyConstraint {
            required: element.required,
        }))
    }
}

pub(super) fn register_default_builders(registry: &mut AHashMap<String, Box<dyn ConstraintBuilder>>) {
    for builder in [
        Box::new(TextBuilder) as Box<dyn ConstraintBuilder>,
        Box::new(CheckboxBuilder),
    ] {
        registry.insert(builder.type_tag().to_string(), builder);
    }
}

pub(super) fn create_builder_by_name(name: &str) -> Option<Box<dyn ConstraintBuilder>> {
    match name {
        "text" => Some(Box::new(TextBuilder)),
        "checkbox" => Some(Box::new(CheckboxBuilder)),
        _ => None,
    }
}
