use thiserror::Error;

/// Errors that can occur while loading or checking a form document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Failed to parse form JSON: {0}")]
    JsonParseError(String),

    #[error("Element id '{element_id}' is used more than once in the form")]
    DuplicateElementId { element_id: String },

    #[error("Element '{element_id}' declares choice id '{choice_id}' more than once")]
    DuplicateChoiceId {
        element_id: String,
        choice_id: String,
    },
}

/// Errors that can occur while building a validation schema.
///
/// Rule evaluation itself never fails (malformed rules evaluate to `false`
/// instead), but a defective constraint definition is a developer error and
/// is surfaced to the caller of the schema builder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error("Cannot build a constraint for element '{element_id}': {message}")]
    InvalidConstraint { element_id: String, message: String },
}
