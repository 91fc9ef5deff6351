use crate::error::FormError;
use crate::form::rule::Rule;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// A selectable option of an enumerated element. The `id` is the value that
/// is stored in the snapshot when the choice is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub id: String,
    pub name: String,
}

/// A single form field definition.
///
/// Elements are constructed from a schema document and are only ever read by
/// the engine. The `element_type` tag is an open string enum: `"text"` and
/// `"checkbox"` have built-in validation behavior, any other tag falls back
/// to the default constraint unless a custom builder is registered for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub element_type: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<Choice>>,
    /// Type-specific rendering hints, opaque to the rule engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<serde_json::Map<String, serde_json::Value>>,
    /// Visibility rules. `None` and `Some(vec![])` both mean "always visible".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<Rule>>,
}

impl Element {
    /// The element's rule list, flattened over the optional wrapper.
    pub fn rules(&self) -> &[Rule] {
        self.rules.as_deref().unwrap_or(&[])
    }

    /// The ids of this element's choices, in declaration order.
    pub fn choice_ids(&self) -> Vec<&str> {
        self.choices
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .map(|c| c.id.as_str())
            .collect()
    }
}

/// The complete definition of a form: an ordered sequence of rows, each an
/// ordered sequence of elements. Row and element order are display-relevant
/// and are preserved losslessly through serde.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<u32>,
    pub elements: Vec<Vec<Element>>,
}

impl Form {
    /// Parses a form document from JSON and checks its invariants.
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        let form: Form =
            serde_json::from_str(json).map_err(|e| FormError::JsonParseError(e.to_string()))?;
        form.check()?;
        Ok(form)
    }

    /// Checks the form invariants: element ids must be unique across the
    /// whole form (condition references depend on this), and choice ids must
    /// be unique within their element.
    pub fn check(&self) -> Result<(), FormError> {
        let mut seen = AHashSet::new();
        for element in self.iter_elements() {
            if !seen.insert(element.id.as_str()) {
                return Err(FormError::DuplicateElementId {
                    element_id: element.id.clone(),
                });
            }
            let mut choice_seen = AHashSet::new();
            for choice in element.choices.as_deref().unwrap_or(&[]) {
                if !choice_seen.insert(choice.id.as_str()) {
                    return Err(FormError::DuplicateChoiceId {
                        element_id: element.id.clone(),
                        choice_id: choice.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Iterates over every element of every row, in display order.
    pub fn iter_elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().flatten()
    }

    /// Looks up an element by id.
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.iter_elements().find(|e| e.id == id)
    }
}
