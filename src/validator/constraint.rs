use serde_json::Value;

/// Message attached to a missing required value.
pub const REQUIRED_MESSAGE: &str = "This field is required";
/// Message attached to a failing checkbox constraint.
pub const CHECKED_MESSAGE: &str = "This field must be checked";

/// A per-field validation constraint produced by a `ConstraintBuilder`.
///
/// `check` receives the field's current value (`None` when absent from the
/// submitted values) and returns a user-facing message on failure. Hidden
/// fields never reach a constraint at all, so implementations only ever see
/// fields that are currently visible.
pub trait Constraint: Send + Sync {
    fn check(&self, value: Option<&Value>) -> Option<String>;
}

/// Constraint for `"text"` elements: a string field that, when required,
/// must be present and non-empty. Non-string values pass (the source format
/// stringifies scalars before display).
pub struct TextConstraint {
    pub required: bool,
}

impl Constraint for TextConstraint {
    fn check(&self, value: Option<&Value>) -> Option<String> {
        if !self.required {
            return None;
        }
        match value {
            None | Some(Value::Null) => Some(REQUIRED_MESSAGE.to_string()),
            Some(Value::String(s)) if s.is_empty() => Some(REQUIRED_MESSAGE.to_string()),
            Some(_) => None,
        }
    }
}

/// Constraint for `"checkbox"` elements.
///
/// With choices, the field's value must be an array whose members are drawn
/// from the element's own choice-id set; when required it must additionally
/// contain at least one such member. Without choices the field is a plain
/// boolean that, when required, must equal `true`.
pub struct CheckboxConstraint {
    pub required: bool,
    pub allowed: Option<Vec<String>>,
}

impl Constraint for CheckboxConstraint {
    fn check(&self, value: Option<&Value>) -> Option<String> {
        match &self.allowed {
            Some(allowed) => self.check_choices(allowed, value),
            None => self.check_boolean(value),
        }
    }
}

impl CheckboxConstraint {
    fn check_choices(&self, allowed: &[String], value: Option<&Value>) -> Option<String> {
        let items = match value {
            None | Some(Value::Null) => {
                if self.required {
                    return Some(CHECKED_MESSAGE.to_string());
                }
                return None;
            }
            Some(Value::Array(items)) => items,
            // A present non-list value can never satisfy a choice set.
            Some(_) => return Some(CHECKED_MESSAGE.to_string()),
        };

        let in_set = |item: &Value| {
            item.as_str()
                .is_some_and(|id| allowed.iter().any(|a| a == id))
        };
        if !items.iter().all(in_set) {
            return Some(CHECKED_MESSAGE.to_string());
        }
        if self.required && !items.iter().any(in_set) {
            return Some(CHECKED_MESSAGE.to_string());
        }
        None
    }

    fn check_boolean(&self, value: Option<&Value>) -> Option<String> {
        if !self.required {
            return None;
        }
        match value {
            Some(Value::Bool(true)) => None,
            _ => Some(CHECKED_MESSAGE.to_string()),
        }
    }
}

/// Fallback constraint for any element type without a registered builder:
/// an unconstrained value that, when required, must merely be present.
pub struct AnyConstraint {
    pub required: bool,
}

impl Constraint for AnyConstraint {
    fn check(&self, value: Option<&Value>) -> Option<String> {
        if !self.required {
            return None;
        }
        match value {
            None | Some(Value::Null) => Some(REQUIRED_MESSAGE.to_string()),
            Some(_) => None,
        }
    }
}
