use crate::form::Operator;
use serde_json::Value;

/// Evaluates one atomic comparison between a condition's literal and the
/// target element's current value.
///
/// `actual` is `None` when the target path is absent from the snapshot.
/// Absent-value behavior per operator: equality is false (a concrete JSON
/// literal never equals an absent value), inequality is true, and membership
/// and numeric comparisons are false. An unrecognized operator always
/// evaluates false rather than erroring, so a malformed condition hides a
/// field instead of crashing the render pass.
pub fn evaluate_condition(operator: &Operator, expected: &Value, actual: Option<&Value>) -> bool {
    match operator {
        Operator::Equals => actual == Some(expected),
        Operator::NotEquals => actual != Some(expected),
        Operator::In => contains(actual, expected),
        // A missing or non-list value satisfies neither IN nor NOT_IN. This
        // asymmetry is intentional and load-bearing for compatibility: a
        // field gated on "list does not include X" stays hidden until the
        // list exists at all.
        Operator::NotIn => matches!(actual, Some(Value::Array(_))) && !contains(actual, expected),
        Operator::GreaterThan => compare_numeric(expected, actual, |a, b| a > b),
        Operator::LessThan => compare_numeric(expected, actual, |a, b| a < b),
        Operator::Other(_) => false,
    }
}

fn contains(actual: Option<&Value>, expected: &Value) -> bool {
    match actual {
        Some(Value::Array(items)) => items.iter().any(|item| item == expected),
        _ => false,
    }
}

fn compare_numeric(expected: &Value, actual: Option<&Value>, cmp: fn(f64, f64) -> bool) -> bool {
    let Some(actual) = actual else {
        return false;
    };
    if !is_truthy(actual) {
        return false;
    }
    match (coerce_number(actual), coerce_number(expected)) {
        (Some(a), Some(b)) => cmp(a, b),
        _ => false,
    }
}

/// Truthiness of a snapshot value: `null`, `false`, `0`, `NaN` and the empty
/// string are falsy; arrays and objects are always truthy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Numeric coercion for ordering comparisons: numbers pass through, strings
/// are trimmed and parsed (a blank string coerces to zero), booleans map to
/// one and zero, `null` to zero. Arrays and objects do not coerce, which
/// makes any comparison against them false.
pub(crate) fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null => Some(0.0),
        Value::Array(_) | Value::Object(_) => None,
    }
}
