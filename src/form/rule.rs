use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// How the conditions inside one rule are combined.
///
/// The outer combinator across a list of rules is always AND; only the inner
/// combination is author-selectable. A tag outside `AND`/`OR` round-trips
/// through `Other` and evaluates as unsatisfied rather than failing the load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RuleOperation {
    And,
    Or,
    Other(String),
}

impl From<String> for RuleOperation {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "AND" => RuleOperation::And,
            "OR" => RuleOperation::Or,
            _ => RuleOperation::Other(tag),
        }
    }
}

impl From<RuleOperation> for String {
    fn from(operation: RuleOperation) -> Self {
        match operation {
            RuleOperation::And => "AND".to_string(),
            RuleOperation::Or => "OR".to_string(),
            RuleOperation::Other(tag) => tag,
        }
    }
}

/// The comparison applied between a target element's live value and a
/// condition's literal. Unrecognized operators round-trip through `Other`
/// and evaluate false (fail closed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Operator {
    Equals,
    NotEquals,
    In,
    NotIn,
    GreaterThan,
    LessThan,
    Other(String),
}

impl From<String> for Operator {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "EQUALS" => Operator::Equals,
            "NOT_EQUALS" => Operator::NotEquals,
            "IN" | "INCLUDES" => Operator::In,
            "NOT_IN" | "NOT_INCLUDES" => Operator::NotIn,
            "GREATER_THAN" => Operator::GreaterThan,
            "LESS_THAN" => Operator::LessThan,
            _ => Operator::Other(tag),
        }
    }
}

impl From<Operator> for String {
    fn from(operator: Operator) -> Self {
        match operator {
            Operator::Equals => "EQUALS".to_string(),
            Operator::NotEquals => "NOT_EQUALS".to_string(),
            Operator::In => "IN".to_string(),
            Operator::NotIn => "NOT_IN".to_string(),
            Operator::GreaterThan => "GREATER_THAN".to_string(),
            Operator::LessThan => "LESS_THAN".to_string(),
            Operator::Other(tag) => tag,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Equals => write!(f, "=="),
            Operator::NotEquals => write!(f, "!="),
            Operator::In => write!(f, "includes"),
            Operator::NotIn => write!(f, "not includes"),
            Operator::GreaterThan => write!(f, ">"),
            Operator::LessThan => write!(f, "<"),
            Operator::Other(tag) => write!(f, "{}", tag),
        }
    }
}

/// An atomic comparison between another element's live value and a literal.
///
/// `element_id` may be a dotted path into nested snapshot state. It may also
/// reference an element that is currently hidden, in which case the compared
/// value is whatever stale or default value remains in the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(rename = "elementId")]
    pub element_id: String,
    pub operator: Operator,
    #[serde(default)]
    pub value: Value,
}

/// A group of conditions gating one element's visibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub operation: RuleOperation,
    pub conditions: Vec<Condition>,
}
