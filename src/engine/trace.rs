use crate::engine::condition::evaluate_condition;
use crate::form::{Condition, Element, Rule, RuleOperation};
use crate::snapshot::Snapshot;
use serde_json::Value;
use std::fmt;

/// A record of how one condition was evaluated, including the value that was
/// observed in the snapshot at the time.
#[derive(Debug, Clone)]
pub struct ConditionTrace {
    pub path: String,
    pub observed: Option<Value>,
    pub rendered: String,
    pub outcome: bool,
}

/// A record of how one rule combined its condition results.
#[derive(Debug, Clone)]
pub struct RuleTrace {
    pub operation: RuleOperation,
    pub conditions: Vec<ConditionTrace>,
    pub outcome: bool,
}

/// A full explanation of an element's visibility outcome.
#[derive(Debug, Clone)]
pub enum VisibilityTrace {
    /// The element carries no rules and is unconditionally visible.
    AlwaysVisible,
    Resolved {
        rules: Vec<RuleTrace>,
        outcome: bool,
    },
}

impl VisibilityTrace {
    pub fn outcome(&self) -> bool {
        match self {
            VisibilityTrace::AlwaysVisible => true,
            VisibilityTrace::Resolved { outcome, .. } => *outcome,
        }
    }
}

/// Evaluates an element's rules while recording every intermediate result.
///
/// The outcome is identical to `is_visible`; this variant trades a little
/// allocation for an explanation the host can show when debugging why a
/// field appeared or disappeared.
pub fn trace_visibility(element: &Element, snapshot: &dyn Snapshot) -> VisibilityTrace {
    let rules = element.rules();
    if rules.is_empty() {
        return VisibilityTrace::AlwaysVisible;
    }
    let traces: Vec<RuleTrace> = rules.iter().map(|rule| trace_rule(rule, snapshot)).collect();
    let outcome = traces.iter().all(|trace| trace.outcome);
    VisibilityTrace::Resolved {
        rules: traces,
        outcome,
    }
}

/// Formats an element's visibility explanation as a single string.
pub fn explain_visibility(element: &Element, snapshot: &dyn Snapshot) -> String {
    trace_visibility(element, snapshot).to_string()
}

fn trace_rule(rule: &Rule, snapshot: &dyn Snapshot) -> RuleTrace {
    let conditions: Vec<ConditionTrace> = rule
        .conditions
        .iter()
        .map(|condition| trace_condition(condition, snapshot))
        .collect();
    let outcome = match &rule.operation {
        RuleOperation::And => conditions.iter().all(|trace| trace.outcome),
        RuleOperation::Or => conditions.iter().any(|trace| trace.outcome),
        RuleOperation::Other(_) => false,
    };
    RuleTrace {
        operation: rule.operation.clone(),
        conditions,
        outcome,
    }
}

fn trace_condition(condition: &Condition, snapshot: &dyn Snapshot) -> ConditionTrace {
    let observed = snapshot.value(&condition.element_id);
    let outcome = evaluate_condition(&condition.operator, &condition.value, observed);
    let observed_str = match observed {
        Some(value) => format_value(value),
        None => "absent".to_string(),
    };
    let rendered = format!(
        "{} (was {}) {} {} => {}",
        condition.element_id,
        observed_str,
        condition.operator,
        format_value(&condition.value),
        outcome
    );
    ConditionTrace {
        path: condition.element_id.clone(),
        observed: observed.cloned(),
        rendered,
        outcome,
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s),
        other => other.to_string(),
    }
}

impl fmt::Display for VisibilityTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisibilityTrace::AlwaysVisible => write!(f, "no rules => visible"),
            VisibilityTrace::Resolved { rules, outcome } => {
                let joined = rules
                    .iter()
                    .map(|rule| format!("({})", rule))
                    .collect::<Vec<_>>()
                    .join(" AND ");
                write!(
                    f,
                    "{} => {}",
                    joined,
                    if *outcome { "visible" } else { "hidden" }
                )
            }
        }
    }
}

impl fmt::Display for RuleTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joiner = match &self.operation {
            RuleOperation::And => " AND ",
            RuleOperation::Or => " OR ",
            RuleOperation::Other(_) => " ? ",
        };
        if self.conditions.is_empty() {
            return write!(f, "<no conditions> => {}", self.outcome);
        }
        let joined = self
            .conditions
            .iter()
            .map(|trace| trace.rendered.clone())
            .collect::<Vec<_>>()
            .join(joiner);
        write!(f, "{}", joined)
    }
}
