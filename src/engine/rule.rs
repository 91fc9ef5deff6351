use crate::engine::condition::evaluate_condition;
use crate::form::{Condition, Rule, RuleOperation};
use crate::snapshot::Snapshot;

/// Evaluates a single rule against the current snapshot.
///
/// `AND` is true iff every condition holds (vacuously true on an empty
/// list); `OR` is true iff at least one condition holds (vacuously false on
/// an empty list — the asymmetry on empty input is part of the contract).
/// An unrecognized operation evaluates as unsatisfied rather than erroring.
pub fn evaluate_rule(rule: &Rule, snapshot: &dyn Snapshot) -> bool {
    match &rule.operation {
        RuleOperation::And => rule
            .conditions
            .iter()
            .all(|condition| condition_holds(condition, snapshot)),
        RuleOperation::Or => rule
            .conditions
            .iter()
            .any(|condition| condition_holds(condition, snapshot)),
        RuleOperation::Other(_) => false,
    }
}

fn condition_holds(condition: &Condition, snapshot: &dyn Snapshot) -> bool {
    let actual = snapshot.value(&condition.element_id);
    evaluate_condition(&condition.operator, &condition.value, actual)
}
