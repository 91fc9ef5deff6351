use crate::engine::rule::evaluate_rule;
use crate::form::{Element, Form};
use crate::snapshot::Snapshot;
use std::collections::BTreeMap;

/// Visibility of every element in a form, keyed by element id.
pub type VisibilityMap = BTreeMap<String, bool>;

/// Computes whether an element is currently visible.
///
/// An element with no rules (or an empty rule list) is always visible.
/// Otherwise every rule in the list must evaluate true: the list-level
/// combinator is always AND, independent of each rule's own operation.
///
/// The computation is pure: identical (element, snapshot) inputs always
/// yield the same result, and the snapshot is never touched beyond reads,
/// so the host may re-invoke this on every dependency change.
pub fn is_visible(element: &Element, snapshot: &dyn Snapshot) -> bool {
    element
        .rules()
        .iter()
        .all(|rule| evaluate_rule(rule, snapshot))
}

/// Resolves visibility for the whole form in one pass.
pub fn resolve_visibility(form: &Form, snapshot: &dyn Snapshot) -> VisibilityMap {
    form.iter_elements()
        .map(|element| (element.id.clone(), is_visible(element, snapshot)))
        .collect()
}
