use crate::form::{Form, Rule};
use itertools::Itertools;
use std::collections::BTreeMap;

/// Extracts the set of element ids an element's rules depend on.
///
/// This is the subscription key set for the host's reactive layer: whenever
/// any of these values changes, the element's visibility must be
/// re-resolved. Ids are deduplicated in first-occurrence order. An element
/// with no rules has an empty dependency set and never needs re-evaluation
/// after the initial mount.
pub fn dependencies_of(rules: &[Rule]) -> Vec<String> {
    rules
        .iter()
        .flat_map(|rule| rule.conditions.iter())
        .map(|condition| condition.element_id.clone())
        .unique()
        .collect()
}

/// Dependency sets for every element of a form, keyed by element id.
/// Intended for the host's mount-time subscription wiring.
pub fn dependency_map(form: &Form) -> BTreeMap<String, Vec<String>> {
    form.iter_elements()
        .map(|element| (element.id.clone(), dependencies_of(element.rules())))
        .collect()
}
