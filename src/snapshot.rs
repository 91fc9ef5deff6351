use serde_json::Value;

/// A read-only view over the host-owned form state.
///
/// The engine never owns or mutates form values; it is handed a snapshot
/// reference at evaluation time. Paths are dotted: `"address.city"` descends
/// through nested objects, and a numeric segment indexes into an array. The
/// snapshot must stay consistent for the duration of one resolution pass.
pub trait Snapshot {
    /// Resolves a (possibly dotted) path to its current value. `None` means
    /// the path is absent, which is a tolerated state: conditions targeting
    /// missing values evaluate per their operator's absent-value behavior.
    fn value(&self, path: &str) -> Option<&Value>;
}

impl Snapshot for Value {
    fn value(&self, path: &str) -> Option<&Value> {
        lookup_path(self, path)
    }
}

impl Snapshot for serde_json::Map<String, Value> {
    fn value(&self, path: &str) -> Option<&Value> {
        let (head, rest) = match path.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };
        let value = self.get(head)?;
        match rest {
            Some(rest) => lookup_path(value, rest),
            None => Some(value),
        }
    }
}

/// Walks a dotted path into a JSON value.
pub fn lookup_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}
