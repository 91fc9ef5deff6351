use crate::engine::is_visible;
use crate::error::SchemaError;
use crate::snapshot::Snapshot;
use crate::validator::{SchemaBuilder, ValidationSchema};
use ahash::AHashMap;
use std::hash::{BuildHasher, Hash, Hasher};

/// Memoizes built validation schemas keyed on the visible-field set.
///
/// Constraints depend only on the static element definitions; the snapshot
/// only decides which elements are included. Two snapshots that yield the
/// same visible set therefore share one schema, which keeps repeated
/// validation passes on large forms cheap without ever serving a schema
/// built for a different visible set.
#[derive(Default)]
pub struct SchemaCache {
    entries: AHashMap<u64, ValidationSchema>,
}

impl SchemaCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the schema for the snapshot's visible-field set, building
    /// and storing it on first sight of that set.
    pub fn schema_for<'a>(
        &'a mut self,
        builder: &SchemaBuilder,
        snapshot: &dyn Snapshot,
    ) -> Result<&'a ValidationSchema, SchemaError> {
        let key = visible_set_key(builder, snapshot);
        if !self.entries.contains_key(&key) {
            let schema = builder.schema(snapshot)?;
            self.entries.insert(key, schema);
        }
        Ok(&self.entries[&key])
    }

    /// Number of distinct visible sets seen so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

fn visible_set_key(builder: &SchemaBuilder, snapshot: &dyn Snapshot) -> u64 {
    // Form order is stable, so hashing visible ids in iteration order is
    // deterministic per builder.
    let mut hasher = ahash::RandomState::with_seeds(1, 2, 3, 4).build_hasher();
    for element in builder.form().iter_elements() {
        if is_visible(element, snapshot) {
            element.id.hash(&mut hasher);
        }
    }
    hasher.finish()
}
