//! # Keyed Table
//!
//! Generic keyed storage with monotonic id issuance: the building block the
//! in-memory backend assembles its three entity tables from.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Table<T> Contract                            │
//! │                                                                     │
//! │  insert_with(make) ──► assigns next id, stores, returns record      │
//! │                        (never fails; ids start at 1)                │
//! │  get(id)           ──► Option<&T>, no panic on absence              │
//! │  update(id, f)     ──► in-place merge, Option<T> (None = absent)    │
//! │  remove(id)        ──► bool, whether a record existed               │
//! │  list()            ──► all records; order is unspecified at this    │
//! │                        layer (currently id-ascending)               │
//! │                                                                     │
//! │  Ids are NEVER reused, even after removal.                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No locking here: the table assumes single-threaded or externally
//! synchronized access. `MemoryStore` provides the synchronization.

use std::collections::BTreeMap;

use stockbook_core::EntityId;

/// A keyed record table with a monotonically increasing id counter.
#[derive(Debug, Clone)]
pub struct Table<T> {
    records: BTreeMap<EntityId, T>,
    next_id: EntityId,
}

impl<T: Clone> Table<T> {
    /// Creates an empty table. The first issued id is 1.
    pub fn new() -> Self {
        Table {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Issues the next id, builds the record through `make`, and stores it.
    ///
    /// Kind-level only: cross-field validation is the caller's job.
    pub fn insert_with(&mut self, make: impl FnOnce(EntityId) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;

        let record = make(id);
        self.records.insert(id, record.clone());
        record
    }

    /// Returns the record with `id`, if present.
    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.records.get(&id)
    }

    /// Applies `merge` to the record with `id` and returns the updated copy,
    /// or `None` if the id is absent. Unspecified fields are preserved by
    /// construction: `merge` mutates in place.
    pub fn update(&mut self, id: EntityId, merge: impl FnOnce(&mut T)) -> Option<T> {
        let record = self.records.get_mut(&id)?;
        merge(record);
        Some(record.clone())
    }

    /// Removes the record with `id`. Returns whether a record existed.
    pub fn remove(&mut self, id: EntityId) -> bool {
        self.records.remove(&id).is_some()
    }

    /// Returns all records. Ordering is not part of the contract.
    pub fn list(&self) -> Vec<T> {
        self.records.values().cloned().collect()
    }

    /// Finds the first record satisfying `pred`.
    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<&T> {
        self.records.values().find(|r| pred(r))
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Clone> Default for Table<T> {
    fn default() -> Self {
        Table::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: EntityId,
        label: String,
    }

    fn row(id: EntityId, label: &str) -> Row {
        Row {
            id,
            label: label.to_string(),
        }
    }

    #[test]
    fn test_insert_assigns_sequential_ids_from_one() {
        let mut table = Table::new();
        let a = table.insert_with(|id| row(id, "a"));
        let b = table.insert_with(|id| row(id, "b"));

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_get_absent_returns_none() {
        let table: Table<Row> = Table::new();
        assert!(table.get(42).is_none());
    }

    #[test]
    fn test_update_merges_in_place() {
        let mut table = Table::new();
        table.insert_with(|id| row(id, "before"));

        let updated = table.update(1, |r| r.label = "after".to_string());
        assert_eq!(updated.unwrap().label, "after");

        assert!(table.update(99, |r| r.label.clear()).is_none());
    }

    #[test]
    fn test_remove_reports_existence() {
        let mut table = Table::new();
        table.insert_with(|id| row(id, "a"));

        assert!(table.remove(1));
        assert!(!table.remove(1));
        assert!(table.is_empty());
    }

    #[test]
    fn test_ids_never_reused_after_removal() {
        let mut table = Table::new();
        let a = table.insert_with(|id| row(id, "a"));
        table.remove(a.id);

        let b = table.insert_with(|id| row(id, "b"));
        assert_eq!(b.id, 2);
    }

    #[test]
    fn test_find() {
        let mut table = Table::new();
        table.insert_with(|id| row(id, "a"));
        table.insert_with(|id| row(id, "b"));

        assert_eq!(table.find(|r| r.label == "b").unwrap().id, 2);
        assert!(table.find(|r| r.label == "missing").is_none());
    }
}
