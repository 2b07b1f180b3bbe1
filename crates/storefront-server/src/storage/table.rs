//! Id-keyed record table with its own id counter

use std::collections::BTreeMap;

/// Records keyed by an id handed out from a counter that starts at 1.
///
/// Ids are never reused, so iterating in key order is insertion order.
#[derive(Debug)]
pub struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T: Clone> Table<T> {
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Allocate the next id, build the record with it and store it
    pub fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    pub fn get(&self, id: i32) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn get_mut(&mut self, id: i32) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.rows.values_mut()
    }

    /// First record, in insertion order, matching the predicate
    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<&T> {
        self.rows.values().find(|row| predicate(row))
    }

    /// Clones of every record matching the predicate, in insertion order
    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows
            .values()
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }

    pub fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    pub fn remove(&mut self, id: i32) -> Option<T> {
        self.rows.remove(&id)
    }

    /// Drop every record matching the predicate, returning how many went
    pub fn remove_where(&mut self, predicate: impl Fn(&T) -> bool) -> usize {
        let before = self.rows.len();
        self.rows.retain(|_, row| !predicate(row));
        before - self.rows.len()
    }
}

impl<T: Clone> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}
