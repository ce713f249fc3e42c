//! # Entity Tables
//!
//! A [`Table`] is the ordered, append-only collection of all records of one
//! payload kind. Records are never physically removed: deleting one only sets
//! its `deleted` flag, and every lookup, count and listing below skips such
//! records. Raw iteration ([`Table::iter`]) is the one exception and is what
//! tag-usage counting and ID recovery build on.
//!
//! Positions returned by [`Table::index_of`] stay valid for the lifetime of
//! the table because nothing is ever removed or reordered.

use crate::error::Result;
use crate::id::IdRegistry;
use crate::model::{now, ListEntry, Payload, Record, UNNAMED};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table<P> {
    records: Vec<Record<P>>,
}

impl<P> Default for Table<P> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<P: Payload> Table<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record. An empty name is replaced with `"Unnamed"`.
    pub fn add(&mut self, mut record: Record<P>) -> usize {
        if record.name.is_empty() {
            record.name = UNNAMED.to_string();
        }
        self.records.push(record);
        self.records.len() - 1
    }

    /// Creates a record with a fresh ID and appends it. Returns the new ID.
    pub fn create(
        &mut self,
        ids: &mut IdRegistry,
        name: impl Into<String>,
        data: P,
    ) -> Result<u32> {
        let record = Record::new(ids.next_id()?, name, data);
        let id = record.id;
        self.add(record);
        Ok(id)
    }

    /// Creates a record with a default payload.
    pub fn add_simple(&mut self, ids: &mut IdRegistry, name: impl Into<String>) -> Result<u32> {
        self.create(ids, name, P::default())
    }

    /// Position of the live record with `id`.
    pub fn index_of(&self, id: u32) -> Option<usize> {
        self.records.iter().position(|r| r.id == id && !r.deleted)
    }

    pub fn get(&self, id: u32) -> Option<&Record<P>> {
        self.index_of(id).map(|idx| &self.records[idx])
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Record<P>> {
        match self.index_of(id) {
            Some(idx) => Some(&mut self.records[idx]),
            None => None,
        }
    }

    /// Marks the live record with `id` deleted. Returns `false` if there is none.
    pub fn soft_delete(&mut self, id: u32) -> bool {
        match self.get_mut(id) {
            Some(record) => {
                record.deleted = true;
                record.updated = now();
                true
            }
            None => false,
        }
    }

    /// Live `(id, name)` pairs sorted by name, byte order.
    pub fn names_sorted(&self) -> Vec<ListEntry> {
        let mut names: Vec<ListEntry> = self
            .live()
            .map(|r| ListEntry::new(r.id, r.name.clone()))
            .collect();
        names.sort_by(|a, b| a.name.cmp(&b.name));
        names
    }

    /// ID of the first live record whose name matches ignoring case.
    pub fn first_by_name_ci(&self, name: &str) -> Option<u32> {
        let needle = name.to_lowercase();
        self.live()
            .find(|r| r.name.to_lowercase() == needle)
            .map(|r| r.id)
    }

    /// Every live record whose name equals `name` exactly.
    pub fn all_by_name_exact(&self, name: &str) -> Vec<&Record<P>> {
        self.live().filter(|r| r.name == name).collect()
    }

    /// Position and ID of the first live record named exactly `name`.
    pub fn exact_one(&self, name: &str) -> Option<(usize, u32)> {
        self.records
            .iter()
            .enumerate()
            .find(|(_, r)| !r.deleted && r.name == name)
            .map(|(idx, r)| (idx, r.id))
    }

    /// Live records in table order, optionally filtered, optionally stable
    /// sorted by uppercased name.
    pub fn listing<F>(&self, filter: F, sort_by_name: bool) -> Vec<&Record<P>>
    where
        F: Fn(&Record<P>) -> bool,
    {
        let mut rows: Vec<&Record<P>> = self.live().filter(|r| filter(r)).collect();
        if sort_by_name {
            rows.sort_by_cached_key(|r| r.name.to_uppercase());
        }
        rows
    }

    /// Appends `tag_id` unless already present. Returns whether it was added.
    pub fn attach_tag(&mut self, idx: usize, tag_id: u32) -> bool {
        let record = &mut self.records[idx];
        if record.has_tag(tag_id) {
            return false;
        }
        record.tags.push(tag_id);
        record.touch();
        true
    }

    /// Removes `tag_id`, keeping the order of the rest. Returns whether it was present.
    pub fn detach_tag(&mut self, idx: usize, tag_id: u32) -> bool {
        let record = &mut self.records[idx];
        if !record.has_tag(tag_id) {
            return false;
        }
        record.tags.retain(|t| *t != tag_id);
        record.touch();
        true
    }

    /// Live records only.
    pub fn live(&self) -> impl Iterator<Item = &Record<P>> {
        self.records.iter().filter(|r| !r.deleted)
    }

    /// All records, deleted ones included.
    pub fn iter(&self) -> impl Iterator<Item = &Record<P>> {
        self.records.iter()
    }

    /// Highest ID in the table, deleted records included.
    pub fn max_id(&self) -> u32 {
        self.records.iter().map(|r| r.id).max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<P> Index<usize> for Table<P> {
    type Output = Record<P>;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.records[idx]
    }
}

impl<P> IndexMut<usize> for Table<P> {
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        &mut self.records[idx]
    }
}
