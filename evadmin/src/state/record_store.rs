use evadmin_api::{Record, RecordId};
use itertools::Itertools;

/// Ordered snapshot of one resource collection, unique by identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents. Later duplicates of an identity are dropped.
    pub fn load(&mut self, records: Vec<Record>) {
        let before = records.len();
        self.records = records
            .into_iter()
            .unique_by(|record| record.id().clone())
            .collect();
        if self.records.len() != before {
            tracing::warn!(
                "Dropped {} duplicate records from list response",
                before - self.records.len()
            );
        }
    }

    /// Adds a freshly created record at the end. A record whose identity is
    /// already present replaces the existing entry instead.
    pub fn append(&mut self, record: Record) {
        match self.position(record.id()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    /// Swaps in `record` where its identity sits. Returns false, changing
    /// nothing, when the identity is absent.
    pub fn replace_by_identity(&mut self, record: Record) -> bool {
        let id = record.id().clone();
        self.replace_at(&id, record)
    }

    /// Swaps the entry stored under `id` for `record`.
    pub fn replace_at(&mut self, id: &RecordId, record: Record) -> bool {
        if self.position(id).is_none() {
            return false;
        }
        if record.id() != id {
            // The replacement may collide with another entry; keep the store unique.
            self.records.retain(|existing| existing.id() != record.id());
        }
        if let Some(index) = self.position(id) {
            self.records[index] = record;
        }
        true
    }

    pub fn remove_by_identity(&mut self, id: &RecordId) -> Option<Record> {
        self.position(id).map(|index| self.records.remove(index))
    }

    pub fn find(&self, id: &RecordId) -> Option<&Record> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn position(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
