use crate::obs::{ChangeEvent, ChangeSink, SinkHandle};
use flexdb_schema::types::{EntityId, FieldId, RecordId};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, rc::Rc};

/// Field values keyed by field id. Values are raw strings whatever the
/// field's declared type; an absent key means empty.
pub type RecordData = BTreeMap<FieldId, String>;

///
/// Record
///
/// One row of a user-defined entity. `entity_id` is fixed at creation; a
/// record whose entity has since been deleted is orphaned and excluded
/// from entity-scoped reads without error.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Record {
    pub id: RecordId,
    pub entity_id: EntityId,
    pub data: RecordData,
}

impl Record {
    /// Stored value at `field_id`; empty when absent.
    #[must_use]
    pub fn value(&self, field_id: FieldId) -> &str {
        self.data.get(&field_id).map_or("", String::as_str)
    }
}

///
/// RecordStore
///
/// Owns the records of every entity in insertion order. Mutations apply
/// synchronously and never fail the caller; stale ids are silent no-ops.
///

#[derive(Default)]
pub struct RecordStore {
    records: Vec<Record>,
    version: u64,
    sink: SinkHandle,
}

impl RecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Route change events from this store into `sink`.
    pub fn set_sink(&mut self, sink: Rc<dyn ChangeSink>) {
        self.sink.set(sink);
    }

    /// Mutation counter; bumps once per applied mutation, never on no-ops.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Records tagged with `entity_id`, in store order. Liveness of the
    /// entity is not checked here; entity-scoped views go through the
    /// resolver, which excludes orphans.
    pub fn list_by_entity(&self, entity_id: EntityId) -> impl Iterator<Item = &Record> + '_ {
        self.records
            .iter()
            .filter(move |record| record.entity_id == entity_id)
    }

    /// Create a record with a fresh id and the given initial data map
    /// (which may be partially or fully empty).
    pub fn create_record(&mut self, entity_id: EntityId, data: RecordData) -> RecordId {
        let id = RecordId::generate();
        self.records.push(Record {
            id,
            entity_id,
            data,
        });
        self.applied(ChangeEvent::RecordCreated { record: id });

        id
    }

    /// Replace the record's data map wholesale — never a merge. No-op if
    /// the record is absent.
    pub fn update_record(&mut self, id: RecordId, data: RecordData) {
        let Some(record) = self.records.iter_mut().find(|record| record.id == id) else {
            return;
        };
        record.data = data;

        self.applied(ChangeEvent::RecordUpdated { record: id });
    }

    /// Delete a record; absent ids are ignored.
    pub fn delete_record(&mut self, id: RecordId) {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        if self.records.len() == before {
            return;
        }

        self.applied(ChangeEvent::RecordDeleted { record: id });
    }

    fn applied(&mut self, event: ChangeEvent) {
        self.version += 1;
        self.sink.emit(event);
    }
}

///
/// TESTS
///
