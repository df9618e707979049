use crate::store::{Record, RecordStore, SchemaStore};
use flexdb_schema::node::Field;
use flexdb_schema::types::{EntityId, FieldId, RecordId};
use serde::{Deserialize, Serialize};

///
/// ReferenceOption
///
/// One selectable target for a reference field: the record id to store
/// plus its resolved display label.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ReferenceOption {
    pub label: String,
    pub value: RecordId,
}

///
/// Resolver
///
/// Computed relational layer over the two stores: display names for
/// records, reference pickers, and backlink sets. Every read resolves
/// against live store state — nothing is cached across writes, because the
/// schema can be edited out from under any in-flight view. Dangling ids at
/// any step degrade to a fallback label or an empty result, never an
/// error.
///

#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    schema: &'a SchemaStore,
    records: &'a RecordStore,
}

impl<'a> Resolver<'a> {
    #[must_use]
    pub const fn new(schema: &'a SchemaStore, records: &'a RecordStore) -> Self {
        Self { schema, records }
    }

    /// Human-readable label for a record: its value at the entity's
    /// display field (first field when unset or dangling), or the record
    /// id rendered verbatim when the entity, the record, or any field at
    /// all is missing.
    #[must_use]
    pub fn display_name(&self, entity_id: EntityId, record_id: RecordId) -> String {
        let Some(entity) = self.schema.get(entity_id) else {
            return record_id.to_string();
        };
        let Some(record) = self.records.get(record_id) else {
            return record_id.to_string();
        };

        match entity.display_field() {
            Some(field) => record.value(field.id).to_string(),
            None => record_id.to_string(),
        }
    }

    /// Records of `entity_id` in store order; empty when the entity is no
    /// longer live (orphaned records never surface in entity-scoped reads).
    #[must_use]
    pub fn records_of(&self, entity_id: EntityId) -> Vec<&'a Record> {
        if self.schema.get(entity_id).is_none() {
            return Vec::new();
        }

        self.records.list_by_entity(entity_id).collect()
    }

    /// Selectable targets for a reference field, in store order. Empty
    /// unless the field is a reference whose target entity is live.
    #[must_use]
    pub fn reference_options(&self, field: &Field) -> Vec<ReferenceOption> {
        let Some(target) = field.kind.reference_target() else {
            return Vec::new();
        };

        self.records_of(target)
            .into_iter()
            .map(|record| ReferenceOption {
                label: self.display_name(target, record.id),
                value: record.id,
            })
            .collect()
    }

    /// Records of `source_entity` whose stored value at `source_field`
    /// equals `target`, in store order. This is the computed content of a
    /// backlink field; a dangling source entity or field resolves to an
    /// empty set.
    #[must_use]
    pub fn backlinks(
        &self,
        source_entity: EntityId,
        source_field: FieldId,
        target: RecordId,
    ) -> Vec<&'a Record> {
        let Some(entity) = self.schema.get(source_entity) else {
            return Vec::new();
        };
        if !entity.fields.contains_id(source_field) {
            return Vec::new();
        }

        let needle = target.to_string();
        self.records
            .list_by_entity(source_entity)
            .filter(|record| record.value(source_field) == needle)
            .collect()
    }

    /// Computed value set of a backlink field as shown on `record_id`.
    /// Non-backlink kinds resolve to empty.
    #[must_use]
    pub fn backlink_records(&self, field: &Field, record_id: RecordId) -> Vec<&'a Record> {
        match field.kind.backlink_source() {
            Some((source_entity, source_field)) => {
                self.backlinks(source_entity, source_field, record_id)
            }
            None => Vec::new(),
        }
    }

    /// Reference fields on `candidate_source` that target `current` — the
    /// only legal sources when configuring a backlink field on `current`.
    #[must_use]
    pub fn backlink_candidate_fields(
        &self,
        current: EntityId,
        candidate_source: EntityId,
    ) -> Vec<&'a Field> {
        let Some(entity) = self.schema.get(candidate_source) else {
            return Vec::new();
        };

        entity
            .fields
            .iter()
            .filter(|field| field.kind.reference_target() == Some(current))
            .collect()
    }
}

///
/// TESTS
///
