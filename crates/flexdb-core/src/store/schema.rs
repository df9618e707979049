use crate::obs::{ChangeEvent, ChangeSink, SinkHandle};
use flexdb_schema::node::{Entity, Field, FieldKind};
use flexdb_schema::types::{EntityId, FieldId};
use std::rc::Rc;

///
/// SchemaStore
///
/// Owns the live entity definitions in insertion order. Mutations apply
/// synchronously and never fail the caller: a stale or unknown id is a
/// silent no-op, matching a UI-driven flow where the caller obtained ids
/// from a prior read.
///

#[derive(Default)]
pub struct SchemaStore {
    entities: Vec<Entity>,
    version: u64,
    sink: SinkHandle,
}

impl SchemaStore {
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
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id == id)
    }

    /// Entity lookup from a human-typed route segment. Route keys are not
    /// unique; the first entity in list order wins.
    #[must_use]
    pub fn get_by_route_key(&self, key: &str) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.route_key() == key)
    }

    /// Create an entity with a fresh id, an empty field list, and no
    /// display field. The definition is visible through `get` immediately.
    pub fn create_entity(
        &mut self,
        name: impl Into<String>,
        plural_name: impl Into<String>,
    ) -> EntityId {
        let id = EntityId::generate();
        self.entities.push(Entity::new(id, name, plural_name));
        self.applied(ChangeEvent::EntityCreated { entity: id });

        id
    }

    /// Append a field to the end of the entity's field sequence. Returns
    /// the fresh field id, or `None` (no-op) if the entity is absent.
    pub fn add_field(
        &mut self,
        entity_id: EntityId,
        name: impl Into<String>,
        kind: FieldKind,
    ) -> Option<FieldId> {
        let entity = self.get_mut(entity_id)?;
        let id = FieldId::generate();
        entity.fields.push(Field::new(id, name, kind));
        self.applied(ChangeEvent::FieldAdded {
            entity: entity_id,
            field: id,
        });

        Some(id)
    }

    /// Remove a field by id; absent entity or field ids are ignored. A
    /// `display_name_field_id` pointing at the removed field is left
    /// dangling — readers fall back.
    pub fn remove_field(&mut self, entity_id: EntityId, field_id: FieldId) {
        let Some(entity) = self.get_mut(entity_id) else {
            return;
        };
        let before = entity.fields.len();
        entity.fields.retain(|field| field.id != field_id);
        if entity.fields.len() == before {
            return;
        }

        self.applied(ChangeEvent::FieldRemoved {
            entity: entity_id,
            field: field_id,
        });
    }

    /// Record which field labels records of this entity. The value is
    /// stored verbatim, even when it does not name a current field.
    pub fn set_display_name_field(&mut self, entity_id: EntityId, field_id: FieldId) {
        let Some(entity) = self.get_mut(entity_id) else {
            return;
        };
        entity.display_name_field_id = Some(field_id);

        self.applied(ChangeEvent::DisplayFieldSet {
            entity: entity_id,
            field: field_id,
        });
    }

    /// Delete an entity definition. Dependent records, reference fields,
    /// and backlink fields elsewhere are not touched; they dangle and
    /// degrade at read time.
    pub fn delete_entity(&mut self, id: EntityId) {
        let before = self.entities.len();
        self.entities.retain(|entity| entity.id != id);
        if self.entities.len() == before {
            return;
        }

        self.applied(ChangeEvent::EntityDeleted { entity: id });
    }

    fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|entity| entity.id == id)
    }

    fn applied(&mut self, event: ChangeEvent) {
        self.version += 1;
        self.sink.emit(event);
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_entities_list_in_insertion_order() {
        let mut store = SchemaStore::new();
        let a = store.create_entity("Account", "Accounts");
        let b = store.create_entity("Lead", "Leads");

        let ids: Vec<_> = store.entities().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![a, b]);
        assert_eq!(store.get(a).unwrap().name, "Account");
        assert!(store.get(a).unwrap().fields.is_empty());
        assert_eq!(store.get(a).unwrap().display_name_field_id, None);
    }

    #[test]
    fn route_key_lookup_is_first_match_in_list_order() {
        let mut store = SchemaStore::new();
        let first = store.create_entity("Sales  Account", "As");
        store.create_entity("Sales Account", "Bs");

        assert_eq!(store.get_by_route_key("sales-account").unwrap().id, first);
        assert!(store.get_by_route_key("nope").is_none());
    }

    #[test]
    fn add_field_appends_and_noops_on_absent_entity() {
        let mut store = SchemaStore::new();
        let entity = store.create_entity("Account", "Accounts");
        let name = store.add_field(entity, "Name", FieldKind::ShortText).unwrap();
        let notes = store.add_field(entity, "Notes", FieldKind::LongText).unwrap();

        let fields: Vec<_> = store.get(entity).unwrap().fields.iter().map(|f| f.id).collect();
        assert_eq!(fields, vec![name, notes]);

        store.delete_entity(entity);
        let version = store.version();
        assert_eq!(store.add_field(entity, "Ghost", FieldKind::ShortText), None);
        assert_eq!(store.version(), version);
    }

    #[test]
    fn remove_field_leaves_the_display_field_dangling() {
        let mut store = SchemaStore::new();
        let entity = store.create_entity("Account", "Accounts");
        let name = store.add_field(entity, "Name", FieldKind::ShortText).unwrap();
        store.set_display_name_field(entity, name);

        store.remove_field(entity, name);

        let entity = store.get(entity).unwrap();
        assert!(entity.fields.is_empty());
        assert_eq!(entity.display_name_field_id, Some(name));
    }

    #[test]
    fn noop_mutations_do_not_bump_the_version() {
        let mut store = SchemaStore::new();
        let entity = store.create_entity("Account", "Accounts");
        let field = store.add_field(entity, "Name", FieldKind::ShortText).unwrap();
        let version = store.version();

        store.remove_field(entity, FieldId::generate());
        store.delete_entity(EntityId::generate());
        store.set_display_name_field(EntityId::generate(), field);
        assert_eq!(store.version(), version);

        store.remove_field(entity, field);
        assert_eq!(store.version(), version + 1);
    }
}
