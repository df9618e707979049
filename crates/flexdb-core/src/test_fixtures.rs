use crate::{
    db::Db,
    fixtures::{SeededWorkspace, seed_demo},
};
use flexdb_schema::node::Field;
use flexdb_schema::types::{EntityId, FieldId};

/// Fresh workspace pre-populated with the demo seed.
pub fn seeded_db() -> (Db, SeededWorkspace) {
    let mut db = Db::new();
    let seed = seed_demo(&mut db);

    (db, seed)
}

/// Owned copy of a field looked up by display name; panics on a missing
/// entity or field, which in a test means the fixture changed underneath
/// the assertion.
pub fn field_named(db: &Db, entity: EntityId, name: &str) -> Field {
    db.schema
        .get(entity)
        .and_then(|entity| entity.fields.iter().find(|field| field.name == name))
        .cloned()
        .unwrap_or_else(|| panic!("fixture field '{name}' not found"))
}

/// Field id lookup by display name.
pub fn field_by_name(db: &Db, entity: EntityId, name: &str) -> FieldId {
    field_named(db, entity, name).id
}
