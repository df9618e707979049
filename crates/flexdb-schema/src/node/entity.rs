use crate::{
    node::{Field, FieldList},
    slug,
    types::{EntityId, FieldId},
};
use serde::{Deserialize, Serialize};

///
/// Entity
///
/// A user-defined schema: naming metadata plus an ordered field list.
/// `display_name_field_id` may dangle after a field removal; readers fall
/// back instead of failing.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    pub plural_name: String,
    pub fields: FieldList,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name_field_id: Option<FieldId>,
}

impl Entity {
    #[must_use]
    pub fn new(id: EntityId, name: impl Into<String>, plural_name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            plural_name: plural_name.into(),
            fields: FieldList::default(),
            display_name_field_id: None,
        }
    }

    /// Route-addressable key derived from the entity name.
    #[must_use]
    pub fn route_key(&self) -> String {
        slug::slugify(&self.name)
    }

    /// Field used to label records of this entity: the configured display
    /// field while it is still present, else the first field. `None` only
    /// when the entity has no fields.
    #[must_use]
    pub fn display_field(&self) -> Option<&Field> {
        self.display_name_field_id
            .and_then(|id| self.fields.get(id))
            .or_else(|| self.fields.first())
    }
}

///
/// TESTS
///
