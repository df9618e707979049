use crate::types::{EntityId, FieldId, FieldType};
use derive_more::{Deref, DerefMut};
use serde::{Deserialize, Serialize};

///
/// FieldList
///
/// Ordered field sequence of one entity. Order is user-controlled and
/// significant: it drives column order and the first-field display
/// fallback.
///

#[derive(Clone, Debug, Default, Deref, DerefMut, Deserialize, Serialize)]
pub struct FieldList(Vec<Field>);

impl FieldList {
    #[must_use]
    pub fn get(&self, id: FieldId) -> Option<&Field> {
        self.0.iter().find(|field| field.id == id)
    }

    #[must_use]
    pub fn contains_id(&self, id: FieldId) -> bool {
        self.get(id).is_some()
    }
}

///
/// Field
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Field {
    pub id: FieldId,
    pub name: String,
    pub kind: FieldKind,
}

impl Field {
    #[must_use]
    pub fn new(id: FieldId, name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
        }
    }

    #[must_use]
    pub const fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }
}

///
/// FieldKind
///
/// A field's declared type together with its type-specific attachments.
/// The attachment shape is fixed by the variant, so a kind can never carry
/// configuration for the wrong type.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[remain::sorted]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FieldKind {
    /// Computed inverse of a specific reference field on another entity.
    /// Stores no data; resolved against the live record store on read.
    Backlink {
        source_entity: EntityId,
        source_field: FieldId,
    },
    LongText,
    Number,
    /// Closed set of allowed string choices, in picker order.
    Option { values: Vec<String> },
    /// Value is the id of a record in the target entity.
    Reference { target: EntityId },
    ShortText,
}

impl FieldKind {
    #[must_use]
    pub const fn field_type(&self) -> FieldType {
        match self {
            Self::Backlink { .. } => FieldType::Backlink,
            Self::LongText => FieldType::LongText,
            Self::Number => FieldType::Number,
            Self::Option { .. } => FieldType::Option,
            Self::Reference { .. } => FieldType::Reference,
            Self::ShortText => FieldType::ShortText,
        }
    }

    /// Target entity for reference kinds.
    #[must_use]
    pub const fn reference_target(&self) -> Option<EntityId> {
        match self {
            Self::Reference { target } => Some(*target),
            _ => None,
        }
    }

    /// The (source entity, source field) pair a backlink kind points at.
    #[must_use]
    pub const fn backlink_source(&self) -> Option<(EntityId, FieldId)> {
        match self {
            Self::Backlink {
                source_entity,
                source_field,
            } => Some((*source_entity, *source_field)),
            _ => None,
        }
    }
}

///
/// TESTS
///
