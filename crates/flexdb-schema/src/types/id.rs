use crate::types::Ulid;
use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// EntityId
///
/// Opaque identifier of an entity definition. Immutable and unique across
/// all live entities for the lifetime of the process.
///

#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    FromStr,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[repr(transparent)]
pub struct EntityId(Ulid);

impl EntityId {
    #[must_use]
    pub fn generate() -> Self {
        Self(Ulid::generate())
    }

    #[must_use]
    pub const fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }
}

///
/// FieldId
///
/// Identifier of one field within its owning entity. Fresh per field; never
/// reused even after the field is removed.
///

#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    FromStr,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[repr(transparent)]
pub struct FieldId(Ulid);

impl FieldId {
    #[must_use]
    pub fn generate() -> Self {
        Self(Ulid::generate())
    }

    #[must_use]
    pub const fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }
}

///
/// RecordId
///
/// Identifier of one record. Reference fields store this as their raw
/// string value.
///

#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    FromStr,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[repr(transparent)]
pub struct RecordId(Ulid);

impl RecordId {
    #[must_use]
    pub fn generate() -> Self {
        Self(Ulid::generate())
    }

    #[must_use]
    pub const fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }
}

///
/// TESTS
///
