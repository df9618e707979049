//! Schema vocabulary for FlexDB: field types and kinds, entity and field
//! definition nodes, typed identifiers, and the route-key generator.
//!
//! Schemas here are runtime data, mutated structurally by users with no
//! recompilation or migration step; the runtime stores live in
//! `flexdb-core`.

pub mod node;
pub mod slug;
pub mod types;

use crate::types::{FieldTypeParseError, UlidError};
use thiserror::Error as ThisError;

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    FieldTypeParseError(#[from] FieldTypeParseError),

    #[error(transparent)]
    UlidError(#[from] UlidError),
}

///
/// Prelude
///
/// Domain vocabulary only; errors and the generator plumbing stay out.
///

pub mod prelude {
    pub use crate::{
        node::{Entity, Field, FieldKind, FieldList},
        types::{EntityId, FieldId, FieldType, RecordId},
    };
}
