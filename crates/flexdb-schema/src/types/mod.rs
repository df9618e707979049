mod id;
mod ulid;

pub use id::*;
pub use self::ulid::{Ulid, UlidError};

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error as ThisError;

///
/// FieldTypeParseError
///

#[derive(Debug, ThisError)]
pub enum FieldTypeParseError {
    #[error("unknown field type '{0}'")]
    Unknown(String),
}

///
/// FieldType
///
/// Wire-level tag for a field's declared type. Typing is advisory: stored
/// values are raw strings regardless of the tag, which only steers
/// rendering, comparison, and picker behavior.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    #[display("backlink")]
    Backlink,
    #[display("long-text")]
    LongText,
    #[display("number")]
    Number,
    #[display("option")]
    Option,
    #[display("reference")]
    Reference,
    #[display("short-text")]
    ShortText,
}

impl FieldType {
    /// Whether fields of this type store data on the record, as opposed to
    /// being computed at read time.
    #[must_use]
    pub const fn is_stored(self) -> bool {
        !matches!(self, Self::Backlink)
    }
}

impl FromStr for FieldType {
    type Err = FieldTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "backlink" => Ok(Self::Backlink),
            "long-text" => Ok(Self::LongText),
            "number" => Ok(Self::Number),
            "option" => Ok(Self::Option),
            "reference" => Ok(Self::Reference),
            "short-text" => Ok(Self::ShortText),
            _ => Err(FieldTypeParseError::Unknown(s.to_string())),
        }
    }
}

///
/// TESTS
///
