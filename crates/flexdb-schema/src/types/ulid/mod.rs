pub(crate) mod generator;

use derive_more::{Deref, DerefMut, Display, FromStr};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error as ThisError;
use ulid::Ulid as WrappedUlid;

///
/// UlidError
///

#[derive(Debug, ThisError)]
pub enum UlidError {
    #[error("monotonic error - overflow")]
    GeneratorOverflow,
}

///
/// Ulid
///
/// Identifier scheme for everything the stores hand out: a millisecond
/// timestamp component plus a random component, unique for the lifetime of
/// the process.
///

#[derive(
    Clone, Copy, Debug, Deref, DerefMut, Display, Eq, FromStr, Hash, Ord, PartialEq, PartialOrd,
)]
#[repr(transparent)]
pub struct Ulid(WrappedUlid);

impl Ulid {
    #[must_use]
    pub const fn from_parts(timestamp_ms: u64, random: u128) -> Self {
        Self(WrappedUlid::from_parts(timestamp_ms, random))
    }

    /// Generate a ULID with the current timestamp and a random value.
    /// Falls back to a fresh non-monotonic id on generator overflow.
    #[must_use]
    pub fn generate() -> Self {
        Self::try_generate().unwrap_or_else(|_| Self(WrappedUlid::new()))
    }

    /// Fallible ULID generation preserving the error (e.g., overflow).
    pub fn try_generate() -> Result<Self, UlidError> {
        generator::generate()
    }
}

impl From<WrappedUlid> for Ulid {
    fn from(ulid: WrappedUlid) -> Self {
        Self(ulid)
    }
}

impl Serialize for Ulid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Ulid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;

        text.parse::<WrappedUlid>()
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_parse_round_trip() {
        let ulid = Ulid::from_parts(1_700_000_000_000, 42);
        let text = ulid.to_string();

        assert_eq!(text.len(), 26);
        assert_eq!(text.parse::<Ulid>().unwrap(), ulid);
    }

    #[test]
    fn serde_uses_the_canonical_string_form() {
        let ulid = Ulid::from_parts(1_700_000_000_000, 42);
        let json = serde_json::to_string(&ulid).unwrap();

        assert_eq!(json, format!("\"{ulid}\""));
        assert_eq!(serde_json::from_str::<Ulid>(&json).unwrap(), ulid);
    }
}
