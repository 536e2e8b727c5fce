//! Record ID - database-assigned 64-bit identifier shared by every aggregate
//!
//! Ids come from PostgreSQL `BIGSERIAL` columns (or the in-memory store's
//! counters), so they are strictly positive once persisted. Zero marks a
//! record that has not been inserted yet.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identifier of a room type, room, booking, or user
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RecordId(i64);

impl RecordId {
    /// Create a RecordId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Check if the id is zero (not yet persisted)
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, RecordIdParseError> {
        match s.trim().parse::<i64>() {
            Ok(id) if id > 0 => Ok(RecordId(id)),
            _ => Err(RecordIdParseError::InvalidFormat),
        }
    }
}

/// Error when parsing a RecordId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RecordIdParseError {
    #[error("invalid record id")]
    InvalidFormat,
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<RecordId> for i64 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl std::str::FromStr for RecordId {
    type Err = RecordIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordId::parse(s)
    }
}

impl Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

// Path segments and query strings arrive as strings, JSON bodies as numbers
impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct RecordIdVisitor;

        impl<'de> Visitor<'de> for RecordIdVisitor {
            type Value = RecordId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a positive integer or numeric string")
            }

            fn visit_i64<E>(self, value: i64) -> Result<RecordId, E>
            where
                E: de::Error,
            {
                if value > 0 {
                    Ok(RecordId(value))
                } else {
                    Err(de::Error::custom("record id must be positive"))
                }
            }

            fn visit_u64<E>(self, value: u64) -> Result<RecordId, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map_err(|_| de::Error::custom("record id out of range"))
                    .and_then(|v| self.visit_i64(v))
            }

            fn visit_str<E>(self, value: &str) -> Result<RecordId, E>
            where
                E: de::Error,
            {
                RecordId::parse(value).map_err(|_| de::Error::custom("invalid record id string"))
            }
        }

        deserializer.deserialize_any(RecordIdVisitor)
    }
}
