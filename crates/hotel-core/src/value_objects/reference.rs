//! Booking reference codes
//!
//! A reference is derived from the booking's primary key, so it is unique for
//! as long as ids are: `B` followed by the id zero-padded to nine digits.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::value_objects::RecordId;

const PREFIX: char = 'B';
const DIGITS: usize = 9;

/// Human-facing booking reference such as `B000000042`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceCode(String);

impl ReferenceCode {
    /// Derive the reference for a persisted booking id
    pub fn from_booking_id(id: RecordId) -> Self {
        Self(format!("{PREFIX}{:0width$}", id.into_inner(), width = DIGITS))
    }

    /// Parse a user-supplied reference, accepting lowercase input
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let s = s.trim().to_ascii_uppercase();
        let mut chars = s.chars();
        let valid = chars.next() == Some(PREFIX)
            && s.len() > DIGITS
            && chars.all(|c| c.is_ascii_digit());

        if valid {
            Ok(Self(s))
        } else {
            Err(DomainError::ValidationError(format!(
                "invalid booking reference: {s}"
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wrap a value already stored in the database
    pub fn from_stored(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ReferenceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
