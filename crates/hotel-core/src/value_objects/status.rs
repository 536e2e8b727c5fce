//! Lifecycle states for bookings and rooms, plus room location categories
//!
//! Booking lifecycle:
//!
//! ```text
//! confirmed ──> checked_in ──> checked_out
//!     │
//!     └──────> cancelled
//! ```
//!
//! `checked_out` and `cancelled` are terminal. Every accepted booking
//! transition implies a room status via [`BookingStatus::room_cascade`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Booking lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 4] = [
        Self::Confirmed,
        Self::CheckedIn,
        Self::CheckedOut,
        Self::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::CheckedIn => "checked_in",
            Self::CheckedOut => "checked_out",
            Self::Cancelled => "cancelled",
        }
    }

    /// States reachable from this one
    pub fn allowed_transitions(&self) -> &'static [BookingStatus] {
        match self {
            Self::Confirmed => &[Self::CheckedIn, Self::Cancelled],
            Self::CheckedIn => &[Self::CheckedOut],
            Self::CheckedOut | Self::Cancelled => &[],
        }
    }

    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    /// Validate a move against the transition table
    pub fn transition_to(self, next: BookingStatus) -> Result<BookingStatus, DomainError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(DomainError::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.allowed_transitions().is_empty()
    }

    /// Whether the booking still holds its interval on the room
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }

    /// Room status implied by a booking entering this state
    pub fn room_cascade(&self) -> RoomStatus {
        match self {
            Self::Confirmed | Self::CheckedIn => RoomStatus::Occupied,
            Self::CheckedOut => RoomStatus::Cleaning,
            Self::Cancelled => RoomStatus::Available,
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confirmed" => Ok(Self::Confirmed),
            "checked_in" => Ok(Self::CheckedIn),
            "checked_out" => Ok(Self::CheckedOut),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(DomainError::InvalidStatus(other.to_string())),
        }
    }
}

/// Operational room state
///
/// `occupied` and `cleaning` are informational; only `maintenance` and
/// `out_of_order` take a room out of availability searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    Available,
    Occupied,
    Cleaning,
    Maintenance,
    OutOfOrder,
}

impl RoomStatus {
    pub const ALL: [RoomStatus; 5] = [
        Self::Available,
        Self::Occupied,
        Self::Cleaning,
        Self::Maintenance,
        Self::OutOfOrder,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Cleaning => "cleaning",
            Self::Maintenance => "maintenance",
            Self::OutOfOrder => "out_of_order",
        }
    }

    /// Manual staff flags that exclude the room regardless of bookings
    pub fn blocks_availability(&self) -> bool {
        matches!(self, Self::Maintenance | Self::OutOfOrder)
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "occupied" => Ok(Self::Occupied),
            "cleaning" => Ok(Self::Cleaning),
            "maintenance" => Ok(Self::Maintenance),
            "out_of_order" => Ok(Self::OutOfOrder),
            other => Err(DomainError::InvalidStatus(other.to_string())),
        }
    }
}

/// Where a room type is located
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Cabin,
    Hotel,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cabin => "cabin",
            Self::Hotel => "hotel",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cabin" => Ok(Self::Cabin),
            "hotel" => Ok(Self::Hotel),
            other => Err(DomainError::ValidationError(format!(
                "unknown location: {other}"
            ))),
        }
    }
}
