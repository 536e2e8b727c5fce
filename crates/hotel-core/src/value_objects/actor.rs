//! Authenticated principal and the capability checks tied to its role

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::{BookingStatus, RecordId};

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Customer,
    Employee,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Employee => "employee",
            Self::Admin => "admin",
        }
    }

    /// Employees and admins
    #[inline]
    pub fn is_staff(&self) -> bool {
        matches!(self, Self::Employee | Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Self::Customer),
            "employee" => Ok(Self::Employee),
            "admin" => Ok(Self::Admin),
            other => Err(DomainError::ValidationError(format!("unknown role: {other}"))),
        }
    }
}

/// The caller of an operation: who they are and what role they hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: RecordId,
    pub role: Role,
}

impl Actor {
    pub fn new(user_id: RecordId, role: Role) -> Self {
        Self { user_id, role }
    }

    pub fn customer(user_id: RecordId) -> Self {
        Self::new(user_id, Role::Customer)
    }

    pub fn employee(user_id: RecordId) -> Self {
        Self::new(user_id, Role::Employee)
    }

    pub fn admin(user_id: RecordId) -> Self {
        Self::new(user_id, Role::Admin)
    }

    #[inline]
    pub fn is_staff(&self) -> bool {
        self.role.is_staff()
    }

    /// Fail unless the actor is an employee or admin
    pub fn require_staff(&self) -> Result<(), DomainError> {
        if self.is_staff() {
            Ok(())
        } else {
            Err(DomainError::Forbidden(
                "staff role required".to_string(),
            ))
        }
    }

    /// Staff see every booking, customers only their own
    pub fn can_view(&self, owner: RecordId) -> bool {
        self.is_staff() || self.user_id == owner
    }

    /// Check whether the actor may move a booking owned by `owner` from `from` to `to`.
    ///
    /// Customers are limited to cancelling their own confirmed bookings.
    /// This runs before the transition table, so a customer asking for any
    /// other move is refused as `Forbidden` rather than `InvalidTransition`.
    pub fn authorize_transition(
        &self,
        owner: RecordId,
        from: BookingStatus,
        to: BookingStatus,
    ) -> Result<(), DomainError> {
        if self.is_staff() {
            return Ok(());
        }

        if owner != self.user_id {
            return Err(DomainError::Forbidden(
                "booking belongs to another customer".to_string(),
            ));
        }

        if from == BookingStatus::Confirmed && to == BookingStatus::Cancelled {
            Ok(())
        } else {
            Err(DomainError::Forbidden(format!(
                "customers may only cancel confirmed bookings (requested {from} -> {to})"
            )))
        }
    }
}
