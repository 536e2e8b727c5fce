//! User entity - a customer or staff member, read-only for the booking core

use chrono::{DateTime, Utc};

use crate::value_objects::{RecordId, Role};

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: RecordId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_customer(&self) -> bool {
        self.role == Role::Customer
    }
}
