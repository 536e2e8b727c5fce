//! User entity <-> model mapper

use hotel_core::entities::User;
use hotel_core::error::DomainError;
use hotel_core::value_objects::RecordId;

use crate::models::UserModel;

use super::room_type::corrupt_column;

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        Ok(User {
            id: RecordId::new(model.id),
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            phone: model.phone,
            role: model.role.parse().map_err(corrupt_column)?,
            created_at: model.created_at,
        })
    }
}
