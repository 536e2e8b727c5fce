//! Model to entity mappers
//!
//! Text columns holding enum values are parsed here; a value that fails to
//! parse surfaces as `DomainError::InternalError`.

mod booking;
mod room;
mod room_type;
mod user;

pub use room::room_with_type;
pub(crate) use room_type::corrupt_column;

use hotel_core::error::DomainError;

/// Convert a batch of rows, failing on the first corrupt one
pub fn map_rows<M, E>(rows: Vec<M>) -> Result<Vec<E>, DomainError>
where
    E: TryFrom<M, Error = DomainError>,
{
    rows.into_iter().map(E::try_from).collect()
}
