//! Value objects - immutable types that represent domain concepts

mod actor;
mod clock;
mod record_id;
mod reference;
mod stay;
mod status;

pub use actor::{Actor, Role};
pub use clock::{Clock, FixedClock, SystemClock};
pub use record_id::{RecordId, RecordIdParseError};
pub use reference::ReferenceCode;
pub use stay::StayDates;
pub use status::{BookingStatus, Location, RoomStatus};
