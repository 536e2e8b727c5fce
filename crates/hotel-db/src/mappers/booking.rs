//! Booking entity <-> model mapper

use hotel_core::entities::{BookedStay, Booking, BookingStatusStats};
use hotel_core::error::DomainError;
use hotel_core::value_objects::{RecordId, ReferenceCode, StayDates};

use crate::models::{BookedStayModel, BookingModel, BookingStatsModel};

use super::room_type::corrupt_column;

impl TryFrom<BookingModel> for Booking {
    type Error = DomainError;

    fn try_from(model: BookingModel) -> Result<Self, Self::Error> {
        let id = RecordId::new(model.id);
        Ok(Booking {
            id,
            // Only unset between the insert and the reference update of one transaction
            reference: model
                .ref_code
                .map_or_else(|| ReferenceCode::from_booking_id(id), ReferenceCode::from_stored),
            customer_id: RecordId::new(model.customer_id),
            room_id: RecordId::new(model.room_id),
            status: model.status.parse().map_err(corrupt_column)?,
            stay: StayDates::new(model.check_in, model.check_out).map_err(corrupt_column)?,
            guests: model.guests,
            nights: model.nights,
            total_amount: model.total_amount,
            special_requests: model.special_requests,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl TryFrom<BookedStayModel> for BookedStay {
    type Error = DomainError;

    fn try_from(model: BookedStayModel) -> Result<Self, Self::Error> {
        Ok(BookedStay {
            booking_id: RecordId::new(model.id),
            stay: StayDates::new(model.check_in, model.check_out).map_err(corrupt_column)?,
        })
    }
}

impl TryFrom<BookingStatsModel> for BookingStatusStats {
    type Error = DomainError;

    fn try_from(model: BookingStatsModel) -> Result<Self, Self::Error> {
        Ok(BookingStatusStats {
            status: model.status.parse().map_err(corrupt_column)?,
            count: model.count,
            revenue: model.revenue,
        })
    }
}
