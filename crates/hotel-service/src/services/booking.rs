//! Booking service
//!
//! Creates bookings and drives them through their lifecycle. Every write runs
//! inside one [`BookingTransaction`](hotel_core::traits::BookingTransaction):
//! the overlap check, the booking row, its reference code, and the room status
//! cascade commit together or not at all. Returning early drops the
//! transaction, which rolls it back.

use hotel_core::entities::{find_conflict, NewBooking, MAX_GUESTS, MIN_GUESTS};
use hotel_core::traits::BookingQuery;
use hotel_core::{Actor, BookingStatus, DomainError, RecordId, ReferenceCode, StayDates};
use tracing::{info, instrument, warn};

use crate::dto::{
    BookingListQuery, BookingResponse, BookingStatsResponse, CreateBookingRequest,
    PaginatedResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Longest accepted special requests text, in characters
pub const MAX_SPECIAL_REQUESTS_LEN: usize = 500;

/// Booking service
pub struct BookingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BookingService<'a> {
    /// Create a new BookingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Reserve a room for a stay.
    ///
    /// Customers always book for themselves; staff book on behalf of the
    /// customer named in the request.
    #[instrument(skip(self, actor, request), fields(actor = %actor.user_id, room_id = %request.room_id))]
    pub async fn create_booking(
        &self,
        actor: Actor,
        request: CreateBookingRequest,
    ) -> ServiceResult<BookingResponse> {
        let customer_id = self.resolve_customer(actor, request.customer_id)?;
        let stay = StayDates::new(request.check_in, request.check_out)?;
        self.check_stay(&stay)?;

        if !(MIN_GUESTS..=MAX_GUESTS).contains(&request.guests) {
            return Err(DomainError::ValidationError(format!(
                "guests must be between {MIN_GUESTS} and {MAX_GUESTS}"
            ))
            .into());
        }
        let special_requests = normalize_special_requests(request.special_requests)?;

        let mut tx = self.ctx.booking_store().begin().await?;

        let (room, room_type) = tx
            .lock_room(request.room_id)
            .await?
            .ok_or(DomainError::RoomNotFound(request.room_id))?;

        if !tx.customer_exists(customer_id).await? {
            return Err(DomainError::CustomerNotFound(customer_id).into());
        }

        room_type.ensure_fits(request.guests)?;

        if !room.is_bookable() {
            warn!(room_id = %room.id, status = %room.status, "Room is out of service");
            return Err(DomainError::RoomUnavailable(room.id).into());
        }

        let held = tx.active_stays_for_room(room.id, &stay).await?;
        if let Some(conflict) = find_conflict(&held, &stay, None) {
            warn!(
                room_id = %room.id,
                requested = %stay,
                conflicting_booking = %conflict.booking_id,
                "Room already booked for requested dates"
            );
            return Err(DomainError::RoomUnavailable(room.id).into());
        }

        let new_booking = NewBooking::priced(
            customer_id,
            room.id,
            stay,
            request.guests,
            room_type.price_night,
            special_requests,
        )?;
        let booking_id = tx.insert_booking(&new_booking).await?;
        let reference = ReferenceCode::from_booking_id(booking_id);
        tx.assign_reference(booking_id, &reference).await?;
        tx.update_room_status(room.id, new_booking.initial_status().room_cascade())
            .await?;

        let booking = tx
            .find_booking(booking_id)
            .await?
            .ok_or_else(|| ServiceError::internal("booking vanished inside its transaction"))?;
        tx.commit().await?;

        info!(
            booking_id = %booking.id,
            reference = %booking.reference,
            room_id = %booking.room_id,
            customer_id = %booking.customer_id,
            stay = %booking.stay,
            total_amount = %booking.total_amount,
            "Booking created"
        );

        Ok(BookingResponse::from(booking))
    }

    /// Move a booking to `next` and cascade the room status.
    ///
    /// Customers may only cancel their own confirmed bookings; staff may make
    /// any move the lifecycle allows.
    #[instrument(skip(self, actor), fields(actor = %actor.user_id))]
    pub async fn transition_status(
        &self,
        actor: Actor,
        booking_id: RecordId,
        next: BookingStatus,
    ) -> ServiceResult<BookingResponse> {
        let mut tx = self.ctx.booking_store().begin().await?;

        let booking = tx
            .lock_booking(booking_id)
            .await?
            .ok_or_else(|| DomainError::BookingNotFound(booking_id.to_string()))?;
        let from = booking.status;

        actor.authorize_transition(booking.customer_id, from, next)?;
        let to = from.transition_to(next)?;

        tx.update_booking_status(booking.id, to).await?;
        tx.update_room_status(booking.room_id, to.room_cascade())
            .await?;

        let updated = tx
            .find_booking(booking.id)
            .await?
            .ok_or_else(|| ServiceError::internal("booking vanished inside its transaction"))?;
        tx.commit().await?;

        info!(
            booking_id = %updated.id,
            reference = %updated.reference,
            room_id = %updated.room_id,
            from = %from,
            to = %to,
            "Booking status changed"
        );

        Ok(BookingResponse::from(updated))
    }

    /// Cancel a booking, freeing its nights immediately
    pub async fn cancel_booking(
        &self,
        actor: Actor,
        booking_id: RecordId,
    ) -> ServiceResult<BookingResponse> {
        self.transition_status(actor, booking_id, BookingStatus::Cancelled)
            .await
    }

    /// Get a booking visible to the actor
    #[instrument(skip(self))]
    pub async fn get_booking(
        &self,
        actor: Actor,
        booking_id: RecordId,
    ) -> ServiceResult<BookingResponse> {
        let booking = self
            .ctx
            .booking_repo()
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| DomainError::BookingNotFound(booking_id.to_string()))?;

        if !actor.can_view(booking.customer_id) {
            return Err(DomainError::Forbidden("booking belongs to another customer".into()).into());
        }

        Ok(BookingResponse::from(booking))
    }

    /// Get a booking by its reference code
    #[instrument(skip(self))]
    pub async fn get_by_reference(
        &self,
        actor: Actor,
        reference: &str,
    ) -> ServiceResult<BookingResponse> {
        let reference = ReferenceCode::parse(reference)?;
        let booking = self
            .ctx
            .booking_repo()
            .find_by_reference(&reference)
            .await?
            .ok_or_else(|| DomainError::BookingNotFound(reference.to_string()))?;

        if !actor.can_view(booking.customer_id) {
            return Err(DomainError::Forbidden("booking belongs to another customer".into()).into());
        }

        Ok(BookingResponse::from(booking))
    }

    /// List bookings newest first; customers only ever see their own
    #[instrument(skip(self, query))]
    pub async fn list_bookings(
        &self,
        actor: Actor,
        query: BookingListQuery,
    ) -> ServiceResult<PaginatedResponse<BookingResponse>> {
        let customer_id = if actor.is_staff() {
            query.customer_id
        } else {
            Some(actor.user_id)
        };
        self.list(customer_id, query).await
    }

    /// The actor's own bookings, whatever their role
    pub async fn list_mine(
        &self,
        actor: Actor,
        query: BookingListQuery,
    ) -> ServiceResult<PaginatedResponse<BookingResponse>> {
        self.list(Some(actor.user_id), query).await
    }

    /// Count and revenue per status
    #[instrument(skip(self))]
    pub async fn stats(&self, actor: Actor) -> ServiceResult<BookingStatsResponse> {
        actor.require_staff()?;
        let stats = self.ctx.booking_repo().stats().await?;
        Ok(BookingStatsResponse::from(stats))
    }

    async fn list(
        &self,
        customer_id: Option<RecordId>,
        query: BookingListQuery,
    ) -> ServiceResult<PaginatedResponse<BookingResponse>> {
        if query.page < 1 || !(1..=100).contains(&query.limit) {
            return Err(ServiceError::validation(
                "page must be at least 1 and limit between 1 and 100",
            ));
        }

        let repo_query = BookingQuery {
            customer_id,
            room_id: query.room_id,
            status: query.status,
            check_in_from: query.check_in_from,
            check_in_to: query.check_in_to,
            page: query.page,
            limit: query.limit,
        };
        if repo_query.offset().is_err() {
            return Err(ServiceError::validation(format!(
                "page {} is beyond the last possible page",
                query.page
            )));
        }
        let (bookings, total) = self.ctx.booking_repo().list(&repo_query).await?;

        Ok(PaginatedResponse::new(
            bookings.into_iter().map(BookingResponse::from).collect(),
            query.page,
            query.limit,
            total,
        ))
    }

    fn resolve_customer(
        &self,
        actor: Actor,
        requested: Option<RecordId>,
    ) -> ServiceResult<RecordId> {
        match (actor.is_staff(), requested) {
            (true, Some(customer_id)) => Ok(customer_id),
            (true, None) => Err(ServiceError::validation(
                "customer_id is required when staff create a booking",
            )),
            (false, Some(customer_id)) if customer_id != actor.user_id => Err(
                DomainError::Forbidden("customers can only book for themselves".into()).into(),
            ),
            (false, _) => Ok(actor.user_id),
        }
    }

    fn check_stay(&self, stay: &StayDates) -> ServiceResult<()> {
        if stay.starts_before(self.ctx.today()) {
            return Err(DomainError::InvalidDateRange(
                "check-in date cannot be in the past".to_string(),
            )
            .into());
        }

        let max = self.ctx.policy().max_stay_nights;
        if stay.nights() > max {
            return Err(DomainError::StayTooLong {
                nights: stay.nights(),
                max,
            }
            .into());
        }

        Ok(())
    }
}

/// Trim special requests, treating blank text as none
fn normalize_special_requests(text: Option<String>) -> ServiceResult<Option<String>> {
    let Some(text) = text else {
        return Ok(None);
    };
    let text = text.trim();
    if text.chars().count() > MAX_SPECIAL_REQUESTS_LEN {
        return Err(DomainError::ValidationError(format!(
            "special requests must be at most {MAX_SPECIAL_REQUESTS_LEN} characters"
        ))
        .into());
    }
    Ok((!text.is_empty()).then(|| text.to_string()))
}
