//! Booking handlers
//!
//! Creating bookings and moving them through their lifecycle. Every endpoint
//! requires a bearer token; ownership rules are enforced by the service.

use axum::{
    extract::{Path, State},
    Json,
};
use hotel_service::dto::{
    BookingListQuery, BookingResponse, BookingStatsResponse, CreateBookingRequest,
    PaginatedResponse, UpdateBookingStatusRequest,
};
use hotel_service::BookingService;

use crate::extractors::{AuthUser, IdPath, JsonBody, ValidatedJson, ValidatedQuery};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a booking
///
/// POST /bookings
pub async fn create_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateBookingRequest>,
) -> ApiResult<Created<Json<BookingResponse>>> {
    let booking = BookingService::new(state.service_context())
        .create_booking(auth.actor, request)
        .await?;
    Ok(Created(Json(booking)))
}

/// List bookings; customers only see their own
///
/// GET /bookings
pub async fn list_bookings(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedQuery(query): ValidatedQuery<BookingListQuery>,
) -> ApiResult<Json<PaginatedResponse<BookingResponse>>> {
    let page = BookingService::new(state.service_context())
        .list_bookings(auth.actor, query)
        .await?;
    Ok(Json(page))
}

/// The caller's own bookings
///
/// GET /bookings/@me
pub async fn my_bookings(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedQuery(query): ValidatedQuery<BookingListQuery>,
) -> ApiResult<Json<PaginatedResponse<BookingResponse>>> {
    let page = BookingService::new(state.service_context())
        .list_mine(auth.actor, query)
        .await?;
    Ok(Json(page))
}

/// Booking counts and revenue per status
///
/// GET /bookings/stats
pub async fn booking_stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<BookingStatsResponse>> {
    let stats = BookingService::new(state.service_context())
        .stats(auth.actor)
        .await?;
    Ok(Json(stats))
}

/// GET /bookings/{booking_id}
pub async fn get_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(booking_id): IdPath,
) -> ApiResult<Json<BookingResponse>> {
    let booking = BookingService::new(state.service_context())
        .get_booking(auth.actor, booking_id)
        .await?;
    Ok(Json(booking))
}

/// GET /bookings/reference/{ref_code}
pub async fn get_booking_by_reference(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(reference): Path<String>,
) -> ApiResult<Json<BookingResponse>> {
    let booking = BookingService::new(state.service_context())
        .get_by_reference(auth.actor, &reference)
        .await?;
    Ok(Json(booking))
}

/// Move a booking to another status
///
/// PATCH /bookings/{booking_id}/status
pub async fn update_booking_status(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(booking_id): IdPath,
    JsonBody(request): JsonBody<UpdateBookingStatusRequest>,
) -> ApiResult<Json<BookingResponse>> {
    let booking = BookingService::new(state.service_context())
        .transition_status(auth.actor, booking_id, request.status)
        .await?;
    Ok(Json(booking))
}

/// POST /bookings/{booking_id}/cancel
pub async fn cancel_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(booking_id): IdPath,
) -> ApiResult<Json<BookingResponse>> {
    let booking = BookingService::new(state.service_context())
        .cancel_booking(auth.actor, booking_id)
        .await?;
    Ok(Json(booking))
}
