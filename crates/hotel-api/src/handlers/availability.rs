//! Availability handlers
//!
//! Public endpoints answering which rooms are free for a stay.

use axum::{extract::State, Json};
use hotel_service::dto::{
    ApiResponse, AvailabilityQuery, AvailabilitySummaryQuery, AvailabilitySummaryResponse,
    RoomAvailabilityQuery, RoomAvailabilityResponse, RoomSummaryResponse,
};
use hotel_service::AvailabilityService;

use crate::extractors::{IdPath, QueryParams, ValidatedQuery};
use crate::response::ApiResult;
use crate::state::AppState;

/// Search rooms free for a stay
///
/// GET /availability?check_in&check_out&guests&room_type_id
pub async fn search_availability(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<AvailabilityQuery>,
) -> ApiResult<Json<ApiResponse<Vec<RoomSummaryResponse>>>> {
    let rooms = AvailabilityService::new(state.service_context())
        .search(query)
        .await?;
    Ok(Json(ApiResponse::new(rooms)))
}

/// Available and total room counts
///
/// GET /availability/summary?check_in&check_out&room_type_id
pub async fn availability_summary(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<AvailabilitySummaryQuery>,
) -> ApiResult<Json<AvailabilitySummaryResponse>> {
    let summary = AvailabilityService::new(state.service_context())
        .summary(query)
        .await?;
    Ok(Json(summary))
}

/// Whether one room is free for a stay
///
/// GET /rooms/{room_id}/availability?check_in&check_out
pub async fn room_availability(
    State(state): State<AppState>,
    IdPath(room_id): IdPath,
    QueryParams(query): QueryParams<RoomAvailabilityQuery>,
) -> ApiResult<Json<RoomAvailabilityResponse>> {
    let response = AvailabilityService::new(state.service_context())
        .check_room(room_id, query)
        .await?;
    Ok(Json(response))
}
