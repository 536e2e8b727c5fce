//! Room handlers
//!
//! Reads are public; writes, status overrides and stats need a staff token.

use axum::{extract::State, Json};
use hotel_service::dto::{
    ApiResponse, CreateRoomRequest, RoomListQuery, RoomResponse, RoomStatsResponse,
    UpdateRoomRequest, UpdateRoomStatusRequest,
};
use hotel_service::RoomService;

use crate::extractors::{AuthUser, IdPath, JsonBody, QueryParams, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /rooms?room_type_id&status
pub async fn list_rooms(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<RoomListQuery>,
) -> ApiResult<Json<ApiResponse<Vec<RoomResponse>>>> {
    let rooms = RoomService::new(state.service_context()).list(query).await?;
    Ok(Json(ApiResponse::new(rooms)))
}

/// POST /rooms
pub async fn create_room(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateRoomRequest>,
) -> ApiResult<Created<Json<RoomResponse>>> {
    let room = RoomService::new(state.service_context())
        .create(auth.actor, request)
        .await?;
    Ok(Created(Json(room)))
}

/// GET /rooms/{room_id}
pub async fn get_room(
    State(state): State<AppState>,
    IdPath(room_id): IdPath,
) -> ApiResult<Json<RoomResponse>> {
    let room = RoomService::new(state.service_context()).get(room_id).await?;
    Ok(Json(room))
}

/// PUT /rooms/{room_id}
pub async fn update_room(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(room_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateRoomRequest>,
) -> ApiResult<Json<RoomResponse>> {
    let room = RoomService::new(state.service_context())
        .update(auth.actor, room_id, request)
        .await?;
    Ok(Json(room))
}

/// DELETE /rooms/{room_id}
pub async fn delete_room(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(room_id): IdPath,
) -> ApiResult<NoContent> {
    RoomService::new(state.service_context())
        .delete(auth.actor, room_id)
        .await?;
    Ok(NoContent)
}

/// Manual status override
///
/// PATCH /rooms/{room_id}/status
pub async fn set_room_status(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(room_id): IdPath,
    JsonBody(request): JsonBody<UpdateRoomStatusRequest>,
) -> ApiResult<Json<RoomResponse>> {
    let room = RoomService::new(state.service_context())
        .set_status(auth.actor, room_id, request.status)
        .await?;
    Ok(Json(room))
}

/// GET /rooms/stats
pub async fn room_stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<RoomStatsResponse>> {
    let stats = RoomService::new(state.service_context())
        .stats(auth.actor)
        .await?;
    Ok(Json(stats))
}
