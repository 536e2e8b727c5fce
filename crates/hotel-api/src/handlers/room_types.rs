//! Room type handlers

use axum::{extract::State, Json};
use hotel_service::dto::{
    ApiResponse, CreateRoomTypeRequest, RoomTypeResponse, UpdateRoomTypeRequest,
};
use hotel_service::RoomTypeService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /room-types
pub async fn list_room_types(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<RoomTypeResponse>>>> {
    let room_types = RoomTypeService::new(state.service_context()).list().await?;
    Ok(Json(ApiResponse::new(room_types)))
}

/// POST /room-types
pub async fn create_room_type(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateRoomTypeRequest>,
) -> ApiResult<Created<Json<RoomTypeResponse>>> {
    let room_type = RoomTypeService::new(state.service_context())
        .create(auth.actor, request)
        .await?;
    Ok(Created(Json(room_type)))
}

/// GET /room-types/{room_type_id}
pub async fn get_room_type(
    State(state): State<AppState>,
    IdPath(room_type_id): IdPath,
) -> ApiResult<Json<RoomTypeResponse>> {
    let room_type = RoomTypeService::new(state.service_context())
        .get(room_type_id)
        .await?;
    Ok(Json(room_type))
}

/// Price changes apply to future bookings only
///
/// PUT /room-types/{room_type_id}
pub async fn update_room_type(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(room_type_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateRoomTypeRequest>,
) -> ApiResult<Json<RoomTypeResponse>> {
    let room_type = RoomTypeService::new(state.service_context())
        .update(auth.actor, room_type_id, request)
        .await?;
    Ok(Json(room_type))
}

/// DELETE /room-types/{room_type_id}
pub async fn delete_room_type(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(room_type_id): IdPath,
) -> ApiResult<NoContent> {
    RoomTypeService::new(state.service_context())
        .delete(auth.actor, room_type_id)
        .await?;
    Ok(NoContent)
}
