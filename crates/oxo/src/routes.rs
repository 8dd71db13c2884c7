//! One handler per endpoint. Handlers translate between the wire
//! bodies and registry calls; the rules themselves live behind the
//! registry.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use oxo_protocol::{
    CreateRoomRequest, CreateRoomResponse, JoinRoomRequest, JoinRoomResponse,
    LeaveRoomRequest, LeaveRoomResponse, MakeMoveRequest, MakeMoveResponse,
    ResetRoomRequest, ResetRoomResponse, RoomCode, RoomSnapshot,
};
use oxo_registry::RoomRegistry;

use crate::error::{ApiError, MoveError};

type Registry = State<Arc<RoomRegistry>>;

/// `POST /api/create_room`. The body is optional: the two-player client
/// sends a bare `{}`, and anything unparseable is treated the same way.
pub(crate) async fn create_room(
    State(registry): Registry,
    payload: Option<Json<CreateRoomRequest>>,
) -> Json<CreateRoomResponse> {
    let vs_computer = payload.map(|Json(req)| req.vs_computer).unwrap_or(false);
    let created = registry.create(vs_computer);
    Json(CreateRoomResponse {
        room_id: created.room_id,
        you_are: created.you_are,
        status: created.status,
    })
}

/// `POST /api/join_room`.
pub(crate) async fn join_room(
    State(registry): Registry,
    payload: Result<Json<JoinRoomRequest>, JsonRejection>,
) -> Result<Json<JoinRoomResponse>, ApiError> {
    let Json(req) = payload?;
    let joined = registry.join(&req.room_id)?;
    Ok(Json(JoinRoomResponse {
        room_id: joined.room_id,
        you_are: joined.you_are,
        status: joined.status,
    }))
}

/// `GET /api/room_state/{room_id}`. The client polls this while waiting
/// for the opponent's move.
pub(crate) async fn room_state(
    State(registry): Registry,
    Path(room_id): Path<RoomCode>,
) -> Result<Json<RoomSnapshot>, ApiError> {
    Ok(Json(registry.snapshot(&room_id)?))
}

/// `POST /api/make_move`. Failures use the `{"ok": false, ...}` shape.
pub(crate) async fn make_move(
    State(registry): Registry,
    payload: Result<Json<MakeMoveRequest>, JsonRejection>,
) -> Result<Json<MakeMoveResponse>, MoveError> {
    let Json(req) = payload?;
    let snapshot = registry.play(&req.room_id, req.player, req.index)?;
    Ok(Json(MakeMoveResponse::from_snapshot(snapshot)))
}

/// `POST /api/reset_room`.
pub(crate) async fn reset_room(
    State(registry): Registry,
    payload: Result<Json<ResetRoomRequest>, JsonRejection>,
) -> Result<Json<ResetRoomResponse>, ApiError> {
    let Json(req) = payload?;
    let snapshot = registry.reset(&req.room_id, req.start_player)?;
    Ok(Json(ResetRoomResponse::from_snapshot(snapshot)))
}

/// `POST /api/leave_room`. Closes the room immediately; the remaining
/// player's next poll sees `Room not found` and exits to the lobby.
pub(crate) async fn leave_room(
    State(registry): Registry,
    payload: Result<Json<LeaveRoomRequest>, JsonRejection>,
) -> Result<Json<LeaveRoomResponse>, ApiError> {
    let Json(req) = payload?;
    registry.close(&req.room_id)?;
    Ok(Json(LeaveRoomResponse { ok: true }))
}
