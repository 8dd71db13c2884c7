//! Request and response bodies for each endpoint.
//!
//! One struct per body, named after the endpoint. These mirror what the
//! browser client sends with `fetch()` and reads back with `res.json()`.

use serde::{Deserialize, Serialize};

use crate::{Board, GameStatus, Mark, Outcome, RoomCode};

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

/// A read-only view of a room, as returned by `GET /api/room_state/{id}`.
///
/// `winner` is `null` until the game finishes; `last_move_by` is `null`
/// until the first move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub room_id: RoomCode,
    pub board: Board,
    pub current_turn: Mark,
    pub status: GameStatus,
    pub winner: Option<Outcome>,
    pub last_move_by: Option<Mark>,
}

// ---------------------------------------------------------------------------
// create_room
// ---------------------------------------------------------------------------

/// Body of `POST /api/create_room`. The client sends `{}` for a normal
/// two-player room; `{"vs_computer": true}` asks for a room where O is
/// played by the server's heuristic opponent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    #[serde(default)]
    pub vs_computer: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRoomResponse {
    pub room_id: RoomCode,
    /// Always `"X"` — the creator takes the first slot.
    pub you_are: Mark,
    pub status: GameStatus,
}

// ---------------------------------------------------------------------------
// join_room
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinRoomRequest {
    pub room_id: RoomCode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinRoomResponse {
    pub room_id: RoomCode,
    /// Always `"O"` — the joiner takes the second slot.
    pub you_are: Mark,
    pub status: GameStatus,
}

// ---------------------------------------------------------------------------
// make_move
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MakeMoveRequest {
    pub room_id: RoomCode,
    pub player: Mark,
    pub index: usize,
}

/// Success body of `POST /api/make_move`: `ok: true` plus the updated
/// room view. In a vs-computer room the board already contains the
/// opponent's reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MakeMoveResponse {
    pub ok: bool,
    pub board: Board,
    pub current_turn: Mark,
    pub status: GameStatus,
    pub winner: Option<Outcome>,
    pub last_move_by: Option<Mark>,
}

impl MakeMoveResponse {
    pub fn from_snapshot(snapshot: RoomSnapshot) -> MakeMoveResponse {
        MakeMoveResponse {
            ok: true,
            board: snapshot.board,
            current_turn: snapshot.current_turn,
            status: snapshot.status,
            winner: snapshot.winner,
            last_move_by: snapshot.last_move_by,
        }
    }
}

/// Failure body of `POST /api/make_move`. Unlike the other endpoints,
/// move failures carry `ok: false` alongside the message — the client
/// checks `!data.ok` before `data.error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRejectedResponse {
    pub ok: bool,
    pub error: String,
}

impl MoveRejectedResponse {
    pub fn new(error: impl Into<String>) -> MoveRejectedResponse {
        MoveRejectedResponse {
            ok: false,
            error: error.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// reset_room
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetRoomRequest {
    pub room_id: RoomCode,
    /// Who starts the next game. The client sends the previous winner,
    /// or omits the field to default to X.
    #[serde(default)]
    pub start_player: Option<Mark>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResetRoomResponse {
    pub ok: bool,
    pub room_id: RoomCode,
    pub current_turn: Mark,
    pub board: Board,
    pub status: GameStatus,
}

impl ResetRoomResponse {
    pub fn from_snapshot(snapshot: RoomSnapshot) -> ResetRoomResponse {
        ResetRoomResponse {
            ok: true,
            room_id: snapshot.room_id,
            current_turn: snapshot.current_turn,
            board: snapshot.board,
            status: snapshot.status,
        }
    }
}

// ---------------------------------------------------------------------------
// leave_room
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRoomRequest {
    pub room_id: RoomCode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRoomResponse {
    pub ok: bool,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Generic failure body: `{"error": "..."}`. The client matches the
/// message text in places (e.g. `"Room not found"` triggers auto-exit),
/// so messages are part of the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> ErrorResponse {
        ErrorResponse {
            error: error.into(),
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
