//! Wire types for the oxo room API.
//!
//! This crate defines every value that crosses the HTTP boundary:
//!
//! - **Game types** ([`Mark`], [`Board`], [`GameStatus`], [`Outcome`],
//!   [`RoomCode`]) — the vocabulary shared by the engine, the registry,
//!   and the JSON adapter.
//! - **API shapes** (the request/response structs in [`api`]) — the exact
//!   JSON bodies of each endpoint.
//!
//! The serde attributes here are load-bearing: clients compare literal
//! strings like `"finished"` and `"Room not found"`, so the JSON shape is
//! pinned by tests rather than left to derive defaults.

mod api;
mod types;

pub use api::{
    CreateRoomRequest, CreateRoomResponse, ErrorResponse, JoinRoomRequest,
    JoinRoomResponse, LeaveRoomRequest, LeaveRoomResponse, MakeMoveRequest,
    MakeMoveResponse, MoveRejectedResponse, ResetRoomRequest,
    ResetRoomResponse, RoomSnapshot,
};
pub use types::{Board, GameStatus, Mark, Outcome, RoomCode, BOARD_CELLS};
