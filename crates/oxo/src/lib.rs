//! # oxo
//!
//! HTTP backend for small multiplayer tic-tac-toe matches.
//!
//! The server keeps every live room in an in-memory
//! [`RoomRegistry`](oxo_registry::RoomRegistry) and exposes a small JSON
//! API over it:
//!
//! | Endpoint                    | Purpose                           |
//! |-----------------------------|-----------------------------------|
//! | `POST /api/create_room`     | open a room, take the X slot      |
//! | `POST /api/join_room`       | take the O slot by room code      |
//! | `GET /api/room_state/{id}`  | poll the current room view        |
//! | `POST /api/make_move`       | place a mark                      |
//! | `POST /api/reset_room`      | clear the board for a rematch     |
//! | `POST /api/leave_room`      | close the room                    |
//!
//! All state is process-local; restarting the server forgets every room.

mod error;
mod routes;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use oxo_registry::RoomRegistry;

/// Builds the API router over a shared registry.
///
/// Separated from `main` so tests can drive the router directly with
/// `tower::ServiceExt::oneshot`, no socket involved.
pub fn router(registry: Arc<RoomRegistry>) -> Router {
    Router::new()
        .route("/api/create_room", post(routes::create_room))
        .route("/api/join_room", post(routes::join_room))
        .route("/api/room_state/:room_id", get(routes::room_state))
        .route("/api/make_move", post(routes::make_move))
        .route("/api/reset_room", post(routes::reset_room))
        .route("/api/leave_room", post(routes::leave_room))
        .with_state(registry)
}
