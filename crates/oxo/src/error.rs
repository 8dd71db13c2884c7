//! Mapping of registry errors onto HTTP responses.
//!
//! Two failure shapes exist on the wire. Every endpoint except
//! `make_move` reports `{"error": "..."}`; `make_move` reports
//! `{"ok": false, "error": "..."}` because the client checks `ok`
//! before reading the message. Status codes follow the error kind:
//! a vanished room is 404, a malformed request 400, and every
//! rule violation (full room, wrong turn, taken cell, finished
//! game) 409.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use oxo_protocol::{ErrorResponse, MoveRejectedResponse};
use oxo_registry::RegistryError;

fn status_for(error: &RegistryError) -> StatusCode {
    match error {
        RegistryError::NotFound => StatusCode::NOT_FOUND,
        RegistryError::OutOfRange(_) => StatusCode::BAD_REQUEST,
        RegistryError::RoomFull
        | RegistryError::AlreadyFinished
        | RegistryError::WaitingForOpponent
        | RegistryError::CellTaken
        | RegistryError::NotYourTurn => StatusCode::CONFLICT,
    }
}

/// Failure of any endpoint except `make_move`.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ApiError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The request body did not parse as the expected JSON.
    #[error("{}", .0.body_text())]
    Payload(#[from] JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Registry(e) => status_for(e),
            ApiError::Payload(_) => StatusCode::BAD_REQUEST,
        };
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

/// Failure of `make_move`, carrying the `ok: false` marker.
#[derive(Debug, thiserror::Error)]
pub(crate) enum MoveError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("{}", .0.body_text())]
    Payload(#[from] JsonRejection),
}

impl IntoResponse for MoveError {
    fn into_response(self) -> Response {
        let status = match &self {
            MoveError::Registry(e) => status_for(e),
            MoveError::Payload(_) => StatusCode::BAD_REQUEST,
        };
        (status, Json(MoveRejectedResponse::new(self.to_string())))
            .into_response()
    }
}
