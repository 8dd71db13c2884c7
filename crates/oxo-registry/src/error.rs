//! Error types for the registry.
//!
//! Every variant is client-correctable; none is fatal to the process,
//! and a failed operation never leaves a room half-updated. The display
//! strings travel to clients verbatim — the browser client matches
//! `"Room not found"` literally to detect a vanished room, so the
//! messages are part of the wire contract.

/// Errors that can occur during room operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No live room has this code (unknown, expired, or closed).
    #[error("Room not found")]
    NotFound,

    /// Both player slots are already occupied.
    #[error("Room is full")]
    RoomFull,

    /// The room is in its terminal state; no further joins or moves.
    #[error("Game already finished")]
    AlreadyFinished,

    /// A move arrived before the second player joined.
    #[error("Waiting for opponent")]
    WaitingForOpponent,

    /// The target cell already holds a mark.
    #[error("Cell already taken")]
    CellTaken,

    /// The mover is not the mark whose turn it is.
    #[error("Not your turn")]
    NotYourTurn,

    /// The move index is outside the board (valid range 0-8).
    #[error("Move index out of range")]
    OutOfRange(usize),
}
