//! Core game vocabulary: marks, board, statuses, outcomes, room codes.

use serde::{Deserialize, Serialize};

use std::fmt;

/// Number of cells on the board. The board is a flat sequence indexed
/// 0..9, row-major: 0-2 top row, 3-5 middle, 6-8 bottom.
pub const BOARD_CELLS: usize = 9;

// ---------------------------------------------------------------------------
// Mark
// ---------------------------------------------------------------------------

/// One of the two player symbols.
///
/// Serializes as the bare string `"X"` or `"O"` — the same literal the
/// browser client places in its board array and sends back as `player`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The opposing mark.
    pub fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

// ---------------------------------------------------------------------------
// GameStatus
// ---------------------------------------------------------------------------

/// Lifecycle state of a room.
///
/// Transitions move forward only — `waiting → in_progress → finished` —
/// with one exception: a reset returns the room directly to `in_progress`
/// (never back to `waiting`; slot occupancy survives a reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Only X is present; the room is joinable.
    Waiting,
    /// Both slots occupied, no result yet.
    InProgress,
    /// Terminal — a winner or draw has been determined.
    Finished,
}

impl GameStatus {
    /// Returns `true` once the room has reached its terminal state.
    pub fn is_finished(self) -> bool {
        matches!(self, GameStatus::Finished)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Waiting => write!(f, "waiting"),
            GameStatus::InProgress => write!(f, "in_progress"),
            GameStatus::Finished => write!(f, "finished"),
        }
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// The result of a finished game: a winning mark, or a draw.
///
/// On the wire this is `"X"`, `"O"`, or `"draw"` — matching the client's
/// `checkWinner()` return values. A room's `winner` field is `null` until
/// the game is finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    X,
    O,
    #[serde(rename = "draw")]
    Draw,
}

impl Outcome {
    /// The winning mark, or `None` for a draw.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::X => Some(Mark::X),
            Outcome::O => Some(Mark::O),
            Outcome::Draw => None,
        }
    }
}

impl From<Mark> for Outcome {
    fn from(mark: Mark) -> Outcome {
        match mark {
            Mark::X => Outcome::X,
            Mark::O => Outcome::O,
        }
    }
}

// ---------------------------------------------------------------------------
// RoomCode
// ---------------------------------------------------------------------------

/// A room's external handle: a short generated code like `"AB3X9K"`.
///
/// Codes are uppercase alphanumeric and case-sensitive on lookup. The
/// newtype keeps them from being confused with other strings and gives
/// lookup maps a dedicated key type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomCode(String);

impl RoomCode {
    pub fn new(code: impl Into<String>) -> RoomCode {
        RoomCode(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The code with ASCII letters uppercased. Used by the reset
    /// operation, which normalizes its incoming id before lookup.
    pub fn to_uppercase(&self) -> RoomCode {
        RoomCode(self.0.to_ascii_uppercase())
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// The 9-cell board. Each cell is empty or holds a [`Mark`].
///
/// Serializes as a 9-element array of `"X"` / `"O"` / `null`, which is
/// exactly the array the browser client keeps locally.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Board([Option<Mark>; BOARD_CELLS]);

impl Board {
    /// An empty board.
    pub fn empty() -> Board {
        Board::default()
    }

    /// The mark at `index`, or `None` if the cell is empty.
    ///
    /// # Panics
    /// Panics if `index >= 9`. Callers validate the range first (the
    /// registry rejects out-of-range indices before touching the board).
    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.0[index]
    }

    /// Places `mark` at `index`. Occupancy is the caller's invariant:
    /// the registry never places onto an occupied cell.
    pub fn place(&mut self, index: usize, mark: Mark) {
        self.0[index] = Some(mark);
    }

    /// Clears every cell (reset).
    pub fn clear(&mut self) {
        self.0 = [None; BOARD_CELLS];
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().all(|c| c.is_some())
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.0.iter().filter(|c| c.is_some()).count()
    }

    pub fn cells(&self) -> &[Option<Mark>; BOARD_CELLS] {
        &self.0
    }
}

impl From<[Option<Mark>; BOARD_CELLS]> for Board {
    fn from(cells: [Option<Mark>; BOARD_CELLS]) -> Board {
        Board(cells)
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! The wire shapes here are contracts with the browser client — it
    //! compares literal strings, so each serialization is pinned exactly.

    use super::*;

    #[test]
    fn test_mark_serializes_as_bare_letter() {
        assert_eq!(serde_json::to_string(&Mark::X).unwrap(), "\"X\"");
        assert_eq!(serde_json::to_string(&Mark::O).unwrap(), "\"O\"");
    }

    #[test]
    fn test_mark_deserializes_from_bare_letter() {
        let m: Mark = serde_json::from_str("\"O\"").unwrap();
        assert_eq!(m, Mark::O);
    }

    #[test]
    fn test_mark_rejects_lowercase() {
        let r: Result<Mark, _> = serde_json::from_str("\"x\"");
        assert!(r.is_err());
    }

    #[test]
    fn test_mark_other_flips() {
        assert_eq!(Mark::X.other(), Mark::O);
        assert_eq!(Mark::O.other(), Mark::X);
    }

    #[test]
    fn test_game_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&GameStatus::Waiting).unwrap(),
            "\"waiting\""
        );
        assert_eq!(
            serde_json::to_string(&GameStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(
            serde_json::to_string(&GameStatus::Finished).unwrap(),
            "\"finished\""
        );
    }

    #[test]
    fn test_game_status_is_finished() {
        assert!(!GameStatus::Waiting.is_finished());
        assert!(!GameStatus::InProgress.is_finished());
        assert!(GameStatus::Finished.is_finished());
    }

    #[test]
    fn test_outcome_wire_values() {
        assert_eq!(serde_json::to_string(&Outcome::X).unwrap(), "\"X\"");
        assert_eq!(serde_json::to_string(&Outcome::O).unwrap(), "\"O\"");
        assert_eq!(
            serde_json::to_string(&Outcome::Draw).unwrap(),
            "\"draw\""
        );
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::X.winner(), Some(Mark::X));
        assert_eq!(Outcome::Draw.winner(), None);
    }

    #[test]
    fn test_room_code_serializes_transparent() {
        let code = RoomCode::new("AB3X9K");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"AB3X9K\"");
    }

    #[test]
    fn test_room_code_uppercase_normalization() {
        let code = RoomCode::new("ab3x9k");
        assert_eq!(code.to_uppercase(), RoomCode::new("AB3X9K"));
    }

    #[test]
    fn test_board_serializes_as_nullable_array() {
        let mut board = Board::empty();
        board.place(0, Mark::X);
        board.place(4, Mark::O);
        let json = serde_json::to_value(board).unwrap();
        assert_eq!(
            json,
            serde_json::json!(["X", null, null, null, "O", null, null, null, null])
        );
    }

    #[test]
    fn test_board_deserializes_from_client_array() {
        let board: Board = serde_json::from_str(
            r#"["X",null,null,null,"O",null,null,null,null]"#,
        )
        .unwrap();
        assert_eq!(board.cell(0), Some(Mark::X));
        assert_eq!(board.cell(4), Some(Mark::O));
        assert_eq!(board.occupied(), 2);
    }

    #[test]
    fn test_board_rejects_wrong_length() {
        let r: Result<Board, _> = serde_json::from_str(r#"["X",null]"#);
        assert!(r.is_err());
    }

    #[test]
    fn test_board_full_and_clear() {
        let mut board = Board::empty();
        for i in 0..BOARD_CELLS {
            board.place(i, if i % 2 == 0 { Mark::X } else { Mark::O });
        }
        assert!(board.is_full());
        board.clear();
        assert_eq!(board.occupied(), 0);
        assert!(!board.is_full());
    }
}
