//! A single room: two player slots, a board, and a turn.
//!
//! `Room` enforces the per-room rules (slot occupancy, turn order, cell
//! occupancy, terminal state). It knows nothing about the table it
//! lives in — uniqueness and expiry are the registry's job.

use std::time::{Duration, Instant};

use oxo_engine::verdict;
use oxo_protocol::{
    Board, GameStatus, Mark, Outcome, RoomCode, RoomSnapshot, BOARD_CELLS,
};

use crate::RegistryError;

/// Who holds the O slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opponent {
    /// A second human, joining by code.
    Human,
    /// The built-in heuristic bot. The slot is occupied from creation
    /// and the room is never joinable.
    Computer,
}

/// One match session. Owned exclusively by the registry; nothing holds
/// a reference across operations.
#[derive(Debug, Clone)]
pub(crate) struct Room {
    code: RoomCode,
    board: Board,
    current_turn: Mark,
    /// X is occupied from creation; this tracks the O slot.
    o_occupied: bool,
    opponent: Opponent,
    status: GameStatus,
    winner: Option<Outcome>,
    last_move_by: Option<Mark>,
    created_at: Instant,
}

impl Room {
    /// A fresh two-player room: X occupied, waiting for O.
    pub(crate) fn new(code: RoomCode) -> Room {
        Room {
            code,
            board: Board::empty(),
            current_turn: Mark::X,
            o_occupied: false,
            opponent: Opponent::Human,
            status: GameStatus::Waiting,
            winner: None,
            last_move_by: None,
            created_at: Instant::now(),
        }
    }

    /// A vs-computer room: the bot occupies O immediately, so the game
    /// starts in progress and the room is never joinable.
    pub(crate) fn new_vs_computer(code: RoomCode) -> Room {
        Room {
            o_occupied: true,
            opponent: Opponent::Computer,
            status: GameStatus::InProgress,
            ..Room::new(code)
        }
    }

    pub(crate) fn code(&self) -> &RoomCode {
        &self.code
    }

    pub(crate) fn status(&self) -> GameStatus {
        self.status
    }

    pub(crate) fn current_turn(&self) -> Mark {
        self.current_turn
    }

    pub(crate) fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn opponent(&self) -> Opponent {
        self.opponent
    }

    pub(crate) fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() >= ttl
    }

    /// Occupies the O slot and starts the game.
    pub(crate) fn join(&mut self) -> Result<(), RegistryError> {
        if self.status.is_finished() {
            return Err(RegistryError::AlreadyFinished);
        }
        if self.o_occupied {
            return Err(RegistryError::RoomFull);
        }
        self.o_occupied = true;
        self.status = GameStatus::InProgress;
        Ok(())
    }

    /// Places `mark` at `index` and advances the game.
    ///
    /// Validation order is fixed: slot occupancy, terminal state, cell
    /// occupancy, turn. All checks precede any write, so a rejected
    /// move leaves the room untouched.
    pub(crate) fn play(
        &mut self,
        mark: Mark,
        index: usize,
    ) -> Result<(), RegistryError> {
        debug_assert!(index < BOARD_CELLS);

        if !self.o_occupied {
            return Err(RegistryError::WaitingForOpponent);
        }
        if self.status.is_finished() {
            return Err(RegistryError::AlreadyFinished);
        }
        if self.board.cell(index).is_some() {
            return Err(RegistryError::CellTaken);
        }
        if mark != self.current_turn {
            return Err(RegistryError::NotYourTurn);
        }

        self.board.place(index, mark);
        self.last_move_by = Some(mark);

        match verdict(&self.board) {
            Some(v) => {
                self.winner = Some(v.outcome);
                self.status = GameStatus::Finished;
            }
            None => {
                self.current_turn = mark.other();
                self.status = GameStatus::InProgress;
            }
        }
        Ok(())
    }

    /// Clears the board for a rematch.
    ///
    /// Accepts any prior status, including `waiting`: reset validates
    /// nothing but existence and always forces `in_progress`. Slot
    /// occupancy is untouched, so a reset waiting room still rejects
    /// moves until someone joins.
    pub(crate) fn reset(&mut self, start: Mark) {
        self.board.clear();
        self.current_turn = start;
        self.status = GameStatus::InProgress;
        self.winner = None;
        self.last_move_by = None;
    }

    pub(crate) fn snapshot(&self) -> RoomSnapshot {
        RoomSnapshot {
            room_id: self.code.clone(),
            board: self.board,
            current_turn: self.current_turn,
            status: self.status,
            winner: self.winner,
            last_move_by: self.last_move_by,
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
