//! The room table: creation, lookup, expiry, and routing of mutations.

use std::collections::HashMap;

use oxo_engine::choose_move;
use oxo_protocol::{GameStatus, Mark, RoomCode, RoomSnapshot, BOARD_CELLS};
use parking_lot::Mutex;
use rand::Rng;

use crate::room::{Opponent, Room};
use crate::{RegistryConfig, RegistryError};

/// Alphabet for generated room codes: uppercase alphanumeric.
const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Collision retries at one code length before growing the code.
const CODE_ATTEMPTS_PER_LENGTH: usize = 26;

/// What `create` hands back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedRoom {
    pub room_id: RoomCode,
    /// The creator's assigned mark — always X.
    pub you_are: Mark,
    pub status: GameStatus,
}

/// What `join` hands back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedRoom {
    pub room_id: RoomCode,
    /// The joiner's assigned mark — always O.
    pub you_are: Mark,
    pub status: GameStatus,
}

/// Owns every live room and serializes all access to them.
///
/// One lock guards the whole table; every operation — the expiry sweep
/// included — runs start to finish under it, so the read-modify-write
/// inside `play` (cell check, turn check, write, verdict) is atomic and
/// the uniqueness check in `create` cannot race an insertion. Nothing
/// awaits or does I/O while the lock is held.
pub struct RoomRegistry {
    rooms: Mutex<HashMap<RoomCode, Room>>,
    config: RegistryConfig,
}

impl RoomRegistry {
    /// A registry with production defaults (6-char codes, 6-hour TTL).
    pub fn new() -> RoomRegistry {
        RoomRegistry::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> RoomRegistry {
        RoomRegistry {
            rooms: Mutex::new(HashMap::new()),
            config,
        }
    }

    /// Creates a room and assigns the caller the X slot.
    ///
    /// Never fails: code collisions are retried under the lock, and
    /// after [`CODE_ATTEMPTS_PER_LENGTH`] collisions the code grows a
    /// character rather than giving up.
    pub fn create(&self, vs_computer: bool) -> CreatedRoom {
        let mut rooms = self.rooms.lock();
        self.sweep(&mut rooms);

        let code = Self::allocate_code(&rooms, self.config.code_length);
        let room = if vs_computer {
            Room::new_vs_computer(code.clone())
        } else {
            Room::new(code.clone())
        };
        let created = CreatedRoom {
            room_id: code.clone(),
            you_are: Mark::X,
            status: room.status(),
        };
        rooms.insert(code.clone(), room);

        tracing::info!(room = %code, vs_computer, "room created");
        created
    }

    /// Occupies the O slot of an existing room.
    pub fn join(&self, code: &RoomCode) -> Result<JoinedRoom, RegistryError> {
        let mut rooms = self.rooms.lock();
        self.sweep(&mut rooms);

        let room = rooms.get_mut(code).ok_or(RegistryError::NotFound)?;
        room.join()?;

        tracing::info!(room = %code, "player joined as O");
        Ok(JoinedRoom {
            room_id: code.clone(),
            you_are: Mark::O,
            status: room.status(),
        })
    }

    /// Read-only view of a room.
    pub fn snapshot(
        &self,
        code: &RoomCode,
    ) -> Result<RoomSnapshot, RegistryError> {
        let mut rooms = self.rooms.lock();
        self.sweep(&mut rooms);

        let room = rooms.get(code).ok_or(RegistryError::NotFound)?;
        Ok(room.snapshot())
    }

    /// Applies one move. In a vs-computer room the bot's reply is played
    /// inside the same lock, so the returned snapshot already contains
    /// it and no caller ever observes the half-played state.
    pub fn play(
        &self,
        code: &RoomCode,
        mark: Mark,
        index: usize,
    ) -> Result<RoomSnapshot, RegistryError> {
        if index >= BOARD_CELLS {
            return Err(RegistryError::OutOfRange(index));
        }

        let mut rooms = self.rooms.lock();
        self.sweep(&mut rooms);

        let room = rooms.get_mut(code).ok_or(RegistryError::NotFound)?;
        room.play(mark, index)?;

        if room.status().is_finished() {
            tracing::info!(
                room = %code,
                winner = ?room.snapshot().winner,
                "game finished"
            );
        } else {
            Self::drive_bot(room);
        }
        Ok(room.snapshot())
    }

    /// Clears a room's board for a rematch.
    ///
    /// The incoming code is uppercased before lookup, an allowance the
    /// other operations do not make. Existence is the only validation:
    /// a waiting or finished room resets just the same.
    pub fn reset(
        &self,
        code: &RoomCode,
        start: Option<Mark>,
    ) -> Result<RoomSnapshot, RegistryError> {
        let code = code.to_uppercase();
        let start = start.unwrap_or(Mark::X);

        let mut rooms = self.rooms.lock();
        self.sweep(&mut rooms);

        let room = rooms.get_mut(&code).ok_or(RegistryError::NotFound)?;
        room.reset(start);
        Self::drive_bot(room);

        tracing::info!(room = %code, start = %start, "room reset");
        Ok(room.snapshot())
    }

    /// Removes a room immediately (a player left the match).
    pub fn close(&self, code: &RoomCode) -> Result<(), RegistryError> {
        let mut rooms = self.rooms.lock();
        self.sweep(&mut rooms);

        rooms.remove(code).ok_or(RegistryError::NotFound)?;
        tracing::info!(room = %code, "room closed");
        Ok(())
    }

    /// Number of live rooms. Mostly for tests and diagnostics.
    pub fn room_count(&self) -> usize {
        let mut rooms = self.rooms.lock();
        self.sweep(&mut rooms);
        rooms.len()
    }

    /// Drops every room older than the TTL. Runs under the table lock
    /// at the head of every operation, so an expired room is gone from
    /// the first operation after it crosses the threshold and a room
    /// mid-mutation can never be swept out from under the mutator.
    fn sweep(&self, rooms: &mut HashMap<RoomCode, Room>) {
        let ttl = self.config.room_ttl;
        rooms.retain(|code, room| {
            let keep = !room.is_expired(ttl);
            if !keep {
                tracing::info!(room = %code, "room expired, swept");
            }
            keep
        });
    }

    /// Picks a code not present in the table. Called with the lock held
    /// so the check and the subsequent insert cannot race.
    fn allocate_code(
        rooms: &HashMap<RoomCode, Room>,
        base_length: usize,
    ) -> RoomCode {
        let mut rng = rand::rng();
        let mut length = base_length;
        loop {
            for _ in 0..CODE_ATTEMPTS_PER_LENGTH {
                let code: String = (0..length)
                    .map(|_| {
                        let i = rng.random_range(0..CODE_ALPHABET.len());
                        CODE_ALPHABET[i] as char
                    })
                    .collect();
                let code = RoomCode::new(code);
                if !rooms.contains_key(&code) {
                    return code;
                }
            }
            // The live-room population has eaten this length's space;
            // practically unreachable with 36^6 codes.
            length += 1;
        }
    }

    /// If it is the bot's turn in a vs-computer room, plays its reply.
    fn drive_bot(room: &mut Room) {
        if room.opponent() != Opponent::Computer {
            return;
        }
        let bot_mark = Mark::O;
        if room.status().is_finished() || room.current_turn() != bot_mark {
            return;
        }
        let Some(index) = choose_move(room.board(), bot_mark) else {
            return;
        };
        if let Err(e) = room.play(bot_mark, index) {
            // choose_move only returns empty cells, so this branch
            // indicates a rules bug; log it rather than poison the room.
            tracing::error!(room = %room.code(), error = %e, "bot move rejected");
        }
    }
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// =========================================================================
// Tests
// =========================================================================
