//! End-to-end registry tests: whole-match flows and concurrent access
//! through the public API only.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use oxo_protocol::{GameStatus, Mark, Outcome, RoomCode};
use oxo_registry::{RegistryConfig, RegistryError, RoomRegistry};

#[test]
fn test_full_match_create_join_win() {
    let reg = RoomRegistry::new();
    let created = reg.create(false);
    let code = &created.room_id;

    assert_eq!(created.status, GameStatus::Waiting);
    assert_eq!(
        reg.play(code, Mark::X, 0),
        Err(RegistryError::WaitingForOpponent)
    );

    let joined = reg.join(code).expect("join open room");
    assert_eq!(joined.you_are, Mark::O);
    assert_eq!(joined.status, GameStatus::InProgress);
    assert_eq!(reg.join(code), Err(RegistryError::RoomFull));

    // X takes the top row.
    reg.play(code, Mark::X, 0).unwrap();
    reg.play(code, Mark::O, 3).unwrap();
    reg.play(code, Mark::X, 1).unwrap();
    reg.play(code, Mark::O, 4).unwrap();
    let snap = reg.play(code, Mark::X, 2).unwrap();

    assert_eq!(snap.status, GameStatus::Finished);
    assert_eq!(snap.winner, Some(Outcome::X));
    assert_eq!(snap.last_move_by, Some(Mark::X));
    assert_eq!(
        reg.play(code, Mark::O, 5),
        Err(RegistryError::AlreadyFinished)
    );
}

#[test]
fn test_rematch_after_finish() {
    let reg = RoomRegistry::new();
    let created = reg.create(false);
    let code = &created.room_id;
    reg.join(code).unwrap();

    reg.play(code, Mark::X, 0).unwrap();
    reg.play(code, Mark::O, 3).unwrap();
    reg.play(code, Mark::X, 1).unwrap();
    reg.play(code, Mark::O, 4).unwrap();
    reg.play(code, Mark::X, 2).unwrap();

    // Winner starts the rematch.
    let snap = reg.reset(code, Some(Mark::X)).expect("reset finished room");
    assert_eq!(snap.board.occupied(), 0);
    assert_eq!(snap.status, GameStatus::InProgress);
    assert_eq!(snap.current_turn, Mark::X);
    assert_eq!(snap.winner, None);

    // Play continues normally after the reset.
    let snap = reg.play(code, Mark::X, 4).unwrap();
    assert_eq!(snap.current_turn, Mark::O);
}

#[test]
fn test_reset_accepts_lowercase_code() {
    let reg = RoomRegistry::new();
    let created = reg.create(false);
    let lower = RoomCode::new(created.room_id.as_str().to_lowercase());

    let snap = reg.reset(&lower, None).expect("reset via lowercase code");
    assert_eq!(snap.room_id, created.room_id);

    // The same leniency does not extend to the other operations.
    assert_eq!(reg.join(&lower), Err(RegistryError::NotFound));
    assert_eq!(reg.snapshot(&lower), Err(RegistryError::NotFound));
}

#[test]
fn test_closed_room_is_gone() {
    let reg = RoomRegistry::new();
    let created = reg.create(false);
    let code = &created.room_id;
    reg.join(code).unwrap();

    reg.close(code).expect("close live room");
    assert_eq!(reg.snapshot(code), Err(RegistryError::NotFound));
    assert_eq!(reg.play(code, Mark::X, 0), Err(RegistryError::NotFound));
    assert_eq!(reg.room_count(), 0);
}

#[test]
fn test_expiry_applies_to_every_operation() {
    let reg = RoomRegistry::with_config(RegistryConfig {
        room_ttl: Duration::ZERO,
        ..RegistryConfig::default()
    });
    let a = reg.create(false);
    assert_eq!(reg.join(&a.room_id), Err(RegistryError::NotFound));

    let b = reg.create(false);
    assert_eq!(
        reg.play(&b.room_id, Mark::X, 0),
        Err(RegistryError::NotFound)
    );

    let c = reg.create(false);
    assert_eq!(reg.reset(&c.room_id, None), Err(RegistryError::NotFound));
}

#[test]
fn test_bot_match_can_end_in_a_bot_win() {
    let reg = RoomRegistry::new();
    let created = reg.create(true);
    let code = &created.room_id;

    // X 0, bot takes center. X 3, bot blocks the left column at 6.
    reg.play(code, Mark::X, 0).unwrap();
    reg.play(code, Mark::X, 3).unwrap();
    // X 8 creates no threat; the bot now holds 4 and 6 and completes
    // the anti-diagonal at 2.
    let snap = reg.play(code, Mark::X, 8).unwrap();

    assert_eq!(snap.status, GameStatus::Finished);
    assert_eq!(snap.winner, Some(Outcome::O));
    assert_eq!(snap.last_move_by, Some(Mark::O));
    assert_eq!(
        reg.play(code, Mark::X, 5),
        Err(RegistryError::AlreadyFinished)
    );
}

// =========================================================================
// Concurrency
// =========================================================================

#[test]
fn test_concurrent_creates_yield_unique_codes() {
    let reg = Arc::new(RoomRegistry::new());
    let threads = 8;
    let per_thread = 25;

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let reg = Arc::clone(&reg);
            thread::spawn(move || {
                (0..per_thread)
                    .map(|_| reg.create(false).room_id)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut codes = HashSet::new();
    for handle in handles {
        for code in handle.join().expect("creator thread") {
            assert!(codes.insert(code), "duplicate room code handed out");
        }
    }
    assert_eq!(codes.len(), threads * per_thread);
    assert_eq!(reg.room_count(), threads * per_thread);
}

#[test]
fn test_racing_moves_admit_exactly_one_winner() {
    // Both players race for the same cell, repeatedly. Whatever the
    // interleaving, exactly one move lands and the loser sees a clean
    // rejection with the board intact.
    for _ in 0..50 {
        let reg = Arc::new(RoomRegistry::new());
        let created = reg.create(false);
        let code = created.room_id.clone();
        reg.join(&code).unwrap();

        let contenders = [Mark::X, Mark::O].map(|mark| {
            let reg = Arc::clone(&reg);
            let code = code.clone();
            thread::spawn(move || reg.play(&code, mark, 4))
        });
        let results = contenders.map(|h| h.join().expect("mover thread"));

        let oks = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(oks, 1, "exactly one racing move must land");
        for r in &results {
            if let Err(e) = r {
                assert!(
                    matches!(
                        e,
                        RegistryError::CellTaken | RegistryError::NotYourTurn
                    ),
                    "unexpected rejection: {e}"
                );
            }
        }
        let snap = reg.snapshot(&code).unwrap();
        assert_eq!(snap.board.occupied(), 1);
        assert_eq!(snap.board.cell(4), Some(Mark::X));
    }
}
