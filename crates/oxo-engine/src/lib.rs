//! Game rules for oxo: win/draw detection and the heuristic opponent.
//!
//! Everything in this crate is a pure function over a [`Board`] — no
//! clocks, no locks, no I/O. The registry calls [`verdict`] after every
//! placed mark and [`choose_move`] when a room's opponent is the
//! built-in bot.
//!
//! [`Board`]: oxo_protocol::Board

mod bot;
mod rules;

pub use bot::choose_move;
pub use rules::{verdict, Verdict, WIN_LINES};
