//! Room lifecycle management for oxo.
//!
//! The registry is the single owner of every live room. All mutation —
//! create, join, move, reset, close — goes through [`RoomRegistry`],
//! which holds the room table behind one lock so each operation is
//! atomic as a unit. Expired rooms are swept opportunistically at the
//! head of every operation, under the same lock.
//!
//! # Key types
//!
//! - [`RoomRegistry`] — creates, looks up, mutates, and expires rooms
//! - [`RegistryConfig`] — code length, expiry TTL
//! - [`RegistryError`] — every client-correctable failure
//! - [`Opponent`] — who holds the O slot (a second human, or the bot)

mod config;
mod error;
mod registry;
mod room;

pub use config::RegistryConfig;
pub use error::RegistryError;
pub use registry::{CreatedRoom, JoinedRoom, RoomRegistry};
pub use room::Opponent;
