//! Registry configuration.

use std::time::Duration;

/// Tunables for the room registry.
///
/// The defaults match production behavior; tests shrink `room_ttl` to
/// zero to exercise expiry without sleeping.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Length of generated room codes. Collisions are retried; after
    /// repeated collisions at one length the code grows a character, so
    /// creation never fails.
    pub code_length: usize,

    /// How long a room lives after creation. Rooms older than this are
    /// removed by the sweep that precedes every registry operation.
    pub room_ttl: Duration,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            code_length: 6,
            room_ttl: Duration::from_secs(6 * 60 * 60),
        }
    }
}
