//! Game configuration.

use std::time::Duration;

use crate::domain::MIN_ALIAS_LEN;

/// Tunable parameters for a game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Normalized inputs shorter than this never resolve.
    pub min_alias_len: usize,

    /// Resetting with more than this many stations found needs confirmation.
    pub confirm_reset_above: usize,

    /// How long the shell shows the success banner (milliseconds).
    pub success_display_ms: u64,
}

impl GameConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(min_alias_len: usize, confirm_reset_above: usize, success_display_ms: u64) -> Self {
        Self {
            min_alias_len,
            confirm_reset_above,
            success_display_ms,
        }
    }

    /// Returns the success banner duration as a Duration.
    pub fn success_display(&self) -> Duration {
        Duration::from_millis(self.success_display_ms)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_alias_len: MIN_ALIAS_LEN,
            confirm_reset_above: 5,
            success_display_ms: 3000,
        }
    }
}
