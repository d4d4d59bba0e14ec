//! Game configuration and fixed rule constants.
//!
//! `GameConfig` is read once at `start_game`. Construction asserts the
//! caller contract: an even board of at least 4 cards and at least one
//! player. Out-of-range values are a contract violation, not a
//! recoverable error.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Points awarded to the current player for each matched pair.
pub const POINTS_PER_MATCH: u32 = 10;

/// Round length when the config does not override it.
pub const DEFAULT_ROUND_SECONDS: u32 = 60;

/// Countdown tick interval.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Delay between the second card selection and match resolution.
pub const RESOLVE_DELAY: Duration = Duration::from_millis(1000);

/// Configuration for one round.
///
/// Typical grid sizes are 4, 16, or 36 cards; any even count >= 4 works.
///
/// ## Example
///
/// ```
/// use memory_match::core::GameConfig;
///
/// let config = GameConfig::new(16, 2);
/// assert_eq!(config.pair_count(), 8);
/// assert_eq!(config.round_seconds, 60);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of cards on the board (even, >= 4).
    pub total_cards: usize,

    /// Number of players (>= 1).
    pub player_count: usize,

    /// Countdown length in seconds.
    pub round_seconds: u32,
}

impl GameConfig {
    /// Create a config with the default 60-second round.
    #[must_use]
    pub fn new(total_cards: usize, player_count: usize) -> Self {
        assert!(total_cards >= 4, "Board must have at least 4 cards");
        assert!(total_cards % 2 == 0, "Board size must be even");
        assert!(player_count >= 1, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            total_cards,
            player_count,
            round_seconds: DEFAULT_ROUND_SECONDS,
        }
    }

    /// Override the round length.
    #[must_use]
    pub fn with_round_seconds(mut self, seconds: u32) -> Self {
        self.round_seconds = seconds;
        self
    }

    /// Number of distinct pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.total_cards / 2
    }
}
