//! Player identification, turn rotation, and scoring.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players.
//!
//! ## Scoreboard
//!
//! Dense per-player points backed by `Vec` for O(1) access.
//! Winner resolution lives here: strictly-highest score, ties broken
//! by the lowest player index.

use serde::{Deserialize, Serialize};

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
/// Human-facing formatting is 1-based (`"Player 1"` for `PlayerId(0)`),
/// matching how scoreboards present players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The next player in cyclic turn order.
    ///
    /// With a single player this is the identity: `next == self`.
    ///
    /// ```
    /// use memory_match::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    /// assert_eq!(PlayerId::new(0).next(1), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 as u32 + 1)
    }
}

/// Per-player accumulated points with O(1) access.
///
/// One entry per player, all starting at zero. Points only ever
/// increase, via [`Scoreboard::award`].
///
/// ## Example
///
/// ```
/// use memory_match::core::{PlayerId, Scoreboard};
///
/// let mut scores = Scoreboard::new(2);
/// scores.award(PlayerId::new(1), 10);
///
/// assert_eq!(scores.get(PlayerId::new(0)), 0);
/// assert_eq!(scores.get(PlayerId::new(1)), 10);
/// assert_eq!(scores.leader(), (PlayerId::new(1), 10));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    points: Vec<u32>,
}

impl Scoreboard {
    /// Create a scoreboard with all players at zero points.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            points: vec![0; player_count],
        }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.points.len()
    }

    /// Get a player's points.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> u32 {
        self.points[player.index()]
    }

    /// Add points to a player's total.
    pub fn award(&mut self, player: PlayerId, points: u32) {
        self.points[player.index()] += points;
    }

    /// The player with the highest score and that score.
    ///
    /// Ties are broken by the lowest player index: only a strictly
    /// higher score displaces the current leader.
    #[must_use]
    pub fn leader(&self) -> (PlayerId, u32) {
        let mut best = (PlayerId::new(0), self.points[0]);
        for (player, score) in self.iter().skip(1) {
            if score > best.1 {
                best = (player, score);
            }
        }
        best
    }

    /// Iterate over (PlayerId, points) pairs in player order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, u32)> + '_ {
        self.points
            .iter()
            .enumerate()
            .map(|(i, &p)| (PlayerId(i as u8), p))
    }
}
