//! Round lifecycle vocabulary: identity, phases, and outcomes.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Identity of one round, strictly increasing across `start_game` calls.
///
/// Scheduled tasks carry the round they were created for; a task whose
/// round no longer matches is stale and must be ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundId(pub u32);

impl RoundId {
    /// Create a new round ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Where the controller is in the per-round state machine.
///
/// `Idle -> Active -> Resolving -> Active | Ended`. `Ended` is terminal
/// for the round; only a new `start_game` leaves it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No round has been started yet.
    Idle,
    /// Accepting card selections.
    Active,
    /// Two cards are face-up awaiting the resolution delay; further
    /// selections are rejected.
    Resolving,
    /// Round over: all pairs matched or time expired.
    Ended,
}

/// Why a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Every pair on the board was matched.
    AllPairsMatched,
    /// The countdown reached zero with pairs still unmatched.
    TimeExpired,
}

/// The reported outcome of a finished round.
///
/// The winner is the player with the strictly highest score; ties go to
/// the lowest player index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundEnd {
    /// The winning player.
    pub winner: PlayerId,
    /// The winner's final score.
    pub score: u32,
    /// What terminated the round.
    pub reason: EndReason,
}

impl RoundEnd {
    /// Check if a player won this round.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}
