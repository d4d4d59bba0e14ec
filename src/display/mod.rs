//! The display seam: how the controller talks to a UI.
//!
//! The controller knows nothing about rendering. It emits narrow render
//! requests through this trait and the hosting application draws them
//! however it likes (DOM, terminal, nothing at all).
//!
//! Two implementations ship with the crate: [`NullDisplay`] for headless
//! hosts and [`RecordingDisplay`], which keeps an event log that tests
//! assert against.

use crate::board::Board;
use crate::core::{PlayerId, Scoreboard};

/// Render requests emitted by the game controller.
///
/// All methods are fire-and-forget; the controller never reads anything
/// back from the display.
pub trait Display {
    /// Full board redraw.
    fn render_board(&mut self, board: &Board);

    /// Single-card visual update (face-up or face-down).
    fn render_card(&mut self, index: usize, revealed: bool);

    /// Countdown update.
    fn render_timer(&mut self, seconds_remaining: u32);

    /// The current player and their score.
    fn render_current_player_score(&mut self, player: PlayerId, score: u32);

    /// All players' scores.
    fn render_scoreboard(&mut self, scores: &Scoreboard);

    /// End-of-round notification.
    fn announce_winner(&mut self, player: PlayerId, score: u32);
}

/// A display that draws nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullDisplay;

impl Display for NullDisplay {
    fn render_board(&mut self, _board: &Board) {}
    fn render_card(&mut self, _index: usize, _revealed: bool) {}
    fn render_timer(&mut self, _seconds_remaining: u32) {}
    fn render_current_player_score(&mut self, _player: PlayerId, _score: u32) {}
    fn render_scoreboard(&mut self, _scores: &Scoreboard) {}
    fn announce_winner(&mut self, _player: PlayerId, _score: u32) {}
}

/// One recorded render request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayEvent {
    /// Full board redraw with the number of cards shown.
    Board { total_cards: usize },
    /// Single-card update.
    Card { index: usize, revealed: bool },
    /// Countdown update.
    Timer { seconds_remaining: u32 },
    /// Current player and score.
    CurrentPlayerScore { player: PlayerId, score: u32 },
    /// Scoreboard redraw with all scores in player order.
    Scoreboard { scores: Vec<u32> },
    /// Winner announcement.
    Winner { player: PlayerId, score: u32 },
}

/// A display that records every render request.
///
/// Tests drive the controller and then inspect `events()`.
#[derive(Clone, Debug, Default)]
pub struct RecordingDisplay {
    events: Vec<DisplayEvent>,
}

impl RecordingDisplay {
    /// Create an empty recording display.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything rendered so far, in order.
    #[must_use]
    pub fn events(&self) -> &[DisplayEvent] {
        &self.events
    }

    /// Forget recorded events (e.g. after asserting on setup renders).
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// The winner announcement, if one was rendered.
    #[must_use]
    pub fn announced_winner(&self) -> Option<(PlayerId, u32)> {
        self.events.iter().rev().find_map(|event| match event {
            DisplayEvent::Winner { player, score } => Some((*player, *score)),
            _ => None,
        })
    }
}

impl Display for RecordingDisplay {
    fn render_board(&mut self, board: &Board) {
        self.events.push(DisplayEvent::Board {
            total_cards: board.len(),
        });
    }

    fn render_card(&mut self, index: usize, revealed: bool) {
        self.events.push(DisplayEvent::Card { index, revealed });
    }

    fn render_timer(&mut self, seconds_remaining: u32) {
        self.events.push(DisplayEvent::Timer { seconds_remaining });
    }

    fn render_current_player_score(&mut self, player: PlayerId, score: u32) {
        self.events
            .push(DisplayEvent::CurrentPlayerScore { player, score });
    }

    fn render_scoreboard(&mut self, scores: &Scoreboard) {
        self.events.push(DisplayEvent::Scoreboard {
            scores: scores.iter().map(|(_, points)| points).collect(),
        });
    }

    fn announce_winner(&mut self, player: PlayerId, score: u32) {
        self.events.push(DisplayEvent::Winner { player, score });
    }
}
