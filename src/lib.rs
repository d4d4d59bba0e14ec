//! # memory-match
//!
//! A concentration (memory-matching) card game engine.
//!
//! Players flip pairs of cards on a shuffled board; matches award 10
//! points and keep the turn, mismatches flip back and rotate the turn,
//! and a 60-second countdown ends the round if the board isn't cleared
//! first. The winner is the player with the highest score.
//!
//! ## Design Principles
//!
//! 1. **Engine, not UI**: rendering lives behind the [`display::Display`]
//!    trait; the controller never touches input devices or pixels.
//!
//! 2. **Explicit time**: the countdown tick and the 1-second match
//!    resolution delay are scheduled tasks behind the
//!    [`scheduler::Scheduler`] trait, cancelable and guarded against
//!    stale rounds. No hidden timers.
//!
//! 3. **Deterministic**: boards are dealt from a seeded ChaCha8 RNG
//!    with a uniform Fisher-Yates shuffle. Same seed and commands,
//!    same game.
//!
//! ## Modules
//!
//! - `core`: player IDs, scoring, RNG, configuration
//! - `board`: cards, pair generation, dealing
//! - `scheduler`: cooperative task scheduling
//! - `display`: the render seam and reference implementations
//! - `game`: the controller state machine and round lifecycle
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use memory_match::core::GameConfig;
//! use memory_match::display::RecordingDisplay;
//! use memory_match::game::{GameController, RoundPhase};
//! use memory_match::scheduler::ManualScheduler;
//!
//! let mut game = GameController::new(ManualScheduler::new(), RecordingDisplay::new(), 42);
//! game.start_game(GameConfig::new(4, 2));
//! assert_eq!(game.phase(), RoundPhase::Active);
//!
//! game.select_card(0);
//! game.select_card(1);
//! game.advance(Duration::from_secs(1)); // resolution delay elapses
//! assert_eq!(game.phase(), RoundPhase::Active);
//! ```

pub mod board;
pub mod core;
pub mod display;
pub mod game;
pub mod scheduler;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng, GameRngState, PlayerId, Scoreboard, DEFAULT_ROUND_SECONDS,
    POINTS_PER_MATCH, RESOLVE_DELAY, TICK_INTERVAL,
};

pub use crate::board::{Board, Card, SymbolId};

pub use crate::display::{Display, DisplayEvent, NullDisplay, RecordingDisplay};

pub use crate::scheduler::{ManualScheduler, Scheduler, Task, TaskHandle};

pub use crate::game::{EndReason, GameController, RoundEnd, RoundId, RoundPhase};
