//! Core engine types: players, scoring, RNG, configuration.
//!
//! These are the building blocks the rest of the crate composes:
//! the board, scheduler, and controller all sit on top of them.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{
    GameConfig, DEFAULT_ROUND_SECONDS, POINTS_PER_MATCH, RESOLVE_DELAY, TICK_INTERVAL,
};
pub use player::{PlayerId, Scoreboard};
pub use rng::{GameRng, GameRngState};
