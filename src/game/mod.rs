//! The game controller and round lifecycle types.

pub mod controller;
pub mod round;

pub use controller::GameController;
pub use round::{EndReason, RoundEnd, RoundId, RoundPhase};
