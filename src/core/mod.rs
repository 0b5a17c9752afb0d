//! Core game types: positions, players, state, reveal records, RNG, configuration.
//!
//! Everything here is independent of how a game is driven. The `play`
//! module builds the turn loop on top of `GameState`.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod position;
pub mod rng;
pub mod state;

pub use action::RevealRecord;
pub use config::{GameConfig, Variant, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{GameError, Result};
pub use player::{Player, PlayerId, Side};
pub use position::{Column, ParsePositionError, Position, Row};
pub use rng::GameRng;
pub use state::GameState;
