//! Rules engine.
//!
//! `Rules` decides:
//! - Whether a reveal matches the previous card
//! - When a round and the game end
//! - Whose turn is next
//! - What a revealed card does under expert rules
//!
//! Turn sequencing itself (asking for input, eliminations, awarding
//! rubis) lives in `play`.

pub mod engine;

pub use engine::{GameResult, Rules, ROUNDS_PER_GAME};
