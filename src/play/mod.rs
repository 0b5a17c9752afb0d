//! Playing a game.
//!
//! - `Match`: Runs rounds and turns against injected input and output
//! - `RoundSummary`: Who won a round and what they received
//! - `ScriptedInput`, `Transcript`: In-memory input and output, for tests
//!   and replays of a fixed sequence of moves

mod round;
mod script;

pub use round::{Match, RoundSummary};
pub use script::{ScriptedInput, Transcript};
