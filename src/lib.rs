//! # memoarr
//!
//! Memoarr, a memory game for 2 to 4 players.
//!
//! Twenty-four animal cards lie face down on a 5x5 grid with an empty
//! center. Each round every player memorizes the three cards on their side
//! of the board, then players take turns revealing cards. A revealed card
//! must share its animal or its background with the previous one, or the
//! player who turned it is out for the round. The last player standing
//! takes a rubis token. After seven rounds the most rubis wins.
//!
//! ## Variants
//!
//! - **Base**: the rules above, drawn as a full grid
//! - **Expert display**: only revealed cards are drawn
//! - **Expert rules**: each animal triggers an effect when revealed
//!   (swap, hide, block, play again, skip next player)
//!
//! ## Modules
//!
//! - `core`: Positions, players, game state, RNG, configuration, errors
//! - `cards`: Cards, the card deck and the rubis pool
//! - `board`: The 5x5 grid and face-up tracking
//! - `rules`: Match validity, turn order, round and game end, scoring
//! - `effects`: Expert animal effects and the input they need
//! - `render`: Text snapshots of the board and players
//! - `play`: The round driver

pub mod board;
pub mod cards;
pub mod core;
pub mod effects;
pub mod play;
pub mod render;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameRng, GameState, Player, PlayerId, Position, Result,
    RevealRecord, Side, Variant,
};

pub use crate::board::Board;

pub use crate::cards::{Animal, Background, Card, CardDeck, Rubis, RubisDeck};

pub use crate::rules::{GameResult, Rules, ROUNDS_PER_GAME};

pub use crate::effects::{Ability, EffectResolver, ExpertEffect, PositionSource, Prompt};

pub use crate::render::{RenderMode, Renderer};

pub use crate::play::{Match, RoundSummary, ScriptedInput, Transcript};
