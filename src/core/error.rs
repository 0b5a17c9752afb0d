//! Error type shared by the board, the game session and the rules engine.

use super::player::Side;
use super::position::Position;

/// Everything that can go wrong while setting up or playing a game.
///
/// `OutOfRange` is the only error a caller is expected to recover from
/// during play (by asking for another position). The deck and player
/// errors indicate a broken setup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("position {0} is not a playable cell")]
    OutOfRange(Position),

    #[error("deck exhausted after dealing {dealt} of {needed} cards")]
    DeckExhausted { needed: usize, dealt: usize },

    #[error("no players")]
    NoPlayers,

    #[error("no active players")]
    NoActivePlayers,

    #[error("a player is already seated on the {0} side")]
    DuplicateSide(Side),

    #[error("at most {max} players can be seated")]
    TooManyPlayers { max: usize },

    #[error("a game needs 2 to 4 players, got {0}")]
    InvalidPlayerCount(usize),

    #[error("input closed")]
    InputClosed,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;
