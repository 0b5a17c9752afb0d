//! Reveal records: who turned which card, and when.
//!
//! Match validity only ever looks at the last two cards revealed. The full
//! sequence is kept separately for:
//! - Replay/debugging
//! - End-of-round summaries

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::position::Position;
use crate::cards::Card;

/// A card turned face up during play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealRecord {
    /// The player who revealed the card.
    pub player: PlayerId,

    /// Round number when the card was revealed.
    pub round: u32,

    /// Where the card was.
    pub position: Position,

    /// The card itself.
    pub card: Card,
}

impl RevealRecord {
    /// Create a new reveal record.
    #[must_use]
    pub fn new(player: PlayerId, round: u32, position: Position, card: Card) -> Self {
        Self {
            player,
            round,
            position,
            card,
        }
    }
}
