//! Shuffled supplies: the card deck and the rubis pool.
//!
//! Both are a `Deck<T>`: a list of items dealt from the front, one at a
//! time, until exhausted. Decks are built from an explicit `GameRng` so a
//! seed reproduces the same deal, and tests can build fixed-order decks.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::definition::Card;
use crate::core::GameRng;

/// A reward token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rubis(u8);

impl Rubis {
    /// Values of the tokens in a full pool.
    pub const POOL: [u8; 7] = [1, 1, 1, 2, 2, 3, 4];

    pub(crate) const fn new(value: u8) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rubis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rubis", self.0)
    }
}

/// Items dealt in order until none are left.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deck<T> {
    items: Vec<T>,
    next: usize,
}

impl<T: Copy> Deck<T> {
    /// Deck dealing `items` in the given order.
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().collect(),
            next: 0,
        }
    }

    /// Shuffle the whole deck and start dealing from the top again.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.items);
        self.next = 0;
    }

    /// Deal the next item, or `None` once the deck is exhausted.
    pub fn draw(&mut self) -> Option<T> {
        let item = self.items.get(self.next).copied()?;
        self.next += 1;
        Some(item)
    }

    /// Items left to deal.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.items.len() - self.next
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}

/// The 25 face cards.
pub type CardDeck = Deck<Card>;

/// The 7 reward tokens.
pub type RubisDeck = Deck<Rubis>;

impl Deck<Card> {
    /// Full catalog in random order.
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::from_items(Card::catalog());
        deck.shuffle(rng);
        deck
    }
}

impl Deck<Rubis> {
    /// Full rubis pool in random order.
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::from_items(Rubis::POOL.map(Rubis::new));
        deck.shuffle(rng);
        deck
    }
}
