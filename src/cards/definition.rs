//! Card definitions: the 25 animal/background pairs.
//!
//! A `Card` is a plain value. Two cards are the same card exactly when
//! they share both animal and background, and the catalog holds each
//! combination once, so the pair doubles as the card's identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Animal printed in the middle of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Animal {
    Crab,
    Penguin,
    Octopus,
    Turtle,
    Walrus,
}

impl Animal {
    pub const ALL: [Animal; 5] = [
        Animal::Crab,
        Animal::Penguin,
        Animal::Octopus,
        Animal::Turtle,
        Animal::Walrus,
    ];

    /// Character drawn in the center of the card.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Animal::Crab => 'C',
            Animal::Penguin => 'P',
            Animal::Octopus => 'O',
            Animal::Turtle => 'T',
            Animal::Walrus => 'W',
        }
    }
}

/// Background colour of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Background {
    Red,
    Green,
    Purple,
    Blue,
    Yellow,
}

impl Background {
    pub const ALL: [Background; 5] = [
        Background::Red,
        Background::Green,
        Background::Purple,
        Background::Blue,
        Background::Yellow,
    ];

    /// Character filling the card around the animal.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Background::Red => 'R',
            Background::Green => 'G',
            Background::Purple => 'P',
            Background::Blue => 'B',
            Background::Yellow => 'Y',
        }
    }
}

/// A face card.
///
/// ## Example
///
/// ```
/// use memoarr::cards::{Animal, Background, Card};
///
/// let card = Card::new(Animal::Walrus, Background::Yellow);
/// assert_eq!(card.pattern_row(0), Some(['Y', 'Y', 'Y']));
/// assert_eq!(card.pattern_row(1), Some(['Y', 'W', 'Y']));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    animal: Animal,
    background: Background,
}

impl Card {
    /// Number of text rows in a card's pattern.
    pub const ROWS: usize = 3;

    /// Create a card.
    #[must_use]
    pub const fn new(animal: Animal, background: Background) -> Self {
        Self { animal, background }
    }

    /// Every card of the catalog, animals major.
    pub fn catalog() -> impl Iterator<Item = Card> {
        Animal::ALL.into_iter().flat_map(|animal| {
            Background::ALL
                .into_iter()
                .map(move |background| Card::new(animal, background))
        })
    }

    #[must_use]
    pub const fn animal(&self) -> Animal {
        self.animal
    }

    #[must_use]
    pub const fn background(&self) -> Background {
        self.background
    }

    /// Do the two cards share an animal or a background?
    #[must_use]
    pub fn matches(&self, other: &Card) -> bool {
        self.animal == other.animal || self.background == other.background
    }

    /// One row of the 3x3 face pattern.
    ///
    /// Returns `None` for rows past the bottom of the card.
    #[must_use]
    pub fn pattern_row(&self, row: usize) -> Option<[char; 3]> {
        let fill = self.background.glyph();
        match row {
            0 | 2 => Some([fill; 3]),
            1 => Some([fill, self.animal.glyph(), fill]),
            _ => None,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}/{:?}", self.animal, self.background)
    }
}
