//! The 5x5 card grid.
//!
//! The `Board` tracks which card sits in each cell and whether it is face
//! up. It supports:
//! - Dealing 24 cards row-major around the center hole
//! - Revealing and hiding single cells
//! - Swapping two cells (card and face-up flag together)
//! - Hiding every card at the start of a round
//!
//! Every accessor validates its position: the center hole fails with
//! `GameError::OutOfRange`.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardDeck};
use crate::core::error::{GameError, Result};
use crate::core::position::Position;

/// Side length of the grid.
pub const GRID_SIZE: usize = 5;

/// Number of cells that hold a card.
pub const PLAYABLE_CELLS: usize = GRID_SIZE * GRID_SIZE - 1;

/// Card layout and face-up flags.
///
/// ## Usage
///
/// ```
/// use memoarr::board::Board;
/// use memoarr::cards::CardDeck;
/// use memoarr::core::{GameRng, Position};
///
/// let mut deck = CardDeck::shuffled(&mut GameRng::new(1));
/// let mut board = Board::deal(&mut deck).unwrap();
///
/// let a1: Position = "A1".parse().unwrap();
/// assert!(board.turn_face_up(a1).unwrap());
/// assert!(board.is_face_up(a1).unwrap());
/// assert!(board.card(Position::CENTER).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cards: [[Option<Card>; GRID_SIZE]; GRID_SIZE],
    face_up: [[bool; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    /// Deal 24 cards from the deck.
    ///
    /// One card stays in a full 25-card deck.
    pub fn deal(deck: &mut CardDeck) -> Result<Self> {
        Self::from_cards(std::iter::from_fn(|| deck.draw()))
    }

    /// Lay out cards row-major, skipping the center.
    ///
    /// Takes exactly 24 cards from `cards`; fails with `DeckExhausted` if
    /// it runs out first.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self> {
        let mut board = Self {
            cards: [[None; GRID_SIZE]; GRID_SIZE],
            face_up: [[false; GRID_SIZE]; GRID_SIZE],
        };

        let mut cards = cards.into_iter();
        for (dealt, pos) in Position::playable().enumerate() {
            let card = cards.next().ok_or(GameError::DeckExhausted {
                needed: PLAYABLE_CELLS,
                dealt,
            })?;
            board.cards[pos.row.index()][pos.column.index()] = Some(card);
        }

        log::debug!("dealt {} cards", PLAYABLE_CELLS);
        Ok(board)
    }

    /// Grid indices for a playable position.
    fn cell(pos: Position) -> Result<(usize, usize)> {
        if pos.is_center() {
            return Err(GameError::OutOfRange(pos));
        }
        Ok((pos.row.index(), pos.column.index()))
    }

    /// Is the card at `pos` showing?
    pub fn is_face_up(&self, pos: Position) -> Result<bool> {
        let (r, c) = Self::cell(pos)?;
        Ok(self.face_up[r][c])
    }

    /// Reveal the card at `pos`.
    ///
    /// Returns `true` if it was hidden before.
    pub fn turn_face_up(&mut self, pos: Position) -> Result<bool> {
        let (r, c) = Self::cell(pos)?;
        let was_up = std::mem::replace(&mut self.face_up[r][c], true);
        Ok(!was_up)
    }

    /// Hide the card at `pos`.
    ///
    /// Returns `true` if it was showing before.
    pub fn turn_face_down(&mut self, pos: Position) -> Result<bool> {
        let (r, c) = Self::cell(pos)?;
        let was_up = std::mem::replace(&mut self.face_up[r][c], false);
        Ok(was_up)
    }

    /// The card at `pos`.
    pub fn card(&self, pos: Position) -> Result<Card> {
        let (r, c) = Self::cell(pos)?;
        // Every playable cell is filled at construction and only ever swapped.
        self.cards[r][c].ok_or(GameError::OutOfRange(pos))
    }

    /// Replace the card at `pos`, keeping its face-up flag.
    pub fn set_card(&mut self, pos: Position, card: Card) -> Result<()> {
        let (r, c) = Self::cell(pos)?;
        self.cards[r][c] = Some(card);
        Ok(())
    }

    /// Exchange two cells, cards and face-up flags together.
    ///
    /// Nothing changes unless both positions are playable.
    pub fn swap_cards(&mut self, a: Position, b: Position) -> Result<()> {
        let (r1, c1) = Self::cell(a)?;
        let (r2, c2) = Self::cell(b)?;

        let card = self.cards[r1][c1];
        self.cards[r1][c1] = self.cards[r2][c2];
        self.cards[r2][c2] = card;

        let up = self.face_up[r1][c1];
        self.face_up[r1][c1] = self.face_up[r2][c2];
        self.face_up[r2][c2] = up;

        Ok(())
    }

    /// Hide every card.
    pub fn all_faces_down(&mut self) {
        self.face_up = [[false; GRID_SIZE]; GRID_SIZE];
    }

    /// Where `card` currently lies, found by scanning the grid.
    #[must_use]
    pub fn position_of(&self, card: Card) -> Option<Position> {
        Position::playable().find(|pos| self.cards[pos.row.index()][pos.column.index()] == Some(card))
    }

    /// Revealed cells with their cards, row-major.
    pub fn face_up_cards(&self) -> impl Iterator<Item = (Position, Card)> + '_ {
        Position::playable().filter_map(move |pos| {
            let (r, c) = (pos.row.index(), pos.column.index());
            if self.face_up[r][c] {
                self.cards[r][c].map(|card| (pos, card))
            } else {
                None
            }
        })
    }
}
