//! Grid coordinates.
//!
//! A `Position` is a (row, column) pair on the 5x5 board. Rows are
//! lettered `A`-`E` from the top, columns numbered `1`-`5` from the left.
//!
//! `C3` is representable but never playable: it is the hole in the middle
//! of the board. Board operations reject it; parsing does not.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Board row, `A` (top) to `E` (bottom).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Row {
    A,
    B,
    C,
    D,
    E,
}

impl Row {
    /// All rows, top to bottom.
    pub const ALL: [Row; 5] = [Row::A, Row::B, Row::C, Row::D, Row::E];

    /// Zero-based index of this row.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Row at a zero-based index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row label as printed in the margin.
    #[must_use]
    pub const fn letter(self) -> char {
        (b'A' + self as u8) as char
    }

    /// Parse a row letter, ignoring case.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        let upper = letter.to_ascii_uppercase();
        if ('A'..='E').contains(&upper) {
            Self::from_index((upper as u8 - b'A') as usize)
        } else {
            None
        }
    }
}

/// Board column, `1` (left) to `5` (right).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Column {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Column {
    /// All columns, left to right.
    pub const ALL: [Column; 5] = [
        Column::One,
        Column::Two,
        Column::Three,
        Column::Four,
        Column::Five,
    ];

    /// Zero-based index of this column.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Column at a zero-based index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// One-based column number as printed in the legend.
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Column for a one-based number.
    #[must_use]
    pub fn from_number(number: u8) -> Option<Self> {
        number.checked_sub(1).and_then(|i| Self::from_index(i as usize))
    }
}

/// A cell on the board.
///
/// ## Example
///
/// ```
/// use memoarr::core::{Column, Position, Row};
///
/// let pos: Position = "b4".parse().unwrap();
/// assert_eq!(pos, Position::new(Row::B, Column::Four));
/// assert_eq!(pos.to_string(), "B4");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: Row,
    pub column: Column,
}

impl Position {
    /// The empty middle cell.
    pub const CENTER: Position = Position::new(Row::C, Column::Three);

    /// Create a position.
    #[must_use]
    pub const fn new(row: Row, column: Column) -> Self {
        Self { row, column }
    }

    /// Position at zero-based (row, column) indices, if inside the grid.
    #[must_use]
    pub fn from_indices(row: usize, column: usize) -> Option<Self> {
        Some(Self::new(Row::from_index(row)?, Column::from_index(column)?))
    }

    /// Is this the center hole?
    #[must_use]
    pub fn is_center(self) -> bool {
        self == Self::CENTER
    }

    /// Iterate over the 24 playable cells in row-major order.
    pub fn playable() -> impl Iterator<Item = Position> {
        Row::ALL
            .into_iter()
            .flat_map(|row| Column::ALL.into_iter().map(move |column| Position::new(row, column)))
            .filter(|pos| !pos.is_center())
    }

    /// Manhattan distance between two cells.
    #[must_use]
    pub fn distance(self, other: Position) -> usize {
        self.row.index().abs_diff(other.row.index())
            + self.column.index().abs_diff(other.column.index())
    }

    /// Orthogonal neighbours inside the grid, the center hole excluded.
    #[must_use]
    pub fn neighbours(self) -> SmallVec<[Position; 4]> {
        let (r, c) = (self.row.index(), self.column.index());
        let candidates = [
            r.checked_sub(1).map(|r| (r, c)),
            Some((r + 1, c)),
            c.checked_sub(1).map(|c| (r, c)),
            Some((r, c + 1)),
        ];

        candidates
            .into_iter()
            .flatten()
            .filter_map(|(r, c)| Position::from_indices(r, c))
            .filter(|pos| !pos.is_center())
            .collect()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row.letter(), self.column.number())
    }
}

/// Input that is not a letter `A`-`E` followed by a digit `1`-`5`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("expected a position like A1 (rows A-E, columns 1-5), got {input:?}")]
pub struct ParsePositionError {
    pub input: String,
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParsePositionError { input: s.to_string() };

        let mut chars = s.trim().chars();
        let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(malformed());
        };

        let row = Row::from_letter(letter).ok_or_else(malformed)?;
        let column = digit
            .to_digit(10)
            .and_then(|d| Column::from_number(d as u8))
            .ok_or_else(malformed)?;

        Ok(Position::new(row, column))
    }
}
