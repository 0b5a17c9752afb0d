//! The playing grid.
//!
//! Cards lie face down on a 5x5 grid with a hole in the middle. The board
//! owns the dealt cards for the whole game; cards move only by swapping.

pub mod grid;

pub use grid::{Board, GRID_SIZE, PLAYABLE_CELLS};
