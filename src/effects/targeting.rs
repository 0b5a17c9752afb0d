//! Effect targeting.
//!
//! Defines how players pick cells and which picks are acceptable:
//! - `Prompt`: Why a position is being asked for
//! - `PositionSource`: Where positions come from (terminal, script, ...)
//! - `is_adjacent`: The Octopus swap rule

use std::fmt;

use crate::core::position::{ParsePositionError, Position};

/// Why the game is asking for input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prompt {
    /// Pick a hidden card to reveal.
    Reveal,
    /// Pick a cell adjacent to `from` to swap with.
    SwapTarget { from: Position },
    /// Pick a face-up card to hide.
    HideTarget,
    /// Pick a cell to block.
    BlockTarget,
    /// Players have seen their sight lines; continue to hide them.
    HideSightLines,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prompt::Reveal => f.write_str("Choose a card to reveal (e.g. A1): "),
            Prompt::SwapTarget { from } => {
                write!(f, "Enter a position adjacent to {from} to swap with: ")
            }
            Prompt::HideTarget => f.write_str("Enter a face-up position to hide (e.g. A1): "),
            Prompt::BlockTarget => f.write_str("Enter position to block (e.g. A1): "),
            Prompt::HideSightLines => f.write_str("Press Enter to hide cards and begin round..."),
        }
    }
}

/// Input that could not be turned into a position.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error(transparent)]
    Malformed(#[from] ParsePositionError),

    /// No more input will ever arrive.
    #[error("input closed")]
    Closed,
}

/// Supplies positions chosen by the acting player.
///
/// Calls block until the player answers. Implementations report
/// unparseable answers as `InputError::Malformed`; the caller decides
/// whether to ask again.
pub trait PositionSource {
    /// Ask for a position.
    fn request_position(&mut self, prompt: Prompt) -> Result<Position, InputError>;

    /// Wait until the players are ready to go on.
    fn acknowledge(&mut self, _prompt: Prompt) -> Result<(), InputError> {
        Ok(())
    }
}

/// Are the two cells orthogonal neighbours?
///
/// Exactly one step up, down, left or right. A cell is not adjacent to
/// itself, and diagonal cells are not adjacent.
#[must_use]
pub fn is_adjacent(a: Position, b: Position) -> bool {
    a.distance(b) == 1
}
