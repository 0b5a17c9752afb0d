//! Expert-rule card abilities.
//!
//! With expert rules on, every revealed card triggers the ability of its
//! animal. There are exactly five, one per animal:
//!
//! | Animal  | Ability     | Needs a target |
//! |---------|-------------|----------------|
//! | Octopus | `Swap`      | adjacent cell  |
//! | Penguin | `Hide`      | face-up cell   |
//! | Walrus  | `Block`     | any cell       |
//! | Crab    | `PlayAgain` | no             |
//! | Turtle  | `SkipNext`  | no             |
//!
//! Abilities that need a target change the board during resolution. The
//! other two only return an `ExpertEffect` for the turn loop to act on.

use serde::{Deserialize, Serialize};

use crate::cards::Animal;

/// What a revealed card does under expert rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    /// Swap the revealed card with an orthogonally adjacent one.
    Swap,
    /// Turn a face-up card face down.
    Hide,
    /// Block a cell for the next selection.
    Block,
    /// The current player reveals once more.
    PlayAgain,
    /// The next player in rotation loses their turn.
    SkipNext,
}

impl Ability {
    /// The ability carried by an animal.
    #[must_use]
    pub const fn of(animal: Animal) -> Self {
        match animal {
            Animal::Octopus => Ability::Swap,
            Animal::Penguin => Ability::Hide,
            Animal::Walrus => Ability::Block,
            Animal::Crab => Ability::PlayAgain,
            Animal::Turtle => Ability::SkipNext,
        }
    }

    /// Does resolving this ability ask the player for a position?
    #[must_use]
    pub const fn needs_target(self) -> bool {
        matches!(self, Ability::Swap | Ability::Hide | Ability::Block)
    }

    /// Message shown when the ability triggers.
    #[must_use]
    pub const fn announcement(self) -> &'static str {
        match self {
            Ability::Swap => "Octopus! Swap it with an adjacent card.",
            Ability::Hide => "Penguin! Turn a visible card face down.",
            Ability::Block => "Walrus! Block a card for the next player.",
            Ability::PlayAgain => "Crab! You must play again.",
            Ability::SkipNext => "Turtle! Next player skips a turn.",
        }
    }
}

/// Signal returned to the turn loop after an ability resolves.
///
/// Not stored anywhere: the loop consumes it right away.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpertEffect {
    /// Nothing changes in turn order.
    #[default]
    None,
    /// The current player reveals once more this turn.
    PlayAgain,
    /// The next player forfeits their turn.
    SkipNext,
}
