//! Effect resolution: carrying out a revealed card's ability.
//!
//! The `EffectResolver` applies an `Ability` to the game state. Abilities
//! that need a target ask the `PositionSource` once; any bad answer
//! (unparseable, the center hole, a cell that does not qualify) makes the
//! ability fizzle. Resolution never fails: a round always goes on.

use crate::cards::Card;
use crate::core::{GameState, Position};

use super::effect::{Ability, ExpertEffect};
use super::targeting::{is_adjacent, InputError, PositionSource, Prompt};

/// How resolving an ability went.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveResult {
    /// The ability changed the board (or the turn order).
    Success(String),
    /// The answer could not be used (malformed, out of range, no input).
    Failed(String),
    /// The answer was well formed but the ability did not apply.
    Skipped(String),
}

impl ResolveResult {
    /// Message to show the players.
    #[must_use]
    pub fn notice(&self) -> &str {
        match self {
            ResolveResult::Success(msg) | ResolveResult::Failed(msg) | ResolveResult::Skipped(msg) => msg,
        }
    }
}

/// Outcome of a revealed card's ability.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub ability: Ability,
    pub effect: ExpertEffect,
    pub result: ResolveResult,
}

/// Resolves abilities on game state.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve the ability of `card`, which has just been revealed.
    pub fn resolve(
        state: &mut GameState,
        card: Card,
        input: &mut dyn PositionSource,
    ) -> Resolution {
        let ability = Ability::of(card.animal());
        log::info!("{}", ability.announcement());

        let (effect, result) = match ability {
            Ability::Swap => (ExpertEffect::None, Self::resolve_swap(state, card, input)),
            Ability::Hide => (ExpertEffect::None, Self::resolve_hide(state, input)),
            Ability::Block => (ExpertEffect::None, Self::resolve_block(state, input)),
            Ability::PlayAgain => (
                ExpertEffect::PlayAgain,
                ResolveResult::Success("Play again!".to_string()),
            ),
            Ability::SkipNext => (
                ExpertEffect::SkipNext,
                ResolveResult::Success("The next player will be skipped.".to_string()),
            ),
        };

        match &result {
            ResolveResult::Success(msg) => log::debug!("{:?}: {}", ability, msg),
            ResolveResult::Failed(msg) | ResolveResult::Skipped(msg) => {
                log::info!("{:?} ignored: {}", ability, msg)
            }
        }

        Resolution {
            ability,
            effect,
            result,
        }
    }

    /// Ask once for a target; any input error ends the ability.
    fn target(input: &mut dyn PositionSource, prompt: Prompt) -> Result<Position, ResolveResult> {
        input.request_position(prompt).map_err(|err| match err {
            InputError::Malformed(e) => ResolveResult::Failed(format!("Invalid position ({e}). Ignored.")),
            InputError::Closed => ResolveResult::Failed("No input. Ignored.".to_string()),
        })
    }

    fn resolve_swap(state: &mut GameState, card: Card, input: &mut dyn PositionSource) -> ResolveResult {
        let Some(from) = state.board().position_of(card) else {
            return ResolveResult::Failed(format!("{card} is not on the board. Ignored."));
        };

        let to = match Self::target(input, Prompt::SwapTarget { from }) {
            Ok(pos) => pos,
            Err(result) => return result,
        };

        if !is_adjacent(from, to) {
            return ResolveResult::Skipped(format!("{to} is not adjacent to {from}. Ignored."));
        }

        match state.swap_cards(from, to) {
            Ok(()) => ResolveResult::Success(format!("Cards at {from} and {to} swapped.")),
            Err(e) => ResolveResult::Failed(format!("Invalid position: {e}. Ignored.")),
        }
    }

    fn resolve_hide(state: &mut GameState, input: &mut dyn PositionSource) -> ResolveResult {
        let pos = match Self::target(input, Prompt::HideTarget) {
            Ok(pos) => pos,
            Err(result) => return result,
        };

        match state.turn_face_down(pos) {
            Ok(true) => ResolveResult::Success(format!("Card at {pos} turned face down.")),
            Ok(false) => ResolveResult::Skipped(format!("Card at {pos} is already hidden. Ignored.")),
            Err(e) => ResolveResult::Failed(format!("Invalid position: {e}. Ignored.")),
        }
    }

    fn resolve_block(state: &mut GameState, input: &mut dyn PositionSource) -> ResolveResult {
        let pos = match Self::target(input, Prompt::BlockTarget) {
            Ok(pos) => pos,
            Err(result) => return result,
        };

        match state.set_blocked(pos) {
            Ok(()) => ResolveResult::Success(format!("Position {pos} blocked.")),
            Err(e) => ResolveResult::Failed(format!("Invalid position: {e}. Ignored.")),
        }
    }
}
