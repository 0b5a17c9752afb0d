//! The rules of Memoarr.
//!
//! `Rules` answers the questions the turn loop asks:
//! - Is the last reveal a match?
//! - Is the round over? Is the game over?
//! - Whose turn is it?
//! - What does the revealed card do (expert rules)?
//! - Who won?
//!
//! It holds no game data of its own. The only state it touches is the
//! rotation cursor and, through the effect resolver, the board and block.

use crate::cards::Card;
use crate::core::config::Variant;
use crate::core::error::{GameError, Result};
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::effects::{EffectResolver, ExpertEffect, PositionSource, Resolution};

/// Rounds in a game. Fixed: the rubis pool holds one token per round.
pub const ROUNDS_PER_GAME: u32 = 7;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Tie for the most rubis.
    Winners(Vec<PlayerId>),
    /// Nobody collected anything.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
            GameResult::Draw => false,
        }
    }
}

/// Rules engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rules {
    expert_rules: bool,
}

impl Rules {
    /// Create the rules, with or without card abilities.
    #[must_use]
    pub const fn new(expert_rules: bool) -> Self {
        Self { expert_rules }
    }

    /// Rules for a configured variant.
    #[must_use]
    pub fn for_variant(variant: Variant) -> Self {
        Self::new(variant.expert_rules())
    }

    #[must_use]
    pub fn expert_rules(&self) -> bool {
        self.expert_rules
    }

    /// Does the current card match the previous one?
    ///
    /// The first card of a round always does. After that, the two cards
    /// must share an animal or a background (or both).
    #[must_use]
    pub fn is_valid(&self, state: &GameState) -> bool {
        match (state.previous_card(), state.current_card()) {
            (Some(prev), Some(curr)) => prev.matches(&curr),
            _ => true,
        }
    }

    /// Have all rounds been played?
    #[must_use]
    pub fn game_over(&self, state: &GameState) -> bool {
        state.round() >= ROUNDS_PER_GAME
    }

    /// Is at most one player left in the round?
    #[must_use]
    pub fn round_over(&self, state: &GameState) -> bool {
        state.active_count() <= 1
    }

    /// The next active player in seat order, starting at the rotation cursor.
    ///
    /// Moves the cursor to the seat after the returned player. Check
    /// `round_over` first: with no active players this fails.
    pub fn next_player(&self, state: &mut GameState) -> Result<PlayerId> {
        let count = state.players().len();
        if count == 0 {
            return Err(GameError::NoPlayers);
        }

        let start = state.turn_cursor();
        let seat = (0..count)
            .map(|offset| (start + offset) % count)
            .find(|&seat| state.players()[seat].is_active())
            .ok_or(GameError::NoActivePlayers)?;

        state.set_turn_cursor((seat + 1) % count);
        Ok(PlayerId::new(seat as u8))
    }

    /// Apply the ability of a just-revealed card.
    ///
    /// Returns `ExpertEffect::None` without asking for input when expert
    /// rules are off.
    pub fn apply_expert_rule(
        &self,
        state: &mut GameState,
        card: Card,
        input: &mut dyn PositionSource,
    ) -> ExpertEffect {
        self.resolve_expert_rule(state, card, input)
            .map_or(ExpertEffect::None, |resolution| resolution.effect)
    }

    /// Like `apply_expert_rule`, with the details of what happened.
    ///
    /// `None` when expert rules are off.
    pub fn resolve_expert_rule(
        &self,
        state: &mut GameState,
        card: Card,
        input: &mut dyn PositionSource,
    ) -> Option<Resolution> {
        self.expert_rules
            .then(|| EffectResolver::resolve(state, card, input))
    }

    /// The last player standing, once the round is over.
    #[must_use]
    pub fn round_winner(&self, state: &GameState) -> Option<PlayerId> {
        if !self.round_over(state) {
            return None;
        }
        state
            .player_ids()
            .find(|&id| state.players()[id.index()].is_active())
    }

    /// Players from most to fewest rubis; ties keep seat order.
    #[must_use]
    pub fn standings(&self, state: &GameState) -> Vec<PlayerId> {
        let mut ids: Vec<_> = state.player_ids().collect();
        ids.sort_by_key(|id| std::cmp::Reverse(state.players()[id.index()].rubis()));
        ids
    }

    /// Who has the most rubis.
    #[must_use]
    pub fn result(&self, state: &GameState) -> GameResult {
        let best = state.players().iter().map(|p| p.rubis()).max().unwrap_or(0);
        if best == 0 {
            return GameResult::Draw;
        }

        let mut leaders: Vec<_> = state
            .player_ids()
            .filter(|id| state.players()[id.index()].rubis() == best)
            .collect();

        if leaders.len() == 1 {
            GameResult::Winner(leaders.remove(0))
        } else {
            GameResult::Winners(leaders)
        }
    }
}
