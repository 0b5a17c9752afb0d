//! Round driver.
//!
//! A `Match` owns a game session, its rules and the rubis pool, and plays
//! rounds against a `PositionSource` (the players) and a `Renderer` (the
//! table). One round:
//!
//! 1. Everyone peeks at their sight lines, then the cards go back down.
//! 2. Players take turns revealing one hidden card each. A card that does
//!    not match the previous one eliminates the player who turned it.
//!    Under expert rules a Crab grants one extra reveal and a Turtle makes
//!    the next player lose their turn.
//! 3. When at most one player is left, they receive the next rubis.

use crate::board::Board;
use crate::cards::{CardDeck, Rubis, RubisDeck};
use crate::core::{GameConfig, GameError, GameRng, GameState, PlayerId, Position, Result};
use crate::effects::{ExpertEffect, InputError, PositionSource, Prompt};
use crate::render::{self, RenderMode, Renderer};
use crate::rules::{GameResult, Rules};

/// What happened in a finished round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundSummary {
    pub round: u32,
    /// Last player standing, if anyone was.
    pub winner: Option<PlayerId>,
    /// Token handed to the winner. `None` if there was no winner or the
    /// pool ran dry.
    pub rubis: Option<Rubis>,
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Match {
    state: GameState,
    rules: Rules,
    rubis: RubisDeck,
    mode: RenderMode,
    /// A Turtle was revealed; the next player to come up loses their turn.
    skip_pending: bool,
}

impl Match {
    /// Assemble a match from its parts.
    #[must_use]
    pub fn new(state: GameState, rules: Rules, rubis: RubisDeck, mode: RenderMode) -> Self {
        Self {
            state,
            rules,
            rubis,
            mode,
            skip_pending: false,
        }
    }

    /// Deal a new game for `config`.
    ///
    /// The card deck and the rubis pool draw from separate streams of the
    /// configured seed.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        let players = config.players()?;
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        log::info!("new {:?} game, seed {}", config.variant, rng.seed());

        let mut deck = CardDeck::shuffled(&mut rng.for_context("cards"));
        let board = Board::deal(&mut deck)?;
        let state = GameState::with_players(board, players)?;
        let rubis = RubisDeck::shuffled(&mut rng.for_context("rubis"));

        let mode = if config.variant.expert_display() {
            RenderMode::Compact
        } else {
            RenderMode::FullGrid
        };

        Ok(Self::new(state, Rules::for_variant(config.variant), rubis, mode))
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Play rounds until the game is over.
    pub fn play_game(
        &mut self,
        input: &mut dyn PositionSource,
        out: &mut dyn Renderer,
    ) -> Result<GameResult> {
        out.show(&render::snapshot(&self.state, self.mode));

        while !self.rules.game_over(&self.state) {
            self.play_round(input, out)?;
        }

        let result = self.rules.result(&self.state);
        out.show(&self.final_standings(&result));
        log::info!("game over: {:?}", result);
        Ok(result)
    }

    /// Play one full round.
    pub fn play_round(
        &mut self,
        input: &mut dyn PositionSource,
        out: &mut dyn Renderer,
    ) -> Result<RoundSummary> {
        self.state.next_round();
        self.skip_pending = false;
        let round = self.state.round();
        out.show(&format!("\n========== ROUND {round} =========="));

        self.sight_phase(input, out)?;

        while !self.rules.round_over(&self.state) {
            let player = self.rules.next_player(&mut self.state)?;

            if std::mem::take(&mut self.skip_pending) {
                out.show(&format!("\n{} is skipped due to Turtle effect!", self.name(player)));
                log::debug!("{} skipped", player);
                continue;
            }

            self.play_turn(player, input, out)?;
        }

        let summary = self.finish_round(round);
        match (summary.winner, summary.rubis) {
            (Some(winner), Some(rubis)) => {
                out.show(&format!("{} wins and receives {}!", self.name(winner), rubis));
            }
            (Some(winner), None) => {
                out.show(&format!("{} wins, but no rubis are left!", self.name(winner)));
            }
            (None, _) => out.show("Nobody is left standing."),
        }
        out.show(&self.standings());
        Ok(summary)
    }

    /// Show every seated player their three cells, then hide them again.
    fn sight_phase(&mut self, input: &mut dyn PositionSource, out: &mut dyn Renderer) -> Result<()> {
        out.show("\nRevealing cards for each player (memorize them)...");
        for player in self.state.players() {
            let cells: Vec<String> = GameState::sight_locations(player.side())
                .iter()
                .map(ToString::to_string)
                .collect();
            out.show(&format!("{} can see: {}", player.name(), cells.join(" ")));
        }

        self.state.reveal_sight_lines();
        out.show(&render::snapshot(&self.state, self.mode));

        input
            .acknowledge(Prompt::HideSightLines)
            .map_err(|_| GameError::InputClosed)?;

        self.state.hide_sight_lines();
        out.show(&render::snapshot(&self.state, self.mode));
        Ok(())
    }

    /// One player's turn: a reveal, plus one more after a Crab.
    fn play_turn(
        &mut self,
        player: PlayerId,
        input: &mut dyn PositionSource,
        out: &mut dyn Renderer,
    ) -> Result<()> {
        out.show(&format!("\n>>> {}'s turn <<<", self.name(player)));
        let mut replay_available = true;

        loop {
            let Some(pos) = self.choose_reveal(input, out)? else {
                out.show(&format!("No card left to reveal. {} is eliminated from this round.", self.name(player)));
                self.state.set_player_active(player, false);
                return Ok(());
            };

            self.state.reset_blocked();
            let card = self.state.reveal(player, pos)?;
            out.show(&render::snapshot(&self.state, self.mode));

            let effect = match self.rules.resolve_expert_rule(&mut self.state, card, input) {
                Some(resolution) => {
                    out.show(resolution.ability.announcement());
                    out.show(resolution.result.notice());
                    if resolution.ability.needs_target() {
                        out.show(&render::snapshot(&self.state, self.mode));
                    }
                    resolution.effect
                }
                None => ExpertEffect::None,
            };

            if !self.rules.is_valid(&self.state) {
                out.show(&format!("MISMATCH! {} is eliminated from this round.", self.name(player)));
                log::debug!("{} eliminated by {}", player, card);
                self.state.set_player_active(player, false);
                return Ok(());
            }
            out.show("Valid match!");

            match effect {
                ExpertEffect::PlayAgain if replay_available => {
                    out.show("Crab effect: play again!");
                    replay_available = false;
                }
                ExpertEffect::SkipNext => {
                    self.skip_pending = true;
                    return Ok(());
                }
                _ => return Ok(()),
            }
        }
    }

    /// Ask until the player names a hidden, unblocked cell.
    ///
    /// `None` if no such cell exists.
    fn choose_reveal(
        &self,
        input: &mut dyn PositionSource,
        out: &mut dyn Renderer,
    ) -> Result<Option<Position>> {
        let selectable = |pos: Position| {
            !self.state.is_blocked(pos) && matches!(self.state.is_face_up(pos), Ok(false))
        };
        if !Position::playable().any(|pos| selectable(pos)) {
            return Ok(None);
        }

        loop {
            let pos = match input.request_position(Prompt::Reveal) {
                Ok(pos) => pos,
                Err(InputError::Closed) => return Err(GameError::InputClosed),
                Err(InputError::Malformed(_)) => {
                    out.show("Invalid format. Use A-E and 1-5.");
                    continue;
                }
            };

            if pos.is_center() {
                out.show("Center position is empty. Choose another.");
            } else if self.state.is_blocked(pos) {
                out.show("That card is blocked by Walrus! Choose another.");
            } else if selectable(pos) {
                return Ok(Some(pos));
            } else {
                out.show("That card is already revealed. Choose a hidden card.");
            }
        }
    }

    /// Hand the next rubis to the last player standing.
    fn finish_round(&mut self, round: u32) -> RoundSummary {
        let winner = self.rules.round_winner(&self.state);
        let mut summary = RoundSummary {
            round,
            winner,
            rubis: None,
        };

        let Some(winner) = winner else {
            log::info!("round {} ended without a winner", round);
            return summary;
        };

        match self.rubis.draw() {
            Some(rubis) => {
                self.state.award(winner, rubis);
                summary.rubis = Some(rubis);
            }
            None => log::warn!("rubis pool exhausted in round {}", round),
        }

        summary
    }

    fn standings(&self) -> String {
        let mut text = format!("\n--- Round {} Complete ---\n", self.state.round());
        for id in self.rules.standings(&self.state) {
            if let Some(player) = self.state.player(id) {
                text.push_str(&render::player_line(player, true));
                text.push('\n');
            }
        }
        text
    }

    fn final_standings(&self, result: &GameResult) -> String {
        let mut text = String::from("\nGAME OVER\n");
        match result {
            GameResult::Winner(id) => {
                text.push_str(&format!("WINNER: {}\n", self.name(*id)));
            }
            GameResult::Winners(ids) => {
                let names: Vec<&str> = ids.iter().map(|id| self.name(*id)).collect();
                text.push_str(&format!("TIE: {}\n", names.join(", ")));
            }
            GameResult::Draw => text.push_str("No winner.\n"),
        }

        text.push_str("Final Standings:\n");
        for (rank, id) in self.rules.standings(&self.state).into_iter().enumerate() {
            if let Some(player) = self.state.player(id) {
                text.push_str(&format!("{}. {}\n", rank + 1, render::player_line(player, true)));
            }
        }
        text
    }

    fn name(&self, id: PlayerId) -> &str {
        self.state.player(id).map_or("?", |p| p.name())
    }
}
