//! Game state: the board, the players, and round progress.
//!
//! ## GameState
//!
//! Everything a round needs to know:
//! - Board (card layout and face-up flags)
//! - Seated players
//! - Round number
//! - The last two cards revealed (the only history match checks use)
//! - The cell blocked by a Walrus, if any
//! - The turn rotation cursor
//! - A log of every reveal
//!
//! The rules engine reads this state to make decisions and mutates it only
//! through the methods below.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::RevealRecord;
use super::config::MAX_PLAYERS;
use super::error::{GameError, Result};
use super::player::{Player, PlayerId, Side};
use super::position::{Column, Position, Row};
use crate::board::Board;
use crate::cards::{Card, Rubis};

/// Full state of a game session.
///
/// Cloning is cheap: the reveal log is a persistent vector.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    board: Board,

    players: Vec<Player>,

    /// Rounds started so far. 0 before the first round.
    round: u32,

    previous_card: Option<Card>,
    current_card: Option<Card>,

    /// Cell nobody may pick, set by a Walrus.
    blocked: Option<Position>,

    /// Seat where the next scan for an active player starts.
    /// Survives round changes so the opening seat moves around the table.
    turn_cursor: usize,

    reveal_log: Vector<RevealRecord>,
}

impl GameState {
    /// Create a session around a dealt board, with no players yet.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            players: Vec::new(),
            round: 0,
            previous_card: None,
            current_card: None,
            blocked: None,
            turn_cursor: 0,
            reveal_log: Vector::new(),
        }
    }

    /// Create a session and seat `players` in order.
    pub fn with_players(board: Board, players: impl IntoIterator<Item = Player>) -> Result<Self> {
        let mut state = Self::new(board);
        for player in players {
            state.add_player(player)?;
        }
        Ok(state)
    }

    // === Board ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_face_up(&self, pos: Position) -> Result<bool> {
        self.board.is_face_up(pos)
    }

    pub fn turn_face_up(&mut self, pos: Position) -> Result<bool> {
        self.board.turn_face_up(pos)
    }

    pub fn turn_face_down(&mut self, pos: Position) -> Result<bool> {
        self.board.turn_face_down(pos)
    }

    pub fn card(&self, pos: Position) -> Result<Card> {
        self.board.card(pos)
    }

    pub fn set_card(&mut self, pos: Position, card: Card) -> Result<()> {
        self.board.set_card(pos, card)
    }

    pub fn swap_cards(&mut self, a: Position, b: Position) -> Result<()> {
        self.board.swap_cards(a, b)
    }

    // === Players ===

    /// Seat a player.
    ///
    /// Fails if their side is taken or the table is full.
    pub fn add_player(&mut self, player: Player) -> Result<PlayerId> {
        if self.players.iter().any(|p| p.side() == player.side()) {
            return Err(GameError::DuplicateSide(player.side()));
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(GameError::TooManyPlayers { max: MAX_PLAYERS });
        }

        let id = PlayerId::new(self.players.len() as u8);
        log::debug!("{} seated {} as {}", player.name(), player.side(), id);
        self.players.push(player);
        Ok(id)
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// The player seated on `side`.
    #[must_use]
    pub fn player_by_side(&self, side: Side) -> Option<PlayerId> {
        self.players
            .iter()
            .position(|p| p.side() == side)
            .map(|i| PlayerId::new(i as u8))
    }

    /// Iterate over all seated player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.players.len() as u8).map(PlayerId::new)
    }

    /// Number of players still in the round.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }

    /// Mark a player in or out of the current round.
    pub fn set_player_active(&mut self, id: PlayerId, active: bool) {
        if let Some(player) = self.players.get_mut(id.index()) {
            player.set_active(active);
        }
    }

    /// Hand a rubis to a player.
    pub fn award(&mut self, id: PlayerId, rubis: Rubis) {
        if let Some(player) = self.players.get_mut(id.index()) {
            log::info!("{} receives {}", player.name(), rubis);
            player.add_rubis(rubis);
        }
    }

    // === Rounds ===

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Start the next round.
    ///
    /// Hides every card, lifts the block, forgets the revealed cards and
    /// brings every player back in.
    pub fn next_round(&mut self) {
        self.round += 1;
        self.board.all_faces_down();
        self.reset_blocked();
        self.previous_card = None;
        self.current_card = None;
        for player in &mut self.players {
            player.set_active(true);
        }
        log::debug!("round {} started", self.round);
    }

    pub(crate) fn turn_cursor(&self) -> usize {
        self.turn_cursor
    }

    pub(crate) fn set_turn_cursor(&mut self, cursor: usize) {
        self.turn_cursor = cursor;
    }

    // === Revealed cards ===

    #[must_use]
    pub fn previous_card(&self) -> Option<Card> {
        self.previous_card
    }

    #[must_use]
    pub fn current_card(&self) -> Option<Card> {
        self.current_card
    }

    /// Push a newly revealed card: current becomes previous.
    pub fn set_current_card(&mut self, card: Card) {
        self.previous_card = self.current_card.replace(card);
    }

    /// Turn the card at `pos` face up on behalf of `player`.
    ///
    /// Records it as the current card and in the reveal log.
    pub fn reveal(&mut self, player: PlayerId, pos: Position) -> Result<Card> {
        let card = self.board.card(pos)?;
        self.board.turn_face_up(pos)?;
        self.set_current_card(card);
        self.reveal_log
            .push_back(RevealRecord::new(player, self.round, pos, card));
        log::debug!("{} revealed {} at {}", player, card, pos);
        Ok(card)
    }

    /// Every card revealed during play, oldest first.
    #[must_use]
    pub fn reveal_log(&self) -> &Vector<RevealRecord> {
        &self.reveal_log
    }

    // === Walrus block ===

    /// Block `pos`, replacing any earlier block.
    pub fn set_blocked(&mut self, pos: Position) -> Result<()> {
        if pos.is_center() {
            return Err(GameError::OutOfRange(pos));
        }
        self.blocked = Some(pos);
        Ok(())
    }

    #[must_use]
    pub fn is_blocked(&self, pos: Position) -> bool {
        self.blocked == Some(pos)
    }

    #[must_use]
    pub fn blocked(&self) -> Option<Position> {
        self.blocked
    }

    pub fn reset_blocked(&mut self) {
        self.blocked = None;
    }

    // === Sight lines ===

    /// The three cells a player on `side` may look at before a round.
    #[must_use]
    pub fn sight_locations(side: Side) -> [Position; 3] {
        use Column::*;
        use Row::*;

        let cells = match side {
            Side::Top => [(A, Two), (A, Three), (A, Four)],
            Side::Bottom => [(E, Two), (E, Three), (E, Four)],
            Side::Left => [(B, One), (C, One), (D, One)],
            Side::Right => [(B, Five), (C, Five), (D, Five)],
        };
        cells.map(|(row, column)| Position::new(row, column))
    }

    /// Turn up every seated player's sight cells.
    pub fn reveal_sight_lines(&mut self) {
        self.set_sight_lines(true);
    }

    /// Turn every seated player's sight cells back down.
    pub fn hide_sight_lines(&mut self) {
        self.set_sight_lines(false);
    }

    fn set_sight_lines(&mut self, up: bool) {
        let sides: Vec<Side> = self.players.iter().map(Player::side).collect();
        for pos in sides.into_iter().flat_map(Self::sight_locations) {
            // Sight cells are on the edge, never the center.
            let _ = if up {
                self.board.turn_face_up(pos)
            } else {
                self.board.turn_face_down(pos)
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Animal, Background};

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    fn board() -> Board {
        Board::from_cards(Card::catalog()).unwrap()
    }

    fn two_player_state() -> GameState {
        GameState::with_players(
            board(),
            [Player::new("Ana", Side::Top), Player::new("Ben", Side::Bottom)],
        )
        .unwrap()
    }

    #[test]
    fn test_game_state_new() {
        let state = GameState::new(board());

        assert_eq!(state.round(), 0);
        assert!(state.players().is_empty());
        assert_eq!(state.previous_card(), None);
        assert_eq!(state.current_card(), None);
        assert_eq!(state.blocked(), None);
    }

    #[test]
    fn test_add_player_assigns_seats() {
        let mut state = GameState::new(board());

        assert_eq!(state.add_player(Player::new("Ana", Side::Left)), Ok(PlayerId::new(0)));
        assert_eq!(state.add_player(Player::new("Ben", Side::Right)), Ok(PlayerId::new(1)));
        assert_eq!(state.player_by_side(Side::Right), Some(PlayerId::new(1)));
        assert_eq!(state.player_by_side(Side::Top), None);
    }

    #[test]
    fn test_add_player_rejects_taken_side() {
        let mut state = two_player_state();

        assert_eq!(
            state.add_player(Player::new("Cy", Side::Top)),
            Err(GameError::DuplicateSide(Side::Top))
        );
        assert_eq!(state.players().len(), 2);
    }

    #[test]
    fn test_set_current_card_shifts_history() {
        let mut state = two_player_state();
        let first = Card::new(Animal::Crab, Background::Red);
        let second = Card::new(Animal::Crab, Background::Blue);

        state.set_current_card(first);
        assert_eq!(state.previous_card(), None);
        assert_eq!(state.current_card(), Some(first));

        state.set_current_card(second);
        assert_eq!(state.previous_card(), Some(first));
        assert_eq!(state.current_card(), Some(second));
    }

    #[test]
    fn test_next_round_resets() {
        let mut state = two_player_state();
        let ana = PlayerId::new(0);

        state.next_round();
        state.reveal(ana, pos("A1")).unwrap();
        state.reveal(ana, pos("A2")).unwrap();
        state.set_blocked(pos("B2")).unwrap();
        state.set_player_active(ana, false);

        state.next_round();

        assert_eq!(state.round(), 2);
        assert!(!state.is_face_up(pos("A1")).unwrap());
        assert_eq!(state.blocked(), None);
        assert_eq!(state.previous_card(), None);
        assert_eq!(state.current_card(), None);
        assert_eq!(state.active_count(), 2);
        // The log outlives the round.
        assert_eq!(state.reveal_log().len(), 2);
    }

    #[test]
    fn test_reveal_records() {
        let mut state = two_player_state();
        state.next_round();

        let card = state.reveal(PlayerId::new(1), pos("E5")).unwrap();

        assert!(state.is_face_up(pos("E5")).unwrap());
        assert_eq!(state.current_card(), Some(card));
        let record = state.reveal_log().back().copied().unwrap();
        assert_eq!(record, RevealRecord::new(PlayerId::new(1), 1, pos("E5"), card));
    }

    #[test]
    fn test_reveal_center_fails_without_side_effects() {
        let mut state = two_player_state();

        assert_eq!(
            state.reveal(PlayerId::new(0), Position::CENTER),
            Err(GameError::OutOfRange(Position::CENTER))
        );
        assert_eq!(state.current_card(), None);
        assert!(state.reveal_log().is_empty());
    }

    #[test]
    fn test_block_is_single_slot() {
        let mut state = two_player_state();

        state.set_blocked(pos("A1")).unwrap();
        state.set_blocked(pos("D4")).unwrap();

        assert!(!state.is_blocked(pos("A1")));
        assert!(state.is_blocked(pos("D4")));

        state.reset_blocked();
        assert!(!state.is_blocked(pos("D4")));
        assert_eq!(state.set_blocked(Position::CENTER), Err(GameError::OutOfRange(Position::CENTER)));
    }

    #[test]
    fn test_sight_locations() {
        let cells = |side| GameState::sight_locations(side).map(|p| p.to_string());

        assert_eq!(cells(Side::Top), ["A2", "A3", "A4"]);
        assert_eq!(cells(Side::Bottom), ["E2", "E3", "E4"]);
        assert_eq!(cells(Side::Left), ["B1", "C1", "D1"]);
        assert_eq!(cells(Side::Right), ["B5", "C5", "D5"]);
    }

    #[test]
    fn test_sight_lines_only_for_seated_sides() {
        let mut state = two_player_state();

        state.reveal_sight_lines();
        assert_eq!(state.board().face_up_cards().count(), 6);
        assert!(state.is_face_up(pos("A3")).unwrap());
        assert!(state.is_face_up(pos("E3")).unwrap());
        assert!(!state.is_face_up(pos("C1")).unwrap());

        state.hide_sight_lines();
        assert_eq!(state.board().face_up_cards().count(), 0);
    }

    #[test]
    fn test_award_accumulates() {
        let mut state = two_player_state();
        let ben = PlayerId::new(1);

        state.award(ben, Rubis::new(2));
        state.award(ben, Rubis::new(4));

        assert_eq!(state.player(ben).unwrap().rubis(), 6);
        assert_eq!(state.player(PlayerId::new(0)).unwrap().rubis(), 0);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = two_player_state();
        state.next_round();
        state.reveal(PlayerId::new(0), pos("A1")).unwrap();

        let snapshot = state.clone();
        state.reveal(PlayerId::new(0), pos("A2")).unwrap();

        assert_eq!(snapshot.reveal_log().len(), 1);
        assert_eq!(state.reveal_log().len(), 2);
        assert!(!snapshot.is_face_up(pos("A2")).unwrap());
    }
}
