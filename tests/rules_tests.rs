//! Rules engine tests against hand-built game states.
//!
//! Boards are dealt from the unshuffled catalog, so cells hold known cards:
//! row A is Crab (Red, Green, Purple, Blue, Yellow), row B Penguin, then
//! Octopus, Turtle and Walrus fill rows C to E around the center.

use memoarr::board::Board;
use memoarr::cards::{Animal, Background, Card, RubisDeck};
use memoarr::core::{GameRng, GameState, Player, PlayerId, Position, Side};
use memoarr::effects::is_adjacent;
use memoarr::rules::{GameResult, Rules};

fn pos(s: &str) -> Position {
    s.parse().unwrap()
}

fn state(players: usize) -> GameState {
    let board = Board::from_cards(Card::catalog()).unwrap();
    let names = ["Ana", "Ben", "Cy", "Dee"];
    GameState::with_players(
        board,
        names
            .iter()
            .zip(Side::SEATING)
            .take(players)
            .map(|(name, side)| Player::new(*name, side)),
    )
    .unwrap()
}

// =============================================================================
// Round end
// =============================================================================

/// Test that a round ends once one player is left, for every table size.
#[test]
fn test_round_over_n_players() {
    let rules = Rules::default();

    for count in 2..=4 {
        let mut state = state(count);
        state.next_round();

        for seat in 0..count - 1 {
            assert!(!rules.round_over(&state), "{count} players, {seat} out");
            assert_eq!(rules.round_winner(&state), None);
            state.set_player_active(PlayerId::new(seat as u8), false);
        }

        assert!(rules.round_over(&state));
        assert_eq!(rules.round_winner(&state), Some(PlayerId::new(count as u8 - 1)));
    }
}

// =============================================================================
// Turn order
// =============================================================================

/// Test that turns rotate in seat order and skip eliminated players.
#[test]
fn test_next_player_rotation() {
    let rules = Rules::default();
    let mut state = state(4);
    state.next_round();

    let order: Vec<u8> = (0..5).map(|_| rules.next_player(&mut state).unwrap().0).collect();
    assert_eq!(order, vec![0, 1, 2, 3, 0]);

    state.set_player_active(PlayerId::new(2), false);
    let order: Vec<u8> = (0..4).map(|_| rules.next_player(&mut state).unwrap().0).collect();
    assert_eq!(order, vec![1, 3, 0, 1]);
}

// =============================================================================
// Adjacency
// =============================================================================

/// Test orthogonal adjacency.
#[test]
fn test_adjacency() {
    assert!(is_adjacent(pos("A1"), pos("A2")));
    assert!(is_adjacent(pos("B3"), pos("A3")));
    assert!(!is_adjacent(pos("A1"), pos("B2")));
    assert!(!is_adjacent(pos("A1"), pos("A1")));
    assert!(!is_adjacent(pos("A1"), pos("A3")));
    assert!(!is_adjacent(pos("E5"), pos("A5")));
}

// =============================================================================
// Scoring
// =============================================================================

/// Test final results: single winner, tie, nobody scored.
#[test]
fn test_game_results() {
    let rules = Rules::default();
    let mut rubis = RubisDeck::shuffled(&mut GameRng::new(4));
    let tokens: Vec<_> = std::iter::from_fn(|| rubis.draw()).collect();
    assert_eq!(tokens.iter().map(|r| u32::from(r.value())).sum::<u32>(), 14);

    let mut state = state(3);
    assert_eq!(rules.result(&state), GameResult::Draw);

    state.award(PlayerId::new(2), tokens[0]);
    assert_eq!(rules.result(&state), GameResult::Winner(PlayerId::new(2)));
    assert_eq!(rules.standings(&state)[0], PlayerId::new(2));

    state.award(PlayerId::new(0), tokens[0]);
    let result = rules.result(&state);
    assert_eq!(result, GameResult::Winners(vec![PlayerId::new(0), PlayerId::new(2)]));
    assert!(result.is_winner(PlayerId::new(0)));
    assert!(!result.is_winner(PlayerId::new(1)));
    assert_eq!(
        rules.standings(&state),
        vec![PlayerId::new(0), PlayerId::new(2), PlayerId::new(1)]
    );
}

// =============================================================================
// End to end
// =============================================================================

/// Catalog order with A2 = Crab/Blue and B1 = Penguin/Green.
fn scenario_board() -> Board {
    let mut cards: Vec<Card> = Card::catalog().collect();
    cards.swap(1, 3);
    cards.swap(5, 6);
    Board::from_cards(cards).unwrap()
}

/// Test a round played straight on the state: a mismatch on the third
/// reveal eliminates the revealer and the other player takes the token.
#[test]
fn test_mismatch_ends_round() {
    let rules = Rules::default();
    let mut state = GameState::with_players(
        scenario_board(),
        [Player::new("Ana", Side::Top), Player::new("Ben", Side::Bottom)],
    )
    .unwrap();
    let (ana, ben) = (PlayerId::new(0), PlayerId::new(1));
    state.next_round();

    let first = state.reveal(ana, pos("A1")).unwrap();
    assert_eq!(first, Card::new(Animal::Crab, Background::Red));
    assert!(rules.is_valid(&state));

    state.reveal(ana, pos("A2")).unwrap();
    assert!(rules.is_valid(&state));

    state.reveal(ana, pos("B1")).unwrap();
    assert_eq!(state.previous_card(), Some(Card::new(Animal::Crab, Background::Blue)));
    assert_eq!(state.current_card(), Some(Card::new(Animal::Penguin, Background::Green)));
    assert!(!rules.is_valid(&state));

    state.set_player_active(ana, false);
    assert!(rules.round_over(&state));
    let winner = rules.round_winner(&state).unwrap();
    assert_eq!(winner, ben);

    let mut rubis = RubisDeck::shuffled(&mut GameRng::new(9));
    let token = rubis.draw().unwrap();
    state.award(winner, token);

    assert_eq!(state.player(ben).unwrap().rubis(), u32::from(token.value()));
    assert_eq!(state.player(ana).unwrap().rubis(), 0);
    assert_eq!(state.reveal_log().len(), 3);
    assert!(state.reveal_log().iter().all(|record| record.player == ana));
}
