//! Text snapshots of a game.
//!
//! Two board layouts:
//! - `RenderMode::FullGrid`: the whole 5x5 grid, 19x19 characters, each
//!   card a 3x3 block, hidden cards drawn as `z`, row letters on the left
//!   and column numbers underneath
//! - `RenderMode::Compact`: only the revealed cards, side by side, with
//!   their positions underneath
//!
//! Card faces use the glyphs of `Animal::glyph` and `Background::glyph`.

use std::fmt::Write;

use crate::board::{Board, GRID_SIZE};
use crate::cards::Card;
use crate::core::{GameState, Player, Position};

/// Glyph for a face-down card.
pub const HIDDEN_GLYPH: char = 'z';

/// Characters per card cell plus its gutter.
const CELL: usize = Card::ROWS + 1;

/// Width and height of the full grid in characters.
pub const GRID_CHARS: usize = GRID_SIZE * CELL - 1;

/// Where the game's text output goes.
pub trait Renderer {
    fn show(&mut self, text: &str);
}

/// How the board is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    #[default]
    FullGrid,
    Compact,
}

/// Board followed by one line per player.
#[must_use]
pub fn snapshot(state: &GameState, mode: RenderMode) -> String {
    let mut out = match mode {
        RenderMode::FullGrid => full_grid(state.board()),
        RenderMode::Compact => compact(state.board()),
    };
    out.push('\n');
    for player in state.players() {
        let _ = writeln!(out, "{}", player_line(player, false));
    }
    out
}

/// The whole grid with margins.
#[must_use]
pub fn full_grid(board: &Board) -> String {
    let mut out = String::new();

    for y in 0..GRID_CHARS {
        let mut line = String::with_capacity(GRID_CHARS + 2);
        let letter = (y % CELL == 1).then(|| (b'A' + (y / CELL) as u8) as char);
        line.push(letter.unwrap_or(' '));
        line.push(' ');

        for x in 0..GRID_CHARS {
            line.push(grid_char(board, x, y));
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }

    let mut legend = String::from("  ");
    for number in 1..=GRID_SIZE {
        let _ = write!(legend, " {number}  ");
    }
    let _ = writeln!(out, "{}", legend.trim_end());
    out
}

/// Character at (`x`, `y`) of the 19x19 grid.
fn grid_char(board: &Board, x: usize, y: usize) -> char {
    let (sub_x, sub_y) = (x % CELL, y % CELL);
    if sub_x == Card::ROWS || sub_y == Card::ROWS {
        return ' ';
    }

    let Some(pos) = Position::from_indices(y / CELL, x / CELL).filter(|p| !p.is_center()) else {
        return ' ';
    };

    match (board.is_face_up(pos), board.card(pos)) {
        (Ok(true), Ok(card)) => card.pattern_row(sub_y).map_or(' ', |row| row[sub_x]),
        _ => HIDDEN_GLYPH,
    }
}

/// Revealed cards only.
#[must_use]
pub fn compact(board: &Board) -> String {
    let revealed: Vec<(Position, Card)> = board.face_up_cards().collect();
    if revealed.is_empty() {
        return "No cards revealed yet.\n".to_string();
    }

    let mut out = String::new();
    for row in 0..Card::ROWS {
        let line: Vec<String> = revealed
            .iter()
            .filter_map(|(_, card)| card.pattern_row(row))
            .map(|glyphs| glyphs.iter().collect())
            .collect();
        let _ = writeln!(out, "{}", line.join(" "));
    }

    let positions: Vec<String> = revealed.iter().map(|(pos, _)| format!("{:<3}", pos.to_string())).collect();
    let _ = writeln!(out, "{}", positions.join(" ").trim_end());
    out
}

/// One player's status.
///
/// During play: side and whether still in the round. At the end of the
/// game: rubis collected.
#[must_use]
pub fn player_line(player: &Player, end_of_game: bool) -> String {
    if end_of_game {
        format!("{}: {} rubis", player.name(), player.rubis())
    } else if player.is_active() {
        format!("{}: {} (active)", player.name(), player.side())
    } else {
        format!("{}: {}", player.name(), player.side())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Player, PlayerId, Side};

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    fn board() -> Board {
        Board::from_cards(Card::catalog()).unwrap()
    }

    #[test]
    fn test_full_grid_hidden() {
        let grid = full_grid(&board());
        let lines: Vec<&str> = grid.lines().collect();

        assert_eq!(lines.len(), GRID_CHARS + 1);
        assert_eq!(lines[0], "  zzz zzz zzz zzz zzz");
        assert_eq!(lines[1], "A zzz zzz zzz zzz zzz");
        assert_eq!(lines[3], "");
        assert_eq!(lines[9], "C zzz zzz     zzz zzz");
        assert_eq!(lines[17], "E zzz zzz zzz zzz zzz");
        assert_eq!(lines[19], "   1   2   3   4   5");
    }

    #[test]
    fn test_full_grid_revealed_card() {
        let mut board = board();
        board.turn_face_up(pos("A2")).unwrap(); // Crab/Green

        let grid = full_grid(&board);
        let lines: Vec<&str> = grid.lines().collect();

        assert_eq!(lines[0], "  zzz GGG zzz zzz zzz");
        assert_eq!(lines[1], "A zzz GCG zzz zzz zzz");
        assert_eq!(lines[2], "  zzz GGG zzz zzz zzz");
    }

    #[test]
    fn test_compact_lists_revealed() {
        let mut board = board();
        assert_eq!(compact(&board), "No cards revealed yet.\n");

        board.turn_face_up(pos("E5")).unwrap(); // Walrus/Blue
        board.turn_face_up(pos("A1")).unwrap(); // Crab/Red

        assert_eq!(compact(&board), "RRR BBB\nRCR BWB\nRRR BBB\nA1  E5\n");
    }

    #[test]
    fn test_player_lines() {
        let mut player = Player::new("Ana", Side::Left);
        assert_eq!(player_line(&player, false), "Ana: left (active)");

        player.set_active(false);
        assert_eq!(player_line(&player, false), "Ana: left");
        assert_eq!(player_line(&player, true), "Ana: 0 rubis");
    }

    #[test]
    fn test_snapshot_appends_players() {
        let mut state = GameState::with_players(
            board(),
            [Player::new("Ana", Side::Top), Player::new("Ben", Side::Bottom)],
        )
        .unwrap();
        state.set_player_active(PlayerId::new(1), false);

        let text = snapshot(&state, RenderMode::Compact);
        assert_eq!(text, "No cards revealed yet.\n\nAna: top (active)\nBen: bottom\n");
    }
}
