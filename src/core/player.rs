//! Player identification and per-seat state.
//!
//! ## PlayerId
//!
//! Seat index in join order. The first player added is `PlayerId(0)`.
//!
//! ## Player
//!
//! Name, side of the board, whether the player is still in the current
//! round, and the rubis collected so far.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Rubis;

/// Seat identifier, 0-based in the order players joined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Side of the board a player sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// Seating order used when players join without choosing a side.
    pub const SEATING: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        };
        f.write_str(name)
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    side: Side,
    active: bool,
    rubis: u32,
}

impl Player {
    /// Create an active player with no rubis.
    pub fn new(name: impl Into<String>, side: Side) -> Self {
        Self {
            name: name.into(),
            side,
            active: true,
            rubis: 0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Still in the current round?
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Total value of the rubis collected.
    #[must_use]
    pub fn rubis(&self) -> u32 {
        self.rubis
    }

    /// Take ownership of a reward token.
    pub fn add_rubis(&mut self, rubis: Rubis) {
        self.rubis += u32::from(rubis.value());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p1), "Player 1");
    }

    #[test]
    fn test_new_player_is_active_without_rubis() {
        let player = Player::new("Ana", Side::Left);
        assert_eq!(player.name(), "Ana");
        assert_eq!(player.side(), Side::Left);
        assert!(player.is_active());
        assert_eq!(player.rubis(), 0);
    }

    #[test]
    fn test_rubis_accumulate() {
        let mut player = Player::new("Ana", Side::Top);
        player.add_rubis(Rubis::new(3));
        player.add_rubis(Rubis::new(1));
        assert_eq!(player.rubis(), 4);
    }

    #[test]
    fn test_side_display() {
        let names: Vec<_> = Side::SEATING.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["top", "bottom", "left", "right"]);
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::new("Ana", Side::Right);
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
