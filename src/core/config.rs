//! Game configuration.
//!
//! A game is configured at startup with:
//! - `Variant`: which version of the rules and display to use
//! - the player names, seated in join order (top, bottom, left, right)
//! - an optional seed for reproducible deals
//!
//! The number of rounds is not configurable; see `rules::ROUNDS_PER_GAME`.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use super::player::{Player, Side};

/// Fewest players a game can seat.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game can seat (one per side).
pub const MAX_PLAYERS: usize = 4;

/// Game version chosen at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    /// Plain rules, full grid display.
    #[default]
    Base,
    /// Plain rules, compact display listing only revealed cards.
    ExpertDisplay,
    /// Card effects enabled, full grid display.
    ExpertRules,
}

impl Variant {
    /// Do revealed cards trigger their animal's effect?
    #[must_use]
    pub fn expert_rules(self) -> bool {
        self == Variant::ExpertRules
    }

    /// Render only the revealed cards instead of the whole grid?
    #[must_use]
    pub fn expert_display(self) -> bool {
        self == Variant::ExpertDisplay
    }
}

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use memoarr::core::{GameConfig, Variant};
///
/// let config = GameConfig::new(["Ana", "Ben", "Cy"])
///     .with_variant(Variant::ExpertRules)
///     .with_seed(7);
///
/// let players = config.players().unwrap();
/// assert_eq!(players.len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rules and display version.
    pub variant: Variant,

    /// Player names in seating order.
    pub player_names: Vec<String>,

    /// Seed for the card deck and rubis pool. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a base-rules configuration for the given players.
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            variant: Variant::default(),
            player_names: names.into_iter().map(Into::into).collect(),
            seed: None,
        }
    }

    /// Set the game variant.
    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Fix the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the player count.
    pub fn validate(&self) -> Result<()> {
        let count = self.player_names.len();
        if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            Ok(())
        } else {
            Err(GameError::InvalidPlayerCount(count))
        }
    }

    /// Players seated on the sides in `Side::SEATING` order.
    pub fn players(&self) -> Result<Vec<Player>> {
        self.validate()?;
        Ok(self
            .player_names
            .iter()
            .zip(Side::SEATING)
            .map(|(name, side)| Player::new(name.clone(), side))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new(["Ana", "Ben"]);
        assert_eq!(config.variant, Variant::Base);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_player_count_bounds() {
        assert_eq!(
            GameConfig::new(["Solo"]).validate(),
            Err(GameError::InvalidPlayerCount(1))
        );
        assert_eq!(
            GameConfig::new(["A", "B", "C", "D", "E"]).validate(),
            Err(GameError::InvalidPlayerCount(5))
        );
        assert!(GameConfig::new(["A", "B", "C", "D"]).validate().is_ok());
    }

    #[test]
    fn test_players_take_sides_in_order() {
        let players = GameConfig::new(["A", "B", "C", "D"]).players().unwrap();
        let sides: Vec<_> = players.iter().map(Player::side).collect();
        assert_eq!(sides, Side::SEATING);
    }

    #[test]
    fn test_variant_flags() {
        assert!(!Variant::Base.expert_rules());
        assert!(!Variant::Base.expert_display());
        assert!(Variant::ExpertRules.expert_rules());
        assert!(!Variant::ExpertRules.expert_display());
        assert!(Variant::ExpertDisplay.expert_display());
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new(["Ana", "Ben"])
            .with_variant(Variant::ExpertDisplay)
            .with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
