//! Tunable parameters read from the game's JSON configuration.
//!
//! Keys use the camelCase spelling of the config file (`features.swordStuns`,
//! `weapons.numTurnsStunned`, `dungeon.numRooms`, ...). Every section falls back to its
//! defaults, so a file only needs the values it overrides.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::content::{ALL_SPECIES, default_enemy_data};
use crate::types::EnemyData;

/// Inclusive `min..=max` range sampled uniformly. Serialized as a `[min, max]` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct RollRange {
    pub min: u32,
    pub max: u32,
}

impl RollRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub const fn exactly(value: u32) -> Self {
        Self { min: value, max: value }
    }

    pub fn contains(self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl From<(u32, u32)> for RollRange {
    fn from((min, max): (u32, u32)) -> Self {
        Self { min, max }
    }
}

impl From<RollRange> for (u32, u32) {
    fn from(range: RollRange) -> Self {
        (range.min, range.max)
    }
}

/// Coordinate window used when scattering monsters and items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlacementBounds {
    /// Both coordinates drawn from `0..=width`, the game's historical behaviour. Rows past
    /// `height` and the column at `width` are off the map, so those draws are dropped.
    #[default]
    WidthSquare,
    /// `x` from `0..width`, `y` from `0..height`.
    MapBounds,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DungeonConfig {
    pub num_rooms: RollRange,
    pub room_size: RollRange,
    pub num_monsters: RollRange,
    pub num_items: RollRange,
    pub max_room_attempts: u32,
    pub placement_bounds: PlacementBounds,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            num_rooms: RollRange::new(15, 30),
            room_size: RollRange::new(6, 10),
            num_monsters: RollRange::new(30, 40),
            num_items: RollRange::new(10, 20),
            max_room_attempts: 50_000,
            placement_bounds: PlacementBounds::WidthSquare,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureToggles {
    pub sword_stuns: bool,
    pub stuns_stack: bool,
}

impl Default for FeatureToggles {
    fn default() -> Self {
        Self { sword_stuns: true, stuns_stack: true }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeaponConfig {
    /// Percent chance, compared against a `0..=100` roll.
    pub sword_stun_probability: u32,
    pub num_turns_stunned: u32,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self { sword_stun_probability: 20, num_turns_stunned: 2 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    pub dungeon: DungeonConfig,
    pub features: FeatureToggles,
    pub weapons: WeaponConfig,
    pub enemies: BTreeMap<String, EnemyData>,
}

impl Default for GameConfig {
    fn default() -> Self {
        let enemies = ALL_SPECIES
            .iter()
            .filter_map(|&species| {
                default_enemy_data(species).map(|data| (species.to_string(), data))
            })
            .collect();
        Self {
            dungeon: DungeonConfig::default(),
            features: FeatureToggles::default(),
            weapons: WeaponConfig::default(),
            enemies,
        }
    }
}

impl GameConfig {
    pub fn enemy(&self, species: &str) -> Option<&EnemyData> {
        self.enemies.get(species)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let dungeon = &self.dungeon;
        for (field, range) in [
            ("dungeon.numRooms", dungeon.num_rooms),
            ("dungeon.roomSize", dungeon.room_size),
            ("dungeon.numMonsters", dungeon.num_monsters),
            ("dungeon.numItems", dungeon.num_items),
        ] {
            if range.min > range.max {
                return Err(ConfigError::InvalidRange { field, min: range.min, max: range.max });
            }
        }
        if dungeon.num_rooms.min == 0 {
            return Err(ConfigError::NoRooms);
        }
        if dungeon.room_size.min < 2 {
            return Err(ConfigError::RoomTooSmall { min: dungeon.room_size.min });
        }
        if self.weapons.sword_stun_probability > 100 {
            return Err(ConfigError::InvalidProbability {
                value: self.weapons.sword_stun_probability,
            });
        }
        if let Some(species) = ALL_SPECIES.iter().find(|species| self.enemy(species).is_none()) {
            return Err(ConfigError::MissingEnemy { species: (*species).to_string() });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A `[min, max]` pair has `min > max`.
    InvalidRange { field: &'static str, min: u32, max: u32 },
    /// The first room hosts the player start, so at least one room is required.
    NoRooms,
    /// Rooms narrower than two tiles have no interior to carve or to hold their center.
    RoomTooSmall { min: u32 },
    InvalidProbability { value: u32 },
    MissingEnemy { species: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { field, min, max } => {
                write!(f, "{field} has min {min} greater than max {max}")
            }
            Self::NoRooms => write!(f, "dungeon.numRooms must allow at least one room"),
            Self::RoomTooSmall { min } => {
                write!(f, "dungeon.roomSize minimum {min} is below 2")
            }
            Self::InvalidProbability { value } => {
                write!(f, "weapons.swordStunProbability {value} is above 100")
            }
            Self::MissingEnemy { species } => write!(f, "enemies.{species} is not configured"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_ranges() {
        let config = GameConfig::default();
        assert_eq!(config.dungeon.num_rooms, RollRange::new(15, 30));
        assert_eq!(config.dungeon.room_size, RollRange::new(6, 10));
        assert_eq!(config.dungeon.num_monsters, RollRange::new(30, 40));
        assert_eq!(config.dungeon.num_items, RollRange::new(10, 20));
        assert_eq!(config.dungeon.placement_bounds, PlacementBounds::WidthSquare);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn partial_json_keeps_defaults_for_missing_keys() {
        let json = r#"{
            "features": { "stunsStack": false },
            "weapons": { "swordStunProbability": 100 },
            "dungeon": { "numRooms": [5, 5], "placementBounds": "mapBounds" }
        }"#;
        let config: GameConfig = serde_json::from_str(json).expect("config should parse");

        assert!(config.features.sword_stuns);
        assert!(!config.features.stuns_stack);
        assert_eq!(config.weapons.sword_stun_probability, 100);
        assert_eq!(config.weapons.num_turns_stunned, WeaponConfig::default().num_turns_stunned);
        assert_eq!(config.dungeon.num_rooms, RollRange::exactly(5));
        assert_eq!(config.dungeon.room_size, RollRange::new(6, 10));
        assert_eq!(config.dungeon.placement_bounds, PlacementBounds::MapBounds);
        assert!(config.enemy("steelhawk").is_some());
    }

    #[test]
    fn enemy_records_use_camel_case_keys() {
        let json = r#"{ "enemies": { "bushslime": { "maxHp": 3, "defense": 0, "power": 1, "xp": 5 } } }"#;
        let config: GameConfig = serde_json::from_str(json).expect("config should parse");
        assert_eq!(config.enemy("bushslime").map(|data| data.max_hp), Some(3));
        assert_eq!(
            config.validate(),
            Err(ConfigError::MissingEnemy { species: "steelhawk".to_string() })
        );
    }

    #[test]
    fn validate_rejects_inverted_ranges() {
        let mut config = GameConfig::default();
        config.dungeon.num_items = RollRange::new(9, 3);
        let err = config.validate().expect_err("inverted range should be rejected");
        assert_eq!(err, ConfigError::InvalidRange { field: "dungeon.numItems", min: 9, max: 3 });
        assert!(err.to_string().contains("dungeon.numItems"));
    }

    #[test]
    fn validate_requires_at_least_one_room() {
        let mut config = GameConfig::default();
        config.dungeon.num_rooms = RollRange::new(0, 3);
        assert_eq!(config.validate(), Err(ConfigError::NoRooms));
    }

    #[test]
    fn validate_rejects_rooms_without_interior() {
        let mut config = GameConfig::default();
        config.dungeon.room_size = RollRange::new(1, 4);
        assert_eq!(config.validate(), Err(ConfigError::RoomTooSmall { min: 1 }));
    }
}
