pub mod config;
pub mod config_file;
pub mod content;
pub mod dice;
pub mod hash;
pub mod mapgen;
pub mod messages;
pub mod palette;
pub mod state;
pub mod types;
pub mod weapons;

pub use config::{ConfigError, GameConfig, PlacementBounds, RollRange};
pub use dice::Dice;
pub use hash::snapshot_hash;
pub use mapgen::{
    DungeonGenerator, GenerationError, GenerationReport, PlayerSpawn, RoomRect, generate_dungeon,
};
pub use messages::{Message, MessageLog, MessageSink};
pub use state::{AreaMap, Tile};
pub use types::*;
pub use weapons::Sword;
