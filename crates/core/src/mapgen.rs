//! Procedural dungeon generation split into coherent submodules.

pub mod factories;
pub mod model;
pub mod rect;

mod generator;
mod layout;
mod spawns;

pub use generator::DungeonGenerator;
pub use model::{GenerationError, GenerationReport, PlayerSpawn};
pub use rect::RoomRect;

use crate::config::GameConfig;
use crate::state::AreaMap;

/// Builds a generator and runs it immediately.
pub fn generate_dungeon(
    config: &GameConfig,
    seed: u64,
    area_map: &mut AreaMap,
    player: &mut impl PlayerSpawn,
) -> Result<GenerationReport, GenerationError> {
    DungeonGenerator::new(config, seed).generate(area_map, player)
}
