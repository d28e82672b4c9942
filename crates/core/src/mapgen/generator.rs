//! High-level dungeon generation orchestration that composes layout and population.

use crate::config::GameConfig;
use crate::dice::Dice;
use crate::state::AreaMap;

use super::layout::{fill_with_walls, place_rooms};
use super::model::{GenerationError, GenerationReport, PlayerSpawn};
use super::spawns::populate;

pub struct DungeonGenerator<'a> {
    config: &'a GameConfig,
    dice: Dice,
}

impl<'a> DungeonGenerator<'a> {
    pub fn new(config: &'a GameConfig, seed: u64) -> Self {
        Self { config, dice: Dice::from_seed(seed) }
    }

    /// Rebuilds `area_map` in place: walls everywhere, then rooms and tunnels, then monsters and
    /// items. Entities already on the map are kept; generation only appends.
    pub fn generate(
        &mut self,
        area_map: &mut AreaMap,
        player: &mut impl PlayerSpawn,
    ) -> Result<GenerationReport, GenerationError> {
        self.config.validate()?;
        let largest_room = self.config.dungeon.room_size.max;
        let room_span = largest_room as usize + 1;
        if room_span > area_map.width || room_span > area_map.height {
            return Err(GenerationError::MapTooSmall {
                width: area_map.width,
                height: area_map.height,
                largest_room,
            });
        }

        fill_with_walls(area_map);
        let layout = place_rooms(area_map, &self.config.dungeon, &mut self.dice, player)?;
        let population = populate(area_map, self.config, &mut self.dice);

        Ok(GenerationReport {
            rooms: layout.rooms,
            player_start: layout.player_start,
            target_rooms: layout.target_rooms,
            room_attempts: layout.attempts,
            tunnels: layout.tunnels,
            monsters_target: population.monsters_target,
            monsters_placed: population.monsters_placed,
            items_target: population.items_target,
            items_placed: population.items_placed,
        })
    }
}
