//! Room placement and tunnel carving for the base dungeon topology.

use crate::config::DungeonConfig;
use crate::dice::Dice;
use crate::state::AreaMap;
use crate::types::Pos;

use super::model::{GenerationError, PlayerSpawn};
use super::rect::RoomRect;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct RoomLayout {
    pub(super) rooms: Vec<RoomRect>,
    pub(super) player_start: Pos,
    pub(super) target_rooms: u32,
    pub(super) attempts: u32,
    pub(super) tunnels: u32,
}

pub(super) fn fill_with_walls(area_map: &mut AreaMap) {
    for tile in &mut area_map.tiles {
        tile.convert_to_wall();
    }
}

/// Places exactly the sampled number of non-intersecting rooms, chaining each new room to the
/// previous one with an L-shaped tunnel. A rejected candidate does not use up a room slot; only
/// `max_room_attempts` bounds the search.
pub(super) fn place_rooms(
    area_map: &mut AreaMap,
    dungeon: &DungeonConfig,
    dice: &mut Dice,
    player: &mut impl PlayerSpawn,
) -> Result<RoomLayout, GenerationError> {
    let map_width = area_map.width as i32;
    let map_height = area_map.height as i32;
    let target_rooms = dice.roll_range(dungeon.num_rooms);

    let mut rooms: Vec<RoomRect> = Vec::with_capacity(target_rooms as usize);
    let mut attempts = 0_u32;
    let mut tunnels = 0_u32;

    while (rooms.len() as u32) < target_rooms {
        if attempts >= dungeon.max_room_attempts {
            log::warn!(
                "room placement exhausted: {} of {} rooms after {} attempts",
                rooms.len(),
                target_rooms,
                attempts
            );
            return Err(GenerationError::RoomPlacementExhausted {
                placed: rooms.len() as u32,
                target: target_rooms,
                attempts,
            });
        }
        attempts += 1;

        let room_width = dice.roll_range(dungeon.room_size) as i32;
        let room_height = dice.roll_range(dungeon.room_size) as i32;
        let x = dice.roll(0, map_width - room_width - 1);
        let y = dice.roll(0, map_height - room_height - 1);
        let candidate = RoomRect::new(x, y, room_width, room_height);

        if rooms.iter().any(|existing_room| candidate.intersects(existing_room)) {
            continue;
        }

        carve_room(area_map, candidate);
        let new_center = candidate.center();

        match rooms.last() {
            None => player.place_player(new_center),
            Some(previous_room) => {
                let horizontal_first = dice.coin();
                carve_l_shaped_tunnel(
                    area_map,
                    previous_room.center(),
                    new_center,
                    horizontal_first,
                );
                tunnels += 1;
            }
        }

        log::debug!("room {} accepted at {:?} after {} attempts", rooms.len(), candidate, attempts);
        rooms.push(candidate);
    }

    // Validation guarantees at least one room.
    let player_start = rooms.first().map_or(Pos { y: 0, x: 0 }, |room| room.center());
    Ok(RoomLayout { rooms, player_start, target_rooms, attempts, tunnels })
}

pub(super) fn carve_room(area_map: &mut AreaMap, room: RoomRect) {
    for pos in room.interior() {
        if let Some(tile) = area_map.tile_mut(pos) {
            tile.convert_to_ground();
        }
    }
}

fn carve_l_shaped_tunnel(area_map: &mut AreaMap, previous: Pos, next: Pos, horizontal_first: bool) {
    if horizontal_first {
        carve_horizontal_tunnel(area_map, previous.x, next.x, previous.y);
        carve_vertical_tunnel(area_map, previous.y, next.y, next.x);
    } else {
        carve_vertical_tunnel(area_map, previous.y, next.y, previous.x);
        carve_horizontal_tunnel(area_map, previous.x, next.x, next.y);
    }
}

pub(super) fn carve_horizontal_tunnel(area_map: &mut AreaMap, x1: i32, x2: i32, y: i32) {
    for x in x1.min(x2)..=x1.max(x2) {
        if let Some(tile) = area_map.tile_mut(Pos { y, x }) {
            tile.convert_to_ground();
        }
    }
}

pub(super) fn carve_vertical_tunnel(area_map: &mut AreaMap, y1: i32, y2: i32, x: i32) {
    for y in y1.min(y2)..=y1.max(y2) {
        if let Some(tile) = area_map.tile_mut(Pos { y, x }) {
            tile.convert_to_ground();
        }
    }
}
