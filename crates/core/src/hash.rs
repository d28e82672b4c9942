//! Stable snapshot hashing for deterministic verification of generated maps.
//! It covers tile states and entities in draw order, not display colours.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use crate::state::AreaMap;
use crate::types::{Ai, EntityKind, UseEffect};

pub fn snapshot_hash(area_map: &AreaMap) -> u64 {
    let mut hasher = Xxh3::new();
    hasher.write_u64(area_map.width as u64);
    hasher.write_u64(area_map.height as u64);
    for tile in &area_map.tiles {
        hasher.write_u8(u8::from(tile.is_walkable) | (u8::from(tile.block_sight) << 1));
        hasher.write_u32(u32::from(tile.character));
    }

    hasher.write_u64(area_map.draw_order().len() as u64);
    for (_, entity) in area_map.entities_in_draw_order() {
        hasher.write_i32(entity.pos.x);
        hasher.write_i32(entity.pos.y);
        hasher.write_u32(u32::from(entity.glyph));
        hasher.write(entity.name.as_bytes());
        match &entity.kind {
            EntityKind::Monster { data, ai } => {
                hasher.write_u8(0);
                hasher.write_i32(data.max_hp);
                hasher.write_i32(data.power);
                hasher.write_u32(match ai {
                    Ai::Basic => 0,
                    Ai::Stunned(state) => 1 + state.remaining_turns,
                });
            }
            EntityKind::Item { use_effect } => {
                hasher.write_u8(1);
                hasher.write_u8(match use_effect {
                    UseEffect::Heal => 0,
                    UseEffect::Lightning => 1,
                    UseEffect::Fireball => 2,
                    UseEffect::Confuse => 3,
                });
            }
        }
    }
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Pos;

    #[test]
    fn hash_changes_when_a_tile_changes() {
        let mut area_map = AreaMap::new(6, 6);
        let baseline = snapshot_hash(&area_map);
        assert_eq!(baseline, snapshot_hash(&area_map.clone()));

        if let Some(tile) = area_map.tile_mut(Pos { y: 2, x: 3 }) {
            tile.convert_to_wall();
        }
        assert_ne!(baseline, snapshot_hash(&area_map));
    }
}
