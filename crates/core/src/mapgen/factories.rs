//! Entity construction for generated monsters and items.

use crate::types::{Ai, Colour, EnemyData, Entity, EntityKind, Pos, UseEffect};

pub fn create_monster(data: EnemyData, pos: Pos, colour: Colour, name: &str) -> Entity {
    Entity {
        pos,
        glyph: name.chars().next().unwrap_or('?'),
        name: name.to_string(),
        colour,
        kind: EntityKind::Monster { data, ai: Ai::Basic },
    }
}

pub fn create_item(
    pos: Pos,
    glyph: char,
    name: &str,
    colour: Colour,
    use_effect: UseEffect,
) -> Entity {
    Entity { pos, glyph, name: name.to_string(), colour, kind: EntityKind::Item { use_effect } }
}
