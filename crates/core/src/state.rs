use std::collections::{BTreeSet, VecDeque};

use slotmap::SlotMap;

use crate::palette;
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub is_walkable: bool,
    pub block_sight: bool,
    pub character: char,
    pub colour: Colour,
    pub dark_colour: Colour,
}

impl Tile {
    pub fn ground() -> Self {
        let mut tile = Self::wall();
        tile.convert_to_ground();
        tile
    }

    pub fn wall() -> Self {
        Self {
            is_walkable: false,
            block_sight: true,
            character: palette::WALL_CHARACTER,
            colour: palette::LIGHT_WALL,
            dark_colour: palette::DARK_WALL,
        }
    }

    pub fn convert_to_ground(&mut self) {
        self.is_walkable = true;
        self.block_sight = false;
        self.character = palette::GROUND_CHARACTER;
        self.colour = palette::LIGHT_GROUND;
        self.dark_colour = palette::DARK_GROUND;
    }

    pub fn convert_to_wall(&mut self) {
        self.is_walkable = false;
        self.block_sight = true;
        self.character = palette::WALL_CHARACTER;
        self.colour = palette::LIGHT_WALL;
        self.dark_colour = palette::DARK_WALL;
    }

    pub fn is_ground(&self) -> bool {
        *self == Self::ground()
    }

    pub fn is_wall(&self) -> bool {
        *self == Self::wall()
    }
}

/// Tile grid plus the entities standing on it.
///
/// Entities keep two views: the slot map owns them, and `draw_order` lists their ids from
/// bottom-most to top-most.
#[derive(Clone, Debug)]
pub struct AreaMap {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<Tile>,
    pub entities: SlotMap<EntityId, Entity>,
    draw_order: Vec<EntityId>,
}

impl AreaMap {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::ground(); width * height],
            entities: SlotMap::with_key(),
            draw_order: Vec::new(),
        }
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn tile(&self, pos: Pos) -> Option<&Tile> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(&self.tiles[self.index(pos)])
    }

    pub fn tile_mut(&mut self, pos: Pos) -> Option<&mut Tile> {
        if !self.in_bounds(pos) {
            return None;
        }
        let idx = self.index(pos);
        Some(&mut self.tiles[idx])
    }

    /// Out-of-bounds coordinates are never walkable.
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.tile(Pos { y, x }).is_some_and(|tile| tile.is_walkable)
    }

    pub fn add_entity(&mut self, entity: Entity) -> EntityId {
        let id = self.entities.insert(entity);
        self.draw_order.push(id);
        id
    }

    /// Moves an entity to the bottom of the draw order so everything else on its tile renders
    /// above it.
    pub fn send_to_back(&mut self, id: EntityId) {
        if let Some(position) = self.draw_order.iter().position(|&entry| entry == id) {
            self.draw_order.remove(position);
            self.draw_order.insert(0, id);
        }
    }

    pub fn draw_order(&self) -> &[EntityId] {
        &self.draw_order
    }

    pub fn entities_in_draw_order(&self) -> impl Iterator<Item = (EntityId, &Entity)> + '_ {
        self.draw_order.iter().filter_map(|&id| self.entities.get(id).map(|entity| (id, entity)))
    }

    pub fn monsters(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.entities.values().filter(|entity| entity.is_monster())
    }

    pub fn items(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.entities.values().filter(|entity| entity.is_item())
    }

    /// Walkable tiles connected to `start` through orthogonal steps, `start` included.
    pub fn reachable_from(&self, start: Pos) -> BTreeSet<Pos> {
        let mut seen = BTreeSet::new();
        if !self.is_walkable(start.x, start.y) {
            return seen;
        }
        seen.insert(start);
        let mut queue = VecDeque::from([start]);
        while let Some(pos) = queue.pop_front() {
            for (dy, dx) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                let next = Pos { y: pos.y + dy, x: pos.x + dx };
                if self.is_walkable(next.x, next.y) && seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}
