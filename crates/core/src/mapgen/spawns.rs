//! Monster and item scattering over a carved map.

use crate::config::{GameConfig, PlacementBounds};
use crate::content::{self, ItemTemplate, Species};
use crate::dice::Dice;
use crate::state::AreaMap;
use crate::types::Pos;

use super::factories::{create_item, create_monster};

const MONSTER_ROLL_BUSHSLIME_THRESHOLD: i32 = 55;
const MONSTER_ROLL_STEELHAWK_THRESHOLD: i32 = 55 + 30;

const ITEM_ROLL_HEALING_THRESHOLD: i32 = 70;
const ITEM_ROLL_LIGHTNING_THRESHOLD: i32 = 70 + 10;
const ITEM_ROLL_FIREBALL_THRESHOLD: i32 = 70 + 10 + 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(super) struct PopulationSummary {
    pub(super) monsters_target: u32,
    pub(super) monsters_placed: u32,
    pub(super) items_target: u32,
    pub(super) items_placed: u32,
}

pub(super) fn populate(
    area_map: &mut AreaMap,
    config: &GameConfig,
    dice: &mut Dice,
) -> PopulationSummary {
    let (monsters_target, monsters_placed) = generate_monsters(area_map, config, dice);
    let (items_target, items_placed) = generate_items(area_map, config, dice);
    log::debug!(
        "population: {monsters_placed}/{monsters_target} monsters, {items_placed}/{items_target} items"
    );
    PopulationSummary { monsters_target, monsters_placed, items_target, items_placed }
}

/// Every monster gets one position draw; a draw that lands on a blocked or off-map tile drops
/// that monster.
fn generate_monsters(area_map: &mut AreaMap, config: &GameConfig, dice: &mut Dice) -> (u32, u32) {
    let target = dice.roll_range(config.dungeon.num_monsters);
    let mut placed = 0_u32;

    for _ in 0..target {
        let pos = sample_position(dice, config.dungeon.placement_bounds, area_map);
        if !area_map.is_walkable(pos.x, pos.y) {
            continue;
        }

        let species = species_for_roll(dice.roll(0, 100));
        let Some(data) = config.enemy(species.name) else {
            log::warn!("no enemy data configured for {}; monster dropped", species.name);
            continue;
        };
        area_map.add_entity(create_monster(*data, pos, species.colour, species.name));
        placed += 1;
    }

    (target, placed)
}

fn generate_items(area_map: &mut AreaMap, config: &GameConfig, dice: &mut Dice) -> (u32, u32) {
    let target = dice.roll_range(config.dungeon.num_items);
    let mut placed = 0_u32;

    for _ in 0..target {
        let pos = sample_position(dice, config.dungeon.placement_bounds, area_map);
        if !area_map.is_walkable(pos.x, pos.y) {
            continue;
        }

        let template = item_for_roll(dice.roll(0, 100));
        let item = create_item(
            pos,
            template.glyph,
            template.name,
            template.colour,
            template.use_effect,
        );
        let id = area_map.add_entity(item);
        area_map.send_to_back(id);
        placed += 1;
    }

    (target, placed)
}

pub(super) fn sample_position(dice: &mut Dice, bounds: PlacementBounds, area_map: &AreaMap) -> Pos {
    let width = area_map.width as i32;
    let height = area_map.height as i32;
    match bounds {
        PlacementBounds::WidthSquare => {
            let x = dice.roll(0, width);
            let y = dice.roll(0, width);
            Pos { y, x }
        }
        PlacementBounds::MapBounds => {
            let x = dice.roll(0, width - 1);
            let y = dice.roll(0, height - 1);
            Pos { y, x }
        }
    }
}

pub(super) fn species_for_roll(roll: i32) -> Species {
    if roll <= MONSTER_ROLL_BUSHSLIME_THRESHOLD {
        content::BUSHSLIME
    } else if roll <= MONSTER_ROLL_STEELHAWK_THRESHOLD {
        content::STEELHAWK
    } else {
        content::TIGERSLASH
    }
}

pub(super) fn item_for_roll(roll: i32) -> ItemTemplate {
    if roll < ITEM_ROLL_HEALING_THRESHOLD {
        content::HEALING_POTION
    } else if roll < ITEM_ROLL_LIGHTNING_THRESHOLD {
        content::LIGHTNING_SCROLL
    } else if roll < ITEM_ROLL_FIREBALL_THRESHOLD {
        content::FIREBALL_SCROLL
    } else {
        content::CONFUSION_SCROLL
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::config::RollRange;
    use crate::content::keys;
    use crate::types::UseEffect;

    fn config_with_counts(monsters: RollRange, items: RollRange) -> GameConfig {
        let mut config = GameConfig::default();
        config.dungeon.num_monsters = monsters;
        config.dungeon.num_items = items;
        config
    }

    #[test]
    fn species_thresholds_are_cumulative_and_inclusive() {
        let mut counts = BTreeMap::new();
        for roll in 0..=100 {
            *counts.entry(species_for_roll(roll).name).or_insert(0) += 1;
        }
        assert_eq!(counts[keys::SPECIES_BUSHSLIME], 56);
        assert_eq!(counts[keys::SPECIES_STEELHAWK], 30);
        assert_eq!(counts[keys::SPECIES_TIGERSLASH], 15);
        assert_eq!(species_for_roll(55), content::BUSHSLIME);
        assert_eq!(species_for_roll(85), content::STEELHAWK);
        assert_eq!(species_for_roll(86), content::TIGERSLASH);
    }

    #[test]
    fn item_thresholds_are_cumulative_and_exclusive() {
        assert_eq!(item_for_roll(69).use_effect, UseEffect::Heal);
        assert_eq!(item_for_roll(70).use_effect, UseEffect::Lightning);
        assert_eq!(item_for_roll(79).use_effect, UseEffect::Lightning);
        assert_eq!(item_for_roll(80).use_effect, UseEffect::Fireball);
        assert_eq!(item_for_roll(89).use_effect, UseEffect::Fireball);
        assert_eq!(item_for_roll(90).use_effect, UseEffect::Confuse);
        assert_eq!(item_for_roll(100).use_effect, UseEffect::Confuse);
        assert_eq!(item_for_roll(0).glyph, '!');
        assert_eq!(item_for_roll(95).glyph, '#');
    }

    #[test]
    fn species_distribution_follows_thresholds_over_many_rolls() {
        let mut dice = Dice::from_seed(31_337);
        let samples = 20_000;
        let mut bushslime = 0;
        let mut steelhawk = 0;
        let mut tigerslash = 0;
        for _ in 0..samples {
            match species_for_roll(dice.roll(0, 100)).name {
                keys::SPECIES_BUSHSLIME => bushslime += 1,
                keys::SPECIES_STEELHAWK => steelhawk += 1,
                _ => tigerslash += 1,
            }
        }
        let share = |count: i32| f64::from(count) / f64::from(samples);
        assert!((share(bushslime) - 0.55).abs() < 0.02, "bushslime share {}", share(bushslime));
        assert!((share(steelhawk) - 0.30).abs() < 0.02, "steelhawk share {}", share(steelhawk));
        assert!((share(tigerslash) - 0.15).abs() < 0.02, "tigerslash share {}", share(tigerslash));
    }

    #[test]
    fn single_monster_on_open_grid_lands_inside_width_square() {
        for seed in 0..50 {
            let mut area_map = AreaMap::new(30, 30);
            let config = config_with_counts(RollRange::exactly(1), RollRange::exactly(0));
            let mut dice = Dice::from_seed(seed);

            let summary = populate(&mut area_map, &config, &mut dice);

            assert_eq!(summary.monsters_target, 1);
            // Draws of exactly `width` fall off the square grid and drop the monster.
            assert!(summary.monsters_placed <= 1);
            assert_eq!(area_map.monsters().count() as u32, summary.monsters_placed);
            for monster in area_map.monsters() {
                assert!((0..=30).contains(&monster.pos.x) && (0..=30).contains(&monster.pos.y));
                assert!(area_map.is_walkable(monster.pos.x, monster.pos.y));
            }
        }
    }

    #[test]
    fn single_monster_on_open_grid_with_map_bounds_is_always_placed() {
        for seed in 0..50 {
            let mut area_map = AreaMap::new(30, 30);
            let mut config = config_with_counts(RollRange::exactly(1), RollRange::exactly(0));
            config.dungeon.placement_bounds = PlacementBounds::MapBounds;
            let mut dice = Dice::from_seed(seed);

            let summary = populate(&mut area_map, &config, &mut dice);

            assert_eq!(summary.monsters_target, 1);
            assert_eq!(summary.monsters_placed, 1, "seed {seed}");
            assert_eq!(area_map.monsters().count(), 1);
            assert_eq!(area_map.entities.len(), 1);
        }
    }

    #[test]
    fn width_square_bounds_sample_rows_past_height() {
        let area_map = AreaMap::new(40, 10);
        let mut dice = Dice::from_seed(8);
        let rows: Vec<i32> = (0..500)
            .map(|_| sample_position(&mut dice, PlacementBounds::WidthSquare, &area_map).y)
            .collect();
        assert!(rows.iter().all(|&y| (0..=40).contains(&y)));
        assert!(rows.iter().any(|&y| y >= 10), "rows should be bounded by width, not height");
    }

    #[test]
    fn map_bounds_keep_every_draw_on_the_map() {
        let area_map = AreaMap::new(40, 10);
        let mut dice = Dice::from_seed(8);
        for _ in 0..500 {
            let pos = sample_position(&mut dice, PlacementBounds::MapBounds, &area_map);
            assert!(area_map.in_bounds(pos), "{pos:?} should be on the map");
        }
    }

    #[test]
    fn items_are_drawn_beneath_monsters() {
        let mut area_map = AreaMap::new(20, 20);
        let mut config = config_with_counts(RollRange::exactly(10), RollRange::exactly(10));
        config.dungeon.placement_bounds = PlacementBounds::MapBounds;
        let mut dice = Dice::from_seed(21);

        let summary = populate(&mut area_map, &config, &mut dice);
        assert_eq!(summary.monsters_placed, 10);
        assert_eq!(summary.items_placed, 10);

        let drawn: Vec<bool> =
            area_map.entities_in_draw_order().map(|(_, entity)| entity.is_item()).collect();
        let first_monster = drawn.iter().position(|&is_item| !is_item).expect("monsters placed");
        assert!(drawn[..first_monster].iter().all(|&is_item| is_item));
        assert!(drawn[first_monster..].iter().all(|&is_item| !is_item));
    }

    #[test]
    fn missing_enemy_data_drops_only_that_species() {
        let mut area_map = AreaMap::new(20, 20);
        let mut config = config_with_counts(RollRange::exactly(40), RollRange::exactly(0));
        config.dungeon.placement_bounds = PlacementBounds::MapBounds;
        config.enemies.remove(keys::SPECIES_TIGERSLASH);
        let mut dice = Dice::from_seed(4);

        let summary = populate(&mut area_map, &config, &mut dice);
        assert!(summary.monsters_placed <= summary.monsters_target);
        assert!(area_map.monsters().all(|monster| monster.name != keys::SPECIES_TIGERSLASH));
    }
}
