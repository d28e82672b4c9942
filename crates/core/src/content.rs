use crate::palette;
use crate::types::{Colour, EnemyData, UseEffect};

pub mod keys {
    pub const SPECIES_BUSHSLIME: &str = "bushslime";
    pub const SPECIES_STEELHAWK: &str = "steelhawk";
    pub const SPECIES_TIGERSLASH: &str = "tigerslash";

    pub const ITEM_HEALING_POTION: &str = "healing potion";
    pub const ITEM_LIGHTNING_SCROLL: &str = "scroll of lightning bolt";
    pub const ITEM_FIREBALL_SCROLL: &str = "scroll of fireball";
    pub const ITEM_CONFUSION_SCROLL: &str = "scroll of confusion";
}

pub const ALL_SPECIES: [&str; 3] =
    [keys::SPECIES_BUSHSLIME, keys::SPECIES_STEELHAWK, keys::SPECIES_TIGERSLASH];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Species {
    pub name: &'static str,
    pub colour: Colour,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemTemplate {
    pub glyph: char,
    pub name: &'static str,
    pub colour: Colour,
    pub use_effect: UseEffect,
}

pub const BUSHSLIME: Species =
    Species { name: keys::SPECIES_BUSHSLIME, colour: palette::DESATURATED_GREEN };
pub const STEELHAWK: Species = Species { name: keys::SPECIES_STEELHAWK, colour: palette::LIGHT_BLUE };
pub const TIGERSLASH: Species = Species { name: keys::SPECIES_TIGERSLASH, colour: palette::ORANGE };

pub const HEALING_POTION: ItemTemplate = ItemTemplate {
    glyph: '!',
    name: keys::ITEM_HEALING_POTION,
    colour: palette::VIOLET,
    use_effect: UseEffect::Heal,
};
pub const LIGHTNING_SCROLL: ItemTemplate = ItemTemplate {
    glyph: '#',
    name: keys::ITEM_LIGHTNING_SCROLL,
    colour: palette::LIGHT_YELLOW,
    use_effect: UseEffect::Lightning,
};
pub const FIREBALL_SCROLL: ItemTemplate = ItemTemplate {
    glyph: '#',
    name: keys::ITEM_FIREBALL_SCROLL,
    colour: palette::LIGHT_YELLOW,
    use_effect: UseEffect::Fireball,
};
pub const CONFUSION_SCROLL: ItemTemplate = ItemTemplate {
    glyph: '#',
    name: keys::ITEM_CONFUSION_SCROLL,
    colour: palette::LIGHT_YELLOW,
    use_effect: UseEffect::Confuse,
};

/// Stat records shipped with the game for each species, used when no config file overrides them.
pub fn default_enemy_data(species: &str) -> Option<EnemyData> {
    match species {
        keys::SPECIES_BUSHSLIME => Some(EnemyData { max_hp: 10, defense: 0, power: 3, xp: 35 }),
        keys::SPECIES_STEELHAWK => Some(EnemyData { max_hp: 12, defense: 1, power: 4, xp: 60 }),
        keys::SPECIES_TIGERSLASH => Some(EnemyData { max_hp: 16, defense: 1, power: 5, xp: 100 }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_species_has_default_stats() {
        for species in ALL_SPECIES {
            assert!(default_enemy_data(species).is_some(), "missing stats for {species}");
        }
        assert_eq!(default_enemy_data("dragon"), None);
    }
}
