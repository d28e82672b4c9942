//! Display glyphs and colours shared by tiles, entities, and player messages.

use crate::types::Colour;

pub const GROUND_CHARACTER: char = '.';
pub const WALL_CHARACTER: char = '#';

pub const LIGHT_WALL: Colour = Colour::rgb(130, 110, 50);
pub const DARK_WALL: Colour = Colour::rgb(0, 0, 100);
pub const LIGHT_GROUND: Colour = Colour::rgb(200, 180, 50);
pub const DARK_GROUND: Colour = Colour::rgb(50, 50, 150);

pub const DESATURATED_GREEN: Colour = Colour::rgb(63, 127, 63);
pub const LIGHT_BLUE: Colour = Colour::rgb(115, 115, 255);
pub const ORANGE: Colour = Colour::rgb(255, 127, 0);
pub const VIOLET: Colour = Colour::rgb(127, 0, 255);
pub const LIGHT_YELLOW: Colour = Colour::rgb(255, 255, 115);
pub const LIGHT_GREEN: Colour = Colour::rgb(115, 255, 115);
pub const WHITE: Colour = Colour::rgb(255, 255, 255);
