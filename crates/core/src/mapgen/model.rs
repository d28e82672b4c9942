//! Public data models for generation results, failures, and the player spawn sink.

use std::error::Error;
use std::fmt;

use crate::config::ConfigError;
use crate::types::Pos;

use super::rect::RoomRect;

/// Receives the player start chosen during generation.
pub trait PlayerSpawn {
    fn place_player(&mut self, pos: Pos);
}

impl PlayerSpawn for Pos {
    fn place_player(&mut self, pos: Pos) {
        *self = pos;
    }
}

impl PlayerSpawn for Option<Pos> {
    fn place_player(&mut self, pos: Pos) {
        *self = Some(pos);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationReport {
    /// Accepted rooms in acceptance order.
    pub rooms: Vec<RoomRect>,
    pub player_start: Pos,
    pub target_rooms: u32,
    pub room_attempts: u32,
    pub tunnels: u32,
    pub monsters_target: u32,
    pub monsters_placed: u32,
    pub items_target: u32,
    pub items_placed: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    InvalidConfig(ConfigError),
    /// The largest configured room plus its far wall does not fit in the map.
    MapTooSmall { width: usize, height: usize, largest_room: u32 },
    /// Room placement gave up after `attempts` candidates. Tiles already carved stay carved.
    RoomPlacementExhausted { placed: u32, target: u32, attempts: u32 },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(e) => write!(f, "invalid dungeon config: {e}"),
            Self::MapTooSmall { width, height, largest_room } => {
                write!(f, "{width}x{height} map cannot hold rooms of size {largest_room}")
            }
            Self::RoomPlacementExhausted { placed, target, attempts } => write!(
                f,
                "placed only {placed} of {target} rooms after {attempts} attempts; \
                 room count or size is too large for the map"
            ),
        }
    }
}

impl Error for GenerationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidConfig(e) => Some(e),
            Self::MapTooSmall { .. } | Self::RoomPlacementExhausted { .. } => None,
        }
    }
}

impl From<ConfigError> for GenerationError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidConfig(e)
    }
}
