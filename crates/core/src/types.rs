use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct EntityId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Reference to the callback an item runs when used. Executing it belongs to the
/// item-use layer; generation only records which one an item carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UseEffect {
    Heal,
    Lightning,
    Fireball,
    Confuse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnemyData {
    pub max_hp: i32,
    pub defense: i32,
    pub power: i32,
    pub xp: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StunState {
    pub remaining_turns: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ai {
    #[default]
    Basic,
    Stunned(StunState),
}

impl Ai {
    pub fn stun(&self) -> Option<&StunState> {
        match self {
            Self::Stunned(state) => Some(state),
            Self::Basic => None,
        }
    }

    pub fn is_stunned(&self) -> bool {
        self.stun().is_some()
    }

    /// Consumes one stunned turn. Returns `true` when the stun ran out on this turn and the
    /// monster went back to its basic behaviour.
    pub fn take_stunned_turn(&mut self) -> bool {
        let Self::Stunned(state) = self else {
            return false;
        };
        state.remaining_turns = state.remaining_turns.saturating_sub(1);
        if state.remaining_turns == 0 {
            *self = Self::Basic;
            return true;
        }
        false
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Monster { data: EnemyData, ai: Ai },
    Item { use_effect: UseEffect },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    pub pos: Pos,
    pub glyph: char,
    pub name: String,
    pub colour: Colour,
    pub kind: EntityKind,
}

impl Entity {
    pub fn is_monster(&self) -> bool {
        matches!(self.kind, EntityKind::Monster { .. })
    }

    pub fn is_item(&self) -> bool {
        matches!(self.kind, EntityKind::Item { .. })
    }

    pub fn ai(&self) -> Option<&Ai> {
        match &self.kind {
            EntityKind::Monster { ai, .. } => Some(ai),
            EntityKind::Item { .. } => None,
        }
    }

    pub fn ai_mut(&mut self) -> Option<&mut Ai> {
        match &mut self.kind {
            EntityKind::Monster { ai, .. } => Some(ai),
            EntityKind::Item { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stunned_ai_reverts_to_basic_when_turns_run_out() {
        let mut ai = Ai::Stunned(StunState { remaining_turns: 2 });

        assert!(!ai.take_stunned_turn());
        assert_eq!(ai.stun(), Some(&StunState { remaining_turns: 1 }));
        assert!(ai.take_stunned_turn());
        assert_eq!(ai, Ai::Basic);
        assert!(!ai.take_stunned_turn());
    }
}
