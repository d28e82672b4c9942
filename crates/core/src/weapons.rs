//! Weapon side effects layered on top of combat.
//! Weapons never compute or deal damage; damage resolution happens elsewhere.

use crate::config::GameConfig;
use crate::dice::Dice;
use crate::messages::MessageSink;
use crate::palette;
use crate::types::{Ai, Entity, StunState};

/// A sword that sometimes leaves its target incapacitated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sword {
    pub stuns_enabled: bool,
    pub stuns_stack: bool,
    /// Percent chance, compared against a `0..=100` roll.
    pub stun_probability: u32,
    pub stun_turns: u32,
}

impl Sword {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            stuns_enabled: config.features.sword_stuns,
            stuns_stack: config.features.stuns_stack,
            stun_probability: config.weapons.sword_stun_probability,
            stun_turns: config.weapons.num_turns_stunned,
        }
    }

    /// Rolls for a stun against `target`. Returns `true` when the stun landed. Targets without
    /// an AI (items) are never affected.
    pub fn attack(
        &self,
        target: &mut Entity,
        dice: &mut Dice,
        messages: &mut impl MessageSink,
    ) -> bool {
        if !self.stuns_enabled || target.ai().is_none() {
            return false;
        }
        if i64::from(dice.roll(0, 100)) > i64::from(self.stun_probability) {
            return false;
        }

        let stun_turns = self.stun_turns;
        let stacks = self.stuns_stack;
        let Some(ai) = target.ai_mut() else {
            return false;
        };
        let stacked = match ai {
            Ai::Stunned(state) if stacks => {
                state.remaining_turns = state.remaining_turns.saturating_add(stun_turns);
                true
            }
            _ => false,
        };
        if !stacked {
            *ai = Ai::Stunned(StunState { remaining_turns: stun_turns });
        }

        messages.message(format!("{} looks incapacitated!", target.name), palette::LIGHT_GREEN);
        true
    }
}

impl Entity {
    /// Spends one of a stunned monster's turns. Returns `true` while the monster is still
    /// incapacitated (including the turn on which it recovers).
    pub fn recover_turn(&mut self, messages: &mut impl MessageSink) -> bool {
        let Some(ai) = self.ai_mut() else {
            return false;
        };
        if !ai.is_stunned() {
            return false;
        }
        if ai.take_stunned_turn() {
            messages
                .message(format!("{} is no longer incapacitated.", self.name), palette::WHITE);
        }
        true
    }
}
