//! Player-side resources layered over the shared combatant model
//!
//! Composition instead of inheritance: the player is a [`Combatant`] plus
//! the things only a player has: a role, a mana pool, and a potion belt.

use serde::{Deserialize, Serialize};

use crate::combatant::Combatant;
use crate::role::Role;

/// Potions carried into the encounter
pub const STARTING_POTIONS: u32 = 3;
/// HP restored per potion
pub const POTION_HEAL: i32 = 40;
/// Mana regained at the start of each player turn
pub const MANA_REGEN_PER_TURN: i32 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub combatant: Combatant,
    pub role: Role,
    pub max_mana: i32,
    pub mana: i32,
    pub potions: u32,
}

impl Player {
    /// Create a player of the given role with its starting stat block
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        let stats = role.stats();
        Self {
            combatant: Combatant::new(name, stats.hp, stats.attack, stats.defense),
            role,
            max_mana: stats.mana,
            mana: stats.mana,
            potions: STARTING_POTIONS,
        }
    }

    /// Start-of-turn mana regeneration, capped at max
    pub fn regenerate_mana(&mut self) {
        self.mana = (self.mana + MANA_REGEN_PER_TURN).min(self.max_mana);
    }
}
