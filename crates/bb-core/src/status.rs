//! Status effects: apply, tick, expire
//!
//! Each combatant carries a table of active effects, one entry per effect,
//! each with a positive remaining-turn counter. The table is processed once
//! at the start of the owner's turn, in a fixed priority order.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::combatant::Combatant;
use crate::event::{BattleEvent, EventSink};

/// Named, duration-limited modifier on a combatant
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum StatusEffect {
    Poison,
    Burning,
    Stunned,
    Cursed,
    Intimidated,
    Entangled,
}

impl StatusEffect {
    /// Tick processing order. Stunned short-circuits: everything after it in
    /// this list is skipped for the turn it fires on.
    pub const PRIORITY: [StatusEffect; 6] = [
        StatusEffect::Poison,
        StatusEffect::Burning,
        StatusEffect::Stunned,
        StatusEffect::Cursed,
        StatusEffect::Intimidated,
        StatusEffect::Entangled,
    ];

    /// Flat HP lost per tick. Bypasses crit and defense entirely.
    pub const fn tick_damage(&self) -> i32 {
        match self {
            StatusEffect::Poison => 5,
            StatusEffect::Burning => 4,
            _ => 0,
        }
    }

    /// Attack restored when the effect wears off.
    ///
    /// Hard-coded inverse of the penalty the inflicting ability applied, not
    /// derived from it. Safe because application never stacks or refreshes.
    pub const fn attack_restore(&self) -> i32 {
        match self {
            StatusEffect::Cursed => 5,
            StatusEffect::Intimidated => 4,
            _ => 0,
        }
    }

    /// Lowercase name for prose messages
    pub const fn name(&self) -> &'static str {
        match self {
            StatusEffect::Poison => "poison",
            StatusEffect::Burning => "burning",
            StatusEffect::Stunned => "stunned",
            StatusEffect::Cursed => "cursed",
            StatusEffect::Intimidated => "intimidated",
            StatusEffect::Entangled => "entangled",
        }
    }
}

/// Active effects for one combatant
///
/// Entries are unique per effect and always hold a positive counter; an
/// entry is removed the instant its counter reaches zero, so zero is never
/// observable from outside.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTable {
    entries: Vec<(StatusEffect, u8)>,
}

impl StatusTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, effect: StatusEffect) -> bool {
        self.entries.iter().any(|(e, _)| *e == effect)
    }

    /// Remaining turns for an active effect
    pub fn remaining(&self, effect: StatusEffect) -> Option<u8> {
        self.entries
            .iter()
            .find(|(e, _)| *e == effect)
            .map(|(_, turns)| *turns)
    }

    /// Record an effect. Returns false without touching the table when the
    /// effect is already active (durations never refresh) or `turns` is zero.
    pub fn apply(&mut self, effect: StatusEffect, turns: u8) -> bool {
        if turns == 0 || self.contains(effect) {
            return false;
        }
        self.entries.push((effect, turns));
        true
    }

    /// Iterate active effects with their remaining turns (UI snapshots)
    pub fn iter(&self) -> impl Iterator<Item = (StatusEffect, u8)> + '_ {
        self.entries.iter().copied()
    }

    /// Decrement an active effect by one turn, removing it at zero.
    /// Returns the remaining count after the tick.
    fn tick(&mut self, effect: StatusEffect) -> u8 {
        let idx = self
            .entries
            .iter()
            .position(|(e, _)| *e == effect)
            .expect("ticked effect must be active");
        self.entries[idx].1 -= 1;
        let left = self.entries[idx].1;
        if left == 0 {
            self.entries.remove(idx);
        }
        left
    }
}

/// Apply `effect` to `who` unless it is already active, notifying on success.
/// Durations never refresh; only the first application counts.
pub fn try_apply_status(
    who: &mut Combatant,
    effect: StatusEffect,
    turns: u8,
    sink: &mut dyn EventSink,
) -> bool {
    if who.statuses.apply(effect, turns) {
        sink.notify(BattleEvent::StatusApplied {
            target: who.name.clone(),
            effect,
            duration: turns,
        });
        true
    } else {
        false
    }
}

/// Tick the active combatant's statuses at the start of their turn.
///
/// Effects run in [`StatusEffect::PRIORITY`] order, each decrementing by
/// exactly one. An active stun decrements itself, suppresses every effect
/// after it in the order for this call, and returns `true`: the caller must
/// end the turn without an action. Expiring Cursed/Intimidated hand back the
/// attack they took. Entangled carries no behavior beyond its notifications.
pub fn process_status_effects(who: &mut Combatant, sink: &mut dyn EventSink) -> bool {
    for effect in StatusEffect::PRIORITY {
        if !who.statuses.contains(effect) {
            continue;
        }

        let damage = effect.tick_damage();
        if damage > 0 {
            sink.notify(BattleEvent::Message(format!(
                "{} takes {} damage from {}!",
                who.name,
                damage,
                effect.name()
            )));
            who.lose_hp(damage);
        }

        let left = who.statuses.tick(effect);
        if left == 0 {
            let restore = effect.attack_restore();
            if restore > 0 {
                who.attack += restore;
            }
            sink.notify(BattleEvent::StatusExpired {
                target: who.name.clone(),
                effect,
            });
        }

        if effect == StatusEffect::Stunned {
            sink.notify(BattleEvent::Message(format!(
                "{} is stunned and cannot act!",
                who.name
            )));
            return true;
        }
    }
    false
}
