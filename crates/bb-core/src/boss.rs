//! Boss construction and decision policy
//!
//! The boss is an ordinary [`Combatant`]; everything AI lives here. Actions
//! are an ordered id/weight table selected by cumulative draw, and the
//! enrage flag is policy state, not combatant state.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::combatant::Combatant;
use crate::event::{BattleEvent, EventSink};
use crate::rng::BattleRng;

/// Fixed encounter stats
pub const BOSS_NAME: &str = "Gargantuan Hydra";
const BOSS_HP: i32 = 250;
const BOSS_ATTACK: i32 = 15;
const BOSS_DEFENSE: i32 = 5;

/// Enrage fires once, the first time HP drops under this fraction of max
const ENRAGE_HP_FRACTION: f64 = 0.3;
const ENRAGE_ATTACK_BONUS: i32 = 5;

/// The boss's three actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum BossAction {
    Stomp,
    DarkBreath,
    FrighteningRoar,
}

/// Ordered action table; weights sum to 1.0
pub const ACTION_TABLE: [(BossAction, f64); 3] = [
    (BossAction::Stomp, 0.5),
    (BossAction::DarkBreath, 0.3),
    (BossAction::FrighteningRoar, 0.2),
];

/// Create the fixed encounter boss
pub fn spawn_boss() -> Combatant {
    Combatant::new(BOSS_NAME, BOSS_HP, BOSS_ATTACK, BOSS_DEFENSE)
}

/// Cumulative-distribution draw over [`ACTION_TABLE`]
pub fn select_action(rng: &mut BattleRng) -> BossAction {
    let roll = rng.unit();
    let mut cumulative = 0.0;
    for (action, weight) in ACTION_TABLE {
        cumulative += weight;
        if roll < cumulative {
            return action;
        }
    }
    // Float accumulation can leave the total a hair under 1.0.
    ACTION_TABLE[ACTION_TABLE.len() - 1].0
}

/// Boss AI state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BossPolicy {
    enraged: bool,
}

impl BossPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enraged(&self) -> bool {
        self.enraged
    }

    /// Check the enrage threshold, then pick and execute one action against
    /// `target`. Returns the action taken.
    pub fn choose_action(
        &mut self,
        boss: &mut Combatant,
        target: &mut Combatant,
        rng: &mut BattleRng,
        sink: &mut dyn EventSink,
    ) -> BossAction {
        self.check_enrage(boss, sink);
        let action = select_action(rng);
        self.execute(action, boss, target, rng, sink);
        action
    }

    /// One-way transition below 30% HP; +5 attack applied exactly once
    pub fn check_enrage(&mut self, boss: &mut Combatant, sink: &mut dyn EventSink) {
        if !self.enraged && (boss.hp as f64) < boss.max_hp as f64 * ENRAGE_HP_FRACTION {
            self.enraged = true;
            boss.attack += ENRAGE_ATTACK_BONUS;
            sink.notify(BattleEvent::Message(format!(
                "{} becomes ENRAGED! Its attack power has increased!",
                boss.name
            )));
        }
    }

    fn execute(
        &self,
        action: BossAction,
        boss: &mut Combatant,
        target: &mut Combatant,
        rng: &mut BattleRng,
        sink: &mut dyn EventSink,
    ) {
        match action {
            BossAction::Stomp => {
                sink.notify(BattleEvent::Message(format!(
                    "{} rears back and STOMPS the ground!",
                    boss.name
                )));
                let damage = boss.attack + rng.range(-3, 5);
                target.take_damage(damage, Some(boss), rng, sink);
            }
            BossAction::DarkBreath => {
                sink.notify(BattleEvent::Message(format!(
                    "{} unleashes a torrent of dark energy!",
                    boss.name
                )));
                let damage = boss.attack + rng.range(5, 10);
                target.take_damage(damage, Some(boss), rng, sink);
            }
            BossAction::FrighteningRoar => {
                sink.notify(BattleEvent::Message(format!(
                    "{} lets out a Frightening Roar!",
                    boss.name
                )));
                sink.notify(BattleEvent::Message(format!(
                    "{}'s defense is lowered!",
                    target.name
                )));
                target.defense = (target.defense - 2).max(1);
            }
        }
    }
}
