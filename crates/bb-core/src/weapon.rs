//! Weapon catalog and special-effect riders
//!
//! Weapons are static descriptors; combatants reference catalog entries by
//! [`WeaponKind`], so the entity model stays plain data. A weapon's special
//! effect fires on every hit its wielder lands and gates itself on its own
//! probability roll.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::combatant::Combatant;
use crate::event::{BattleEvent, EventSink};
use crate::rng::BattleRng;
use crate::status::{StatusEffect, try_apply_status};

/// Chance-gated secondary effect carried by a weapon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SpecialEffect {
    /// Sets the target burning
    Ignite { chance: f64, turns: u8 },
    /// Poisons the target
    Venom { chance: f64, turns: u8 },
    /// Heals the wielder
    Lifesteal { chance: f64, amount: i32 },
    /// Flat damage past armor
    Jolt { chance: f64, damage: i32 },
    /// Staggers the target
    Concussion { chance: f64, turns: u8 },
}

impl SpecialEffect {
    /// Roll this effect's gate and apply it on success. Consumes exactly one
    /// draw either way, keeping the battle's draw sequence aligned.
    pub fn trigger(
        &self,
        wielder: &mut Combatant,
        target: &mut Combatant,
        rng: &mut BattleRng,
        sink: &mut dyn EventSink,
    ) {
        match *self {
            SpecialEffect::Ignite { chance, turns } => {
                if rng.chance(chance) {
                    try_apply_status(target, StatusEffect::Burning, turns, sink);
                }
            }
            SpecialEffect::Venom { chance, turns } => {
                if rng.chance(chance) {
                    try_apply_status(target, StatusEffect::Poison, turns, sink);
                }
            }
            SpecialEffect::Lifesteal { chance, amount } => {
                if rng.chance(chance) {
                    sink.notify(BattleEvent::Message(format!(
                        "{}'s weapon drinks deep of {}!",
                        wielder.name, target.name
                    )));
                    wielder.heal(amount, sink);
                }
            }
            SpecialEffect::Jolt { chance, damage } => {
                if rng.chance(chance) {
                    sink.notify(BattleEvent::Message(format!(
                        "Lightning arcs from {}'s weapon into {}!",
                        wielder.name, target.name
                    )));
                    target.lose_hp(damage);
                    sink.notify(BattleEvent::Damage {
                        target: target.name.clone(),
                        amount: damage,
                    });
                }
            }
            SpecialEffect::Concussion { chance, turns } => {
                if rng.chance(chance) {
                    try_apply_status(target, StatusEffect::Stunned, turns, sink);
                }
            }
        }
    }
}

/// Static weapon descriptor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weapon {
    pub name: &'static str,
    pub attack_bonus: i32,
    pub defense_bonus: i32,
    /// Additive on top of the 10% base critical chance
    pub crit_bonus: f64,
    pub special: Option<SpecialEffect>,
}

/// Catalog key for a weapon. Roles offer a fixed choice of three.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum WeaponKind {
    Longsword,
    FlameforgedGreatsword,
    GuardianBlade,
    EmberStaff,
    CrystalFocus,
    BoneScepter,
    HuntersBow,
    VenomedRecurve,
    StormcallerBow,
    ShadowDirk,
    SerpentFang,
    StuddedMaul,
    IronKnuckles,
    ThornwoodStaff,
    OakStaff,
    CeremonialMace,
}

impl WeaponKind {
    /// The catalog entry for this weapon
    pub const fn stats(&self) -> Weapon {
        match self {
            WeaponKind::Longsword => Weapon {
                name: "Longsword",
                attack_bonus: 3,
                defense_bonus: 0,
                crit_bonus: 0.0,
                special: None,
            },
            WeaponKind::FlameforgedGreatsword => Weapon {
                name: "Flameforged Greatsword",
                attack_bonus: 5,
                defense_bonus: -2,
                crit_bonus: 0.0,
                special: Some(SpecialEffect::Ignite {
                    chance: 0.25,
                    turns: 2,
                }),
            },
            WeaponKind::GuardianBlade => Weapon {
                name: "Guardian Blade",
                attack_bonus: 1,
                defense_bonus: 3,
                crit_bonus: 0.0,
                special: None,
            },
            WeaponKind::EmberStaff => Weapon {
                name: "Ember Staff",
                attack_bonus: 2,
                defense_bonus: 0,
                crit_bonus: 0.05,
                special: Some(SpecialEffect::Ignite {
                    chance: 0.20,
                    turns: 2,
                }),
            },
            WeaponKind::CrystalFocus => Weapon {
                name: "Crystal Focus",
                attack_bonus: 1,
                defense_bonus: 1,
                crit_bonus: 0.10,
                special: None,
            },
            WeaponKind::BoneScepter => Weapon {
                name: "Bone Scepter",
                attack_bonus: 2,
                defense_bonus: -1,
                crit_bonus: 0.0,
                special: Some(SpecialEffect::Lifesteal {
                    chance: 0.30,
                    amount: 3,
                }),
            },
            WeaponKind::HuntersBow => Weapon {
                name: "Hunter's Bow",
                attack_bonus: 3,
                defense_bonus: 0,
                crit_bonus: 0.05,
                special: None,
            },
            WeaponKind::VenomedRecurve => Weapon {
                name: "Venomed Recurve",
                attack_bonus: 2,
                defense_bonus: 0,
                crit_bonus: 0.0,
                special: Some(SpecialEffect::Venom {
                    chance: 0.20,
                    turns: 3,
                }),
            },
            WeaponKind::StormcallerBow => Weapon {
                name: "Stormcaller Bow",
                attack_bonus: 4,
                defense_bonus: -1,
                crit_bonus: 0.0,
                special: Some(SpecialEffect::Jolt {
                    chance: 0.15,
                    damage: 4,
                }),
            },
            WeaponKind::ShadowDirk => Weapon {
                name: "Shadow Dirk",
                attack_bonus: 2,
                defense_bonus: 0,
                crit_bonus: 0.15,
                special: None,
            },
            WeaponKind::SerpentFang => Weapon {
                name: "Serpent Fang",
                attack_bonus: 2,
                defense_bonus: 0,
                crit_bonus: 0.05,
                special: Some(SpecialEffect::Venom {
                    chance: 0.25,
                    turns: 3,
                }),
            },
            WeaponKind::StuddedMaul => Weapon {
                name: "Studded Maul",
                attack_bonus: 4,
                defense_bonus: -1,
                crit_bonus: 0.0,
                special: Some(SpecialEffect::Concussion {
                    chance: 0.10,
                    turns: 1,
                }),
            },
            WeaponKind::IronKnuckles => Weapon {
                name: "Iron Knuckles",
                attack_bonus: 2,
                defense_bonus: 0,
                crit_bonus: 0.05,
                special: Some(SpecialEffect::Concussion {
                    chance: 0.10,
                    turns: 1,
                }),
            },
            WeaponKind::ThornwoodStaff => Weapon {
                name: "Thornwood Staff",
                attack_bonus: 1,
                defense_bonus: 2,
                crit_bonus: 0.0,
                special: Some(SpecialEffect::Venom {
                    chance: 0.15,
                    turns: 2,
                }),
            },
            WeaponKind::OakStaff => Weapon {
                name: "Oak Staff",
                attack_bonus: 2,
                defense_bonus: 1,
                crit_bonus: 0.0,
                special: None,
            },
            WeaponKind::CeremonialMace => Weapon {
                name: "Ceremonial Mace",
                attack_bonus: 2,
                defense_bonus: 2,
                crit_bonus: 0.0,
                special: None,
            },
        }
    }
}
