//! Player roles and their fixed catalogs
//!
//! A role pins everything about a player that is not battle state: the
//! starting stat block, the three-ability set (registered in
//! [`crate::ability`]), and which weapons the armory offers.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::weapon::WeaponKind;

/// Player class
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Role {
    Warrior,
    Mage,
    Archer,
    Paladin,
    Rogue,
    Necromancer,
    Monk,
    Barbarian,
    Druid,
}

/// Starting stat block for a role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleStats {
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub mana: i32,
}

impl Role {
    /// Starting stats. The Mage's reduced base attack is part of the block;
    /// its damage lives in its spells.
    pub const fn stats(&self) -> RoleStats {
        match self {
            Role::Warrior => RoleStats {
                hp: 120,
                attack: 12,
                defense: 8,
                mana: 50,
            },
            Role::Mage => RoleStats {
                hp: 80,
                attack: 5,
                defense: 4,
                mana: 100,
            },
            Role::Archer => RoleStats {
                hp: 100,
                attack: 15,
                defense: 6,
                mana: 70,
            },
            Role::Paladin => RoleStats {
                hp: 110,
                attack: 11,
                defense: 9,
                mana: 60,
            },
            Role::Rogue => RoleStats {
                hp: 90,
                attack: 14,
                defense: 5,
                mana: 60,
            },
            Role::Necromancer => RoleStats {
                hp: 85,
                attack: 9,
                defense: 4,
                mana: 90,
            },
            Role::Monk => RoleStats {
                hp: 105,
                attack: 12,
                defense: 6,
                mana: 65,
            },
            Role::Barbarian => RoleStats {
                hp: 130,
                attack: 14,
                defense: 4,
                mana: 40,
            },
            Role::Druid => RoleStats {
                hp: 95,
                attack: 10,
                defense: 6,
                mana: 80,
            },
        }
    }

    /// One-line pitch shown on the class menu
    pub const fn tagline(&self) -> &'static str {
        match self {
            Role::Warrior => "A sturdy fighter with high defense and reliable damage.",
            Role::Mage => "A powerful spellcaster with high damage and healing abilities.",
            Role::Archer => "A nimble marksman who uses precision and status effects.",
            Role::Paladin => "An armored crusader who trades damage for staying power.",
            Role::Rogue => "A gambler's blade: devastating when the strikes land.",
            Role::Necromancer => "A dark caster who turns the enemy's life into their own.",
            Role::Monk => "A disciplined brawler who staggers foes with open-hand blows.",
            Role::Barbarian => "A mountain of hit points with little patience for defense.",
            Role::Druid => "A wild shapeless caster of thorns, vines, and renewal.",
        }
    }

    /// Weapons the armory offers this role, selection keys "1".."3"
    pub const fn weapon_choices(&self) -> [WeaponKind; 3] {
        match self {
            Role::Warrior => [
                WeaponKind::Longsword,
                WeaponKind::FlameforgedGreatsword,
                WeaponKind::GuardianBlade,
            ],
            Role::Mage => [
                WeaponKind::EmberStaff,
                WeaponKind::CrystalFocus,
                WeaponKind::BoneScepter,
            ],
            Role::Archer => [
                WeaponKind::HuntersBow,
                WeaponKind::VenomedRecurve,
                WeaponKind::StormcallerBow,
            ],
            Role::Paladin => [
                WeaponKind::CeremonialMace,
                WeaponKind::GuardianBlade,
                WeaponKind::Longsword,
            ],
            Role::Rogue => [
                WeaponKind::ShadowDirk,
                WeaponKind::SerpentFang,
                WeaponKind::Longsword,
            ],
            Role::Necromancer => [
                WeaponKind::BoneScepter,
                WeaponKind::EmberStaff,
                WeaponKind::CrystalFocus,
            ],
            Role::Monk => [
                WeaponKind::IronKnuckles,
                WeaponKind::ThornwoodStaff,
                WeaponKind::StuddedMaul,
            ],
            Role::Barbarian => [
                WeaponKind::StuddedMaul,
                WeaponKind::FlameforgedGreatsword,
                WeaponKind::Longsword,
            ],
            Role::Druid => [
                WeaponKind::ThornwoodStaff,
                WeaponKind::OakStaff,
                WeaponKind::CrystalFocus,
            ],
        }
    }
}
