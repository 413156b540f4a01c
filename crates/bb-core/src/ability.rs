//! Per-role ability catalogs and their effect procedures
//!
//! Effects are registered as tagged variants: either they target the enemy
//! or they act on the caster alone. The arity is fixed at registration and
//! dispatched by match, never inspected at call time.

use crate::combatant::Combatant;
use crate::event::{BattleEvent, EventSink};
use crate::rng::BattleRng;
use crate::role::Role;
use crate::status::{StatusEffect, try_apply_status};

pub type TargetedFn = fn(&mut Combatant, &mut Combatant, &mut BattleRng, &mut dyn EventSink);
pub type SelfFn = fn(&mut Combatant, &mut BattleRng, &mut dyn EventSink);

/// An ability's effect procedure, tagged by what it needs
#[derive(Debug, Clone, Copy)]
pub enum AbilityEffect {
    Targeted(TargetedFn),
    SelfOnly(SelfFn),
}

/// One ability slot: display name, mana cost, effect
#[derive(Debug, Clone, Copy)]
pub struct Ability {
    pub name: &'static str,
    pub cost: i32,
    pub effect: AbilityEffect,
}

impl Ability {
    /// Run the effect with the arity it registered
    pub fn invoke(
        &self,
        user: &mut Combatant,
        target: &mut Combatant,
        rng: &mut BattleRng,
        sink: &mut dyn EventSink,
    ) {
        match self.effect {
            AbilityEffect::Targeted(f) => f(user, target, rng, sink),
            AbilityEffect::SelfOnly(f) => f(user, rng, sink),
        }
    }
}

// ---------------------------------------------------------------------------
// Damage-shape helpers
//
// All three route through `Combatant::take_damage`, so crit, defense, and
// weapon specials apply. The bonus roll happens before the hit resolves,
// fixing the draw order: bonus, crit, weapon gate.
// ---------------------------------------------------------------------------

/// `floor(attack * multiplier)` plus a uniform bonus. The bonus draw is
/// skipped entirely when both bounds are zero.
pub fn deal_basic_damage(
    user: &mut Combatant,
    target: &mut Combatant,
    multiplier: f64,
    bonus_min: i32,
    bonus_max: i32,
    rng: &mut BattleRng,
    sink: &mut dyn EventSink,
) -> i32 {
    let mut damage = (user.attack as f64 * multiplier) as i32;
    if bonus_min != 0 || bonus_max != 0 {
        damage += rng.range(bonus_min, bonus_max);
    }
    target.take_damage(damage, Some(user), rng, sink)
}

/// `floor(attack * multiplier)`, no bonus
pub fn deal_enhanced_damage(
    user: &mut Combatant,
    target: &mut Combatant,
    multiplier: f64,
    rng: &mut BattleRng,
    sink: &mut dyn EventSink,
) -> i32 {
    let damage = (user.attack as f64 * multiplier) as i32;
    target.take_damage(damage, Some(user), rng, sink)
}

/// `attack` plus a uniform bonus
pub fn deal_random_bonus_damage(
    user: &mut Combatant,
    target: &mut Combatant,
    min: i32,
    max: i32,
    rng: &mut BattleRng,
    sink: &mut dyn EventSink,
) -> i32 {
    let damage = user.attack + rng.range(min, max);
    target.take_damage(damage, Some(user), rng, sink)
}

// ---------------------------------------------------------------------------
// Warrior
// ---------------------------------------------------------------------------

fn power_strike(
    user: &mut Combatant,
    target: &mut Combatant,
    rng: &mut BattleRng,
    sink: &mut dyn EventSink,
) {
    sink.notify(BattleEvent::Message(format!(
        "{} uses Power Strike!",
        user.name
    )));
    deal_enhanced_damage(user, target, 1.5, rng, sink);
}

fn shield_wall(user: &mut Combatant, _rng: &mut BattleRng, sink: &mut dyn EventSink) {
    sink.notify(BattleEvent::Message(format!(
        "{} raises their shield, bracing for the next attack!",
        user.name
    )));
    user.is_defending = true;
}

fn reckless_swing(
    user: &mut Combatant,
    target: &mut Combatant,
    rng: &mut BattleRng,
    sink: &mut dyn EventSink,
) {
    sink.notify(BattleEvent::Message(format!(
        "{} throws caution to the wind with a Reckless Swing!",
        user.name
    )));
    // Wiped at the next turn-start reset, so the penalty lasts one round.
    user.defense -= 3;
    sink.notify(BattleEvent::Message(format!(
        "{}'s defense is temporarily lowered!",
        user.name
    )));
    deal_basic_damage(user, target, 2.0, 0, 0, rng, sink);
}

// ---------------------------------------------------------------------------
// Mage
// ---------------------------------------------------------------------------

fn fireball(
    user: &mut Combatant,
    target: &mut Combatant,
    rng: &mut BattleRng,
    sink: &mut dyn EventSink,
) {
    sink.notify(BattleEvent::Message(format!("{} casts Fireball!", user.name)));
    // Flat roll, ignoring the caster's attack stat.
    let damage = rng.range(15, 25);
    target.take_damage(damage, Some(user), rng, sink);
}

fn heal_spell(user: &mut Combatant, rng: &mut BattleRng, sink: &mut dyn EventSink) {
    sink.notify(BattleEvent::Message(format!(
        "{} casts a healing spell!",
        user.name
    )));
    let amount = rng.range(20, 30);
    user.heal(amount, sink);
}

fn arcane_shield(user: &mut Combatant, _rng: &mut BattleRng, sink: &mut dyn EventSink) {
    sink.notify(BattleEvent::Message(format!(
        "{} conjures an Arcane Shield!",
        user.name
    )));
    user.defense += 5;
    sink.notify(BattleEvent::Message(format!(
        "{}'s defense is temporarily boosted!",
        user.name
    )));
}

// ---------------------------------------------------------------------------
// Archer
// ---------------------------------------------------------------------------

fn aimed_shot(
    user: &mut Combatant,
    target: &mut Combatant,
    rng: &mut BattleRng,
    sink: &mut dyn EventSink,
) {
    sink.notify(BattleEvent::Message(format!(
        "{} takes careful aim for an Aimed Shot!",
        user.name
    )));
    // 85% to hit: the shot lands when the roll clears 0.15.
    if rng.unit() > 0.15 {
        deal_random_bonus_damage(user, target, 8, 15, rng, sink);
    } else {
        sink.notify(BattleEvent::Message(format!(
            "{}'s arrow misses!",
            user.name
        )));
    }
}

fn poison_arrow(
    user: &mut Combatant,
    target: &mut Combatant,
    rng: &mut BattleRng,
    sink: &mut dyn EventSink,
) {
    sink.notify(BattleEvent::Message(format!(
        "{} fires a Poison Arrow!",
        user.name
    )));
    let attack = user.attack;
    target.take_damage(attack, Some(user), rng, sink);
    if !try_apply_status(target, StatusEffect::Poison, 3, sink) {
        sink.notify(BattleEvent::Message(format!(
            "{} is already poisoned!",
            target.name
        )));
    }
}

fn double_shot(
    user: &mut Combatant,
    target: &mut Combatant,
    rng: &mut BattleRng,
    sink: &mut dyn EventSink,
) {
    sink.notify(BattleEvent::Message(format!(
        "{} fires two arrows in quick succession!",
        user.name
    )));
    let attack = user.attack;
    target.take_damage(attack, Some(user), rng, sink);
    target.take_damage(attack, Some(user), rng, sink);
}

// ---------------------------------------------------------------------------
// Paladin
// ---------------------------------------------------------------------------

fn holy_strike(
    user: &mut Combatant,
    target: &mut Combatant,
    rng: &mut BattleRng,
    sink: &mut dyn EventSink,
) {
    sink.notify(BattleEvent::Message(format!(
        "{} brings down a Holy Strike!",
        user.name
    )));
    deal_basic_damage(user, target, 1.3, 3, 8, rng, sink);
}

fn lay_on_hands(user: &mut Combatant, rng: &mut BattleRng, sink: &mut dyn EventSink) {
    sink.notify(BattleEvent::Message(format!(
        "{} lays on hands, channeling holy light!",
        user.name
    )));
    let amount = rng.range(25, 35);
    user.heal(amount, sink);
}

fn divine_bulwark(user: &mut Combatant, _rng: &mut BattleRng, sink: &mut dyn EventSink) {
    sink.notify(BattleEvent::Message(format!(
        "{} is wreathed in a Divine Bulwark!",
        user.name
    )));
    user.defense += 6;
}

// ---------------------------------------------------------------------------
// Rogue
// ---------------------------------------------------------------------------

fn backstab(
    user: &mut Combatant,
    target: &mut Combatant,
    rng: &mut BattleRng,
    sink: &mut dyn EventSink,
) {
    sink.notify(BattleEvent::Message(format!(
        "{} slips behind for a Backstab!",
        user.name
    )));
    // One in five attempts whiffs outright: no damage, no status.
    if rng.unit() < 0.20 {
        sink.notify(BattleEvent::Message(format!(
            "{}'s blade glances off harmlessly!",
            user.name
        )));
    } else {
        deal_basic_damage(user, target, 1.6, 5, 10, rng, sink);
    }
}

fn flurry_of_blades(
    user: &mut Combatant,
    target: &mut Combatant,
    rng: &mut BattleRng,
    sink: &mut dyn EventSink,
) {
    sink.notify(BattleEvent::Message(format!(
        "{} unleashes a Flurry of Blades!",
        user.name
    )));
    deal_random_bonus_damage(user, target, 1, 4, rng, sink);
    deal_random_bonus_damage(user, target, 1, 4, rng, sink);
}

fn evasion(user: &mut Combatant, _rng: &mut BattleRng, sink: &mut dyn EventSink) {
    sink.notify(BattleEvent::Message(format!(
        "{} melts into the shadows, ready to evade!",
        user.name
    )));
    user.is_defending = true;
}

// ---------------------------------------------------------------------------
// Necromancer
// ---------------------------------------------------------------------------

fn drain_life(
    user: &mut Combatant,
    target: &mut Combatant,
    rng: &mut BattleRng,
    sink: &mut dyn EventSink,
) {
    sink.notify(BattleEvent::Message(format!(
        "{} siphons the enemy's life force!",
        user.name
    )));
    let damage = rng.range(10, 18);
    // Heal back half of what actually landed, post-defense.
    let taken = target.take_damage(damage, Some(user), rng, sink);
    if taken > 0 {
        user.heal(taken / 2, sink);
    }
}

fn curse(
    user: &mut Combatant,
    target: &mut Combatant,
    _rng: &mut BattleRng,
    sink: &mut dyn EventSink,
) {
    sink.notify(BattleEvent::Message(format!(
        "{} utters a withering Curse!",
        user.name
    )));
    if try_apply_status(target, StatusEffect::Cursed, 3, sink) {
        // Status expiry restores exactly this much.
        target.attack -= 5;
    } else {
        sink.notify(BattleEvent::Message(format!(
            "{} is already cursed!",
            target.name
        )));
    }
}

fn bone_armor(user: &mut Combatant, _rng: &mut BattleRng, sink: &mut dyn EventSink) {
    sink.notify(BattleEvent::Message(format!(
        "Bones knit into armor around {}!",
        user.name
    )));
    user.defense += 5;
}

// ---------------------------------------------------------------------------
// Monk
// ---------------------------------------------------------------------------

fn stunning_palm(
    user: &mut Combatant,
    target: &mut Combatant,
    rng: &mut BattleRng,
    sink: &mut dyn EventSink,
) {
    sink.notify(BattleEvent::Message(format!(
        "{} strikes with a Stunning Palm!",
        user.name
    )));
    let attack = user.attack;
    target.take_damage(attack, Some(user), rng, sink);
    if !try_apply_status(target, StatusEffect::Stunned, 1, sink) {
        sink.notify(BattleEvent::Message(format!(
            "{} is already reeling!",
            target.name
        )));
    }
}

fn flurry_of_blows(
    user: &mut Combatant,
    target: &mut Combatant,
    rng: &mut BattleRng,
    sink: &mut dyn EventSink,
) {
    sink.notify(BattleEvent::Message(format!(
        "{} erupts in a Flurry of Blows!",
        user.name
    )));
    deal_random_bonus_damage(user, target, 0, 3, rng, sink);
    deal_random_bonus_damage(user, target, 0, 3, rng, sink);
}

fn inner_peace(user: &mut Combatant, rng: &mut BattleRng, sink: &mut dyn EventSink) {
    sink.notify(BattleEvent::Message(format!(
        "{} centers their breath in Inner Peace.",
        user.name
    )));
    let amount = rng.range(15, 25);
    user.heal(amount, sink);
}

// ---------------------------------------------------------------------------
// Barbarian
// ---------------------------------------------------------------------------

fn savage_blow(
    user: &mut Combatant,
    target: &mut Combatant,
    rng: &mut BattleRng,
    sink: &mut dyn EventSink,
) {
    sink.notify(BattleEvent::Message(format!(
        "{} lands a Savage Blow!",
        user.name
    )));
    deal_enhanced_damage(user, target, 1.8, rng, sink);
}

fn war_cry(
    user: &mut Combatant,
    target: &mut Combatant,
    _rng: &mut BattleRng,
    sink: &mut dyn EventSink,
) {
    sink.notify(BattleEvent::Message(format!(
        "{} bellows a bone-shaking War Cry!",
        user.name
    )));
    if try_apply_status(target, StatusEffect::Intimidated, 3, sink) {
        // Status expiry restores exactly this much.
        target.attack -= 4;
    } else {
        sink.notify(BattleEvent::Message(format!(
            "{} is already intimidated!",
            target.name
        )));
    }
}

fn second_wind(user: &mut Combatant, rng: &mut BattleRng, sink: &mut dyn EventSink) {
    sink.notify(BattleEvent::Message(format!(
        "{} roars and finds a Second Wind!",
        user.name
    )));
    let amount = rng.range(10, 20);
    user.heal(amount, sink);
}

// ---------------------------------------------------------------------------
// Druid
// ---------------------------------------------------------------------------

fn thorn_lash(
    user: &mut Combatant,
    target: &mut Combatant,
    rng: &mut BattleRng,
    sink: &mut dyn EventSink,
) {
    sink.notify(BattleEvent::Message(format!(
        "{} whips the air with a Thorn Lash!",
        user.name
    )));
    deal_basic_damage(user, target, 1.3, 2, 7, rng, sink);
}

fn entangle(
    user: &mut Combatant,
    target: &mut Combatant,
    rng: &mut BattleRng,
    sink: &mut dyn EventSink,
) {
    sink.notify(BattleEvent::Message(format!(
        "Roots surge up at {}'s command!",
        user.name
    )));
    deal_random_bonus_damage(user, target, 0, 4, rng, sink);
    if !try_apply_status(target, StatusEffect::Entangled, 2, sink) {
        sink.notify(BattleEvent::Message(format!(
            "{} is already entangled!",
            target.name
        )));
    }
}

fn rejuvenate(user: &mut Combatant, rng: &mut BattleRng, sink: &mut dyn EventSink) {
    sink.notify(BattleEvent::Message(format!(
        "Green light washes over {} as they Rejuvenate.",
        user.name
    )));
    let amount = rng.range(18, 28);
    user.heal(amount, sink);
}

impl Role {
    /// The role's fixed ability set, selection keys "1".."3"
    pub fn abilities(&self) -> [Ability; 3] {
        use AbilityEffect::{SelfOnly, Targeted};
        match self {
            Role::Warrior => [
                Ability { name: "Power Strike", cost: 10, effect: Targeted(power_strike) },
                Ability { name: "Shield Wall", cost: 5, effect: SelfOnly(shield_wall) },
                Ability { name: "Reckless Swing", cost: 20, effect: Targeted(reckless_swing) },
            ],
            Role::Mage => [
                Ability { name: "Fireball", cost: 15, effect: Targeted(fireball) },
                Ability { name: "Heal", cost: 20, effect: SelfOnly(heal_spell) },
                Ability { name: "Arcane Shield", cost: 25, effect: SelfOnly(arcane_shield) },
            ],
            Role::Archer => [
                Ability { name: "Aimed Shot", cost: 15, effect: Targeted(aimed_shot) },
                Ability { name: "Poison Arrow", cost: 10, effect: Targeted(poison_arrow) },
                Ability { name: "Double Shot", cost: 25, effect: Targeted(double_shot) },
            ],
            Role::Paladin => [
                Ability { name: "Holy Strike", cost: 12, effect: Targeted(holy_strike) },
                Ability { name: "Lay on Hands", cost: 20, effect: SelfOnly(lay_on_hands) },
                Ability { name: "Divine Bulwark", cost: 18, effect: SelfOnly(divine_bulwark) },
            ],
            Role::Rogue => [
                Ability { name: "Backstab", cost: 15, effect: Targeted(backstab) },
                Ability { name: "Flurry of Blades", cost: 12, effect: Targeted(flurry_of_blades) },
                Ability { name: "Evasion", cost: 10, effect: SelfOnly(evasion) },
            ],
            Role::Necromancer => [
                Ability { name: "Drain Life", cost: 15, effect: Targeted(drain_life) },
                Ability { name: "Curse", cost: 18, effect: Targeted(curse) },
                Ability { name: "Bone Armor", cost: 20, effect: SelfOnly(bone_armor) },
            ],
            Role::Monk => [
                Ability { name: "Stunning Palm", cost: 15, effect: Targeted(stunning_palm) },
                Ability { name: "Flurry of Blows", cost: 12, effect: Targeted(flurry_of_blows) },
                Ability { name: "Inner Peace", cost: 18, effect: SelfOnly(inner_peace) },
            ],
            Role::Barbarian => [
                Ability { name: "Savage Blow", cost: 15, effect: Targeted(savage_blow) },
                Ability { name: "War Cry", cost: 10, effect: Targeted(war_cry) },
                Ability { name: "Second Wind", cost: 20, effect: SelfOnly(second_wind) },
            ],
            Role::Druid => [
                Ability { name: "Thorn Lash", cost: 12, effect: Targeted(thorn_lash) },
                Ability { name: "Entangle", cost: 10, effect: Targeted(entangle) },
                Ability { name: "Rejuvenate", cost: 16, effect: SelfOnly(rejuvenate) },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventLog;
    use strum::IntoEnumIterator;

    fn find_seed(pred: impl Fn(&mut BattleRng) -> bool) -> u64 {
        (0..100_000u64)
            .find(|s| pred(&mut BattleRng::new(*s)))
            .expect("no seed found in search range")
    }

    fn pair(attack: i32, target_defense: i32) -> (Combatant, Combatant) {
        (
            Combatant::new("Hero", 100, attack, 5),
            Combatant::new("Hydra", 250, 15, target_defense),
        )
    }

    #[test]
    fn test_every_role_has_three_affordable_abilities() {
        for role in Role::iter() {
            let abilities = role.abilities();
            for ability in abilities {
                assert!(!ability.name.is_empty());
                assert!(ability.cost > 0);
                assert!(
                    ability.cost <= role.stats().mana,
                    "{role} cannot ever afford {}",
                    ability.name
                );
            }
        }
    }

    #[test]
    fn test_power_strike_damage() {
        // Draws: crit only. floor(12 * 1.5) = 18 against defense 0.
        let seed = find_seed(|r| r.unit() >= 0.10);
        let mut rng = BattleRng::new(seed);
        let mut log = EventLog::new();
        let (mut user, mut target) = pair(12, 0);

        let taken = deal_enhanced_damage(&mut user, &mut target, 1.5, &mut rng, &mut log);
        assert_eq!(taken, 18);
    }

    #[test]
    fn test_reckless_swing_costs_defense() {
        let seed = find_seed(|r| r.unit() >= 0.10);
        let mut rng = BattleRng::new(seed);
        let mut log = EventLog::new();
        let (mut user, mut target) = pair(12, 0);
        let before = user.defense;

        reckless_swing(&mut user, &mut target, &mut rng, &mut log);
        assert_eq!(user.defense, before - 3);
        assert_eq!(log.damage_to("Hydra"), 24);
    }

    #[test]
    fn test_fireball_ignores_attack_stat() {
        let mut rng = BattleRng::new(7);
        let mut log = EventLog::new();
        let (mut user, mut target) = pair(0, 0);

        fireball(&mut user, &mut target, &mut rng, &mut log);
        let dealt = log.damage_to("Hydra");
        // 15..=25 raw, up to x1.5 on a crit.
        assert!((15..=37).contains(&dealt), "fireball dealt {dealt}");
    }

    #[test]
    fn test_aimed_shot_miss_leaves_no_mark() {
        let seed = find_seed(|r| r.unit() <= 0.15);
        let mut rng = BattleRng::new(seed);
        let mut log = EventLog::new();
        let (mut user, mut target) = pair(15, 6);

        aimed_shot(&mut user, &mut target, &mut rng, &mut log);
        assert_eq!(target.hp, 250);
        assert!(log.saw_message("misses"));
    }

    #[test]
    fn test_aimed_shot_hit_math() {
        // Draws: hit roll > 0.15, bonus = 10, then no crit.
        let seed =
            find_seed(|r| r.unit() > 0.15 && r.range(8, 15) == 10 && r.unit() >= 0.10);
        let mut rng = BattleRng::new(seed);
        let mut log = EventLog::new();
        let mut user = Combatant::new("Archer", 100, 12, 5);
        let mut target = Combatant::new("Warrior", 120, 12, 8);

        aimed_shot(&mut user, &mut target, &mut rng, &mut log);
        assert_eq!(log.damage_to("Warrior"), 14);
    }

    #[test]
    fn test_poison_arrow_never_refreshes() {
        let seed = find_seed(|r| r.unit() >= 0.10 && r.unit() >= 0.10);
        let mut rng = BattleRng::new(seed);
        let mut log = EventLog::new();
        let (mut user, mut target) = pair(15, 0);

        poison_arrow(&mut user, &mut target, &mut rng, &mut log);
        assert_eq!(target.statuses.remaining(StatusEffect::Poison), Some(3));

        poison_arrow(&mut user, &mut target, &mut rng, &mut log);
        assert_eq!(target.statuses.remaining(StatusEffect::Poison), Some(3));
        assert!(log.saw_message("already poisoned"));
    }

    #[test]
    fn test_backstab_whiff() {
        let seed = find_seed(|r| r.unit() < 0.20);
        let mut rng = BattleRng::new(seed);
        let mut log = EventLog::new();
        let (mut user, mut target) = pair(14, 5);

        backstab(&mut user, &mut target, &mut rng, &mut log);
        assert_eq!(target.hp, 250);
        assert!(log.saw_message("glances off"));
    }

    #[test]
    fn test_drain_life_heals_half_of_landed_damage() {
        // Draws: roll = 14, then no crit. Defense 4 leaves 10 landed.
        let seed = find_seed(|r| r.range(10, 18) == 14 && r.unit() >= 0.10);
        let mut rng = BattleRng::new(seed);
        let mut log = EventLog::new();
        let (mut user, mut target) = pair(9, 4);
        user.hp = 50;

        drain_life(&mut user, &mut target, &mut rng, &mut log);
        assert_eq!(target.hp, 240);
        assert_eq!(user.hp, 55);
    }

    #[test]
    fn test_curse_saps_attack_until_expiry() {
        let mut rng = BattleRng::new(3);
        let mut log = EventLog::new();
        let (mut user, mut target) = pair(9, 4);
        let before = target.attack;

        curse(&mut user, &mut target, &mut rng, &mut log);
        assert_eq!(target.attack, before - 5);
        assert_eq!(target.statuses.remaining(StatusEffect::Cursed), Some(3));

        // Re-casting while active changes nothing.
        curse(&mut user, &mut target, &mut rng, &mut log);
        assert_eq!(target.attack, before - 5);
        assert_eq!(target.statuses.remaining(StatusEffect::Cursed), Some(3));
    }

    #[test]
    fn test_war_cry_intimidates() {
        let mut rng = BattleRng::new(3);
        let mut log = EventLog::new();
        let (mut user, mut target) = pair(14, 4);
        let before = target.attack;

        war_cry(&mut user, &mut target, &mut rng, &mut log);
        assert_eq!(target.attack, before - 4);
        assert_eq!(target.statuses.remaining(StatusEffect::Intimidated), Some(3));
    }

    #[test]
    fn test_stunning_palm_staggers() {
        let seed = find_seed(|r| r.unit() >= 0.10);
        let mut rng = BattleRng::new(seed);
        let mut log = EventLog::new();
        let (mut user, mut target) = pair(12, 0);

        stunning_palm(&mut user, &mut target, &mut rng, &mut log);
        assert_eq!(target.statuses.remaining(StatusEffect::Stunned), Some(1));
        assert_eq!(log.damage_to("Hydra"), 12);
    }

    #[test]
    fn test_entangle_applies_inert_status() {
        let seed = find_seed(|r| {
            let _ = r.range(0, 4);
            r.unit() >= 0.10
        });
        let mut rng = BattleRng::new(seed);
        let mut log = EventLog::new();
        let (mut user, mut target) = pair(10, 0);

        entangle(&mut user, &mut target, &mut rng, &mut log);
        assert_eq!(target.statuses.remaining(StatusEffect::Entangled), Some(2));
    }

    #[test]
    fn test_self_buffs_touch_only_the_caster() {
        let mut rng = BattleRng::new(5);
        let mut log = EventLog::new();
        let mut user = Combatant::new("Hero", 100, 10, 5);

        shield_wall(&mut user, &mut rng, &mut log);
        assert!(user.is_defending);

        let before = user.defense;
        arcane_shield(&mut user, &mut rng, &mut log);
        assert_eq!(user.defense, before + 5);

        divine_bulwark(&mut user, &mut rng, &mut log);
        assert_eq!(user.defense, before + 11);

        bone_armor(&mut user, &mut rng, &mut log);
        assert_eq!(user.defense, before + 16);
    }

    #[test]
    fn test_invoke_dispatches_both_arities() {
        let seed = find_seed(|r| r.unit() >= 0.10);
        let mut rng = BattleRng::new(seed);
        let mut log = EventLog::new();
        let mut user = Combatant::new("Hero", 100, 12, 5);
        let mut target = Combatant::new("Hydra", 250, 15, 0);

        let [strike, wall, _] = Role::Warrior.abilities();
        strike.invoke(&mut user, &mut target, &mut rng, &mut log);
        assert!(target.hp < 250);

        wall.invoke(&mut user, &mut target, &mut rng, &mut log);
        assert!(user.is_defending);
    }
}
