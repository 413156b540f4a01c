//! Battle orchestration: the turn state machine
//!
//! `SETUP -> PLAYER_TURN -> (check boss) -> BOSS_TURN -> (check player)`
//! until one side falls. Each side's turn starts with a status tick that may
//! skip the turn outright; the player's turn additionally resets transient
//! state and regenerates mana before the tick.

use strum::IntoEnumIterator;
use thiserror::Error;

use crate::ability::Ability;
use crate::boss::{self, BossPolicy};
use crate::combatant::Combatant;
use crate::event::{BattleEvent, EventSink};
use crate::player::{POTION_HEAL, Player};
use crate::rng::BattleRng;
use crate::role::Role;
use crate::status::process_status_effects;
use crate::weapon::WeaponKind;

/// Per-turn menu actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    BasicAttack,
    Defend,
    UseAbility,
    UsePotion,
}

/// Why a chosen action could not be executed. Recovered by re-prompting;
/// the turn is not consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("Not enough mana! (need {needed}, have {available})")]
    InsufficientMana { needed: i32, available: i32 },
    #[error("You are out of health potions!")]
    OutOfPotions,
}

/// Terminal battle states, from the player's side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    Victory,
    Defeat,
}

/// Read-only snapshot handed to the input collaborator at each prompt
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    pub turn: u32,
    pub player: &'a Player,
    pub boss: &'a Combatant,
    pub boss_enraged: bool,
}

/// Blocking input collaborator
///
/// Implementations own re-prompting for unparsable text; the typed returns
/// mean an out-of-range menu key is unrepresentable in the core.
pub trait InputSource {
    /// Free-text name entry. The engine substitutes "Hero" for blank.
    fn enter_name(&mut self) -> String;
    fn choose_role(&mut self, roles: &[Role]) -> Role;
    fn choose_weapon(&mut self, role: Role, choices: &[WeaponKind]) -> WeaponKind;
    fn choose_action(&mut self, view: &TurnView<'_>) -> PlayerAction;
    /// Pick one of the role's abilities by index, or `None` to back out to
    /// the action menu. Neither consumes the turn.
    fn choose_ability(&mut self, abilities: &[Ability; 3], view: &TurnView<'_>) -> Option<usize>;
}

/// Drives one battle to completion
pub struct BattleEngine<S: EventSink, I: InputSource> {
    player: Player,
    boss: Combatant,
    policy: BossPolicy,
    rng: BattleRng,
    sink: S,
    input: I,
    turn: u32,
}

impl<S: EventSink, I: InputSource> BattleEngine<S, I> {
    /// Run the setup prompts (role, name, weapon) and build the engine
    /// against the fixed boss encounter.
    pub fn setup(rng: BattleRng, mut sink: S, mut input: I) -> Self {
        let roles: Vec<Role> = Role::iter().collect();
        let role = input.choose_role(&roles);

        let mut name = input.enter_name();
        if name.trim().is_empty() {
            name = "Hero".to_string();
        }
        let mut player = Player::new(name, role);

        let choices = role.weapon_choices();
        let weapon = input.choose_weapon(role, &choices);
        player.combatant.equip_weapon(weapon);

        sink.notify(BattleEvent::Message(format!(
            "{} the {} takes up the {}.",
            player.combatant.name,
            role,
            weapon.stats().name
        )));
        sink.notify(BattleEvent::Message("A fearsome beast appears!".to_string()));

        Self::with_combatants(player, boss::spawn_boss(), rng, sink, input)
    }

    /// Build an engine from pre-made pieces (tests, headless drivers)
    pub fn with_combatants(player: Player, boss: Combatant, rng: BattleRng, sink: S, input: I) -> Self {
        Self {
            player,
            boss,
            policy: BossPolicy::new(),
            rng,
            sink,
            input,
            turn: 1,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn boss(&self) -> &Combatant {
        &self.boss
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The presentation sink, exposed so drivers can reclaim it after a run
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Drive the battle to a terminal state
    pub fn run(&mut self) -> BattleOutcome {
        loop {
            if let Some(outcome) = self.player_turn() {
                return self.finish(outcome);
            }
            if let Some(outcome) = self.boss_turn() {
                return self.finish(outcome);
            }
            self.turn += 1;
        }
    }

    fn finish(&mut self, outcome: BattleOutcome) -> BattleOutcome {
        let (fallen, victor) = match outcome {
            BattleOutcome::Victory => (&self.boss.name, &self.player.combatant.name),
            BattleOutcome::Defeat => (&self.player.combatant.name, &self.boss.name),
        };
        self.sink.notify(BattleEvent::Defeat {
            name: fallen.clone(),
        });
        self.sink.notify(BattleEvent::Victory {
            name: victor.clone(),
        });
        outcome
    }

    /// One player turn. `Some` means the battle ended during it.
    fn player_turn(&mut self) -> Option<BattleOutcome> {
        self.player.combatant.reset_for_turn();
        self.player.regenerate_mana();

        let skipped = process_status_effects(&mut self.player.combatant, &mut self.sink);
        if !self.player.combatant.is_alive() {
            return Some(BattleOutcome::Defeat);
        }
        if skipped {
            return None;
        }

        loop {
            let view = TurnView {
                turn: self.turn,
                player: &self.player,
                boss: &self.boss,
                boss_enraged: self.policy.is_enraged(),
            };
            let action = self.input.choose_action(&view);
            match self.try_player_action(action) {
                Ok(true) => break,
                Ok(false) => continue,
                Err(err) => {
                    self.sink.notify(BattleEvent::Message(err.to_string()));
                    continue;
                }
            }
        }

        // Acting side's target is checked before the other side ever acts.
        if !self.boss.is_alive() {
            return Some(BattleOutcome::Victory);
        }
        None
    }

    /// Validate and execute one menu choice. `Ok(true)` consumed the turn;
    /// `Ok(false)` backed out of the ability menu.
    fn try_player_action(&mut self, action: PlayerAction) -> Result<bool, ActionError> {
        match action {
            PlayerAction::BasicAttack => {
                self.sink.notify(BattleEvent::Message(format!(
                    "{} attacks!",
                    self.player.combatant.name
                )));
                self.boss.take_damage(
                    self.player.combatant.attack,
                    Some(&mut self.player.combatant),
                    &mut self.rng,
                    &mut self.sink,
                );
                Ok(true)
            }
            PlayerAction::Defend => {
                self.player.combatant.is_defending = true;
                self.sink.notify(BattleEvent::Message(format!(
                    "{} takes a defensive stance.",
                    self.player.combatant.name
                )));
                Ok(true)
            }
            PlayerAction::UseAbility => {
                let abilities = self.player.role.abilities();
                let view = TurnView {
                    turn: self.turn,
                    player: &self.player,
                    boss: &self.boss,
                    boss_enraged: self.policy.is_enraged(),
                };
                let Some(index) = self.input.choose_ability(&abilities, &view) else {
                    return Ok(false);
                };
                let Some(ability) = abilities.get(index) else {
                    return Ok(false);
                };
                if self.player.mana < ability.cost {
                    return Err(ActionError::InsufficientMana {
                        needed: ability.cost,
                        available: self.player.mana,
                    });
                }
                self.player.mana -= ability.cost;
                ability.invoke(
                    &mut self.player.combatant,
                    &mut self.boss,
                    &mut self.rng,
                    &mut self.sink,
                );
                Ok(true)
            }
            PlayerAction::UsePotion => {
                if self.player.potions == 0 {
                    return Err(ActionError::OutOfPotions);
                }
                self.player.potions -= 1;
                self.sink.notify(BattleEvent::Message(format!(
                    "{} drinks a health potion.",
                    self.player.combatant.name
                )));
                self.player.combatant.heal(POTION_HEAL, &mut self.sink);
                Ok(true)
            }
        }
    }

    /// One boss turn. `Some` means the battle ended during it.
    fn boss_turn(&mut self) -> Option<BattleOutcome> {
        let skipped = process_status_effects(&mut self.boss, &mut self.sink);
        if !self.boss.is_alive() {
            return Some(BattleOutcome::Victory);
        }
        if skipped {
            return None;
        }

        self.sink.notify(BattleEvent::Message(format!(
            "{}'s turn...",
            self.boss.name
        )));
        self.policy.choose_action(
            &mut self.boss,
            &mut self.player.combatant,
            &mut self.rng,
            &mut self.sink,
        );

        if !self.player.combatant.is_alive() {
            return Some(BattleOutcome::Defeat);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventLog;
    use crate::status::StatusEffect;
    use std::collections::VecDeque;

    /// Scripted collaborator: feeds queued choices, then falls back to
    /// basic attacks.
    struct Script {
        actions: VecDeque<PlayerAction>,
        abilities: VecDeque<Option<usize>>,
    }

    impl Script {
        fn new(actions: &[PlayerAction]) -> Self {
            Self {
                actions: actions.iter().copied().collect(),
                abilities: VecDeque::new(),
            }
        }

        fn with_abilities(mut self, picks: &[Option<usize>]) -> Self {
            self.abilities = picks.iter().copied().collect();
            self
        }
    }

    impl InputSource for Script {
        fn enter_name(&mut self) -> String {
            String::new()
        }

        fn choose_role(&mut self, roles: &[Role]) -> Role {
            roles[0]
        }

        fn choose_weapon(&mut self, _role: Role, choices: &[WeaponKind]) -> WeaponKind {
            choices[0]
        }

        fn choose_action(&mut self, _view: &TurnView<'_>) -> PlayerAction {
            self.actions.pop_front().unwrap_or(PlayerAction::BasicAttack)
        }

        fn choose_ability(
            &mut self,
            _abilities: &[Ability; 3],
            _view: &TurnView<'_>,
        ) -> Option<usize> {
            self.abilities.pop_front().unwrap_or(Some(0))
        }
    }

    fn engine_with(
        player: Player,
        boss: Combatant,
        script: Script,
        seed: u64,
    ) -> BattleEngine<EventLog, Script> {
        BattleEngine::with_combatants(player, boss, BattleRng::new(seed), EventLog::new(), script)
    }

    #[test]
    fn test_setup_defaults_blank_name_to_hero() {
        let engine = BattleEngine::setup(
            BattleRng::new(1),
            EventLog::new(),
            Script::new(&[]),
        );
        assert_eq!(engine.player().combatant.name, "Hero");
        assert!(engine.player().combatant.weapon.is_some());
        assert_eq!(engine.boss().name, boss::BOSS_NAME);
    }

    #[test]
    fn test_unaffordable_ability_reprompts_without_spending() {
        // Warrior mana forced to 3: Reckless Swing (20) is refused, the
        // re-prompt lands on a basic attack, and no mana is spent.
        let mut player = Player::new("Kara", Role::Warrior);
        player.mana = 3;
        let script = Script::new(&[PlayerAction::UseAbility, PlayerAction::BasicAttack])
            .with_abilities(&[Some(2)]);
        let mut engine = engine_with(player, boss::spawn_boss(), script, 11);

        let outcome = engine.player_turn();
        assert!(outcome.is_none());
        assert_eq!(engine.player().mana, 3 + crate::player::MANA_REGEN_PER_TURN);
        assert!(engine.sink.saw_message("Not enough mana"));
        assert!(engine.boss().hp < 250);
    }

    #[test]
    fn test_potion_with_empty_belt_reprompts() {
        let mut player = Player::new("Kara", Role::Warrior);
        player.potions = 0;
        let script = Script::new(&[PlayerAction::UsePotion, PlayerAction::Defend]);
        let mut engine = engine_with(player, boss::spawn_boss(), script, 11);

        let outcome = engine.player_turn();
        assert!(outcome.is_none());
        assert!(engine.sink.saw_message("out of health potions"));
        assert!(engine.player().combatant.is_defending);
    }

    #[test]
    fn test_ability_backout_returns_to_action_menu() {
        let player = Player::new("Kara", Role::Warrior);
        let script = Script::new(&[PlayerAction::UseAbility, PlayerAction::BasicAttack])
            .with_abilities(&[None]);
        let mut engine = engine_with(player, boss::spawn_boss(), script, 11);

        engine.player_turn();
        let stats = Role::Warrior.stats();
        assert_eq!(engine.player().mana, stats.mana);
        assert!(engine.boss().hp < 250);
    }

    #[test]
    fn test_stunned_player_skips_action_but_regens_mana() {
        let mut player = Player::new("Kara", Role::Warrior);
        player.mana = 10;
        player.combatant.statuses.apply(StatusEffect::Stunned, 1);
        // The script's fallback action attacks, so an untouched boss proves
        // the engine never prompted during the stunned turn.
        let script = Script::new(&[]);
        let mut engine = engine_with(player, boss::spawn_boss(), script, 11);

        let before = engine.boss().hp;
        let outcome = engine.player_turn();
        assert!(outcome.is_none());
        assert_eq!(engine.boss().hp, before);
        assert_eq!(engine.player().mana, 15);
        assert!(!engine.player().combatant.statuses.contains(StatusEffect::Stunned));
    }

    #[test]
    fn test_boss_killed_by_player_action_ends_before_boss_turn() {
        let player = Player::new("Kara", Role::Warrior);
        let mut boss = boss::spawn_boss();
        boss.hp = 1;
        let script = Script::new(&[PlayerAction::BasicAttack]);
        let mut engine = engine_with(player, boss, script, 11);

        let outcome = engine.run();
        assert_eq!(outcome, BattleOutcome::Victory);
        assert!(!engine.sink.saw_message("'s turn..."));
        assert!(engine.sink.events.iter().any(|e| matches!(
            e,
            BattleEvent::Victory { name } if name == "Kara"
        )));
    }

    #[test]
    fn test_status_death_at_turn_start_is_a_defeat() {
        let mut player = Player::new("Kara", Role::Warrior);
        player.combatant.hp = 4;
        player.combatant.statuses.apply(StatusEffect::Poison, 2);
        let script = Script::new(&[]);
        let mut engine = engine_with(player, boss::spawn_boss(), script, 11);

        let outcome = engine.run();
        assert_eq!(outcome, BattleOutcome::Defeat);
        assert!(engine.sink.events.iter().any(|e| matches!(
            e,
            BattleEvent::Defeat { name } if name == "Kara"
        )));
    }

    #[test]
    fn test_turn_counter_advances_per_completed_round() {
        // Neither side can finish the fight in round one, so a full battle
        // must advance the counter past its starting value.
        let player = Player::new("Kara", Role::Warrior);
        let script = Script::new(&[]);
        let mut engine = engine_with(player, boss::spawn_boss(), script, 42);

        assert_eq!(engine.turn(), 1);
        engine.run();
        assert!(engine.turn() >= 2);
    }
}
