//! Blocking stdin prompts
//!
//! Every menu re-prompts on unparsable input, so the core only ever sees
//! valid, typed selections. A closed stdin falls back to the first option
//! instead of spinning.

use std::io::{self, Write};

use bb_core::ability::Ability;
use bb_core::role::Role;
use bb_core::weapon::{SpecialEffect, WeaponKind};
use bb_core::{InputSource, PlayerAction, TurnView};

use crate::display;

/// Numeric-menu input collaborator over stdin
#[derive(Debug, Default)]
pub struct ConsolePrompt;

impl ConsolePrompt {
    pub fn new() -> Self {
        Self
    }
}

/// One trimmed line, or `None` once stdin is closed
fn read_trimmed() -> Option<String> {
    io::stdout().flush().ok();
    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(buf.trim().to_string()),
    }
}

/// Selection in `1..=max`, re-prompting until valid
fn read_menu_choice(max: usize) -> usize {
    loop {
        print!("> ");
        let Some(line) = read_trimmed() else {
            return 1;
        };
        match line.parse::<usize>() {
            Ok(n) if (1..=max).contains(&n) => return n,
            _ => println!("Invalid choice. Please choose again."),
        }
    }
}

fn weapon_summary(kind: WeaponKind) -> String {
    let stats = kind.stats();
    let mut parts = Vec::new();
    if stats.attack_bonus != 0 {
        parts.push(format!("{:+} ATK", stats.attack_bonus));
    }
    if stats.defense_bonus != 0 {
        parts.push(format!("{:+} DEF", stats.defense_bonus));
    }
    if stats.crit_bonus > 0.0 {
        parts.push(format!("+{}% crit", (stats.crit_bonus * 100.0).round() as i32));
    }
    if let Some(special) = stats.special {
        let (chance, what) = match special {
            SpecialEffect::Ignite { chance, .. } => (chance, "ignite the foe"),
            SpecialEffect::Venom { chance, .. } => (chance, "poison the foe"),
            SpecialEffect::Lifesteal { chance, .. } => (chance, "steal life"),
            SpecialEffect::Jolt { chance, .. } => (chance, "arc lightning"),
            SpecialEffect::Concussion { chance, .. } => (chance, "stagger the foe"),
        };
        parts.push(format!("{}% to {what} on hit", (chance * 100.0).round() as i32));
    }
    parts.join(", ")
}

impl InputSource for ConsolePrompt {
    fn enter_name(&mut self) -> String {
        println!("Enter your hero's name:");
        print!("> ");
        read_trimmed().unwrap_or_default()
    }

    fn choose_role(&mut self, roles: &[Role]) -> Role {
        display::print_header("Choose Your Class");
        for (i, role) in roles.iter().enumerate() {
            println!("{}: {role} - {}", i + 1, role.tagline());
        }
        roles[read_menu_choice(roles.len()) - 1]
    }

    fn choose_weapon(&mut self, role: Role, choices: &[WeaponKind]) -> WeaponKind {
        display::print_header(&format!("Choose Your Weapon ({role})"));
        for (i, kind) in choices.iter().enumerate() {
            println!("{}: {} ({})", i + 1, kind.stats().name, weapon_summary(*kind));
        }
        choices[read_menu_choice(choices.len()) - 1]
    }

    fn choose_action(&mut self, view: &TurnView<'_>) -> PlayerAction {
        display::render_turn(view);
        println!("Choose your action:");
        println!("1: Basic Attack");
        println!("2: Defend");
        println!("3: Use Ability");
        println!("4: Use Health Potion ({} left)", view.player.potions);
        match read_menu_choice(4) {
            1 => PlayerAction::BasicAttack,
            2 => PlayerAction::Defend,
            3 => PlayerAction::UseAbility,
            _ => PlayerAction::UsePotion,
        }
    }

    fn choose_ability(&mut self, abilities: &[Ability; 3], view: &TurnView<'_>) -> Option<usize> {
        println!("Choose an ability (Mana: {}/{}):", view.player.mana, view.player.max_mana);
        for (i, ability) in abilities.iter().enumerate() {
            println!("{}: {} (Cost: {} Mana)", i + 1, ability.name, ability.cost);
        }
        println!("0: Back");
        print!("> ");
        let line = read_trimmed()?;
        match line.parse::<usize>() {
            Ok(n) if (1..=abilities.len()).contains(&n) => Some(n - 1),
            Ok(0) => None,
            _ => {
                println!("Invalid choice.");
                None
            }
        }
    }
}
