//! Styled console output for battle events

use bb_core::status::StatusEffect;
use bb_core::{BattleEvent, EventSink, TurnView};
use crossterm::style::{Color, Stylize};

const HEADER_WIDTH: usize = 40;
const HP_BAR_WIDTH: usize = 20;
const MANA_BAR_WIDTH: usize = 10;

/// Prints battle events to stdout, optionally colored
pub struct ConsoleSink {
    color: bool,
}

impl ConsoleSink {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            format!("{}", text.with(color))
        } else {
            text.to_string()
        }
    }
}

impl EventSink for ConsoleSink {
    fn notify(&mut self, event: BattleEvent) {
        match event {
            BattleEvent::Message(text) => println!("{text}"),
            BattleEvent::Damage { target, amount } => {
                let line = format!("{target} takes {amount} damage!");
                println!("{}", self.paint(&line, Color::Red));
            }
            BattleEvent::Heal { target, amount } => {
                let line = format!("{target} heals for {amount} HP!");
                println!("{}", self.paint(&line, Color::Green));
            }
            BattleEvent::CriticalHit { attacker } => {
                let line = format!("*** CRITICAL HIT from {attacker}! ***");
                println!("{}", self.paint(&line, Color::Yellow));
            }
            BattleEvent::StatusApplied {
                target,
                effect,
                duration,
            } => {
                let line = format!(
                    "{target} is afflicted with {} ({duration} turns)!",
                    effect.name()
                );
                println!("{}", self.paint(&line, status_color(effect)));
            }
            BattleEvent::StatusExpired { target, effect } => {
                println!("{target} is no longer affected by {}.", effect.name());
            }
            BattleEvent::Defeat { name } => {
                let line = format!("{name} has fallen...");
                println!("{}", self.paint(&line, Color::DarkRed));
            }
            BattleEvent::Victory { name } => {
                let line = format!("{name} is victorious!");
                println!("{}", self.paint(&line, Color::Green));
            }
        }
    }
}

fn status_color(effect: StatusEffect) -> Color {
    match effect {
        StatusEffect::Poison => Color::DarkGreen,
        StatusEffect::Burning => Color::Red,
        StatusEffect::Stunned => Color::Yellow,
        StatusEffect::Cursed => Color::Magenta,
        StatusEffect::Intimidated => Color::DarkYellow,
        StatusEffect::Entangled => Color::Green,
    }
}

/// Boxed section header
pub fn print_header(title: &str) {
    let width = HEADER_WIDTH;
    println!("{}", "=".repeat(width));
    println!("{title:^width$}");
    println!("{}", "=".repeat(width));
}

fn bar(current: i32, max: i32, width: usize, fill: char) -> String {
    let filled = if max > 0 {
        (current as usize * width) / max as usize
    } else {
        0
    };
    let mut s = String::new();
    s.push('[');
    for i in 0..width {
        s.push(if i < filled { fill } else { ' ' });
    }
    s.push(']');
    s
}

fn status_summary(combatant: &bb_core::combatant::Combatant) -> String {
    let parts: Vec<String> = combatant
        .statuses
        .iter()
        .map(|(effect, turns)| format!("{} ({turns} turns)", effect.name()))
        .collect();
    parts.join(", ")
}

/// Turn header with both sides' vitals, printed before each action prompt
pub fn render_turn(view: &TurnView<'_>) {
    let player = &view.player.combatant;
    let boss = view.boss;

    print_header(&format!("Turn {}", view.turn));
    println!(
        "{}: HP {}/{} {}",
        player.name,
        player.hp,
        player.max_hp,
        bar(player.hp, player.max_hp, HP_BAR_WIDTH, '#')
    );
    if !player.statuses.is_empty() {
        println!("  Status: {}", status_summary(player));
    }
    println!(
        "  Mana: {}/{} {} | Potions: {}",
        view.player.mana,
        view.player.max_mana,
        bar(view.player.mana, view.player.max_mana, MANA_BAR_WIDTH, '@'),
        view.player.potions
    );

    let enrage_tag = if view.boss_enraged { " [ENRAGED]" } else { "" };
    println!(
        "{}{}: HP {}/{} {}",
        boss.name,
        enrage_tag,
        boss.hp,
        boss.max_hp,
        bar(boss.hp, boss.max_hp, HP_BAR_WIDTH, '#')
    );
    if !boss.statuses.is_empty() {
        println!("  Status: {}", status_summary(boss));
    }
    println!("{}", "-".repeat(HEADER_WIDTH));
}
