//! Battle event stream
//!
//! The core never prints. Everything the presentation layer needs to show
//! is delivered through [`EventSink::notify`]; formatting, color, and pacing
//! all live on the other side of that trait.

use crate::status::StatusEffect;

/// One observable battle occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    /// Freeform narration line ("Kara uses Power Strike!")
    Message(String),
    /// Damage applied to a combatant, after mitigation and clamping
    Damage { target: String, amount: i32 },
    /// HP restored to a combatant
    Heal { target: String, amount: i32 },
    /// A hit rolled critical
    CriticalHit { attacker: String },
    /// A status effect landed (durations never refresh, so this fires only
    /// on first application)
    StatusApplied {
        target: String,
        effect: StatusEffect,
        duration: u8,
    },
    /// A status effect's counter reached zero and was removed
    StatusExpired { target: String, effect: StatusEffect },
    /// A combatant fell
    Defeat { name: String },
    /// A combatant won the encounter
    Victory { name: String },
}

/// Presentation collaborator
pub trait EventSink {
    fn notify(&mut self, event: BattleEvent);
}

/// Sink that records every event, for tests and headless drivers
#[derive(Debug, Default)]
pub struct EventLog {
    pub events: Vec<BattleEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total post-mitigation damage recorded against `name`
    pub fn damage_to(&self, name: &str) -> i32 {
        self.events
            .iter()
            .filter_map(|e| match e {
                BattleEvent::Damage { target, amount } if target == name => Some(*amount),
                _ => None,
            })
            .sum()
    }

    /// Whether any narration line contains `needle`
    pub fn saw_message(&self, needle: &str) -> bool {
        self.events.iter().any(|e| match e {
            BattleEvent::Message(text) => text.contains(needle),
            _ => false,
        })
    }
}

impl EventSink for EventLog {
    fn notify(&mut self, event: BattleEvent) {
        self.events.push(event);
    }
}

/// Sink that drops everything
#[derive(Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn notify(&mut self, _event: BattleEvent) {}
}
