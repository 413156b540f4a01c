//! bb-core: combat resolution engine for the boss-battle simulator
//!
//! This crate contains all battle logic with no I/O dependencies.
//! Presentation and input are external collaborators behind the
//! [`EventSink`] and [`InputSource`] traits; the core never formats
//! colors or reads the terminal itself.

pub mod ability;
pub mod boss;
pub mod combatant;
pub mod engine;
pub mod event;
pub mod player;
pub mod role;
pub mod status;
pub mod weapon;

mod rng;

pub use engine::{ActionError, BattleEngine, BattleOutcome, InputSource, PlayerAction, TurnView};
pub use event::{BattleEvent, EventLog, EventSink, NullSink};
pub use rng::BattleRng;
