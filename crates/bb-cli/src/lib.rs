//! bb-cli: terminal front end for the boss-battle simulator
//!
//! A thin presentation shell over bb-core: styled event output, numeric
//! stdin menus, one battle per run. All game rules live in the core; this
//! crate only renders and prompts.

pub mod app;
pub mod display;
pub mod input;

pub use display::ConsoleSink;
pub use input::ConsolePrompt;
