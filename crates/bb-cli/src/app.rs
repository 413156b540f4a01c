//! Interactive battle shell: wires the core engine to the console

use bb_core::{BattleEngine, BattleOutcome, BattleRng};

use crate::display::{self, ConsoleSink};
use crate::input::ConsolePrompt;

/// Run one battle from setup to epilogue
pub fn run(seed: Option<u64>, color: bool) {
    let rng = match seed {
        Some(s) => BattleRng::new(s),
        None => BattleRng::from_entropy(),
    };

    display::print_header("BOSS BATTLE");
    println!("Battle seed: {} (replay with --seed)", rng.seed());

    let sink = ConsoleSink::new(color);
    let input = ConsolePrompt::new();
    let mut engine = BattleEngine::setup(rng, sink, input);
    let outcome = engine.run();

    display::print_header("Battle Over");
    match outcome {
        BattleOutcome::Victory => {
            println!(
                "Congratulations! You have defeated the {} in {} turns!",
                engine.boss().name,
                engine.turn()
            );
        }
        BattleOutcome::Defeat => {
            println!("You have been defeated... The world is shrouded in darkness.");
        }
    }
}
