use clap::Parser;

/// Turn-based boss battle in the terminal
#[derive(Parser)]
#[command(name = "bossbattle", version, about)]
struct Args {
    /// Seed for a reproducible battle
    #[arg(long)]
    seed: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let args = Args::parse();
    bb_cli::app::run(args.seed, !args.no_color);
}
