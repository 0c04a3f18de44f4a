//! Console frontend for the Moby Dick text adventure.

mod console;

use std::io;
use std::process;
use std::time::Duration;

use clap::Parser;

use console::{ConsoleInput, ConsolePresenter};
use pequod_story::GameState;

#[derive(Parser)]
#[command(
    name = "pequod",
    about = "Moby Dick — a retro text adventure aboard the whaler Pequod",
    version
)]
struct Cli {
    /// Print narration instantly instead of with the typewriter effect
    #[arg(long)]
    fast: bool,

    /// Per-character narration delay in milliseconds
    #[arg(long, default_value = "30", conflicts_with = "fast")]
    delay_ms: u64,
}

fn main() {
    let cli = Cli::parse();
    let delay = if cli.fast {
        Duration::ZERO
    } else {
        Duration::from_millis(cli.delay_ms)
    };

    let stdin = io::stdin();
    let mut presenter = ConsolePresenter::new(delay);
    let mut input = ConsoleInput::new(stdin.lock(), io::stdout());
    let mut state = GameState::new();

    if let Err(e) = pequod_story::run(&mut state, &mut presenter, &mut input) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
