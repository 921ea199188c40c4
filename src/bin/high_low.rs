//! Terminal High-Low.
//!
//! Renders the table, reads one command per line and dispatches it.
//! `quit` or end of input leaves the game.

use std::io::{self, BufRead, Write};

use clap::Parser;
use high_low::core::{GameEvent, GameState};
use high_low::games::high_low::GameEngineBuilder;
use high_low::view::View;
use log::{info, LevelFilter};

/// Guess whether the next card is higher or lower.
#[derive(Parser, Debug)]
#[command(name = "high-low")]
#[command(about = "Guess whether the next card is higher or lower")]
struct Args {
    /// Random seed for a reproducible session
    #[arg(long, env = "HIGH_LOW_SEED")]
    seed: Option<u64>,

    /// Log ignored events and transitions
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut logger = env_logger::builder();
    logger.format_target(false);
    if args.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let mut builder = GameEngineBuilder::new();
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    let mut game = builder.build();
    info!("session seed {}", game.source().seed());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        let view = View::from(&game.snapshot());
        writeln!(stdout, "\n{view}")?;
        write!(stdout, "> ")?;
        stdout.flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let line = line.trim();
        if matches!(line, "q" | "quit" | "exit") {
            break;
        }

        match line.parse::<GameEvent>() {
            Ok(event) => {
                if !game.send(event) {
                    let keys: Vec<&str> = view.controls.iter().map(|c| c.key()).collect();
                    writeln!(stdout, "not now; try {}", keys.join(" or "))?;
                } else if game.state() == GameState::Result {
                    let ctx = game.context();
                    if let (Some(left), Some(right), Some(choice), Some(outcome)) =
                        (ctx.left_value(), ctx.right_value(), ctx.user_choice(), ctx.result())
                    {
                        info!("{left} then {right}, guessed {choice}: {outcome}");
                    }
                }
            }
            Err(err) => writeln!(stdout, "{err}")?,
        }
    }

    Ok(())
}
