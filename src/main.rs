//! go-board: a minimal Go board-state engine.
//!
//! ## Usage
//!
//! - `go-board` - Show a demo
//! - `go-board shell` - Read text-protocol commands from stdin
//! - `go-board random --seed 7 --moves 60` - Fill a board with random moves
//!
//! Set `RUST_LOG=debug` to trace placements on stderr.

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use go_board::constants::DEFAULT_SIZE;
use go_board::game::{Game, Stone};
use go_board::protocol::TextEngine;
use go_board::score::Tally;

/// go-board: a minimal Go board-state engine
#[derive(Parser)]
#[command(name = "go-board")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size (NxN)
    #[arg(long, global = true, default_value_t = DEFAULT_SIZE)]
    size: usize,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a short scripted game and print the results
    Demo,
    /// Read text-protocol commands from stdin and answer on stdout
    Shell,
    /// Play seeded random moves, then print the board and tallies
    Random {
        /// Seed for the move generator
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Number of placement attempts
        #[arg(long, default_value_t = 60)]
        moves: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let game = Game::new(cli.size).with_context(|| format!("creating {0}x{0} board", cli.size))?;
    info!(size = cli.size, "board ready");

    match cli.command {
        Some(Commands::Shell) => {
            let mut engine = TextEngine::new(game);
            engine.run(io::stdin().lock(), io::stdout())?;
        }
        Some(Commands::Random { seed, moves }) => run_random(game, seed, moves),
        Some(Commands::Demo) | None => run_demo(game),
    }
    Ok(())
}

fn run_demo(mut game: Game) {
    println!("go-board: minimal Go board-state engine\n");

    let plays = [
        ("black", 4, 4),
        ("white", 4, 4),
        ("white", 4, 5),
        ("white", 4, 6),
        ("white", 5, 6),
    ];
    for (color, x, y) in plays {
        let status = match game.play(color, x, y) {
            Ok(()) => "ok".to_string(),
            Err(e) => e.to_string(),
        };
        println!("{color} at ({x},{y}): {status}");
    }
    for (x, y) in [(4, 4), (4, 5), (4, 6), (5, 6)] {
        if let Some(libs) = game.liberties(x, y) {
            println!("liberties at ({x},{y}): {libs}");
        }
    }
    println!("\n{}\n", game.board());
    print_tallies(&game);
}

fn run_random(mut game: Game, seed: u64, moves: usize) {
    let mut rng = fastrand::Rng::with_seed(seed);
    let size = game.board().size() as isize;
    let mut rejected = 0;
    for i in 0..moves {
        let stone = if i % 2 == 0 { Stone::Black } else { Stone::White };
        let (x, y) = (rng.isize(0..size), rng.isize(0..size));
        if game.place(stone, x, y).is_err() {
            rejected += 1;
        }
    }
    info!(seed, moves, rejected, "random fill done");
    println!("{} moves, {} rejected\n", moves, rejected);
    println!("{}\n", game.board());
    print_tallies(&game);
}

fn print_tallies(game: &Game) {
    fn line(tally: &Tally) -> String {
        tally
            .iter()
            .map(|(color, n)| format!("{color}: {n}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
    println!("score:      {}", line(&game.score()));
    println!("area score: {}", line(&game.area_score()));
}
