//! Hexplay: play Hex against a Monte Carlo engine.
//!
//! ## Usage
//!
//! - `hexplay` - Play an interactive game (same as `hexplay play`)
//! - `hexplay demo` - Watch the engine play itself
//! - `hexplay suggest` - Score every move in a given position
//!
//! Set `RUST_LOG=debug` to see per-candidate scores on stderr.

use std::io;

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use fastrand::Rng;

use hexplay::board::{Board, Color, Point};
use hexplay::constants::{DEFAULT_SIZE, PLAYOUTS};
use hexplay::game::Game;
use hexplay::selector::{MonteCarloSelector, MoveSelector};

/// Hexplay: Hex against a Monte Carlo engine
#[derive(Parser)]
#[command(name = "hexplay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game in the terminal
    Play {
        #[command(flatten)]
        engine: EngineArgs,
        /// Do not clear the screen between turns
        #[arg(long)]
        no_clear: bool,
    },
    /// Let the engine play both sides and print every move
    Demo {
        #[arg(long, default_value_t = 5)]
        size: usize,
        #[command(flatten)]
        engine: EngineArgs,
    },
    /// Score every empty cell of a position for one side
    Suggest {
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        size: usize,
        /// Black stones as `row,col`
        #[arg(long, value_parser = parse_point, num_args = 1..)]
        black: Vec<Point>,
        /// White stones as `row,col`
        #[arg(long, value_parser = parse_point, num_args = 1..)]
        white: Vec<Point>,
        /// Side to move
        #[arg(long, value_enum)]
        color: Side,
        #[command(flatten)]
        engine: EngineArgs,
    },
}

#[derive(Args)]
struct EngineArgs {
    /// Random playouts per candidate move
    #[arg(long, default_value_t = PLAYOUTS)]
    playouts: usize,
    /// Seed for reproducible play
    #[arg(long)]
    seed: Option<u64>,
}

impl EngineArgs {
    fn selector(&self) -> MonteCarloSelector {
        let rng = self.seed.map_or_else(Rng::new, Rng::with_seed);
        MonteCarloSelector::with_rng(self.playouts, rng)
    }
}

#[derive(Copy, Clone, ValueEnum)]
enum Side {
    #[value(alias = "b")]
    Black,
    #[value(alias = "w")]
    White,
}

impl From<Side> for Color {
    fn from(side: Side) -> Color {
        match side {
            Side::Black => Color::Black,
            Side::White => Color::White,
        }
    }
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (r, c) = s
        .split_once(',')
        .ok_or_else(|| format!("expected row,col but got '{s}'"))?;
    let r = r.trim().parse().map_err(|e| format!("bad row '{r}': {e}"))?;
    let c = c.trim().parse().map_err(|e| format!("bad column '{c}': {e}"))?;
    Ok((r, c))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play { engine, no_clear }) => run_game(&engine, !no_clear),
        Some(Commands::Demo { size, engine }) => run_demo(size, &engine),
        Some(Commands::Suggest {
            size,
            black,
            white,
            color,
            engine,
        }) => run_suggest(size, &black, &white, color.into(), &engine),
        None => run_game(
            &EngineArgs {
                playouts: PLAYOUTS,
                seed: None,
            },
            true,
        ),
    }
}

fn run_game(engine: &EngineArgs, clear_screen: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut game = Game::new(stdin.lock(), io::stdout(), engine.selector())
        .with_clear_screen(clear_screen);
    game.run()
}

fn run_demo(size: usize, engine: &EngineArgs) -> Result<()> {
    if size == 0 {
        bail!("board size must be positive");
    }
    println!("Hexplay: Monte Carlo self-play on {size}x{size}\n");

    let mut board = Board::new(size);
    let mut ai = engine.selector();
    let mut color = Color::Black;
    loop {
        let (r, c) = ai.select_move(&mut board, color);
        board.place(r, c, color);
        println!("{color} plays {r} {c}");
        println!("{board}");
        if board.local_win(r, c) {
            println!("{color} wins");
            return Ok(());
        }
        color = color.opponent();
    }
}

fn run_suggest(
    size: usize,
    black: &[Point],
    white: &[Point],
    color: Color,
    engine: &EngineArgs,
) -> Result<()> {
    if size == 0 {
        bail!("board size must be positive");
    }
    let mut board = Board::new(size);
    for (&(r, c), stone) in black
        .iter()
        .map(|pt| (pt, Color::Black))
        .chain(white.iter().map(|pt| (pt, Color::White)))
    {
        if !board.place(r, c, stone) {
            bail!("cannot place {stone} at {r},{c}: off the board or occupied");
        }
    }
    if board.is_full() {
        bail!("board is full, nothing to suggest");
    }
    println!("{board}");

    let scores = engine.selector().candidate_scores(&mut board, color);
    let mut best = (scores[0].0, 0.0);
    for &((r, c), score) in &scores {
        println!("{r} {c}: {:.1}%", score * 100.0);
        if score > best.1 {
            best = ((r, c), score);
        }
    }
    let ((r, c), score) = best;
    println!("Best move for {color}: {r} {c} ({:.1}%)", score * 100.0);
    Ok(())
}
