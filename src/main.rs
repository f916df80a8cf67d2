//! Thistlethwaite Cube Solver
//!
//! Scrambles a 3x3x3 Rubik's cube (or takes a scramble in face-turn
//! notation) and solves it through Thistlethwaite's four phases, printing
//! the scramble and the solution. Set `RUST_LOG=debug` for per-phase search
//! statistics.

use clap::{Parser, Subcommand};

use thistle::cube::Cube;
use thistle::moves::{self, Move};
use thistle::phase::Phase;
use thistle::scramble;
use thistle::solver;

/// Default number of random scramble moves.
const DEFAULT_SCRAMBLE_LEN: usize = 30;

/// Solves a scrambled Rubik's cube with Thistlethwaite's algorithm.
#[derive(Parser)]
#[command(name = "thistle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scramble a cube and solve it phase by phase.
    Solve {
        /// Fixed scramble in face-turn notation, e.g. "R U2 F' D L2".
        #[arg(long)]
        scramble: Option<String>,
        /// Number of random scramble moves when no fixed scramble is given.
        #[arg(long, default_value_t = DEFAULT_SCRAMBLE_LEN)]
        random: usize,
        /// RNG seed for a reproducible random scramble.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print a random scramble without solving it.
    Scramble {
        /// Number of scramble moves.
        #[arg(long, default_value_t = DEFAULT_SCRAMBLE_LEN)]
        moves: usize,
        /// RNG seed for a reproducible scramble.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Some(Command::Solve { scramble, random, seed }) => {
            let moves = match scramble {
                Some(notation) => parse_scramble(&notation),
                None => random_scramble(random, seed),
            };
            run_solve(&moves)
        }
        Some(Command::Scramble { moves: length, seed }) => {
            println!("{}", moves::format_sequence(&random_scramble(length, seed)));
            Ok(())
        }
        None => {
            // default: random scramble, then solve
            run_solve(&random_scramble(DEFAULT_SCRAMBLE_LEN, None))
        }
    };

    if let Err(e) = outcome {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Parses user-supplied scramble notation, exiting on malformed input.
fn parse_scramble(notation: &str) -> Vec<Move> {
    match moves::parse_sequence(notation) {
        Ok(moves) => moves,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    }
}

/// Generates a random scramble, seeded when requested.
fn random_scramble(length: usize, seed: Option<u64>) -> Vec<Move> {
    let mut rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    scramble::random_moves(length, &mut rng)
}

/// Applies the scramble, solves phase by phase, and prints the result.
fn run_solve(scramble: &[Move]) -> Result<(), solver::SolveError> {
    println!("Scramble: {}", moves::format_sequence(scramble));
    let start = Cube::solved().apply_all(scramble);
    println!("{start}");

    let goal = Cube::solved();
    let mut state = start;
    let mut solution = Vec::new();

    for phase in Phase::ALL {
        let path = solver::solve(&state, &goal, phase)?;
        println!("{phase}: {}", moves::format_sequence(&path));
        state = state.apply_all(&path);
        solution.extend(path);
    }

    println!("Solution: {}", moves::format_sequence(&solution));
    println!(
        "{} moves, cube {}",
        solution.len(),
        if state.is_solved() { "solved" } else { "NOT solved" }
    );
    Ok(())
}
