use clap::{Parser, Subcommand};
use std::process::ExitCode;
use sudoku_engine::{Difficulty, Generator, Grid, Solver};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sudoku", version, about = "Generate and solve Sudoku puzzles")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a puzzle with a unique solution
    Generate {
        /// Difficulty: easy, medium, or hard (anything else means medium)
        #[arg(short, long, default_value = "medium")]
        difficulty: String,
        /// Fixed seed for reproducible puzzles
        #[arg(long)]
        seed: Option<u64>,
        /// Also print the solution
        #[arg(long)]
        solve: bool,
    },
    /// Solve an 81-character puzzle string (digits, with `0` or `.` for empty)
    Solve {
        puzzle: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match Cli::parse().command {
        Command::Generate {
            difficulty,
            seed,
            solve,
        } => {
            let difficulty = Difficulty::from_name(&difficulty);
            let mut generator = match seed {
                Some(seed) => Generator::with_seed(seed),
                None => Generator::new(),
            };
            let puzzle = generator.generate(difficulty);
            println!("Generated {} puzzle ({} clues):", difficulty, puzzle.clue_count());
            print!("{}", puzzle);
            if solve {
                // Generated puzzles always have exactly one solution.
                if let Some(solution) = Solver::new().solve(&puzzle) {
                    println!("\nSolution:");
                    print!("{}", solution);
                }
            }
            ExitCode::SUCCESS
        }
        Command::Solve { puzzle } => {
            let grid: Grid = match puzzle.parse() {
                Ok(grid) => grid,
                Err(err) => {
                    eprintln!("error: {}", err);
                    return ExitCode::FAILURE;
                }
            };
            match Solver::new().solve(&grid) {
                Some(solution) => {
                    println!("Solution:");
                    print!("{}", solution);
                    ExitCode::SUCCESS
                }
                None => {
                    eprintln!("no solution exists for this puzzle");
                    ExitCode::FAILURE
                }
            }
        }
    }
}
