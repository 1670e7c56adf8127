//! Backtracking Sudoku engine.
//!
//! The engine has three layers:
//! - [`Grid`]: the 9x9 cell matrix, constraint checking, and parsing.
//! - [`Solver`]: randomized-order backtracking search, plus solution
//!   counting with an early cutoff for uniqueness tests.
//! - [`Generator`]: fills a complete random grid, then carves cells back
//!   out while the puzzle keeps exactly one solution.
//!
//! ```
//! use sudoku_engine::{Difficulty, Generator, Solver};
//!
//! let mut generator = Generator::with_seed(42);
//! let puzzle = generator.generate(Difficulty::Medium);
//! assert!(Solver::with_seed(42).has_unique_solution(&puzzle));
//! ```

mod generator;
mod grid;
mod solver;

pub use generator::{Difficulty, Generator};
pub use grid::{Grid, ParseGridError, Position};
pub use solver::Solver;
