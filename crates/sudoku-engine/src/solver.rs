use crate::Grid;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Backtracking Sudoku solver and solution counter.
///
/// Search order is randomized: each search node tries the nine digits in a
/// freshly shuffled order, so repeated solves of an under-constrained grid
/// produce different solutions. The randomness source is owned by the
/// solver; construct with [`Solver::with_seed`] for reproducible searches.
pub struct Solver {
    rng: StdRng,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a solver seeded from the operating system
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a solver with a fixed seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Solve the puzzle, returning the solved grid if one exists
    pub fn solve(&mut self, grid: &Grid) -> Option<Grid> {
        let mut working = grid.clone();
        if self.solve_in_place(&mut working) {
            Some(working)
        } else {
            None
        }
    }

    /// Solve the grid in place. Returns true and leaves the grid fully
    /// assigned on success; returns false and leaves the grid exactly as it
    /// was (every trial placement backtracked) if no completion exists.
    pub fn solve_in_place(&mut self, grid: &mut Grid) -> bool {
        let pos = match grid.first_empty() {
            Some(pos) => pos,
            None => return true,
        };
        for digit in self.shuffled_digits() {
            if grid.is_safe(pos, digit) {
                grid.set(pos, digit);
                if self.solve_in_place(grid) {
                    return true;
                }
                grid.clear(pos);
            }
        }
        false
    }

    /// Count the completions of the grid, capped at `limit`. The search
    /// aborts as soon as the running count reaches `limit`, so the result
    /// only distinguishes 0, 1, ..., limit-1, and "at least limit". The
    /// caller's grid is never mutated.
    pub fn count_solutions(&mut self, grid: &Grid, limit: usize) -> usize {
        let mut working = grid.clone();
        let mut count = 0;
        self.count_recursive(&mut working, &mut count, limit);
        count
    }

    /// Check that the puzzle has exactly one solution
    pub fn has_unique_solution(&mut self, grid: &Grid) -> bool {
        self.count_solutions(grid, 2) == 1
    }

    fn count_recursive(&mut self, grid: &mut Grid, count: &mut usize, limit: usize) {
        if *count >= limit {
            return;
        }
        let pos = match grid.first_empty() {
            Some(pos) => pos,
            None => {
                *count += 1;
                return;
            }
        };
        for digit in self.shuffled_digits() {
            if grid.is_safe(pos, digit) {
                grid.set(pos, digit);
                self.count_recursive(grid, count, limit);
                grid.clear(pos);
                if *count >= limit {
                    return;
                }
            }
        }
    }

    /// A fresh uniform permutation of the digits 1..=9
    fn shuffled_digits(&mut self) -> [u8; 9] {
        let mut digits = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        digits.shuffle(&mut self.rng);
        digits
    }
}
