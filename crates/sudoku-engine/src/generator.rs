use crate::{Grid, Position, Solver};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use tracing::debug;

/// Difficulty tier of a generated puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Clue-count range the generator samples from for this tier
    pub fn clue_range(&self) -> RangeInclusive<usize> {
        match self {
            Difficulty::Easy => 45..=50,
            Difficulty::Medium => 34..=39,
            Difficulty::Hard => 24..=29,
        }
    }

    /// Parse a difficulty name. Unrecognized names fall back to `Medium`;
    /// malformed input is lenient by design, not an error.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }

    /// All tiers, easiest first
    pub fn all() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Puzzle generator: fills a complete randomized grid, then carves cells
/// back out while the puzzle keeps a unique solution.
pub struct Generator {
    rng: StdRng,
    solver: Solver,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a generator seeded from the operating system
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Create a generator with a fixed seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let solver = Solver::with_seed(rng.gen());
        Self { rng, solver }
    }

    /// Generate a puzzle with a unique solution. The clue count is sampled
    /// uniformly from the tier's range; if carving cannot reach that target
    /// without breaking uniqueness, the puzzle keeps the extra clues. The
    /// full solution is not retained; re-solve the puzzle to recover it.
    pub fn generate(&mut self, difficulty: Difficulty) -> Grid {
        loop {
            let mut grid = Grid::new();
            if !self.fill(&mut grid) {
                // Cannot happen from an empty grid; guard against it anyway.
                debug!("fill failed, restarting generation");
                continue;
            }
            let clues = self.rng.gen_range(difficulty.clue_range());
            let removed = self.carve(&mut grid, 81 - clues);
            debug!(
                %difficulty,
                target_clues = clues,
                removed,
                clues = grid.clue_count(),
                "generated puzzle"
            );
            return grid;
        }
    }

    /// Fill the grid completely with a randomized valid solution. Same
    /// control structure as solving; from an empty grid this virtually
    /// always succeeds.
    pub fn fill(&mut self, grid: &mut Grid) -> bool {
        self.solver.solve_in_place(grid)
    }

    /// Clear up to `to_remove` cells of a solved grid, keeping each removal
    /// only if the puzzle still has exactly one solution. Cells are visited
    /// in a shuffled order; carving stops when the target is reached or
    /// every cell has been tried, whichever comes first. Returns the number
    /// of cells actually removed, which may fall short of `to_remove`.
    pub fn carve(&mut self, grid: &mut Grid, to_remove: usize) -> usize {
        let mut order: Vec<Position> = Position::all().collect();
        order.shuffle(&mut self.rng);

        let mut removed = 0;
        for pos in order {
            if removed >= to_remove {
                break;
            }
            let digit = match grid.get(pos) {
                Some(digit) => digit,
                None => continue,
            };
            grid.clear(pos);
            if self.solver.count_solutions(grid, 2) == 1 {
                removed += 1;
            } else {
                grid.set(pos, digit);
            }
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_produces_a_complete_valid_grid() {
        let mut generator = Generator::with_seed(1);
        let mut grid = Grid::new();
        assert!(generator.fill(&mut grid));
        assert!(grid.is_complete());
        assert!(grid.is_valid());
    }

    #[test]
    fn easy_puzzle_stays_in_clue_range() {
        let mut generator = Generator::with_seed(2);
        let puzzle = generator.generate(Difficulty::Easy);
        let clues = puzzle.clue_count();
        assert!((45..=50).contains(&clues), "clue count {}", clues);
    }

    #[test]
    fn medium_puzzle_stays_in_clue_range() {
        let mut generator = Generator::with_seed(3);
        let puzzle = generator.generate(Difficulty::Medium);
        let clues = puzzle.clue_count();
        assert!((34..=39).contains(&clues), "clue count {}", clues);
    }

    #[test]
    fn hard_puzzle_has_at_least_the_minimum_clues() {
        let mut generator = Generator::with_seed(4);
        let puzzle = generator.generate(Difficulty::Hard);
        // Carving may stop short of the target, leaving extra clues.
        assert!(puzzle.clue_count() >= 24);
    }

    #[test]
    fn generated_puzzles_are_valid_and_unique() {
        let mut generator = Generator::with_seed(5);
        let mut solver = Solver::with_seed(5);
        for &difficulty in Difficulty::all() {
            let puzzle = generator.generate(difficulty);
            assert!(puzzle.is_valid());
            assert!(solver.has_unique_solution(&puzzle));
        }
    }

    #[test]
    fn generated_puzzle_round_trips_through_the_solver() {
        let mut generator = Generator::with_seed(6);
        let mut solver = Solver::with_seed(6);
        let puzzle = generator.generate(Difficulty::Medium);
        let solved = solver.solve(&puzzle).unwrap();
        assert!(solved.is_complete());
        assert!(solved.is_valid());
        for pos in Position::all() {
            if let Some(clue) = puzzle.get(pos) {
                assert_eq!(solved.get(pos), Some(clue));
            }
        }
    }

    #[test]
    fn carve_preserves_uniqueness_when_target_is_extreme() {
        let mut generator = Generator::with_seed(7);
        let mut grid = Grid::new();
        assert!(generator.fill(&mut grid));
        // Asking for more removals than uniqueness allows must not break
        // the puzzle; carving just stops early.
        let removed = generator.carve(&mut grid, 81);
        assert!(removed < 81);
        assert!(Solver::with_seed(7).has_unique_solution(&grid));
    }

    #[test]
    fn unknown_difficulty_name_falls_back_to_medium() {
        assert_eq!(Difficulty::from_name("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_name("HARD"), Difficulty::Hard);
        assert_eq!(Difficulty::from_name("medium"), Difficulty::Medium);
        assert_eq!(Difficulty::from_name("nightmare"), Difficulty::Medium);
        assert_eq!(Difficulty::from_name(""), Difficulty::Medium);
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let a = Generator::with_seed(11).generate(Difficulty::Medium);
        let b = Generator::with_seed(11).generate(Difficulty::Medium);
        assert_eq!(a, b);
    }
}
