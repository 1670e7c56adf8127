use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A cell coordinate: row and column, each in `0..9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Top-left corner of the 3x3 box containing this position
    pub fn box_origin(&self) -> Position {
        Position::new(self.row - self.row % 3, self.col - self.col % 3)
    }

    /// Index of the containing box, 0..9 in row-major box order
    pub fn box_index(&self) -> usize {
        (self.row / 3) * 3 + self.col / 3
    }

    /// All 81 positions in row-major order
    pub fn all() -> impl Iterator<Item = Position> {
        (0..81).map(|i| Position::new(i / 9, i % 9))
    }
}

/// Error produced when parsing a grid from an 81-character puzzle string
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseGridError {
    #[error("puzzle string must be 81 characters, got {0}")]
    BadLength(usize),
    #[error("invalid character {ch:?} at offset {offset}")]
    BadChar { ch: char, offset: usize },
}

/// A 9x9 Sudoku grid. `None` is an empty cell, `Some(d)` a digit 1-9.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Option<u8>; 9]; 9],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self {
            cells: [[None; 9]; 9],
        }
    }

    /// Get the digit at a position, if any
    pub fn get(&self, pos: Position) -> Option<u8> {
        self.cells[pos.row][pos.col]
    }

    /// Place a digit at a position
    pub fn set(&mut self, pos: Position, digit: u8) {
        debug_assert!((1..=9).contains(&digit));
        self.cells[pos.row][pos.col] = Some(digit);
    }

    /// Empty a cell
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = None;
    }

    /// Check whether `digit` may legally be placed at `pos`: true iff the
    /// cell is empty and the digit appears nowhere else in the same row,
    /// column, or 3x3 box.
    pub fn is_safe(&self, pos: Position, digit: u8) -> bool {
        if self.get(pos).is_some() {
            return false;
        }
        for i in 0..9 {
            if self.cells[pos.row][i] == Some(digit) || self.cells[i][pos.col] == Some(digit) {
                return false;
            }
        }
        let origin = pos.box_origin();
        for r in origin.row..origin.row + 3 {
            for c in origin.col..origin.col + 3 {
                if self.cells[r][c] == Some(digit) {
                    return false;
                }
            }
        }
        true
    }

    /// First empty cell in row-major scan order, or `None` if the grid is
    /// full. The fixed scan order keeps search behavior reproducible for a
    /// given digit order.
    pub fn first_empty(&self) -> Option<Position> {
        Position::all().find(|&pos| self.get(pos).is_none())
    }

    /// Number of filled cells
    pub fn clue_count(&self) -> usize {
        Position::all().filter(|&pos| self.get(pos).is_some()).count()
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        81 - self.clue_count()
    }

    /// True if all 81 cells are filled
    pub fn is_complete(&self) -> bool {
        self.first_empty().is_none()
    }

    /// True if no row, column, or box contains a duplicate digit
    pub fn is_valid(&self) -> bool {
        let no_dup = |cells: &mut dyn Iterator<Item = Option<u8>>| {
            let mut seen = [false; 10];
            for cell in cells {
                if let Some(d) = cell {
                    if seen[d as usize] {
                        return false;
                    }
                    seen[d as usize] = true;
                }
            }
            true
        };

        for i in 0..9 {
            if !no_dup(&mut (0..9).map(|c| self.cells[i][c])) {
                return false;
            }
            if !no_dup(&mut (0..9).map(|r| self.cells[r][i])) {
                return false;
            }
            let (br, bc) = ((i / 3) * 3, (i % 3) * 3);
            if !no_dup(&mut (0..9).map(|j| self.cells[br + j / 3][bc + j % 3])) {
                return false;
            }
        }
        true
    }

    /// Render as a plain 81-character line, `.` for empty cells
    pub fn to_line(&self) -> String {
        Position::all()
            .map(|pos| match self.get(pos) {
                Some(d) => (b'0' + d) as char,
                None => '.',
            })
            .collect()
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parse the conventional 81-character puzzle string. Digits 1-9 are
    /// clues; `0` and `.` are empty cells.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 81 {
            return Err(ParseGridError::BadLength(chars.len()));
        }
        let mut grid = Grid::new();
        for (offset, &ch) in chars.iter().enumerate() {
            let pos = Position::new(offset / 9, offset % 9);
            match ch {
                '.' | '0' => {}
                '1'..='9' => grid.set(pos, ch as u8 - b'0'),
                _ => return Err(ParseGridError::BadChar { ch, offset }),
            }
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    /// Box-drawing rendering: `.` for empty cells, `|` between column
    /// bands, `+-------+` between row bands.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+-------+-------+-------+")?;
        for row in 0..9 {
            write!(f, "|")?;
            for col in 0..9 {
                match self.cells[row][col] {
                    Some(d) => write!(f, " {}", d)?,
                    None => write!(f, " .")?,
                }
                if (col + 1) % 3 == 0 {
                    write!(f, " |")?;
                }
            }
            writeln!(f)?;
            if (row + 1) % 3 == 0 {
                writeln!(f, "+-------+-------+-------+")?;
            }
        }
        Ok(())
    }
}
