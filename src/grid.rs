//! Feedback grid owned by the UI side.
//!
//! A `Grid` is a fixed R×C matrix of cells. Each cell holds an optional letter
//! and the judgment the puzzle gave it. Rows are attempts and only matter as
//! repeated evidence; columns are absolute letter positions.

use std::fmt;
use thiserror::Error;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 5;

/// Per-letter feedback from the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Judgment {
    /// Letter is not in the word (gray)
    #[default]
    Absent,
    /// Letter is in the word but not here (yellow)
    Misplaced,
    /// Letter is in the word at exactly this position (green)
    Correct,
}

impl Judgment {
    /// Parse a feedback character (g=green, y=yellow, x/b/.=gray), case-insensitive.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' => Some(Judgment::Correct),
            'y' => Some(Judgment::Misplaced),
            'x' | 'b' | '.' => Some(Judgment::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Judgment::Correct => 'G',
            Judgment::Misplaced => 'Y',
            Judgment::Absent => 'X',
        }
    }

    /// The judgment a cell moves to when the user cycles it.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Judgment::Absent => Judgment::Misplaced,
            Judgment::Misplaced => Judgment::Correct,
            Judgment::Correct => Judgment::Absent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub letter: Option<char>,
    pub judgment: Judgment,
}

impl Cell {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letter.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid must have at least one row and one column, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },
    #[error("invalid letter {0:?}: expected a single letter A-Z")]
    InvalidLetter(String),
    #[error("invalid feedback character {0:?}: expected G, Y or X")]
    InvalidFeedback(char),
    #[error("expected {expected} characters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("every row is already filled")]
    Full,
}

/// Row-major matrix of cells with dimensions fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cells: vec![Cell::default(); DEFAULT_ROWS * DEFAULT_COLS],
        }
    }
}

impl Grid {
    /// Create an empty grid.
    ///
    /// # Errors
    /// Returns `GridError::InvalidDimensions` if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::default(); rows * cols],
        })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds { row, col });
        }
        Ok(row * self.cols + col)
    }

    /// # Errors
    /// Returns `GridError::OutOfBounds` for coordinates outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell, GridError> {
        let idx = self.index(row, col)?;
        Ok(&self.cells[idx])
    }

    /// Cells of one row, left to right.
    ///
    /// # Errors
    /// Returns `GridError::OutOfBounds` if `row` is past the last row.
    pub fn row(&self, row: usize) -> Result<&[Cell], GridError> {
        if row >= self.rows {
            return Err(GridError::OutOfBounds { row, col: 0 });
        }
        let start = row * self.cols;
        Ok(&self.cells[start..start + self.cols])
    }

    /// Place a letter in a cell, keeping its current judgment.
    ///
    /// # Errors
    /// Returns `GridError::InvalidLetter` unless `letter` is one ASCII letter,
    /// or `GridError::OutOfBounds` for a bad position.
    pub fn set_letter(&mut self, row: usize, col: usize, letter: char) -> Result<(), GridError> {
        let idx = self.index(row, col)?;
        if !letter.is_ascii_alphabetic() {
            return Err(GridError::InvalidLetter(letter.to_string()));
        }
        self.cells[idx].letter = Some(letter.to_ascii_uppercase());
        Ok(())
    }

    /// # Errors
    /// Returns `GridError::OutOfBounds` for a bad position.
    pub fn clear_letter(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        let idx = self.index(row, col)?;
        self.cells[idx].letter = None;
        Ok(())
    }

    /// # Errors
    /// Returns `GridError::OutOfBounds` for a bad position.
    pub fn set_judgment(
        &mut self,
        row: usize,
        col: usize,
        judgment: Judgment,
    ) -> Result<(), GridError> {
        let idx = self.index(row, col)?;
        self.cells[idx].judgment = judgment;
        Ok(())
    }

    /// Advance a cell to the next judgment and return it.
    ///
    /// # Errors
    /// Returns `GridError::OutOfBounds` for a bad position.
    pub fn cycle_judgment(&mut self, row: usize, col: usize) -> Result<Judgment, GridError> {
        let idx = self.index(row, col)?;
        let next = self.cells[idx].judgment.next();
        self.cells[idx].judgment = next;
        Ok(next)
    }

    /// Fill a whole row from a guess and its feedback string (e.g. `"CRANE"`, `"XYGXX"`).
    ///
    /// The row is left untouched if anything fails validation.
    ///
    /// # Errors
    /// Returns `GridError::LengthMismatch` when either string does not match the
    /// column count, `GridError::InvalidLetter`/`GridError::InvalidFeedback` for
    /// bad characters, or `GridError::OutOfBounds` for a bad row.
    pub fn set_row(&mut self, row: usize, guess: &str, feedback: &str) -> Result<(), GridError> {
        if row >= self.rows {
            return Err(GridError::OutOfBounds { row, col: 0 });
        }
        let letters: Vec<char> = guess.chars().collect();
        let marks: Vec<char> = feedback.chars().collect();
        for len in [letters.len(), marks.len()] {
            if len != self.cols {
                return Err(GridError::LengthMismatch {
                    expected: self.cols,
                    actual: len,
                });
            }
        }

        let mut new_cells = Vec::with_capacity(self.cols);
        for (&letter, &mark) in letters.iter().zip(&marks) {
            if !letter.is_ascii_alphabetic() {
                return Err(GridError::InvalidLetter(letter.to_string()));
            }
            let judgment = Judgment::from_char(mark).ok_or(GridError::InvalidFeedback(mark))?;
            new_cells.push(Cell {
                letter: Some(letter.to_ascii_uppercase()),
                judgment,
            });
        }

        let start = row * self.cols;
        self.cells[start..start + self.cols].copy_from_slice(&new_cells);
        Ok(())
    }

    /// # Errors
    /// Returns `GridError::OutOfBounds` if `row` is past the last row.
    pub fn clear_row(&mut self, row: usize) -> Result<(), GridError> {
        if row >= self.rows {
            return Err(GridError::OutOfBounds { row, col: 0 });
        }
        let start = row * self.cols;
        self.cells[start..start + self.cols].fill(Cell::default());
        Ok(())
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// First row without any letters, if one is left.
    #[must_use]
    pub fn next_empty_row(&self) -> Option<usize> {
        self.cells
            .chunks(self.cols)
            .position(|row| row.iter().all(Cell::is_empty))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    /// Every non-empty cell as `(column, letter, judgment)`, row by row.
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, char, Judgment)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.letter
                .map(|letter| (i % self.cols, letter, cell.judgment))
        })
    }
}

impl fmt::Display for Grid {
    /// One line per row: letters, a space, then judgments. Empty cells show as `_`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let letters: String = row.iter().map(|c| c.letter.unwrap_or('_')).collect();
            let marks: String = row
                .iter()
                .map(|c| if c.is_empty() { '_' } else { c.judgment.to_char() })
                .collect();
            write!(f, "{letters} {marks}")?;
        }
        Ok(())
    }
}
