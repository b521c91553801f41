//! The 9×9 digit grid.

use std::fmt::{self, Display};
use std::ops::Index;
use std::str::FromStr;

use crate::{Digit, Position};

/// A 9×9 grid of optional digits, indexed by [`Position`].
///
/// `None` represents an empty cell. Three grids make up a game: the complete
/// solution, the carved givens, and the live board.
///
/// Grids parse from and format to 81-character strings in row-major order,
/// with `.` (or `0`) for empty cells; whitespace is ignored. This is the
/// fixture format used throughout the test suites.
///
/// # Examples
///
/// ```
/// use pawdoku_core::{Digit, DigitGrid, Position};
///
/// let grid: DigitGrid = format!("5{}", ".".repeat(80)).parse()?;
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(grid.filled_count(), 1);
/// # Ok::<(), pawdoku_core::grid::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid([Option<Digit>; 81]);

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self([None; 81])
    }

    /// Returns the digit at the given position, or `None` if the cell is empty.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.0[pos.index()]
    }

    /// Sets or clears the cell at the given position.
    pub fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.0[pos.index()] = digit;
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.0.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns whether every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.0[pos.index()]
    }
}

/// Error returned when parsing a [`DigitGrid`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The string does not contain exactly 81 cell characters.
    #[display("expected 81 cells, found {_0}")]
    WrongCellCount(#[error(not(source))] usize),
    /// A character is neither a digit, `.`, `0`, nor whitespace.
    #[display("invalid cell character {_0:?}")]
    InvalidCharacter(#[error(not(source))] char),
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    #[expect(clippy::cast_possible_truncation)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut count = 0;
        for c in s.chars() {
            if c.is_whitespace() {
                continue;
            }
            let digit = match c {
                '.' | '0' => None,
                '1'..='9' => Digit::try_from_value(c as u8 - b'0'),
                _ => return Err(ParseGridError::InvalidCharacter(c)),
            };
            if count == 81 {
                return Err(ParseGridError::WrongCellCount(count + 1));
            }
            grid.0[count] = digit;
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount(count));
        }
        Ok(grid)
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.0 {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}
