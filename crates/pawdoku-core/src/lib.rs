//! Core data structures and rules for the Pawdoku puzzle engine.
//!
//! This crate defines the shape of the 9×9 board and the pure rule checks
//! that every other component builds on:
//!
//! - [`digit`]: type-safe digits 1-9
//! - [`position`]: `(row, col)` cell addresses and the row/column/block
//!   partition, including peer enumeration
//! - [`grid`]: the 81-cell [`DigitGrid`], with a fixture-friendly
//!   parse/format representation
//! - [`digit_set`]: [`DigitSet`], a bitmask of digits used for candidate sets
//! - [`rules`]: validity and conflict checks as pure functions of a grid
//!
//! The engine treats cell values as plain digits; rendering them as themed
//! symbols is the host application's business.
//!
//! # Examples
//!
//! ```
//! use pawdoku_core::{Digit, DigitGrid, Position, rules};
//!
//! let mut grid = DigitGrid::new();
//! grid.set(Position::new(0, 0), Some(Digit::D5));
//!
//! // 5 now conflicts along the first row, column, and block.
//! assert!(!rules::is_valid(&grid, Position::new(0, 8), Digit::D5));
//! assert!(!rules::candidates(&grid, Position::new(1, 1)).contains(Digit::D5));
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;
pub mod rules;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::DigitGrid,
    position::Position,
    rules::{Conflict, ConflictGroup},
};
