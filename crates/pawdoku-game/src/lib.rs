//! Game session management for the Pawdoku puzzle engine.
//!
//! A [`Game`] owns everything one puzzle in play needs: the immutable
//! solution and givens, the live board, per-cell pencil notes, the undo/redo
//! history, the mistake and hint counters, and the active input mode. All
//! state is explicit, so hosts can run any number of concurrent games.
//!
//! Operations never panic on bad requests: writing to a given cell, noting a
//! conflicting digit, or asking for a hint with none left all come back as
//! rejected results for the caller to inspect.
//!
//! # Examples
//!
//! ```
//! use pawdoku_game::Game;
//! use pawdoku_generator::{Difficulty, PuzzleGenerator};
//!
//! let puzzle = PuzzleGenerator::new(Difficulty::Easy).generate();
//! let mut game = Game::new(puzzle);
//!
//! assert!(!game.is_solved());
//! assert_eq!(game.hints_remaining(), 3);
//! assert_eq!(game.mistakes(), 0);
//! ```

use pawdoku_core::{Digit, DigitSet, Position};

mod game;
mod history;
mod notes;

pub use self::{game::Game, history::MoveRecord, notes::CellNotes};

/// Error returned when an operation targets a cell it may not touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The cell is a given and immutable for the rest of the game.
    #[display("cannot modify a given cell")]
    GivenCell,
    /// Notes are only allowed in empty cells.
    #[display("cannot add a note to a filled cell")]
    FilledCell,
    /// The problem and solution grids do not describe one puzzle.
    #[display("problem and solution grids are incompatible")]
    IncompatibleGrids,
}

/// The active input mode.
///
/// At most one of notes mode and erase mode is active at a time; the enum
/// makes the mutual exclusion structural.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum InputMode {
    /// Taps place digits.
    #[default]
    Normal,
    /// Taps toggle pencil notes.
    Notes,
    /// The next tap erases a cell's oldest note, then the mode turns itself
    /// off.
    Erase,
}

/// The outcome of a [`Game::place`] or [`Game::clear_cell`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Whether the board changed. Re-entering a cell's current value is a
    /// no-op and reports `false`.
    pub changed: bool,
    /// For a digit placement, whether it matches the solution. `None` when
    /// clearing a cell.
    pub correct: Option<bool>,
    /// Every cell conflicting with the placed digit, for highlighting.
    /// Empty for correct placements and clears.
    pub conflicts: Vec<Position>,
}

/// The outcome of a [`Game::toggle_note`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteToggle {
    /// The digit was appended to the cell's notes.
    Added,
    /// The digit was already noted and has been removed.
    Removed,
    /// The cell already holds the maximum number of notes; nothing changed.
    CapacityReached,
    /// The digit is already placed in a peer cell; nothing changed. The
    /// conflicting cells are reported for highlighting.
    Conflicting(Vec<Position>),
}

/// The outcome of a [`Game::request_hint`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintResult {
    /// A cell was selected and highlighted; a second request reveals it.
    Highlighted {
        /// The highlighted cell.
        pos: Position,
        /// The cell's digit in the solution.
        answer: Digit,
        /// The cell's current candidate set, for display.
        candidates: DigitSet,
    },
    /// The previously highlighted cell was filled with its solution digit.
    Revealed {
        /// The revealed cell.
        pos: Position,
        /// The digit written into the board.
        digit: Digit,
    },
    /// No hints remain; no new highlight was started.
    Exhausted,
    /// No empty cell has any candidate (the board is complete or
    /// inconsistent).
    NoneAvailable,
}
