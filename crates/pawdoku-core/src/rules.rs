//! Validity and conflict checking.
//!
//! Every function here is a pure read of the grid: the candidate digit is
//! passed as a parameter and the cell under test is excluded from its own
//! row, column, and block scans. Nothing is ever written back, so a cell can
//! be re-validated while it still holds a digit (as backtracking and
//! incremental edits require).

use crate::{Digit, DigitGrid, DigitSet, Position};

/// The group a conflict was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictGroup {
    /// The conflicting cells share the tested cell's row.
    Row,
    /// The conflicting cells share the tested cell's column.
    Column,
    /// The conflicting cells share the tested cell's 3×3 block.
    Block,
}

/// A single-group conflict report: the first group (row → column → block)
/// that already holds the tested digit, with the offending cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    /// The group the conflict was found in.
    pub group: ConflictGroup,
    /// The cells in that group that hold the conflicting digit.
    pub cells: Vec<Position>,
}

/// Returns whether `digit` could legally occupy `pos`.
///
/// True iff no other cell in the same row, column, or block holds `digit`.
/// The cell at `pos` itself is ignored, so a digit already placed there does
/// not conflict with itself.
///
/// # Examples
///
/// ```
/// use pawdoku_core::{Digit, DigitGrid, Position, rules};
///
/// let grid: DigitGrid = format!("5{}", ".".repeat(80)).parse()?;
/// assert!(!rules::is_valid(&grid, Position::new(0, 8), Digit::D5));
/// assert!(rules::is_valid(&grid, Position::new(8, 8), Digit::D5));
/// // The occupied cell re-validates against its own digit.
/// assert!(rules::is_valid(&grid, Position::new(0, 0), Digit::D5));
/// # Ok::<(), pawdoku_core::grid::ParseGridError>(())
/// ```
#[must_use]
pub fn is_valid(grid: &DigitGrid, pos: Position, digit: Digit) -> bool {
    pos.peers().iter().all(|peer| grid[*peer] != Some(digit))
}

/// Returns the candidate set of `pos`: every digit that [`is_valid`] accepts.
#[must_use]
pub fn candidates(grid: &DigitGrid, pos: Position) -> DigitSet {
    let mut set = DigitSet::FULL;
    for peer in pos.peers() {
        if let Some(digit) = grid[peer] {
            set.remove(digit);
        }
    }
    set
}

/// Returns the first conflicting group for placing `digit` at `pos`.
///
/// Groups are checked in priority order row → column → block, and only the
/// first group with a conflict is reported. Use this for single-reason
/// explanations; use [`detect_all_conflicts`] for exhaustive highlighting.
#[must_use]
pub fn detect_conflict(grid: &DigitGrid, pos: Position, digit: Digit) -> Option<Conflict> {
    let groups = [
        (ConflictGroup::Row, Position::row_cells(pos.row())),
        (ConflictGroup::Column, Position::column_cells(pos.col())),
        (ConflictGroup::Block, Position::block_cells(pos.block())),
    ];
    for (group, cells) in groups {
        let conflicts: Vec<Position> = cells
            .into_iter()
            .filter(|cell| *cell != pos && grid[*cell] == Some(digit))
            .collect();
        if !conflicts.is_empty() {
            return Some(Conflict {
                group,
                cells: conflicts,
            });
        }
    }
    None
}

/// Returns every cell conflicting with placing `digit` at `pos`.
///
/// The union of the row, column, and block conflicts, deduplicated. An empty
/// result means the placement is valid. The result is always a superset of
/// the cells reported by [`detect_conflict`].
#[must_use]
pub fn detect_all_conflicts(grid: &DigitGrid, pos: Position, digit: Digit) -> Vec<Position> {
    let mut conflicts: Vec<Position> = Vec::new();
    for group in [
        Position::row_cells(pos.row()),
        Position::column_cells(pos.col()),
        Position::block_cells(pos.block()),
    ] {
        for cell in group {
            if cell != pos && grid[cell] == Some(digit) && !conflicts.contains(&cell) {
                conflicts.push(cell);
            }
        }
    }
    conflicts
}

/// Returns whether every cell of the grid is filled.
#[must_use]
pub fn is_grid_complete(grid: &DigitGrid) -> bool {
    grid.is_complete()
}

/// Returns whether every filled cell is free of conflicts.
///
/// Empty cells are ignored, so a partially filled board can be fully valid.
#[must_use]
pub fn is_grid_fully_valid(grid: &DigitGrid) -> bool {
    Position::ALL
        .into_iter()
        .all(|pos| grid[pos].is_none_or(|digit| is_valid(grid, pos, digit)))
}
