//! Bounded solution counting.

use pawdoku_core::{Digit, DigitGrid, Position, rules};

/// Counts completions of `grid`, stopping as soon as `limit` is reached.
///
/// A standard backtracking solver over the empty cells in row-major order,
/// trying every valid candidate per cell. The early exit keeps the
/// uniqueness check ("is the count exactly 1?") priced at the cost of
/// finding a *second* solution rather than enumerating all of them.
///
/// # Examples
///
/// ```
/// use pawdoku_generator::count_solutions;
///
/// let empty = pawdoku_core::DigitGrid::new();
/// assert_eq!(count_solutions(&empty, 2), 2);
/// ```
#[must_use]
pub fn count_solutions(grid: &DigitGrid, limit: usize) -> usize {
    let mut scratch = grid.clone();
    let mut count = 0;
    count_from(&mut scratch, 0, limit, &mut count);
    count
}

fn count_from(grid: &mut DigitGrid, index: usize, limit: usize, count: &mut usize) {
    if *count >= limit {
        return;
    }
    let mut index = index;
    while index < 81 && grid[Position::ALL[index]].is_some() {
        index += 1;
    }
    let Some(&pos) = Position::ALL.get(index) else {
        *count += 1;
        return;
    };
    for digit in Digit::ALL {
        if rules::is_valid(grid, pos, digit) {
            grid.set(pos, Some(digit));
            count_from(grid, index + 1, limit, count);
            grid.set(pos, None);
            if *count >= limit {
                return;
            }
        }
    }
}
