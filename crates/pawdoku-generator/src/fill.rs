//! Full-grid generation by randomized backtracking.

use pawdoku_core::{Digit, DigitGrid, Position, rules};
use rand::{Rng, seq::SliceRandom as _};

/// Generates a complete, valid solution grid.
///
/// Cells are filled in row-major order; at each empty cell the nine digits
/// are tried in a freshly shuffled order, recursing on each valid placement
/// and reverting on failure. A 9×9 grid always admits a completion, so the
/// scan never fails overall; dead ends only unwind inner levels.
pub(crate) fn generate_solution<R: Rng>(rng: &mut R) -> DigitGrid {
    let mut grid = DigitGrid::new();
    let complete = fill_from(&mut grid, 0, rng);
    debug_assert!(complete, "a 9x9 grid always has a completion");
    grid
}

fn fill_from<R: Rng>(grid: &mut DigitGrid, index: usize, rng: &mut R) -> bool {
    let Some(&pos) = Position::ALL.get(index) else {
        return true;
    };
    let mut digits = Digit::ALL;
    digits.shuffle(rng);
    for digit in digits {
        if rules::is_valid(grid, pos, digit) {
            grid.set(pos, Some(digit));
            if fill_from(grid, index + 1, rng) {
                return true;
            }
            grid.set(pos, None);
        }
    }
    false
}
