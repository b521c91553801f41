//! Puzzle generation for the Pawdoku engine.
//!
//! Generation runs in two phases:
//!
//! 1. **Fill**: a complete, valid solution grid is produced by randomized
//!    backtracking.
//! 2. **Carve**: cells are removed from a copy of the solution in shuffled
//!    order; a removal is kept only while the puzzle still has exactly one
//!    completion, checked with a bounded solution counter
//!    ([`count_solutions`]).
//!
//! A carved board is additionally rejected when it gives too much away:
//! when fewer than 80% of the difficulty's removal target could be cleared,
//! when some digit is already fully placed nine times, or when a 3×3 block
//! is completely filled. Rejection triggers a fresh fill-and-carve round,
//! bounded by a fixed cap; if every round is rejected the best attempt is
//! returned and a warning is logged rather than looping forever.
//!
//! Both phases draw from independent streams of a [`PuzzleSeed`], so every
//! puzzle is reproducible from its seed alone.
//!
//! # Examples
//!
//! ```
//! use pawdoku_generator::{Difficulty, PuzzleGenerator, count_solutions};
//!
//! let generator = PuzzleGenerator::new(Difficulty::Easy);
//! let puzzle = generator.generate();
//!
//! assert!(puzzle.solution.is_complete());
//! assert_eq!(count_solutions(&puzzle.problem, 2), 1);
//!
//! // The same seed reproduces the same puzzle.
//! let again = generator.generate_with_seed(puzzle.seed);
//! assert_eq!(again.problem, puzzle.problem);
//! ```

use pawdoku_core::{Digit, DigitGrid, Position};
use rand::{Rng, SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;

mod count;
mod fill;
pub mod seed;

pub use self::{count::count_solutions, seed::PuzzleSeed};

/// Puzzle difficulty, mapping to a cell-removal target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Difficulty {
    /// 35 of 81 cells removed.
    #[display("easy")]
    Easy,
    /// 45 of 81 cells removed.
    #[display("medium")]
    Medium,
    /// 50 of 81 cells removed.
    #[display("hard")]
    Hard,
}

impl Difficulty {
    /// All difficulties in ascending order.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the number of cells the carver aims to remove.
    #[must_use]
    pub const fn removal_target(self) -> usize {
        match self {
            Self::Easy => 35,
            Self::Medium => 45,
            Self::Hard => 50,
        }
    }
}

/// A generated puzzle: the carved problem, its unique solution, and the seed
/// that reproduces both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The carved board; its filled cells are the givens.
    pub problem: DigitGrid,
    /// The complete solution the problem was carved from.
    pub solution: DigitGrid,
    /// The seed this puzzle was generated from.
    pub seed: PuzzleSeed,
    /// How many cells the carver removed. Compare against
    /// [`Difficulty::removal_target`] to detect a below-target fallback.
    pub removed: usize,
}

/// Carve attempts per round, across all 81 shuffled cells.
const MAX_CARVE_ATTEMPTS: usize = 200;

/// Fill-and-carve rounds before settling for the best attempt seen.
const MAX_GENERATION_ROUNDS: usize = 24;

/// Generates puzzles of a fixed difficulty.
///
/// # Examples
///
/// ```
/// use pawdoku_generator::{Difficulty, PuzzleGenerator};
///
/// let generator = PuzzleGenerator::new(Difficulty::Medium);
/// let puzzle = generator.generate();
/// assert_eq!(puzzle.problem.filled_count() + puzzle.removed, 81);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator {
    difficulty: Difficulty,
}

impl PuzzleGenerator {
    /// Creates a generator for the given difficulty.
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    /// Returns the difficulty this generator produces.
    #[must_use]
    pub const fn difficulty(self) -> Difficulty {
        self.difficulty
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// A potentially expensive blocking call (backtracking with retries);
    /// interactive callers should keep it off their responsiveness path.
    #[must_use]
    pub fn generate(self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut fill_rng = Pcg64::from_seed(seed.stream(b"fill"));
        let mut carve_rng = Pcg64::from_seed(seed.stream(b"carve"));
        let target = self.difficulty.removal_target();

        let mut best: Option<CarveRound> = None;
        for round in 0..MAX_GENERATION_ROUNDS {
            let solution = fill::generate_solution(&mut fill_rng);
            let (problem, removed) = carve(&solution, target, &mut carve_rng);

            let enough_removed = removed * 5 >= target * 4;
            let policy_ok = !has_fully_placed_digit(&problem) && !has_full_block(&problem);
            if enough_removed && policy_ok {
                log::debug!(
                    "difficulty {}: removed {removed}/{target} cells in round {round}",
                    self.difficulty
                );
                return GeneratedPuzzle {
                    problem,
                    solution,
                    seed,
                    removed,
                };
            }

            log::debug!(
                "carve round {round} rejected: removed {removed}/{target}, policy_ok {policy_ok}"
            );
            let attempt = CarveRound {
                problem,
                solution,
                removed,
                policy_ok,
            };
            if best
                .as_ref()
                .is_none_or(|b| (attempt.policy_ok, attempt.removed) > (b.policy_ok, b.removed))
            {
                best = Some(attempt);
            }
        }

        // Every round was rejected; settle for the best attempt instead of
        // recursing without bound.
        let Some(best) = best else {
            unreachable!("at least one carve round runs");
        };
        log::warn!(
            "difficulty {}: removal target {target} not met after {MAX_GENERATION_ROUNDS} rounds, \
             settling for {} removed cells",
            self.difficulty,
            best.removed
        );
        GeneratedPuzzle {
            problem: best.problem,
            solution: best.solution,
            seed,
            removed: best.removed,
        }
    }
}

struct CarveRound {
    problem: DigitGrid,
    solution: DigitGrid,
    removed: usize,
    policy_ok: bool,
}

/// Removes up to `target` cells from a copy of `solution` while the puzzle
/// keeps a unique completion. Returns the carved board and the removal count.
fn carve<R: Rng>(solution: &DigitGrid, target: usize, rng: &mut R) -> (DigitGrid, usize) {
    let mut board = solution.clone();
    let mut cells = Position::ALL;
    cells.shuffle(rng);

    let mut removed = 0;
    let mut attempts = 0;
    for &pos in &cells {
        if removed >= target || attempts >= MAX_CARVE_ATTEMPTS {
            break;
        }
        attempts += 1;

        let backup = board.get(pos);
        board.set(pos, None);
        if count_solutions(&board, 2) == 1 {
            removed += 1;
        } else {
            board.set(pos, backup);
        }
    }
    (board, removed)
}

/// Whether some digit already occupies all nine of its cells, leaving
/// nothing of it to discover.
fn has_fully_placed_digit(board: &DigitGrid) -> bool {
    Digit::ALL.into_iter().any(|digit| {
        Position::ALL
            .into_iter()
            .filter(|&pos| board[pos] == Some(digit))
            .count()
            == 9
    })
}

/// Whether some 3×3 block is completely filled.
fn has_full_block(board: &DigitGrid) -> bool {
    (0..9).any(|block| {
        Position::block_cells(block)
            .into_iter()
            .all(|pos| board[pos].is_some())
    })
}
