use pawdoku_core::{Digit, DigitGrid, DigitSet, Position, rules};
use pawdoku_generator::GeneratedPuzzle;

use crate::{
    GameError, HintResult, InputMode, NoteToggle, Placement,
    history::{MoveHistory, MoveRecord},
    notes::CellNotes,
};

/// Hints granted per game.
const HINT_ALLOWANCE: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HintState {
    Idle,
    Highlighted {
        pos: Position,
        answer: Digit,
        candidates: DigitSet,
    },
}

/// A puzzle in play.
///
/// Owns the solution, the carved givens, the live board, pencil notes, the
/// undo/redo history, and the mistake and hint counters. Givens are
/// immutable for the whole game; every mutating operation checks them first.
///
/// # Example
///
/// ```
/// use pawdoku_core::Position;
/// use pawdoku_game::Game;
/// use pawdoku_generator::{Difficulty, PuzzleGenerator};
///
/// let puzzle = PuzzleGenerator::new(Difficulty::Easy).generate();
/// let mut game = Game::new(puzzle.clone());
///
/// // Fill every empty cell from the solution.
/// for pos in Position::ALL {
///     if game.board()[pos].is_none() {
///         let digit = puzzle.solution[pos].expect("solution is complete");
///         game.place(pos, Some(digit)).unwrap();
///     }
/// }
/// assert!(game.is_solved());
/// assert_eq!(game.mistakes(), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    solution: DigitGrid,
    givens: DigitGrid,
    board: DigitGrid,
    notes: [CellNotes; 81],
    history: MoveHistory,
    input_mode: InputMode,
    hint: HintState,
    mistakes: u32,
    hints_used: u32,
    hints_remaining: u32,
}

impl Game {
    /// Creates a game from a generated puzzle.
    ///
    /// The puzzle's problem cells become the givens; the board starts as a
    /// copy of them.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            problem, solution, ..
        } = puzzle;
        Self::build(problem, solution)
    }

    /// Creates a game from a problem grid and its solution.
    ///
    /// Useful for tests and for hosts restoring an externally persisted
    /// puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IncompatibleGrids`] when the solution is not a
    /// complete valid grid, or when a problem cell disagrees with it.
    pub fn from_grids(problem: &DigitGrid, solution: &DigitGrid) -> Result<Self, GameError> {
        if !rules::is_grid_complete(solution) || !rules::is_grid_fully_valid(solution) {
            return Err(GameError::IncompatibleGrids);
        }
        for pos in Position::ALL {
            if problem[pos].is_some_and(|digit| solution[pos] != Some(digit)) {
                return Err(GameError::IncompatibleGrids);
            }
        }
        Ok(Self::build(problem.clone(), solution.clone()))
    }

    fn build(givens: DigitGrid, solution: DigitGrid) -> Self {
        Self {
            solution,
            board: givens.clone(),
            givens,
            notes: std::array::from_fn(|_| CellNotes::new()),
            history: MoveHistory::new(),
            input_mode: InputMode::Normal,
            hint: HintState::Idle,
            mistakes: 0,
            hints_used: 0,
            hints_remaining: HINT_ALLOWANCE,
        }
    }

    /// Returns the live board.
    #[must_use]
    pub fn board(&self) -> &DigitGrid {
        &self.board
    }

    /// Returns the stored solution.
    #[must_use]
    pub fn solution(&self) -> &DigitGrid {
        &self.solution
    }

    /// Returns the carved givens the game started from.
    #[must_use]
    pub fn givens(&self) -> &DigitGrid {
        &self.givens
    }

    /// Returns whether the cell is a given.
    #[must_use]
    pub fn is_given(&self, pos: Position) -> bool {
        self.givens[pos].is_some()
    }

    /// Returns the pencil notes of the cell.
    #[must_use]
    pub fn notes(&self, pos: Position) -> &CellNotes {
        &self.notes[pos.index()]
    }

    /// Returns the number of incorrect placements made so far.
    ///
    /// Mistakes count attempts, not current board state: undoing an
    /// incorrect placement does not take it back.
    #[must_use]
    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    /// Returns how many new hint highlights may still be started.
    #[must_use]
    pub fn hints_remaining(&self) -> u32 {
        self.hints_remaining
    }

    /// Returns how many cells were revealed by hints.
    #[must_use]
    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    /// Returns the active input mode.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    /// Returns the currently highlighted hint cell, if any.
    #[must_use]
    pub fn active_highlight(&self) -> Option<Position> {
        match self.hint {
            HintState::Idle => None,
            HintState::Highlighted { pos, .. } => Some(pos),
        }
    }

    /// Returns whether an undo is possible.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns whether a redo is possible.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Returns whether every cell of the board is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.board.is_complete()
    }

    /// Returns whether the board is complete and free of conflicts.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.board.is_complete() && rules::is_grid_fully_valid(&self.board)
    }

    /// Returns the digits that are fully placed: nine occurrences, each one
    /// conflict-free.
    ///
    /// Hosts use this to retire a symbol from the input tray.
    #[must_use]
    pub fn completed_digits(&self) -> DigitSet {
        let mut completed = DigitSet::new();
        for digit in Digit::ALL {
            let cells: Vec<Position> = Position::ALL
                .into_iter()
                .filter(|&pos| self.board[pos] == Some(digit))
                .collect();
            if cells.len() == 9
                && cells
                    .iter()
                    .all(|&pos| rules::is_valid(&self.board, pos, digit))
            {
                completed.insert(digit);
            }
        }
        completed
    }

    /// Places a digit, or clears the cell when `value` is `None`.
    ///
    /// The previous value is pushed onto the undo stack and the redo chain
    /// is invalidated. A non-empty placement clears the cell's own notes and
    /// removes the placed digit from every peer's notes. Placements are
    /// graded against the solution: an incorrect digit increments the
    /// mistake counter, but only when the cell was previously empty or held
    /// the correct digit. Swapping one wrong digit for another is not a
    /// second mistake.
    ///
    /// Any active hint highlight is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GivenCell`] if the cell is a given; the board is
    /// left untouched.
    pub fn place(&mut self, pos: Position, value: Option<Digit>) -> Result<Placement, GameError> {
        if self.is_given(pos) {
            return Err(GameError::GivenCell);
        }
        self.hint = HintState::Idle;

        let previous = self.board.get(pos);
        if previous == value {
            return Ok(Placement {
                changed: false,
                correct: None,
                conflicts: Vec::new(),
            });
        }

        self.history.record(MoveRecord { pos, previous });
        self.board.set(pos, value);

        let Some(digit) = value else {
            return Ok(Placement {
                changed: true,
                correct: None,
                conflicts: Vec::new(),
            });
        };

        self.clear_notes_for_placement(pos, digit);

        let correct = self.solution[pos] == Some(digit);
        if correct {
            return Ok(Placement {
                changed: true,
                correct: Some(true),
                conflicts: Vec::new(),
            });
        }

        // A mistake is a fresh wrong answer; overwriting an already-wrong
        // cell does not count again.
        let previous_was_wrong = previous.is_some_and(|prev| self.solution[pos] != Some(prev));
        if !previous_was_wrong {
            self.mistakes += 1;
        }
        Ok(Placement {
            changed: true,
            correct: Some(false),
            conflicts: rules::detect_all_conflicts(&self.board, pos, digit),
        })
    }

    /// Clears the cell back to empty.
    ///
    /// Equivalent to `place(pos, None)`: recorded in history the same way.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GivenCell`] if the cell is a given.
    pub fn clear_cell(&mut self, pos: Position) -> Result<Placement, GameError> {
        self.place(pos, None)
    }

    fn clear_notes_for_placement(&mut self, pos: Position, digit: Digit) {
        self.notes[pos.index()].clear();
        for peer in pos.peers() {
            self.notes[peer.index()].remove(digit);
        }
    }

    /// Undoes the most recent board mutation. Returns whether anything was
    /// undone.
    ///
    /// The mistake counter is not adjusted; mistakes are permanent.
    pub fn undo(&mut self) -> bool {
        let Some(record) = self.history.pop_undo() else {
            return false;
        };
        self.history.push_redo(MoveRecord {
            pos: record.pos,
            previous: self.board.get(record.pos),
        });
        self.board.set(record.pos, record.previous);
        true
    }

    /// Re-applies the most recently undone mutation. Returns whether
    /// anything was redone.
    pub fn redo(&mut self) -> bool {
        let Some(record) = self.history.pop_redo() else {
            return false;
        };
        self.history.push_undo(MoveRecord {
            pos: record.pos,
            previous: self.board.get(record.pos),
        });
        self.board.set(record.pos, record.previous);
        true
    }

    /// Toggles a pencil note.
    ///
    /// Removing an existing note always succeeds. Adding one is refused when
    /// the digit is already placed in a peer cell (the conflicting cells are
    /// reported) or when the cell already holds
    /// [`CellNotes::CAPACITY`] notes.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GivenCell`] for given cells and
    /// [`GameError::FilledCell`] for cells holding a digit.
    pub fn toggle_note(&mut self, pos: Position, digit: Digit) -> Result<NoteToggle, GameError> {
        if self.is_given(pos) {
            return Err(GameError::GivenCell);
        }
        if self.board[pos].is_some() {
            return Err(GameError::FilledCell);
        }

        if self.notes[pos.index()].remove(digit) {
            return Ok(NoteToggle::Removed);
        }
        let conflicts = rules::detect_all_conflicts(&self.board, pos, digit);
        if !conflicts.is_empty() {
            return Ok(NoteToggle::Conflicting(conflicts));
        }
        if self.notes[pos.index()].insert(digit) {
            Ok(NoteToggle::Added)
        } else {
            Ok(NoteToggle::CapacityReached)
        }
    }

    /// Removes the cell's oldest note, if any.
    ///
    /// When erase mode is active and a note was removed, erase mode turns
    /// itself off: one tap, one erasure.
    pub fn erase_oldest_note(&mut self, pos: Position) -> Option<Digit> {
        let removed = self.notes[pos.index()].remove_oldest();
        if removed.is_some() && self.input_mode.is_erase() {
            self.input_mode = InputMode::Normal;
        }
        removed
    }

    /// Removes the cell's newest note, if any.
    ///
    /// This backs a notes-mode tap with no digit selected.
    pub fn remove_newest_note(&mut self, pos: Position) -> Option<Digit> {
        self.notes[pos.index()].remove_newest()
    }

    /// Toggles notes mode on or off, leaving erase mode off either way.
    pub fn toggle_notes_mode(&mut self) -> InputMode {
        self.input_mode = match self.input_mode {
            InputMode::Notes => InputMode::Normal,
            InputMode::Normal | InputMode::Erase => InputMode::Notes,
        };
        self.input_mode
    }

    /// Toggles erase mode on or off, leaving notes mode off either way.
    pub fn toggle_erase_mode(&mut self) -> InputMode {
        self.input_mode = match self.input_mode {
            InputMode::Erase => InputMode::Normal,
            InputMode::Normal | InputMode::Notes => InputMode::Erase,
        };
        self.input_mode
    }

    /// Advances the two-stage hint cycle.
    ///
    /// With no active highlight, scans the empty cells in row-major order
    /// and highlights the one with the fewest candidates (first encountered
    /// wins ties; a single-candidate cell short-circuits the scan), spending
    /// one hint from the allowance. A second request reveals the highlighted
    /// cell with its solution digit. Completing an existing highlight is
    /// free and allowed even when the allowance is spent; only starting a
    /// new highlight consumes a hint.
    ///
    /// If the player filled the highlighted cell in the meantime, the stale
    /// highlight is dropped and a fresh search runs instead.
    pub fn request_hint(&mut self) -> HintResult {
        if let HintState::Highlighted { pos, answer, .. } = self.hint {
            self.hint = HintState::Idle;
            if self.board[pos].is_none() {
                self.board.set(pos, Some(answer));
                self.clear_notes_for_placement(pos, answer);
                self.hints_used += 1;
                return HintResult::Revealed { pos, digit: answer };
            }
            // Stale highlight; fall through to a fresh search.
        }

        if self.hints_remaining == 0 {
            return HintResult::Exhausted;
        }
        let Some((pos, candidates)) = self.easiest_empty_cell() else {
            return HintResult::NoneAvailable;
        };
        let Some(answer) = self.solution[pos] else {
            unreachable!("solution grid is complete");
        };
        self.hints_remaining -= 1;
        self.hint = HintState::Highlighted {
            pos,
            answer,
            candidates,
        };
        HintResult::Highlighted {
            pos,
            answer,
            candidates,
        }
    }

    /// The empty cell with the fewest candidates, ties broken by row-major
    /// order. `None` when no empty cell has any candidate.
    fn easiest_empty_cell(&self) -> Option<(Position, DigitSet)> {
        let mut best: Option<(Position, DigitSet)> = None;
        for pos in Position::ALL {
            if self.board[pos].is_some() {
                continue;
            }
            let candidates = rules::candidates(&self.board, pos);
            if candidates.is_empty() {
                continue;
            }
            if best.as_ref().is_none_or(|(_, b)| candidates.len() < b.len()) {
                let single = candidates.len() == 1;
                best = Some((pos, candidates));
                if single {
                    break;
                }
            }
        }
        best
    }

    /// Rewinds the game to its initial state: the board returns to the
    /// givens, and notes, history, mistakes, hint state, and the input mode
    /// are all reset.
    pub fn restart(&mut self) {
        self.board = self.givens.clone();
        for notes in &mut self.notes {
            notes.clear();
        }
        self.history.clear();
        self.input_mode = InputMode::Normal;
        self.hint = HintState::Idle;
        self.mistakes = 0;
        self.hints_used = 0;
        self.hints_remaining = HINT_ALLOWANCE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str = "\
        123456789\
        456789123\
        789123456\
        234567891\
        567891234\
        891234567\
        345678912\
        678912345\
        912345678";

    fn solution_grid() -> DigitGrid {
        SOLVED.parse().expect("valid grid text")
    }

    /// A game whose board is the solution minus the listed cells.
    fn game_with_empties(cells: &[Position]) -> Game {
        let solution = solution_grid();
        let mut problem = solution.clone();
        for &pos in cells {
            problem.set(pos, None);
        }
        Game::from_grids(&problem, &solution).expect("compatible grids")
    }

    /// A game with no givens at all.
    fn open_game() -> Game {
        Game::from_grids(&DigitGrid::new(), &solution_grid()).expect("compatible grids")
    }

    #[test]
    fn test_from_grids_rejects_incompatible_input() {
        let incomplete = DigitGrid::new();
        assert_eq!(
            Game::from_grids(&DigitGrid::new(), &incomplete),
            Err(GameError::IncompatibleGrids)
        );

        let solution = solution_grid();
        let mut contradicting = DigitGrid::new();
        contradicting.set(Position::new(0, 0), Some(Digit::D9)); // solution has 1
        assert_eq!(
            Game::from_grids(&contradicting, &solution),
            Err(GameError::IncompatibleGrids)
        );

        let mut duplicated = solution.clone();
        duplicated.set(Position::new(0, 0), Some(Digit::D2));
        assert_eq!(
            Game::from_grids(&DigitGrid::new(), &duplicated),
            Err(GameError::IncompatibleGrids)
        );
    }

    #[test]
    fn test_place_correct_digit() {
        let pos = Position::new(0, 0);
        let mut game = game_with_empties(&[pos]);

        let placement = game.place(pos, Some(Digit::D1)).unwrap();
        assert!(placement.changed);
        assert_eq!(placement.correct, Some(true));
        assert!(placement.conflicts.is_empty());
        assert_eq!(game.board()[pos], Some(Digit::D1));
        assert_eq!(game.mistakes(), 0);
        assert!(game.is_solved());
    }

    #[test]
    fn test_place_clears_own_and_peer_notes() {
        let a = Position::new(0, 0);
        let b = Position::new(0, 1);
        let mut game = game_with_empties(&[a, b]);

        // The only non-conflicting note digits here are the solution values.
        assert_eq!(game.toggle_note(a, Digit::D1).unwrap(), NoteToggle::Added);
        assert_eq!(game.toggle_note(b, Digit::D2).unwrap(), NoteToggle::Added);

        // An incorrect placement still sweeps the digit out of peer notes.
        let placement = game.place(a, Some(Digit::D2)).unwrap();
        assert_eq!(placement.correct, Some(false));
        assert_eq!(placement.conflicts, vec![Position::new(3, 0)]);
        assert!(game.notes(a).is_empty());
        assert!(game.notes(b).is_empty());
    }

    #[test]
    fn test_mistake_counting() {
        let pos = Position::new(0, 0);
        let mut game = game_with_empties(&[pos, Position::new(0, 1)]);

        // Fresh wrong answer on an empty cell.
        game.place(pos, Some(Digit::D5)).unwrap();
        assert_eq!(game.mistakes(), 1);

        // Wrong replacing wrong: no new mistake.
        game.place(pos, Some(Digit::D6)).unwrap();
        assert_eq!(game.mistakes(), 1);

        // Re-entering the same wrong digit is a no-op.
        let placement = game.place(pos, Some(Digit::D6)).unwrap();
        assert!(!placement.changed);
        assert_eq!(game.mistakes(), 1);

        // Correcting the cell, then spoiling it again, is a new mistake.
        game.place(pos, Some(Digit::D1)).unwrap();
        assert_eq!(game.mistakes(), 1);
        game.place(pos, Some(Digit::D7)).unwrap();
        assert_eq!(game.mistakes(), 2);
    }

    #[test]
    fn test_mistakes_survive_undo() {
        let pos = Position::new(0, 0);
        let mut game = game_with_empties(&[pos]);

        game.place(pos, Some(Digit::D5)).unwrap();
        assert_eq!(game.mistakes(), 1);
        assert!(game.undo());
        assert_eq!(game.board()[pos], None);
        assert_eq!(game.mistakes(), 1);
    }

    #[test]
    fn test_given_cells_are_immutable() {
        let mut game = game_with_empties(&[Position::new(0, 0)]);
        let given = Position::new(5, 5);
        let before = game.board()[given];

        assert_eq!(game.place(given, Some(Digit::D1)), Err(GameError::GivenCell));
        assert_eq!(game.clear_cell(given), Err(GameError::GivenCell));
        assert_eq!(
            game.toggle_note(given, Digit::D1),
            Err(GameError::GivenCell)
        );
        assert_eq!(game.board()[given], before);
        assert!(!game.can_undo());
    }

    #[test]
    fn test_clear_cell() {
        let pos = Position::new(0, 0);
        let mut game = game_with_empties(&[pos]);

        game.place(pos, Some(Digit::D5)).unwrap();
        let cleared = game.clear_cell(pos).unwrap();
        assert!(cleared.changed);
        assert_eq!(cleared.correct, None);
        assert_eq!(game.board()[pos], None);

        // Clearing an already-empty cell is a no-op.
        let again = game.clear_cell(pos).unwrap();
        assert!(!again.changed);
    }

    #[test]
    fn test_undo_redo_inverse_law() {
        let pos = Position::new(0, 0);
        let mut game = game_with_empties(&[pos]);

        game.place(pos, Some(Digit::D5)).unwrap();
        game.place(pos, Some(Digit::D1)).unwrap();

        assert!(game.undo());
        assert_eq!(game.board()[pos], Some(Digit::D5));
        assert!(game.undo());
        assert_eq!(game.board()[pos], None);
        assert!(!game.undo());

        assert!(game.redo());
        assert_eq!(game.board()[pos], Some(Digit::D5));
        assert!(game.redo());
        assert_eq!(game.board()[pos], Some(Digit::D1));
        assert!(!game.redo());
    }

    #[test]
    fn test_place_after_undo_clears_redo() {
        let pos = Position::new(0, 0);
        let mut game = game_with_empties(&[pos, Position::new(0, 1)]);

        game.place(pos, Some(Digit::D5)).unwrap();
        assert!(game.undo());
        assert!(game.can_redo());

        game.place(pos, Some(Digit::D1)).unwrap();
        assert!(!game.can_redo());
        assert!(!game.redo());
        assert_eq!(game.board()[pos], Some(Digit::D1));
    }

    #[test]
    fn test_note_toggle_and_capacity() {
        let pos = Position::new(4, 4);
        let mut game = open_game();

        assert_eq!(game.toggle_note(pos, Digit::D1).unwrap(), NoteToggle::Added);
        assert_eq!(game.toggle_note(pos, Digit::D2).unwrap(), NoteToggle::Added);
        assert_eq!(game.toggle_note(pos, Digit::D3).unwrap(), NoteToggle::Added);
        assert_eq!(
            game.toggle_note(pos, Digit::D4).unwrap(),
            NoteToggle::CapacityReached
        );
        assert_eq!(game.notes(pos).len(), 3);

        assert_eq!(
            game.toggle_note(pos, Digit::D2).unwrap(),
            NoteToggle::Removed
        );
        assert!(!game.notes(pos).contains(Digit::D2));
    }

    #[test]
    fn test_note_conflict_is_rejected_and_reported() {
        let mut game = open_game();
        let placed = Position::new(4, 4);
        game.place(placed, Some(Digit::D9)).unwrap(); // solution digit

        let result = game.toggle_note(Position::new(4, 0), Digit::D9).unwrap();
        assert_eq!(result, NoteToggle::Conflicting(vec![placed]));
        assert!(game.notes(Position::new(4, 0)).is_empty());

        // Filled cells refuse notes outright.
        assert_eq!(
            game.toggle_note(placed, Digit::D1),
            Err(GameError::FilledCell)
        );
    }

    #[test]
    fn test_erase_mode_single_shot() {
        let pos = Position::new(0, 0);
        let mut game = open_game();
        game.toggle_note(pos, Digit::D7).unwrap();
        game.toggle_note(pos, Digit::D2).unwrap();

        assert_eq!(game.toggle_erase_mode(), InputMode::Erase);

        // Erasing on a bare cell leaves the mode armed.
        assert_eq!(game.erase_oldest_note(Position::new(8, 8)), None);
        assert!(game.input_mode().is_erase());

        // One erasure removes the oldest note and disarms the mode.
        assert_eq!(game.erase_oldest_note(pos), Some(Digit::D7));
        assert!(game.input_mode().is_normal());
        assert_eq!(game.notes(pos).iter().collect::<Vec<_>>(), vec![Digit::D2]);
    }

    #[test]
    fn test_remove_newest_note() {
        let pos = Position::new(0, 0);
        let mut game = open_game();
        game.toggle_note(pos, Digit::D7).unwrap();
        game.toggle_note(pos, Digit::D2).unwrap();

        assert_eq!(game.remove_newest_note(pos), Some(Digit::D2));
        assert_eq!(game.remove_newest_note(pos), Some(Digit::D7));
        assert_eq!(game.remove_newest_note(pos), None);
    }

    #[test]
    fn test_input_modes_are_mutually_exclusive() {
        let mut game = open_game();
        assert!(game.input_mode().is_normal());

        assert_eq!(game.toggle_notes_mode(), InputMode::Notes);
        assert_eq!(game.toggle_erase_mode(), InputMode::Erase);
        assert_eq!(game.toggle_notes_mode(), InputMode::Notes);
        assert_eq!(game.toggle_notes_mode(), InputMode::Normal);
        assert_eq!(game.toggle_erase_mode(), InputMode::Erase);
        assert_eq!(game.toggle_erase_mode(), InputMode::Normal);
    }

    #[test]
    fn test_hint_two_stage_reveal() {
        let pos = Position::new(0, 5);
        let mut game = game_with_empties(&[pos]);

        let first = game.request_hint();
        let HintResult::Highlighted {
            pos: hint_pos,
            answer,
            candidates,
        } = first
        else {
            panic!("expected a highlight, got {first:?}");
        };
        assert_eq!(hint_pos, pos);
        assert_eq!(answer, Digit::D6);
        assert_eq!(candidates.as_single(), Some(Digit::D6));
        assert_eq!(game.hints_remaining(), 2);
        assert_eq!(game.active_highlight(), Some(pos));

        let second = game.request_hint();
        assert_eq!(
            second,
            HintResult::Revealed {
                pos,
                digit: Digit::D6
            }
        );
        assert_eq!(game.board()[pos], Some(Digit::D6));
        // Only the new highlight consumed a hint, not the reveal.
        assert_eq!(game.hints_remaining(), 2);
        assert_eq!(game.hints_used(), 1);
        assert_eq!(game.active_highlight(), None);
    }

    #[test]
    fn test_hint_reveal_clears_notes() {
        let mut game = open_game();
        let target = Position::new(0, 0); // first scanned, all cells tie
        let peer = Position::new(0, 8);
        game.toggle_note(peer, Digit::D1).unwrap(); // 1 is the answer at (0, 0)

        game.request_hint();
        let result = game.request_hint();
        assert_eq!(
            result,
            HintResult::Revealed {
                pos: target,
                digit: Digit::D1
            }
        );
        assert!(game.notes(target).is_empty());
        assert!(!game.notes(peer).contains(Digit::D1));
    }

    #[test]
    fn test_hint_allowance_and_exhaustion() {
        let empties: Vec<Position> = (0..5).map(|col| Position::new(0, col)).collect();
        let mut game = game_with_empties(&empties);

        for _ in 0..2 {
            assert!(matches!(
                game.request_hint(),
                HintResult::Highlighted { .. }
            ));
            assert!(matches!(game.request_hint(), HintResult::Revealed { .. }));
        }
        assert_eq!(game.hints_remaining(), 1);

        // The last allowance starts a highlight; completing it is free even
        // though the counter has hit zero by then.
        assert!(matches!(
            game.request_hint(),
            HintResult::Highlighted { .. }
        ));
        assert_eq!(game.hints_remaining(), 0);
        assert!(matches!(game.request_hint(), HintResult::Revealed { .. }));

        assert_eq!(game.request_hint(), HintResult::Exhausted);
        assert_eq!(game.hints_used(), 3);
    }

    #[test]
    fn test_stale_highlight_triggers_fresh_search() {
        let a = Position::new(0, 0);
        let b = Position::new(0, 1);
        let mut game = game_with_empties(&[a, b]);

        // Fill (0, 0), then rewind so the hint search picks it.
        game.place(a, Some(Digit::D1)).unwrap();
        assert!(game.undo());

        assert!(matches!(
            game.request_hint(),
            HintResult::Highlighted { pos, .. } if pos == a
        ));

        // Redo refills the highlighted cell behind the hint's back.
        assert!(game.redo());

        // The stale highlight is discarded; a fresh search finds (0, 1).
        let result = game.request_hint();
        assert!(matches!(
            result,
            HintResult::Highlighted { pos, answer: Digit::D2, .. } if pos == b
        ));
        assert_eq!(game.hints_remaining(), 1);
    }

    #[test]
    fn test_placement_cancels_highlight() {
        let a = Position::new(0, 0);
        let b = Position::new(0, 1);
        let mut game = game_with_empties(&[a, b]);

        assert!(matches!(
            game.request_hint(),
            HintResult::Highlighted { pos, .. } if pos == a
        ));
        game.place(b, Some(Digit::D2)).unwrap();
        assert_eq!(game.active_highlight(), None);

        // The next request starts over (and spends another hint).
        assert!(matches!(
            game.request_hint(),
            HintResult::Highlighted { pos, .. } if pos == a
        ));
        assert_eq!(game.hints_remaining(), 1);
    }

    #[test]
    fn test_hint_none_available_on_dead_board() {
        let a = Position::new(0, 0);
        let b = Position::new(1, 0);
        let mut game = game_with_empties(&[a, b]);

        // 4 is (1, 0)'s only candidate; placing it at (0, 0) starves the
        // last empty cell.
        game.place(a, Some(Digit::D4)).unwrap();
        assert_eq!(game.request_hint(), HintResult::NoneAvailable);
        assert_eq!(game.hints_remaining(), 3);
    }

    #[test]
    fn test_restart_resets_session_state() {
        let a = Position::new(0, 0);
        let b = Position::new(0, 1);
        let mut game = game_with_empties(&[a, b]);

        game.place(a, Some(Digit::D9)).unwrap();
        game.toggle_note(b, Digit::D2).unwrap();
        game.toggle_notes_mode();
        game.request_hint();
        assert!(game.mistakes() > 0);

        game.restart();
        assert_eq!(game.board(), game.givens());
        assert!(game.notes(b).is_empty());
        assert!(!game.can_undo());
        assert!(!game.can_redo());
        assert!(game.input_mode().is_normal());
        assert_eq!(game.active_highlight(), None);
        assert_eq!(game.mistakes(), 0);
        assert_eq!(game.hints_used(), 0);
        assert_eq!(game.hints_remaining(), 3);
    }

    #[test]
    fn test_completed_digits() {
        let pos = Position::new(0, 0);
        let mut game = game_with_empties(&[pos]);

        let completed = game.completed_digits();
        assert!(!completed.contains(Digit::D1));
        assert_eq!(completed.len(), 8);

        game.place(pos, Some(Digit::D1)).unwrap();
        assert_eq!(game.completed_digits(), DigitSet::FULL);
    }

    #[test]
    fn test_complete_but_invalid_board_is_not_solved() {
        let pos = Position::new(0, 0);
        let mut game = game_with_empties(&[pos]);

        game.place(pos, Some(Digit::D5)).unwrap();
        assert!(game.is_complete());
        assert!(!game.is_solved());
    }
}
