//! Per-cell pencil notes.

use pawdoku_core::Digit;
use tinyvec::ArrayVec;

/// The pencil notes of one cell: up to three distinct digits, kept in
/// insertion order.
///
/// Insertion order matters: erase mode removes the *oldest* note, while a
/// notes-mode tap with no digit selected removes the *newest*.
///
/// Notes exist only on empty cells; placing a real digit clears the cell's
/// notes as a side effect (enforced by the game session, not by this type).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellNotes(ArrayVec<[u8; 3]>);

impl CellNotes {
    /// The maximum number of notes a cell can hold.
    pub const CAPACITY: usize = 3;

    /// Creates an empty note list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of notes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the cell has no notes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns whether the given digit is noted.
    #[must_use]
    pub fn contains(&self, digit: Digit) -> bool {
        self.0.contains(&digit.value())
    }

    /// Returns the noted digits, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Digit> + '_ {
        self.0.iter().map(|&value| Digit::from_value(value))
    }

    /// Appends a digit. Returns `false` if it is already noted or the cell
    /// is at capacity.
    pub(crate) fn insert(&mut self, digit: Digit) -> bool {
        if self.contains(digit) || self.0.len() == Self::CAPACITY {
            return false;
        }
        self.0.push(digit.value());
        true
    }

    /// Removes a digit. Returns `true` if it was noted.
    pub(crate) fn remove(&mut self, digit: Digit) -> bool {
        match self.0.iter().position(|&value| value == digit.value()) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the oldest (first-inserted) note.
    pub(crate) fn remove_oldest(&mut self) -> Option<Digit> {
        if self.0.is_empty() {
            return None;
        }
        Some(Digit::from_value(self.0.remove(0)))
    }

    /// Removes and returns the newest (last-inserted) note.
    pub(crate) fn remove_newest(&mut self) -> Option<Digit> {
        self.0.pop().map(Digit::from_value)
    }

    /// Removes all notes.
    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}
