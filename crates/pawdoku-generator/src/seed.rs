//! Reproducible generation seeds.

use std::fmt::{self, Display};
use std::str::FromStr;

use rand::Rng as _;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed identifying one generated puzzle.
///
/// Seeds print as (and parse from) 64 lowercase hex characters, so a puzzle
/// can be reproduced from a log line or shared between machines. Internally
/// the seed is expanded into independent random streams for solution filling
/// and carving, so the two phases cannot perturb each other.
///
/// # Examples
///
/// ```
/// use pawdoku_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed =
///     "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef".parse()?;
/// assert_eq!(seed.to_string().len(), 64);
/// # Ok::<(), pawdoku_generator::seed::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Draws a fresh random seed from the thread RNG.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0_u8; 32];
        rand::rng().fill_bytes(bytes.as_mut_slice());
        Self(bytes)
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn bytes(self) -> [u8; 32] {
        self.0
    }

    /// Expands this seed into the RNG seed for a named stream.
    pub(crate) fn stream(self, label: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.0);
        hasher.update(label);
        hasher.finalize().into()
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`PuzzleSeed`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The string is not exactly 64 characters long.
    #[display("expected 64 hex characters, found {_0}")]
    WrongLength(#[error(not(source))] usize),
    /// The string contains a non-hex character.
    #[display("invalid hex character {_0:?}")]
    InvalidCharacter(#[error(not(source))] char),
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.as_bytes();
        if raw.len() != 64 {
            return Err(ParseSeedError::WrongLength(raw.len()));
        }
        let mut bytes = [0_u8; 32];
        for (byte, pair) in bytes.iter_mut().zip(raw.chunks_exact(2)) {
            let hi = hex_value(pair[0])?;
            let lo = hex_value(pair[1])?;
            *byte = hi << 4 | lo;
        }
        Ok(Self(bytes))
    }
}

#[expect(clippy::cast_possible_truncation)]
fn hex_value(c: u8) -> Result<u8, ParseSeedError> {
    (c as char)
        .to_digit(16)
        .map(|value| value as u8)
        .ok_or(ParseSeedError::InvalidCharacter(c as char))
}
