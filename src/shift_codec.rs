//! ShiftCodec: the positional shift over the alphabet.
//!
//! Implements the atomic transform of the Caesar cipher. A [`ShiftCodec`]
//! pairs a [`Key`] with a [`Direction`] and maps one scalar at a time.
//! Scalars outside the alphabet map to [`SKIP`](crate::alphabet::SKIP).

use std::fmt;

use crate::alphabet::{self, ALPHABET_LEN, SKIP};
use crate::error::{CaesarError, Result};

/// A validated shift key in `[0, ALPHABET_LEN]`.
///
/// `0` is the identity and doubles as the "unknown" starting point for
/// cryptanalysis. `ALPHABET_LEN` is accepted and behaves like `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Key(usize);

impl Key {
    /// The identity key.
    pub const ZERO: Key = Key(0);

    /// Validates `key` and wraps it.
    ///
    /// # Errors
    /// Returns [`CaesarError::InvalidKey`] if `key < 0` or `key > ALPHABET_LEN`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rucaesar::Key;
    ///
    /// assert!(Key::new(75).is_ok());
    /// assert!(Key::new(76).is_err());
    /// assert!(Key::new(-1).is_err());
    /// ```
    pub fn new(key: i64) -> Result<Self> {
        match usize::try_from(key) {
            Ok(k) if k <= ALPHABET_LEN => Ok(Key(k)),
            _ => Err(CaesarError::InvalidKey {
                key,
                max: ALPHABET_LEN,
            }),
        }
    }

    /// Builds a key from an alphabet offset, reduced modulo `ALPHABET_LEN`.
    pub(crate) fn from_offset(offset: usize) -> Self {
        Key(offset % ALPHABET_LEN)
    }

    /// Returns the raw key value as constructed.
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns the effective shift, `value mod ALPHABET_LEN`.
    pub fn shift(self) -> usize {
        self.0 % ALPHABET_LEN
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Key {
    type Error = CaesarError;

    fn try_from(key: i64) -> Result<Self> {
        Key::new(key)
    }
}

/// Direction of the positional shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Adds the key to positions (encryption).
    Forward,
    /// Subtracts the key from positions (decryption).
    Backward,
}

/// A pure per-scalar transform: shift by `key` in `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftCodec {
    key: Key,
    direction: Direction,
}

impl ShiftCodec {
    /// Creates a transform for the given key and direction.
    pub fn new(key: Key, direction: Direction) -> Self {
        ShiftCodec { key, direction }
    }

    /// Forward (encrypting) transform.
    pub fn encoder(key: Key) -> Self {
        Self::new(key, Direction::Forward)
    }

    /// Backward (decrypting) transform.
    pub fn decoder(key: Key) -> Self {
        Self::new(key, Direction::Backward)
    }

    /// Returns the key of this transform.
    pub fn key(&self) -> Key {
        self.key
    }

    /// Returns the direction of this transform.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Maps a single scalar.
    ///
    /// # Returns
    /// The shifted scalar, or [`SKIP`] if `c` is not in the alphabet.
    pub fn apply(&self, c: char) -> char {
        match alphabet::position(c) {
            Some(pos) => alphabet::at(self.shift_position(pos)),
            None => SKIP,
        }
    }

    /// Maps an alphabet position. `pos` must be below `ALPHABET_LEN`.
    pub(crate) fn shift_position(&self, pos: usize) -> usize {
        let k = self.key.shift();
        match self.direction {
            Direction::Forward => (pos + k) % ALPHABET_LEN,
            Direction::Backward => (pos + ALPHABET_LEN - k) % ALPHABET_LEN,
        }
    }
}

/// Encrypts a single scalar with `key`.
pub fn encode_shift(c: char, key: Key) -> char {
    ShiftCodec::encoder(key).apply(c)
}

/// Decrypts a single scalar with `key`.
pub fn decode_shift(c: char, key: Key) -> char {
    ShiftCodec::decoder(key).apply(c)
}
