//! Error types for the rucaesar library.

use thiserror::Error;

/// Errors produced by the rucaesar library.
///
/// Cryptanalysis that fails to find a key is not an error: the decoders
/// report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum CaesarError {
    /// Key is outside the valid range `[0, max]`.
    #[error("invalid key: {key}. Must be between 0 and {max}")]
    InvalidKey {
        /// The rejected key.
        key: i64,
        /// Largest accepted key (the alphabet length).
        max: usize,
    },

    /// Underlying read/write failure, including malformed UTF-8 input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Command-line configuration rejected before any file is touched.
    #[error("{0}")]
    InvalidArguments(String),
}

/// A convenience `Result` alias using [`CaesarError`].
pub type Result<T> = std::result::Result<T, CaesarError>;
