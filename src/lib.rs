//! Caesar cipher codec for Russian-language texts.
//!
//! Shifts scalars over a fixed 75-character alphabet (Russian upper- and
//! lowercase plus nine punctuation marks including the space). Anything
//! outside the alphabet is written as `~`. Besides known-key decoding the
//! crate recovers unknown keys by brute force or by monogram frequency
//! analysis against a helper text, both validated by a sentence-structure
//! scorer.
//!
//! # Architecture
//!
//! ```text
//! alphabet       (75 scalars + position lookup)
//!     ↓
//! ShiftCodec     (pure per-scalar shift, forward / backward)
//!     ↓
//! utils::runes   (buffered rune-at-a-time streaming)
//!     ↓
//! Caesar         (encode / decode / brute force / frequency analysis)
//!     ↑
//! analysis       (scorer, brute_force, frequency)
//! ```
//!
//! # Examples
//!
//! Encrypt, then recover the key without knowing it:
//!
//! ```
//! use rucaesar::{Caesar, Key};
//!
//! let text = "Шёл дождь. Мы сидели дома, пили чай. Было тихо. \
//!             Потом пришёл сосед, и мы долго говорили. Вечер прошёл быстро.";
//!
//! let mut encrypted = Vec::new();
//! Caesar::new(7).unwrap().encode(text.as_bytes(), &mut encrypted).unwrap();
//!
//! let mut decrypted = Vec::new();
//! let key = Caesar::new(0)
//!     .unwrap()
//!     .brute_force_decode(encrypted.as_slice(), &mut decrypted, std::io::sink())
//!     .unwrap();
//!
//! assert_eq!(key, Some(Key::new(7).unwrap()));
//! assert_eq!(String::from_utf8(decrypted).unwrap(), text);
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod analysis;
pub mod cli;
pub mod error;
pub mod shift_codec;
pub mod utils;

mod caesar;

pub use caesar::Caesar;
pub use error::{CaesarError, Result};
pub use shift_codec::{Direction, Key, ShiftCodec};
