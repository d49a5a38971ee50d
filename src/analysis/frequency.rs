//! Monogram frequency analysis.
//!
//! Aligns the most frequent alphabet scalar of the ciphertext with the
//! most frequent scalar of a helper plaintext written in the same style.
//! If that candidate fails the scorer, the space is assumed to be the
//! most frequent plaintext scalar instead.

use std::io::{self, Write};

use tracing::{info, warn};

use super::brute_force::report;
use super::scorer::evaluate;
use crate::alphabet::{self, ALPHABET_LEN, MOST_FREQUENT_CHAR};
use crate::shift_codec::Key;
use crate::utils::runes::runes;

/// Returns the most frequent alphabet scalar in `text`.
///
/// Scalars outside the alphabet are ignored. The running maximum only moves
/// on a strictly greater count, so among tied scalars the one that reached
/// the winning count first is returned.
///
/// # Returns
/// `None` if `text` holds no alphabet scalar.
pub fn most_frequent(text: &[u8]) -> Option<char> {
    let mut counts = [0usize; ALPHABET_LEN];
    let mut best: Option<(usize, usize)> = None;

    for pos in runes(text).filter_map(alphabet::position) {
        counts[pos] += 1;
        let count = counts[pos];
        if count > best.map_or(0, |(_, max)| max) {
            best = Some((pos, count));
        }
    }
    best.map(|(pos, _)| alphabet::at(pos))
}

/// Key that maps `plain` onto `cipher`: `(pos(cipher) - pos(plain)) mod |A|`.
///
/// # Returns
/// `None` if either scalar is outside the alphabet.
pub fn derive_key(cipher: char, plain: char) -> Option<Key> {
    let c = alphabet::position(cipher)?;
    let p = alphabet::position(plain)?;
    Some(Key::from_offset(c + ALPHABET_LEN - p))
}

/// Derives up to two candidate keys and returns the first accepted one.
///
/// The primary candidate aligns the helper's top scalar with the
/// ciphertext's; the fallback aligns [`MOST_FREQUENT_CHAR`].
///
/// A helper with no alphabet scalar has no top scalar, so no primary
/// candidate is scored and the search goes straight to the fallback. It
/// does not treat position 0 as the helper's top scalar, which would only
/// add one hopeless candidate (`pos(cipher_top)`) to the progress text.
///
/// # Errors
/// Only errors raised while writing to `progress`.
pub fn search<P: Write>(
    helper: &[u8],
    ciphertext: &[u8],
    progress: &mut P,
) -> io::Result<Option<Key>> {
    writeln!(progress, "Decoding by frequency analysis...")?;

    let Some(cipher_top) = most_frequent(ciphertext) else {
        warn!("ciphertext holds no alphabet scalar");
        writeln!(progress, "Result: ciphertext has no alphabet characters, fail")?;
        return Ok(None);
    };

    let helper_top = most_frequent(helper);
    if let Some(key) = helper_top.and_then(|plain| derive_key(cipher_top, plain)) {
        let verdict = evaluate(ciphertext, key);
        report(&verdict, progress)?;
        if verdict.accepted {
            return success(key, progress);
        }
    }

    writeln!(
        progress,
        "Avoiding helper, trying statistically most frequent character which is space"
    )?;
    if let Some(key) = derive_key(cipher_top, MOST_FREQUENT_CHAR) {
        let verdict = evaluate(ciphertext, key);
        report(&verdict, progress)?;
        if verdict.accepted {
            return success(key, progress);
        }
    }

    warn!(?helper_top, %cipher_top, "frequency analysis found no acceptable key");
    writeln!(progress, "Result: fail to find key by frequency analysis")?;
    Ok(None)
}

fn success<P: Write>(key: Key, progress: &mut P) -> io::Result<Option<Key>> {
    info!(%key, "frequency analysis found key");
    writeln!(progress, "Result: success. Decoding...")?;
    Ok(Some(key))
}
