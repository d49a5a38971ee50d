//! Exhaustive key search.

use std::io::{self, Write};

use tracing::{debug, info, warn};

use super::scorer::{evaluate, Verdict};
use crate::alphabet::ALPHABET_LEN;
use crate::shift_codec::Key;

/// Tries keys `start, start + 1, ..., ALPHABET_LEN - 1` in order and
/// returns the first one whose verdict is accepted.
///
/// One progress line per candidate plus a final result line is written to
/// `progress`. A `start` of `ALPHABET_LEN` tries nothing.
///
/// # Errors
/// Only errors raised while writing to `progress`.
pub fn search<P: Write>(
    ciphertext: &[u8],
    start: Key,
    progress: &mut P,
) -> io::Result<Option<Key>> {
    writeln!(progress, "Brute-forcing ...")?;

    let mut found = None;
    for k in start.value()..ALPHABET_LEN {
        let verdict = evaluate(ciphertext, Key::from_offset(k));
        report(&verdict, progress)?;
        if verdict.accepted {
            found = Some(verdict.key);
            break;
        }
    }

    match found {
        Some(key) => {
            info!(%key, "brute force found key");
            writeln!(progress, "Result: success. Decoding...")?;
        }
        None => {
            warn!(start = %start, "brute force found no acceptable key");
            writeln!(progress, "Result: fail to brute-force")?;
        }
    }
    Ok(found)
}

/// Writes one candidate line and mirrors it as a trace event.
pub(crate) fn report<P: Write>(verdict: &Verdict, progress: &mut P) -> io::Result<()> {
    debug!(
        key = %verdict.key,
        stat = verdict.stat,
        len = verdict.len,
        accepted = verdict.accepted,
        "scored candidate key"
    );
    writeln!(progress, "{verdict}")
}
