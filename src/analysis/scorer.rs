//! Plausibility scorer for candidate keys.
//!
//! Counts sentence-initial letters in the *virtual* decryption of a
//! ciphertext, i.e. occurrences of `[letter] [end-punct] [space] [letter]`,
//! without materializing the plaintext. Wrong keys scatter punctuation and
//! spaces across letters, so their score stays near zero.

use std::fmt;

use crate::alphabet;
use crate::shift_codec::{Key, ShiftCodec};
use crate::utils::runes::runes;

/// Class of a decrypted alphabet scalar as seen by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Letter,
    EndPunct,
    Space,
    Dash,
}

impl Class {
    fn of(c: char) -> Self {
        match c {
            '.' | ',' | '!' | '?' | ':' => Class::EndPunct,
            ' ' => Class::Space,
            '-' | '—' => Class::Dash,
            _ => Class::Letter,
        }
    }
}

/// Scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Start, or just saw a letter.
    Start,
    /// `[letter] [end-punct]`
    Punct,
    /// `[letter] [end-punct] [space]`
    PunctSpace,
}

/// Outcome of one transition.
enum Step {
    Next(State),
    Count,
    Halt,
}

fn step(state: State, class: Class) -> Step {
    match (state, class) {
        (State::Start, Class::EndPunct) => Step::Next(State::Punct),
        (State::Start, _) => Step::Next(State::Start),

        (State::Punct, Class::Space) => Step::Next(State::PunctSpace),
        (State::Punct, Class::EndPunct | Class::Dash) => Step::Halt,
        (State::Punct, Class::Letter) => Step::Next(State::Start),

        (State::PunctSpace, Class::Letter) => Step::Count,
        (State::PunctSpace, Class::EndPunct) => Step::Halt,
        (State::PunctSpace, Class::Space | Class::Dash) => Step::Next(State::Start),
    }
}

/// Counts sentence-start patterns in `ciphertext` decrypted with `key`.
///
/// Scalars outside the alphabet (and malformed bytes) are skipped without
/// touching the state. The scan halts at the first broken sentence
/// structure: an end-punctuation mark right after another one or after
/// `punct + space`, or a dash right after end-punctuation.
///
/// # Returns
/// The number of sentence-initial letters seen before any halt.
pub fn score(ciphertext: &[u8], key: Key) -> usize {
    let decoder = ShiftCodec::decoder(key);
    let mut state = State::Start;
    let mut stat = 0;

    for pos in runes(ciphertext).filter_map(alphabet::position) {
        let plain = alphabet::at(decoder.shift_position(pos));
        match step(state, Class::of(plain)) {
            Step::Next(next) => state = next,
            Step::Count => {
                stat += 1;
                state = State::Start;
            }
            Step::Halt => break,
        }
    }
    stat
}

/// Acceptance gate: `stat * 100 / len >= 1`, with `len` in bytes.
///
/// An empty ciphertext never passes.
pub fn accepts(stat: usize, len: usize) -> bool {
    len > 0 && stat.saturating_mul(100) / len >= 1
}

/// Result of scoring one candidate key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// The candidate key.
    pub key: Key,
    /// Pattern matches found.
    pub stat: usize,
    /// Ciphertext length in bytes.
    pub len: usize,
    /// Whether the candidate passed [`accepts`].
    pub accepted: bool,
}

impl Verdict {
    /// Matches needed to pass, as shown in progress text (`len / 100`).
    pub fn threshold(&self) -> usize {
        self.len / 100
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "trying key {} -> found pattern matches {}; expected threshold {} -> {}",
            self.key,
            self.stat,
            self.threshold(),
            if self.accepted { "success" } else { "too few, fail" }
        )
    }
}

/// Scores `key` against `ciphertext` and applies the acceptance gate.
pub fn evaluate(ciphertext: &[u8], key: Key) -> Verdict {
    let stat = score(ciphertext, key);
    let len = ciphertext.len();
    Verdict {
        key,
        stat,
        len,
        accepted: accepts(stat, len),
    }
}
