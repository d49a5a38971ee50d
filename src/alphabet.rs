//! The fixed cipher alphabet.
//!
//! 75 scalars in a fixed order: Russian uppercase (with `Ё`), Russian
//! lowercase (with `ё`) and nine punctuation marks ending with the space.
//! The order is part of the on-disk format: changing it changes every
//! ciphertext.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Number of scalars in the alphabet.
pub const ALPHABET_LEN: usize = 75;

/// Alphabet scalars, positions 0..74.
pub const ALPHABET: [char; ALPHABET_LEN] = [
    'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ё', 'Ж', 'З', 'И', 'Й', 'К', 'Л', 'М', 'Н', 'О', 'П', 'Р', 'С',
    'Т', 'У', 'Ф', 'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ъ', 'Ы', 'Ь', 'Э', 'Ю', 'Я', //
    'а', 'б', 'в', 'г', 'д', 'е', 'ё', 'ж', 'з', 'и', 'й', 'к', 'л', 'м', 'н', 'о', 'п', 'р', 'с',
    'т', 'у', 'ф', 'х', 'ц', 'ч', 'ш', 'щ', 'ъ', 'ы', 'ь', 'э', 'ю', 'я', //
    ':', ',', '"', '?', '-', '—', '.', '!', ' ',
];

/// Emitted in place of any scalar that is not in the alphabet.
pub const SKIP: char = '~';

/// Fallback guess for the most frequent plaintext scalar.
pub const MOST_FREQUENT_CHAR: char = ' ';

static LOOKUP: LazyLock<HashMap<char, usize>> = LazyLock::new(|| {
    ALPHABET
        .iter()
        .enumerate()
        .map(|(pos, &c)| (c, pos))
        .collect()
});

/// Returns the position of `c` in the alphabet, or `None` if absent.
pub fn position(c: char) -> Option<usize> {
    LOOKUP.get(&c).copied()
}

/// Returns the scalar at `pos`, reduced modulo the alphabet length.
pub fn at(pos: usize) -> char {
    ALPHABET[pos % ALPHABET_LEN]
}

/// Returns `true` if `c` belongs to the alphabet.
pub fn contains(c: char) -> bool {
    LOOKUP.contains_key(&c)
}
