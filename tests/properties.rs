//! Property tests for the codec laws.
//!
//! - decode(k) undoes encode(k) over the alphabet
//! - scalars outside the alphabet map to `~` in both directions
//! - key 0 is the identity on the alphabet
//! - encode(k2) after encode(k1) equals encode((k1 + k2) mod 75)
//! - scoring is deterministic

use proptest::prelude::*;
use rucaesar::alphabet::{self, ALPHABET, SKIP};
use rucaesar::analysis::scorer;
use rucaesar::{Caesar, Key};

fn alphabet_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::sample::select(ALPHABET.to_vec()), 0..300)
        .prop_map(|chars| chars.into_iter().collect())
}

fn encode(k: i64, text: &str) -> String {
    let mut out = Vec::new();
    Caesar::new(k).unwrap().encode(text.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn decode(k: i64, text: &str) -> String {
    let mut out = Vec::new();
    Caesar::new(k).unwrap().decode(text.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

proptest! {
    #[test]
    fn roundtrip_over_alphabet(text in alphabet_text(), k in 0i64..75) {
        prop_assert_eq!(decode(k, &encode(k, &text)), text);
    }

    #[test]
    fn ciphertext_stays_in_alphabet(text in alphabet_text(), k in 0i64..=75) {
        prop_assert!(encode(k, &text).chars().all(alphabet::contains));
    }

    #[test]
    fn foreign_scalars_map_to_skip(text in "\\PC{0,100}", k in 0i64..=75) {
        for out in [encode(k, &text), decode(k, &text)] {
            prop_assert_eq!(out.chars().count(), text.chars().count());
            for (o, c) in out.chars().zip(text.chars()) {
                if !alphabet::contains(c) {
                    prop_assert_eq!(o, SKIP);
                } else {
                    prop_assert!(alphabet::contains(o));
                }
            }
        }
    }

    #[test]
    fn zero_key_is_identity(text in alphabet_text()) {
        prop_assert_eq!(encode(0, &text), text.clone());
        prop_assert_eq!(decode(0, &text), text);
    }

    #[test]
    fn encode_composes(text in alphabet_text(), k1 in 0i64..75, k2 in 0i64..75) {
        let twice = encode(k2, &encode(k1, &text));
        prop_assert_eq!(twice, encode((k1 + k2) % 75, &text));
    }

    #[test]
    fn score_is_deterministic(text in alphabet_text(), k in 0i64..75) {
        let bytes = text.into_bytes();
        let key = Key::new(k).unwrap();
        prop_assert_eq!(scorer::score(&bytes, key), scorer::score(&bytes, key));
    }
}
