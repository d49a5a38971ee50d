//! Caesar: the codec orchestrator.
//!
//! Binds a [`Key`] to the streaming processor for encoding and known-key
//! decoding, and runs the cryptanalysis passes for the two key-recovery
//! strategies. A discovered key is returned to the caller; the codec itself
//! never changes.

use std::io::{Cursor, Read, Write};

use tracing::debug;

use crate::analysis::{brute_force, frequency};
use crate::error::Result;
use crate::shift_codec::{Key, ShiftCodec};
use crate::utils::runes::process;

/// Caesar cipher over the Russian alphabet.
///
/// # Examples
///
/// ```
/// use rucaesar::Caesar;
///
/// let caesar = Caesar::new(3).unwrap();
///
/// let mut encrypted = Vec::new();
/// caesar.encode("Привет, мир!".as_bytes(), &mut encrypted).unwrap();
/// assert_eq!(String::from_utf8(encrypted.clone()).unwrap(), "Тулезх-ВплуБ");
///
/// let mut decrypted = Vec::new();
/// caesar.decode(encrypted.as_slice(), &mut decrypted).unwrap();
/// assert_eq!(String::from_utf8(decrypted).unwrap(), "Привет, мир!");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Caesar {
    key: Key,
}

impl Caesar {
    /// Creates a codec for `key`.
    ///
    /// For the cryptanalytic decoders the key is the first candidate tried
    /// by brute force; pass `0` to search the whole key space.
    ///
    /// # Errors
    /// Returns [`CaesarError::InvalidKey`](crate::error::CaesarError::InvalidKey)
    /// if `key < 0` or `key > 75`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rucaesar::Caesar;
    ///
    /// assert!(Caesar::new(75).is_ok());
    /// assert!(Caesar::new(76).is_err());
    /// ```
    pub fn new(key: i64) -> Result<Self> {
        Ok(Self::with_key(Key::new(key)?))
    }

    /// Creates a codec from an already validated key.
    pub fn with_key(key: Key) -> Self {
        Caesar { key }
    }

    /// Returns the key this codec was built with.
    pub fn key(&self) -> Key {
        self.key
    }

    /// Encrypts `input` into `output`.
    ///
    /// Scalars outside the alphabet are written as `~`.
    ///
    /// # Errors
    /// [`CaesarError::Io`](crate::error::CaesarError::Io) on read, write or
    /// UTF-8 decoding failure.
    pub fn encode<R: Read, W: Write>(&self, input: R, output: W) -> Result<()> {
        let codec = ShiftCodec::encoder(self.key);
        process(input, output, |c| codec.apply(c))
    }

    /// Decrypts `input` into `output` with the known key.
    ///
    /// # Errors
    /// [`CaesarError::Io`](crate::error::CaesarError::Io) on read, write or
    /// UTF-8 decoding failure.
    pub fn decode<R: Read, W: Write>(&self, input: R, output: W) -> Result<()> {
        let codec = ShiftCodec::decoder(self.key);
        process(input, output, |c| codec.apply(c))
    }

    /// Recovers the key by trying every candidate from [`key`](Self::key)
    /// upward, then decrypts `input` into `output` with it.
    ///
    /// The search starts at this codec's key rather than at zero, so a
    /// repeated attempt can resume past an earlier false positive.
    ///
    /// # Returns
    /// The key used, or `None` if no candidate passed. In that case nothing
    /// is written to `output`.
    ///
    /// # Errors
    /// [`CaesarError::Io`](crate::error::CaesarError::Io) on any stream failure.
    pub fn brute_force_decode<R, W, P>(
        &self,
        mut input: R,
        output: W,
        mut progress: P,
    ) -> Result<Option<Key>>
    where
        R: Read,
        W: Write,
        P: Write,
    {
        let mut ciphertext = Vec::new();
        input.read_to_end(&mut ciphertext)?;
        debug!(bytes = ciphertext.len(), start = %self.key, "read ciphertext for brute force");

        let found = brute_force::search(&ciphertext, self.key, &mut progress)?;
        progress.flush()?;
        self.commit(found, &ciphertext, output)
    }

    /// Recovers the key from monogram statistics of `helper` (a plaintext
    /// in the same style) and `input`, then decrypts `input` into `output`.
    ///
    /// # Returns
    /// The key used, or `None` if neither candidate passed. In that case
    /// nothing is written to `output`.
    ///
    /// # Errors
    /// [`CaesarError::Io`](crate::error::CaesarError::Io) on any stream failure.
    pub fn frequency_analysis_decode<R, H, W, P>(
        &self,
        mut input: R,
        mut helper: H,
        output: W,
        mut progress: P,
    ) -> Result<Option<Key>>
    where
        R: Read,
        H: Read,
        W: Write,
        P: Write,
    {
        let mut helper_text = Vec::new();
        helper.read_to_end(&mut helper_text)?;
        let mut ciphertext = Vec::new();
        input.read_to_end(&mut ciphertext)?;
        debug!(
            helper_bytes = helper_text.len(),
            bytes = ciphertext.len(),
            "read inputs for frequency analysis"
        );

        let found = frequency::search(&helper_text, &ciphertext, &mut progress)?;
        progress.flush()?;
        self.commit(found, &ciphertext, output)
    }

    /// Decrypts the buffered ciphertext with a discovered key.
    fn commit<W: Write>(
        &self,
        found: Option<Key>,
        ciphertext: &[u8],
        output: W,
    ) -> Result<Option<Key>> {
        match found {
            Some(key) => {
                Caesar::with_key(key).decode(Cursor::new(ciphertext), output)?;
                Ok(Some(key))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CaesarError;
    use std::io;

    fn encode_str(caesar: &Caesar, text: &str) -> String {
        let mut out = Vec::new();
        caesar.encode(text.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn decode_str(caesar: &Caesar, text: &str) -> String {
        let mut out = Vec::new();
        caesar.decode(text.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    /// Writer that fails every write.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_construction_bounds() {
        assert_eq!(Caesar::new(0).unwrap().key(), Key::ZERO);
        assert!(Caesar::new(75).is_ok());
        assert!(matches!(Caesar::new(76), Err(CaesarError::InvalidKey { .. })));
        assert!(matches!(Caesar::new(-1), Err(CaesarError::InvalidKey { .. })));
    }

    #[test]
    fn test_encode_known_vector() {
        let caesar = Caesar::new(3).unwrap();
        assert_eq!(encode_str(&caesar, "Привет, мир!"), "Тулезх-ВплуБ");
    }

    #[test]
    fn test_decode_known_vector() {
        let caesar = Caesar::new(3).unwrap();
        assert_eq!(decode_str(&caesar, "Тулезх-ВплуБ"), "Привет, мир!");
    }

    #[test]
    fn test_foreign_scalars_become_skip() {
        let caesar = Caesar::new(10).unwrap();
        assert_eq!(encode_str(&caesar, "A"), "~");
        assert_eq!(encode_str(&caesar, "abc\n"), "~~~~");
        assert_eq!(decode_str(&caesar, "x~"), "~~");
    }

    #[test]
    fn test_empty_input() {
        let caesar = Caesar::new(5).unwrap();
        assert_eq!(encode_str(&caesar, ""), "");
        assert_eq!(decode_str(&caesar, ""), "");
    }

    #[test]
    fn test_full_turn_key_is_identity() {
        let caesar = Caesar::new(75).unwrap();
        assert_eq!(encode_str(&caesar, "Ёлка, ёж!"), "Ёлка, ёж!");
    }

    #[test]
    fn test_encode_write_failure() {
        let caesar = Caesar::new(1).unwrap();
        let result = caesar.encode("абв".as_bytes(), BrokenPipe);
        assert!(matches!(result, Err(CaesarError::Io(_))));
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let caesar = Caesar::new(1).unwrap();
        let mut out = Vec::new();
        let result = caesar.decode(&[0xD0, 0xFF][..], &mut out);
        assert!(matches!(result, Err(CaesarError::Io(_))));
    }

    #[test]
    fn test_brute_force_short_vector_commits_at_three() {
        let caesar = Caesar::new(0).unwrap();
        let mut out = Vec::new();
        let mut progress = Vec::new();
        let found = caesar
            .brute_force_decode("Тулезх-ВплуБ".as_bytes(), &mut out, &mut progress)
            .unwrap();
        assert_eq!(found, Some(Key::new(3).unwrap()));
        assert_eq!(String::from_utf8(out).unwrap(), "Привет, мир!");
        let progress = String::from_utf8(progress).unwrap();
        assert_eq!(progress.matches("trying key").count(), 4);
    }

    #[test]
    fn test_brute_force_empty_writes_nothing() {
        let caesar = Caesar::default();
        let mut out = Vec::new();
        let found = caesar.brute_force_decode(&b""[..], &mut out, io::sink()).unwrap();
        assert_eq!(found, None);
        assert!(out.is_empty());
    }

    #[test]
    fn test_brute_force_progress_failure() {
        let caesar = Caesar::default();
        let mut out = Vec::new();
        let result = caesar.brute_force_decode("а. Б".as_bytes(), &mut out, BrokenPipe);
        assert!(matches!(result, Err(CaesarError::Io(_))));
    }

    #[test]
    fn test_codec_key_unchanged_by_analysis() {
        let caesar = Caesar::new(0).unwrap();
        let mut out = Vec::new();
        caesar
            .brute_force_decode("Тулезх-ВплуБ".as_bytes(), &mut out, io::sink())
            .unwrap();
        assert_eq!(caesar.key(), Key::ZERO);
    }
}
