//! Rune-at-a-time UTF-8 streaming.
//!
//! [`RuneReader`] pulls Unicode scalars out of any buffered byte source and
//! [`process`] drives a per-scalar transform from a reader to a writer.
//! Malformed UTF-8 and truncated sequences are fatal (`InvalidData` and
//! `UnexpectedEof` respectively); nothing is replaced.

use std::io::{self, BufRead, BufReader, BufWriter, ErrorKind, Read, Write};

use crate::error::Result;

/// Reads Unicode scalars one at a time from a buffered byte source.
pub struct RuneReader<R> {
    inner: R,
}

impl<R: BufRead> RuneReader<R> {
    /// Wraps an already-buffered source.
    pub fn new(inner: R) -> Self {
        RuneReader { inner }
    }

    /// Reads the next scalar.
    ///
    /// # Returns
    /// `Ok(None)` on a clean end of input.
    ///
    /// # Errors
    /// `UnexpectedEof` if input ends inside a multi-byte sequence,
    /// `InvalidData` if the bytes are not valid UTF-8, or any error
    /// raised by the underlying reader.
    pub fn read_rune(&mut self) -> io::Result<Option<char>> {
        let lead = loop {
            match self.inner.fill_buf() {
                Ok([]) => return Ok(None),
                Ok(buf) => break buf[0],
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        };
        self.inner.consume(1);

        let width = utf8_width(lead).ok_or_else(|| invalid_utf8(lead))?;
        let mut buf = [lead, 0, 0, 0];
        self.inner.read_exact(&mut buf[1..width])?;

        std::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .ok_or_else(|| invalid_utf8(lead))
            .map(Some)
    }
}

impl<R: BufRead> Iterator for RuneReader<R> {
    type Item = io::Result<char>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_rune().transpose()
    }
}

/// Length of the UTF-8 sequence introduced by `lead`, or `None` for bytes
/// that cannot start a sequence.
fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

fn invalid_utf8(lead: u8) -> io::Error {
    io::Error::new(
        ErrorKind::InvalidData,
        format!("invalid UTF-8 sequence starting with byte {lead:#04x}"),
    )
}

/// Writes one scalar as UTF-8.
pub fn write_rune<W: Write>(writer: &mut W, c: char) -> io::Result<()> {
    let mut buf = [0u8; 4];
    writer.write_all(c.encode_utf8(&mut buf).as_bytes())
}

/// Streams `input` to `output` through `f`, one scalar at a time.
///
/// Both sides are buffered. The output buffer is flushed on normal
/// termination; on error whatever was already flushed stays written.
///
/// # Errors
/// Returns [`CaesarError::Io`](crate::error::CaesarError::Io) on any read,
/// write or UTF-8 decoding failure.
pub fn process<R, W, F>(input: R, output: W, f: F) -> Result<()>
where
    R: Read,
    W: Write,
    F: Fn(char) -> char,
{
    let mut reader = RuneReader::new(BufReader::new(input));
    let mut writer = BufWriter::new(output);

    while let Some(c) = reader.read_rune()? {
        write_rune(&mut writer, f(c))?;
    }
    writer.flush()?;
    Ok(())
}

/// Iterates the scalars of an in-memory buffer, dropping malformed bytes.
///
/// Used by the cryptanalysis passes, which only look at alphabet scalars.
pub fn runes(bytes: &[u8]) -> impl Iterator<Item = char> + '_ {
    bytes.utf8_chunks().flat_map(|chunk| chunk.valid().chars())
}
