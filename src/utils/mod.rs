//! Stream utilities shared by the codec and the cryptanalysis passes.

pub mod runes;
