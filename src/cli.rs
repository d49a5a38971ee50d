//! Command-line configuration and dispatch.
//!
//! Parses flags, validates the requested mode, derives the output path and
//! drives [`Caesar`] over the opened files. All file handling lives here;
//! the codec only sees readers and writers.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;

use crate::caesar::Caesar;
use crate::error::{CaesarError, Result};
use crate::shift_codec::Key;

/// Prefix of derived output names in encode mode.
const ENCRYPTED_PREFIX: &str = "encrypted_";

/// Prefix of derived output names in decode mode.
const DECRYPTED_PREFIX: &str = "decrypted_";

/// Caesar cipher tool for Russian texts
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "rucaesar")]
#[command(about = "Caesar cipher for Russian texts with key recovery")]
#[command(version)]
pub struct Args {
    /// Encode the given file
    #[arg(short = 'e', long = "encode", value_name = "FILE")]
    pub encode: Option<PathBuf>,

    /// Decode the given file
    #[arg(short = 'd', long = "decode", value_name = "FILE")]
    pub decode: Option<PathBuf>,

    /// Output file (default: encrypted_<name> or decrypted_<name> in the current directory)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Key for encoding/decoding (0..=75)
    #[arg(short = 'k', long = "key", default_value_t = 0, allow_negative_numbers = true)]
    pub key: i64,

    /// Decode by brute force
    #[arg(long = "bf")]
    pub brute_force: bool,

    /// Decode by frequency analysis against a helper text by the same author
    #[arg(long = "fq", value_name = "HELPER")]
    pub frequency: Option<PathBuf>,

    /// Verbose output: debug logging and cryptanalysis progress on stdout
    #[arg(short, long)]
    pub verbose: bool,
}

/// Operation selected by the flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Encrypt with a key.
    Encode(Key),
    /// Decrypt with a known key.
    Decode(Key),
    /// Recover the key by brute force, then decrypt.
    BruteForce,
    /// Recover the key by frequency analysis against the helper, then decrypt.
    FrequencyAnalysis(PathBuf),
}

impl Args {
    /// Validates the flag combination.
    ///
    /// # Errors
    /// [`CaesarError::InvalidArguments`] for contradictory or incomplete
    /// flags, [`CaesarError::InvalidKey`] for an out-of-range key.
    pub fn mode(&self) -> Result<Mode> {
        match (&self.encode, &self.decode) {
            (Some(_), Some(_)) => Err(invalid(
                "you must choose either encode '-e' mode or decode '-d' mode, not both",
            )),
            (None, None) => Err(invalid(
                "no input file was provided, use '-e <filepath>' or '-d <filepath>'",
            )),
            (Some(_), None) => {
                if self.key == 0 {
                    return Err(invalid("no key was provided for encoding, use '-k <number>'"));
                }
                Ok(Mode::Encode(Key::new(self.key)?))
            }
            (None, Some(_)) => {
                if self.brute_force && self.frequency.is_some() {
                    return Err(invalid(
                        "choose either brute force '--bf' or frequency analysis '--fq', not both",
                    ));
                }
                if self.key != 0 {
                    return Ok(Mode::Decode(Key::new(self.key)?));
                }
                if self.brute_force {
                    return Ok(Mode::BruteForce);
                }
                match &self.frequency {
                    Some(helper) => Ok(Mode::FrequencyAnalysis(helper.clone())),
                    None => Err(invalid(
                        "no key or method for decoding, use '-k <N>', '--bf' or '--fq <filepath>'",
                    )),
                }
            }
        }
    }

    /// Returns the input file of the selected direction.
    pub fn input_path(&self) -> Option<&Path> {
        self.decode.as_deref().or(self.encode.as_deref())
    }

    /// Returns `-o` if given, else the input's file name with a mode prefix.
    ///
    /// # Errors
    /// [`CaesarError::InvalidArguments`] if no input is set or the input
    /// path has no file name.
    pub fn output_path(&self) -> Result<PathBuf> {
        if let Some(out) = &self.output {
            return Ok(out.clone());
        }
        let input = self
            .input_path()
            .ok_or_else(|| invalid("no input file was provided"))?;
        let name = input.file_name().ok_or_else(|| {
            invalid(format!("cannot derive output name from '{}'", input.display()))
        })?;
        let prefix = if self.decode.is_some() {
            DECRYPTED_PREFIX
        } else {
            ENCRYPTED_PREFIX
        };
        let mut derived = prefix.to_string();
        derived.push_str(&name.to_string_lossy());
        Ok(PathBuf::from(derived))
    }
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// File that was written.
    pub output: PathBuf,
    /// Key used: the given one, or the recovered one for cryptanalysis.
    /// `None` if cryptanalysis failed.
    pub key: Option<Key>,
}

/// A validated mode with its helper file already open.
enum Job {
    Encode(Key),
    Decode(Key),
    BruteForce,
    FrequencyAnalysis(File),
}

impl Job {
    /// Opens whatever the mode reads besides the input.
    fn open(mode: Mode) -> Result<Self> {
        Ok(match mode {
            Mode::Encode(key) => Job::Encode(key),
            Mode::Decode(key) => Job::Decode(key),
            Mode::BruteForce => Job::BruteForce,
            Mode::FrequencyAnalysis(path) => Job::FrequencyAnalysis(File::open(path)?),
        })
    }
}

/// Validates `args`, opens the files and runs the selected operation.
///
/// Progress text goes to stdout in verbose mode and is discarded otherwise.
///
/// # Errors
/// Validation errors before any file is touched, then
/// [`CaesarError::Io`] for file or stream failures.
pub fn run(args: &Args) -> Result<Outcome> {
    let mode = args.mode()?;
    let input_path = args
        .input_path()
        .ok_or_else(|| invalid("no input file was provided"))?;
    let output_path = args.output_path()?;

    let input = File::open(input_path)?;
    let job = Job::open(mode)?;
    let output = File::create(&output_path)?;
    let progress: Box<dyn Write> = if args.verbose {
        Box::new(io::stdout())
    } else {
        Box::new(io::sink())
    };

    let key = match job {
        Job::Encode(key) => {
            Caesar::with_key(key).encode(input, output)?;
            Some(key)
        }
        Job::Decode(key) => {
            Caesar::with_key(key).decode(input, output)?;
            Some(key)
        }
        Job::BruteForce => Caesar::default().brute_force_decode(input, output, progress)?,
        Job::FrequencyAnalysis(helper) => {
            Caesar::default().frequency_analysis_decode(input, helper, output, progress)?
        }
    };

    info!(
        input = %input_path.display(),
        output = %output_path.display(),
        "processed"
    );
    Ok(Outcome {
        output: output_path,
        key,
    })
}

fn invalid(msg: impl Into<String>) -> CaesarError {
    CaesarError::InvalidArguments(msg.into())
}
