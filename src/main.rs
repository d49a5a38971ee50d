//! rucaesar binary.
//!
//! # Usage
//!
//! ```bash
//! # Encode with key 7
//! rucaesar -e text.txt -k 7
//!
//! # Decode with a known key
//! rucaesar -d encrypted_text.txt -k 7 -o text.txt
//!
//! # Recover the key by brute force
//! rucaesar -d encrypted_text.txt --bf -v
//!
//! # Recover the key by frequency analysis against another text by the same author
//! rucaesar -d encrypted_text.txt --fq helper.txt -v
//! ```

use std::process::ExitCode;

use clap::Parser;
use rucaesar::cli::{self, Args};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli::run(&args) {
        Ok(outcome) => {
            if outcome.key.is_none() {
                eprintln!(
                    "no acceptable key found, {} left empty",
                    outcome.output.display()
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
