//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::report::DEFAULT_OUTPUT_FILE;

/// menugen - List every menu that takes exactly one dish from each cuisine
#[derive(Parser, Debug)]
#[command(name = "menugen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number of dishes per cuisine, one value per cuisine (e.g. 3 4 5 6).
    /// Decimals are rounded to the nearest integer; cuisines with 0 dishes are skipped.
    #[arg(value_name = "DISHES", allow_negative_numbers = true)]
    pub counts: Vec<String>,

    /// Output file for the comma-separated menu table
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,
}
