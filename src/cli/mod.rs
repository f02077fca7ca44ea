//! CLI module - argument parsing and usage text

mod args;
mod usage;

pub use args::Cli;
pub use usage::usage_text;
