//! Tests for CLI argument parsing

use clap::Parser;
use menugen::cli::Cli;
use std::path::PathBuf;

#[test]
fn test_cli_default_output() {
    let cli = Cli::parse_from(["menugen", "3", "4"]);

    assert_eq!(cli.counts, vec!["3", "4"]);
    assert_eq!(
        cli.output,
        PathBuf::from("menus.txt"),
        "Default output should be menus.txt"
    );
}

#[test]
fn test_cli_explicit_output() {
    let cli = Cli::parse_from(["menugen", "-o", "out/custom.csv", "2", "2"]);
    assert_eq!(cli.output, PathBuf::from("out/custom.csv"));

    let cli = Cli::parse_from(["menugen", "2", "--output", "other.txt"]);
    assert_eq!(cli.output, PathBuf::from("other.txt"));
    assert_eq!(cli.counts, vec!["2"]);
}

#[test]
fn test_cli_no_counts_parses() {
    // Missing counts are reported as a usage error after parsing
    let cli = Cli::parse_from(["menugen"]);
    assert!(cli.counts.is_empty());
}

#[test]
fn test_cli_negative_and_decimal_counts() {
    let cli = Cli::parse_from(["menugen", "3.7", "-2", "0"]);
    assert_eq!(cli.counts, vec!["3.7", "-2", "0"]);
}
