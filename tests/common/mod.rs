//! Shared test utilities and fixture generators

#![allow(dead_code)]

use menugen::pipeline::{generate_menus, CuisineSpec, MenuSet};
use std::path::PathBuf;
use tempfile::TempDir;

/// Build a validated `CuisineSpec` from integer counts
pub fn spec(counts: &[i64]) -> CuisineSpec {
    CuisineSpec::from_counts(counts).unwrap()
}

/// Generate the menu set for integer counts
pub fn menus_for(counts: &[i64]) -> MenuSet {
    generate_menus(&spec(counts))
}

/// Token list as it would arrive from the command line
pub fn tokens(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Create a temp directory and a path for the output file inside it
pub fn temp_output() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("menus.txt");
    (temp_dir, path)
}

/// Random dish counts: `cuisines` entries between 1 and `max_dishes`
pub fn random_counts(cuisines: usize, max_dishes: i64) -> Vec<i64> {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    (0..cuisines).map(|_| rng.gen_range(1..=max_dishes)).collect()
}
