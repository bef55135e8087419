// Test utilities shared by rescore integration tests
#![allow(dead_code)]

use rescore::{CategoryRatings, RatingSet};
use std::path::{Path, PathBuf};

/// Build a validated rating set from `(category, ratings)` pairs. Items are
/// named `q1`, `q2`, ... in order.
pub fn rating_set(categories: &[(&str, Vec<f64>)]) -> RatingSet {
    RatingSet::new(
        categories
            .iter()
            .map(|(id, values)| {
                CategoryRatings::from_pairs(
                    *id,
                    values
                        .iter()
                        .enumerate()
                        .map(|(i, value)| (format!("q{}", i + 1), *value)),
                )
            })
            .collect(),
    )
    .expect("test ratings must be valid")
}

/// Write `contents` to `name` inside `dir` and return the path.
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("failed to write fixture");
    path
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} +/- {tolerance}, got {actual}"
    );
}

pub const HIGH_ACQUIESCENCE_JSON: &str = r#"{
    "A": {"q1": 5, "q2": 5, "q3": 5},
    "B": {"q1": 5, "q2": 4, "q3": 5}
}"#;
