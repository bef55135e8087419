//! Validation for correction parameters.
//!
//! Every problem is collected before reporting so a broken config file can
//! be fixed in one pass.

use super::CorrectionConfig;
use crate::core::{Error, Result};

/// Collect every problem with a correction config.
pub fn config_problems(config: &CorrectionConfig) -> Vec<String> {
    let mut problems = Vec::new();

    let fields = [
        ("max_global_adjustment", config.max_global_adjustment),
        ("max_relative_adjustment", config.max_relative_adjustment),
        ("min_score", config.min_score),
        ("max_score", config.max_score),
    ];
    for (name, value) in fields {
        if !value.is_finite() {
            problems.push(format!("{} must be a finite number (got {})", name, value));
        }
    }

    if !(0.0..=1.0).contains(&config.max_global_adjustment) {
        problems.push(format!(
            "max_global_adjustment out of range (expected: 0.0-1.0, got: {})",
            config.max_global_adjustment
        ));
    }
    if !(0.0..=1.0).contains(&config.max_relative_adjustment) {
        problems.push(format!(
            "max_relative_adjustment out of range (expected: 0.0-1.0, got: {})",
            config.max_relative_adjustment
        ));
    }
    if config.min_score >= config.max_score {
        problems.push(format!(
            "min_score ({}) must be below max_score ({})",
            config.min_score, config.max_score
        ));
    }

    problems
}

/// Validate a correction config, reporting all problems at once.
pub fn validate_correction_config(config: &CorrectionConfig) -> Result<()> {
    let problems = config_problems(config);
    if problems.is_empty() {
        Ok(())
    } else {
        Err(Error::Configuration(problems.join("; ")))
    }
}
