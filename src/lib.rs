//! Response-style bias correction for multi-category ratings.
//!
//! A respondent's ratings across several categories are analyzed as a
//! whole to detect a systematic response style (acquiescence, extreme or
//! central tendency). Each category score is then corrected by a global
//! factor for that style and a relative factor for the category's
//! position among the others.
//!
//! ```
//! use rescore::{correct_value, CorrectionConfig, ResponseStyle};
//! use serde_json::json;
//!
//! let ratings = json!({
//!     "leadership": {"q1": 5, "q2": 5, "q3": 5},
//!     "teamwork": {"q1": 5, "q2": 4, "q3": 5}
//! });
//! let run = correct_value(&ratings, &CorrectionConfig::default()).unwrap();
//!
//! assert_eq!(run.response_style, ResponseStyle::HighAcquiescence);
//! assert!(run.corrected_categories[0].corrected_score < 5.0);
//! ```

pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod correction;
pub mod formatting;
pub mod io;
pub mod observability;
pub mod report;
pub mod validation;

pub use crate::core::{
    CategoryPosition, CategoryRatings, CategoryScore, CorrectionResult, CorrectionRun, Error,
    GlobalStats, ItemRating, RatingSet, ResponseStyle, Result, RunMetadata, ValidationError,
};

pub use crate::analysis::{
    calculate_category_positions, calculate_category_scores, calculate_global_stats,
    classify_response_style,
};

pub use crate::config::{CorrectionConfig, RescoreConfig};

pub use crate::correction::{correct, correct_value};

pub use crate::report::{generate_report, CorrectionReport};

pub use crate::io::export::{export_report, export_run, load_run};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
