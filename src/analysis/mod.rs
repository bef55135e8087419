//! Statistical stages of the correction pipeline.
//!
//! - `global`: distribution of every rating in the set
//! - `style`: ordered classification of the response style
//! - `position`: per-category means and their standing against each other
//!
//! All functions here are pure; they take validated data and cannot fail.

pub mod global;
pub mod position;
pub mod stats;
pub mod style;

pub use global::calculate_global_stats;
pub use position::{calculate_category_positions, calculate_category_scores, MIN_CATEGORY_STDEV};
pub use style::{classify_response_style, evaluate_style_rules, RuleEvaluation};
