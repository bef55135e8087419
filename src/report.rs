//! Human-readable summaries of a correction run.
//!
//! Reporting only rounds, formats and aggregates; it never recomputes a
//! correction.

use crate::analysis::stats::{mean, round_to};
use crate::core::{CorrectionRun, ResponseStyle};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CorrectionReport {
    pub summary: ReportSummary,
    pub categories: Vec<CategoryReport>,
    pub statistics: ReportStatistics,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ReportSummary {
    pub response_style: ResponseStyle,
    pub global_factor: f64,
    pub total_categories: usize,
    pub total_items: usize,
    pub correction_applied: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CategoryReport {
    pub category: String,
    /// Rounded to 3 decimal places
    pub original_score: f64,
    /// Rounded to 3 decimal places
    pub corrected_score: f64,
    /// e.g. "-30.00%"
    pub adjustment_percent: String,
    pub rank: usize,
    /// e.g. "100.0%"
    pub percentile: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ReportStatistics {
    pub original_mean: f64,
    pub corrected_mean: f64,
    /// max |total_adjustment - 1| over categories, as a fraction
    pub largest_adjustment: f64,
    /// mean |total_adjustment - 1| over categories, as a fraction
    pub average_adjustment: f64,
}

impl ReportStatistics {
    pub fn largest_adjustment_display(&self) -> String {
        format!("{:.2}%", self.largest_adjustment * 100.0)
    }

    pub fn average_adjustment_display(&self) -> String {
        format!("{:.2}%", self.average_adjustment * 100.0)
    }
}

pub fn format_adjustment_percent(percent: f64) -> String {
    format!("{:.2}%", percent)
}

pub fn format_percentile(percentile_rank: f64) -> String {
    format!("{:.1}%", percentile_rank * 100.0)
}

/// Build the report for a finished run.
pub fn generate_report(run: &CorrectionRun) -> CorrectionReport {
    let categories = run
        .corrected_categories
        .iter()
        .map(|result| CategoryReport {
            category: result.category.clone(),
            original_score: round_to(result.original_score, 3),
            corrected_score: round_to(result.corrected_score, 3),
            adjustment_percent: format_adjustment_percent(result.adjustment_percent),
            rank: result.position.rank,
            percentile: format_percentile(result.position.percentile_rank),
        })
        .collect();

    CorrectionReport {
        summary: ReportSummary {
            response_style: run.response_style,
            global_factor: run.metadata.global_factor,
            total_categories: run.metadata.total_categories,
            total_items: run.metadata.total_items,
            correction_applied: run.metadata.correction_applied,
        },
        categories,
        statistics: summarize_adjustments(run),
    }
}

fn summarize_adjustments(run: &CorrectionRun) -> ReportStatistics {
    let results = &run.corrected_categories;
    let originals: Vec<f64> = results.iter().map(|r| r.original_score).collect();
    let corrected: Vec<f64> = results.iter().map(|r| r.corrected_score).collect();
    let adjustments: Vec<f64> = results.iter().map(|r| r.absolute_adjustment()).collect();

    ReportStatistics {
        original_mean: round_to(mean(&originals), 3),
        corrected_mean: round_to(mean(&corrected), 3),
        largest_adjustment: adjustments.iter().copied().fold(0.0, f64::max),
        average_adjustment: mean(&adjustments),
    }
}
