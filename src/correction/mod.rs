//! The correction pipeline.
//!
//! `correct` runs the four stages in order:
//!
//! 1. global statistics over every rating
//! 2. response-style classification
//! 3. per-category scores and positions
//! 4. global and relative factors, combined and clamped per category
//!
//! The pipeline is infallible once the input has been validated; all
//! error paths live in [`crate::validation`].

pub mod factors;

pub use factors::{
    global_factor, relative_factor, GLOBAL_FACTOR_MAX, GLOBAL_FACTOR_MIN, RELATIVE_FACTOR_MAX,
    RELATIVE_FACTOR_MIN,
};

use crate::analysis::{
    calculate_category_positions, calculate_category_scores, calculate_global_stats,
    classify_response_style, stats::round_to,
};
use crate::config::CorrectionConfig;
use crate::core::{
    CategoryPosition, CorrectionResult, CorrectionRun, RatingSet, ResponseStyle, RunMetadata,
};
use crate::observability::{set_phase, PipelinePhase};
use tracing::{debug, info_span};

/// Run the full correction pipeline over a validated rating set.
pub fn correct(ratings: &RatingSet, config: &CorrectionConfig) -> CorrectionRun {
    let span = info_span!(
        "correction_run",
        categories = ratings.category_count(),
        items = ratings.item_count()
    );
    let _guard = span.enter();

    let global_stats = {
        let _phase = set_phase(PipelinePhase::GlobalAnalysis);
        calculate_global_stats(ratings)
    };
    debug!(
        mean = global_stats.mean,
        variance = global_stats.variance,
        max_rating_proportion = global_stats.max_rating_proportion,
        min_rating_proportion = global_stats.min_rating_proportion,
        "global statistics computed"
    );

    let response_style = {
        let _phase = set_phase(PipelinePhase::StyleClassification);
        classify_response_style(&global_stats)
    };
    debug!(style = %response_style, "response style classified");

    let (category_scores, positions) = {
        let _phase = set_phase(PipelinePhase::CategoryPositioning);
        let scores = calculate_category_scores(ratings);
        let positions = calculate_category_positions(&scores);
        (scores, positions)
    };

    let (factor, corrected_categories) = {
        let _phase = set_phase(PipelinePhase::Correction);
        let factor = global_factor(response_style, &global_stats, config);
        let corrected = apply_category_corrections(&positions, response_style, factor, config);
        (factor, corrected)
    };
    debug!(global_factor = factor, "corrections applied");

    let metadata = RunMetadata {
        global_factor: factor,
        total_categories: ratings.category_count(),
        total_items: global_stats.total_items,
        correction_applied: factor != 1.0 || response_style != ResponseStyle::Balanced,
    };

    CorrectionRun {
        response_style,
        global_stats,
        category_scores,
        corrected_categories,
        metadata,
    }
}

/// Validate a JSON-shaped rating document, then correct it.
pub fn correct_value(
    value: &serde_json::Value,
    config: &CorrectionConfig,
) -> crate::core::Result<CorrectionRun> {
    let ratings = {
        let _phase = set_phase(PipelinePhase::Validation);
        RatingSet::try_from(value)?
    };
    Ok(correct(&ratings, config))
}

/// Combine the shared global factor with each category's relative factor.
pub fn apply_category_corrections(
    positions: &[CategoryPosition],
    style: ResponseStyle,
    global_factor: f64,
    config: &CorrectionConfig,
) -> Vec<CorrectionResult> {
    positions
        .iter()
        .map(|position| correct_category(position, style, global_factor, config))
        .collect()
}

fn correct_category(
    position: &CategoryPosition,
    style: ResponseStyle,
    global_factor: f64,
    config: &CorrectionConfig,
) -> CorrectionResult {
    let relative = relative_factor(position, style);
    let original_score = position.score;
    let corrected_score = config.clamp_score(original_score * global_factor * relative);
    // Validation guarantees original_score >= 1
    let total_adjustment = corrected_score / original_score;

    debug!(
        category = %position.category,
        original_score,
        corrected_score,
        relative_factor = relative,
        "category corrected"
    );

    CorrectionResult {
        category: position.category.clone(),
        original_score,
        corrected_score,
        global_factor,
        relative_factor: relative,
        total_adjustment,
        adjustment_percent: round_to((total_adjustment - 1.0) * 100.0, 2),
        position: position.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use serde_json::json;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_high_acquiescence_run() {
        let run = correct_value(
            &json!({
                "A": {"q1": 5, "q2": 5, "q3": 5},
                "B": {"q1": 5, "q2": 4, "q3": 5}
            }),
            &CorrectionConfig::default(),
        )
        .unwrap();

        assert_eq!(run.response_style, ResponseStyle::HighAcquiescence);
        assert!((run.metadata.global_factor - 0.7).abs() < EPS);
        assert!(run.metadata.correction_applied);
        assert_eq!(run.metadata.total_items, 6);

        let a = run.category("A").unwrap();
        let expected_distance = (5.0 - (5.0 + 14.0 / 3.0) / 2.0) / 0.5;
        assert!((a.position.relative_distance - expected_distance).abs() < EPS);
        assert!((a.relative_factor - (1.0 + expected_distance * 0.1)).abs() < EPS);
        assert!((a.corrected_score - 5.0 * 0.7 * a.relative_factor).abs() < EPS);

        let b = run.category("B").unwrap();
        assert!((b.relative_factor - (1.0 - expected_distance * 0.05)).abs() < EPS);
    }

    #[test]
    fn test_adjustment_percent_is_rounded() {
        let run = correct_value(
            &json!({"A": {"q1": 5, "q2": 5, "q3": 5}, "B": {"q1": 5, "q2": 4, "q3": 5}}),
            &CorrectionConfig::default(),
        )
        .unwrap();

        for result in &run.corrected_categories {
            let raw = (result.total_adjustment - 1.0) * 100.0;
            assert!((result.adjustment_percent - raw).abs() <= 0.005 + EPS);
            assert_eq!(result.adjustment_percent, round_to(raw, 2));
        }
    }

    #[test]
    fn test_results_follow_input_order() {
        let run = correct_value(
            &json!({"z": {"q1": 2}, "a": {"q1": 4}, "m": {"q1": 3}}),
            &CorrectionConfig::default(),
        )
        .unwrap();

        let ids: Vec<_> = run
            .corrected_categories
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
        let score_ids: Vec<_> = run.category_scores.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(score_ids, ids);
    }

    #[test]
    fn test_custom_bounds_clamp_output() {
        let config = CorrectionConfig::default().with_score_bounds(1.01, 3.0);
        let run = correct_value(&json!({"a": {"q1": 3, "q2": 3}}), &config).unwrap();

        // central tendency expands 3.0 to 3.15, then clamps
        assert_eq!(run.response_style, ResponseStyle::CentralTendency);
        assert_eq!(run.corrected_categories[0].corrected_score, 3.0);
        assert_eq!(run.corrected_categories[0].total_adjustment, 1.0);
    }

    #[test]
    fn test_invalid_input_produces_no_run() {
        let err = correct_value(&json!({"a": {"q1": 6}}), &CorrectionConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
