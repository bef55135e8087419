//! Response-style classification.
//!
//! The rules overlap near their boundaries (a set can be both mostly 5s and
//! low-variance, for instance), so they are kept in an ordered table and the
//! first rule that matches decides the label. Reordering the table changes
//! results.

use crate::core::{GlobalStats, ResponseStyle};
use serde::{Deserialize, Serialize};

/// Share of top ratings (or of bottom ratings) that signals acquiescence.
pub const ACQUIESCENCE_PROPORTION: f64 = 0.4;
/// Mean at or above which a set counts as high acquiescence.
pub const HIGH_MEAN_THRESHOLD: f64 = 4.2;
/// Mean at or below which a set counts as low acquiescence.
pub const LOW_MEAN_THRESHOLD: f64 = 2.2;
/// Combined endpoint share that signals an extreme response style.
pub const EXTREME_PROPORTION: f64 = 0.6;
/// Extreme style additionally requires the variance to stay below this.
pub const EXTREME_MAX_VARIANCE: f64 = 1.5;
/// Both endpoint shares below this signal central tendency.
pub const CENTRAL_MAX_PROPORTION: f64 = 0.1;

type StylePredicate = fn(&GlobalStats) -> bool;

/// Evaluated in order; `Balanced` is the fallthrough.
const STYLE_RULES: [(StylePredicate, ResponseStyle); 4] = [
    (is_high_acquiescence, ResponseStyle::HighAcquiescence),
    (is_low_acquiescence, ResponseStyle::LowAcquiescence),
    (is_extreme_style, ResponseStyle::ExtremeStyle),
    (is_central_tendency, ResponseStyle::CentralTendency),
];

fn is_high_acquiescence(stats: &GlobalStats) -> bool {
    stats.max_rating_proportion >= ACQUIESCENCE_PROPORTION || stats.mean >= HIGH_MEAN_THRESHOLD
}

fn is_low_acquiescence(stats: &GlobalStats) -> bool {
    stats.min_rating_proportion >= ACQUIESCENCE_PROPORTION || stats.mean <= LOW_MEAN_THRESHOLD
}

fn is_extreme_style(stats: &GlobalStats) -> bool {
    stats.extreme_proportion() >= EXTREME_PROPORTION && stats.variance < EXTREME_MAX_VARIANCE
}

fn is_central_tendency(stats: &GlobalStats) -> bool {
    stats.max_rating_proportion < CENTRAL_MAX_PROPORTION
        && stats.min_rating_proportion < CENTRAL_MAX_PROPORTION
}

/// Classify the overall response style of a rating set.
pub fn classify_response_style(stats: &GlobalStats) -> ResponseStyle {
    STYLE_RULES
        .iter()
        .find(|(matches, _)| matches(stats))
        .map(|(_, style)| *style)
        .unwrap_or(ResponseStyle::Balanced)
}

/// Outcome of one classification rule, for explaining a decision.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleEvaluation {
    pub style: ResponseStyle,
    pub matched: bool,
    /// True for the rule that determined the label
    pub selected: bool,
}

/// Evaluate every rule in table order, marking the one that wins.
///
/// The trailing `Balanced` entry is selected only when no other rule
/// matched.
pub fn evaluate_style_rules(stats: &GlobalStats) -> Vec<RuleEvaluation> {
    let chosen = classify_response_style(stats);
    STYLE_RULES
        .iter()
        .map(|(matches, style)| RuleEvaluation {
            style: *style,
            matched: matches(stats),
            selected: *style == chosen,
        })
        .chain(std::iter::once(RuleEvaluation {
            style: ResponseStyle::Balanced,
            matched: true,
            selected: chosen == ResponseStyle::Balanced,
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(p5: f64, p1: f64, mean: f64, variance: f64) -> GlobalStats {
        GlobalStats {
            total_items: 100,
            max_rating_count: (p5 * 100.0) as usize,
            min_rating_count: (p1 * 100.0) as usize,
            max_rating_proportion: p5,
            min_rating_proportion: p1,
            mean,
            variance,
            standard_deviation: variance.sqrt(),
        }
    }

    #[test]
    fn test_high_acquiescence_by_proportion_or_mean() {
        assert_eq!(
            classify_response_style(&stats(0.4, 0.0, 3.5, 1.0)),
            ResponseStyle::HighAcquiescence
        );
        assert_eq!(
            classify_response_style(&stats(0.2, 0.0, 4.2, 1.0)),
            ResponseStyle::HighAcquiescence
        );
    }

    #[test]
    fn test_low_acquiescence_by_proportion_or_mean() {
        assert_eq!(
            classify_response_style(&stats(0.0, 0.4, 2.5, 1.0)),
            ResponseStyle::LowAcquiescence
        );
        assert_eq!(
            classify_response_style(&stats(0.2, 0.2, 2.2, 1.0)),
            ResponseStyle::LowAcquiescence
        );
    }

    #[test]
    fn test_high_rule_wins_when_both_acquiescence_rules_match() {
        // 45% fives and 45% ones: both acquiescence predicates hold
        assert_eq!(
            classify_response_style(&stats(0.45, 0.45, 3.0, 3.6)),
            ResponseStyle::HighAcquiescence
        );
    }

    #[test]
    fn test_extreme_style_requires_low_variance() {
        assert_eq!(
            classify_response_style(&stats(0.35, 0.3, 3.1, 1.2)),
            ResponseStyle::ExtremeStyle
        );
        // Same endpoint share but a wide spread falls through to balanced
        assert_eq!(
            classify_response_style(&stats(0.35, 0.3, 3.1, 3.5)),
            ResponseStyle::Balanced
        );
    }

    #[test]
    fn test_central_tendency_when_endpoints_are_rare() {
        assert_eq!(
            classify_response_style(&stats(0.0, 0.0, 3.0, 0.0)),
            ResponseStyle::CentralTendency
        );
        assert_eq!(
            classify_response_style(&stats(0.09, 0.09, 3.0, 0.5)),
            ResponseStyle::CentralTendency
        );
    }

    #[test]
    fn test_balanced_at_central_boundary() {
        assert_eq!(
            classify_response_style(&stats(0.1, 0.1, 3.0, 0.8)),
            ResponseStyle::Balanced
        );
    }

    #[test]
    fn test_rule_evaluation_marks_first_match_only() {
        let evaluations = evaluate_style_rules(&stats(0.45, 0.45, 3.0, 1.0));

        assert_eq!(evaluations.len(), 5);
        assert!(evaluations[0].matched && evaluations[0].selected);
        assert!(evaluations[1].matched && !evaluations[1].selected);
        assert_eq!(evaluations.iter().filter(|e| e.selected).count(), 1);
    }

    #[test]
    fn test_rule_evaluation_selects_balanced_fallthrough() {
        let evaluations = evaluate_style_rules(&stats(0.2, 0.2, 3.0, 2.0));
        let last = evaluations.last().unwrap();

        assert_eq!(last.style, ResponseStyle::Balanced);
        assert!(last.selected);
        assert!(evaluations[..4].iter().all(|e| !e.matched));
    }
}
