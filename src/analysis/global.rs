use super::stats::{mean, sample_std_dev, sample_variance};
use crate::core::{GlobalStats, RatingSet, SCALE_MAX, SCALE_MIN};

/// Compute distribution statistics over every rating in the set,
/// ignoring category boundaries.
pub fn calculate_global_stats(ratings: &RatingSet) -> GlobalStats {
    let values: Vec<f64> = ratings.values().collect();
    summarize(&values)
}

pub(crate) fn summarize(values: &[f64]) -> GlobalStats {
    let total_items = values.len();
    let max_rating_count = values.iter().filter(|&&v| v == SCALE_MAX).count();
    let min_rating_count = values.iter().filter(|&&v| v == SCALE_MIN).count();

    let proportion = |count: usize| {
        if total_items == 0 {
            0.0
        } else {
            count as f64 / total_items as f64
        }
    };

    GlobalStats {
        total_items,
        max_rating_count,
        min_rating_count,
        max_rating_proportion: proportion(max_rating_count),
        min_rating_proportion: proportion(min_rating_count),
        mean: mean(values),
        variance: sample_variance(values),
        standard_deviation: sample_std_dev(values),
    }
}
