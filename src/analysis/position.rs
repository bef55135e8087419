use super::stats::{mean, sample_std_dev};
use crate::core::{CategoryPosition, CategoryScore, RatingSet};

/// Floor on the cross-category standard deviation. Keeps relative
/// distances bounded when category means sit close together, and stands in
/// for the deviation when there is only one category.
pub const MIN_CATEGORY_STDEV: f64 = 0.5;

/// Mean rating of each category, in input order.
pub fn calculate_category_scores(ratings: &RatingSet) -> Vec<CategoryScore> {
    ratings
        .categories()
        .iter()
        .map(|category| {
            let values: Vec<f64> = category.values().collect();
            CategoryScore {
                category: category.id.clone(),
                score: mean(&values),
            }
        })
        .collect()
}

/// Spread used to standardize category distances.
pub fn category_spread(scores: &[f64]) -> f64 {
    if scores.len() > 1 {
        sample_std_dev(scores).max(MIN_CATEGORY_STDEV)
    } else {
        MIN_CATEGORY_STDEV
    }
}

/// 1-based ranks by descending score. Ties keep input order, so the
/// result is always a permutation of `1..=n`.
pub fn rank_descending(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    // sort_by is stable
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let mut ranks = vec![0; scores.len()];
    for (position, &index) in order.iter().enumerate() {
        ranks[index] = position + 1;
    }
    ranks
}

/// Position every category against the cross-category mean.
///
/// Output order matches the input order of `scores`.
pub fn calculate_category_positions(scores: &[CategoryScore]) -> Vec<CategoryPosition> {
    if scores.is_empty() {
        return Vec::new();
    }

    let values: Vec<f64> = scores.iter().map(|s| s.score).collect();
    let count = values.len() as f64;
    let overall_mean = mean(&values);
    let spread = category_spread(&values);
    let ranks = rank_descending(&values);

    scores
        .iter()
        .zip(ranks)
        .map(|(score, rank)| {
            let deviation = score.score - overall_mean;
            CategoryPosition {
                category: score.category.clone(),
                score: score.score,
                rank,
                percentile_rank: (count - rank as f64 + 1.0) / count,
                relative_distance: deviation / spread,
                is_above_average: score.score > overall_mean,
                distance_from_mean: deviation.abs(),
            }
        })
        .collect()
}
