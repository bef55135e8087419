pub mod errors;

pub use errors::{Error, Result, ValidationError};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest value on the rating scale
pub const SCALE_MIN: f64 = 1.0;
/// Highest value on the rating scale
pub const SCALE_MAX: f64 = 5.0;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ItemRating {
    pub item: String,
    pub value: f64,
}

impl ItemRating {
    pub fn new(item: impl Into<String>, value: f64) -> Self {
        Self {
            item: item.into(),
            value,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CategoryRatings {
    pub id: String,
    pub ratings: Vec<ItemRating>,
}

impl CategoryRatings {
    pub fn new(id: impl Into<String>, ratings: Vec<ItemRating>) -> Self {
        Self {
            id: id.into(),
            ratings,
        }
    }

    /// Build a category from `(item, value)` pairs.
    pub fn from_pairs<I, S>(id: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self::new(
            id,
            pairs
                .into_iter()
                .map(|(item, value)| ItemRating::new(item, value))
                .collect(),
        )
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.ratings.iter().map(|r| r.value)
    }
}

/// Validated ratings grouped by category, in input order.
///
/// A `RatingSet` is only ever produced by the validation layer, so every
/// instance holds at least one category, every category holds at least one
/// item and every value is a finite number on the 1-5 scale.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct RatingSet {
    categories: Vec<CategoryRatings>,
}

impl RatingSet {
    /// Validate and wrap typed category data.
    pub fn new(categories: Vec<CategoryRatings>) -> std::result::Result<Self, ValidationError> {
        crate::validation::validate_categories(categories)
    }

    pub(crate) fn from_validated(categories: Vec<CategoryRatings>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[CategoryRatings] {
        &self.categories
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.ratings.len()).sum()
    }

    /// Every rating across every category, flattened in input order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.categories.iter().flat_map(CategoryRatings::values)
    }
}

impl TryFrom<&serde_json::Value> for RatingSet {
    type Error = ValidationError;

    fn try_from(value: &serde_json::Value) -> std::result::Result<Self, Self::Error> {
        crate::validation::validate_value(value)
    }
}

/// Aggregate statistics over every rating in a set.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GlobalStats {
    pub total_items: usize,
    pub max_rating_count: usize,
    pub min_rating_count: usize,
    pub max_rating_proportion: f64,
    pub min_rating_proportion: f64,
    pub mean: f64,
    pub variance: f64,
    pub standard_deviation: f64,
}

impl GlobalStats {
    /// Share of ratings sitting on either end of the scale.
    pub fn extreme_proportion(&self) -> f64 {
        self.max_rating_proportion + self.min_rating_proportion
    }
}

/// Overall response bias detected in a rating set.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStyle {
    HighAcquiescence, // Tends to rate everything high
    LowAcquiescence,  // Tends to rate everything low
    ExtremeStyle,     // Favors scale endpoints
    CentralTendency,  // Avoids scale endpoints
    Balanced,
}

impl ResponseStyle {
    pub const ALL: [ResponseStyle; 5] = [
        ResponseStyle::HighAcquiescence,
        ResponseStyle::LowAcquiescence,
        ResponseStyle::ExtremeStyle,
        ResponseStyle::CentralTendency,
        ResponseStyle::Balanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HighAcquiescence => "high_acquiescence",
            Self::LowAcquiescence => "low_acquiescence",
            Self::ExtremeStyle => "extreme_style",
            Self::CentralTendency => "central_tendency",
            Self::Balanced => "balanced",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::HighAcquiescence => "systematic over-rating; scores are pulled down",
            Self::LowAcquiescence => "systematic under-rating; scores are pushed up",
            Self::ExtremeStyle => "preference for scale endpoints; scores are compressed",
            Self::CentralTendency => "avoidance of scale endpoints; scores are expanded",
            Self::Balanced => "no systematic bias detected",
        }
    }
}

impl fmt::Display for ResponseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CategoryScore {
    pub category: String,
    pub score: f64,
}

/// Where a category sits relative to the other categories of the same run.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CategoryPosition {
    pub category: String,
    pub score: f64,
    /// 1 = highest score
    pub rank: usize,
    /// (N - rank + 1) / N, in (0, 1]
    pub percentile_rank: f64,
    /// Standardized distance from the cross-category mean
    pub relative_distance: f64,
    pub is_above_average: bool,
    pub distance_from_mean: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CorrectionResult {
    pub category: String,
    pub original_score: f64,
    pub corrected_score: f64,
    pub global_factor: f64,
    pub relative_factor: f64,
    /// corrected / original
    pub total_adjustment: f64,
    /// (total_adjustment - 1) * 100, rounded to 2 places
    pub adjustment_percent: f64,
    pub position: CategoryPosition,
}

impl CorrectionResult {
    /// Magnitude of the change as a fraction of the original score.
    pub fn absolute_adjustment(&self) -> f64 {
        (self.total_adjustment - 1.0).abs()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RunMetadata {
    pub global_factor: f64,
    pub total_categories: usize,
    pub total_items: usize,
    pub correction_applied: bool,
}

/// Everything produced by one invocation of the correction pipeline.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CorrectionRun {
    pub response_style: ResponseStyle,
    pub global_stats: GlobalStats,
    pub category_scores: Vec<CategoryScore>,
    pub corrected_categories: Vec<CorrectionResult>,
    pub metadata: RunMetadata,
}

impl CorrectionRun {
    pub fn category(&self, id: &str) -> Option<&CorrectionResult> {
        self.corrected_categories.iter().find(|c| c.category == id)
    }
}
