//! Global and relative correction factors.
//!
//! Both are a closed case analysis over [`ResponseStyle`]. The global factor
//! moves every category by the same ratio; the relative factor then nudges
//! each category according to where it sits among the others, so genuine
//! differences between categories survive the global pull.

use crate::config::CorrectionConfig;
use crate::core::{CategoryPosition, GlobalStats, ResponseStyle};

/// Hard bounds on the global factor
pub const GLOBAL_FACTOR_MIN: f64 = 0.7;
pub const GLOBAL_FACTOR_MAX: f64 = 1.3;

/// Hard bounds on the relative factor
pub const RELATIVE_FACTOR_MIN: f64 = 0.85;
pub const RELATIVE_FACTOR_MAX: f64 = 1.15;

/// Weight of the endpoint share in the acquiescence global factors
const ACQUIESCENCE_WEIGHT: f64 = 0.5;
/// Weight of the endpoint share in the extreme-style global factor
const EXTREME_WEIGHT: f64 = 0.2;
/// Extreme-style compression cap, independent of `max_global_adjustment`
const EXTREME_MAX_COMPRESSION: f64 = 0.15;
/// Fixed expansion for central tendency
const CENTRAL_EXPANSION: f64 = 1.05;

const STRONG_RELATIVE_WEIGHT: f64 = 0.1;
const MILD_RELATIVE_WEIGHT: f64 = 0.05;

/// Multiplier shared by every category of a run, always within
/// [`GLOBAL_FACTOR_MIN`, `GLOBAL_FACTOR_MAX`].
pub fn global_factor(
    style: ResponseStyle,
    stats: &GlobalStats,
    config: &CorrectionConfig,
) -> f64 {
    let factor = match style {
        ResponseStyle::HighAcquiescence => {
            1.0 - config
                .max_global_adjustment
                .min(stats.max_rating_proportion * ACQUIESCENCE_WEIGHT)
        }
        ResponseStyle::LowAcquiescence => {
            1.0 + config
                .max_global_adjustment
                .min(stats.min_rating_proportion * ACQUIESCENCE_WEIGHT)
        }
        ResponseStyle::ExtremeStyle => {
            1.0 - EXTREME_MAX_COMPRESSION.min(stats.extreme_proportion() * EXTREME_WEIGHT)
        }
        ResponseStyle::CentralTendency => CENTRAL_EXPANSION,
        ResponseStyle::Balanced => 1.0,
    };

    factor.clamp(GLOBAL_FACTOR_MIN, GLOBAL_FACTOR_MAX)
}

/// Per-category multiplier, always within
/// [`RELATIVE_FACTOR_MIN`, `RELATIVE_FACTOR_MAX`] and exactly 1.0 for a
/// balanced run.
pub fn relative_factor(position: &CategoryPosition, style: ResponseStyle) -> f64 {
    let distance = position.relative_distance;

    let factor = match style {
        ResponseStyle::Balanced => return 1.0,
        // Keep strong categories ahead of the global pull-down; the
        // "moderate" scores below average are themselves partly bias.
        ResponseStyle::HighAcquiescence if position.is_above_average => {
            1.0 + distance * STRONG_RELATIVE_WEIGHT
        }
        ResponseStyle::HighAcquiescence => 1.0 - distance.abs() * MILD_RELATIVE_WEIGHT,
        ResponseStyle::LowAcquiescence if position.is_above_average => {
            1.0 + distance * MILD_RELATIVE_WEIGHT
        }
        ResponseStyle::LowAcquiescence => 1.0 - distance.abs() * STRONG_RELATIVE_WEIGHT,
        ResponseStyle::ExtremeStyle => 1.0 + distance * MILD_RELATIVE_WEIGHT,
        ResponseStyle::CentralTendency => 1.0 + distance * STRONG_RELATIVE_WEIGHT,
    };

    factor.clamp(RELATIVE_FACTOR_MIN, RELATIVE_FACTOR_MAX)
}
