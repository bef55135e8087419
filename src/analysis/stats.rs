//! Small descriptive-statistics helpers shared by the analysis stages.

/// Arithmetic mean, 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample variance (n - 1 denominator). Zero when there are fewer than two
/// values, since a single observation has no spread.
pub fn sample_variance(values: &[f64]) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }
    let avg = mean(values);
    let sum_sq = values
        .iter()
        .map(|v| {
            let diff = v - avg;
            diff * diff
        })
        .sum::<f64>();
    sum_sq / (values.len() - 1) as f64
}

/// Square root of the sample variance, 0.0 when the variance is not positive.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    let variance = sample_variance(values);
    if variance > 0.0 {
        variance.sqrt()
    } else {
        0.0
    }
}

/// Round half away from zero to `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
