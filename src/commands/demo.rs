use super::write_run;
use crate::config::CorrectionConfig;
use crate::correction::correct_value;
use crate::formatting::FormattingConfig;
use crate::io::output::OutputFormat;
use anyhow::Result;
use serde_json::{json, Value};

/// Five categories of three items, rated by a respondent who marks almost
/// everything 5.
pub fn sample_ratings() -> Value {
    json!({
        "leadership": {"q1": 5, "q2": 5, "q3": 4},
        "communication": {"q1": 5, "q2": 4, "q3": 5},
        "teamwork": {"q1": 4, "q2": 5, "q3": 5},
        "problem_solving": {"q1": 3, "q2": 4, "q3": 4},
        "adaptability": {"q1": 5, "q2": 5, "q3": 5}
    })
}

pub fn handle_demo(format: OutputFormat, formatting: FormattingConfig, verbosity: u8) -> Result<()> {
    let run = correct_value(&sample_ratings(), &CorrectionConfig::default())?;
    write_run(&run, format, None, formatting, verbosity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ResponseStyle;

    #[test]
    fn test_sample_is_high_acquiescence() {
        let run = correct_value(&sample_ratings(), &CorrectionConfig::default()).unwrap();

        assert_eq!(run.response_style, ResponseStyle::HighAcquiescence);
        assert_eq!(run.metadata.total_categories, 5);
        assert_eq!(run.metadata.total_items, 15);
        // 9 of 15 ratings are 5s: 1 - min(0.3, 0.6 * 0.5)
        assert!((run.metadata.global_factor - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_sample_keeps_category_order() {
        let run = correct_value(&sample_ratings(), &CorrectionConfig::default()).unwrap();
        let ids: Vec<_> = run.corrected_categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(
            ids,
            vec!["leadership", "communication", "teamwork", "problem_solving", "adaptability"]
        );
    }
}
