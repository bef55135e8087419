use serde::{Deserialize, Serialize};

pub fn default_max_global_adjustment() -> f64 {
    0.3
}

pub fn default_max_relative_adjustment() -> f64 {
    0.15
}

pub fn default_min_score() -> f64 {
    1.01
}

pub fn default_max_score() -> f64 {
    5.0
}

/// Tuning knobs for a correction run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrectionConfig {
    /// Ceiling on how far the acquiescence global factors may move from 1.0
    #[serde(default = "default_max_global_adjustment")]
    pub max_global_adjustment: f64,

    /// Accepted and carried through, but the relative factor always clamps
    /// to its fixed [0.85, 1.15] range.
    #[serde(default = "default_max_relative_adjustment")]
    pub max_relative_adjustment: f64,

    /// Lower clamp for corrected scores
    #[serde(default = "default_min_score")]
    pub min_score: f64,

    /// Upper clamp for corrected scores
    #[serde(default = "default_max_score")]
    pub max_score: f64,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            max_global_adjustment: default_max_global_adjustment(),
            max_relative_adjustment: default_max_relative_adjustment(),
            min_score: default_min_score(),
            max_score: default_max_score(),
        }
    }
}

impl CorrectionConfig {
    pub fn with_max_global_adjustment(mut self, value: f64) -> Self {
        self.max_global_adjustment = value;
        self
    }

    pub fn with_max_relative_adjustment(mut self, value: f64) -> Self {
        self.max_relative_adjustment = value;
        self
    }

    pub fn with_score_bounds(mut self, min_score: f64, max_score: f64) -> Self {
        self.min_score = min_score;
        self.max_score = max_score;
        self
    }

    /// Clamp a corrected score into the configured range.
    pub fn clamp_score(&self, score: f64) -> f64 {
        score.max(self.min_score).min(self.max_score)
    }
}

/// Root configuration structure for `.rescore.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RescoreConfig {
    /// Correction parameters
    #[serde(default)]
    pub correction: Option<CorrectionConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl RescoreConfig {
    /// Correction parameters, falling back to defaults when the section is absent.
    pub fn correction(&self) -> CorrectionConfig {
        self.correction.unwrap_or_default()
    }

    /// Preferred output format name, if configured
    pub fn default_format(&self) -> Option<&str> {
        self.output.as_ref()?.default_format.as_deref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// One of "terminal", "json", "markdown"
    pub default_format: Option<String>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}
