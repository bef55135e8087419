//! Configuration for correction runs.
//!
//! Values are layered: built-in defaults, then `.rescore.toml` (explicit
//! `--config` path or discovered by walking up from the working
//! directory), then command-line overrides.

mod core;
mod loader;
pub mod validation;

pub use core::{
    default_max_global_adjustment, default_max_relative_adjustment, default_max_score,
    default_min_score, CorrectionConfig, OutputConfig, RescoreConfig,
};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from_path, parse_config,
    CONFIG_FILE_NAME,
};
pub use validation::{config_problems, validate_correction_config};
