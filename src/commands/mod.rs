//! CLI command implementations.
//!
//! Available commands:
//! - **correct**: correct one ratings file and render the report
//! - **batch**: correct many files in parallel
//! - **validate**: check a ratings file without correcting it
//! - **init**: write a default `.rescore.toml`
//! - **demo**: correct the built-in sample data
//!
//! Correcting commands share [`resolve_config`], which layers the config
//! file and command-line overrides and validates the result.

pub mod batch;
pub mod correct;
pub mod demo;
pub mod init;
pub mod validate;

pub use batch::{correct_files, handle_batch, BatchOptions};
pub use correct::{handle_correct, CorrectOptions};
pub use demo::{handle_demo, sample_ratings};
pub use init::{init_config, init_config_in, DEFAULT_CONFIG};
pub use validate::handle_validate;

use crate::cli::CorrectionArgs;
use crate::config::{load_config, load_config_from_path, validate_correction_config};
use crate::config::{CorrectionConfig, RescoreConfig};
use crate::core::CorrectionRun;
use crate::formatting::FormattingConfig;
use crate::io::output::{create_writer, OutputFormat};
use crate::observability::{set_phase, PipelinePhase};
use crate::report::generate_report;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Configuration after layering defaults, the config file and flags.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub file: RescoreConfig,
    pub correction: CorrectionConfig,
}

/// Load the config file (explicit or discovered), apply command-line
/// overrides and validate the outcome.
pub fn resolve_config(args: &CorrectionArgs) -> Result<ResolvedConfig> {
    let file = match &args.config {
        Some(path) => load_config_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => load_config(),
    };

    let correction = apply_overrides(file.correction(), args);
    validate_correction_config(&correction)?;
    tracing::debug!(?correction, "Resolved correction config");

    Ok(ResolvedConfig { file, correction })
}

fn apply_overrides(mut config: CorrectionConfig, args: &CorrectionArgs) -> CorrectionConfig {
    if let Some(value) = args.max_global_adjustment {
        config = config.with_max_global_adjustment(value);
    }
    if let Some(value) = args.max_relative_adjustment {
        config = config.with_max_relative_adjustment(value);
    }
    config.with_score_bounds(
        args.min_score.unwrap_or(config.min_score),
        args.max_score.unwrap_or(config.max_score),
    )
}

/// Render a run's report to stdout or a file.
///
/// Terminal output written to a file is always plain.
pub fn write_run(
    run: &CorrectionRun,
    format: OutputFormat,
    output: Option<&Path>,
    formatting: FormattingConfig,
    verbosity: u8,
) -> Result<()> {
    let _phase = set_phase(PipelinePhase::Reporting);
    let report = generate_report(run);

    let (sink, formatting) = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            (
                Box::new(BufWriter::new(file)) as Box<dyn Write>,
                FormattingConfig::plain(),
            )
        }
        None => (Box::new(std::io::stdout()) as Box<dyn Write>, formatting),
    };

    let mut writer = create_writer(format, sink, formatting, verbosity);
    writer.write_report(run, &report)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_only_given_values() {
        let args = CorrectionArgs {
            max_global_adjustment: Some(0.2),
            max_score: Some(4.5),
            ..CorrectionArgs::default()
        };
        let config = apply_overrides(CorrectionConfig::default(), &args);

        assert_eq!(config.max_global_adjustment, 0.2);
        assert_eq!(config.max_relative_adjustment, 0.15);
        assert_eq!(config.min_score, 1.01);
        assert_eq!(config.max_score, 4.5);
    }

    #[test]
    fn test_resolve_config_rejects_inverted_bounds() {
        let args = CorrectionArgs {
            min_score: Some(4.0),
            max_score: Some(2.0),
            ..CorrectionArgs::default()
        };
        let err = resolve_config(&args).unwrap_err();
        assert!(err.to_string().contains("min_score"));
    }

    #[test]
    fn test_resolve_config_reads_explicit_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[correction]\nmax_global_adjustment = 0.1\n").unwrap();

        let args = CorrectionArgs {
            config: Some(path),
            ..CorrectionArgs::default()
        };
        let resolved = resolve_config(&args).unwrap();
        assert_eq!(resolved.correction.max_global_adjustment, 0.1);
    }

    #[test]
    fn test_resolve_config_missing_explicit_file_fails() {
        let args = CorrectionArgs {
            config: Some("/definitely/not/here.toml".into()),
            ..CorrectionArgs::default()
        };
        assert!(resolve_config(&args).is_err());
    }
}
