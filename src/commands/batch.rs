use super::resolve_config;
use crate::cli::CorrectionArgs;
use crate::config::CorrectionConfig;
use crate::core::{CorrectionRun, Result as CoreResult};
use crate::correction::correct;
use crate::formatting::{formatter_for, FormattingConfig};
use crate::io::{export_run, load_rating_set};
use crate::observability::{get_progress, increment_processed, set_current_input, set_progress};
use anyhow::Result;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

pub struct BatchOptions {
    pub inputs: Vec<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub formatting: FormattingConfig,
    pub correction: CorrectionArgs,
}

/// Correct every input in parallel. Results keep input order.
pub fn correct_files(
    inputs: &[PathBuf],
    config: &CorrectionConfig,
) -> Vec<(PathBuf, CoreResult<CorrectionRun>)> {
    set_progress(0, inputs.len());

    inputs
        .par_iter()
        .map(|input| {
            let _input = set_current_input(input);
            let outcome = load_rating_set(input).map(|ratings| correct(&ratings, config));
            increment_processed();
            (input.clone(), outcome)
        })
        .collect()
}

pub fn handle_batch(options: BatchOptions) -> Result<()> {
    let resolved = resolve_config(&options.correction)?;
    let formatter = formatter_for(options.formatting);

    let results = correct_files(&options.inputs, &resolved.correction);
    let (processed, total) = get_progress();
    tracing::info!("Processed {}/{} inputs", processed, total);

    let mut failed = 0;
    for (input, outcome) in &results {
        let finished = outcome
            .as_ref()
            .map_err(ToString::to_string)
            .and_then(|run| {
                let exported = match &options.output_dir {
                    Some(dir) => export_run(run, Some(&export_path(dir, input)))
                        .map(Some)
                        .map_err(|e| format!("export failed: {e}"))?,
                    None => None,
                };
                Ok((run, exported))
            });

        match finished {
            Ok((run, exported)) => {
                println!(
                    "{} {}: {} (global factor {:.3}, {} categories){}",
                    formatter.success(&formatter.marker("✓", "[OK]")),
                    input.display(),
                    run.response_style,
                    run.metadata.global_factor,
                    run.metadata.total_categories,
                    exported
                        .map(|path| format!(" -> {}", path.display()))
                        .unwrap_or_default()
                );
            }
            Err(message) => {
                failed += 1;
                println!(
                    "{} {}: {}",
                    formatter.error(&formatter.marker("✗", "[FAIL]")),
                    input.display(),
                    message
                );
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} inputs failed", failed, results.len());
    }
    Ok(())
}

/// `<output_dir>/<input stem>.correction.json`
fn export_path(dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "ratings".to_string());
    dir.join(format!("{stem}.correction.json"))
}
