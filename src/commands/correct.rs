use super::{resolve_config, write_run};
use crate::cli::CorrectionArgs;
use crate::correction::correct;
use crate::formatting::FormattingConfig;
use crate::io::output::OutputFormat;
use crate::io::{export_run, load_rating_set};
use crate::observability::set_current_input;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct CorrectOptions {
    pub input: PathBuf,
    /// None falls back to the config file, then terminal
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    /// Some(None) exports under a generated name
    pub export: Option<Option<PathBuf>>,
    pub formatting: FormattingConfig,
    pub verbosity: u8,
    pub correction: CorrectionArgs,
}

pub fn handle_correct(options: CorrectOptions) -> Result<()> {
    let resolved = resolve_config(&options.correction)?;
    let _input = set_current_input(&options.input);

    let ratings = load_rating_set(&options.input)
        .with_context(|| format!("Failed to load ratings from {}", options.input.display()))?;
    let run = correct(&ratings, &resolved.correction);

    let format = options
        .format
        .or_else(|| configured_format(resolved.file.default_format()))
        .unwrap_or(OutputFormat::Terminal);
    let formatting = options
        .formatting
        .with_color_preference(resolved.file.output.as_ref().and_then(|o| o.use_color));

    write_run(
        &run,
        format,
        options.output.as_deref(),
        formatting,
        options.verbosity,
    )?;

    if let Some(target) = &options.export {
        let path = export_run(&run, target.as_deref()).context("Failed to export correction run")?;
        eprintln!("Exported correction run to {}", path.display());
    }

    Ok(())
}

fn configured_format(name: Option<&str>) -> Option<OutputFormat> {
    let name = name?;
    let format = OutputFormat::parse(name);
    if format.is_none() {
        tracing::warn!("Unknown default_format '{}' in config, using terminal", name);
    }
    format
}
