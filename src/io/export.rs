//! Writing runs and reports to disk as JSON, and reading them back.
//!
//! Every export is wrapped in an [`ExportDocument`] recording the tool
//! version, the generation time and what kind of payload it holds.

use super::{ensure_dir, read_file, write_file};
use crate::core::{CorrectionRun, Error, Result};
use crate::observability::{set_phase, PipelinePhase};
use crate::report::CorrectionReport;
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// Prefix of generated export file names
pub const EXPORT_PREFIX: &str = "multi_category_correction";

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExportKind {
    Run,
    Report,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ExportMetadata {
    pub rescore_version: String,
    pub generated_at: DateTime<Utc>,
    pub kind: ExportKind,
}

impl ExportMetadata {
    pub fn now(kind: ExportKind) -> Self {
        Self {
            rescore_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            kind,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ExportDocument<T> {
    pub metadata: ExportMetadata,
    pub data: T,
}

/// `multi_category_correction_YYYYMMDD_HHMMSS.json` for the given instant.
pub fn timestamped_filename<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("{}_{}.json", EXPORT_PREFIX, at.format("%Y%m%d_%H%M%S"))
}

fn resolve_target(path: Option<&Path>) -> PathBuf {
    match path {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(timestamped_filename(&Local::now())),
    }
}

fn write_document<T: Serialize>(document: &ExportDocument<T>, path: Option<&Path>) -> Result<PathBuf> {
    let _phase = set_phase(PipelinePhase::Export);
    let target = resolve_target(path);

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }

    let json = serde_json::to_string_pretty(document)?;
    write_file(&target, &json)?;
    tracing::info!("Exported {:?} to {}", document.metadata.kind, target.display());
    Ok(target)
}

/// Write a full correction run. Without a path, a timestamped name in the
/// working directory is used. Returns the path written.
pub fn export_run(run: &CorrectionRun, path: Option<&Path>) -> Result<PathBuf> {
    write_document(
        &ExportDocument {
            metadata: ExportMetadata::now(ExportKind::Run),
            data: run,
        },
        path,
    )
}

/// Write a report. Same naming rules as [`export_run`].
pub fn export_report(report: &CorrectionReport, path: Option<&Path>) -> Result<PathBuf> {
    write_document(
        &ExportDocument {
            metadata: ExportMetadata::now(ExportKind::Report),
            data: report,
        },
        path,
    )
}

/// Read any export document back.
pub fn load_export<T: DeserializeOwned>(path: &Path) -> Result<ExportDocument<T>> {
    let contents = read_file(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Read an exported run back.
pub fn load_run(path: &Path) -> Result<CorrectionRun> {
    let document: ExportDocument<CorrectionRun> = load_export(path)?;
    if document.metadata.kind != ExportKind::Run {
        return Err(Error::Configuration(format!(
            "{} holds a {:?} export, not a run",
            path.display(),
            document.metadata.kind
        )));
    }
    Ok(document.data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_timestamped_filename_format() {
        let at = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2026, 3, 7, 9, 5, 2)
            .unwrap();
        assert_eq!(
            timestamped_filename(&at),
            "multi_category_correction_20260307_090502.json"
        );
    }

    #[test]
    fn test_explicit_target_is_kept() {
        assert_eq!(
            resolve_target(Some(Path::new("out/run.json"))),
            PathBuf::from("out/run.json")
        );
    }

    #[test]
    fn test_generated_target_uses_prefix() {
        let target = resolve_target(None);
        let name = target.to_str().unwrap();
        assert!(name.starts_with("multi_category_correction_"));
        assert!(name.ends_with(".json"));
        // prefix + _YYYYMMDD_HHMMSS + .json
        assert_eq!(name.len(), EXPORT_PREFIX.len() + 16 + 5);
    }
}
