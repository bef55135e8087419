//! Loading rating documents from disk.
//!
//! Documents are parsed into a `serde_json::Value` whatever their on-disk
//! format, so validation sees one shape and reports non-numeric ratings the
//! same way for JSON and YAML.

use super::read_file;
use crate::core::{RatingSet, Result};
use crate::observability::{set_phase, PipelinePhase};
use crate::validation::validate_value;
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Pick a format from the file extension; anything unrecognized is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

pub fn parse_rating_document(contents: &str, format: InputFormat) -> Result<Value> {
    let value = match format {
        InputFormat::Json => serde_json::from_str(contents)?,
        InputFormat::Yaml => serde_yaml::from_str(contents)?,
    };
    Ok(value)
}

pub fn load_rating_document(path: &Path) -> Result<Value> {
    let _phase = set_phase(PipelinePhase::Loading);
    let contents = read_file(path)?;
    parse_rating_document(&contents, InputFormat::from_path(path))
}

/// Load and validate a rating set.
pub fn load_rating_set(path: &Path) -> Result<RatingSet> {
    let document = load_rating_document(path)?;
    let _phase = set_phase(PipelinePhase::Validation);
    Ok(validate_value(&document)?)
}
