pub mod export;
pub mod input;
pub mod output;

pub use export::{
    export_report, export_run, load_export, load_run, timestamped_filename, ExportDocument,
    ExportKind, ExportMetadata, EXPORT_PREFIX,
};
pub use input::{load_rating_document, load_rating_set, parse_rating_document, InputFormat};
pub use output::{create_writer, OutputFormat, OutputWriter};

use crate::core::{Error, Result};
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::file_system("Failed to read file", path, e))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::file_system("Failed to write file", path, e))
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .map_err(|e| Error::file_system("Failed to create directory", path, e))?;
    }
    Ok(())
}
