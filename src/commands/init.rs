use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# rescore configuration

[correction]
# Ceiling on the acquiescence adjustment (fraction of the score)
max_global_adjustment = 0.3
# Carried for compatibility; the relative factor always stays within 0.85-1.15
max_relative_adjustment = 0.15
# Corrected scores are clamped to this range
min_score = 1.01
max_score = 5.0

[output]
default_format = "terminal"
"#;

/// Write `.rescore.toml` to the current directory.
pub fn init_config(force: bool) -> Result<()> {
    let path = init_config_in(Path::new("."), force)?;
    println!("Created {} configuration file", path.display());
    Ok(())
}

/// Write `.rescore.toml` to `dir`, refusing to overwrite unless forced.
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    Ok(config_path)
}
