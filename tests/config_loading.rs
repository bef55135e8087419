use indoc::indoc;
use rescore::config::{
    discover_config, load_config_from_path, validate_correction_config, CONFIG_FILE_NAME,
};
use rescore::CorrectionConfig;
use std::fs;
use tempfile::TempDir;

#[test]
fn config_is_discovered_from_a_nested_directory() {
    let root = TempDir::new().unwrap();
    fs::write(
        root.path().join(CONFIG_FILE_NAME),
        indoc! {r#"
            [correction]
            max_global_adjustment = 0.2
            min_score = 1.5

            [output]
            default_format = "markdown"
        "#},
    )
    .unwrap();
    let nested = root.path().join("surveys").join("2026");
    fs::create_dir_all(&nested).unwrap();

    let config = discover_config(nested).expect("config should be found");

    let correction = config.correction();
    assert_eq!(correction.max_global_adjustment, 0.2);
    assert_eq!(correction.min_score, 1.5);
    assert_eq!(correction.max_score, 5.0);
    assert_eq!(config.default_format(), Some("markdown"));
}

#[test]
fn invalid_values_are_all_reported() {
    let root = TempDir::new().unwrap();
    let path = root.path().join("bad.toml");
    fs::write(
        &path,
        indoc! {r#"
            [correction]
            max_global_adjustment = -0.5
            min_score = 4.0
            max_score = 2.0
        "#},
    )
    .unwrap();

    let message = load_config_from_path(&path).unwrap_err().to_string();

    assert!(message.contains("max_global_adjustment"));
    assert!(message.contains("min_score"));
}

#[test]
fn malformed_toml_is_an_error() {
    let root = TempDir::new().unwrap();
    let path = root.path().join("broken.toml");
    fs::write(&path, "[correction\nmin_score = ").unwrap();

    assert!(load_config_from_path(&path).is_err());
}

#[test]
fn defaults_are_valid() {
    assert!(validate_correction_config(&CorrectionConfig::default()).is_ok());
}
