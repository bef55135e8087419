use crate::io::load_rating_set;
use crate::observability::set_current_input;
use anyhow::{Context, Result};
use std::path::Path;

/// Validate a ratings file and print its shape.
pub fn handle_validate(input: &Path) -> Result<()> {
    let _input = set_current_input(input);
    let ratings = load_rating_set(input)
        .with_context(|| format!("{} is not a valid ratings file", input.display()))?;

    println!(
        "{}: valid ({} categories, {} items)",
        input.display(),
        ratings.category_count(),
        ratings.item_count()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_and_rejects() {
        let dir = tempfile::TempDir::new().unwrap();
        let good = dir.path().join("good.json");
        let bad = dir.path().join("bad.json");
        std::fs::write(&good, r#"{"a": {"q1": 4, "q2": 2}}"#).unwrap();
        std::fs::write(&bad, r#"{"a": {"q1": 0}}"#).unwrap();

        assert!(handle_validate(&good).is_ok());

        let err = handle_validate(&bad).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("not a valid ratings file"));
        assert!(chain.contains("out of range"));
    }
}
