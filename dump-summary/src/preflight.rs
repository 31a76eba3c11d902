//! Pre-flight checks for dump-summary
//!
//! Validates the directory layout before any dump file is read.
//! Provides clear, actionable error messages when requirements aren't met.

use crate::cli::Args;
use crate::domain::{InputError, OutputError};
use anyhow::Result;
use std::path::Path;

/// Run all pre-flight checks before collecting dumps
///
/// # Errors
/// Returns the first failed check.
pub fn run_preflight_checks(args: &Args) -> Result<()> {
    check_input_dir(&args.input)?;
    check_output_dir(&args.output)?;
    Ok(())
}

/// Check that the dump directory exists and is a directory
fn check_input_dir(input: &Path) -> Result<()> {
    if !input.exists() {
        return Err(InputError::MissingDirectory(input.to_path_buf()).into());
    }
    if !input.is_dir() {
        return Err(InputError::NotADirectory(input.to_path_buf()).into());
    }
    Ok(())
}

/// Check that the output path is usable as a directory
fn check_output_dir(output: &Path) -> Result<()> {
    if output.exists() && !output.is_dir() {
        return Err(OutputError::NotADirectory(output.to_path_buf()).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_not_found() {
        let result = check_input_dir(Path::new("/nonexistent/dump"));
        let err = result.unwrap_err();
        assert!(err.downcast_ref::<InputError>().is_some());
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_input_is_a_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("dump");
        std::fs::write(&file, "").unwrap();

        let err = check_input_dir(&file).unwrap_err();
        assert!(matches!(err.downcast_ref::<InputError>(), Some(InputError::NotADirectory(_))));
    }

    #[test]
    fn test_output_is_a_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("summary");
        std::fs::write(&file, "").unwrap();

        let err = check_output_dir(&file).unwrap_err();
        assert!(err.downcast_ref::<OutputError>().is_some());
    }

    #[test]
    fn test_missing_output_is_fine() {
        let tmp = TempDir::new().unwrap();
        assert!(check_output_dir(&tmp.path().join("summary")).is_ok());
    }
}
