//! Step summary output
//!
//! The summary file is shared with other steps of the job, so reports are only
//! ever appended to it.

use crate::types::{ReportError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Environment variable GitHub Actions uses to name the step summary file
pub const STEP_SUMMARY_ENV: &str = "GITHUB_STEP_SUMMARY";

/// Append a rendered report to the summary file, creating it if needed
///
/// The report is written with a single call, after rendering has finished,
/// so a failed render never leaves a partial report behind.
pub fn append_report(path: &Path, report: &str) -> Result<()> {
    let to_error = |source: std::io::Error| ReportError::SummaryWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(to_error)?;
    file.write_all(report.as_bytes()).map_err(to_error)?;

    log::info!("Appended {} bytes to {:?}", report.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_append_preserves_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("summary.md");
        fs::write(&path, "# Build\n").unwrap();

        append_report(&path, "first").unwrap();
        append_report(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "# Build\nfirstsecond");
    }

    #[test]
    fn test_append_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("summary.md");

        append_report(&path, "report").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "report");
    }

    #[test]
    fn test_append_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("summary.md");

        let err = append_report(&path, "report").unwrap_err();
        assert!(matches!(err, ReportError::SummaryWrite { .. }));
    }
}
