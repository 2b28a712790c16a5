//! Benchmark source lookup
//!
//! Maps a benchmark identifier onto the `.mcfunction` file that implements it
//! and reads that file so it can be embedded in the report.

use crate::config::ReportConfig;
use crate::types::{BenchmarkResult, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Reads benchmark function sources
///
/// Paths handed to the reader are repository-relative, e.g.
/// `worlds/g/datapacks/g/data/foo/functions/bar.mcfunction`.
pub trait SourceReader {
    fn read_source(&self, path: &Path) -> io::Result<String>;
}

/// Reads sources from the local file system beneath a root directory
#[derive(Debug, Clone, Default)]
pub struct FsSourceReader {
    root: PathBuf,
}

impl FsSourceReader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SourceReader for FsSourceReader {
    fn read_source(&self, path: &Path) -> io::Result<String> {
        let full_path = self.root.join(path);
        log::debug!("Reading benchmark source: {:?}", full_path);

        let bytes = fs::read(&full_path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Where a benchmark's source lives, in the repository and on the web
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Repository-relative file path (always `/`-separated)
    pub file: String,
    /// Link to the file at the run's revision
    pub href: String,
}

impl SourceLocation {
    /// Resolve the source location of a non-baseline benchmark
    pub fn resolve(config: &ReportConfig, result: &BenchmarkResult, run_id: &str) -> Result<Self> {
        let (namespace, path) = result.split_identifier()?;
        let file = function_path(&result.group, namespace, path);
        let href = config.blob_url(run_id, &file);
        Ok(Self { file, href })
    }
}

/// Repository-relative path of a datapack function
pub fn function_path(group: &str, namespace: &str, path: &str) -> String {
    format!("worlds/{group}/datapacks/{group}/data/{namespace}/functions/{path}.mcfunction")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ReportError, TimeUnit};
    use std::io::Write;
    use tempfile::TempDir;

    fn result(group: &str, benchmark: &str) -> BenchmarkResult {
        BenchmarkResult {
            group: group.to_string(),
            benchmark: benchmark.to_string(),
            mode: "avgt".to_string(),
            count: 1,
            score: 1.0,
            error: 0.0,
            unit: TimeUnit::Nanoseconds,
            scores: vec![1.0],
        }
    }

    #[test]
    fn test_resolve_location() {
        let config = ReportConfig::new();
        let location = SourceLocation::resolve(&config, &result("g", "foo:bar/baz"), "abc").unwrap();

        assert_eq!(
            location.file,
            "worlds/g/datapacks/g/data/foo/functions/bar/baz.mcfunction"
        );
        assert_eq!(
            location.href,
            "https://github.com/MCJE-Tech-Shares/Benchmarks/blob/abc/worlds/g/datapacks/g/data/foo/functions/bar/baz.mcfunction"
        );
    }

    #[test]
    fn test_resolve_keeps_colons_after_the_first() {
        let config = ReportConfig::new();
        let location = SourceLocation::resolve(&config, &result("g", "foo:a:b"), "abc").unwrap();
        assert!(location.file.ends_with("data/foo/functions/a:b.mcfunction"));
    }

    #[test]
    fn test_resolve_rejects_identifier_without_namespace() {
        let config = ReportConfig::new();
        let err = SourceLocation::resolve(&config, &result("g", "plain"), "abc").unwrap_err();
        assert!(matches!(err, ReportError::MalformedIdentifier(_)));
    }

    #[test]
    fn test_fs_reader_reads_relative_to_root() {
        let dir = TempDir::new().unwrap();
        let relative = Path::new("worlds/g/datapacks/g/data/foo/functions/bar.mcfunction");
        let full = dir.path().join(relative);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        let mut file = fs::File::create(&full).unwrap();
        writeln!(file, "scoreboard players add #x v 1").unwrap();

        let reader = FsSourceReader::new(dir.path());
        assert_eq!(
            reader.read_source(relative).unwrap(),
            "scoreboard players add #x v 1\n"
        );
        assert!(reader.read_source(Path::new("missing.mcfunction")).is_err());
    }
}
