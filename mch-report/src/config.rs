//! Report configuration types
//!
//! The renderer takes everything it needs explicitly: where benchmark sources
//! live on disk, which repository to link them to, and which identifier marks
//! the baseline. Environment lookups belong to the caller.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Repository the benchmark worlds are published in
pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/MCJE-Tech-Shares/Benchmarks";

/// Identifier the harness uses for its overhead measurement
pub const BASELINE_BENCHMARK: &str = "mch:baseline";

/// Configuration for the report renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Base URL of the source-hosting repository (no trailing `/blob/...`)
    #[serde(default = "default_repository_url")]
    pub repository_url: String,

    /// Directory containing the `worlds/` tree (default: current directory)
    #[serde(default)]
    pub source_root: PathBuf,

    /// Benchmark identifier that has no associated source function
    #[serde(default = "default_baseline_benchmark")]
    pub baseline_benchmark: String,
}

fn default_repository_url() -> String {
    DEFAULT_REPOSITORY_URL.to_string()
}

fn default_baseline_benchmark() -> String {
    BASELINE_BENCHMARK.to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            repository_url: default_repository_url(),
            source_root: PathBuf::new(),
            baseline_benchmark: default_baseline_benchmark(),
        }
    }
}

impl ReportConfig {
    /// Create a new report configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the repository URL used for source links
    pub fn with_repository_url(mut self, url: impl Into<String>) -> Self {
        self.repository_url = url.into();
        self
    }

    /// Builder method: set the directory source paths are resolved against
    pub fn with_source_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.source_root = root.into();
        self
    }

    /// Builder method: set the baseline sentinel identifier
    pub fn with_baseline_benchmark(mut self, id: impl Into<String>) -> Self {
        self.baseline_benchmark = id.into();
        self
    }

    /// Check if a benchmark identifier is the baseline
    pub fn is_baseline(&self, benchmark: &str) -> bool {
        benchmark == self.baseline_benchmark
    }

    /// Link to a repository file at a given revision
    pub fn blob_url(&self, run_id: &str, file: &str) -> String {
        format!(
            "{}/blob/{}/{}",
            self.repository_url.trim_end_matches('/'),
            run_id,
            file
        )
    }
}
