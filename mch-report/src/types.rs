//! Core types for the MCH benchmark report library
//!
//! This module defines the results document emitted by the benchmark harness.
//! Every field is required: a document that is missing one is rejected when it
//! is parsed, before any part of the report is rendered.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while loading, rendering or writing a report
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Invalid results document: {0}")]
    InvalidInput(#[from] serde_json::Error),

    #[error("Unknown time unit: {0:?}")]
    UnknownTimeUnit(String),

    #[error("Malformed benchmark identifier (expected namespace:path): {0}")]
    MalformedIdentifier(String),

    #[error("Failed to read results document {path:?}: {source}")]
    ResultsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read benchmark source {path:?}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write step summary {path:?}: {source}")]
    SummaryWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Time unit a score is reported in
///
/// Serialized the way the harness writes it, e.g. `"us/op"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
}

impl TimeUnit {
    /// All recognized units, smallest first
    pub const ALL: [TimeUnit; 5] = [
        TimeUnit::Nanoseconds,
        TimeUnit::Microseconds,
        TimeUnit::Milliseconds,
        TimeUnit::Seconds,
        TimeUnit::Minutes,
    ];

    /// Harness spelling of this unit
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "ns/op",
            TimeUnit::Microseconds => "us/op",
            TimeUnit::Milliseconds => "ms/op",
            TimeUnit::Seconds => "s/op",
            TimeUnit::Minutes => "m/op",
        }
    }

    /// Number of nanoseconds in one of this unit
    pub fn nanos_per_unit(&self) -> f64 {
        match self {
            TimeUnit::Nanoseconds => 1.0,
            TimeUnit::Microseconds => 1_000.0,
            TimeUnit::Milliseconds => 1_000_000.0,
            TimeUnit::Seconds => 1_000_000_000.0,
            TimeUnit::Minutes => 60_000_000_000.0,
        }
    }

    /// Convert a value expressed in this unit to nanoseconds
    pub fn to_nanos(&self, value: f64) -> f64 {
        value * self.nanos_per_unit()
    }
}

impl FromStr for TimeUnit {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ns/op" => Ok(TimeUnit::Nanoseconds),
            "us/op" => Ok(TimeUnit::Microseconds),
            "ms/op" => Ok(TimeUnit::Milliseconds),
            "s/op" => Ok(TimeUnit::Seconds),
            "m/op" => Ok(TimeUnit::Minutes),
            other => Err(ReportError::UnknownTimeUnit(other.to_string())),
        }
    }
}

impl TryFrom<String> for TimeUnit {
    type Error = ReportError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TimeUnit> for String {
    fn from(unit: TimeUnit) -> Self {
        unit.as_str().to_string()
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single measured benchmark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// World / datapack the benchmark function lives in
    pub group: String,
    /// Function identifier (`namespace:path`) or the baseline sentinel
    pub benchmark: String,
    /// Measurement mode (e.g. `avgt`)
    pub mode: String,
    /// Number of samples
    pub count: u64,
    pub score: f64,
    pub error: f64,
    pub unit: TimeUnit,
    /// Raw samples, in `unit`
    pub scores: Vec<f64>,
}

impl BenchmarkResult {
    /// Score converted to nanoseconds
    pub fn score_ns(&self) -> f64 {
        self.unit.to_nanos(self.score)
    }

    /// Error margin converted to nanoseconds
    pub fn error_ns(&self) -> f64 {
        self.unit.to_nanos(self.error)
    }

    /// Split the identifier into `(namespace, path)` at the first `:`
    pub fn split_identifier(&self) -> Result<(&str, &str)> {
        self.benchmark
            .split_once(':')
            .ok_or_else(|| ReportError::MalformedIdentifier(self.benchmark.clone()))
    }
}

/// The full results document written by the benchmark harness
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsDocument {
    pub mch_version: String,
    pub forks: u32,
    pub jvm: String,
    pub jvm_args: Vec<String>,
    pub jdk_version: String,
    pub vm_name: String,
    pub vm_version: String,
    pub mc: String,
    pub mc_args: Vec<String>,
    pub mc_version: String,
    pub warmup_iterations: u32,
    pub warmup_time: String,
    pub measurement_iterations: u32,
    pub measurement_time: String,
    pub results: Vec<BenchmarkResult>,
}

impl ResultsDocument {
    /// Parse a results document from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a results document from disk
    pub fn load(path: &Path) -> Result<Self> {
        log::info!("Loading results document: {:?}", path);

        let content = fs::read_to_string(path).map_err(|source| ReportError::ResultsRead {
            path: path.to_path_buf(),
            source,
        })?;
        let document = Self::from_json(&content)?;

        log::debug!(
            "Results document loaded: {} benchmarks (mch {})",
            document.results.len(),
            document.mch_version
        );
        Ok(document)
    }

    /// Results in ascending order of benchmark identifier
    ///
    /// The sort is stable, so entries sharing an identifier keep input order.
    pub fn sorted_results(&self) -> Vec<&BenchmarkResult> {
        let mut sorted: Vec<&BenchmarkResult> = self.results.iter().collect();
        sorted.sort_by(|a, b| a.benchmark.cmp(&b.benchmark));
        sorted
    }

    /// Run metadata as `(key, value)` pairs, arrays joined by a single space
    pub fn metadata_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("mch_version", self.mch_version.clone()),
            ("forks", self.forks.to_string()),
            ("jvm", self.jvm.clone()),
            ("jvm_args", self.jvm_args.join(" ")),
            ("jdk_version", self.jdk_version.clone()),
            ("vm_name", self.vm_name.clone()),
            ("vm_version", self.vm_version.clone()),
            ("mc", self.mc.clone()),
            ("mc_args", self.mc_args.join(" ")),
            ("mc_version", self.mc_version.clone()),
            ("warmup_iterations", self.warmup_iterations.to_string()),
            ("warmup_time", self.warmup_time.clone()),
            ("measurement_iterations", self.measurement_iterations.to_string()),
            ("measurement_time", self.measurement_time.clone()),
        ]
    }
}
