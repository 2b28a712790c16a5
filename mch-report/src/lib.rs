//! MCH Benchmark Report Library
//!
//! Renders the results document written by the MCH benchmark harness into a
//! GitHub Actions step summary.
//!
//! # Architecture
//!
//! A report is produced in a single pass:
//! - Parse the results document into typed structs (missing fields are
//!   rejected up front)
//! - Sort benchmarks by identifier
//! - Render the results table, embedding each benchmark's `.mcfunction`
//!   source and linking it to the repository at the run's revision
//! - Render a mermaid gantt diagram of the scores in nanoseconds
//! - Render the run metadata table
//! - Append the finished report to the summary file
//!
//! The library does NOT read environment variables; the summary path, run
//! identifier and source root are all passed in by the caller
//! (see `mch-report-cli`).
//!
//! # Example Usage
//!
//! ```no_run
//! use mch_report::{append_report, ReportConfig, Reporter, ResultsDocument};
//! use std::path::Path;
//!
//! let document = ResultsDocument::load(Path::new("../mch-results.json")).unwrap();
//!
//! let config = ReportConfig::new().with_source_root("..");
//! let reporter = Reporter::new(config);
//! let report = reporter.render(&document, "3f2c9e1").unwrap();
//!
//! append_report(Path::new("summary.md"), &report).unwrap();
//! ```

// Public modules
pub mod config;
pub mod render;
pub mod source;
pub mod summary;
pub mod types;

// Re-export main types for convenience
pub use config::{ReportConfig, BASELINE_BENCHMARK, DEFAULT_REPOSITORY_URL};
pub use render::Reporter;
pub use source::{FsSourceReader, SourceLocation, SourceReader};
pub use summary::{append_report, STEP_SUMMARY_ENV};
pub use types::{BenchmarkResult, ReportError, Result, ResultsDocument, TimeUnit};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
