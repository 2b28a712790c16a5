//! Report rendering
//!
//! Produces the three sections of the step summary from a results document:
//! the HTML results table, the mermaid gantt timing diagram and the HTML
//! metadata table. Rendering happens entirely in memory; nothing is written
//! until the whole report has been produced.

use crate::config::ReportConfig;
use crate::source::{FsSourceReader, SourceLocation, SourceReader};
use crate::types::{BenchmarkResult, ReportError, Result, ResultsDocument};
use std::path::Path;

/// Syntax-highlighting language tag for embedded sources
const SOURCE_LANG: &str = "mcfunction";

/// Mermaid escape for `:`, which would otherwise end a section label
const COLON_ESCAPE: &str = "#58;";

/// Renders results documents into step-summary reports
pub struct Reporter<R = FsSourceReader> {
    config: ReportConfig,
    reader: R,
}

impl Reporter<FsSourceReader> {
    /// Create a reporter that reads sources beneath `config.source_root`
    pub fn new(config: ReportConfig) -> Self {
        let reader = FsSourceReader::new(config.source_root.clone());
        Self { config, reader }
    }
}

impl<R: SourceReader> Reporter<R> {
    /// Create a reporter with a custom source reader
    pub fn with_reader(config: ReportConfig, reader: R) -> Self {
        Self { config, reader }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Render the complete report
    ///
    /// `run_id` is the revision the source links point at. Fails on the first
    /// unreadable source file without producing any output.
    pub fn render(&self, document: &ResultsDocument, run_id: &str) -> Result<String> {
        let sorted = document.sorted_results();
        log::info!("Rendering report for {} benchmarks", sorted.len());

        let mut lines = self.render_results_table(&sorted, run_id)?;
        lines.extend(render_timing_diagram(&sorted));
        lines.extend(render_metadata_table(document));

        Ok(lines.join("\n"))
    }

    /// Render the results table, one `<tbody>` row per benchmark
    pub fn render_results_table(
        &self,
        results: &[&BenchmarkResult],
        run_id: &str,
    ) -> Result<Vec<String>> {
        let mut lines: Vec<String> = [
            "<h3>Results</h3>",
            "<table>",
            "<thead>",
            "<tr>",
            r#"<th align="left">Group</th>"#,
            r#"<th align="left">Benchmark</th>"#,
            r#"<th align="center">Mode</th>"#,
            r#"<th align="right">Count</th>"#,
            r#"<th align="right">Score</th>"#,
            r#"<th align="right">Error</th>"#,
            r#"<th align="left">Unit</th>"#,
            "</tr>",
            "</thead>",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        for result in results {
            let benchmark_tag = self.benchmark_tag(result, run_id)?;
            lines.extend([
                "<tbody>".to_string(),
                "<tr>".to_string(),
                format!(r#"<td align="left">{}</td>"#, result.group),
                format!(r#"<td align="left">{}</td>"#, benchmark_tag),
                format!(r#"<td align="center">{}</td>"#, result.mode),
                format!(r#"<td align="right">{}</td>"#, result.count),
                format!(r#"<td align="right">{:.6}</td>"#, result.score),
                format!(r#"<td align="right">± {:.6}</td>"#, result.error),
                format!(r#"<td align="left">{}</td>"#, result.unit),
                "</tr>".to_string(),
                "</tbody>".to_string(),
            ]);
        }

        lines.push("</table>".to_string());
        Ok(lines)
    }

    /// Collapsible benchmark cell, embedding the function source
    fn benchmark_tag(&self, result: &BenchmarkResult, run_id: &str) -> Result<String> {
        if self.config.is_baseline(&result.benchmark) {
            return Ok(format!(
                r#"<details><summary><code>{}</code></summary><pre lang="{}"><code></code></pre></details>"#,
                result.benchmark, SOURCE_LANG
            ));
        }

        let location = SourceLocation::resolve(&self.config, result, run_id)?;
        let code = self
            .reader
            .read_source(Path::new(&location.file))
            .map_err(|source| ReportError::SourceRead {
                path: self.config.source_root.join(&location.file),
                source,
            })?;

        Ok(format!(
            r#"<details><summary><a href="{}"><code>{}</code></a></summary><pre lang="{}"><code>{}</code></pre></details>"#,
            location.href, result.benchmark, SOURCE_LANG, code
        ))
    }
}

/// Mermaid section label for a benchmark identifier
pub fn diagram_label(benchmark: &str) -> String {
    benchmark.replace(':', COLON_ESCAPE)
}

/// Render the gantt timing diagram, one section per benchmark
///
/// Each bar spans `0..score` in nanoseconds and is labelled with the error
/// margin, also in nanoseconds.
pub fn render_timing_diagram(results: &[&BenchmarkResult]) -> Vec<String> {
    let mut lines: Vec<String> = ["", "```mermaid", "gantt", "dateFormat X", "axisFormat %s"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    for result in results {
        let score_ns = result.score_ns().round() as i64;
        lines.push(format!("section {}", diagram_label(&result.benchmark)));
        lines.push(format!("± {:.6} : 0, {}", result.error_ns(), score_ns));
    }

    lines.push("```".to_string());
    lines.push(String::new());
    lines
}

/// Render the run metadata as a Key / Value table
pub fn render_metadata_table(document: &ResultsDocument) -> Vec<String> {
    let mut lines: Vec<String> = [
        "<h3>Metadata</h3>",
        "<table>",
        "<thead>",
        "<tr>",
        r#"<th align="left">Key</th>"#,
        r#"<th align="left">Value</th>"#,
        "</tr>",
        "</thead>",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    for (key, value) in document.metadata_rows() {
        lines.push(format!(
            r#"<tbody><tr><td align="left"><samp>{}</samp></td><td align="left">{}</td></tr></tbody>"#,
            key, value
        ));
    }

    lines.push("</table>".to_string());
    lines
}
