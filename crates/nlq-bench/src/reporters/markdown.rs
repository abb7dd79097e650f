// NLQ Bench - Comparative benchmarking for natural-language query backends
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Markdown export for benchmark reports.

use crate::error::Result;
use crate::reporters::types::BenchmarkReport;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;

/// Renders the report as Markdown.
pub fn render_markdown(report: &BenchmarkReport) -> String {
    let mut md = String::new();

    md.push_str(&format!("# {}\n\n", report.title));
    md.push_str(&format!(
        "**Timestamp:** {}\n\n",
        report.metadata.timestamp.to_rfc3339()
    ));
    md.push_str(&format!(
        "**Workload:** {} queries, {} iterations\n\n",
        report.metadata.total_queries, report.metadata.iterations
    ));

    if !report.notes.is_empty() {
        md.push_str("## Notes\n\n");
        for note in &report.notes {
            md.push_str(&format!("- {}\n", note));
        }
        md.push('\n');
    }

    md.push_str("## Backends\n\n");
    md.push_str("| Backend | Calls | Failed | Success Rate | Avg Time (s) | Avg Memory (MB) | Accuracy | Quality | Confidence |\n");
    md.push_str("|---------|-------|--------|--------------|--------------|-----------------|----------|---------|------------|\n");
    for run in &report.runs {
        let m = &run.metrics;
        md.push_str(&format!(
            "| {} | {} | {} | {:.1}% | {:.4} | {:.4} | {:.4} | {:.4} | {} |\n",
            run.name,
            m.total_queries,
            m.failed_queries,
            m.success_rate * 100.0,
            m.avg_execution_time_secs,
            m.avg_memory_delta_mb,
            m.accuracy_score,
            m.quality_score,
            run.scores.confidence_display()
        ));
    }

    if !report.categories.is_empty() {
        md.push_str("\n## By Category\n\n");
        md.push_str("| Backend | Category | Success Rate | Avg Time (s) | Accuracy |\n");
        md.push_str("|---------|----------|--------------|--------------|----------|\n");
        for (backend, by_category) in &report.categories {
            for (category, m) in by_category {
                md.push_str(&format!(
                    "| {} | {} | {:.1}% | {:.4} | {:.4} |\n",
                    backend,
                    category,
                    m.success_rate * 100.0,
                    m.avg_execution_time_secs,
                    m.accuracy_score
                ));
            }
        }
    }

    if let Some(comparison) = &report.comparison {
        md.push_str(&format!(
            "\n## Comparison: {} vs {}\n\n",
            comparison.left_label, comparison.right_label
        ));
        md.push_str(&format!(
            "| Metric | {} | {} | Winner | Difference |\n",
            comparison.left_label, comparison.right_label
        ));
        md.push_str("|--------|------|------|--------|------------|\n");
        for (name, axis) in comparison.axes() {
            md.push_str(&format!(
                "| {} | {:.4} | {:.4} | {} | {:.4} |\n",
                name, axis.left, axis.right, axis.winner, axis.difference
            ));
        }

        md.push_str(&format!(
            "\n**Overall winner:** {} (utility {:.4} vs {:.4})\n",
            comparison.overall_winner, comparison.left_utility, comparison.right_utility
        ));

        if !comparison.recommendations.is_empty() {
            md.push_str("\n## Recommendations\n\n");
            for (i, rec) in comparison.recommendations.iter().enumerate() {
                md.push_str(&format!("{}. {}\n", i + 1, rec));
            }
        }
    }

    md
}

/// Exports benchmark report as Markdown.
///
/// # Arguments
///
/// * `report` - The benchmark report to export
/// * `path` - Output file path
///
/// # Returns
///
/// Result indicating success or failure.
pub fn export_markdown(report: &BenchmarkReport, path: &Path) -> Result<()> {
    fs::write(path, render_markdown(report))?;
    Ok(())
}

/// File name for a Markdown report of a run started at `timestamp`.
pub fn default_markdown_filename(timestamp: &DateTime<Utc>) -> String {
    format!("benchmark_results_{}.md", timestamp.format("%Y%m%d_%H%M%S"))
}
