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

//! Console reporter for benchmark results.
//!
//! Formats and prints benchmark reports to the console.

use crate::harness::ComparisonReport;
use crate::reporters::types::BenchmarkReport;

const RULE_WIDTH: usize = 80;

fn heading(out: &mut String, title: &str) {
    out.push_str(&format!("\n{}\n", "-".repeat(RULE_WIDTH)));
    out.push_str(&format!("{}\n", title));
    out.push_str(&format!("{}\n", "-".repeat(RULE_WIDTH)));
}

/// Renders the full benchmark report as console text.
pub fn render_report(report: &BenchmarkReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", "=".repeat(RULE_WIDTH)));
    out.push_str(&format!("BENCHMARK REPORT: {}\n", report.title));
    out.push_str(&format!("{}\n", "=".repeat(RULE_WIDTH)));
    out.push_str(&format!("Timestamp: {}\n", report.metadata.timestamp.to_rfc3339()));
    out.push_str(&format!(
        "Backends: {}\n",
        report.metadata.backends_tested.join(", ")
    ));
    out.push_str(&format!(
        "Workload: {} queries x {} iterations\n",
        report.metadata.total_queries, report.metadata.iterations
    ));

    if !report.notes.is_empty() {
        out.push_str("\nNotes:\n");
        for note in &report.notes {
            out.push_str(&format!("  - {}\n", note));
        }
    }

    heading(&mut out, "BACKENDS:");
    for run in &report.runs {
        let m = &run.metrics;
        out.push_str(&format!(
            "{}: {}/{} succeeded ({:.1}%)\n",
            run.name,
            m.successful_queries(),
            m.total_queries,
            m.success_rate * 100.0
        ));
        out.push_str(&format!(
            "  Time: {:.4}s avg, Memory: {:.4} MB avg\n",
            m.avg_execution_time_secs, m.avg_memory_delta_mb
        ));
        out.push_str(&format!(
            "  Accuracy: {:.4}, Quality: {:.4}, Overall: {:.4}, Confidence: {}\n",
            m.accuracy_score,
            m.quality_score,
            run.scores.mean_overall,
            run.scores.confidence_display()
        ));
    }

    if !report.categories.is_empty() {
        heading(&mut out, "BY CATEGORY:");
        for (backend, by_category) in &report.categories {
            out.push_str(&format!("{}:\n", backend));
            for (category, m) in by_category {
                out.push_str(&format!(
                    "  {:<24} success {:>6.1}%  time {:.4}s  accuracy {:.4}\n",
                    category.as_str(),
                    m.success_rate * 100.0,
                    m.avg_execution_time_secs,
                    m.accuracy_score
                ));
            }
        }
    }

    if let Some(comparison) = &report.comparison {
        render_comparison(&mut out, comparison);
    }

    out.push_str(&format!("{}\n", "=".repeat(RULE_WIDTH)));
    out
}

fn render_comparison(out: &mut String, comparison: &ComparisonReport) {
    heading(
        out,
        &format!(
            "COMPARISON: {} vs {}",
            comparison.left_label, comparison.right_label
        ),
    );

    out.push_str(&format!(
        "{:<16}{:>14}{:>14}  {:<16}{:>12}\n",
        "Metric", comparison.left_label, comparison.right_label, "Winner", "Difference"
    ));
    for (name, axis) in comparison.axes() {
        out.push_str(&format!(
            "{:<16}{:>14.4}{:>14.4}  {:<16}{:>12.4}\n",
            name, axis.left, axis.right, axis.winner, axis.difference
        ));
    }

    out.push_str(&format!(
        "\nOverall Winner: {} (utility {:.4} vs {:.4})\n",
        comparison.overall_winner, comparison.left_utility, comparison.right_utility
    ));

    if !comparison.recommendations.is_empty() {
        heading(out, "RECOMMENDATIONS:");
        for (i, rec) in comparison.recommendations.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, rec));
        }
    }
}

/// Prints the full benchmark report to console.
pub fn print_report(report: &BenchmarkReport) {
    println!("{}", render_report(report));
}
