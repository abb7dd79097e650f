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

//! Report types.

use crate::harness::{
    aggregate_by_category, BackendRun, BenchmarkOutcome, ComparisonReport, PerformanceMetrics,
};
use crate::workload::{QueryCategory, Workload};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Facts about the run a report was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetadata {
    /// Run start, serialized as RFC 3339.
    pub timestamp: DateTime<Utc>,
    /// Distinct queries in the workload.
    pub total_queries: usize,
    /// Full passes per backend.
    pub iterations: usize,
    /// Backend names in registration order.
    pub backends_tested: Vec<String>,
}

impl RunMetadata {
    /// Extracts metadata from a finished run.
    pub fn from_outcome(outcome: &BenchmarkOutcome) -> Self {
        Self {
            timestamp: outcome.started_at,
            total_queries: outcome.workload_size,
            iterations: outcome.iterations,
            backends_tested: outcome.runs.iter().map(|r| r.name.clone()).collect(),
        }
    }
}

/// Complete benchmark report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Report title.
    pub title: String,
    /// Run metadata.
    pub metadata: RunMetadata,
    /// Per-backend results.
    pub runs: Vec<BackendRun>,
    /// Head-to-head comparison, if one was made.
    pub comparison: Option<ComparisonReport>,
    /// Per-backend metrics by workload category.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub categories: BTreeMap<String, BTreeMap<QueryCategory, PerformanceMetrics>>,
    /// Additional notes.
    #[serde(default)]
    pub notes: Vec<String>,
}

impl BenchmarkReport {
    /// Creates a report from a finished run.
    pub fn from_outcome(title: impl Into<String>, outcome: BenchmarkOutcome) -> Self {
        Self {
            title: title.into(),
            metadata: RunMetadata::from_outcome(&outcome),
            runs: outcome.runs,
            comparison: None,
            categories: BTreeMap::new(),
            notes: Vec::new(),
        }
    }

    /// Attaches a comparison.
    pub fn with_comparison(mut self, comparison: ComparisonReport) -> Self {
        self.comparison = Some(comparison);
        self
    }

    /// Adds per-category metrics for every backend.
    ///
    /// Queries without a category tag in `workload` are left out.
    pub fn with_category_breakdown(mut self, workload: &Workload) -> Self {
        self.categories = self
            .runs
            .iter()
            .map(|run| (run.name.clone(), aggregate_by_category(&run.results, workload)))
            .filter(|(_, by_category)| !by_category.is_empty())
            .collect();
        self
    }

    /// Adds a note.
    pub fn add_note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    /// Looks up a backend's run by name.
    pub fn run(&self, name: &str) -> Option<&BackendRun> {
        self.runs.iter().find(|r| r.name == name)
    }

    /// Number of backends in the report.
    pub fn backend_count(&self) -> usize {
        self.runs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::QueryResult;
    use crate::harness::{aggregate, ScoreCollector};

    fn run(name: &str, results: Vec<QueryResult>) -> BackendRun {
        let scores = ScoreCollector::collect(&results);
        BackendRun {
            name: name.to_string(),
            metrics: aggregate(&results).with_scores(scores.mean_accuracy, scores.mean_quality),
            results,
            scores,
        }
    }

    fn outcome() -> BenchmarkOutcome {
        BenchmarkOutcome {
            runs: vec![
                run(
                    "rag",
                    vec![QueryResult::success("How many customers do we have?", "42", 0.2, 1.0)],
                ),
                run(
                    "sql",
                    vec![QueryResult::failure("How many customers do we have?", "x", 0.1, 0.0)],
                ),
            ],
            iterations: 1,
            workload_size: 1,
            started_at: Utc::now(),
        }
    }

    #[test]
    fn test_metadata_from_outcome() {
        let outcome = outcome();
        let metadata = RunMetadata::from_outcome(&outcome);
        assert_eq!(metadata.backends_tested, vec!["rag", "sql"]);
        assert_eq!(metadata.total_queries, 1);
        assert_eq!(metadata.timestamp, outcome.started_at);
    }

    #[test]
    fn test_report_builders() {
        let outcome = outcome();
        let comparison = outcome.compare("rag", "sql").unwrap();
        let mut report = BenchmarkReport::from_outcome("Test", outcome).with_comparison(comparison);
        report.add_note("seeded run");

        assert_eq!(report.backend_count(), 2);
        assert!(report.run("rag").is_some());
        assert_eq!(report.comparison.as_ref().unwrap().overall_winner, "rag");
        assert_eq!(report.notes.len(), 1);
    }

    #[test]
    fn test_category_breakdown() {
        let report = BenchmarkReport::from_outcome("Test", outcome())
            .with_category_breakdown(&Workload::benchmark());

        let rag = &report.categories["rag"];
        assert_eq!(rag[&QueryCategory::SimpleLookup].total_queries, 1);
        assert_eq!(report.categories["sql"][&QueryCategory::SimpleLookup].failed_queries, 1);
    }

    #[test]
    fn test_timestamp_is_rfc3339() {
        let report = BenchmarkReport::from_outcome("Test", outcome());
        let json = serde_json::to_value(&report).unwrap();
        let stamp = json["metadata"]["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(stamp).is_ok());
        assert!(json.get("categories").is_none());
    }
}
