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

//! Result aggregation.
//!
//! Reduces measured results into [`PerformanceMetrics`]. Measurement and
//! evaluation are kept apart: the aggregator never runs scorers, callers fold
//! score means in with [`PerformanceMetrics::with_scores`].

use crate::core::QueryResult;
use crate::harness::collector::ScoreCollector;
use crate::workload::{QueryCategory, Workload};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary statistics for one backend over a result set.
///
/// When there are no successful results every averaged field is `0.0`, so
/// downstream arithmetic never sees NaN.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Mean wall-clock seconds over successful calls.
    pub avg_execution_time_secs: f64,
    /// Mean memory delta in MiB over successful calls.
    pub avg_memory_delta_mb: f64,
    /// Successful calls divided by all calls.
    pub success_rate: f64,
    /// Mean accuracy score over successful calls.
    pub accuracy_score: f64,
    /// Mean quality score over successful calls.
    pub quality_score: f64,
    /// Number of calls.
    pub total_queries: usize,
    /// Number of calls that recorded an error.
    pub failed_queries: usize,
}

impl PerformanceMetrics {
    /// Number of successful calls.
    pub fn successful_queries(&self) -> usize {
        self.total_queries.saturating_sub(self.failed_queries)
    }

    /// Sets the accuracy and quality means.
    pub fn with_scores(mut self, accuracy: f64, quality: f64) -> Self {
        self.accuracy_score = accuracy;
        self.quality_score = quality;
        self
    }
}

/// Arithmetic mean, `0.0` for an empty input.
pub(crate) fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Aggregates timing, memory and success rate over a result set.
///
/// # Arguments
///
/// * `results` - Measured results, successful and failed
///
/// # Returns
///
/// Metrics with `accuracy_score` and `quality_score` left at zero.
pub fn aggregate(results: &[QueryResult]) -> PerformanceMetrics {
    if results.is_empty() {
        return PerformanceMetrics::default();
    }

    let (successes, failures): (Vec<&QueryResult>, Vec<&QueryResult>) =
        results.iter().partition(|r| r.is_success());

    PerformanceMetrics {
        avg_execution_time_secs: mean(successes.iter().map(|r| r.execution_time_secs())),
        avg_memory_delta_mb: mean(successes.iter().map(|r| r.memory_delta_mb())),
        success_rate: successes.len() as f64 / results.len() as f64,
        accuracy_score: 0.0,
        quality_score: 0.0,
        total_queries: results.len(),
        failed_queries: failures.len(),
    }
}

/// Aggregates results into metrics plus heuristic score means.
pub fn aggregate_scored(results: &[QueryResult]) -> PerformanceMetrics {
    let scores = ScoreCollector::collect(results);
    aggregate(results).with_scores(scores.mean_accuracy, scores.mean_quality)
}

/// Groups results by the workload category of their query and aggregates
/// each group, scores included.
///
/// Results whose query has no category tag in `workload` are skipped.
pub fn aggregate_by_category(
    results: &[QueryResult],
    workload: &Workload,
) -> BTreeMap<QueryCategory, PerformanceMetrics> {
    let mut grouped: BTreeMap<QueryCategory, Vec<QueryResult>> = BTreeMap::new();

    for result in results {
        if let Some(category) = workload.category_of(result.query()) {
            grouped.entry(category).or_default().push(result.clone());
        }
    }

    grouped
        .into_iter()
        .map(|(category, group)| (category, aggregate_scored(&group)))
        .collect()
}
