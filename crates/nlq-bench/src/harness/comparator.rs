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

//! Backend comparison and winner selection.
//!
//! Compares two aggregated metric sets axis by axis, picks an overall winner
//! with a fixed weighted utility, and derives advisory recommendations.

use crate::harness::aggregator::PerformanceMetrics;
use serde::{Deserialize, Serialize};

/// Label used when neither side wins.
pub const TIE_LABEL: &str = "Tie";

/// Utility weight of execution time.
pub const TIME_WEIGHT: f64 = 0.25;
/// Utility weight of memory delta.
pub const MEMORY_WEIGHT: f64 = 0.15;
/// Utility weight of success rate.
pub const SUCCESS_RATE_WEIGHT: f64 = 0.30;
/// Utility weight of accuracy.
pub const ACCURACY_WEIGHT: f64 = 0.30;

/// Added to time and memory before taking reciprocals so near-zero
/// measurements cannot produce unbounded utility. Not tunable.
pub const RECIPROCAL_OFFSET: f64 = 0.1;

/// Which side of a comparison came out ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The first metric set.
    Left,
    /// The second metric set.
    Right,
    /// Neither.
    Tie,
}

/// Whether smaller or larger values win on an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Time, memory.
    LowerIsBetter,
    /// Success rate, accuracy.
    HigherIsBetter,
}

impl Outcome {
    fn decide(left: f64, right: f64, direction: Direction) -> Self {
        let (better, worse) = match direction {
            Direction::LowerIsBetter => (right, left),
            Direction::HigherIsBetter => (left, right),
        };
        if better > worse {
            Outcome::Left
        } else if worse > better {
            Outcome::Right
        } else {
            Outcome::Tie
        }
    }

    fn label<'a>(&self, left: &'a str, right: &'a str) -> &'a str {
        match self {
            Outcome::Left => left,
            Outcome::Right => right,
            Outcome::Tie => TIE_LABEL,
        }
    }
}

/// Both sides of one comparison axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisComparison {
    /// Value of the first backend.
    pub left: f64,
    /// Value of the second backend.
    pub right: f64,
    /// Which side won.
    pub outcome: Outcome,
    /// Winning backend name, or [`TIE_LABEL`].
    pub winner: String,
    /// Absolute difference between the two values.
    pub difference: f64,
}

impl AxisComparison {
    fn new(
        left: f64,
        right: f64,
        direction: Direction,
        labels: (&str, &str),
        forced: Option<Outcome>,
    ) -> Self {
        let outcome = forced.unwrap_or_else(|| Outcome::decide(left, right, direction));
        Self {
            left,
            right,
            outcome,
            winner: outcome.label(labels.0, labels.1).to_string(),
            difference: (left - right).abs(),
        }
    }
}

/// Result of comparing two backends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Name of the first backend.
    pub left_label: String,
    /// Name of the second backend.
    pub right_label: String,
    /// Mean execution time, lower wins.
    pub execution_time: AxisComparison,
    /// Mean memory delta, lower wins.
    pub memory_usage: AxisComparison,
    /// Success rate, higher wins.
    pub success_rate: AxisComparison,
    /// Mean accuracy, higher wins.
    pub accuracy: AxisComparison,
    /// Weighted utility of the first backend.
    pub left_utility: f64,
    /// Weighted utility of the second backend.
    pub right_utility: f64,
    /// Which side has the larger utility.
    pub overall_outcome: Outcome,
    /// Overall winner name, or [`TIE_LABEL`].
    pub overall_winner: String,
    /// Advisory text, not a decision input.
    pub recommendations: Vec<String>,
}

impl ComparisonReport {
    /// The four axes with display names, in report order.
    pub fn axes(&self) -> [(&'static str, &AxisComparison); 4] {
        [
            ("Response Time", &self.execution_time),
            ("Memory Usage", &self.memory_usage),
            ("Success Rate", &self.success_rate),
            ("Accuracy", &self.accuracy),
        ]
    }
}

/// Weighted utility of a metric set.
///
/// ```
/// use nlq_bench::harness::{utility, PerformanceMetrics};
///
/// let m = PerformanceMetrics {
///     avg_execution_time_secs: 0.9,
///     avg_memory_delta_mb: 0.9,
///     success_rate: 1.0,
///     accuracy_score: 1.0,
///     ..Default::default()
/// };
/// assert!((utility(&m) - 1.0).abs() < 1e-9);
/// ```
pub fn utility(metrics: &PerformanceMetrics) -> f64 {
    (1.0 / (metrics.avg_execution_time_secs + RECIPROCAL_OFFSET)) * TIME_WEIGHT
        + (1.0 / (metrics.avg_memory_delta_mb + RECIPROCAL_OFFSET)) * MEMORY_WEIGHT
        + metrics.success_rate * SUCCESS_RATE_WEIGHT
        + metrics.accuracy_score * ACCURACY_WEIGHT
}

/// Compares two backends.
///
/// # Arguments
///
/// * `left`, `right` - Aggregated metrics of each backend
/// * `left_label`, `right_label` - Backend names used as winner labels
///
/// # Returns
///
/// Per-axis winners, the overall winner and recommendations.
///
/// A backend with no successful calls has no meaningful time or memory
/// average. When only one side answered anything, that side wins every axis
/// and the overall comparison regardless of the values.
pub fn compare(
    left: &PerformanceMetrics,
    right: &PerformanceMetrics,
    left_label: &str,
    right_label: &str,
) -> ComparisonReport {
    let labels = (left_label, right_label);
    let forced = match (answered(left), answered(right)) {
        (true, false) => Some(Outcome::Left),
        (false, true) => Some(Outcome::Right),
        _ => None,
    };

    let execution_time = AxisComparison::new(
        left.avg_execution_time_secs,
        right.avg_execution_time_secs,
        Direction::LowerIsBetter,
        labels,
        forced,
    );
    let memory_usage = AxisComparison::new(
        left.avg_memory_delta_mb,
        right.avg_memory_delta_mb,
        Direction::LowerIsBetter,
        labels,
        forced,
    );
    let success_rate = AxisComparison::new(
        left.success_rate,
        right.success_rate,
        Direction::HigherIsBetter,
        labels,
        forced,
    );
    let accuracy = AxisComparison::new(
        left.accuracy_score,
        right.accuracy_score,
        Direction::HigherIsBetter,
        labels,
        forced,
    );

    let left_utility = utility(left);
    let right_utility = utility(right);
    let overall_outcome = forced
        .unwrap_or_else(|| Outcome::decide(left_utility, right_utility, Direction::HigherIsBetter));

    let mut report = ComparisonReport {
        left_label: left_label.to_string(),
        right_label: right_label.to_string(),
        execution_time,
        memory_usage,
        success_rate,
        accuracy,
        left_utility,
        right_utility,
        overall_outcome,
        overall_winner: overall_outcome.label(left_label, right_label).to_string(),
        recommendations: Vec::new(),
    };
    report.recommendations = generate_recommendations(&report);
    report
}

fn answered(metrics: &PerformanceMetrics) -> bool {
    metrics.success_rate > 0.0
}

/// Builds recommendation text from the per-axis outcomes.
///
/// One line per axis, then two fixed lines about hybrid usage.
pub fn generate_recommendations(report: &ComparisonReport) -> Vec<String> {
    let mut recommendations = Vec::new();

    recommendations.push(match report.execution_time.outcome {
        Outcome::Tie => "Both backends deliver comparable response times".to_string(),
        _ => format!(
            "{} provides faster response times and suits low-latency, interactive queries",
            report.execution_time.winner
        ),
    });

    recommendations.push(match report.memory_usage.outcome {
        Outcome::Tie => "Both backends have a comparable memory footprint per query".to_string(),
        _ => format!(
            "{} has the smaller memory footprint per query and suits resource-constrained hosts",
            report.memory_usage.winner
        ),
    });

    recommendations.push(match report.success_rate.outcome {
        Outcome::Tie => "Both backends answer the workload with the same success rate".to_string(),
        _ => format!(
            "{} has the higher success rate and is the more reliable choice",
            report.success_rate.winner
        ),
    });

    recommendations.push(match report.accuracy.outcome {
        Outcome::Tie => "Both backends score equally on response accuracy".to_string(),
        _ => format!(
            "{} provides more accurate responses and suits precision-critical queries",
            report.accuracy.winner
        ),
    });

    recommendations.push(
        "Consider a hybrid approach that routes each query category to the backend that wins it"
            .to_string(),
    );
    recommendations.push(
        "Keep the other backend as a fallback for queries the primary backend fails to answer"
            .to_string(),
    );

    recommendations
}
