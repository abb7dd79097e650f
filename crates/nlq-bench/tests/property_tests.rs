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

//! Property-based tests for scorers, aggregation and comparison.
//!
//! These tests verify that scores stay in range and that comparison and
//! aggregation keep their invariants across randomly generated inputs.

use nlq_bench::harness::{aggregate, utility, Outcome};
use nlq_bench::scoring::{
    accuracy_score, comprehensiveness_score, overall_score, quality_score, sql_quality_score,
};
use nlq_bench::{compare, PerformanceMetrics, QueryResult};
use proptest::prelude::*;

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        ".{0,200}",
        "[a-zA-Z0-9 |\t\n$:.,/-]{0,300}",
        Just(String::new()),
        Just("Query Results:\n\ncustomer_count\n----\n42".to_string()),
        Just("SELECT * FROM products;; where where".to_string()),
    ]
}

fn arb_metrics() -> impl Strategy<Value = PerformanceMetrics> {
    (0.0f64..30.0, 0.0f64..500.0, 0.0f64..=1.0, 0.0f64..=1.0).prop_map(
        |(time, memory, success, accuracy)| PerformanceMetrics {
            avg_execution_time_secs: time,
            avg_memory_delta_mb: memory,
            success_rate: success,
            accuracy_score: accuracy,
            ..Default::default()
        },
    )
}

fn arb_result() -> impl Strategy<Value = QueryResult> {
    (any::<bool>(), 0.0f64..10.0, -50.0f64..50.0).prop_map(|(ok, time, memory)| {
        if ok {
            QueryResult::success("q", "42", time, memory)
        } else {
            QueryResult::failure("q", "boom", time, memory)
        }
    })
}

fn in_unit_range(score: f64) -> bool {
    (0.0..=1.0).contains(&score)
}

proptest! {
    /// Property: every scorer stays within [0, 1]
    #[test]
    fn prop_scores_bounded(query in arb_text(), response in arb_text()) {
        let accuracy = accuracy_score(&query, &response);
        let quality = quality_score(&response);
        let comprehensiveness = comprehensiveness_score(&query, &response);
        let sql = sql_quality_score(&response);

        prop_assert!(in_unit_range(accuracy));
        prop_assert!(in_unit_range(quality));
        prop_assert!(in_unit_range(comprehensiveness));
        prop_assert!(in_unit_range(sql));
        prop_assert!(in_unit_range(overall_score(accuracy, quality, comprehensiveness, sql)));
    }

    /// Property: scoring the same input twice gives the same value
    #[test]
    fn prop_scores_deterministic(query in arb_text(), response in arb_text()) {
        prop_assert_eq!(accuracy_score(&query, &response), accuracy_score(&query, &response));
        prop_assert_eq!(quality_score(&response), quality_score(&response));
        prop_assert_eq!(
            comprehensiveness_score(&query, &response),
            comprehensiveness_score(&query, &response)
        );
    }

    /// Property: any error phrase caps accuracy at exactly 0.1
    #[test]
    fn prop_error_short_circuit(
        prefix in "[a-z0-9 ]{0,40}",
        suffix in "[a-z0-9 |\n]{0,40}",
        phrase in prop::sample::select(vec!["Error", "exception", "FAILED", "invalid", "not found"]),
    ) {
        let response = format!("{} {} {}", prefix, phrase, suffix);
        prop_assert_eq!(accuracy_score("How many orders?", &response), 0.1);
    }

    /// Property: blank responses score zero everywhere
    #[test]
    fn prop_blank_scores_zero(blank in "[ \t\n]{0,10}") {
        prop_assert_eq!(accuracy_score("q", &blank), 0.0);
        prop_assert_eq!(quality_score(&blank), 0.0);
        prop_assert_eq!(comprehensiveness_score("How many?", &blank), 0.0);
        prop_assert_eq!(sql_quality_score(&blank), 0.0);
    }

    /// Property: comparing a metric set with itself ties everywhere
    #[test]
    fn prop_self_comparison_ties(m in arb_metrics()) {
        let report = compare(&m, &m, "a", "b");
        prop_assert_eq!(report.overall_outcome, Outcome::Tie);
        for (_, axis) in report.axes() {
            prop_assert_eq!(axis.outcome, Outcome::Tie);
        }
    }

    /// Property: swapping the arguments mirrors every outcome
    #[test]
    fn prop_comparison_antisymmetric(a in arb_metrics(), b in arb_metrics()) {
        let forward = compare(&a, &b, "a", "b");
        let backward = compare(&b, &a, "b", "a");

        let mirrored = |o: Outcome| match o {
            Outcome::Left => Outcome::Right,
            Outcome::Right => Outcome::Left,
            Outcome::Tie => Outcome::Tie,
        };
        prop_assert_eq!(mirrored(forward.overall_outcome), backward.overall_outcome);
        prop_assert_eq!(&forward.overall_winner, &backward.overall_winner);
        for ((_, f), (_, r)) in forward.axes().iter().zip(backward.axes().iter()) {
            prop_assert_eq!(mirrored(f.outcome), r.outcome);
            prop_assert_eq!(f.difference, r.difference);
        }
    }

    /// Property: utility grows with success rate and accuracy
    #[test]
    fn prop_utility_monotone(m in arb_metrics(), bump in 0.01f64..0.5) {
        let mut better = m.clone();
        better.success_rate += bump;
        better.accuracy_score += bump;
        prop_assert!(utility(&better) > utility(&m));
    }

    /// Property: successes plus failures always add up to the total
    #[test]
    fn prop_aggregate_conserves_counts(results in prop::collection::vec(arb_result(), 0..50)) {
        let metrics = aggregate(&results);
        let successes = results.iter().filter(|r| r.is_success()).count();

        prop_assert_eq!(metrics.total_queries, results.len());
        prop_assert_eq!(metrics.successful_queries(), successes);
        prop_assert!(!metrics.avg_execution_time_secs.is_nan());
        prop_assert!(!metrics.avg_memory_delta_mb.is_nan());
        if !results.is_empty() {
            prop_assert!((metrics.success_rate * results.len() as f64 - successes as f64).abs() < 1e-9);
        }
    }
}
