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

//! Negative tests for nlq-bench error handling and robustness.
//!
//! Tests error paths for:
//! - Invalid configuration
//! - Backend registration and lookup
//! - Degenerate workloads
//! - Report export failures
//!
//! All tests verify that errors are returned rather than panics, and that
//! the error variant names the offending value.

use nlq_bench::reporters::{export_json, export_markdown, render_report};
use nlq_bench::{
    BackendRun, BenchConfig, BenchError, BenchmarkReport, BenchmarkRunner, ExportFormat,
    PerformanceMetrics, ScoreSummary,
};
use nlq_bench_test::{FailingBackend, FixedSampler, ScriptedBackend};
use std::time::Duration;

// ============================================================================
// CATEGORY 1: Configuration
// ============================================================================

#[test]
fn test_zero_iterations_rejected() {
    let err = BenchConfig::new(0).validate().unwrap_err();
    match err {
        BenchError::InvalidConfig { parameter, .. } => assert_eq!(parameter, "iterations"),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_zero_deadline_rejected() {
    let config = BenchConfig::default().with_deadline(Duration::ZERO);
    assert!(matches!(
        config.validate(),
        Err(BenchError::InvalidConfig { parameter, .. }) if parameter == "deadline"
    ));
}

#[test]
fn test_config_error_message_is_actionable() {
    let msg = BenchConfig::new(0).validate().unwrap_err().to_string();
    assert!(msg.contains("iterations"), "got: {}", msg);
}

#[test]
fn test_config_deserializes_with_explicit_fields() {
    let config: BenchConfig = serde_json::from_str(
        r#"{
            "title": "Nightly",
            "iterations": 5,
            "deadline": null,
            "output_dir": "reports",
            "export_formats": ["json", "markdown"]
        }"#,
    )
    .unwrap();
    assert_eq!(config.iterations, 5);
    assert!(config.has_format(ExportFormat::Markdown));
    assert!(!config.has_format(ExportFormat::Console));
    assert!(config.validate().is_ok());
}

// ============================================================================
// CATEGORY 2: Registration and lookup
// ============================================================================

#[test]
fn test_duplicate_backend_rejected() {
    let mut runner = BenchmarkRunner::with_sampler(BenchConfig::default(), FixedSampler::default());
    runner.register(Box::new(FailingBackend::new("rag", "x"))).unwrap();

    let err = runner
        .register(Box::new(ScriptedBackend::new("rag")))
        .unwrap_err();
    assert_eq!(err.to_string(), "Backend 'rag' is already registered");
}

#[test]
fn test_compare_unknown_backend() {
    let mut runner = BenchmarkRunner::with_sampler(BenchConfig::default(), FixedSampler::default());
    runner.register(Box::new(FailingBackend::new("rag", "x"))).unwrap();
    let outcome = runner.run_benchmark(&["q".to_string()], 1);

    assert!(matches!(
        outcome.compare("sql", "rag"),
        Err(BenchError::UnknownBackend(name)) if name == "sql"
    ));
}

#[test]
fn test_initialize_with_no_backends_is_ok() {
    let mut runner = BenchmarkRunner::with_sampler(BenchConfig::default(), FixedSampler::default());
    assert!(runner.initialize_all().is_ok());
    assert!(runner.run_benchmark(&["q".to_string()], 2).runs.is_empty());
    runner.cleanup_all();
}

// ============================================================================
// CATEGORY 3: Degenerate workloads
// ============================================================================

#[test]
fn test_empty_query_strings_do_not_crash() {
    let mut runner = BenchmarkRunner::with_sampler(BenchConfig::default(), FixedSampler::default());
    runner
        .register(Box::new(ScriptedBackend::new("echo").with_default("")))
        .unwrap();

    let outcome = runner.run_benchmark(&[String::new(), "   ".to_string()], 1);
    let run = &outcome.runs[0];
    assert_eq!(run.metrics.success_rate, 1.0);
    assert_eq!(run.metrics.accuracy_score, 0.0);
    assert_eq!(run.metrics.quality_score, 0.0);
}

#[test]
fn test_zero_iterations_gives_zero_metrics() {
    let mut runner = BenchmarkRunner::with_sampler(BenchConfig::default(), FixedSampler::default());
    runner
        .register(Box::new(ScriptedBackend::new("rag").with_default("42")))
        .unwrap();

    let outcome = runner.run_benchmark(&["q".to_string()], 0);
    assert_eq!(outcome.runs[0].metrics, PerformanceMetrics::default());
    assert!(outcome.runs[0].results.is_empty());
}

// ============================================================================
// CATEGORY 4: Export failures
// ============================================================================

fn empty_report() -> BenchmarkReport {
    let mut runner = BenchmarkRunner::with_sampler(BenchConfig::default(), FixedSampler::default());
    BenchmarkReport::from_outcome("Empty", runner.run_benchmark(&[], 1))
}

#[test]
fn test_export_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no").join("such").join("report.json");

    assert!(matches!(export_json(&empty_report(), &path), Err(BenchError::Io(_))));
    assert!(matches!(
        export_markdown(&empty_report(), &path.with_extension("md")),
        Err(BenchError::Io(_))
    ));
}

#[test]
fn test_write_reports_output_dir_is_a_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let config = BenchConfig::default()
        .with_output_dir(file.path())
        .with_export_formats(vec![ExportFormat::Json]);

    assert!(nlq_bench::write_reports(&empty_report(), &config).is_err());
}

// ============================================================================
// CATEGORY 5: Inconsistent deserialized metrics
// ============================================================================

#[test]
fn test_render_metrics_with_more_failures_than_calls() {
    let metrics: PerformanceMetrics = serde_json::from_str(
        r#"{
            "avg_execution_time_secs": 0.5,
            "avg_memory_delta_mb": 1.0,
            "success_rate": 0.0,
            "accuracy_score": 0.0,
            "quality_score": 0.0,
            "total_queries": 1,
            "failed_queries": 3
        }"#,
    )
    .unwrap();
    assert_eq!(metrics.successful_queries(), 0);

    let mut report = empty_report();
    report.runs.push(BackendRun {
        name: "imported".to_string(),
        metrics,
        results: Vec::new(),
        scores: ScoreSummary::default(),
    });

    let text = render_report(&report);
    assert!(text.contains("imported: 0/1 succeeded (0.0%)"));
}
