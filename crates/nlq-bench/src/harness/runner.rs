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

//! Benchmark runner for executing workloads against registered backends.

use crate::backend::QueryBackend;
use crate::core::config::BenchConfig;
use crate::core::measurement::{MemorySampler, Measurer, ProcessMemorySampler};
use crate::core::QueryResult;
use crate::error::{BenchError, Result};
use crate::harness::aggregator::{aggregate, PerformanceMetrics};
use crate::harness::collector::{ScoreCollector, ScoreSummary};
use crate::harness::comparator::{compare, ComparisonReport};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Everything measured for one backend during a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendRun {
    /// Backend name.
    pub name: String,
    /// Aggregated metrics, scores included.
    pub metrics: PerformanceMetrics,
    /// Raw results in dispatch order.
    pub results: Vec<QueryResult>,
    /// Per-result score cards and their means.
    pub scores: ScoreSummary,
}

/// Result of [`BenchmarkRunner::run_benchmark`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkOutcome {
    /// One entry per backend, in registration order.
    pub runs: Vec<BackendRun>,
    /// Full passes made over the workload.
    pub iterations: usize,
    /// Number of distinct queries in the workload.
    pub workload_size: usize,
    /// When the run started.
    pub started_at: DateTime<Utc>,
}

impl BenchmarkOutcome {
    /// Looks up a backend's run by name.
    pub fn get(&self, name: &str) -> Option<&BackendRun> {
        self.runs.iter().find(|run| run.name == name)
    }

    /// Names of all backends in the run.
    pub fn backend_names(&self) -> Vec<&str> {
        self.runs.iter().map(|run| run.name.as_str()).collect()
    }

    /// Compares two backends of this run.
    ///
    /// # Errors
    ///
    /// [`BenchError::UnknownBackend`] if either name is not part of the run.
    pub fn compare(&self, left: &str, right: &str) -> Result<ComparisonReport> {
        let left_run = self
            .get(left)
            .ok_or_else(|| BenchError::UnknownBackend(left.to_string()))?;
        let right_run = self
            .get(right)
            .ok_or_else(|| BenchError::UnknownBackend(right.to_string()))?;

        Ok(compare(
            &left_run.metrics,
            &right_run.metrics,
            &left_run.name,
            &right_run.name,
        ))
    }
}

/// Runs workloads against registered backends, one backend at a time.
///
/// Memory deltas are process-wide, so calls are never overlapped.
pub struct BenchmarkRunner<S: MemorySampler = ProcessMemorySampler> {
    config: BenchConfig,
    measurer: Measurer<S>,
    backends: Vec<Box<dyn QueryBackend>>,
}

impl BenchmarkRunner<ProcessMemorySampler> {
    /// Creates a runner that samples the current process.
    pub fn new(config: BenchConfig) -> Self {
        Self::with_sampler(config, ProcessMemorySampler)
    }
}

impl<S: MemorySampler> BenchmarkRunner<S> {
    /// Creates a runner with a custom memory sampler.
    pub fn with_sampler(config: BenchConfig, sampler: S) -> Self {
        let measurer = Measurer::with_sampler(sampler).with_deadline(config.deadline);
        Self {
            config,
            measurer,
            backends: Vec::new(),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Registers a backend.
    ///
    /// # Errors
    ///
    /// [`BenchError::DuplicateBackend`] if a backend with the same name is
    /// already registered.
    pub fn register(&mut self, backend: Box<dyn QueryBackend>) -> Result<()> {
        if self.backends.iter().any(|b| b.name() == backend.name()) {
            return Err(BenchError::DuplicateBackend(backend.name().to_string()));
        }
        self.backends.push(backend);
        Ok(())
    }

    /// Names of registered backends, in registration order.
    pub fn backend_names(&self) -> Vec<&str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    /// Initializes every backend in registration order.
    ///
    /// Stops at the first failure.
    pub fn initialize_all(&mut self) -> Result<()> {
        for backend in &mut self.backends {
            if let Err(err) = backend.initialize() {
                warn!(backend = backend.name(), error = %err, "backend initialization failed");
                return Err(BenchError::InitializationFailed {
                    backend: backend.name().to_string(),
                    reason: err.to_string(),
                });
            }
            info!(backend = backend.name(), "backend initialized");
        }
        Ok(())
    }

    /// Runs `iterations` full passes of `queries` against each backend.
    ///
    /// Backends run one after another and never share result buffers. An
    /// empty workload or zero iterations produces all-zero metrics.
    pub fn run_benchmark(&mut self, queries: &[String], iterations: usize) -> BenchmarkOutcome {
        let started_at = Utc::now();
        info!(
            backends = self.backends.len(),
            queries = queries.len(),
            iterations,
            "starting benchmark"
        );

        let mut runs = Vec::with_capacity(self.backends.len());
        for backend in &mut self.backends {
            let mut results = Vec::with_capacity(queries.len() * iterations);

            for iteration in 1..=iterations {
                info!(backend = backend.name(), iteration, "starting iteration");
                results.extend(self.measurer.batch(backend.as_mut(), queries));
            }

            let scores = ScoreCollector::collect(&results);
            let metrics = aggregate(&results).with_scores(scores.mean_accuracy, scores.mean_quality);

            info!(
                backend = backend.name(),
                success_rate = metrics.success_rate,
                avg_time_secs = metrics.avg_execution_time_secs,
                accuracy = metrics.accuracy_score,
                "backend finished"
            );

            runs.push(BackendRun {
                name: backend.name().to_string(),
                metrics,
                results,
                scores,
            });
        }

        BenchmarkOutcome {
            runs,
            iterations,
            workload_size: queries.len(),
            started_at,
        }
    }

    /// Runs the workload with the configured iteration count.
    pub fn run(&mut self, queries: &[String]) -> BenchmarkOutcome {
        let iterations = self.config.iterations;
        self.run_benchmark(queries, iterations)
    }

    /// Releases every backend's resources.
    pub fn cleanup_all(&mut self) {
        for backend in &mut self.backends {
            backend.cleanup();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{BackendError, QueryResponse};
    use std::cell::Cell;
    use std::rc::Rc;

    struct FlatSampler;

    impl MemorySampler for FlatSampler {
        fn sample_mb(&self) -> f64 {
            10.0
        }
    }

    struct Canned {
        name: String,
        answer: Option<String>,
        init_ok: bool,
        calls: Rc<Cell<usize>>,
        cleaned: Rc<Cell<bool>>,
    }

    impl Canned {
        fn new(name: &str, answer: Option<&str>) -> Self {
            Self {
                name: name.to_string(),
                answer: answer.map(str::to_string),
                init_ok: true,
                calls: Rc::new(Cell::new(0)),
                cleaned: Rc::new(Cell::new(false)),
            }
        }
    }

    impl QueryBackend for Canned {
        fn name(&self) -> &str {
            &self.name
        }

        fn initialize(&mut self) -> std::result::Result<(), BackendError> {
            if self.init_ok {
                Ok(())
            } else {
                Err(BackendError::Unavailable("database offline".to_string()))
            }
        }

        fn query(&mut self, _text: &str) -> std::result::Result<QueryResponse, BackendError> {
            self.calls.set(self.calls.get() + 1);
            match &self.answer {
                Some(answer) => Ok(QueryResponse::new(answer.clone())),
                None => Err(BackendError::query("no answer")),
            }
        }

        fn cleanup(&mut self) {
            self.cleaned.set(true);
        }
    }

    fn runner() -> BenchmarkRunner<FlatSampler> {
        BenchmarkRunner::with_sampler(BenchConfig::default(), FlatSampler)
    }

    fn queries() -> Vec<String> {
        vec!["How many customers?".to_string(), "List products".to_string()]
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut runner = runner();
        runner.register(Box::new(Canned::new("rag", Some("1")))).unwrap();
        let err = runner
            .register(Box::new(Canned::new("rag", Some("2"))))
            .unwrap_err();
        assert!(matches!(err, BenchError::DuplicateBackend(name) if name == "rag"));
        assert_eq!(runner.backend_names(), vec!["rag"]);
    }

    #[test]
    fn test_initialize_stops_at_first_failure() {
        let mut runner = runner();
        let mut broken = Canned::new("sql", Some("1"));
        broken.init_ok = false;
        runner.register(Box::new(broken)).unwrap();
        runner.register(Box::new(Canned::new("rag", Some("1")))).unwrap();

        let err = runner.initialize_all().unwrap_err();
        match err {
            BenchError::InitializationFailed { backend, reason } => {
                assert_eq!(backend, "sql");
                assert!(reason.contains("database offline"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_run_counts_every_pass() {
        let mut runner = runner();
        let answering = Canned::new("rag", Some("There are 42 customers"));
        let calls = Rc::clone(&answering.calls);
        runner.register(Box::new(answering)).unwrap();
        runner.register(Box::new(Canned::new("sql", None))).unwrap();

        let outcome = runner.run_benchmark(&queries(), 3);
        assert_eq!(calls.get(), 6);
        assert_eq!(outcome.iterations, 3);
        assert_eq!(outcome.workload_size, 2);
        assert_eq!(outcome.backend_names(), vec!["rag", "sql"]);

        let rag = outcome.get("rag").unwrap();
        assert_eq!(rag.results.len(), 6);
        assert_eq!(rag.metrics.total_queries, 6);
        assert_eq!(rag.metrics.success_rate, 1.0);
        assert_eq!(rag.metrics.avg_memory_delta_mb, 0.0);
        assert!(rag.metrics.accuracy_score > 0.0);

        let sql = outcome.get("sql").unwrap();
        assert_eq!(sql.metrics.failed_queries, 6);
        assert_eq!(sql.metrics.success_rate, 0.0);
        assert!(sql.scores.cards.is_empty());
    }

    #[test]
    fn test_zero_iterations_and_empty_workload() {
        let mut runner = runner();
        runner.register(Box::new(Canned::new("rag", Some("1")))).unwrap();

        let outcome = runner.run_benchmark(&queries(), 0);
        assert_eq!(outcome.runs[0].metrics, PerformanceMetrics::default());

        let outcome = runner.run_benchmark(&[], 5);
        assert_eq!(outcome.runs[0].metrics, PerformanceMetrics::default());
    }

    #[test]
    fn test_run_uses_configured_iterations() {
        let mut runner =
            BenchmarkRunner::with_sampler(BenchConfig::default().with_iterations(2), FlatSampler);
        runner.register(Box::new(Canned::new("rag", Some("1")))).unwrap();
        let outcome = runner.run(&queries());
        assert_eq!(outcome.runs[0].results.len(), 4);
    }

    #[test]
    fn test_compare_unknown_backend() {
        let mut runner = runner();
        runner.register(Box::new(Canned::new("rag", Some("1")))).unwrap();
        let outcome = runner.run_benchmark(&queries(), 1);

        assert!(matches!(
            outcome.compare("rag", "missing"),
            Err(BenchError::UnknownBackend(name)) if name == "missing"
        ));
        assert!(outcome.compare("rag", "rag").is_ok());
    }

    #[test]
    fn test_cleanup_reaches_every_backend() {
        let mut runner = runner();
        let a = Canned::new("a", Some("1"));
        let b = Canned::new("b", None);
        let (a_flag, b_flag) = (Rc::clone(&a.cleaned), Rc::clone(&b.cleaned));
        runner.register(Box::new(a)).unwrap();
        runner.register(Box::new(b)).unwrap();

        runner.cleanup_all();
        assert!(a_flag.get() && b_flag.get());
    }
}
