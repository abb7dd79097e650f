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

//! Measured call wrapper.
//!
//! Wraps a single backend query with wall-clock timing and a process memory
//! delta, and converts every failure (error return or panic) into a
//! [`QueryResult`] carrying the error message. [`Measurer::measure`] never
//! fails, so batch processing needs no per-call error handling.
//!
//! Calls are measured one at a time. Memory is sampled process-wide, so a
//! concurrent call would be charged to whichever measurement happened to be
//! open.

use crate::backend::{QueryBackend, QueryResponse};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// One measured execution of a query against a backend.
///
/// Built once by the measurement wrapper (or one of the constructors below)
/// and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    query: String,
    response: String,
    execution_time_secs: f64,
    memory_delta_mb: f64,
    confidence_score: Option<f64>,
    source_documents: Option<Vec<String>>,
    generated_query: Option<String>,
    error: Option<String>,
}

impl QueryResult {
    /// Builds a successful result from a backend response and wrapper
    /// measurements.
    pub fn from_response(
        query: impl Into<String>,
        response: QueryResponse,
        execution_time_secs: f64,
        memory_delta_mb: f64,
    ) -> Self {
        Self {
            query: query.into(),
            response: response.response,
            execution_time_secs: execution_time_secs.max(0.0),
            memory_delta_mb,
            confidence_score: response.confidence_score,
            source_documents: response.source_documents,
            generated_query: response.generated_query,
            error: None,
        }
    }

    /// Builds a successful result carrying only answer text.
    pub fn success(
        query: impl Into<String>,
        response: impl Into<String>,
        execution_time_secs: f64,
        memory_delta_mb: f64,
    ) -> Self {
        Self::from_response(
            query,
            QueryResponse::new(response),
            execution_time_secs,
            memory_delta_mb,
        )
    }

    /// Builds a failed result. The response is empty and every optional
    /// field is absent.
    pub fn failure(
        query: impl Into<String>,
        error: impl Into<String>,
        execution_time_secs: f64,
        memory_delta_mb: f64,
    ) -> Self {
        Self {
            query: query.into(),
            response: String::new(),
            execution_time_secs: execution_time_secs.max(0.0),
            memory_delta_mb,
            confidence_score: None,
            source_documents: None,
            generated_query: None,
            error: Some(error.into()),
        }
    }

    /// Input question.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Backend answer, empty on failure.
    pub fn response(&self) -> &str {
        &self.response
    }

    /// Wall-clock duration of the call in seconds.
    pub fn execution_time_secs(&self) -> f64 {
        self.execution_time_secs
    }

    /// Resident memory after the call minus before, in MiB. May be negative.
    pub fn memory_delta_mb(&self) -> f64 {
        self.memory_delta_mb
    }

    /// Backend-supplied confidence, `None` when unknown.
    pub fn confidence_score(&self) -> Option<f64> {
        self.confidence_score
    }

    /// Confidence for arithmetic: unknown counts as zero.
    pub fn confidence_or_zero(&self) -> f64 {
        self.confidence_score.unwrap_or(0.0)
    }

    /// Confidence for display: unknown is shown as `n/a`, not `0.00`.
    pub fn confidence_display(&self) -> String {
        match self.confidence_score {
            Some(c) => format!("{:.2}", c),
            None => "n/a".to_string(),
        }
    }

    /// Retrieved context snippets (retrieval backends).
    pub fn source_documents(&self) -> Option<&[String]> {
        self.source_documents.as_deref()
    }

    /// Generated structured query (text-to-SQL backends).
    pub fn generated_query(&self) -> Option<&str> {
        self.generated_query.as_deref()
    }

    /// Error message when the call failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns `true` when no error was recorded.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Source of process memory readings.
pub trait MemorySampler {
    /// Current resident memory of the measured process, in MiB.
    fn sample_mb(&self) -> f64;
}

/// Reads the resident set size of the current process.
///
/// Linux only; other platforms report `0.0`, which turns every memory delta
/// into zero rather than failing the run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessMemorySampler;

impl MemorySampler for ProcessMemorySampler {
    fn sample_mb(&self) -> f64 {
        current_memory_usage() as f64 / BYTES_PER_MB
    }
}

/// Returns current resident memory in bytes.
fn current_memory_usage() -> usize {
    #[cfg(target_os = "linux")]
    {
        // Read from /proc/self/statm
        if let Ok(contents) = std::fs::read_to_string("/proc/self/statm") {
            if let Some(resident) = contents.split_whitespace().nth(1) {
                if let Ok(pages) = resident.parse::<usize>() {
                    // Convert pages to bytes (assuming 4KB pages)
                    return pages * 4096;
                }
            }
        }
    }

    0
}

/// Measured call wrapper.
///
/// # Example
///
/// ```
/// use nlq_bench::core::measurement::Measurer;
/// use nlq_bench::{BackendError, QueryBackend, QueryResponse};
///
/// struct Broken;
///
/// impl QueryBackend for Broken {
///     fn name(&self) -> &str { "broken" }
///     fn initialize(&mut self) -> Result<(), BackendError> { Ok(()) }
///     fn query(&mut self, _text: &str) -> Result<QueryResponse, BackendError> {
///         Err(BackendError::query("connection refused"))
///     }
///     fn cleanup(&mut self) {}
/// }
///
/// let measurer = Measurer::new();
/// let result = measurer.measure(&mut Broken, "How many customers?");
/// assert_eq!(result.error(), Some("connection refused"));
/// assert!(result.response().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Measurer<S = ProcessMemorySampler> {
    sampler: S,
    deadline: Option<Duration>,
}

impl Measurer<ProcessMemorySampler> {
    /// Creates a measurer that samples the current process.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: MemorySampler> Measurer<S> {
    /// Creates a measurer with a custom memory sampler.
    pub fn with_sampler(sampler: S) -> Self {
        Self {
            sampler,
            deadline: None,
        }
    }

    /// Records calls slower than `deadline` as failed.
    ///
    /// The call is not interrupted; the check happens once it returns.
    pub fn with_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Returns the memory sampler.
    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    /// Executes one query and measures it. Never panics, never fails.
    pub fn measure(&self, backend: &mut dyn QueryBackend, query: &str) -> QueryResult {
        let start = Instant::now();
        let start_memory = self.sampler.sample_mb();

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| backend.query(query)));

        let elapsed = start.elapsed();
        let memory_delta = self.sampler.sample_mb() - start_memory;
        let secs = elapsed.as_secs_f64();

        let result = match outcome {
            Ok(Ok(response)) => match self.deadline {
                Some(deadline) if elapsed > deadline => QueryResult::failure(
                    query,
                    format!(
                        "deadline of {:.3}s exceeded after {:.3}s",
                        deadline.as_secs_f64(),
                        secs
                    ),
                    secs,
                    memory_delta,
                ),
                _ => QueryResult::from_response(query, response, secs, memory_delta),
            },
            Ok(Err(err)) => QueryResult::failure(query, err.to_string(), secs, memory_delta),
            Err(payload) => QueryResult::failure(
                query,
                format!("backend panicked: {}", panic_message(payload.as_ref())),
                secs,
                memory_delta,
            ),
        };

        match result.error() {
            Some(error) => warn!(
                backend = backend.name(),
                query,
                error,
                elapsed_secs = secs,
                "query failed"
            ),
            None => debug!(
                backend = backend.name(),
                elapsed_secs = secs,
                memory_delta_mb = memory_delta,
                "query measured"
            ),
        }

        result
    }

    /// Measures each query in order, one at a time.
    pub fn batch<Q: AsRef<str>>(
        &self,
        backend: &mut dyn QueryBackend,
        queries: &[Q],
    ) -> Vec<QueryResult> {
        queries
            .iter()
            .map(|query| self.measure(backend, query.as_ref()))
            .collect()
    }
}

/// Extracts a readable message from a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendError;
    use std::cell::Cell;
    use std::thread;

    /// Returns readings from a fixed list, repeating the last one.
    struct SteppedSampler {
        readings: Vec<f64>,
        next: Cell<usize>,
    }

    impl SteppedSampler {
        fn new(readings: &[f64]) -> Self {
            Self {
                readings: readings.to_vec(),
                next: Cell::new(0),
            }
        }
    }

    impl MemorySampler for SteppedSampler {
        fn sample_mb(&self) -> f64 {
            let i = self.next.get();
            self.next.set(i + 1);
            self.readings[i.min(self.readings.len() - 1)]
        }
    }

    enum Mode {
        Answer,
        Fail,
        Panic,
        Sleep(Duration),
    }

    struct TestBackend(Mode);

    impl QueryBackend for TestBackend {
        fn name(&self) -> &str {
            "test"
        }

        fn initialize(&mut self) -> Result<(), BackendError> {
            Ok(())
        }

        fn query(&mut self, text: &str) -> Result<QueryResponse, BackendError> {
            match self.0 {
                Mode::Answer => Ok(QueryResponse::new(format!("answer to {}", text))
                    .with_confidence(0.8)
                    .with_generated_query("SELECT 1")),
                Mode::Fail => Err(BackendError::query("table not found: customers")),
                Mode::Panic => panic!("index out of bounds"),
                Mode::Sleep(d) => {
                    thread::sleep(d);
                    Ok(QueryResponse::new("slow"))
                }
            }
        }

        fn cleanup(&mut self) {}
    }

    #[test]
    fn test_measure_success_keeps_backend_fields() {
        let measurer = Measurer::with_sampler(SteppedSampler::new(&[100.0, 112.5]));
        let result = measurer.measure(&mut TestBackend(Mode::Answer), "q1");

        assert!(result.is_success());
        assert_eq!(result.query(), "q1");
        assert_eq!(result.response(), "answer to q1");
        assert_eq!(result.confidence_score(), Some(0.8));
        assert_eq!(result.generated_query(), Some("SELECT 1"));
        assert_eq!(result.memory_delta_mb(), 12.5);
        assert!(result.execution_time_secs() >= 0.0);
    }

    #[test]
    fn test_measure_error_becomes_data() {
        let measurer = Measurer::with_sampler(SteppedSampler::new(&[50.0, 49.0]));
        let result = measurer.measure(&mut TestBackend(Mode::Fail), "q");

        assert!(!result.is_success());
        assert_eq!(result.error(), Some("table not found: customers"));
        assert_eq!(result.response(), "");
        assert!(result.confidence_score().is_none());
        assert!(result.generated_query().is_none());
        assert!(result.source_documents().is_none());
        // Negative deltas are legitimate
        assert_eq!(result.memory_delta_mb(), -1.0);
    }

    #[test]
    fn test_measure_panic_becomes_data() {
        let measurer = Measurer::with_sampler(SteppedSampler::new(&[0.0]));
        let result = measurer.measure(&mut TestBackend(Mode::Panic), "q");

        let error = result.error().unwrap();
        assert!(error.contains("panicked"));
        assert!(error.contains("index out of bounds"));
        assert!(result.response().is_empty());
    }

    #[test]
    fn test_measure_timing() {
        let measurer = Measurer::with_sampler(SteppedSampler::new(&[0.0]));
        let result = measurer.measure(
            &mut TestBackend(Mode::Sleep(Duration::from_millis(10))),
            "q",
        );
        assert!(result.execution_time_secs() >= 0.010);
    }

    #[test]
    fn test_deadline_marks_slow_calls_failed() {
        let measurer = Measurer::with_sampler(SteppedSampler::new(&[0.0]))
            .with_deadline(Some(Duration::from_millis(1)));
        let result = measurer.measure(
            &mut TestBackend(Mode::Sleep(Duration::from_millis(20))),
            "q",
        );
        assert!(result.error().unwrap().contains("deadline"));
        assert!(result.response().is_empty());

        let fast = measurer.measure(&mut TestBackend(Mode::Answer), "q");
        assert!(fast.is_success());
    }

    #[test]
    fn test_batch_preserves_order_and_length() {
        let measurer = Measurer::with_sampler(SteppedSampler::new(&[0.0]));
        let queries = ["a", "b", "c"];

        let results = measurer.batch(&mut TestBackend(Mode::Answer), &queries);
        let asked: Vec<&str> = results.iter().map(|r| r.query()).collect();
        assert_eq!(asked, queries);

        let failed = measurer.batch(&mut TestBackend(Mode::Panic), &queries);
        assert_eq!(failed.len(), 3);
        assert!(failed.iter().all(|r| r.error().is_some() && r.response().is_empty()));
    }

    #[test]
    fn test_confidence_display() {
        let known = QueryResult::from_response("q", QueryResponse::new("a").with_confidence(0.0), 0.1, 0.0);
        let unknown = QueryResult::success("q", "a", 0.1, 0.0);

        assert_eq!(known.confidence_display(), "0.00");
        assert_eq!(unknown.confidence_display(), "n/a");
        assert_eq!(unknown.confidence_or_zero(), 0.0);
    }

    #[test]
    fn test_process_sampler_is_non_negative() {
        assert!(ProcessMemorySampler.sample_mb() >= 0.0);
    }
}
