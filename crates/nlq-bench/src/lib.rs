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

//! NLQ Bench
//!
//! Comparative benchmarking for natural-language query backends, such as a
//! retrieval-augmented generator and a text-to-SQL agent answering the same
//! business questions.
//!
//! ## Features
//!
//! - **Measured calls**: wall-clock time and resident-memory delta per query,
//!   with backend errors and panics captured as data
//! - **Heuristic scoring**: deterministic accuracy, quality, comprehensiveness
//!   and SQL-quality scores from response text
//! - **Comparison**: per-axis winners, a weighted overall winner and
//!   recommendations
//! - **Workloads**: a categorized catalog of e-commerce questions
//! - **Reports**: console, JSON and Markdown output
//!
//! ## Usage
//!
//! ```no_run
//! use nlq_bench::{BenchConfig, BenchmarkRunner, Workload};
//! # use nlq_bench::{BackendError, QueryBackend, QueryResponse};
//! # struct Rag;
//! # impl QueryBackend for Rag {
//! #     fn name(&self) -> &str { "rag" }
//! #     fn initialize(&mut self) -> Result<(), BackendError> { Ok(()) }
//! #     fn query(&mut self, _: &str) -> Result<QueryResponse, BackendError> { Ok(QueryResponse::new("42")) }
//! #     fn cleanup(&mut self) {}
//! # }
//! # struct Sql;
//! # impl QueryBackend for Sql {
//! #     fn name(&self) -> &str { "sql" }
//! #     fn initialize(&mut self) -> Result<(), BackendError> { Ok(()) }
//! #     fn query(&mut self, _: &str) -> Result<QueryResponse, BackendError> { Ok(QueryResponse::new("42")) }
//! #     fn cleanup(&mut self) {}
//! # }
//!
//! # fn main() -> nlq_bench::Result<()> {
//! let config = BenchConfig::default();
//! config.validate()?;
//!
//! let mut runner = BenchmarkRunner::new(config.clone());
//! runner.register(Box::new(Rag))?;
//! runner.register(Box::new(Sql))?;
//! runner.initialize_all()?;
//!
//! let workload = Workload::benchmark();
//! let outcome = runner.run(workload.texts());
//! let comparison = outcome.compare("rag", "sql")?;
//! runner.cleanup_all();
//!
//! let report = nlq_bench::BenchmarkReport::from_outcome(&config.title, outcome)
//!     .with_comparison(comparison)
//!     .with_category_breakdown(&workload);
//! nlq_bench::reporters::write_reports(&report, &config)?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod core;
pub mod error;
pub mod harness;
pub mod reporters;
pub mod scoring;
pub mod workload;

// Re-export key types for convenience
pub use backend::{BackendError, QueryBackend, QueryResponse};
pub use crate::core::{
    BenchConfig, ExportFormat, MemorySampler, Measurer, ProcessMemorySampler, QueryResult,
};
pub use error::{BenchError, Result};
pub use harness::{
    compare, BackendRun, BenchmarkOutcome, BenchmarkRunner, ComparisonReport, Outcome,
    PerformanceMetrics, ScoreSummary,
};
pub use reporters::{write_reports, BenchmarkReport};
pub use scoring::{
    accuracy_score, comprehensiveness_score, overall_score, quality_score, sql_quality_score,
    ScoreCard,
};
pub use workload::{QueryCategory, Scenario, Workload};
