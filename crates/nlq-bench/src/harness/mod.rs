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

//! Benchmark harness.
//!
//! Runs workloads against backends and turns measured results into metrics,
//! score summaries and comparisons.
//!
//! # Modules
//!
//! - `runner`: Backend registration, lifecycle and benchmark execution
//! - `collector`: Heuristic score collection
//! - `aggregator`: Result aggregation into performance metrics
//! - `comparator`: Two-backend comparison and winner selection

pub mod aggregator;
pub mod collector;
pub mod comparator;
pub mod runner;

pub use aggregator::{aggregate, aggregate_by_category, aggregate_scored, PerformanceMetrics};
pub use collector::{ScoreCollector, ScoreSummary};
pub use comparator::{
    compare, generate_recommendations, utility, AxisComparison, ComparisonReport, Direction,
    Outcome, TIE_LABEL,
};
pub use runner::{BackendRun, BenchmarkOutcome, BenchmarkRunner};
