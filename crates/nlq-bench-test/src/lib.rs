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

//! Shared test backends, samplers and fixtures for NLQ Bench.
//!
//! Integration tests, benches and the runnable example all need the same
//! handful of scripted backends and deterministic memory samplers; they live
//! here so each test file does not grow its own copy.
//!
//! # Quick Start
//!
//! ```rust
//! use nlq_bench::{BenchConfig, BenchmarkRunner};
//! use nlq_bench_test::backends::{FailingBackend, ScriptedBackend};
//! use nlq_bench_test::samplers::FixedSampler;
//!
//! let mut runner = BenchmarkRunner::with_sampler(BenchConfig::default(), FixedSampler::new(64.0));
//! runner
//!     .register(Box::new(ScriptedBackend::new("rag").with_default("There are 42 customers")))
//!     .unwrap();
//! runner.register(Box::new(FailingBackend::new("sql", "database offline"))).unwrap();
//!
//! let outcome = runner.run_benchmark(&["How many customers?".to_string()], 2);
//! assert_eq!(outcome.get("sql").unwrap().metrics.success_rate, 0.0);
//! ```

pub mod backends;
pub mod fixtures;
pub mod samplers;

pub use backends::{CallLog, FailingBackend, FlakyBackend, PanickingBackend, ScriptedBackend};
pub use samplers::{FixedSampler, SequenceSampler};
