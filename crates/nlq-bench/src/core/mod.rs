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

//! Core benchmark infrastructure.
//!
//! # Modules
//!
//! - `config`: Centralized benchmark configuration
//! - `measurement`: Measured call wrapper, query results and memory sampling

pub mod config;
pub mod measurement;

// Re-export commonly used types
pub use config::{BenchConfig, ExportFormat, DEFAULT_ITERATIONS};
pub use measurement::{MemorySampler, Measurer, ProcessMemorySampler, QueryResult};
