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

//! Canned responses and metric sets.

use nlq_bench::{PerformanceMetrics, QueryResponse};

/// Question used by most single-query fixtures.
pub const CUSTOMER_COUNT_QUERY: &str = "How many customers do we have?";

/// Tabular answer a SQL agent gives to [`CUSTOMER_COUNT_QUERY`].
pub const TABULAR_ANSWER: &str = "Query Results:\n\ncustomer_count\n----\n42";

/// Answer that reports a failure in prose.
pub const ERROR_ANSWER: &str = "Error: table not found";

/// Answer that is valid but empty.
pub const EMPTY_RESULT_ANSWER: &str = "No results found for the requested period.";

/// Generated SQL with two anti-patterns.
pub const SLOPPY_SQL: &str = "SELECT * FROM products;;";

/// Generated SQL with filters and a limit.
pub const TIDY_SQL: &str = "SELECT name FROM products WHERE price > 10 LIMIT 5";

/// What a text-to-SQL agent returns for [`CUSTOMER_COUNT_QUERY`].
pub fn sql_agent_response() -> QueryResponse {
    QueryResponse::new(TABULAR_ANSWER)
        .with_confidence(0.95)
        .with_generated_query("SELECT COUNT(*) AS customer_count FROM customers")
}

/// What a retrieval pipeline returns for [`CUSTOMER_COUNT_QUERY`].
pub fn rag_response() -> QueryResponse {
    QueryResponse::new(
        "Based on the customer records, we currently have 42 customers. \
         Most of them signed up in the last year.",
    )
    .with_confidence(0.7)
    .with_sources([
        "Customer: Alice Smith, alice@example.com, California",
        "Customer: Bob Jones, bob@example.com, New York",
    ])
}

fn metrics(time: f64, memory: f64, success: f64, accuracy: f64) -> PerformanceMetrics {
    PerformanceMetrics {
        avg_execution_time_secs: time,
        avg_memory_delta_mb: memory,
        success_rate: success,
        accuracy_score: accuracy,
        quality_score: 0.0,
        total_queries: 10,
        failed_queries: ((1.0 - success) * 10.0).round() as usize,
    }
}

/// Fast, memory-hungry, always succeeds, less accurate.
pub fn fast_backend_metrics() -> PerformanceMetrics {
    metrics(0.5, 10.0, 1.0, 0.8)
}

/// Slow, lean, occasionally fails, more accurate.
pub fn accurate_backend_metrics() -> PerformanceMetrics {
    metrics(2.0, 5.0, 0.9, 0.9)
}

/// Metrics of a backend that failed every call.
pub fn all_failed_metrics(total: usize) -> PerformanceMetrics {
    PerformanceMetrics {
        total_queries: total,
        failed_queries: total,
        ..Default::default()
    }
}
