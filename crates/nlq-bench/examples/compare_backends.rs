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

//! Compares two toy backends over the benchmark workload.
//!
//! `rag` answers by keyword retrieval over a small document store, `sql-agent`
//! maps the question intent onto a fixed SQL statement over in-memory tables.
//!
//! ```bash
//! RUST_LOG=nlq_bench=debug cargo run --example compare_backends -- target/reports
//! ```

use nlq_bench::scoring::{classify_intent, extract_keywords, QueryIntent};
use nlq_bench::{
    BackendError, BenchConfig, BenchmarkReport, BenchmarkRunner, ExportFormat, QueryBackend,
    QueryResponse, Workload,
};
use tracing_subscriber::EnvFilter;

const DOCUMENTS: &[&str] = &[
    "Customer Alice Smith from California placed 4 orders totalling $1,240.50",
    "Customer Bob Jones from New York has 2 open support tickets",
    "Product Wireless Headphones in Electronics has an average rating of 4.5",
    "Product Standing Desk in Furniture has stock quantity 7",
    "Order 1042 for customer Carol White has status delivered, total $89.99",
    "Review of product Espresso Maker by customer Dan Brown: 5 stars, verified purchase",
];

struct KeywordRetriever {
    documents: Vec<String>,
}

impl QueryBackend for KeywordRetriever {
    fn name(&self) -> &str {
        "rag"
    }

    fn initialize(&mut self) -> Result<(), BackendError> {
        self.documents = DOCUMENTS.iter().map(|d| d.to_string()).collect();
        Ok(())
    }

    fn query(&mut self, text: &str) -> Result<QueryResponse, BackendError> {
        if self.documents.is_empty() {
            return Err(BackendError::NotInitialized("rag".to_string()));
        }

        let wanted = extract_keywords(text);
        let mut ranked: Vec<(usize, &String)> = self
            .documents
            .iter()
            .map(|doc| (extract_keywords(doc).intersection(&wanted).count(), doc))
            .filter(|(hits, _)| *hits > 0)
            .collect();
        ranked.sort_by(|a, b| b.0.cmp(&a.0));
        ranked.truncate(3);

        if ranked.is_empty() {
            return Ok(QueryResponse::new("No matching records were found.").with_confidence(0.1));
        }

        let best = ranked[0].0 as f64 / wanted.len().max(1) as f64;
        let sources: Vec<String> = ranked.iter().map(|(_, doc)| (*doc).clone()).collect();
        let answer = format!(
            "Based on {} matching records:\n{}",
            sources.len(),
            sources.join("\n")
        );
        Ok(QueryResponse::new(answer)
            .with_confidence(best)
            .with_sources(sources))
    }

    fn cleanup(&mut self) {
        self.documents.clear();
    }
}

struct TemplateSqlAgent {
    order_totals: Vec<f64>,
    customers: usize,
}

impl QueryBackend for TemplateSqlAgent {
    fn name(&self) -> &str {
        "sql-agent"
    }

    fn initialize(&mut self) -> Result<(), BackendError> {
        self.order_totals = vec![1240.50, 89.99, 310.00, 45.25, 780.10];
        self.customers = 4;
        Ok(())
    }

    fn query(&mut self, text: &str) -> Result<QueryResponse, BackendError> {
        let total: f64 = self.order_totals.iter().sum();
        let (sql, answer) = match classify_intent(text) {
            QueryIntent::Count => (
                "SELECT COUNT(*) AS total FROM customers".to_string(),
                format!("Query Results:\n\ntotal\n----\n{}", self.customers),
            ),
            QueryIntent::Sum => (
                "SELECT SUM(total_amount) AS revenue FROM orders WHERE status = 'delivered'"
                    .to_string(),
                format!("Query Results:\n\nrevenue\n----\n{:.2}", total),
            ),
            QueryIntent::Average => (
                "SELECT AVG(total_amount) AS avg_order FROM orders".to_string(),
                format!(
                    "Query Results:\n\navg_order\n----\n{:.2}",
                    total / self.order_totals.len().max(1) as f64
                ),
            ),
            QueryIntent::List => (
                "SELECT id, total_amount FROM orders ORDER BY total_amount DESC LIMIT 5"
                    .to_string(),
                self.order_totals
                    .iter()
                    .enumerate()
                    .map(|(i, t)| format!("{} | {:.2}", i + 1, t))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            QueryIntent::Search | QueryIntent::General => {
                return Err(BackendError::query(
                    "could not map the question onto the schema",
                ))
            }
        };

        Ok(QueryResponse::new(answer)
            .with_confidence(0.9)
            .with_generated_query(sql))
    }

    fn cleanup(&mut self) {
        self.order_totals.clear();
    }
}

fn main() -> nlq_bench::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("nlq_bench=info".parse().expect("valid log directive")),
        )
        .with_writer(std::io::stderr)
        .init();

    let output_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "target/nlq-bench-reports".to_string());
    let config = BenchConfig::new(3)
        .with_title("RAG vs SQL Agent")
        .with_output_dir(output_dir)
        .with_export_format(ExportFormat::Markdown);
    config.validate()?;

    let mut runner = BenchmarkRunner::new(config.clone());
    runner.register(Box::new(KeywordRetriever {
        documents: Vec::new(),
    }))?;
    runner.register(Box::new(TemplateSqlAgent {
        order_totals: Vec::new(),
        customers: 0,
    }))?;
    runner.initialize_all()?;

    let workload = Workload::benchmark();
    let outcome = runner.run(workload.texts());
    runner.cleanup_all();

    let comparison = outcome.compare("rag", "sql-agent")?;
    let report = BenchmarkReport::from_outcome(&config.title, outcome)
        .with_comparison(comparison)
        .with_category_breakdown(&workload);

    for path in nlq_bench::write_reports(&report, &config)? {
        tracing::info!(path = %path.display(), "report written");
    }
    Ok(())
}
