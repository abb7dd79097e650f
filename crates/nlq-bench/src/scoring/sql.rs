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

//! Well-formedness heuristic for generated SQL.

use super::text::is_blank;
use once_cell::sync::Lazy;
use regex::Regex;

/// Tables of the benchmark schema.
pub const KNOWN_TABLES: &[&str] = &[
    "customers",
    "orders",
    "products",
    "reviews",
    "support_tickets",
    "order_items",
];

/// Clause keywords and the credit each earns.
const CLAUSE_CREDITS: &[(&str, f64)] = &[
    ("join", 0.1),
    ("where", 0.1),
    ("group by", 0.1),
    ("order by", 0.1),
    ("limit", 0.05),
];

/// Penalty per anti-pattern found.
const ANTI_PATTERN_PENALTY: f64 = 0.1;

static ANTI_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [r"select\s+\*", r";\s*;", r"from\s+from", r"where\s+where"]
        .iter()
        .map(|p| Regex::new(p).expect("anti-pattern is valid"))
        .collect()
});

/// Scores a generated SQL statement.
///
/// Statements without `select` are not retrieval queries and score zero.
///
/// ```
/// use nlq_bench::scoring::sql_quality_score;
///
/// let sloppy = sql_quality_score("SELECT * FROM products;;");
/// let tidy = sql_quality_score("SELECT name FROM products WHERE price > 10 LIMIT 5");
/// assert!(sloppy < tidy);
/// assert_eq!(sql_quality_score("DELETE FROM orders"), 0.0);
/// ```
pub fn sql_quality_score(generated_query: &str) -> f64 {
    if is_blank(generated_query) {
        return 0.0;
    }

    let sql = generated_query.to_lowercase();
    if !sql.contains("select") {
        return 0.0;
    }

    let mut score: f64 = 0.3;

    if sql.contains("from") {
        score += 0.2;
    }

    if KNOWN_TABLES.iter().any(|table| sql.contains(table)) {
        score += 0.2;
    }

    score += CLAUSE_CREDITS
        .iter()
        .filter(|(keyword, _)| sql.contains(keyword))
        .map(|(_, credit)| credit)
        .sum::<f64>();

    let violations = ANTI_PATTERNS.iter().filter(|p| p.is_match(&sql)).count();
    score -= violations as f64 * ANTI_PATTERN_PENALTY;

    score.clamp(0.0, 1.0)
}
