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

//! Comprehensiveness heuristic: does the response address the question's
//! intent and the entities it mentions?

use super::text::{contains_any, is_blank, DECIMAL, DIGITS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Entity words credited when they appear in both query and response.
pub const ENTITY_KEYWORDS: &[&str] = &["customer", "order", "product"];

/// Coarse intent of a natural-language question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryIntent {
    /// "How many ...", "count of ..."
    Count,
    /// "List ...", "show ..."
    List,
    /// "Average ...", "mean ..."
    Average,
    /// "Total revenue ...", "sum of ..."
    Sum,
    /// "Find ...", "locate ..."
    Search,
    /// Anything else.
    General,
}

impl QueryIntent {
    /// Keyword rules in priority order; the first rule that matches wins.
    const RULES: &'static [(QueryIntent, &'static [&'static str])] = &[
        (
            QueryIntent::Count,
            &["how many", "count", "number of", "total number"],
        ),
        (QueryIntent::List, &["list", "show", "display", "all"]),
        (QueryIntent::Average, &["average", "avg", "mean"]),
        (QueryIntent::Sum, &["sum", "total", "revenue", "amount"]),
        (QueryIntent::Search, &["find", "search", "locate"]),
    ];

    /// Returns the intent as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryIntent::Count => "count",
            QueryIntent::List => "list",
            QueryIntent::Average => "average",
            QueryIntent::Sum => "sum",
            QueryIntent::Search => "search",
            QueryIntent::General => "general",
        }
    }
}

impl fmt::Display for QueryIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a question by substring keyword matching.
///
/// Matching is on raw substrings, so "small" counts as containing "all".
pub fn classify_intent(query: &str) -> QueryIntent {
    let lower = query.to_lowercase();
    QueryIntent::RULES
        .iter()
        .find(|(_, keywords)| contains_any(&lower, keywords))
        .map(|(intent, _)| *intent)
        .unwrap_or(QueryIntent::General)
}

/// Scores how completely `response` covers what `query` asked for.
pub fn comprehensiveness_score(query: &str, response: &str) -> f64 {
    if is_blank(response) {
        return 0.0;
    }

    let query_lower = query.to_lowercase();
    let response_lower = response.to_lowercase();
    let mut score: f64 = 0.0;

    match classify_intent(query) {
        QueryIntent::Count => {
            if contains_any(&response_lower, &["count", "total", "number", "amount"]) {
                score += 0.5;
            }
            if DIGITS.is_match(response) {
                score += 0.3;
            }
        }
        QueryIntent::List => {
            if contains_any(&response_lower, &["list", "show", "display", "all"]) {
                score += 0.4;
            }
            if response.contains(|c| matches!(c, '\n' | '|')) {
                score += 0.3;
            }
        }
        QueryIntent::Average => {
            if contains_any(&response_lower, &["average", "avg", "mean"]) {
                score += 0.5;
            }
            if DECIMAL.is_match(response) {
                score += 0.3;
            }
        }
        QueryIntent::Sum => {
            if contains_any(&response_lower, &["sum", "total", "amount", "revenue"]) {
                score += 0.5;
            }
            if DIGITS.is_match(response) {
                score += 0.3;
            }
        }
        QueryIntent::Search | QueryIntent::General => {}
    }

    for entity in ENTITY_KEYWORDS {
        if query_lower.contains(entity) && response_lower.contains(entity) {
            score += 0.2;
        }
    }

    score.min(1.0)
}
