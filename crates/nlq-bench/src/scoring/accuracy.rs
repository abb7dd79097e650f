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

//! Accuracy heuristic.

use super::text::{contains_any, extract_keywords, is_blank, DIGITS};

/// Phrases that mark a response as a failure, in scan order.
pub const ERROR_INDICATORS: &[&str] = &[
    "error",
    "exception",
    "failed",
    "invalid",
    "not found",
    "syntax error",
    "table not found",
    "column not found",
];

/// Phrases that mark a valid but empty answer.
pub const NO_RESULT_INDICATORS: &[&str] = &[
    "no results found",
    "no data found",
    "empty result",
    "0 rows",
    "no records",
    "no matches",
];

/// Score returned for any response containing an error phrase.
pub const ERROR_SCORE: f64 = 0.1;

/// Estimates how accurately `response` answers `query`.
///
/// Error phrases short-circuit to [`ERROR_SCORE`]. Otherwise points are
/// awarded for a substantive (or valid-empty) answer, numeric data,
/// structural delimiters and keyword overlap with the question.
///
/// ```
/// use nlq_bench::scoring::accuracy_score;
///
/// assert_eq!(accuracy_score("How many orders?", "Error: table not found"), 0.1);
/// assert_eq!(accuracy_score("How many orders?", "   "), 0.0);
/// ```
pub fn accuracy_score(query: &str, response: &str) -> f64 {
    if is_blank(response) {
        return 0.0;
    }

    let lower = response.to_lowercase();
    if contains_any(&lower, ERROR_INDICATORS) {
        return ERROR_SCORE;
    }

    let mut score: f64 = if contains_any(&lower, NO_RESULT_INDICATORS) {
        0.3
    } else {
        0.6
    };

    if DIGITS.is_match(response) {
        score += 0.2;
    }

    if response.contains(|c| matches!(c, '|' | '\t' | '\n')) {
        score += 0.1;
    }

    let query_keywords = extract_keywords(query);
    let response_keywords = extract_keywords(response);
    let overlap = query_keywords.intersection(&response_keywords).count();
    if overlap > 0 {
        score += (overlap as f64 * 0.02).min(0.1);
    }

    score.clamp(0.0, 1.0)
}
