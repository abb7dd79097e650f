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

//! Response quality heuristic: formatting, structure and precision.

use super::text::{is_blank, DECIMAL};
use once_cell::sync::Lazy;
use regex::Regex;

static HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[A-Z][^:]*:").expect("header pattern is valid"));

static DATE_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"\d{4}-\d{2}-\d{2}").expect("ISO date pattern is valid"),
        Regex::new(r"\d{2}/\d{2}/\d{4}").expect("US date pattern is valid"),
        Regex::new(r"\w+ \d{1,2}, \d{4}").expect("long date pattern is valid"),
    ]
});

/// Responses in this character range get the full length bonus.
const PREFERRED_LENGTH: std::ops::RangeInclusive<usize> = 50..=2000;

/// Scores how well a response is presented.
///
/// ```
/// use nlq_bench::scoring::quality_score;
///
/// assert_eq!(quality_score(""), 0.0);
/// assert!(quality_score("Total: $1,234.50 as of 2024-01-31") > 0.5);
/// ```
pub fn quality_score(response: &str) -> f64 {
    if is_blank(response) {
        return 0.0;
    }

    let mut score: f64 = 0.3;

    if response.contains(|c| matches!(c, '|' | '\t')) {
        score += 0.2;
    } else if response.matches('\n').count() > 2 {
        score += 0.1;
    }

    if HEADER.is_match(response) {
        score += 0.1;
    }

    if DECIMAL.is_match(response) {
        score += 0.1;
    }

    if response.contains('$') || response.contains("USD") {
        score += 0.1;
    }

    if DATE_PATTERNS.iter().any(|p| p.is_match(response)) {
        score += 0.1;
    }

    let length = response.chars().count();
    if PREFERRED_LENGTH.contains(&length) {
        score += 0.1;
    } else if length > *PREFERRED_LENGTH.end() {
        score += 0.05;
    }

    score.clamp(0.0, 1.0)
}
