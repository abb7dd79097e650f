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

//! Shared text features used by the scorers.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

pub(crate) static DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+").expect("digit pattern is valid"));

pub(crate) static DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\.\d+").expect("decimal pattern is valid"));

static WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-zA-Z]+\b").expect("word pattern is valid"));

/// Words ignored when extracting keywords.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "can", "this", "that",
    "these", "those", "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us",
    "them", "my", "your", "his", "its", "our", "their",
];

/// Extracts meaningful keywords from text.
///
/// Keywords are lowercase, purely alphabetic words longer than two
/// characters that are not stop words. Words glued to digits or underscores
/// (`customer_count`, `q3`) are not keywords.
///
/// ```
/// use nlq_bench::scoring::extract_keywords;
///
/// let kw = extract_keywords("How many customers do we have?");
/// assert!(kw.contains("customers"));
/// assert!(!kw.contains("have"));
/// ```
pub fn extract_keywords(text: &str) -> BTreeSet<String> {
    let lower = text.to_lowercase();
    WORD.find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|w| w.len() > 2 && !STOP_WORDS.contains(w))
        .map(str::to_string)
        .collect()
}

/// Returns `true` for empty or whitespace-only text.
pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Returns `true` if any needle occurs in the haystack.
pub(crate) fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}
