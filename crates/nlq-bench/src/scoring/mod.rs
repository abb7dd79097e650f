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

//! Heuristic scorers.
//!
//! There is no labeled answer set for free-form business questions, so
//! responses are graded from surface features: numerals, table formatting,
//! keyword overlap, error phrases. Every scorer is a pure function of its
//! text inputs and returns a value in `[0, 1]`, which keeps benchmark runs
//! reproducible.
//!
//! The heuristics are a fixed, documented methodology. Comparisons are only
//! meaningful relative to it, so changes here invalidate earlier reports.
//!
//! # Modules
//!
//! - `accuracy`: error short-circuit, substance, numerals, keyword overlap
//! - `quality`: formatting, headers, precision, dates, length
//! - `comprehensiveness`: intent classification and entity coverage
//! - `sql`: well-formedness of generated SQL
//! - `text`: keyword extraction and shared patterns

pub mod accuracy;
pub mod comprehensiveness;
pub mod quality;
pub mod sql;
pub mod text;

pub use accuracy::accuracy_score;
pub use comprehensiveness::{classify_intent, comprehensiveness_score, QueryIntent};
pub use quality::quality_score;
pub use sql::sql_quality_score;
pub use text::extract_keywords;

use crate::core::QueryResult;
use serde::{Deserialize, Serialize};

/// Weight of accuracy in [`overall_score`].
pub const ACCURACY_WEIGHT: f64 = 0.4;
/// Weight of response quality in [`overall_score`].
pub const QUALITY_WEIGHT: f64 = 0.3;
/// Weight of comprehensiveness in [`overall_score`].
pub const COMPREHENSIVENESS_WEIGHT: f64 = 0.2;
/// Weight of SQL quality in [`overall_score`].
pub const SQL_QUALITY_WEIGHT: f64 = 0.1;

/// Combines the individual scores with fixed weights, capped at 1.0.
///
/// Backends that generate no SQL pass `0.0` for `sql_quality`.
pub fn overall_score(accuracy: f64, quality: f64, comprehensiveness: f64, sql_quality: f64) -> f64 {
    let weighted = accuracy * ACCURACY_WEIGHT
        + quality * QUALITY_WEIGHT
        + comprehensiveness * COMPREHENSIVENESS_WEIGHT
        + sql_quality * SQL_QUALITY_WEIGHT;
    weighted.min(1.0)
}

/// All heuristic scores for one successful result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    /// Question the scores refer to.
    pub query: String,
    /// Intent the question was classified as.
    pub intent: QueryIntent,
    /// [`accuracy_score`] output.
    pub accuracy: f64,
    /// [`quality_score`] output.
    pub quality: f64,
    /// [`comprehensiveness_score`] output.
    pub comprehensiveness: f64,
    /// [`sql_quality_score`] of the generated query, if there was one.
    pub sql_quality: Option<f64>,
    /// [`overall_score`] of the above.
    pub overall: f64,
}

impl ScoreCard {
    /// Runs every scorer over a result.
    pub fn score(result: &QueryResult) -> Self {
        let query = result.query();
        let response = result.response();

        let accuracy = accuracy_score(query, response);
        let quality = quality_score(response);
        let comprehensiveness = comprehensiveness_score(query, response);
        let sql_quality = result.generated_query().map(sql_quality_score);
        let overall = overall_score(
            accuracy,
            quality,
            comprehensiveness,
            sql_quality.unwrap_or(0.0),
        );

        Self {
            query: query.to_string(),
            intent: classify_intent(query),
            accuracy,
            quality,
            comprehensiveness,
            sql_quality,
            overall,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::QueryResponse;

    #[test]
    fn test_overall_weights() {
        assert!((overall_score(1.0, 0.0, 0.0, 0.0) - 0.4).abs() < 1e-9);
        assert!((overall_score(0.0, 1.0, 0.0, 0.0) - 0.3).abs() < 1e-9);
        assert!((overall_score(0.0, 0.0, 1.0, 0.0) - 0.2).abs() < 1e-9);
        assert!((overall_score(0.0, 0.0, 0.0, 1.0) - 0.1).abs() < 1e-9);
        assert!(overall_score(1.0, 1.0, 1.0, 1.0) <= 1.0);
        assert_eq!(overall_score(0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_score_card_with_sql() {
        let result = QueryResult::from_response(
            "How many customers do we have?",
            QueryResponse::new("Query Results:\n\ncustomer_count\n----\n42")
                .with_generated_query("SELECT COUNT(*) AS customer_count FROM customers"),
            0.2,
            1.0,
        );

        let card = ScoreCard::score(&result);
        assert_eq!(card.intent, QueryIntent::Count);
        assert!(card.accuracy >= 0.9 - 1e-9);
        assert!(card.quality >= 0.5 - 1e-9);
        assert!(card.sql_quality.is_some());
        assert!(card.overall > 0.0 && card.overall <= 1.0);
    }

    #[test]
    fn test_score_card_without_sql() {
        let result = QueryResult::success("List products", "Nothing to show", 0.1, 0.0);
        let card = ScoreCard::score(&result);
        assert!(card.sql_quality.is_none());
    }
}
