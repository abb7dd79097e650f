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

//! Score collection for benchmark runs.
//!
//! Runs every heuristic scorer over the successful results of a backend and
//! keeps the per-result score cards together with their means.

use crate::core::QueryResult;
use crate::harness::aggregator::mean;
use crate::scoring::ScoreCard;
use serde::{Deserialize, Serialize};

/// Score cards and score means for one backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// One card per successful result, in dispatch order.
    pub cards: Vec<ScoreCard>,
    /// Mean accuracy.
    pub mean_accuracy: f64,
    /// Mean response quality.
    pub mean_quality: f64,
    /// Mean comprehensiveness.
    pub mean_comprehensiveness: f64,
    /// Mean SQL quality over results that carried a generated query.
    pub mean_sql_quality: f64,
    /// Mean overall score.
    pub mean_overall: f64,
    /// Mean backend confidence; unknown confidence counts as zero.
    pub mean_confidence: f64,
    /// Number of scored results that carried a confidence.
    #[serde(default)]
    pub known_confidences: usize,
}

impl ScoreSummary {
    /// Mean confidence for display, `n/a` when no result reported one.
    pub fn confidence_display(&self) -> String {
        if self.known_confidences == 0 {
            "n/a".to_string()
        } else {
            format!("{:.2}", self.mean_confidence)
        }
    }
}

/// Collects score cards from measured results.
pub struct ScoreCollector {
    cards: Vec<ScoreCard>,
    confidences: Vec<f64>,
    known_confidences: usize,
}

impl ScoreCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            confidences: Vec::new(),
            known_confidences: 0,
        }
    }

    /// Scores a result. Failed results are ignored.
    pub fn record(&mut self, result: &QueryResult) {
        if !result.is_success() {
            return;
        }
        self.cards.push(ScoreCard::score(result));
        self.confidences.push(result.confidence_or_zero());
        if result.confidence_score().is_some() {
            self.known_confidences += 1;
        }
    }

    /// Cards recorded so far.
    pub fn cards(&self) -> &[ScoreCard] {
        &self.cards
    }

    /// Finishes collection and computes the means.
    pub fn finish(self) -> ScoreSummary {
        let cards = self.cards;
        ScoreSummary {
            mean_accuracy: mean(cards.iter().map(|c| c.accuracy)),
            mean_quality: mean(cards.iter().map(|c| c.quality)),
            mean_comprehensiveness: mean(cards.iter().map(|c| c.comprehensiveness)),
            mean_sql_quality: mean(cards.iter().filter_map(|c| c.sql_quality)),
            mean_overall: mean(cards.iter().map(|c| c.overall)),
            mean_confidence: mean(self.confidences),
            known_confidences: self.known_confidences,
            cards,
        }
    }

    /// Scores a whole result set in one go.
    pub fn collect(results: &[QueryResult]) -> ScoreSummary {
        let mut collector = Self::new();
        for result in results {
            collector.record(result);
        }
        collector.finish()
    }
}

impl Default for ScoreCollector {
    fn default() -> Self {
        Self::new()
    }
}
