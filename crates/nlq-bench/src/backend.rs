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

//! Backend contract for systems under test.
//!
//! A backend is anything that answers a natural-language question: a
//! retrieval-plus-generation pipeline, a text-to-SQL agent, a canned replay.
//! The harness only needs three lifecycle operations, so the contract is a
//! trait rather than a shared base type. Timing, memory sampling and failure
//! capture all live in the [`Measurer`](crate::core::Measurer).
//!
//! # Example
//!
//! ```
//! use nlq_bench::{BackendError, QueryBackend, QueryResponse};
//!
//! struct Echo;
//!
//! impl QueryBackend for Echo {
//!     fn name(&self) -> &str {
//!         "echo"
//!     }
//!
//!     fn initialize(&mut self) -> Result<(), BackendError> {
//!         Ok(())
//!     }
//!
//!     fn query(&mut self, text: &str) -> Result<QueryResponse, BackendError> {
//!         Ok(QueryResponse::new(format!("You asked: {}", text)))
//!     }
//!
//!     fn cleanup(&mut self) {}
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors a backend may return from [`QueryBackend::initialize`] or
/// [`QueryBackend::query`].
#[derive(Error, Debug)]
pub enum BackendError {
    /// The query could not be answered.
    #[error("{0}")]
    Query(String),

    /// The backend was queried before a successful `initialize`.
    #[error("Backend not initialized: {0}")]
    NotInitialized(String),

    /// A dependency (model, vector store, database) is unavailable.
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    /// Any other error raised by the backend's own stack.
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl BackendError {
    /// Creates a [`BackendError::Query`] from a message.
    pub fn query(message: impl Into<String>) -> Self {
        BackendError::Query(message.into())
    }
}

/// The part of a query result a backend is allowed to produce.
///
/// There are deliberately no timing or memory fields here: the measurement
/// wrapper is the only authority for those.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Textual answer.
    pub response: String,
    /// Backend-supplied certainty estimate in [0, 1].
    pub confidence_score: Option<f64>,
    /// Retrieved context snippets, in rank order.
    pub source_documents: Option<Vec<String>>,
    /// Structured query the backend generated and executed.
    pub generated_query: Option<String>,
}

impl QueryResponse {
    /// Creates a response carrying only answer text.
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            ..Self::default()
        }
    }

    /// Attaches a confidence estimate, clamped to [0, 1].
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence_score = Some(confidence.clamp(0.0, 1.0));
        self
    }

    /// Attaches retrieved source snippets.
    pub fn with_sources<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_documents = Some(sources.into_iter().map(Into::into).collect());
        self
    }

    /// Attaches the generated structured query.
    pub fn with_generated_query(mut self, query: impl Into<String>) -> Self {
        self.generated_query = Some(query.into());
        self
    }
}

/// A pluggable natural-language query backend.
pub trait QueryBackend {
    /// Stable display name, used as the winner label in comparisons.
    fn name(&self) -> &str;

    /// Loads models, opens connections, builds indexes.
    fn initialize(&mut self) -> Result<(), BackendError>;

    /// Answers one question.
    ///
    /// Implementations either return a populated [`QueryResponse`] or an
    /// error; they never report timing themselves.
    fn query(&mut self, text: &str) -> Result<QueryResponse, BackendError>;

    /// Releases resources acquired in `initialize`.
    fn cleanup(&mut self);
}
