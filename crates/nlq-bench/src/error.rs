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

//! Error types for benchmark setup and report export.
//!
//! Backend failures during a measured call never surface here: the
//! measurement wrapper records them on the [`QueryResult`](crate::QueryResult)
//! instead. `BenchError` only covers what happens around a run, such as
//! invalid configuration, backend lifecycle, lookups and I/O.

use thiserror::Error;

/// Result type for benchmarking operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur while setting up, running or exporting a benchmark.
#[derive(Error, Debug)]
pub enum BenchError {
    /// Invalid configuration parameter
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// A backend refused to initialize
    #[error("Failed to initialize backend '{backend}': {reason}")]
    InitializationFailed {
        /// Backend name
        backend: String,
        /// Error reported by the backend
        reason: String,
    },

    /// Two backends were registered under the same name
    #[error("Backend '{0}' is already registered")]
    DuplicateBackend(String),

    /// A comparison referenced a backend that was not part of the run
    #[error("Unknown backend '{0}'")]
    UnknownBackend(String),

    /// I/O error while writing a report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BenchError {
    /// Shorthand for an [`BenchError::InvalidConfig`] error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        BenchError::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BenchError::invalid_config("iterations", "must be at least 1");
        let msg = format!("{}", err);
        assert!(msg.contains("iterations"));
        assert!(msg.contains("must be at least 1"));

        let err = BenchError::InitializationFailed {
            backend: "sql-agent".to_string(),
            reason: "database unreachable".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("sql-agent"));
        assert!(msg.contains("database unreachable"));
    }

    #[test]
    fn test_io_error_conversion() {
        fn write() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"))?;
            Ok(())
        }

        match write() {
            Err(BenchError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::PermissionDenied),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_errors() {
        assert_eq!(
            BenchError::UnknownBackend("rag".to_string()).to_string(),
            "Unknown backend 'rag'"
        );
        assert_eq!(
            BenchError::DuplicateBackend("rag".to_string()).to_string(),
            "Backend 'rag' is already registered"
        );
    }
}
