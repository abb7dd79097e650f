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

//! Centralized benchmark configuration.
//!
//! Provides standardized configuration for a benchmark run: iteration count,
//! an optional per-call deadline, and where and how reports are exported.

use crate::error::{BenchError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default number of full workload passes per backend.
pub const DEFAULT_ITERATIONS: usize = 3;

/// Default report title.
pub const DEFAULT_TITLE: &str = "Natural-Language Query Backend Comparison";

/// Export format options for benchmark reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// JSON format for machine-readable reports.
    Json,
    /// Markdown format for documentation.
    Markdown,
    /// Console output for immediate feedback.
    Console,
}

/// Centralized benchmark configuration.
///
/// # Example
///
/// ```
/// use nlq_bench::core::config::{BenchConfig, ExportFormat};
/// use std::time::Duration;
///
/// let config = BenchConfig::default()
///     .with_iterations(5)
///     .with_deadline(Duration::from_secs(30))
///     .with_export_format(ExportFormat::Markdown);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Report title.
    pub title: String,
    /// Full passes over the workload per backend.
    pub iterations: usize,
    /// Calls that take longer than this are recorded as failed.
    ///
    /// `None` (the default) keeps the unbounded behaviour.
    pub deadline: Option<Duration>,
    /// Directory report files are written to.
    pub output_dir: PathBuf,
    /// Export formats for reports.
    pub export_formats: Vec<ExportFormat>,
}

impl BenchConfig {
    /// Creates a configuration with the given iteration count and defaults
    /// for everything else.
    pub fn new(iterations: usize) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            iterations,
            deadline: None,
            output_dir: PathBuf::from("."),
            export_formats: vec![ExportFormat::Console, ExportFormat::Json],
        }
    }

    /// Sets the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the iteration count.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the per-call deadline.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets the report output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Adds an export format.
    pub fn with_export_format(mut self, format: ExportFormat) -> Self {
        if !self.export_formats.contains(&format) {
            self.export_formats.push(format);
        }
        self
    }

    /// Sets all export formats.
    pub fn with_export_formats(mut self, formats: Vec<ExportFormat>) -> Self {
        self.export_formats = formats;
        self
    }

    /// Returns whether a specific export format is enabled.
    pub fn has_format(&self, format: ExportFormat) -> bool {
        self.export_formats.contains(&format)
    }

    /// Checks the configuration for values a run cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(BenchError::invalid_config(
                "iterations",
                "must be at least 1",
            ));
        }
        if self.deadline == Some(Duration::ZERO) {
            return Err(BenchError::invalid_config(
                "deadline",
                "must be greater than zero when set",
            ));
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BenchConfig::default();
        assert_eq!(config.iterations, DEFAULT_ITERATIONS);
        assert!(config.deadline.is_none());
        assert!(config.has_format(ExportFormat::Console));
        assert!(config.has_format(ExportFormat::Json));
        assert!(!config.has_format(ExportFormat::Markdown));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let err = BenchConfig::default().with_iterations(0).validate().unwrap_err();
        match err {
            BenchError::InvalidConfig { parameter, .. } => assert_eq!(parameter, "iterations"),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_deadline_rejected() {
        let config = BenchConfig::default().with_deadline(Duration::ZERO);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_export_format_dedup() {
        let config = BenchConfig::default()
            .with_export_format(ExportFormat::Json)
            .with_export_format(ExportFormat::Markdown);
        assert_eq!(config.export_formats.len(), 3);
    }

    #[test]
    fn test_config_serde() {
        let config = BenchConfig::default().with_deadline(Duration::from_millis(1500));
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"json\""));
        let back: BenchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
