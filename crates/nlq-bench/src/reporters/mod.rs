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

//! Benchmark reporters for various output formats.
//!
//! # Modules
//!
//! - `types`: Report data structures
//! - `console`: Console output formatting
//! - `json`: JSON export
//! - `markdown`: Markdown export

pub mod console;
pub mod json;
pub mod markdown;
pub mod types;

pub use console::{print_report, render_report};
pub use json::{default_json_filename, export_json};
pub use markdown::{default_markdown_filename, export_markdown, render_markdown};
pub use types::{BenchmarkReport, RunMetadata};

use crate::core::config::{BenchConfig, ExportFormat};
use crate::error::Result;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Produces every export format selected in `config`.
///
/// Files go to `config.output_dir`, which is created if missing, and are
/// named after the run's start time.
///
/// # Returns
///
/// Paths of the files written. Console output writes no file.
pub fn write_reports(report: &BenchmarkReport, config: &BenchConfig) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    let timestamp = &report.metadata.timestamp;

    for format in &config.export_formats {
        match format {
            ExportFormat::Console => print_report(report),
            ExportFormat::Json => {
                fs::create_dir_all(&config.output_dir)?;
                let path = config.output_dir.join(default_json_filename(timestamp));
                export_json(report, &path)?;
                info!(path = %path.display(), "wrote JSON report");
                written.push(path);
            }
            ExportFormat::Markdown => {
                fs::create_dir_all(&config.output_dir)?;
                let path = config.output_dir.join(default_markdown_filename(timestamp));
                export_markdown(report, &path)?;
                info!(path = %path.display(), "wrote Markdown report");
                written.push(path);
            }
        }
    }

    Ok(written)
}
