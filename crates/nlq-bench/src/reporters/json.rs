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

//! JSON export for benchmark reports.

use crate::error::Result;
use crate::reporters::types::BenchmarkReport;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;

/// Exports benchmark report as JSON.
///
/// # Arguments
///
/// * `report` - The benchmark report to export
/// * `path` - Output file path
///
/// # Returns
///
/// Result indicating success or failure.
pub fn export_json(report: &BenchmarkReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}

/// File name for a JSON report of a run started at `timestamp`.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use nlq_bench::reporters::default_json_filename;
///
/// let ts = Utc.with_ymd_and_hms(2025, 3, 7, 14, 5, 9).unwrap();
/// assert_eq!(default_json_filename(&ts), "benchmark_results_20250307_140509.json");
/// ```
pub fn default_json_filename(timestamp: &DateTime<Utc>) -> String {
    format!("benchmark_results_{}.json", timestamp.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::BenchmarkOutcome;
    use tempfile::NamedTempFile;

    #[test]
    fn test_export_json() {
        let report = BenchmarkReport::from_outcome(
            "Test",
            BenchmarkOutcome {
                runs: Vec::new(),
                iterations: 1,
                workload_size: 0,
                started_at: Utc::now(),
            },
        );
        let temp = NamedTempFile::new().unwrap();

        export_json(&report, temp.path()).unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        let parsed: BenchmarkReport = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, report);
        assert!(content.contains("\"metadata\""));
    }

    #[test]
    fn test_export_json_missing_dir() {
        let report = BenchmarkReport::from_outcome(
            "Test",
            BenchmarkOutcome {
                runs: Vec::new(),
                iterations: 1,
                workload_size: 0,
                started_at: Utc::now(),
            },
        );
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        assert!(matches!(
            export_json(&report, &path),
            Err(crate::error::BenchError::Io(_))
        ));
    }
}
