// Dweve CNCBench - CNC Operation Sheet Benchmarking
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


//! CLI command implementations

mod benchmark;
mod completion;
mod inspect;
mod report;

pub use benchmark::{compare, rank, BenchOptions};
pub use completion::{generate_completion_for_command, print_installation_instructions};
pub use inspect::inspect;
pub use report::{render_json, render_text};

use crate::error::CliError;
use cncbench::BenchConfig;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Default maximum file size (1 GB).
/// Can be overridden via CNCBENCH_MAX_FILE_SIZE environment variable
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Extension of extracted setup-sheet text files.
pub const SHEET_EXTENSION: &str = "txt";

/// Output format of reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colored console tables
    #[default]
    Text,
    /// The full benchmark result as pretty JSON
    Json,
}

fn get_max_file_size() -> u64 {
    std::env::var("CNCBENCH_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a text file, rejecting files above the size limit before reading.
///
/// # Errors
///
/// Returns `Err` if:
/// - The file metadata cannot be accessed
/// - The file is larger than `CNCBENCH_MAX_FILE_SIZE` (default 1 GB)
/// - The file cannot be read or is not UTF-8
///
/// # Examples
///
/// ```no_run
/// use cncbench_cli::commands::read_file;
///
/// let text = read_file("NC02.txt").unwrap();
/// assert!(!text.is_empty());
/// ```
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Expand files and directories into a list of sheet files.
///
/// A directory contributes every `.txt` file (any case) directly inside it, sorted by
/// name. Paths that resolve to the same file are kept once, at their first
/// position.
pub fn collect_inputs(args: &[String]) -> Result<Vec<PathBuf>, CliError> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for arg in args {
        let path = Path::new(arg);
        let candidates = if path.is_dir() {
            let mut entries: Vec<PathBuf> = fs::read_dir(path)
                .map_err(|e| CliError::io_error(path, e))?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| {
                    p.is_file()
                        && p.extension()
                            .is_some_and(|ext| ext.eq_ignore_ascii_case(SHEET_EXTENSION))
                })
                .collect();
            entries.sort();
            entries
        } else {
            vec![path.to_path_buf()]
        };

        for candidate in candidates {
            let canonical = candidate
                .canonicalize()
                .map_err(|e| CliError::io_error(&candidate, e))?;
            if seen.insert(canonical) {
                files.push(candidate);
            } else {
                tracing::warn!(path = %candidate.display(), "skipping duplicate input");
            }
        }
    }

    Ok(files)
}

/// Source name of a sheet file: its stem, so directories never leak into
/// group names.
pub fn source_name(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

/// Build the benchmark configuration from a tool life in minutes.
pub fn bench_config(tool_life_minutes: u64) -> Result<BenchConfig, CliError> {
    Ok(BenchConfig::from_minutes(tool_life_minutes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_inputs_sorts_and_dedupes() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.txt", "a.txt", "C.TXT", "notes.md"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        let dir_arg = dir.path().to_string_lossy().to_string();
        let a_arg = dir.path().join("a.txt").to_string_lossy().to_string();

        let files = collect_inputs(&[a_arg, dir_arg]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.txt", "C.TXT", "b.txt"]);
    }

    #[test]
    fn test_collect_inputs_missing_path() {
        let err = collect_inputs(&["/nonexistent/NC02.txt".to_string()]).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }

    #[test]
    fn test_bench_config_rejects_zero() {
        assert!(matches!(bench_config(0), Err(CliError::InvalidInput(_))));
        assert_eq!(bench_config(30).unwrap().tool_life_threshold_s, 1800);
    }

    #[test]
    fn test_source_name_is_file_stem() {
        assert_eq!(source_name("/tmp/NC01_batch/plate.txt"), "plate");
        assert_eq!(source_name("GR07_plate.TXT"), "GR07_plate");
        assert_eq!(source_name("NC02"), "NC02");
    }

    #[test]
    fn test_read_file_missing() {
        assert!(read_file("/nonexistent/NC02.txt").is_err());
    }
}
