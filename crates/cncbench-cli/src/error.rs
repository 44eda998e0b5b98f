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


//! Structured error types for the CNCBench CLI.
//!
//! Command internals return `Result<T, CliError>`; the dispatcher turns the
//! error into its message.

use cncbench::csv_report::ReportError;
use cncbench::{CncError, ScoreError};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for CNCBench CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use cncbench_cli::error::CliError;
///
/// fn read(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, write, directory listing).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the configured limit.
    #[error(
        "File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB). \
         Set CNCBENCH_MAX_FILE_SIZE (in bytes) to raise the limit."
    )]
    FileTooLarge {
        path: PathBuf,
        actual: u64,
        max: u64,
        /// The maximum in MB (for display)
        max_mb: u64,
    },

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Scoring could not produce a result.
    #[error("Benchmark error: {0}")]
    Benchmark(String),

    /// Writing the CSV report failed.
    #[error("Report error: {0}")]
    Report(String),

    /// JSON serialization error.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },
}

impl CliError {
    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<ScoreError> for CliError {
    fn from(source: ScoreError) -> Self {
        Self::Benchmark(source.to_string())
    }
}

impl From<ReportError> for CliError {
    fn from(source: ReportError) -> Self {
        Self::Report(source.to_string())
    }
}

// Configuration errors are the only core errors the CLI sees.
impl From<CncError> for CliError {
    fn from(source: CncError) -> Self {
        Self::InvalidInput(source.message)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CliError::io_error("NC02.txt", io::Error::new(io::ErrorKind::NotFound, "file not found"));
        let msg = err.to_string();
        assert!(msg.contains("NC02.txt"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_file_too_large_display() {
        let err = CliError::file_too_large("big.txt", 200_000_000, 100 * 1024 * 1024);
        let msg = err.to_string();
        assert!(msg.contains("big.txt"));
        assert!(msg.contains("200000000 bytes"));
        assert!(msg.contains("100 MB"));
        assert!(msg.contains("CNCBENCH_MAX_FILE_SIZE"));
    }

    #[test]
    fn test_score_error_conversion() {
        let err: CliError = ScoreError::InsufficientGroups { found: 1 }.into();
        assert!(matches!(err, CliError::Benchmark(_)));
        assert!(err.to_string().contains("found 1"));
    }

    #[test]
    fn test_config_error_is_invalid_input() {
        let err: CliError = CncError::config("tool life threshold must be greater than zero").into();
        assert_eq!(
            err.to_string(),
            "Invalid input: tool life threshold must be greater than zero"
        );
    }

    #[test]
    fn test_json_format_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let cli_err: CliError = json_err.into();
        assert!(matches!(cli_err, CliError::JsonFormat { .. }));
    }
}
