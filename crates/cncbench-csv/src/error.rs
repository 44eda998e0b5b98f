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


//! Error types for CSV report generation.

use thiserror::Error;

/// CSV report error types.
///
/// # Examples
///
/// ```
/// use cncbench_csv::ReportError;
///
/// let err = ReportError::Write {
///     table: "scorecard".to_string(),
///     message: "broken pipe".to_string(),
/// };
/// assert_eq!(err.to_string(), "failed to write scorecard table: broken pipe");
/// ```
#[derive(Debug, Error)]
pub enum ReportError {
    /// The CSV writer rejected a record.
    #[error("failed to write {table} table: {message}")]
    Write {
        /// Table being written.
        table: String,
        message: String,
    },

    /// Creating the report directory or a report file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output bytes were not valid UTF-8.
    #[error("invalid UTF-8 in {context}")]
    InvalidUtf8 {
        /// Where the bytes came from.
        context: String,
    },
}

impl ReportError {
    pub(crate) fn write(table: &str, err: impl std::fmt::Display) -> Self {
        Self::Write {
            table: table.to_string(),
            message: err.to_string(),
        }
    }
}

/// Result type for report generation.
pub type Result<T> = std::result::Result<T, ReportError>;
