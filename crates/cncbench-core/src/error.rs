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

//! Error types for setup-sheet processing.
//!
//! Parsing itself never fails: missing fields resolve to documented defaults.
//! Errors only arise when a parsed document cannot be measured (no operations)
//! or when configuration is out of range.

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CncErrorKind {
    /// The document produced zero operations.
    NoOperations,
    /// Invalid configuration value (threshold, weights, dialect).
    Config,
    /// I/O error while reading an input.
    IO,
}

impl fmt::Display for CncErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoOperations => write!(f, "NoOperationsFound"),
            Self::Config => write!(f, "ConfigError"),
            Self::IO => write!(f, "IOError"),
        }
    }
}

/// An error raised by the core crate.
#[derive(Debug, Clone, Error)]
#[error("{kind}: {message}")]
pub struct CncError {
    /// The kind of error.
    pub kind: CncErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Additional context (e.g., the document or file involved).
    pub context: Option<String>,
}

impl CncError {
    /// Create a new error.
    pub fn new(kind: CncErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: None,
        }
    }

    /// Add context information.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// No operation could be extracted from the named document.
    pub fn no_operations(document: &str) -> Self {
        Self::new(
            CncErrorKind::NoOperations,
            format!("no operations found in '{}'", document),
        )
        .with_context(document)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(CncErrorKind::Config, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(CncErrorKind::IO, message)
    }

    /// Whether this error means the document was empty of operations.
    pub fn is_no_operations(&self) -> bool {
        self.kind == CncErrorKind::NoOperations
    }
}

/// Result type for core operations.
pub type CncResult<T> = Result<T, CncError>;
