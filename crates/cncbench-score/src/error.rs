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


//! Error types for scoring.

use cncbench_core::CncError;
use thiserror::Error;

/// Errors raised while building an engine or scoring groups.
#[derive(Debug, Clone, Error)]
pub enum ScoreError {
    /// A document had no operations where that is fatal.
    #[error("{0}")]
    NoOperations(CncError),

    /// Fewer than two groups with operations remained.
    #[error("at least two valid groups are required for a comparison, found {found}")]
    InsufficientGroups { found: usize },

    /// Pairwise mode was asked to score other than two groups.
    #[error("pairwise comparison requires exactly two groups, found {found}")]
    PairwiseArity { found: usize },

    /// Category weights are out of range or do not sum to one.
    #[error("invalid category weights: {0}")]
    InvalidWeights(String),

    /// A weighted category has no driver to score it.
    #[error("category '{0}' carries weight but has no driver")]
    EmptyCategory(String),
}

impl ScoreError {
    pub fn invalid_weights(message: impl Into<String>) -> Self {
        Self::InvalidWeights(message.into())
    }
}

/// Result type for scoring.
pub type ScoreResult<T> = Result<T, ScoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_operations_keeps_core_message() {
        let err = ScoreError::NoOperations(CncError::no_operations("NC02"));
        assert!(err.to_string().contains("NoOperationsFound"));
        assert!(err.to_string().contains("NC02"));
    }

    #[test]
    fn test_insufficient_groups_message() {
        let err = ScoreError::InsufficientGroups { found: 1 };
        assert_eq!(
            err.to_string(),
            "at least two valid groups are required for a comparison, found 1"
        );
    }
}
