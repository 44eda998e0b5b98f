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


//! Document-level entry points: metrics, labels, then scoring.

use crate::engine::ScoringEngine;
use crate::error::{ScoreError, ScoreResult};
use crate::relative::ComparisonMode;
use crate::result::{BenchmarkResult, Excluded};
use cncbench_core::naming::dedupe_labels;
use cncbench_core::{compute, BenchConfig, Document, GroupMetrics};
use tracing::{debug, warn};

impl ScoringEngine {
    /// Compare exactly two documents.
    ///
    /// # Errors
    ///
    /// `NoOperations` if either document is empty. Nothing is excluded in
    /// pairwise mode.
    pub fn compare_pair(&self, a: &Document, b: &Document, config: &BenchConfig) -> ScoreResult<BenchmarkResult> {
        let threshold = config.tool_life_threshold_s;
        let first = compute(a, threshold).map_err(ScoreError::NoOperations)?;
        let second = compute(b, threshold).map_err(ScoreError::NoOperations)?;
        let mut groups = vec![first, second];
        relabel(&mut groups);
        self.evaluate(groups, ComparisonMode::Pairwise)
    }

    /// Rank any number of documents.
    ///
    /// Documents without operations are skipped with a warning and listed
    /// in [`BenchmarkResult::excluded`].
    ///
    /// # Errors
    ///
    /// `InsufficientGroups` when fewer than two documents remain.
    pub fn rank(&self, docs: &[Document], config: &BenchConfig) -> ScoreResult<BenchmarkResult> {
        let mut groups = Vec::with_capacity(docs.len());
        let mut excluded = Vec::new();
        for doc in docs {
            match compute(doc, config.tool_life_threshold_s) {
                Ok(metrics) => groups.push(metrics),
                Err(err) => {
                    warn!(document = %doc.name, error = %err, "excluding document from ranking");
                    excluded.push(Excluded {
                        name: display_name(doc),
                        reason: err.message.clone(),
                    });
                }
            }
        }
        if groups.len() < 2 {
            return Err(ScoreError::InsufficientGroups { found: groups.len() });
        }
        relabel(&mut groups);
        debug!(valid = groups.len(), excluded = excluded.len(), "ranking documents");

        let mut result = self.evaluate(groups, ComparisonMode::Ranking)?;
        result.excluded = excluded;
        Ok(result)
    }
}

fn display_name(doc: &Document) -> String {
    if doc.name.is_empty() {
        doc.source.clone().unwrap_or_default()
    } else {
        doc.name.clone()
    }
}

fn relabel(groups: &mut [GroupMetrics]) {
    let mut labels: Vec<String> = groups.iter().map(|g| g.label.clone()).collect();
    dedupe_labels(&mut labels);
    for (group, label) in groups.iter_mut().zip(labels) {
        group.label = label;
    }
}

/// Compare two documents with the default engine.
pub fn compare_pair(a: &Document, b: &Document, config: &BenchConfig) -> ScoreResult<BenchmarkResult> {
    ScoringEngine::default().compare_pair(a, b, config)
}

/// Rank documents with the default engine.
pub fn rank(docs: &[Document], config: &BenchConfig) -> ScoreResult<BenchmarkResult> {
    ScoringEngine::default().rank(docs, config)
}
