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


//! Scoring engine.

use crate::category::{Category, CategoryWeights};
use crate::drivers::{default_drivers, DriverRule};
use crate::error::{ScoreError, ScoreResult};
use crate::relative::{round1, ComparisonMode};
use crate::result::{BenchmarkResult, Driver};
use cncbench_core::GroupMetrics;
use std::collections::BTreeMap;
use tracing::debug;

/// Scores groups of metrics with a driver catalog and a weight table.
pub struct ScoringEngine {
    weights: CategoryWeights,
    drivers: Vec<Box<dyn DriverRule>>,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(CategoryWeights::default())
    }
}

impl ScoringEngine {
    /// Create an engine with the built-in catalog.
    pub fn new(weights: CategoryWeights) -> Self {
        Self {
            weights,
            drivers: default_drivers(),
        }
    }

    /// Create an engine with a custom catalog.
    ///
    /// # Errors
    ///
    /// `EmptyCategory` when a category with non-zero weight has no driver.
    pub fn with_drivers(weights: CategoryWeights, drivers: Vec<Box<dyn DriverRule>>) -> ScoreResult<Self> {
        let engine = Self { weights, drivers };
        engine.validate()?;
        Ok(engine)
    }

    /// Add a driver after the existing ones.
    pub fn add_driver(&mut self, driver: Box<dyn DriverRule>) {
        self.drivers.push(driver);
    }

    pub fn weights(&self) -> &CategoryWeights {
        &self.weights
    }

    pub fn driver_ids(&self) -> Vec<&str> {
        self.drivers.iter().map(|d| d.id()).collect()
    }

    fn validate(&self) -> ScoreResult<()> {
        for (category, weight) in self.weights.iter() {
            if weight > 0.0 && !self.drivers.iter().any(|d| d.category() == category) {
                return Err(ScoreError::EmptyCategory(category.label().to_string()));
            }
        }
        Ok(())
    }

    /// Score groups and rank them.
    ///
    /// # Errors
    ///
    /// - `InsufficientGroups` with fewer than two groups
    /// - `PairwiseArity` in pairwise mode with other than two groups
    /// - `EmptyCategory` when a weighted category has no driver
    pub fn evaluate(&self, groups: Vec<GroupMetrics>, mode: ComparisonMode) -> ScoreResult<BenchmarkResult> {
        if groups.len() < 2 {
            return Err(ScoreError::InsufficientGroups { found: groups.len() });
        }
        if mode == ComparisonMode::Pairwise && groups.len() != 2 {
            return Err(ScoreError::PairwiseArity { found: groups.len() });
        }
        self.validate()?;

        let drivers: Vec<Driver> = self
            .drivers
            .iter()
            .map(|rule| rule.evaluate(&groups, mode))
            .collect();

        let category_scores: Vec<BTreeMap<Category, f64>> = (0..groups.len())
            .map(|g| self.category_scores_for(&drivers, g))
            .collect();

        let totals: Vec<f64> = category_scores
            .iter()
            .map(|scores| {
                round1(
                    self.weights
                        .iter()
                        .map(|(category, weight)| scores.get(&category).copied().unwrap_or(0.0) * weight)
                        .sum(),
                )
            })
            .collect();

        // sort_by is stable: equal totals keep input order.
        let mut ranking: Vec<usize> = (0..groups.len()).collect();
        ranking.sort_by(|a, b| totals[*b].total_cmp(&totals[*a]));

        debug!(
            groups = groups.len(),
            mode = ?mode,
            drivers = drivers.len(),
            winner = %groups[ranking[0]].label,
            "scored benchmark"
        );

        Ok(BenchmarkResult {
            mode,
            groups,
            drivers,
            category_scores,
            totals,
            ranking,
            weights: self.weights.clone(),
            excluded: Vec::new(),
        })
    }

    fn category_scores_for(&self, drivers: &[Driver], group: usize) -> BTreeMap<Category, f64> {
        let mut scores = BTreeMap::new();
        for category in self.weights.categories() {
            let members: Vec<f64> = drivers
                .iter()
                .filter(|d| d.category == category)
                .map(|d| d.scores[group])
                .collect();
            if !members.is_empty() {
                let mean = members.iter().sum::<f64>() / members.len() as f64;
                scores.insert(category, round1(mean));
            }
        }
        scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relative::Direction;
    use crate::result::ScoreBasis;

    fn group(label: &str, total: u64) -> GroupMetrics {
        GroupMetrics {
            label: label.to_string(),
            total_time_s: total,
            op_count: 4,
            tool_life_threshold_s: 1200,
            ..Default::default()
        }
    }

    struct Constant(Category, f64);

    impl DriverRule for Constant {
        fn id(&self) -> &str {
            "constant"
        }
        fn name(&self) -> &str {
            "Constant"
        }
        fn category(&self) -> Category {
            self.0
        }
        fn evaluate(&self, groups: &[GroupMetrics], _mode: ComparisonMode) -> Driver {
            Driver {
                id: "constant".into(),
                name: "Constant".into(),
                category: self.0,
                direction: Direction::HigherIsBetter,
                basis: ScoreBasis::Absolute,
                raw_values: vec![self.1; groups.len()],
                scores: vec![self.1; groups.len()],
                display: vec![String::new(); groups.len()],
            }
        }
    }

    #[test]
    fn test_needs_two_groups() {
        let engine = ScoringEngine::default();
        let err = engine
            .evaluate(vec![group("A", 10)], ComparisonMode::Ranking)
            .unwrap_err();
        assert!(matches!(err, ScoreError::InsufficientGroups { found: 1 }));
    }

    #[test]
    fn test_pairwise_arity() {
        let engine = ScoringEngine::default();
        let err = engine
            .evaluate(
                vec![group("A", 10), group("B", 20), group("C", 30)],
                ComparisonMode::Pairwise,
            )
            .unwrap_err();
        assert!(matches!(err, ScoreError::PairwiseArity { found: 3 }));
    }

    #[test]
    fn test_scores_in_range_and_ranked() {
        let engine = ScoringEngine::default();
        let result = engine
            .evaluate(vec![group("SLOW", 1200), group("FAST", 600)], ComparisonMode::Pairwise)
            .unwrap();
        assert_eq!(result.drivers.len(), 13);
        for total in &result.totals {
            assert!((0.0..=100.0).contains(total));
        }
        for scores in &result.category_scores {
            assert_eq!(scores.len(), 6);
            assert!(scores.values().all(|s| (0.0..=100.0).contains(s)));
        }
        assert_eq!(result.ranking, vec![1, 0]);
        assert_eq!(result.winner(), Some(1));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let engine = ScoringEngine::default();
        let result = engine
            .evaluate(
                vec![group("A", 100), group("B", 100), group("C", 100)],
                ComparisonMode::Ranking,
            )
            .unwrap();
        assert_eq!(result.totals[0], result.totals[1]);
        assert_eq!(result.ranking, vec![0, 1, 2]);
        assert_eq!(result.total_leader(), None);
    }

    #[test]
    fn test_custom_catalog_must_cover_weighted_categories() {
        let weights = CategoryWeights::new(vec![
            (Category::TemporalEfficiency, 0.5),
            (Category::ToolLife, 0.5),
        ])
        .unwrap();
        let err = ScoringEngine::with_drivers(
            weights.clone(),
            vec![Box::new(Constant(Category::ToolLife, 80.0))],
        )
        .err()
        .expect("temporal efficiency has no driver");
        assert!(matches!(err, ScoreError::EmptyCategory(_)));

        let engine = ScoringEngine::with_drivers(
            weights,
            vec![
                Box::new(Constant(Category::ToolLife, 80.0)),
                Box::new(Constant(Category::TemporalEfficiency, 60.0)),
            ],
        )
        .unwrap();
        let result = engine
            .evaluate(vec![group("A", 1), group("B", 2)], ComparisonMode::Ranking)
            .unwrap();
        assert_eq!(result.totals, vec![70.0, 70.0]);
    }

    #[test]
    fn test_category_mean_is_rounded() {
        let weights = CategoryWeights::new(vec![(Category::ToolLife, 1.0)]).unwrap();
        let engine = ScoringEngine::with_drivers(
            weights,
            vec![
                Box::new(Constant(Category::ToolLife, 100.0)),
                Box::new(Constant(Category::ToolLife, 100.0)),
                Box::new(Constant(Category::ToolLife, 50.0)),
            ],
        )
        .unwrap();
        let result = engine
            .evaluate(vec![group("A", 1), group("B", 2)], ComparisonMode::Ranking)
            .unwrap();
        assert_eq!(result.category_score(0, Category::ToolLife), 83.3);
        assert_eq!(result.totals[0], 83.3);
    }
}
