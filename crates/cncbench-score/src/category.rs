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


//! Scoring categories and their weights.

use crate::error::{ScoreError, ScoreResult};
use std::fmt;

/// Tolerance on the weight sum.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// A weighted group of drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Category {
    TemporalEfficiency,
    ToolUtilization,
    ToolLife,
    PathEfficiency,
    CycleComplexity,
    CuttingAggressiveness,
}

impl Category {
    /// Every category, in report order.
    pub const ALL: [Category; 6] = [
        Category::TemporalEfficiency,
        Category::ToolUtilization,
        Category::ToolLife,
        Category::PathEfficiency,
        Category::CycleComplexity,
        Category::CuttingAggressiveness,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::TemporalEfficiency => "Temporal Efficiency",
            Self::ToolUtilization => "Tool Utilization",
            Self::ToolLife => "Tool Life",
            Self::PathEfficiency => "Path Efficiency",
            Self::CycleComplexity => "Cycle Complexity",
            Self::CuttingAggressiveness => "Cutting Aggressiveness",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable category weight table.
///
/// ```
/// use cncbench_score::{Category, CategoryWeights};
///
/// let weights = CategoryWeights::default();
/// assert_eq!(weights.get(Category::TemporalEfficiency), 0.30);
/// assert!(CategoryWeights::new(vec![(Category::ToolLife, 0.5)]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryWeights {
    entries: Vec<(Category, f64)>,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            entries: vec![
                (Category::TemporalEfficiency, 0.30),
                (Category::ToolUtilization, 0.20),
                (Category::ToolLife, 0.20),
                (Category::PathEfficiency, 0.15),
                (Category::CycleComplexity, 0.10),
                (Category::CuttingAggressiveness, 0.05),
            ],
        }
    }
}

impl CategoryWeights {
    /// Build a weight table, in the given order.
    ///
    /// # Errors
    ///
    /// `InvalidWeights` when a weight is outside `[0, 1]` or not finite, a
    /// category repeats, or the weights do not sum to one.
    pub fn new(entries: Vec<(Category, f64)>) -> ScoreResult<Self> {
        for (i, (category, weight)) in entries.iter().enumerate() {
            if !weight.is_finite() || !(0.0..=1.0).contains(weight) {
                return Err(ScoreError::invalid_weights(format!(
                    "weight of '{}' must lie in [0, 1], got {}",
                    category, weight
                )));
            }
            if entries[..i].iter().any(|(c, _)| c == category) {
                return Err(ScoreError::invalid_weights(format!(
                    "category '{}' is listed twice",
                    category
                )));
            }
        }
        let sum: f64 = entries.iter().map(|(_, w)| w).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ScoreError::invalid_weights(format!(
                "weights must sum to 1, got {}",
                sum
            )));
        }
        Ok(Self { entries })
    }

    /// Weight of a category; 0 when it is not listed.
    pub fn get(&self, category: Category) -> f64 {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(0.0, |(_, w)| *w)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.iter().map(|(c, _)| *c)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = CategoryWeights::default();
        let sum: f64 = weights.iter().map(|(_, w)| w).sum();
        assert!((sum - 1.0).abs() < WEIGHT_SUM_TOLERANCE);
        assert_eq!(weights.len(), 6);
        // The default table passes its own validation.
        assert!(CategoryWeights::new(weights.iter().collect()).is_ok());
    }

    #[test]
    fn test_default_order_matches_all() {
        let order: Vec<_> = CategoryWeights::default().categories().collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    #[test]
    fn test_rejects_bad_sum() {
        let err = CategoryWeights::new(vec![
            (Category::TemporalEfficiency, 0.6),
            (Category::ToolLife, 0.6),
        ])
        .unwrap_err();
        assert!(matches!(err, ScoreError::InvalidWeights(_)));
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(CategoryWeights::new(vec![
            (Category::TemporalEfficiency, 1.5),
            (Category::ToolLife, -0.5),
        ])
        .is_err());
        assert!(CategoryWeights::new(vec![(Category::ToolLife, f64::NAN)]).is_err());
    }

    #[test]
    fn test_rejects_duplicates() {
        assert!(CategoryWeights::new(vec![
            (Category::ToolLife, 0.5),
            (Category::ToolLife, 0.5),
        ])
        .is_err());
    }

    #[test]
    fn test_subset_allowed() {
        let weights = CategoryWeights::new(vec![
            (Category::TemporalEfficiency, 0.5),
            (Category::ToolLife, 0.5),
        ])
        .unwrap();
        assert_eq!(weights.get(Category::PathEfficiency), 0.0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Category::CuttingAggressiveness.to_string(), "Cutting Aggressiveness");
    }
}
