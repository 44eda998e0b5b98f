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


//! Scoring output handed to report sinks.

use crate::category::{Category, CategoryWeights};
use crate::relative::{ComparisonMode, Direction};
use crate::tool_life::{over_life_alarms, ToolLifeEntry};
use cncbench_core::GroupMetrics;
use std::collections::BTreeMap;

/// How a driver's scores are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScoreBasis {
    /// Scored against the other groups.
    Relative,
    /// Scored on the group's own value.
    Absolute,
}

/// One scored comparison dimension, one entry per group.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub direction: Direction,
    pub basis: ScoreBasis,
    pub raw_values: Vec<f64>,
    /// Scores in `[0, 100]`.
    pub scores: Vec<f64>,
    /// Human-readable raw values.
    pub display: Vec<String>,
}

impl Driver {
    /// Index of the group with the unique best score, if any.
    pub fn leader(&self) -> Option<usize> {
        unique_max(&self.scores)
    }
}

/// A group left out of a ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Excluded {
    /// Document name (or source name) of the input.
    pub name: String,
    pub reason: String,
}

/// Complete outcome of a comparison.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchmarkResult {
    pub mode: ComparisonMode,
    /// Scored groups, in input order.
    pub groups: Vec<GroupMetrics>,
    /// Drivers, in catalog order.
    pub drivers: Vec<Driver>,
    /// Per group, category score (mean of its drivers, one decimal).
    pub category_scores: Vec<BTreeMap<Category, f64>>,
    /// Per group, weighted total (one decimal).
    pub totals: Vec<f64>,
    /// Group indices by descending total; ties keep input order.
    pub ranking: Vec<usize>,
    pub weights: CategoryWeights,
    /// Inputs left out because they had no operations.
    pub excluded: Vec<Excluded>,
}

impl BenchmarkResult {
    pub fn labels(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.label.as_str()).collect()
    }

    /// Index of the top-ranked group.
    pub fn winner(&self) -> Option<usize> {
        self.ranking.first().copied()
    }

    /// Index of the group with the unique best total, if any.
    pub fn total_leader(&self) -> Option<usize> {
        unique_max(&self.totals)
    }

    /// Score of a category for a group; 0 when the category is unweighted.
    pub fn category_score(&self, group: usize, category: Category) -> f64 {
        self.category_scores
            .get(group)
            .and_then(|scores| scores.get(&category))
            .copied()
            .unwrap_or(0.0)
    }

    /// Index of the group with the unique best score on a category.
    pub fn category_leader(&self, category: Category) -> Option<usize> {
        let scores: Vec<f64> = (0..self.groups.len())
            .map(|g| self.category_score(g, category))
            .collect();
        unique_max(&scores)
    }

    /// Drivers of one category, in catalog order.
    pub fn drivers_in(&self, category: Category) -> impl Iterator<Item = &Driver> {
        self.drivers.iter().filter(move |d| d.category == category)
    }

    /// Over-life products per group, as `(group index, entry)`.
    pub fn alarms(&self) -> Vec<(usize, ToolLifeEntry)> {
        self.groups
            .iter()
            .enumerate()
            .flat_map(|(i, g)| over_life_alarms(g).into_iter().map(move |e| (i, e)))
            .collect()
    }

    /// Threshold shared by every group.
    pub fn tool_life_threshold_s(&self) -> u64 {
        self.groups
            .first()
            .map_or(cncbench_core::DEFAULT_TOOL_LIFE_S, |g| g.tool_life_threshold_s)
    }
}

fn unique_max(values: &[f64]) -> Option<usize> {
    let best = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mut hits = values.iter().enumerate().filter(|(_, v)| **v == best);
    match (hits.next(), hits.next()) {
        (Some((i, _)), None) => Some(i),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_max() {
        assert_eq!(unique_max(&[1.0, 3.0, 2.0]), Some(1));
        assert_eq!(unique_max(&[3.0, 3.0]), None);
        assert_eq!(unique_max(&[]), None);
    }

    #[test]
    fn test_driver_leader() {
        let driver = Driver {
            id: "x".into(),
            name: "X".into(),
            category: Category::ToolLife,
            direction: Direction::HigherIsBetter,
            basis: ScoreBasis::Absolute,
            raw_values: vec![1.0, 2.0],
            scores: vec![100.0, 100.0],
            display: vec!["1".into(), "2".into()],
        };
        assert_eq!(driver.leader(), None);
    }
}
