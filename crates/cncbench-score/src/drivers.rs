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


//! Driver rules.
//!
//! A [`DriverRule`] turns the metrics of every group into one [`Driver`]
//! row. The built-in catalog is returned by [`default_drivers`]; custom
//! rules plug into [`ScoringEngine`](crate::ScoringEngine) the same way.

use crate::category::Category;
use crate::relative::{ComparisonMode, Direction};
use crate::result::{Driver, ScoreBasis};
use crate::tool_life::tool_life_score;
use cncbench_core::time::format_duration_f64;
use cncbench_core::GroupMetrics;

/// A scored comparison dimension.
pub trait DriverRule: Send + Sync {
    /// Stable identifier (kebab-case).
    fn id(&self) -> &str;

    /// Display name.
    fn name(&self) -> &str;

    /// Category the driver contributes to.
    fn category(&self) -> Category;

    /// Score every group. `groups` is never empty.
    fn evaluate(&self, groups: &[GroupMetrics], mode: ComparisonMode) -> Driver;
}

/// A driver scored relative to the other groups.
pub struct RelativeDriver {
    id: &'static str,
    name: &'static str,
    category: Category,
    direction: Direction,
    value: fn(&GroupMetrics) -> f64,
    display: fn(f64) -> String,
}

impl RelativeDriver {
    pub fn new(
        id: &'static str,
        name: &'static str,
        category: Category,
        direction: Direction,
        value: fn(&GroupMetrics) -> f64,
        display: fn(f64) -> String,
    ) -> Self {
        Self {
            id,
            name,
            category,
            direction,
            value,
            display,
        }
    }
}

impl DriverRule for RelativeDriver {
    fn id(&self) -> &str {
        self.id
    }

    fn name(&self) -> &str {
        self.name
    }

    fn category(&self) -> Category {
        self.category
    }

    fn evaluate(&self, groups: &[GroupMetrics], mode: ComparisonMode) -> Driver {
        let raw_values: Vec<f64> = groups.iter().map(self.value).collect();
        Driver {
            id: self.id.to_string(),
            name: self.name.to_string(),
            category: self.category,
            direction: self.direction,
            basis: ScoreBasis::Relative,
            scores: mode.score(&raw_values, self.direction),
            display: raw_values.iter().map(|v| (self.display)(*v)).collect(),
            raw_values,
        }
    }
}

/// Non-linear tool-life score; the score is its own raw value.
pub struct ToolLifeDriver;

impl DriverRule for ToolLifeDriver {
    fn id(&self) -> &str {
        "tool-life-score"
    }

    fn name(&self) -> &str {
        "Tool life score (non-linear)"
    }

    fn category(&self) -> Category {
        Category::ToolLife
    }

    fn evaluate(&self, groups: &[GroupMetrics], _mode: ComparisonMode) -> Driver {
        let scores: Vec<f64> = groups.iter().map(tool_life_score).collect();
        Driver {
            id: self.id().to_string(),
            name: self.name().to_string(),
            category: self.category(),
            direction: Direction::HigherIsBetter,
            basis: ScoreBasis::Absolute,
            raw_values: scores.clone(),
            display: scores.iter().map(|s| format!("{:.1}/100", s)).collect(),
            scores,
        }
    }
}

/// Absolute penalty of 50 points per product code over its tool life.
pub struct OverLifePenaltyDriver;

/// Points lost per over-life product code.
pub const OVER_LIFE_PENALTY: f64 = 50.0;

impl DriverRule for OverLifePenaltyDriver {
    fn id(&self) -> &str {
        "over-life-penalty"
    }

    fn name(&self) -> &str {
        "Over-life penalty (-50 per tool)"
    }

    fn category(&self) -> Category {
        Category::ToolLife
    }

    fn evaluate(&self, groups: &[GroupMetrics], _mode: ComparisonMode) -> Driver {
        let counts: Vec<usize> = groups.iter().map(|g| g.tools_over_100).collect();
        Driver {
            id: self.id().to_string(),
            name: self.name().to_string(),
            category: self.category(),
            direction: Direction::LowerIsBetter,
            basis: ScoreBasis::Absolute,
            raw_values: counts.iter().map(|n| *n as f64).collect(),
            scores: counts
                .iter()
                .map(|n| (100.0 - OVER_LIFE_PENALTY * *n as f64).max(0.0))
                .collect(),
            display: counts.iter().map(|n| format!("{} tools", n)).collect(),
        }
    }
}

fn duration(v: f64) -> String {
    format_duration_f64(v)
}

fn count(v: f64) -> String {
    format!("{}", v as u64)
}

fn percent(v: f64) -> String {
    format!("{:.1}%", v * 100.0)
}

/// The built-in catalog, in report order.
pub fn default_drivers() -> Vec<Box<dyn DriverRule>> {
    use Category::*;
    use Direction::*;

    vec![
        Box::new(RelativeDriver::new(
            "total-cycle-time",
            "Total cycle time",
            TemporalEfficiency,
            LowerIsBetter,
            |g| g.total_time_s as f64,
            duration,
        )),
        Box::new(RelativeDriver::new(
            "mean-operation-time",
            "Mean time per operation",
            TemporalEfficiency,
            LowerIsBetter,
            GroupMetrics::mean_op_time_s,
            duration,
        )),
        Box::new(RelativeDriver::new(
            "unique-tools",
            "Unique tool products",
            ToolUtilization,
            LowerIsBetter,
            |g| g.product_count as f64,
            count,
        )),
        Box::new(RelativeDriver::new(
            "tool-changes",
            "Tool changes",
            ToolUtilization,
            LowerIsBetter,
            |g| g.tool_changes as f64,
            count,
        )),
        Box::new(ToolLifeDriver),
        Box::new(RelativeDriver::new(
            "peak-tool-share",
            "Peak tool share of cycle",
            ToolLife,
            LowerIsBetter,
            |g| g.peak_tool_share,
            percent,
        )),
        Box::new(OverLifePenaltyDriver),
        Box::new(RelativeDriver::new(
            "cut-ratio",
            "Cut / (cut + rapid)",
            PathEfficiency,
            HigherIsBetter,
            |g| g.cut_ratio,
            percent,
        )),
        Box::new(RelativeDriver::new(
            "total-travel",
            "Total travel distance",
            PathEfficiency,
            LowerIsBetter,
            GroupMetrics::total_travel_mm,
            |v| format!("{:.0} mm", v),
        )),
        Box::new(RelativeDriver::new(
            "operation-count",
            "Total operations",
            CycleComplexity,
            LowerIsBetter,
            |g| g.op_count as f64,
            count,
        )),
        Box::new(RelativeDriver::new(
            "ops-per-tool",
            "Operations per tool",
            CycleComplexity,
            LowerIsBetter,
            |g| g.ops_per_tool,
            |v| format!("{:.1}", v),
        )),
        Box::new(RelativeDriver::new(
            "weighted-feedrate",
            "Distance-weighted feedrate",
            CuttingAggressiveness,
            HigherIsBetter,
            |g| g.weighted_feed,
            |v| format!("{:.0} mm/min", v),
        )),
        Box::new(RelativeDriver::new(
            "productivity",
            "Productivity [mm cut / cycle min]",
            CuttingAggressiveness,
            HigherIsBetter,
            |g| g.productivity,
            |v| format!("{:.0}", v),
        )),
    ]
}
