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


//! Tool-life scoring and status bands.
//!
//! Utilization is a product code's accumulated cycle time over the tool-life
//! threshold. Scoring is stepped up to full life and falls off steeply
//! beyond it:
//!
//! | Utilization | Score | Status |
//! |---|---|---|
//! | up to 50 % | 100 | OK |
//! | up to 75 % | 80 | Moderate |
//! | up to 100 % | 60 | Warning |
//! | above 100 % | `max(0, 60 - (f - 1) * 200)` | Exceeded |

use crate::relative::round1;
use cncbench_core::GroupMetrics;
use std::fmt;

/// Score of one product code at utilization fraction `f`.
pub fn product_score(f: f64) -> f64 {
    if f <= 0.5 {
        100.0
    } else if f <= 0.75 {
        80.0
    } else if f <= 1.0 {
        60.0
    } else {
        (60.0 - (f - 1.0) * 200.0).max(0.0)
    }
}

/// Mean product score of a group, rounded to one decimal. A group without
/// product codes scores 100.
pub fn tool_life_score(metrics: &GroupMetrics) -> f64 {
    let scores: Vec<f64> = metrics.utilizations().map(|(_, f)| product_score(f)).collect();
    if scores.is_empty() {
        return 100.0;
    }
    round1(scores.iter().sum::<f64>() / scores.len() as f64)
}

/// Utilization band of a product code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ToolLifeStatus {
    Ok,
    Moderate,
    Warning,
    Exceeded,
}

impl ToolLifeStatus {
    pub fn from_utilization(f: f64) -> Self {
        if f > 1.0 {
            Self::Exceeded
        } else if f > 0.75 {
            Self::Warning
        } else if f > 0.5 {
            Self::Moderate
        } else {
            Self::Ok
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Moderate => "Moderate",
            Self::Warning => "Warning",
            Self::Exceeded => "Exceeded",
        }
    }
}

impl fmt::Display for ToolLifeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tool-life figures for one product code of one group.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToolLifeEntry {
    pub product_code: String,
    /// Tool slots the product was loaded in, sorted.
    pub tool_refs: Vec<String>,
    pub time_s: u64,
    pub utilization: f64,
    pub status: ToolLifeStatus,
}

/// Every product code of a group, in code order.
pub fn tool_life_table(metrics: &GroupMetrics) -> Vec<ToolLifeEntry> {
    metrics
        .tool_time_s
        .iter()
        .map(|(code, time)| {
            let utilization = metrics.utilization(code);
            ToolLifeEntry {
                product_code: code.clone(),
                tool_refs: metrics
                    .tool_refs
                    .get(code)
                    .map(|refs| refs.iter().cloned().collect())
                    .unwrap_or_default(),
                time_s: *time,
                utilization,
                status: ToolLifeStatus::from_utilization(utilization),
            }
        })
        .collect()
}

/// Product codes that exceed the tool-life threshold.
pub fn over_life_alarms(metrics: &GroupMetrics) -> Vec<ToolLifeEntry> {
    tool_life_table(metrics)
        .into_iter()
        .filter(|entry| entry.status == ToolLifeStatus::Exceeded)
        .collect()
}
