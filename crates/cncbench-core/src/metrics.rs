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

//! Per-document manufacturing metrics.
//!
//! [`compute`] reduces a parsed [`Document`] and a tool-life threshold to an
//! immutable [`GroupMetrics`]. Every ratio is guarded: a zero denominator
//! yields `0.0`, never NaN or infinity.
//!
//! Tool-life accounting is keyed by product code. Operations without a
//! product code accumulate under the [`NO_PRODUCT`] key, which takes part in
//! utilization but is not counted as a unique product.

use crate::document::{Document, NO_PRODUCT};
use crate::error::{CncError, CncResult};
use crate::naming::group_label;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Aggregate metrics of one candidate program.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupMetrics {
    /// Short group label (e.g. `NC02`).
    pub label: String,
    /// Full document name.
    pub name: String,
    /// Threshold the utilization figures were computed against.
    pub tool_life_threshold_s: u64,

    /// Total cycle time: declared setup times, else the operation sum.
    pub total_time_s: u64,
    /// Declared cycle time per setup.
    pub setup_times_s: Vec<u64>,
    /// Operation count per setup.
    pub setup_op_counts: Vec<usize>,
    pub total_cut_mm: f64,
    pub total_rapid_mm: f64,
    pub op_count: usize,
    /// Unique product codes, sentinel excluded.
    pub product_count: usize,
    /// Tool-slot changes, counted within each setup.
    pub tool_changes: usize,

    pub strategies: BTreeSet<String>,
    pub strategy_time_s: BTreeMap<String, u64>,
    pub strategy_count: BTreeMap<String, usize>,

    /// Accumulated cycle time per product code, sentinel included.
    pub tool_time_s: BTreeMap<String, u64>,
    /// Tool slots seen per product code.
    pub tool_refs: BTreeMap<String, BTreeSet<String>>,

    /// Cut-distance-weighted mean feedrate (mm/min).
    pub weighted_feed: f64,
    pub peak_tool_time_s: u64,
    pub peak_tool_code: Option<String>,
    /// Peak product time over total cycle time.
    pub peak_tool_share: f64,

    pub tools_over_50: usize,
    pub tools_over_75: usize,
    pub tools_over_100: usize,
    /// Mean utilization fraction over product codes.
    pub avg_utilization: f64,

    /// Cut / (cut + rapid).
    pub cut_ratio: f64,
    /// Operations per unique product code.
    pub ops_per_tool: f64,
    /// Cut distance per cycle minute.
    pub productivity: f64,
}

impl GroupMetrics {
    /// Mean cycle time per operation in seconds.
    pub fn mean_op_time_s(&self) -> f64 {
        ratio(self.total_time_s as f64, self.op_count as f64)
    }

    /// Cut plus rapid distance.
    pub fn total_travel_mm(&self) -> f64 {
        self.total_cut_mm + self.total_rapid_mm
    }

    /// Utilization fraction of one product code (0 when unknown).
    pub fn utilization(&self, code: &str) -> f64 {
        self.tool_time_s
            .get(code)
            .map_or(0.0, |t| utilization(*t, self.tool_life_threshold_s))
    }

    /// Utilization fraction of every product code, in key order.
    pub fn utilizations(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.tool_time_s
            .iter()
            .map(|(code, t)| (code.as_str(), utilization(*t, self.tool_life_threshold_s)))
    }
}

/// Compute metrics for a document.
///
/// # Errors
///
/// Returns a `NoOperations` error when the document has no operations.
///
/// # Examples
///
/// ```
/// use cncbench_core::{compute, parse};
///
/// let doc = parse("Setup Sheet for Program 1\nOperation 1/1 T1 D1 L1\nCutting Distance: 10\n");
/// let metrics = compute(&doc, 1200).unwrap();
/// assert_eq!(metrics.op_count, 1);
/// assert!(compute(&parse(""), 1200).is_err());
/// ```
pub fn compute(doc: &Document, tool_life_threshold_s: u64) -> CncResult<GroupMetrics> {
    if doc.is_empty() {
        return Err(CncError::no_operations(&doc.name));
    }

    let mut m = GroupMetrics {
        label: group_label(&doc.name, doc.source.as_deref()),
        name: doc.name.clone(),
        tool_life_threshold_s,
        ..Default::default()
    };

    let declared = doc
        .setups
        .iter()
        .fold(0u64, |acc, s| acc.saturating_add(s.declared_cycle_time_s));
    m.total_time_s = if declared > 0 {
        declared
    } else {
        doc.operations()
            .fold(0u64, |acc, op| acc.saturating_add(op.cycle_time_s))
    };
    m.setup_times_s = doc.setups.iter().map(|s| s.declared_cycle_time_s).collect();
    m.setup_op_counts = doc.setups.iter().map(|s| s.operations.len()).collect();
    m.tool_changes = doc.setups.iter().map(|s| s.tool_changes()).sum();

    let mut products = BTreeSet::new();
    let mut feed_weight = 0.0;
    for op in doc.operations() {
        m.op_count += 1;
        m.total_cut_mm += op.cutting_distance_mm;
        m.total_rapid_mm += op.rapid_distance_mm;
        feed_weight += op.max_feedrate * op.cutting_distance_mm;

        if op.product_code != NO_PRODUCT {
            products.insert(op.product_code.as_str());
        }

        m.strategies.insert(op.strategy.clone());
        let strategy_time = m.strategy_time_s.entry(op.strategy.clone()).or_default();
        *strategy_time = strategy_time.saturating_add(op.cycle_time_s);
        *m.strategy_count.entry(op.strategy.clone()).or_default() += 1;

        let tool_time = m.tool_time_s.entry(op.product_code.clone()).or_default();
        *tool_time = tool_time.saturating_add(op.cycle_time_s);
        m.tool_refs
            .entry(op.product_code.clone())
            .or_default()
            .insert(op.tool_ref.clone());
    }
    m.product_count = products.len();

    m.weighted_feed = ratio(feed_weight, m.total_cut_mm);

    // Ties go to the product seen first in operation order.
    let mut first_seen: Vec<&str> = Vec::new();
    for op in doc.operations() {
        if !first_seen.contains(&op.product_code.as_str()) {
            first_seen.push(op.product_code.as_str());
        }
    }
    let mut peak: Option<(&str, u64)> = None;
    for code in first_seen {
        let time = m.tool_time_s.get(code).copied().unwrap_or(0);
        if peak.map_or(true, |(_, best)| time > best) {
            peak = Some((code, time));
        }
    }
    if let Some((code, time)) = peak {
        m.peak_tool_time_s = time;
        m.peak_tool_code = Some(code.to_string());
    }
    m.peak_tool_share = ratio(m.peak_tool_time_s as f64, m.total_time_s as f64);

    let fractions: Vec<f64> = m.utilizations().map(|(_, f)| f).collect();
    m.tools_over_50 = fractions.iter().filter(|f| **f > 0.5).count();
    m.tools_over_75 = fractions.iter().filter(|f| **f > 0.75).count();
    m.tools_over_100 = fractions.iter().filter(|f| **f > 1.0).count();
    m.avg_utilization = ratio(fractions.iter().sum(), fractions.len() as f64);

    m.cut_ratio = ratio(m.total_cut_mm, m.total_cut_mm + m.total_rapid_mm);
    m.ops_per_tool = ratio(m.op_count as f64, m.product_count as f64);
    m.productivity = ratio(m.total_cut_mm, m.total_time_s as f64 / 60.0);

    debug!(
        group = %m.label,
        operations = m.op_count,
        total_time_s = m.total_time_s,
        products = m.product_count,
        over_life = m.tools_over_100,
        "computed group metrics"
    );
    Ok(m)
}

fn utilization(time_s: u64, threshold_s: u64) -> f64 {
    ratio(time_s as f64, threshold_s as f64)
}

fn ratio(num: f64, den: f64) -> f64 {
    if den == 0.0 {
        0.0
    } else {
        num / den
    }
}
