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

//! Benchmark configuration.

use crate::error::{CncError, CncResult};

/// Default tool-life threshold: 20 minutes.
pub const DEFAULT_TOOL_LIFE_S: u64 = 1200;

/// Settings applied uniformly to every group of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchConfig {
    /// Maximum cumulative cycle time a product code may accrue.
    pub tool_life_threshold_s: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            tool_life_threshold_s: DEFAULT_TOOL_LIFE_S,
        }
    }
}

impl BenchConfig {
    /// Build from a threshold in seconds.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error for a zero threshold.
    pub fn from_seconds(seconds: u64) -> CncResult<Self> {
        if seconds == 0 {
            return Err(CncError::config("tool life threshold must be greater than zero"));
        }
        Ok(Self {
            tool_life_threshold_s: seconds,
        })
    }

    /// Build from a threshold in whole minutes.
    ///
    /// ```
    /// use cncbench_core::BenchConfig;
    ///
    /// assert_eq!(BenchConfig::from_minutes(30).unwrap().tool_life_threshold_s, 1800);
    /// assert!(BenchConfig::from_minutes(0).is_err());
    /// ```
    pub fn from_minutes(minutes: u64) -> CncResult<Self> {
        let seconds = minutes
            .checked_mul(60)
            .ok_or_else(|| CncError::config(format!("tool life of {} minutes is out of range", minutes)))?;
        Self::from_seconds(seconds)
    }

    /// Threshold in minutes, for display.
    pub fn threshold_minutes(&self) -> f64 {
        self.tool_life_threshold_s as f64 / 60.0
    }
}
