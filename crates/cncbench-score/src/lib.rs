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


//! Relative scoring of CNC setup-sheet metrics.
//!
//! A fixed catalog of drivers turns each [`GroupMetrics`] field into a
//! 0-100 score. Drivers are averaged per [`Category`] and the categories
//! are combined with [`CategoryWeights`] into one total per group.
//!
//! ```rust,no_run
//! use cncbench_core::{parse, BenchConfig};
//! use cncbench_score::compare_pair;
//!
//! let a = parse(&std::fs::read_to_string("NC02.txt").unwrap());
//! let b = parse(&std::fs::read_to_string("NC03.txt").unwrap());
//! let result = compare_pair(&a, &b, &BenchConfig::default()).unwrap();
//! println!("winner: {:?}", result.winner().map(|i| &result.groups[i].label));
//! ```
//!
//! [`GroupMetrics`]: cncbench_core::GroupMetrics

mod bench;
mod category;
mod drivers;
mod engine;
mod error;
mod relative;
mod result;
pub mod tool_life;

pub use bench::{compare_pair, rank};
pub use category::{Category, CategoryWeights, WEIGHT_SUM_TOLERANCE};
pub use drivers::{default_drivers, DriverRule, OverLifePenaltyDriver, RelativeDriver, ToolLifeDriver, OVER_LIFE_PENALTY};
pub use engine::ScoringEngine;
pub use error::{ScoreError, ScoreResult};
pub use relative::{relative_score, relative_score_nway, round1, ComparisonMode, Direction};
pub use result::{BenchmarkResult, Driver, Excluded, ScoreBasis};
pub use tool_life::{tool_life_score, ToolLifeEntry, ToolLifeStatus};
