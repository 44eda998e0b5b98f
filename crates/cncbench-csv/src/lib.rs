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


//! CSV report sink for CNCBench.
//!
//! Three tables describe a [`BenchmarkResult`](cncbench_score::BenchmarkResult):
//!
//! - `scorecard.csv`: one row per driver with raw value, display value and
//!   score for every group
//! - `categories.csv`: one row per weighted category plus a `Total` row
//! - `tool_life.csv`: one row per product code per group with utilization
//!   and status
//!
//! Tables can be rendered to strings, to any [`std::io::Write`], or all at
//! once into a directory with [`write_report_dir`].

mod error;
mod to_csv;

pub use error::{ReportError, Result};
pub use to_csv::{
    to_csv_categories, to_csv_categories_writer, to_csv_scorecard, to_csv_scorecard_writer, to_csv_tool_life,
    to_csv_tool_life_writer, write_report_dir, ToCsvConfig, CATEGORIES_FILE, SCORECARD_FILE, TOOL_LIFE_FILE,
};
