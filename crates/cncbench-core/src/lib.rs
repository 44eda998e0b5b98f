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

//! Core parser, data model and metrics for CNC setup sheets.
//!
//! This crate turns the raw text of a CAM "Setup Sheet" export into typed
//! setups and operations, then reduces each document to comparable
//! manufacturing metrics.
//!
//! - [`time`] converts compound durations (`1h:02m:30s`) to seconds and back
//! - [`dialect`] declares which labels carry which fields
//! - [`Parser`] segments the text and runs the dialect's extractors
//! - [`compute`] derives [`GroupMetrics`] under a tool-life threshold
//!
//! Parsing never fails. Missing fields fall back to `0`, an empty string or
//! the `N/A` product sentinel.

mod config;
pub mod dialect;
mod document;
mod error;
pub mod fields;
mod metrics;
pub mod naming;
mod parser;
pub mod strategy;
pub mod time;

pub use config::{BenchConfig, DEFAULT_TOOL_LIFE_S};
pub use dialect::Dialect;
pub use document::{Document, Operation, Setup, NO_PRODUCT, UNKNOWN_STRATEGY};
pub use error::{CncError, CncErrorKind, CncResult};
pub use metrics::{compute, GroupMetrics};
pub use parser::{parse, Parser};
pub use strategy::StrategyVocabulary;
