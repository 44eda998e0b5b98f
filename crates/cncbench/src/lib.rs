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


//! # CNCBench
//!
//! CNCBench compares alternative CNC machining programs from the text of
//! their CAM "Setup Sheet" exports. Each document is parsed into setups and
//! operations, reduced to manufacturing metrics, and scored against the
//! other documents on a weighted vendor-rating scorecard.
//!
//! ## Quick Start
//!
//! ```rust
//! use cncbench::{compare_texts, BenchConfig, ParseMode, SheetInput};
//!
//! let a = "Document Path: NC02 housing\nSetup Sheet for Program 1\n\
//!          Operation 1/1 T1 D1 L1\nEstimated Cycle Time: 5m:00s (0%)\n";
//! let b = "Document Path: NC03 housing\nSetup Sheet for Program 1\n\
//!          Operation 1/1 T1 D1 L1\nEstimated Cycle Time: 10m:00s (0%)\n";
//!
//! let result = compare_texts(
//!     SheetInput::new("a.txt", a),
//!     SheetInput::new("b.txt", b),
//!     &BenchConfig::default(),
//! )
//! .unwrap();
//! assert_eq!(result.labels(), vec!["NC02", "NC03"]);
//! assert_eq!(result.winner(), Some(0));
//! ```
//!
//! ## Modules
//!
//! - [`time`]: compound duration codec
//! - [`dialect`]: declarative field extractors
//! - [`naming`]: short group labels
//! - [`score`]: drivers, categories and the scoring engine
//! - [`tool_life`]: per-product tool-life tables and alarms
//!
//! ### Optional report sinks (feature-gated)
//!
//! - `csv_report`: CSV tables (feature = "csv")

use rayon::prelude::*;
use tracing::debug;

// Re-export core types
pub use cncbench_core::{
    compute,
    // Functions
    parse,
    // Configuration
    BenchConfig,
    // Errors
    CncError,
    CncErrorKind,
    CncResult,
    Dialect,
    // Main types
    Document,
    GroupMetrics,
    Operation,
    // Parser
    Parser,
    Setup,
    StrategyVocabulary,
    DEFAULT_TOOL_LIFE_S,
    NO_PRODUCT,
    UNKNOWN_STRATEGY,
};

pub use cncbench_score::{
    compare_pair, rank, BenchmarkResult, Category, CategoryWeights, ComparisonMode, ScoreError, ScoreResult,
    ScoringEngine,
};

pub mod time {
    //! Duration codec
    pub use cncbench_core::time::{format_duration, format_duration_f64, parse_duration};
}

pub mod dialect {
    //! Dialect declarations
    pub use cncbench_core::dialect::{Dialect, Field, FieldExtractor, PostProcess, Scope, ValueGrammar};
    pub use cncbench_core::fields::FieldValue;
    pub use cncbench_core::strategy::StrategyVocabulary;
}

pub mod naming {
    //! Group labels
    pub use cncbench_core::naming::{dedupe_labels, group_label};
}

pub mod score {
    //! Scoring engine and driver catalog
    pub use cncbench_score::{
        default_drivers, relative_score, relative_score_nway, round1, Direction, Driver, DriverRule, Excluded,
        OverLifePenaltyDriver, RelativeDriver, ScoreBasis, ToolLifeDriver, OVER_LIFE_PENALTY,
    };
}

pub mod tool_life {
    //! Tool-life scoring
    pub use cncbench_score::tool_life::{
        over_life_alarms, product_score, tool_life_score, tool_life_table, ToolLifeEntry, ToolLifeStatus,
    };
}

/// CSV report sink (requires `csv` feature).
#[cfg(feature = "csv")]
pub mod csv_report {
    pub use cncbench_csv::{
        to_csv_categories, to_csv_scorecard, to_csv_tool_life, write_report_dir, ReportError, ToCsvConfig,
    };
}

/// Raw text of one setup sheet and the name it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetInput {
    /// Source name, usually the file stem.
    pub name: String,
    pub text: String,
}

impl SheetInput {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// How independent documents are parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    #[default]
    Sequential,
    /// Parse on the rayon pool. Results keep input order.
    Parallel,
}

/// Parse several sheets with the default dialect.
pub fn parse_inputs(inputs: &[SheetInput], mode: ParseMode) -> Vec<Document> {
    parse_inputs_with(&Parser::default(), inputs, mode)
}

/// Parse several sheets with a given parser.
pub fn parse_inputs_with(parser: &Parser, inputs: &[SheetInput], mode: ParseMode) -> Vec<Document> {
    debug!(count = inputs.len(), mode = ?mode, "parsing inputs");
    match mode {
        ParseMode::Sequential => inputs
            .iter()
            .map(|input| parser.parse_source(&input.text, &input.name))
            .collect(),
        ParseMode::Parallel => inputs
            .par_iter()
            .map(|input| parser.parse_source(&input.text, &input.name))
            .collect(),
    }
}

/// Parse and compare exactly two sheets.
///
/// # Errors
///
/// `NoOperations` when either sheet has no operations.
pub fn compare_texts(a: SheetInput, b: SheetInput, config: &BenchConfig) -> ScoreResult<BenchmarkResult> {
    let docs = parse_inputs(&[a, b], ParseMode::Sequential);
    compare_pair(&docs[0], &docs[1], config)
}

/// Parse and rank any number of sheets.
///
/// # Errors
///
/// `InsufficientGroups` when fewer than two sheets have operations.
pub fn rank_texts(inputs: &[SheetInput], config: &BenchConfig, mode: ParseMode) -> ScoreResult<BenchmarkResult> {
    let docs = parse_inputs(inputs, mode);
    rank(&docs, config)
}
