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

//! Source-document dialects.
//!
//! A [`Dialect`] is the declarative description of how a CAM package lays out
//! its setup sheet: which labels carry which fields, how each value is
//! written, and how the captured text is cleaned up. Supporting a new export
//! flavour means pushing extractors or vocabulary entries, not editing the
//! parser.
//!
//! # Examples
//!
//! ```
//! use cncbench_core::dialect::{Dialect, Field, FieldExtractor, Scope, ValueGrammar};
//!
//! // Accept "Feed Max:" as an alternative spelling of the maximum feedrate.
//! let dialect = Dialect::fusion().with_extractor(FieldExtractor::new(
//!     Field::MaxFeedrate,
//!     Scope::Operation,
//!     "Feed Max",
//!     ValueGrammar::Number,
//! ));
//! assert_eq!(dialect.extractors_for(Field::MaxFeedrate, Scope::Operation).count(), 2);
//! ```

use crate::strategy::StrategyVocabulary;

/// A field the parser knows how to populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Document name (`Document Path:`).
    DocumentPath,
    /// Declared operation count in a setup header.
    OperationCount,
    /// Declared tool count in a setup header.
    ToolCount,
    /// Estimated cycle time (setup header or operation).
    CycleTime,
    /// Operation cutting distance.
    CuttingDistance,
    /// Operation rapid distance.
    RapidDistance,
    /// Operation maximum feedrate.
    MaxFeedrate,
    /// Operation description.
    Description,
    /// Operation tool product code.
    ProductCode,
}

/// Region of the document an extractor applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// The whole text blob.
    Document,
    /// A setup block before its first operation boundary.
    SetupHeader,
    /// The text span of a single operation.
    Operation,
}

/// How a value is written after its `Label:` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueGrammar {
    /// Unsigned integer (`\d+`), whitespace allowed before it.
    Integer,
    /// Decimal number with optional thousands separators (`[\d.,]+`).
    Number,
    /// Compound duration (`[\dhms:]+`), optional parenthetical ignored.
    Duration,
    /// Remainder of the current line.
    Line,
}

/// A cleanup step applied to captured text, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostProcess {
    /// Trim surrounding whitespace.
    Trim,
    /// Cut at the first run of two or more whitespace characters.
    TruncateAtGap,
    /// Cut at the earliest occurrence of any of these labels.
    TruncateAtLabels(Vec<String>),
    /// Remove a leading phrase (case-insensitive) and the whitespace after it.
    StripPrefix(String),
    /// Cut at a whitespace-preceded connective phrase (case-insensitive,
    /// words separated by any whitespace run).
    TruncateAtConnective(String),
}

/// Declarative description of one labeled field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldExtractor {
    /// Field populated by this extractor.
    pub field: Field,
    /// Region searched.
    pub scope: Scope,
    /// Label text preceding the `:` separator.
    pub label: String,
    /// Value grammar.
    pub grammar: ValueGrammar,
    /// Cleanup pipeline for textual values.
    pub post: Vec<PostProcess>,
}

impl FieldExtractor {
    /// Create an extractor without post-processing.
    pub fn new(field: Field, scope: Scope, label: impl Into<String>, grammar: ValueGrammar) -> Self {
        Self {
            field,
            scope,
            label: label.into(),
            grammar,
            post: Vec::new(),
        }
    }

    /// Append a post-processing step.
    pub fn then(mut self, step: PostProcess) -> Self {
        self.post.push(step);
        self
    }
}

/// A complete source-document dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialect {
    /// Dialect name, for diagnostics.
    pub name: String,
    /// Field extractors. For each field and scope, the first extractor that
    /// yields a value wins.
    pub extractors: Vec<FieldExtractor>,
    /// Ordered strategy vocabulary.
    pub strategies: StrategyVocabulary,
}

impl Default for Dialect {
    fn default() -> Self {
        Self::fusion()
    }
}

impl Dialect {
    /// The Fusion 360 / HSMWorks "Setup Sheet" export.
    pub fn fusion() -> Self {
        use Field::*;
        use PostProcess::*;
        use Scope::*;
        use ValueGrammar::*;

        let extractors = vec![
            FieldExtractor::new(DocumentPath, Document, "Document Path", Line).then(Trim),
            FieldExtractor::new(OperationCount, SetupHeader, "Number Of Operations", Integer),
            FieldExtractor::new(ToolCount, SetupHeader, "Number Of Tools", Integer),
            FieldExtractor::new(CycleTime, SetupHeader, "Estimated Cycle Time", Duration),
            FieldExtractor::new(CuttingDistance, Operation, "Cutting Distance", Number),
            FieldExtractor::new(RapidDistance, Operation, "Rapid Distance", Number),
            FieldExtractor::new(MaxFeedrate, Operation, "Maximum Feedrate", Number),
            FieldExtractor::new(CycleTime, Operation, "Estimated Cycle Time", Duration),
            FieldExtractor::new(Description, Operation, "Description", Line)
                .then(TruncateAtGap)
                .then(TruncateAtLabels(vec![
                    "Maximum".to_string(),
                    "Minimum".to_string(),
                ]))
                .then(Trim),
            FieldExtractor::new(ProductCode, Operation, "Product", Line)
                .then(Trim)
                .then(TruncateAtGap)
                .then(Trim)
                .then(StripPrefix("fresa a punta tonda".to_string()))
                .then(TruncateAtConnective("con inserto".to_string()))
                .then(Trim),
        ];

        Self {
            name: "fusion".to_string(),
            extractors,
            strategies: StrategyVocabulary::fusion(),
        }
    }

    /// Add an extractor after the existing ones.
    pub fn with_extractor(mut self, extractor: FieldExtractor) -> Self {
        self.extractors.push(extractor);
        self
    }

    /// Replace the strategy vocabulary.
    pub fn with_strategies(mut self, strategies: StrategyVocabulary) -> Self {
        self.strategies = strategies;
        self
    }

    /// Extractors for a field in a scope, in priority order.
    pub fn extractors_for(&self, field: Field, scope: Scope) -> impl Iterator<Item = &FieldExtractor> {
        self.extractors
            .iter()
            .filter(move |e| e.field == field && e.scope == scope)
    }
}
