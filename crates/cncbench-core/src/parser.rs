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

//! Structural parser for setup-sheet text.
//!
//! Parsing is tolerant: it never fails, and every missing field resolves to
//! a documented default. A document that yields no operations is still a
//! valid [`Document`]; it is the metrics stage that rejects it.
//!
//! # Examples
//!
//! ```
//! use cncbench_core::parse;
//!
//! let text = "\
//! Setup Sheet for Program 1001
//! Number Of Operations: 1
//! Estimated Cycle Time: 2m:00s
//! Operation 1/1 T1 D1 L1
//! Strategy: Adaptive
//! Cutting Distance: 1,250.5mm
//! Product: EM10  Length: 75mm
//! ";
//! let doc = parse(text);
//! assert_eq!(doc.setups.len(), 1);
//! let op = &doc.setups[0].operations[0];
//! assert_eq!(op.strategy, "Adaptive");
//! assert_eq!(op.cutting_distance_mm, 1250.5);
//! assert_eq!(op.product_code, "EM10");
//! ```

use crate::dialect::{Dialect, Field, Scope};
use crate::document::{Document, Operation, Setup};
use crate::fields::FieldValue;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static SETUP_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Setup Sheet for Program (\d+)").expect("regex is compile-time constant")
});

static OPERATION_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Operation\s+(\d+)/(\d+)\s+(T\d+)\s+D\d+\s+L\d+")
        .expect("regex is compile-time constant")
});

static OPERATION_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Operation\s+\d+/\d+").expect("regex is compile-time constant")
});

/// Setup-sheet parser configured with a [`Dialect`].
#[derive(Debug, Clone, Default)]
pub struct Parser {
    dialect: Dialect,
}

impl Parser {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Parse a text blob without a source name.
    pub fn parse(&self, text: &str) -> Document {
        self.parse_inner(text, None)
    }

    /// Parse a text blob loaded from `source` (typically a file stem).
    ///
    /// The source name becomes the document name when the text carries no
    /// document path.
    pub fn parse_source(&self, text: &str, source: &str) -> Document {
        self.parse_inner(text, Some(source))
    }

    fn parse_inner(&self, text: &str, source: Option<&str>) -> Document {
        let name = self
            .text_field(text, Field::DocumentPath, Scope::Document)
            .or_else(|| source.map(str::to_string))
            .unwrap_or_default();

        let mut doc = Document::new(name);
        doc.source = source.map(str::to_string);

        let markers: Vec<(usize, String)> = SETUP_MARKER
            .captures_iter(text)
            .filter_map(|caps| {
                let start = caps.get(0)?.start();
                Some((start, caps[1].to_string()))
            })
            .collect();

        for (i, (start, program_id)) in markers.iter().enumerate() {
            let end = markers.get(i + 1).map_or(text.len(), |next| next.0);
            doc.setups.push(self.parse_setup(program_id, &text[*start..end]));
        }

        debug!(
            document = %doc.name,
            setups = doc.setups.len(),
            operations = doc.operation_count(),
            dialect = %self.dialect.name,
            "parsed setup sheet"
        );
        doc
    }

    fn parse_setup(&self, program_id: &str, block: &str) -> Setup {
        let mut setup = Setup::new(program_id);

        let header_end = OPERATION_BOUNDARY
            .find(block)
            .map_or(block.len(), |m| m.start());
        let header = &block[..header_end];

        setup.declared_op_count = self.u64_field(header, Field::OperationCount, Scope::SetupHeader) as u32;
        setup.declared_tool_count = self.u64_field(header, Field::ToolCount, Scope::SetupHeader) as u32;
        setup.declared_cycle_time_s = self.u64_field(header, Field::CycleTime, Scope::SetupHeader);

        for caps in OPERATION_HEADER.captures_iter(block) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let span_end = OPERATION_BOUNDARY
                .find_at(block, whole.end())
                .map_or(block.len(), |m| m.start());
            let op_text = &block[whole.start()..span_end];

            let index = caps[1].parse().unwrap_or(0);
            let total = caps[2].parse().unwrap_or(0);
            setup.add_operation(self.parse_operation(index, total, &caps[3], op_text));
        }

        setup
    }

    fn parse_operation(&self, index: u32, total: u32, tool_ref: &str, text: &str) -> Operation {
        let mut op = Operation::new(index, total, tool_ref);

        op.cutting_distance_mm = self.f64_field(text, Field::CuttingDistance);
        op.rapid_distance_mm = self.f64_field(text, Field::RapidDistance);
        op.max_feedrate = self.f64_field(text, Field::MaxFeedrate);
        op.cycle_time_s = self.u64_field(text, Field::CycleTime, Scope::Operation);
        if let Some(description) = self.text_field(text, Field::Description, Scope::Operation) {
            op.description = description;
        }
        if let Some(product) = self.text_field(text, Field::ProductCode, Scope::Operation) {
            op.product_code = product;
        }
        op.strategy = self.dialect.strategies.classify(text);

        op
    }

    fn value(&self, text: &str, field: Field, scope: Scope) -> Option<FieldValue> {
        self.dialect
            .extractors_for(field, scope)
            .find_map(|extractor| extractor.extract(text))
    }

    fn u64_field(&self, text: &str, field: Field, scope: Scope) -> u64 {
        self.value(text, field, scope)
            .and_then(|v| v.as_u64())
            .unwrap_or(0)
    }

    fn f64_field(&self, text: &str, field: Field) -> f64 {
        self.value(text, field, Scope::Operation)
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    fn text_field(&self, text: &str, field: Field, scope: Scope) -> Option<String> {
        self.value(text, field, scope).and_then(FieldValue::into_text)
    }
}

/// Parse with the built-in Fusion dialect.
pub fn parse(text: &str) -> Document {
    Parser::default().parse(text)
}
