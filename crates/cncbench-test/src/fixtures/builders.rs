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

//! Builder pattern for synthesising setup-sheet text.
//!
//! The builders emit the same layout a Fusion 360 "Setup Sheet" export has
//! after text extraction, so tests exercise the real parser end to end.

use std::collections::BTreeSet;
use std::fmt::Write as _;

/// Builder for a whole setup-sheet document.
///
/// # Examples
///
/// ```
/// use cncbench_test::fixtures::builders::{OpBuilder, SetupBuilder, SheetBuilder};
///
/// let text = SheetBuilder::new()
///     .document_path("C:/CAM/NC05 bracket")
///     .setup(
///         SetupBuilder::new("1001")
///             .cycle_time(300)
///             .op(OpBuilder::new("T1").strategy("Adaptive").cycle_time(120)),
///     )
///     .build();
///
/// assert!(text.contains("Setup Sheet for Program 1001"));
/// assert!(text.contains("Operation 1/1 T1 D1 L1"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SheetBuilder {
    document_path: Option<String>,
    preamble: Vec<String>,
    setups: Vec<SetupBuilder>,
}

impl SheetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `Document Path:` line.
    pub fn document_path(mut self, path: impl Into<String>) -> Self {
        self.document_path = Some(path.into());
        self
    }

    /// Adds a line of cover-page text before the first setup.
    pub fn preamble(mut self, line: impl Into<String>) -> Self {
        self.preamble.push(line.into());
        self
    }

    /// Adds a setup.
    pub fn setup(mut self, setup: SetupBuilder) -> Self {
        self.setups.push(setup);
        self
    }

    /// Renders the document text.
    pub fn build(self) -> String {
        let mut out = String::new();
        if let Some(path) = &self.document_path {
            let _ = writeln!(out, "Document Path: {}", path);
        }
        for line in &self.preamble {
            let _ = writeln!(out, "{}", line);
        }
        for setup in &self.setups {
            setup.render(&mut out);
        }
        out
    }
}

/// Builder for one setup.
#[derive(Debug, Clone)]
pub struct SetupBuilder {
    program_id: String,
    cycle_time_s: Option<u64>,
    ops: Vec<OpBuilder>,
}

impl SetupBuilder {
    pub fn new(program_id: impl Into<String>) -> Self {
        Self {
            program_id: program_id.into(),
            cycle_time_s: None,
            ops: Vec::new(),
        }
    }

    /// Sets the declared cycle time in the setup header. Without it the
    /// header carries no cycle time line.
    pub fn cycle_time(mut self, seconds: u64) -> Self {
        self.cycle_time_s = Some(seconds);
        self
    }

    /// Adds an operation.
    pub fn op(mut self, op: OpBuilder) -> Self {
        self.ops.push(op);
        self
    }

    fn render(&self, out: &mut String) {
        let tools: BTreeSet<&str> = self.ops.iter().map(|op| op.tool_ref.as_str()).collect();
        let _ = writeln!(out, "Setup Sheet for Program {}", self.program_id);
        let _ = writeln!(out, "Number Of Operations: {}", self.ops.len());
        let _ = writeln!(out, "Number Of Tools: {}", tools.len());
        if let Some(seconds) = self.cycle_time_s {
            let _ = writeln!(out, "Estimated Cycle Time: {}", sheet_duration(seconds));
        }
        let total = self.ops.len();
        for (i, op) in self.ops.iter().enumerate() {
            op.render(out, i + 1, total);
        }
    }
}

/// Builder for one operation.
#[derive(Debug, Clone)]
pub struct OpBuilder {
    tool_ref: String,
    description: Option<String>,
    strategy: Option<String>,
    product: Option<String>,
    cutting_distance: f64,
    rapid_distance: f64,
    max_feedrate: f64,
    cycle_time_s: u64,
    extra: Vec<String>,
}

impl OpBuilder {
    /// Creates an operation on a tool slot such as `T3`.
    pub fn new(tool_ref: impl Into<String>) -> Self {
        Self {
            tool_ref: tool_ref.into(),
            description: None,
            strategy: None,
            product: None,
            cutting_distance: 0.0,
            rapid_distance: 0.0,
            max_feedrate: 0.0,
            cycle_time_s: 0,
            extra: Vec::new(),
        }
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn strategy(mut self, name: impl Into<String>) -> Self {
        self.strategy = Some(name.into());
        self
    }

    /// Sets the `Product:` line verbatim.
    pub fn product(mut self, line: impl Into<String>) -> Self {
        self.product = Some(line.into());
        self
    }

    pub fn cut(mut self, mm: f64) -> Self {
        self.cutting_distance = mm;
        self
    }

    pub fn rapid(mut self, mm: f64) -> Self {
        self.rapid_distance = mm;
        self
    }

    pub fn feed(mut self, mm_per_min: f64) -> Self {
        self.max_feedrate = mm_per_min;
        self
    }

    pub fn cycle_time(mut self, seconds: u64) -> Self {
        self.cycle_time_s = seconds;
        self
    }

    /// Adds a raw line to the operation body.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.extra.push(line.into());
        self
    }

    fn render(&self, out: &mut String, index: usize, total: usize) {
        let slot = self.tool_ref.trim_start_matches('T');
        let _ = writeln!(out, "Operation {}/{} {} D{} L{}", index, total, self.tool_ref, slot, slot);
        if let Some(description) = &self.description {
            let _ = writeln!(out, "Description: {}", description);
        }
        if let Some(strategy) = &self.strategy {
            let _ = writeln!(out, "Strategy: {}", strategy);
        }
        let _ = writeln!(out, "Maximum Feedrate: {}mm/min", thousands(self.max_feedrate));
        let _ = writeln!(out, "Cutting Distance: {}mm", thousands(self.cutting_distance));
        let _ = writeln!(out, "Rapid Distance: {}mm", thousands(self.rapid_distance));
        let _ = writeln!(out, "Estimated Cycle Time: {} (0%)", sheet_duration(self.cycle_time_s));
        if let Some(product) = &self.product {
            let _ = writeln!(out, "Product: {}", product);
        }
        for line in &self.extra {
            let _ = writeln!(out, "{}", line);
        }
    }
}

/// Renders seconds the way setup sheets print them (`4m:39s`, `1h:02m:30s`).
pub fn sheet_duration(seconds: u64) -> String {
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    if h > 0 {
        format!("{}h:{:02}m:{:02}s", h, m, s)
    } else {
        format!("{}m:{:02}s", m, s)
    }
}

/// Renders a distance with thousands separators and two decimals.
pub fn thousands(value: f64) -> String {
    let text = format!("{:.2}", value.abs());
    let (int_part, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let mut grouped = String::new();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}.{}", grouped, frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_duration() {
        assert_eq!(sheet_duration(279), "4m:39s");
        assert_eq!(sheet_duration(3750), "1h:02m:30s");
        assert_eq!(sheet_duration(0), "0m:00s");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0.0), "0.00");
        assert_eq!(thousands(999.5), "999.50");
        assert_eq!(thousands(12345.6), "12,345.60");
        assert_eq!(thousands(1_000_000.0), "1,000,000.00");
    }

    #[test]
    fn test_header_counts_distinct_tools() {
        let text = SheetBuilder::new()
            .setup(
                SetupBuilder::new("7")
                    .op(OpBuilder::new("T1"))
                    .op(OpBuilder::new("T1"))
                    .op(OpBuilder::new("T2")),
            )
            .build();
        assert!(text.contains("Number Of Operations: 3"));
        assert!(text.contains("Number Of Tools: 2"));
        assert!(text.contains("Operation 3/3 T2 D2 L2"));
        let header = text.split("Operation 1/3").next().unwrap_or_default();
        assert!(!header.contains("Estimated Cycle Time"));
    }
}
