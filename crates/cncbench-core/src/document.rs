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

//! Document structure for parsed setup sheets.

/// Sentinel product code used when an operation carries no `Product:` field.
pub const NO_PRODUCT: &str = "N/A";

/// Strategy assigned when neither a strategy label nor a recognisable
/// description is present.
pub const UNKNOWN_STRATEGY: &str = "Unknown";

/// One machining pass.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Operation {
    /// Declared 1-based index within the setup.
    pub index: u32,
    /// Declared number of operations in the setup.
    pub total_in_setup: u32,
    /// Free-text description.
    pub description: String,
    /// Classified CAM strategy.
    pub strategy: String,
    /// Physical tool slot (e.g. `T3`).
    pub tool_ref: String,
    /// Logical tool catalog entry; [`NO_PRODUCT`] when absent.
    pub product_code: String,
    /// Cutting distance in millimetres.
    pub cutting_distance_mm: f64,
    /// Rapid distance in millimetres.
    pub rapid_distance_mm: f64,
    /// Maximum feedrate in mm/min.
    pub max_feedrate: f64,
    /// Estimated cycle time in seconds.
    pub cycle_time_s: u64,
}

impl Operation {
    /// Create an operation with the boundary fields set and every measured
    /// field at its default.
    pub fn new(index: u32, total_in_setup: u32, tool_ref: impl Into<String>) -> Self {
        Self {
            index,
            total_in_setup,
            tool_ref: tool_ref.into(),
            strategy: UNKNOWN_STRATEGY.to_string(),
            product_code: NO_PRODUCT.to_string(),
            ..Default::default()
        }
    }

    /// Whether the operation carries a real product code.
    pub fn has_product(&self) -> bool {
        self.product_code != NO_PRODUCT
    }
}

/// One declared program run.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Setup {
    /// Program number from the setup-sheet marker.
    pub program_id: String,
    /// Cycle time declared in the setup header (includes tool changes).
    pub declared_cycle_time_s: u64,
    /// Operation count declared in the setup header.
    pub declared_op_count: u32,
    /// Tool count declared in the setup header.
    pub declared_tool_count: u32,
    /// Operations in declaration order.
    pub operations: Vec<Operation>,
}

impl Setup {
    /// Create an empty setup for a program.
    pub fn new(program_id: impl Into<String>) -> Self {
        Self {
            program_id: program_id.into(),
            ..Default::default()
        }
    }

    /// Add an operation.
    pub fn add_operation(&mut self, operation: Operation) {
        self.operations.push(operation);
    }

    /// Sum of the per-operation cycle times.
    ///
    /// Lower than the declared time whenever the sheet accounts for tool
    /// changes and other overhead in the header.
    pub fn operation_time_s(&self) -> u64 {
        self.operations
            .iter()
            .fold(0u64, |acc, op| acc.saturating_add(op.cycle_time_s))
    }

    /// Number of adjacent operation pairs that switch tool slot.
    pub fn tool_changes(&self) -> usize {
        self.operations
            .windows(2)
            .filter(|pair| pair[0].tool_ref != pair[1].tool_ref)
            .count()
    }
}

/// A parsed setup-sheet document.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    /// Document name (`Document Path:` value, else the source name).
    pub name: String,
    /// Source name the text was loaded from (typically a file stem).
    pub source: Option<String>,
    /// Setups in document order.
    pub setups: Vec<Setup>,
}

impl Document {
    /// Create an empty document.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: None,
            setups: Vec::new(),
        }
    }

    /// Iterate over every operation across all setups, in order.
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.setups.iter().flat_map(|s| s.operations.iter())
    }

    /// Total number of operations across all setups.
    pub fn operation_count(&self) -> usize {
        self.setups.iter().map(|s| s.operations.len()).sum()
    }

    /// Whether no operation was extracted.
    pub fn is_empty(&self) -> bool {
        self.operation_count() == 0
    }
}
