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


//! End-to-end parser and metrics tests over the shared fixtures.

use cncbench_core::{compute, parse, Parser, DEFAULT_TOOL_LIFE_S, NO_PRODUCT};
use cncbench_test::fixtures;

// ==================== Parser tests ====================

#[test]
fn test_nc02_structure() {
    let doc = parse(&fixtures::nc02_sheet());
    assert_eq!(doc.name, "C:/CAM/NC02 housing");
    assert_eq!(doc.setups.len(), 2);
    assert_eq!(doc.setups[0].program_id, "1001");
    assert_eq!(doc.setups[0].declared_cycle_time_s, 600);
    assert_eq!(doc.setups[0].declared_op_count, 3);
    assert_eq!(doc.setups[0].declared_tool_count, 2);
    assert_eq!(doc.setups[1].declared_cycle_time_s, 300);
    assert_eq!(doc.operation_count(), 4);
}

#[test]
fn test_nc02_operation_fields() {
    let doc = parse(&fixtures::nc02_sheet());
    let ops: Vec<_> = doc.operations().collect();

    assert_eq!(ops[0].tool_ref, "T1");
    assert_eq!(ops[0].strategy, "Adaptive");
    assert_eq!(ops[0].description, "Roughing");
    assert_eq!(ops[0].product_code, "EM10");
    assert_eq!(ops[0].cutting_distance_mm, 2000.0);
    assert_eq!(ops[0].rapid_distance_mm, 200.0);
    assert_eq!(ops[0].max_feedrate, 3000.0);
    assert_eq!(ops[0].cycle_time_s, 240);

    assert_eq!(ops[1].strategy, "Contour 2D");
    assert_eq!(ops[2].strategy, "Drilling");
    assert_eq!(ops[3].product_code, "BN6");
    assert_eq!((ops[3].index, ops[3].total_in_setup), (1, 1));
}

#[test]
fn test_gr01_defaults_and_flat_family() {
    let doc = parse(&fixtures::gr01_sheet());
    let op = &doc.setups[0].operations[1];
    assert_eq!(op.strategy, "Flat");
    assert_eq!(op.product_code, NO_PRODUCT);
    assert_eq!(doc.setups[0].declared_cycle_time_s, 0);
}

#[test]
fn test_empty_and_preamble_fixtures() {
    let empty = parse(&fixtures::empty_sheet());
    assert_eq!(empty.setups.len(), 1);
    assert!(empty.is_empty());

    let preamble = parse(&fixtures::preamble_only());
    assert!(preamble.setups.is_empty());
}

#[test]
fn test_source_name_used_without_document_path() {
    let text = fixtures::nc02_sheet().replace("Document Path: C:/CAM/NC02 housing\n", "");
    let doc = Parser::default().parse_source(&text, "nc02_export");
    assert_eq!(doc.name, "nc02_export");
}

#[test]
fn test_parse_is_deterministic() {
    let text = fixtures::tp02_sheet();
    assert_eq!(parse(&text), parse(&text));
}

// ==================== Metrics tests ====================

#[test]
fn test_nc02_metrics() {
    let m = compute(&parse(&fixtures::nc02_sheet()), DEFAULT_TOOL_LIFE_S).unwrap();
    assert_eq!(m.label, "NC02");
    assert_eq!(m.total_time_s, 900);
    assert_eq!(m.setup_times_s, vec![600, 300]);
    assert_eq!(m.setup_op_counts, vec![3, 1]);
    assert_eq!(m.op_count, 4);
    assert_eq!(m.product_count, 3);
    assert_eq!(m.tool_changes, 1);
    assert_eq!(m.total_cut_mm, 4100.0);
    assert_eq!(m.total_rapid_mm, 450.0);
    assert_eq!(m.tool_time_s["EM10"], 360);
    assert_eq!(m.peak_tool_code.as_deref(), Some("EM10"));
    assert!((m.peak_tool_share - 0.4).abs() < 1e-12);
    assert!((m.weighted_feed - 10_530_000.0 / 4100.0).abs() < 1e-9);
    assert_eq!(m.tools_over_50, 0);
}

#[test]
fn test_tp02_metrics() {
    let m = compute(&parse(&fixtures::tp02_sheet()), DEFAULT_TOOL_LIFE_S).unwrap();
    assert_eq!(m.label, "TP02");
    assert_eq!(m.total_time_s, 1200);
    assert_eq!(m.tool_changes, 2);
    assert_eq!(m.product_count, 2);
    assert_eq!(m.ops_per_tool, 1.5);
    assert_eq!(m.tools_over_50, 1);
    assert_eq!(m.tools_over_75, 0);
    let refs: Vec<_> = m.tool_refs["EM12"].iter().map(String::as_str).collect();
    assert_eq!(refs, vec!["T1", "T5"]);
}

#[test]
fn test_gr01_metrics_fall_back_to_operation_time() {
    let m = compute(&parse(&fixtures::gr01_sheet()), DEFAULT_TOOL_LIFE_S).unwrap();
    assert_eq!(m.label, "GR01");
    assert_eq!(m.total_time_s, 1620);
    assert_eq!(m.tools_over_100, 1);
    assert_eq!(m.product_count, 1);
    assert_eq!(m.tool_time_s[NO_PRODUCT], 120);
}

#[test]
fn test_threshold_changes_utilization() {
    let doc = parse(&fixtures::tp02_sheet());
    let strict = compute(&doc, 600).unwrap();
    assert_eq!(strict.tools_over_100, 1);
    assert_eq!(strict.tool_life_threshold_s, 600);
}

#[test]
fn test_empty_fixture_fails_metrics() {
    let err = compute(&parse(&fixtures::empty_sheet()), DEFAULT_TOOL_LIFE_S).unwrap_err();
    assert!(err.is_no_operations());
    assert_eq!(err.context.as_deref(), Some("NC09 empty"));
}
