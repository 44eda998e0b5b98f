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


//! Property-based tests for the duration codec and parser robustness.

use cncbench_core::time::{format_duration, parse_duration};
use cncbench_core::{compute, parse};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: formatting then parsing returns the same second count.
    #[test]
    fn prop_duration_roundtrip(seconds in 0u64..10_000_000) {
        prop_assert_eq!(parse_duration(&format_duration(seconds)), seconds);
    }

    /// Property: trailing annotations never change the parsed value.
    #[test]
    fn prop_annotation_ignored(seconds in 0u64..100_000, note in "[0-9a-z%. ]{0,12}") {
        let text = format!("{} ({})", format_duration(seconds), note);
        prop_assert_eq!(parse_duration(&text), seconds);
    }

    /// Property: the parser never panics on arbitrary text.
    #[test]
    fn prop_parse_arbitrary_text(text in "\\PC{0,400}") {
        let _ = parse(&text);
    }

    /// Property: every generated operation is recovered with its cut distance.
    #[test]
    fn prop_operations_recovered(cuts in proptest::collection::vec(0u32..100_000, 1..8)) {
        let mut text = String::from("Setup Sheet for Program 1\n");
        for (i, cut) in cuts.iter().enumerate() {
            text.push_str(&format!(
                "Operation {}/{} T{} D1 L1\nCutting Distance: {}mm\n",
                i + 1,
                cuts.len(),
                i + 1,
                cut
            ));
        }
        let doc = parse(&text);
        prop_assert_eq!(doc.operation_count(), cuts.len());
        let parsed: Vec<f64> = doc.operations().map(|op| op.cutting_distance_mm).collect();
        let expected: Vec<f64> = cuts.iter().map(|c| *c as f64).collect();
        prop_assert_eq!(parsed, expected);

        let metrics = compute(&doc, 1200).unwrap();
        prop_assert!(metrics.cut_ratio >= 0.0 && metrics.cut_ratio <= 1.0);
        prop_assert_eq!(metrics.tool_changes, cuts.len() - 1);
    }
}
