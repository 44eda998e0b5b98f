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


//! Facade tests: text-level entry points and parallel parsing.

use cncbench::{compare_texts, parse_inputs, rank_texts, BenchConfig, ParseMode, ScoreError, SheetInput};
use cncbench_test::fixtures;
use proptest::prelude::*;

fn inputs() -> Vec<SheetInput> {
    fixtures::all()
        .into_iter()
        .map(|(name, fixture_fn)| SheetInput::new(format!("{}.txt", name), fixture_fn()))
        .collect()
}

#[test]
fn test_parallel_matches_sequential() {
    let inputs = inputs();
    let sequential = parse_inputs(&inputs, ParseMode::Sequential);
    let parallel = parse_inputs(&inputs, ParseMode::Parallel);
    assert_eq!(sequential, parallel);
}

#[test]
fn test_rank_texts_same_result_in_both_modes() {
    let inputs = inputs();
    let config = BenchConfig::default();
    let sequential = rank_texts(&inputs, &config, ParseMode::Sequential).unwrap();
    let parallel = rank_texts(&inputs, &config, ParseMode::Parallel).unwrap();
    assert_eq!(sequential, parallel);
    assert_eq!(sequential.groups.len(), 3);
    assert_eq!(sequential.excluded.len(), 2);
}

#[test]
fn test_compare_texts() {
    let result = compare_texts(
        SheetInput::new("nc02.txt", fixtures::nc02_sheet()),
        SheetInput::new("tp02.txt", fixtures::tp02_sheet()),
        &BenchConfig::default(),
    )
    .unwrap();
    assert_eq!(result.labels(), vec!["NC02", "TP02"]);
}

#[test]
fn test_compare_texts_empty_side() {
    let err = compare_texts(
        SheetInput::new("nc02.txt", fixtures::nc02_sheet()),
        SheetInput::new("empty.txt", fixtures::empty_sheet()),
        &BenchConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ScoreError::NoOperations(_)));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Property: parallel parsing preserves input order for any permutation.
    #[test]
    fn prop_parallel_preserves_order(order in Just((0..5usize).collect::<Vec<_>>()).prop_shuffle()) {
        let all = inputs();
        let shuffled: Vec<SheetInput> = order.iter().map(|i| all[*i].clone()).collect();
        prop_assert_eq!(
            parse_inputs(&shuffled, ParseMode::Sequential),
            parse_inputs(&shuffled, ParseMode::Parallel)
        );
    }
}
