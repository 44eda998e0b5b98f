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


//! End-to-end scoring over the shared fixtures.

use cncbench_core::{parse, BenchConfig, Document};
use cncbench_score::{
    compare_pair, rank, tool_life::over_life_alarms, Category, ComparisonMode, ScoreBasis, ScoreError,
    ToolLifeStatus,
};
use cncbench_test::fixtures;

fn doc(text: String) -> Document {
    parse(&text)
}

fn driver_scores(result: &cncbench_score::BenchmarkResult, id: &str) -> Vec<f64> {
    result
        .drivers
        .iter()
        .find(|d| d.id == id)
        .map(|d| d.scores.clone())
        .unwrap_or_default()
}

// ==================== Pairwise tests ====================

#[test]
fn test_pairwise_driver_scores() {
    let result = compare_pair(
        &doc(fixtures::nc02_sheet()),
        &doc(fixtures::tp02_sheet()),
        &BenchConfig::default(),
    )
    .unwrap();

    assert_eq!(result.mode, ComparisonMode::Pairwise);
    assert_eq!(result.labels(), vec!["NC02", "TP02"]);
    assert_eq!(driver_scores(&result, "total-cycle-time"), vec![100.0, 75.0]);
    assert_eq!(driver_scores(&result, "unique-tools"), vec![66.7, 100.0]);
    assert_eq!(driver_scores(&result, "tool-changes"), vec![100.0, 50.0]);
    assert_eq!(driver_scores(&result, "operation-count"), vec![75.0, 100.0]);
    assert_eq!(driver_scores(&result, "over-life-penalty"), vec![100.0, 100.0]);
}

#[test]
fn test_pairwise_category_and_total() {
    let result = compare_pair(
        &doc(fixtures::nc02_sheet()),
        &doc(fixtures::tp02_sheet()),
        &BenchConfig::default(),
    )
    .unwrap();

    for g in 0..2 {
        let weighted: f64 = Category::ALL
            .iter()
            .map(|c| result.category_score(g, *c) * result.weights.get(*c))
            .sum();
        assert!((result.totals[g] - weighted).abs() <= 0.05 + 1e-9);
    }
    assert_eq!(result.ranking.len(), 2);
    assert!(result.totals[result.ranking[0]] >= result.totals[result.ranking[1]]);
}

#[test]
fn test_absolute_drivers_ignore_mode() {
    let docs = vec![doc(fixtures::nc02_sheet()), doc(fixtures::gr01_sheet())];
    let pair = compare_pair(&docs[0], &docs[1], &BenchConfig::default()).unwrap();
    let ranked = rank(&docs, &BenchConfig::default()).unwrap();

    for d in pair.drivers.iter().filter(|d| d.basis == ScoreBasis::Absolute) {
        assert_eq!(d.scores, driver_scores(&ranked, &d.id), "driver {}", d.id);
    }
    assert_eq!(driver_scores(&pair, "over-life-penalty"), vec![100.0, 50.0]);
}

#[test]
fn test_empty_document_is_fatal_in_pairwise() {
    let err = compare_pair(
        &doc(fixtures::empty_sheet()),
        &doc(fixtures::nc02_sheet()),
        &BenchConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ScoreError::NoOperations(_)));
}

// ==================== Ranking tests ====================

#[test]
fn test_ranking_three_documents() {
    let docs = vec![
        doc(fixtures::nc02_sheet()),
        doc(fixtures::tp02_sheet()),
        doc(fixtures::gr01_sheet()),
    ];
    let result = rank(&docs, &BenchConfig::default()).unwrap();

    assert_eq!(result.mode, ComparisonMode::Ranking);
    assert_eq!(result.groups.len(), 3);
    assert_eq!(driver_scores(&result, "total-cycle-time"), vec![100.0, 75.0, 55.6]);
    let mut sorted = result.ranking.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![0, 1, 2]);
    for pair in result.ranking.windows(2) {
        assert!(result.totals[pair[0]] >= result.totals[pair[1]]);
    }
}

#[test]
fn test_ranking_skips_empty_and_preamble_only() {
    let docs = vec![
        doc(fixtures::preamble_only()),
        doc(fixtures::nc02_sheet()),
        doc(fixtures::empty_sheet()),
        doc(fixtures::tp02_sheet()),
    ];
    let result = rank(&docs, &BenchConfig::default()).unwrap();
    assert_eq!(result.groups.len(), 2);
    assert_eq!(result.excluded.len(), 2);
}

#[test]
fn test_ranking_all_empty() {
    let docs = vec![doc(fixtures::empty_sheet()), doc(fixtures::preamble_only())];
    let err = rank(&docs, &BenchConfig::default()).unwrap_err();
    assert!(matches!(err, ScoreError::InsufficientGroups { found: 0 }));
}

// ==================== Tool life tests ====================

#[test]
fn test_gr01_alarm_reported() {
    let docs = vec![doc(fixtures::nc02_sheet()), doc(fixtures::gr01_sheet())];
    let result = rank(&docs, &BenchConfig::default()).unwrap();
    let alarms = result.alarms();
    assert_eq!(alarms.len(), 1);
    let (group, entry) = &alarms[0];
    assert_eq!(result.groups[*group].label, "GR01");
    assert_eq!(entry.product_code, "FM50");
    assert_eq!(entry.status, ToolLifeStatus::Exceeded);
}

#[test]
fn test_lower_threshold_raises_alarms() {
    let tp02 = cncbench_core::compute(&doc(fixtures::tp02_sheet()), 600).unwrap();
    let alarms = over_life_alarms(&tp02);
    assert_eq!(alarms.len(), 1);
    assert_eq!(alarms[0].product_code, "EM12");
}
