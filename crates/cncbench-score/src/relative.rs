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


//! Relative scoring.
//!
//! The best entrant on a driver earns 100 and the others a proportional
//! share. Two rules exist and are kept apart on purpose:
//!
//! - [`relative_score_nway`]: any zero earns 100 (unless all are zero).
//! - [`relative_score`] with exactly two entrants: when one value is zero and
//!   lower is better, that entrant earns 100 and the other earns 0.
//!
//! All scores are rounded to one decimal.

/// Which way a raw value improves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    LowerIsBetter,
    HigherIsBetter,
}

impl Direction {
    pub fn is_lower_better(self) -> bool {
        self == Self::LowerIsBetter
    }
}

/// How many entrants a comparison has and which zero rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ComparisonMode {
    /// Exactly two groups, scored with [`relative_score`].
    Pairwise,
    /// Two or more groups, scored with [`relative_score_nway`].
    Ranking,
}

impl ComparisonMode {
    /// Score raw values under this mode's rule.
    pub fn score(self, values: &[f64], direction: Direction) -> Vec<f64> {
        match self {
            Self::Pairwise => relative_score(values, direction),
            Self::Ranking => relative_score_nway(values, direction),
        }
    }
}

/// Round half away from zero to one decimal.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Relative scores, applying the two-entrant rule when there are exactly
/// two values.
///
/// ```
/// use cncbench_score::{relative_score, Direction};
///
/// assert_eq!(relative_score(&[100.0, 50.0], Direction::LowerIsBetter), vec![50.0, 100.0]);
/// assert_eq!(relative_score(&[0.0, 50.0], Direction::LowerIsBetter), vec![100.0, 0.0]);
/// assert_eq!(relative_score(&[0.0, 0.0], Direction::LowerIsBetter), vec![100.0, 100.0]);
/// ```
pub fn relative_score(values: &[f64], direction: Direction) -> Vec<f64> {
    match values {
        [a, b] => {
            let (sa, sb) = pairwise(*a, *b, direction);
            vec![sa, sb]
        }
        _ => relative_score_nway(values, direction),
    }
}

fn pairwise(a: f64, b: f64, direction: Direction) -> (f64, f64) {
    if a == 0.0 && b == 0.0 {
        return (100.0, 100.0);
    }
    match direction {
        Direction::LowerIsBetter => {
            if a == 0.0 {
                return (100.0, 0.0);
            }
            if b == 0.0 {
                return (0.0, 100.0);
            }
            let best = a.min(b);
            (round1(best / a * 100.0), round1(best / b * 100.0))
        }
        Direction::HigherIsBetter => {
            let best = a.max(b);
            if best == 0.0 {
                return (100.0, 100.0);
            }
            (round1(a / best * 100.0), round1(b / best * 100.0))
        }
    }
}

/// Relative scores under the general N-way rule.
///
/// ```
/// use cncbench_score::{relative_score_nway, Direction};
///
/// assert_eq!(relative_score_nway(&[0.0, 50.0], Direction::LowerIsBetter), vec![100.0, 100.0]);
/// assert_eq!(
///     relative_score_nway(&[40.0, 80.0, 20.0], Direction::HigherIsBetter),
///     vec![50.0, 100.0, 25.0]
/// );
/// ```
pub fn relative_score_nway(values: &[f64], direction: Direction) -> Vec<f64> {
    if values.iter().all(|v| *v == 0.0) {
        return vec![100.0; values.len()];
    }
    match direction {
        Direction::LowerIsBetter => {
            let best = values
                .iter()
                .copied()
                .filter(|v| *v > 0.0)
                .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |b| b.min(v))));
            match best {
                Some(best) => values
                    .iter()
                    .map(|v| if *v > 0.0 { round1(best / v * 100.0) } else { 100.0 })
                    .collect(),
                None => vec![100.0; values.len()],
            }
        }
        Direction::HigherIsBetter => {
            let best = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            if best <= 0.0 {
                return vec![100.0; values.len()];
            }
            values.iter().map(|v| round1(v / best * 100.0)).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    #[test]
    fn test_pairwise_lower_is_better() {
        assert_eq!(relative_score(&[100.0, 50.0], LowerIsBetter), vec![50.0, 100.0]);
        assert_eq!(relative_score(&[30.0, 90.0], LowerIsBetter), vec![100.0, 33.3]);
    }

    #[test]
    fn test_pairwise_zero_rule() {
        assert_eq!(relative_score(&[0.0, 50.0], LowerIsBetter), vec![100.0, 0.0]);
        assert_eq!(relative_score(&[50.0, 0.0], LowerIsBetter), vec![0.0, 100.0]);
        assert_eq!(relative_score(&[0.0, 0.0], LowerIsBetter), vec![100.0, 100.0]);
    }

    #[test]
    fn test_pairwise_and_nway_differ_on_zero() {
        let values = [0.0, 50.0];
        assert_ne!(
            relative_score(&values, LowerIsBetter),
            relative_score_nway(&values, LowerIsBetter)
        );
    }

    #[test]
    fn test_pairwise_higher_is_better() {
        assert_eq!(relative_score(&[0.8, 0.4], HigherIsBetter), vec![100.0, 50.0]);
        assert_eq!(relative_score(&[0.0, 0.0], HigherIsBetter), vec![100.0, 100.0]);
        assert_eq!(relative_score(&[0.0, 10.0], HigherIsBetter), vec![0.0, 100.0]);
    }

    #[test]
    fn test_nway_lower_is_better() {
        assert_eq!(
            relative_score_nway(&[100.0, 50.0, 200.0], LowerIsBetter),
            vec![50.0, 100.0, 25.0]
        );
        assert_eq!(
            relative_score_nway(&[0.0, 50.0, 100.0], LowerIsBetter),
            vec![100.0, 100.0, 50.0]
        );
    }

    #[test]
    fn test_nway_all_zero() {
        assert_eq!(relative_score_nway(&[0.0; 3], LowerIsBetter), vec![100.0; 3]);
        assert_eq!(relative_score_nway(&[0.0; 3], HigherIsBetter), vec![100.0; 3]);
    }

    #[test]
    fn test_three_values_use_nway() {
        assert_eq!(
            relative_score(&[0.0, 10.0, 20.0], LowerIsBetter),
            relative_score_nway(&[0.0, 10.0, 20.0], LowerIsBetter)
        );
    }

    #[test]
    fn test_mode_dispatch() {
        let values = [0.0, 50.0];
        assert_eq!(ComparisonMode::Pairwise.score(&values, LowerIsBetter), vec![100.0, 0.0]);
        assert_eq!(ComparisonMode::Ranking.score(&values, LowerIsBetter), vec![100.0, 100.0]);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(33.333), 33.3);
        assert_eq!(round1(66.66), 66.7);
        assert_eq!(round1(100.0), 100.0);
    }
}
