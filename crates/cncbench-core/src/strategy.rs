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

//! Machining strategy classification.
//!
//! The vocabulary is an ordered priority list. Entries are tried by prefix in
//! declaration order, so `Contour 2D` has to appear before `Contour`.

use crate::document::UNKNOWN_STRATEGY;
use crate::fields::label_values;

/// Ordered strategy vocabulary plus the description-based fallback families.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyVocabulary {
    label: String,
    description_label: String,
    entries: Vec<String>,
    families: Vec<(String, String)>,
}

impl Default for StrategyVocabulary {
    fn default() -> Self {
        Self::fusion()
    }
}

impl StrategyVocabulary {
    /// Create a vocabulary with the given entries and no description families.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: "Strategy".to_string(),
            description_label: "Description".to_string(),
            entries: entries.into_iter().map(Into::into).collect(),
            families: Vec::new(),
        }
    }

    /// Strategy names used by Fusion 360 / HSMWorks.
    pub fn fusion() -> Self {
        Self::new([
            "Adaptive",
            "Facing",
            "Contour 2D",
            "Contour",
            "Drilling",
            "Scallop",
            "Bore",
            "Pocket",
            "Slot",
            "Trace",
            "Radial",
            "Spiral",
            "Morphed Spiral",
            "Parallel",
            "Pencil",
            "Steep and Shallow",
        ])
        .with_family("flat", "Flat")
    }

    /// Append an entry at the lowest priority.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    /// Insert an entry ahead of everything else.
    pub fn push_front(&mut self, entry: impl Into<String>) {
        self.entries.insert(0, entry.into());
    }

    /// Add a description family: a description whose leading word starts
    /// with `prefix` (case-insensitive) is classified as `family`.
    pub fn with_family(mut self, prefix: impl Into<String>, family: impl Into<String>) -> Self {
        self.families.push((prefix.into(), family.into()));
        self
    }

    /// Vocabulary entries in priority order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// First entry that is a prefix of `raw`.
    pub fn match_prefix(&self, raw: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| raw.starts_with(entry.as_str()))
            .map(String::as_str)
    }

    /// Classify an operation from its full text.
    ///
    /// An explicit strategy label wins. Without one, the leading word of the
    /// description is checked against the families. Anything else is
    /// [`UNKNOWN_STRATEGY`].
    pub fn classify(&self, op_text: &str) -> String {
        if let Some(raw) = self.explicit_strategy(op_text) {
            return match self.match_prefix(raw) {
                Some(entry) => entry.to_string(),
                None => raw.split_whitespace().next().unwrap_or(raw).to_string(),
            };
        }

        if let Some(word) = self.description_word(op_text) {
            let lower = word.to_lowercase();
            for (prefix, family) in &self.families {
                if lower.starts_with(&prefix.to_lowercase()) {
                    return family.clone();
                }
            }
        }

        UNKNOWN_STRATEGY.to_string()
    }

    /// Value of the first strategy label that starts with a letter, cut at
    /// the first wide gap.
    fn explicit_strategy<'a>(&self, op_text: &'a str) -> Option<&'a str> {
        label_values(op_text, &self.label).find_map(|rest| {
            let rest = rest.trim_start_matches([' ', '\t']);
            if !rest.starts_with(|c: char| c.is_ascii_alphabetic()) {
                return None;
            }
            let line = rest.lines().next().unwrap_or(rest);
            let value = crate::fields::truncate_at_gap(line).trim_end();
            Some(value)
        })
    }

    /// Leading word of the description, skipping one leading number.
    fn description_word<'a>(&self, op_text: &'a str) -> Option<&'a str> {
        label_values(op_text, &self.description_label).find_map(|rest| {
            let mut rest = rest.trim_start();
            let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
            if digits > 0 {
                let after = &rest[digits..];
                if after.starts_with(char::is_whitespace) {
                    rest = after.trim_start();
                }
            }
            let end = rest
                .find(|c: char| !(c.is_alphanumeric() || c == '_'))
                .unwrap_or(rest.len());
            (end > 0).then(|| &rest[..end])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_strategy_prefix() {
        let vocab = StrategyVocabulary::fusion();
        assert_eq!(vocab.classify("Strategy: Adaptive Minimum"), "Adaptive");
        assert_eq!(vocab.classify("Strategy: Adaptive  Tolerance: 0.01"), "Adaptive");
    }

    #[test]
    fn test_ordered_vocabulary() {
        let vocab = StrategyVocabulary::fusion();
        assert_eq!(vocab.classify("Strategy: Contour 2D"), "Contour 2D");
        assert_eq!(vocab.classify("Strategy: Contour"), "Contour");
    }

    #[test]
    fn test_reordered_vocabulary_changes_result() {
        let vocab = StrategyVocabulary::new(["Contour", "Contour 2D"]);
        assert_eq!(vocab.classify("Strategy: Contour 2D"), "Contour");
    }

    #[test]
    fn test_multi_word_entry() {
        let vocab = StrategyVocabulary::fusion();
        assert_eq!(
            vocab.classify("Strategy: Steep and Shallow\nTolerance: 0.01"),
            "Steep and Shallow"
        );
    }

    #[test]
    fn test_unknown_label_falls_back_to_first_word() {
        let vocab = StrategyVocabulary::fusion();
        assert_eq!(vocab.classify("Strategy: Engrave Outline"), "Engrave");
    }

    #[test]
    fn test_description_family() {
        let vocab = StrategyVocabulary::fusion();
        assert_eq!(vocab.classify("Description: 123 Flatland"), "Flat");
        assert_eq!(vocab.classify("Description: FLAT1"), "Flat");
    }

    #[test]
    fn test_description_without_family_is_unknown() {
        let vocab = StrategyVocabulary::fusion();
        assert_eq!(vocab.classify("Description: roughing pass"), UNKNOWN_STRATEGY);
    }

    #[test]
    fn test_no_labels_is_unknown() {
        let vocab = StrategyVocabulary::fusion();
        assert_eq!(vocab.classify("Cutting Distance: 10"), UNKNOWN_STRATEGY);
    }

    #[test]
    fn test_strategy_label_must_start_with_letter() {
        let vocab = StrategyVocabulary::fusion();
        // Numeric strategy value is ignored; the description decides.
        assert_eq!(vocab.classify("Strategy: 42\nDescription: Flat bottom"), "Flat");
    }

    #[test]
    fn test_push_extends_vocabulary() {
        let mut vocab = StrategyVocabulary::fusion();
        vocab.push_front("Adaptive Clearing");
        assert_eq!(vocab.classify("Strategy: Adaptive Clearing"), "Adaptive Clearing");
        vocab.push("Engrave");
        assert_eq!(vocab.entries().last().map(String::as_str), Some("Engrave"));
    }
}
