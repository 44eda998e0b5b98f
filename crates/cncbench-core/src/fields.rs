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

//! Labeled-field extraction.
//!
//! Runs a [`FieldExtractor`] over a text region. A label matches only when
//! directly followed by `:`. Every occurrence is tried in order and the first
//! one that yields a value wins.

use crate::dialect::{FieldExtractor, PostProcess, ValueGrammar};
use crate::time::parse_duration;

/// A value produced by an extractor.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Integer(u64),
    Number(f64),
    Seconds(u64),
    Text(String),
}

impl FieldValue {
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Integer(n) | Self::Seconds(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Integer(n) | Self::Seconds(n) => Some(*n as f64),
            Self::Text(_) => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl FieldExtractor {
    /// Extract this field from `text`, or `None` if no occurrence of the
    /// label yields a value.
    pub fn extract(&self, text: &str) -> Option<FieldValue> {
        label_values(text, &self.label).find_map(|rest| self.read_value(rest))
    }

    fn read_value(&self, rest: &str) -> Option<FieldValue> {
        match self.grammar {
            ValueGrammar::Integer => {
                let token = leading_token(rest.trim_start(), |c| c.is_ascii_digit());
                token.parse::<u64>().ok().map(FieldValue::Integer)
            }
            ValueGrammar::Number => {
                let token = leading_token(rest.trim_start(), |c| c.is_ascii_digit() || c == '.' || c == ',');
                if token.is_empty() {
                    return None;
                }
                // Unparsable tokens such as "1.2.3" still count as a match.
                let value = token.replace(',', "").parse::<f64>().unwrap_or(0.0);
                Some(FieldValue::Number(value))
            }
            ValueGrammar::Duration => {
                let token = leading_token(rest.trim_start(), |c| {
                    c.is_ascii_digit() || matches!(c, 'h' | 'm' | 's' | ':')
                });
                if token.is_empty() {
                    return None;
                }
                Some(FieldValue::Seconds(parse_duration(token)))
            }
            ValueGrammar::Line => {
                let rest = rest.trim_start_matches([' ', '\t']);
                let line = rest.lines().next().unwrap_or("");
                let value = apply_pipeline(line, &self.post);
                if value.is_empty() {
                    None
                } else {
                    Some(FieldValue::Text(value))
                }
            }
        }
    }
}

/// Iterate over the text following each `label:` occurrence.
pub(crate) fn label_values<'a, 'l>(
    text: &'a str,
    label: &'l str,
) -> impl Iterator<Item = &'a str> + 'l
where
    'a: 'l,
{
    text.match_indices(label).filter_map(move |(pos, _)| {
        let after = &text[pos + label.len()..];
        after.strip_prefix(':')
    })
}

fn leading_token(text: &str, accept: impl Fn(char) -> bool) -> &str {
    let end = text.find(|c: char| !accept(c)).unwrap_or(text.len());
    &text[..end]
}

fn apply_pipeline(text: &str, steps: &[PostProcess]) -> String {
    let mut value = text;
    for step in steps {
        value = match step {
            PostProcess::Trim => value.trim(),
            PostProcess::TruncateAtGap => truncate_at_gap(value),
            PostProcess::TruncateAtLabels(labels) => {
                let cut = labels
                    .iter()
                    .filter_map(|label| value.find(label.as_str()))
                    .min()
                    .unwrap_or(value.len());
                &value[..cut]
            }
            PostProcess::StripPrefix(prefix) => strip_prefix_ci(value, prefix),
            PostProcess::TruncateAtConnective(phrase) => match connective_start(value, phrase) {
                Some(cut) => &value[..cut],
                None => value,
            },
        };
    }
    value.to_string()
}

/// Cut at the first run of two or more whitespace characters.
pub(crate) fn truncate_at_gap(text: &str) -> &str {
    let mut run_start: Option<usize> = None;
    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            match run_start {
                Some(start) => return &text[..start],
                None => run_start = Some(i),
            }
        } else {
            run_start = None;
        }
    }
    text
}

fn strip_prefix_ci<'a>(text: &'a str, prefix: &str) -> &'a str {
    let n = prefix.len();
    if text.len() >= n && text.is_char_boundary(n) && text[..n].eq_ignore_ascii_case(prefix) {
        text[n..].trim_start()
    } else {
        text
    }
}

/// Byte offset of the whitespace run preceding `phrase`, if present.
fn connective_start(text: &str, phrase: &str) -> Option<usize> {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    if words.is_empty() {
        return None;
    }
    let mut prev_ws = false;
    for (i, c) in text.char_indices() {
        let ws = c.is_whitespace();
        if ws && !prev_ws && words_follow(text[i..].trim_start(), &words) {
            return Some(i);
        }
        prev_ws = ws;
    }
    None
}

fn words_follow(mut rest: &str, words: &[&str]) -> bool {
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            let trimmed = rest.trim_start();
            if trimmed.len() == rest.len() {
                return false;
            }
            rest = trimmed;
        }
        let n = word.len();
        if rest.len() < n || !rest.is_char_boundary(n) || !rest[..n].eq_ignore_ascii_case(word) {
            return false;
        }
        rest = &rest[n..];
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{Dialect, Field, Scope};

    fn extractor(field: Field) -> FieldExtractor {
        Dialect::fusion()
            .extractors_for(field, Scope::Operation)
            .next()
            .cloned()
            .expect("fusion dialect defines operation field")
    }

    #[test]
    fn test_number_strips_thousands_separator() {
        let value = extractor(Field::CuttingDistance).extract("Cutting Distance: 12,345.6mm");
        assert_eq!(value, Some(FieldValue::Number(12345.6)));
    }

    #[test]
    fn test_number_absent() {
        assert_eq!(extractor(Field::RapidDistance).extract("Cutting Distance: 1"), None);
    }

    #[test]
    fn test_label_values_outlive_label() {
        let text = "Strategy: Adaptive\nStrategy:Pocket";
        let values: Vec<&str> = {
            let label = String::from("Strategy");
            label_values(text, &label).collect()
        };
        assert_eq!(values, vec![" Adaptive\nStrategy:Pocket", "Pocket"]);
    }

    #[test]
    fn test_label_requires_colon() {
        let e = extractor(Field::CuttingDistance);
        assert_eq!(
            e.extract("Cutting Distance total\nCutting Distance: 7"),
            Some(FieldValue::Number(7.0))
        );
    }

    #[test]
    fn test_number_skips_empty_occurrence() {
        let e = extractor(Field::MaxFeedrate);
        assert_eq!(
            e.extract("Maximum Feedrate: n/a\nMaximum Feedrate: 1,500"),
            Some(FieldValue::Number(1500.0))
        );
    }

    #[test]
    fn test_duration_with_annotation() {
        let e = extractor(Field::CycleTime);
        assert_eq!(
            e.extract("Estimated Cycle Time: 4m:39s (15.2%)"),
            Some(FieldValue::Seconds(279))
        );
    }

    #[test]
    fn test_description_stops_at_gap_and_labels() {
        let e = extractor(Field::Description);
        let value = e.extract("Description: Roughing pass  Maximum Z: 10");
        assert_eq!(value.and_then(FieldValue::into_text).as_deref(), Some("Roughing pass"));

        let value = e.extract("Description: Finish Minimum Z: -3");
        assert_eq!(value.and_then(FieldValue::into_text).as_deref(), Some("Finish"));
    }

    #[test]
    fn test_product_inline_fields_dropped() {
        let e = extractor(Field::ProductCode);
        let value = e.extract("Product: ABC123  Maximum Feedrate: 500");
        assert_eq!(value.and_then(FieldValue::into_text).as_deref(), Some("ABC123"));
    }

    #[test]
    fn test_product_cosmetic_prefix_and_connective() {
        let e = extractor(Field::ProductCode);
        let value = e.extract("Product: fresa a punta tonda XYZ con inserto foo");
        assert_eq!(value.and_then(FieldValue::into_text).as_deref(), Some("XYZ"));

        let value = e.extract("Product: Fresa A Punta Tonda R5 CON INSERTO 10mm");
        assert_eq!(value.and_then(FieldValue::into_text).as_deref(), Some("R5"));
    }

    #[test]
    fn test_product_stays_on_its_line() {
        let e = extractor(Field::ProductCode);
        assert_eq!(e.extract("Product:\nCutting Distance: 3"), None);
    }

    #[test]
    fn test_truncate_at_gap() {
        assert_eq!(truncate_at_gap("a b  c"), "a b");
        assert_eq!(truncate_at_gap("a\t\tb"), "a");
        assert_eq!(truncate_at_gap("abc"), "abc");
    }

    #[test]
    fn test_connective_needs_preceding_whitespace() {
        assert_eq!(connective_start("con inserto", "con inserto"), None);
        assert_eq!(connective_start("X con inserto", "con inserto"), Some(1));
        assert_eq!(connective_start("X contra", "con inserto"), None);
    }
}
