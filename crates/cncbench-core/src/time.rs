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

//! Compound duration codec.
//!
//! Setup sheets write cycle times as `4m:39s`, `26s` or `1h:02m:30s`, sometimes
//! followed by an annotation such as `(100%)`. [`parse_duration`] accepts any
//! combination of hour, minute and second groups; [`format_duration`] renders
//! the canonical `1h 02m 30s` form.

use regex::Regex;
use std::sync::LazyLock;

static HOURS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)h").expect("regex is compile-time constant"));
static MINUTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)m").expect("regex is compile-time constant"));
static SECONDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)s").expect("regex is compile-time constant"));

/// Parse a compound duration into seconds.
///
/// Anything from the first `(` onwards is ignored. Each of the hour, minute
/// and second groups is optional; text without any group yields `0`.
///
/// # Examples
///
/// ```
/// use cncbench_core::time::parse_duration;
///
/// assert_eq!(parse_duration("4m:39s"), 279);
/// assert_eq!(parse_duration("1h:02m:30s"), 3750);
/// assert_eq!(parse_duration("26s (12%)"), 26);
/// assert_eq!(parse_duration(""), 0);
/// ```
pub fn parse_duration(text: &str) -> u64 {
    let text = text.trim();
    let text = match text.find('(') {
        Some(pos) => text[..pos].trim(),
        None => text,
    };

    let hours = first_group(&HOURS, text);
    let minutes = first_group(&MINUTES, text);
    let seconds = first_group(&SECONDS, text);

    hours
        .saturating_mul(3600)
        .saturating_add(minutes.saturating_mul(60))
        .saturating_add(seconds)
}

fn first_group(re: &Regex, text: &str) -> u64 {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u64>().ok())
        .unwrap_or(0)
}

/// Render seconds as `H h MMm SSs`, omitting the hour segment when zero.
///
/// # Examples
///
/// ```
/// use cncbench_core::time::format_duration;
///
/// assert_eq!(format_duration(279), "4m 39s");
/// assert_eq!(format_duration(3750), "1h 02m 30s");
/// assert_eq!(format_duration(0), "0m 00s");
/// ```
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{}h {:02}m {:02}s", hours, minutes, secs)
    } else {
        format!("{}m {:02}s", minutes, secs)
    }
}

/// Render a fractional second count, truncating toward zero.
///
/// Averages such as "mean time per operation" are fractional; negative or
/// non-finite inputs render as zero.
pub fn format_duration_f64(seconds: f64) -> String {
    if seconds.is_finite() && seconds > 0.0 {
        format_duration(seconds as u64)
    } else {
        format_duration(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minutes_seconds() {
        assert_eq!(parse_duration("4m:39s"), 279);
    }

    #[test]
    fn test_parse_full() {
        assert_eq!(parse_duration("1h:02m:30s"), 3750);
    }

    #[test]
    fn test_parse_seconds_only() {
        assert_eq!(parse_duration("26s"), 26);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_duration(""), 0);
        assert_eq!(parse_duration("   "), 0);
    }

    #[test]
    fn test_parse_no_groups() {
        assert_eq!(parse_duration("n/a"), 0);
        assert_eq!(parse_duration("12"), 0);
    }

    #[test]
    fn test_parse_strips_annotation() {
        assert_eq!(parse_duration("4m:39s (15%)"), 279);
        // Groups inside the annotation are ignored
        assert_eq!(parse_duration("10s (2h)"), 10);
    }

    #[test]
    fn test_parse_any_order() {
        assert_eq!(parse_duration("30s 2m"), 150);
        assert_eq!(parse_duration("1h"), 3600);
    }

    #[test]
    fn test_parse_canonical_form() {
        assert_eq!(parse_duration("1h 02m 30s"), 3750);
        assert_eq!(parse_duration("0m 00s"), 0);
    }

    #[test]
    fn test_parse_huge_value_saturates() {
        let text = format!("{}h", u64::MAX);
        assert_eq!(parse_duration(&text), u64::MAX);
    }

    #[test]
    fn test_format_without_hours() {
        assert_eq!(format_duration(279), "4m 39s");
        assert_eq!(format_duration(5), "0m 05s");
    }

    #[test]
    fn test_format_with_hours() {
        assert_eq!(format_duration(3730), "1h 02m 10s");
        assert_eq!(format_duration(7200), "2h 00m 00s");
    }

    #[test]
    fn test_format_fractional() {
        assert_eq!(format_duration_f64(93.9), "1m 33s");
        assert_eq!(format_duration_f64(-3.0), "0m 00s");
        assert_eq!(format_duration_f64(f64::NAN), "0m 00s");
    }
}
