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

//! Short group labels.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static PROGRAM_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)((?:NC|TP|GR)\d+)").expect("regex is compile-time constant")
});

/// Derive a short label for a document.
///
/// Looks for an `NC`/`TP`/`GR` program token in the document name, then in
/// the source name. Falls back to the first word of the name.
///
/// ```
/// use cncbench_core::naming::group_label;
///
/// assert_eq!(group_label("C:/cam/nc02-housing", None), "NC02");
/// assert_eq!(group_label("housing", Some("tp7_export")), "TP7");
/// assert_eq!(group_label("plate_v2-final", None), "plate");
/// ```
pub fn group_label(name: &str, source: Option<&str>) -> String {
    for candidate in std::iter::once(name).chain(source) {
        if let Some(caps) = PROGRAM_TOKEN.captures(candidate) {
            return caps[1].to_uppercase();
        }
    }
    name.replace(['_', '-'], " ")
        .split_whitespace()
        .next()
        .map_or_else(|| name.to_string(), str::to_string)
}

/// Suffix duplicated labels with `_1`, `_2`, ... in input order.
///
/// Every member of a duplicated set is suffixed, the first included.
///
/// ```
/// use cncbench_core::naming::dedupe_labels;
///
/// let mut labels = vec!["NC02".to_string(), "TP02".to_string(), "NC02".to_string()];
/// dedupe_labels(&mut labels);
/// assert_eq!(labels, vec!["NC02_1", "TP02", "NC02_2"]);
/// ```
pub fn dedupe_labels(labels: &mut [String]) {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for label in labels.iter() {
        *counts.entry(label.clone()).or_default() += 1;
    }

    let mut seen: HashMap<String, usize> = HashMap::new();
    for label in labels.iter_mut() {
        if counts.get(label.as_str()).copied().unwrap_or(0) > 1 {
            let n = seen.entry(label.clone()).or_default();
            *n += 1;
            *label = format!("{}_{}", label, n);
        }
    }
}
