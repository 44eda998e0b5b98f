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


//! Render benchmark results as CSV tables.

use crate::error::{ReportError, Result};
use cncbench_core::time::format_duration;
use cncbench_score::tool_life::tool_life_table;
use cncbench_score::{BenchmarkResult, ScoreBasis};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// File name of the per-driver table.
pub const SCORECARD_FILE: &str = "scorecard.csv";
/// File name of the per-category table.
pub const CATEGORIES_FILE: &str = "categories.csv";
/// File name of the per-product tool-life table.
pub const TOOL_LIFE_FILE: &str = "tool_life.csv";

/// Configuration for CSV output.
#[derive(Debug, Clone)]
pub struct ToCsvConfig {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Include header row (default: true)
    pub include_headers: bool,
    /// Quote style for fields (default: necessary)
    pub quote_style: csv::QuoteStyle,
}

impl Default for ToCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            include_headers: true,
            quote_style: csv::QuoteStyle::Necessary,
        }
    }
}

fn writer<W: Write>(out: W, config: &ToCsvConfig) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .quote_style(config.quote_style)
        .from_writer(out)
}

fn leader_label(result: &BenchmarkResult, leader: Option<usize>) -> String {
    match leader {
        Some(g) => result.groups[g].label.clone(),
        None => "tie".to_string(),
    }
}

/// Write one row per driver: raw value, display value and score per group.
pub fn to_csv_scorecard_writer<W: Write>(result: &BenchmarkResult, out: W, config: &ToCsvConfig) -> Result<()> {
    let mut wtr = writer(out, config);

    if config.include_headers {
        let mut header = vec![
            "driver_id".to_string(),
            "driver".to_string(),
            "category".to_string(),
            "basis".to_string(),
        ];
        for label in result.labels() {
            header.push(format!("{} value", label));
            header.push(format!("{} display", label));
            header.push(format!("{} score", label));
        }
        header.push("leader".to_string());
        wtr.write_record(&header).map_err(|e| ReportError::write("scorecard", e))?;
    }

    for driver in &result.drivers {
        let mut record = vec![
            driver.id.clone(),
            driver.name.clone(),
            driver.category.label().to_string(),
            match driver.basis {
                ScoreBasis::Relative => "relative".to_string(),
                ScoreBasis::Absolute => "absolute".to_string(),
            },
        ];
        for g in 0..result.groups.len() {
            record.push(format!("{}", driver.raw_values[g]));
            record.push(driver.display[g].clone());
            record.push(format!("{:.1}", driver.scores[g]));
        }
        record.push(leader_label(result, driver.leader()));
        wtr.write_record(&record)
            .map_err(|e| ReportError::write("scorecard", format!("driver '{}': {}", driver.id, e)))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write one row per weighted category, followed by a `Total` row.
pub fn to_csv_categories_writer<W: Write>(result: &BenchmarkResult, out: W, config: &ToCsvConfig) -> Result<()> {
    let mut wtr = writer(out, config);

    if config.include_headers {
        let mut header = vec!["category".to_string(), "weight".to_string()];
        header.extend(result.labels().iter().map(|l| l.to_string()));
        header.push("leader".to_string());
        wtr.write_record(&header).map_err(|e| ReportError::write("categories", e))?;
    }

    for (category, weight) in result.weights.iter() {
        let mut record = vec![category.label().to_string(), format!("{:.2}", weight)];
        for g in 0..result.groups.len() {
            record.push(format!("{:.1}", result.category_score(g, category)));
        }
        record.push(leader_label(result, result.category_leader(category)));
        wtr.write_record(&record).map_err(|e| ReportError::write("categories", e))?;
    }

    let mut total = vec!["Total".to_string(), "1.00".to_string()];
    total.extend(result.totals.iter().map(|t| format!("{:.1}", t)));
    total.push(leader_label(result, result.total_leader()));
    wtr.write_record(&total).map_err(|e| ReportError::write("categories", e))?;

    wtr.flush()?;
    Ok(())
}

/// Write one row per product code per group.
pub fn to_csv_tool_life_writer<W: Write>(result: &BenchmarkResult, out: W, config: &ToCsvConfig) -> Result<()> {
    let mut wtr = writer(out, config);

    if config.include_headers {
        wtr.write_record([
            "group",
            "product_code",
            "tool_refs",
            "time_s",
            "time",
            "utilization_pct",
            "status",
        ])
        .map_err(|e| ReportError::write("tool_life", e))?;
    }

    for group in &result.groups {
        for entry in tool_life_table(group) {
            wtr.write_record([
                group.label.clone(),
                entry.product_code.clone(),
                entry.tool_refs.join(" "),
                entry.time_s.to_string(),
                format_duration(entry.time_s),
                format!("{:.1}", entry.utilization * 100.0),
                entry.status.label().to_string(),
            ])
            .map_err(|e| ReportError::write("tool_life", e))?;
        }
    }

    wtr.flush()?;
    Ok(())
}

fn to_string_with<F>(context: &str, write: F) -> Result<String>
where
    F: FnOnce(&mut Vec<u8>) -> Result<()>,
{
    let mut buffer = Vec::with_capacity(1024);
    write(&mut buffer)?;
    String::from_utf8(buffer).map_err(|_| ReportError::InvalidUtf8 {
        context: context.to_string(),
    })
}

/// Render the per-driver table.
///
/// # Example
/// ```no_run
/// use cncbench_core::{parse, BenchConfig};
/// use cncbench_csv::to_csv_scorecard;
///
/// let a = parse("Setup Sheet for Program 1\nOperation 1/1 T1 D1 L1\n");
/// let b = parse("Setup Sheet for Program 2\nOperation 1/1 T2 D2 L2\n");
/// let result = cncbench_score::compare_pair(&a, &b, &BenchConfig::default()).unwrap();
/// println!("{}", to_csv_scorecard(&result).unwrap());
/// ```
pub fn to_csv_scorecard(result: &BenchmarkResult) -> Result<String> {
    to_string_with("scorecard output", |buf| {
        to_csv_scorecard_writer(result, buf, &ToCsvConfig::default())
    })
}

/// Render the per-category table.
pub fn to_csv_categories(result: &BenchmarkResult) -> Result<String> {
    to_string_with("categories output", |buf| {
        to_csv_categories_writer(result, buf, &ToCsvConfig::default())
    })
}

/// Render the tool-life table.
pub fn to_csv_tool_life(result: &BenchmarkResult) -> Result<String> {
    to_string_with("tool life output", |buf| {
        to_csv_tool_life_writer(result, buf, &ToCsvConfig::default())
    })
}

/// Write `scorecard.csv`, `categories.csv` and `tool_life.csv` into `dir`,
/// creating it if needed.
pub fn write_report_dir(result: &BenchmarkResult, dir: &Path, config: &ToCsvConfig) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    to_csv_scorecard_writer(result, std::fs::File::create(dir.join(SCORECARD_FILE))?, config)?;
    to_csv_categories_writer(result, std::fs::File::create(dir.join(CATEGORIES_FILE))?, config)?;
    to_csv_tool_life_writer(result, std::fs::File::create(dir.join(TOOL_LIFE_FILE))?, config)?;
    debug!(dir = %dir.display(), "wrote CSV report");
    Ok(())
}
