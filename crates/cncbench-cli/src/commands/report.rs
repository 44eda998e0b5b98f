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


//! Console and JSON rendering of benchmark results.

use crate::error::CliError;
use cncbench::time::format_duration;
use cncbench::{BenchmarkResult, ComparisonMode};
use colored::Colorize;
use std::fmt::Write as _;

const DRIVER_WIDTH: usize = 34;
const CELL_WIDTH: usize = 22;

fn title(result: &BenchmarkResult) -> String {
    match result.mode {
        ComparisonMode::Pairwise => "Pairwise comparison".to_string(),
        ComparisonMode::Ranking => format!("Ranking of {} programs", result.groups.len()),
    }
}

fn cell(text: &str, lead: bool) -> String {
    let padded = format!("{:<width$}", text, width = CELL_WIDTH);
    if lead {
        padded.green().bold().to_string()
    } else {
        padded
    }
}

fn header_row(out: &mut String, first: &str, labels: &[&str]) {
    let _ = write!(out, "  {:<width$}", first, width = DRIVER_WIDTH);
    for label in labels {
        let _ = write!(out, "{}", format!("{:<width$}", label, width = CELL_WIDTH).bold());
    }
    out.push('\n');
}

/// Render a result as colored console tables.
pub fn render_text(result: &BenchmarkResult) -> String {
    let mut out = String::new();
    let labels = result.labels();
    let threshold_min = result.tool_life_threshold_s() as f64 / 60.0;

    let _ = writeln!(
        out,
        "{} {}",
        "CNCBench".bold().underline(),
        format!("- {} (tool life {:.1} min)", title(result), threshold_min).bold()
    );
    out.push('\n');

    let _ = writeln!(out, "{}", "Programs:".cyan());
    for group in &result.groups {
        let _ = writeln!(
            out,
            "  {} {:<32} {:>12}  {:>4} ops  {:>3} products  {:>3} tool changes",
            format!("{:<8}", group.label).yellow(),
            group.name,
            format_duration(group.total_time_s),
            group.op_count,
            group.product_count,
            group.tool_changes
        );
    }

    for (category, weight) in result.weights.iter() {
        out.push('\n');
        let _ = writeln!(out, "{}", format!("{} ({:.0}%)", category, weight * 100.0).cyan());
        header_row(&mut out, "Driver", &labels);
        for driver in result.drivers_in(category) {
            let leader = driver.leader();
            let _ = write!(out, "  {:<width$}", driver.name, width = DRIVER_WIDTH);
            for g in 0..result.groups.len() {
                let text = format!("{} ({:.1})", driver.display[g], driver.scores[g]);
                out.push_str(&cell(&text, leader == Some(g)));
            }
            out.push('\n');
        }
    }

    out.push('\n');
    let _ = writeln!(out, "{}", "Category scores:".cyan());
    header_row(&mut out, "Category", &labels);
    for (category, weight) in result.weights.iter() {
        let leader = result.category_leader(category);
        let _ = write!(
            out,
            "  {:<width$}",
            format!("{} x{:.2}", category, weight),
            width = DRIVER_WIDTH
        );
        for g in 0..result.groups.len() {
            out.push_str(&cell(&format!("{:.1}", result.category_score(g, category)), leader == Some(g)));
        }
        out.push('\n');
    }
    let total_leader = result.total_leader();
    let _ = write!(out, "  {}", format!("{:<width$}", "TOTAL", width = DRIVER_WIDTH).bold());
    for (g, total) in result.totals.iter().enumerate() {
        out.push_str(&cell(&format!("{:.1}", total), total_leader == Some(g)));
    }
    out.push('\n');

    out.push('\n');
    let _ = writeln!(out, "{}", "Ranking:".cyan());
    for (position, &g) in result.ranking.iter().enumerate() {
        let line = format!("  {}. {:<8} {:>6.1}", position + 1, labels[g], result.totals[g]);
        if position == 0 {
            let _ = writeln!(out, "{}", line.green().bold());
        } else {
            let _ = writeln!(out, "{}", line);
        }
    }
    if let Some(winner) = result.winner() {
        let _ = writeln!(out, "\n{} {}", "Winner:".bold(), labels[winner].green().bold());
    }

    let alarms = result.alarms();
    if !alarms.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "{}", "Tool life alarms:".red().bold());
        for (g, entry) in alarms {
            let _ = writeln!(
                out,
                "  {:<8} {:<12} [{}] {} ({:.1}% of life) {}",
                labels[g],
                entry.product_code,
                entry.tool_refs.join(", "),
                format_duration(entry.time_s),
                entry.utilization * 100.0,
                entry.status.label().red()
            );
        }
    }

    if !result.excluded.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "{}", "Excluded:".yellow());
        for excluded in &result.excluded {
            let _ = writeln!(out, "  {} ({})", excluded.name, excluded.reason);
        }
    }

    out
}

/// Render a result as pretty JSON.
pub fn render_json(result: &BenchmarkResult) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(result)?)
}
