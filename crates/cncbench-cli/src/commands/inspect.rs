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


//! Inspect command - parsed setup-sheet structure

use super::{bench_config, read_file, source_name, OutputFormat};
use crate::error::CliError;
use cncbench::time::format_duration;
use cncbench::naming::group_label;
use cncbench::{compute, Document, Operation};
use colored::Colorize;

/// Print the setups and operations parsed from one sheet, followed by its
/// metrics when it has operations.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or JSON serialization fails.
///
/// # Examples
///
/// ```no_run
/// use cncbench_cli::commands::{inspect, OutputFormat};
///
/// # fn main() -> Result<(), String> {
/// inspect("NC02.txt", false, OutputFormat::Text, 20)?;
/// # Ok(())
/// # }
/// ```
pub fn inspect(file: &str, verbose: bool, format: OutputFormat, tool_life_minutes: u64) -> Result<(), String> {
    run_inspect(file, verbose, format, tool_life_minutes).map_err(|e| e.to_string())
}

fn run_inspect(file: &str, verbose: bool, format: OutputFormat, tool_life_minutes: u64) -> Result<(), CliError> {
    let config = bench_config(tool_life_minutes)?;
    let content = read_file(file)?;
    let doc = cncbench::Parser::default().parse_source(&content, &source_name(file));

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    print_document(&doc, verbose);

    match compute(&doc, config.tool_life_threshold_s) {
        Ok(m) => {
            println!();
            println!("{}", "Metrics:".cyan());
            println!("  Total time:     {}", format_duration(m.total_time_s));
            println!("  Cutting:        {:.0} mm", m.total_cut_mm);
            println!("  Rapid:          {:.0} mm", m.total_rapid_mm);
            println!("  Products:       {}", m.product_count);
            println!("  Tool changes:   {}", m.tool_changes);
            if let Some(code) = &m.peak_tool_code {
                println!(
                    "  Peak tool:      {} ({}, {:.1}% of cycle)",
                    code.green(),
                    format_duration(m.peak_tool_time_s),
                    m.peak_tool_share * 100.0
                );
            }
            println!(
                "  Over 50/75/100%: {}/{}/{}",
                m.tools_over_50, m.tools_over_75, m.tools_over_100
            );
        }
        Err(e) => {
            println!();
            println!("{} {}", "Warning:".yellow().bold(), e);
        }
    }

    Ok(())
}

fn print_document(doc: &Document, verbose: bool) {
    println!("{}", "Setup Sheet".bold().underline());
    println!();
    println!("{}  {}", "Document:".cyan(), doc.name);
    println!("{}     {}", "Label:".cyan(), group_label(&doc.name, doc.source.as_deref()));
    println!("{}    {}", "Setups:".cyan(), doc.setups.len());
    println!("{} {}", "Operations:".cyan(), doc.operation_count());

    for setup in &doc.setups {
        println!();
        println!(
            "{} {} (declared {}, {} ops, {} tools)",
            "Setup".green(),
            setup.program_id.green(),
            format_duration(setup.declared_cycle_time_s),
            setup.declared_op_count,
            setup.declared_tool_count
        );
        for op in &setup.operations {
            print_operation(op, verbose);
        }
    }
}

fn print_operation(op: &Operation, verbose: bool) {
    println!(
        "  {}/{} {} {:<12} {:<16} {:>10}",
        op.index,
        op.total_in_setup,
        format!("{:<4}", op.tool_ref).yellow(),
        op.product_code,
        op.strategy,
        format_duration(op.cycle_time_s)
    );
    if verbose {
        if !op.description.is_empty() {
            println!("      description: {}", op.description);
        }
        println!(
            "      cut {:.2} mm, rapid {:.2} mm, feed {:.0} mm/min",
            op.cutting_distance_mm, op.rapid_distance_mm, op.max_feedrate
        );
    }
}
