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


//! Compare and rank commands.

use super::{
    bench_config, collect_inputs, read_file, render_json, render_text, source_name, OutputFormat,
};
use crate::error::CliError;
use cncbench::csv_report::{write_report_dir, ToCsvConfig};
use cncbench::{compare_texts, rank_texts, BenchmarkResult, ParseMode, SheetInput};
use colored::Colorize;
use std::path::Path;

/// Options shared by `compare` and `rank`.
#[derive(Debug, Clone)]
pub struct BenchOptions {
    /// Tool-life threshold in minutes.
    pub tool_life_minutes: u64,
    pub format: OutputFormat,
    /// Directory for `scorecard.csv`, `categories.csv` and `tool_life.csv`.
    pub csv_dir: Option<String>,
    /// Parse inputs on the rayon pool.
    pub parallel: bool,
}

impl Default for BenchOptions {
    fn default() -> Self {
        Self {
            tool_life_minutes: 20,
            format: OutputFormat::Text,
            csv_dir: None,
            parallel: false,
        }
    }
}

fn load(path: &str) -> Result<SheetInput, CliError> {
    Ok(SheetInput::new(source_name(path), read_file(path)?))
}

fn emit(result: &BenchmarkResult, options: &BenchOptions) -> Result<(), CliError> {
    match options.format {
        OutputFormat::Text => print!("{}", render_text(result)),
        OutputFormat::Json => println!("{}", render_json(result)?),
    }
    if let Some(dir) = &options.csv_dir {
        write_report_dir(result, Path::new(dir), &ToCsvConfig::default())?;
        if options.format == OutputFormat::Text {
            println!("\n{} {}", "CSV report written to".green(), dir);
        }
    }
    Ok(())
}

/// Compare two setup sheets head to head.
///
/// # Errors
///
/// Returns `Err` if either file cannot be read, the tool life is zero, or
/// either sheet has no operations.
///
/// # Examples
///
/// ```no_run
/// use cncbench_cli::commands::{compare, BenchOptions};
///
/// # fn main() -> Result<(), String> {
/// compare("NC02.txt", "NC03.txt", &BenchOptions::default())?;
/// # Ok(())
/// # }
/// ```
pub fn compare(a: &str, b: &str, options: &BenchOptions) -> Result<(), String> {
    run_compare(a, b, options).map_err(|e| e.to_string())
}

fn run_compare(a: &str, b: &str, options: &BenchOptions) -> Result<(), CliError> {
    let config = bench_config(options.tool_life_minutes)?;
    let result = compare_texts(load(a)?, load(b)?, &config)?;
    emit(&result, options)
}

/// Rank any number of setup sheets. Directories contribute their `.txt`
/// files; sheets without operations are excluded.
///
/// # Errors
///
/// Returns `Err` if fewer than two input files are given, a file cannot be
/// read, or fewer than two sheets have operations.
pub fn rank(inputs: &[String], options: &BenchOptions) -> Result<(), String> {
    run_rank(inputs, options).map_err(|e| e.to_string())
}

fn run_rank(inputs: &[String], options: &BenchOptions) -> Result<(), CliError> {
    let config = bench_config(options.tool_life_minutes)?;
    let files = collect_inputs(inputs)?;
    if files.len() < 2 {
        return Err(CliError::invalid_input(format!(
            "rank needs at least two input files, found {}",
            files.len()
        )));
    }

    let sheets = files
        .iter()
        .map(|path| load(&path.to_string_lossy()))
        .collect::<Result<Vec<_>, _>>()?;

    let mode = if options.parallel {
        ParseMode::Parallel
    } else {
        ParseMode::Sequential
    };
    let result = rank_texts(&sheets, &config, mode)?;
    emit(&result, options)
}
