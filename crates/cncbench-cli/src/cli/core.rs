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


//! Benchmarking commands.

use crate::commands::{self, BenchOptions, OutputFormat};
use clap::Subcommand;

/// Core CNCBench commands.
///
/// - **Compare**: score two sheets head to head
/// - **Rank**: score and rank any number of sheets
/// - **Inspect**: show what the parser extracted from one sheet
#[derive(Subcommand)]
pub enum CoreCommands {
    /// Compare two setup sheets
    ///
    /// Both sheets must contain at least one operation.
    Compare {
        /// First sheet (extracted text)
        #[arg(value_name = "FILE_A")]
        a: String,

        /// Second sheet (extracted text)
        #[arg(value_name = "FILE_B")]
        b: String,

        /// Tool-life threshold in minutes
        #[arg(short = 't', long, default_value_t = 20)]
        tool_life: u64,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Also write CSV tables to this directory
        #[arg(long, value_name = "DIR")]
        csv_dir: Option<String>,
    },

    /// Rank setup sheets
    ///
    /// Accepts files and directories; a directory contributes every `.txt`
    /// file in it. Sheets without operations are excluded with a warning.
    Rank {
        /// Sheet files or directories
        #[arg(value_name = "INPUT", required = true)]
        inputs: Vec<String>,

        /// Tool-life threshold in minutes
        #[arg(short = 't', long, default_value_t = 20)]
        tool_life: u64,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Also write CSV tables to this directory
        #[arg(long, value_name = "DIR")]
        csv_dir: Option<String>,

        /// Parse sheets in parallel
        #[arg(short, long)]
        parallel: bool,
    },

    /// Print the parsed structure of one sheet
    Inspect {
        /// Sheet file (extracted text)
        #[arg(value_name = "FILE")]
        file: String,

        /// Show descriptions and distances of every operation
        #[arg(short, long)]
        verbose: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Tool-life threshold in minutes
        #[arg(short = 't', long, default_value_t = 20)]
        tool_life: u64,
    },
}

impl CoreCommands {
    /// Execute the core command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command execution fails.
    pub fn execute(self) -> Result<(), String> {
        match self {
            CoreCommands::Compare {
                a,
                b,
                tool_life,
                format,
                csv_dir,
            } => commands::compare(
                &a,
                &b,
                &BenchOptions {
                    tool_life_minutes: tool_life,
                    format,
                    csv_dir,
                    parallel: false,
                },
            ),
            CoreCommands::Rank {
                inputs,
                tool_life,
                format,
                csv_dir,
                parallel,
            } => commands::rank(
                &inputs,
                &BenchOptions {
                    tool_life_minutes: tool_life,
                    format,
                    csv_dir,
                    parallel,
                },
            ),
            CoreCommands::Inspect {
                file,
                verbose,
                format,
                tool_life,
            } => commands::inspect(&file, verbose, format, tool_life),
        }
    }
}
