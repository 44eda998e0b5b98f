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


//! CLI command definitions and argument parsing.
//!
//! - [`core`]: benchmarking commands (compare, rank, inspect)
//! - [`utility`]: utility commands (completion)

mod core;
mod utility;

use clap::{Parser, Subcommand};

pub use core::CoreCommands;
pub use utility::UtilityCommands;

/// CNCBench - CNC setup sheet benchmarking
///
/// Compares machining programs from the text of their CAM setup sheets and
/// ranks them on a weighted vendor-rating scorecard.
///
/// ```bash
/// # Compare two programs
/// cncbench compare NC02.txt NC03.txt
///
/// # Rank every sheet in a directory with a 30 minute tool life
/// cncbench rank sheets/ --tool-life 30 --csv-dir report/
/// ```
#[derive(Parser)]
#[command(name = "cncbench")]
#[command(author, version, about = "CNCBench - CNC setup sheet benchmarking", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands enum.
///
/// ```text
/// Commands
/// ├── Core (compare, rank, inspect)
/// └── Utility (completion)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Core commands - flattened to appear at top level
    #[command(flatten)]
    Core(CoreCommands),

    // Utility commands - flattened to appear at top level
    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns the error message of the failing command.
    pub fn execute(self) -> Result<(), String> {
        match self {
            Commands::Core(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}
