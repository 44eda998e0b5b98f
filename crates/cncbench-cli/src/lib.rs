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


//! CNCBench CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **compare**: score two setup sheets head to head
//! - **rank**: score and rank sheets from files and directories
//! - **inspect**: show the parsed setups, operations and metrics of a sheet
//! - **completion**: generate shell completion scripts
//!
//! Reports print as colored tables or JSON (`--format json`) and can also
//! be written as CSV tables (`--csv-dir`).
//!
//! # Limits
//!
//! Input files larger than `CNCBENCH_MAX_FILE_SIZE` bytes (default 1 GB)
//! are rejected before reading.
//!
//! # Error Handling
//!
//! All commands return `Result<(), String>`.

pub mod cli;
pub mod commands;
pub mod error;
