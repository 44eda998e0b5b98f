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

//! Shared test fixtures for CNCBench.
//!
//! Fixtures are plain setup-sheet text, exactly what the parser receives
//! after PDF text extraction. That keeps this crate free of any dependency
//! on the crates it tests.
//!
//! ```rust
//! use cncbench_test::fixtures;
//! use cncbench_test::fixtures::builders::{OpBuilder, SetupBuilder, SheetBuilder};
//!
//! let text = fixtures::nc02_sheet();
//! assert!(text.contains("Document Path: C:/CAM/NC02 housing"));
//!
//! let custom = SheetBuilder::new()
//!     .setup(SetupBuilder::new("42").op(OpBuilder::new("T9").cut(10.0)))
//!     .build();
//! assert!(custom.contains("Cutting Distance: 10.00mm"));
//! ```

/// Canned sheets and builders.
pub mod fixtures;

pub use fixtures::*;

/// Write every fixture to `dir` as `<name>.txt`.
#[cfg(feature = "generate")]
pub fn write_fixtures_to_dir(dir: &std::path::Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;
    for (name, fixture_fn) in fixtures::all() {
        std::fs::write(dir.join(format!("{}.txt", name)), fixture_fn())?;
    }
    Ok(())
}
