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

//! Canned setup sheets.
//!
//! | Fixture | Setups | Ops | Total time | Notes |
//! |---|---|---|---|---|
//! | [`nc02_sheet`] | 2 | 4 | 900 s declared | cosmetic product prefix, one tool change |
//! | [`tp02_sheet`] | 1 | 3 | 1200 s declared | one product above 50 % of a 20 min life |
//! | [`gr01_sheet`] | 1 | 2 | 1620 s from operations | one product over life, one without product |
//! | [`empty_sheet`] | 1 | 0 | - | setup header only |
//! | [`preamble_only`] | 0 | 0 | - | no setup marker |

pub mod builders;

use builders::{OpBuilder, SetupBuilder, SheetBuilder};

/// Fixture name and generator pairs.
pub type FixtureList = Vec<(&'static str, fn() -> String)>;

/// Two setups, four operations, three products.
pub fn nc02_sheet() -> String {
    SheetBuilder::new()
        .document_path("C:/CAM/NC02 housing")
        .preamble("Setup Sheet overview - page 1")
        .setup(
            SetupBuilder::new("1001")
                .cycle_time(600)
                .op(OpBuilder::new("T1")
                    .description("Roughing")
                    .strategy("Adaptive")
                    .product("EM10  Flutes: 3")
                    .cut(2000.0)
                    .rapid(200.0)
                    .feed(3000.0)
                    .cycle_time(240))
                .op(OpBuilder::new("T1")
                    .description("Walls")
                    .strategy("Contour 2D")
                    .product("EM10  Flutes: 3")
                    .cut(500.0)
                    .rapid(100.0)
                    .feed(1500.0)
                    .cycle_time(120))
                .op(OpBuilder::new("T2")
                    .description("Holes")
                    .strategy("Drilling")
                    .product("DR6")
                    .cut(100.0)
                    .rapid(50.0)
                    .feed(300.0)
                    .cycle_time(60)),
        )
        .setup(
            SetupBuilder::new("1002").cycle_time(300).op(OpBuilder::new("T3")
                .description("Surface finish")
                .strategy("Parallel")
                .product("fresa a punta tonda BN6 con inserto R3")
                .cut(1500.0)
                .rapid(100.0)
                .feed(2500.0)
                .cycle_time(180)),
        )
        .build()
}

/// One setup, three operations; `EM12` runs 70 % of a 20 minute life.
pub fn tp02_sheet() -> String {
    SheetBuilder::new()
        .document_path("C:/CAM/TP02 housing")
        .setup(
            SetupBuilder::new("2001")
                .cycle_time(1200)
                .op(OpBuilder::new("T1")
                    .description("Roughing")
                    .strategy("Adaptive")
                    .product("EM12")
                    .cut(2400.0)
                    .rapid(400.0)
                    .feed(2800.0)
                    .cycle_time(540))
                .op(OpBuilder::new("T5")
                    .description("Pockets")
                    .strategy("Pocket")
                    .product("EM12")
                    .cut(800.0)
                    .rapid(300.0)
                    .feed(2000.0)
                    .cycle_time(300))
                .op(OpBuilder::new("T6")
                    .description("Blend")
                    .strategy("Scallop")
                    .product("BN4")
                    .cut(1200.0)
                    .rapid(100.0)
                    .feed(2200.0)
                    .cycle_time(240)),
        )
        .build()
}

/// No declared cycle time; `FM50` runs 125 % of a 20 minute life.
pub fn gr01_sheet() -> String {
    SheetBuilder::new()
        .document_path("GR01 plate")
        .setup(
            SetupBuilder::new("3001")
                .op(OpBuilder::new("T1")
                    .description("Face top")
                    .strategy("Facing")
                    .product("FM50")
                    .cut(3000.0)
                    .rapid(100.0)
                    .feed(4000.0)
                    .cycle_time(1500))
                .op(OpBuilder::new("T2")
                    .description("Flat finish")
                    .cut(200.0)
                    .rapid(20.0)
                    .feed(1000.0)
                    .cycle_time(120)),
        )
        .build()
}

/// A setup header without operations.
pub fn empty_sheet() -> String {
    SheetBuilder::new()
        .document_path("NC09 empty")
        .setup(SetupBuilder::new("9").cycle_time(60))
        .build()
}

/// Cover-page text only.
pub fn preamble_only() -> String {
    SheetBuilder::new()
        .preamble("Company cover page")
        .preamble("No program in this export")
        .build()
}

/// Every fixture.
pub fn all() -> FixtureList {
    vec![
        ("nc02", nc02_sheet),
        ("tp02", tp02_sheet),
        ("gr01", gr01_sheet),
        ("empty", empty_sheet),
        ("preamble_only", preamble_only),
    ]
}

/// Fixtures that contain at least one operation.
pub fn with_operations() -> FixtureList {
    vec![("nc02", nc02_sheet), ("tp02", tp02_sheet), ("gr01", gr01_sheet)]
}
