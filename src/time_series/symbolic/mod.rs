// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Ordinal-pattern symbolization of real-valued series.

pub mod embedding;
pub mod ordinal_utils;
pub mod symbolize;

pub use ordinal_utils::{MAX_ORDER, PatternDictionary};
pub use symbolize::{symbolize_continuous, symbolize_series};
