// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_COLUMNS: usize = 4096;
pub const DEFAULT_MAX_ENTRIES: usize = 65536;

/// Limits applied while decoding so a corrupt count cannot drive an
/// unbounded allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
	/// Upper bound for the column count of a single table.
	pub max_columns: usize,
	/// Upper bound for every other counted collection, such as partitions,
	/// paths or properties.
	pub max_entries: usize,
}

impl Default for CodecConfig {
	fn default() -> Self {
		Self {
			max_columns: DEFAULT_MAX_COLUMNS,
			max_entries: DEFAULT_MAX_ENTRIES,
		}
	}
}
