// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};
use tabula_core::{
	encoding,
	encoding::binary::{Reader, Writer},
	interface::catalog::PartitionId,
};

/// A horizontal slice of a native storage table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
	pub id: PartitionId,
	pub name: String,
	/// Highest data version visible to readers.
	pub visible_version: i64,
}

impl Partition {
	pub fn new(id: impl Into<PartitionId>, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			visible_version: 1,
		}
	}

	pub fn encode(&self, writer: &mut Writer) -> encoding::Result<()> {
		writer.write_u64(*self.id)?;
		writer.write_str(&self.name)?;
		writer.write_i64(self.visible_version)
	}

	pub fn decode(reader: &mut Reader<'_>) -> encoding::Result<Self> {
		Ok(Self {
			id: PartitionId(reader.read_u64()?),
			name: reader.read_string()?,
			visible_version: reader.read_i64()?,
		})
	}
}
