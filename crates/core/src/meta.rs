// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::encoding::{
	Result,
	binary::{Reader, Writer},
};

/// Consistency marker carried by every persisted catalog object.
///
/// It records the last time (milliseconds since the epoch) the object was
/// checked for consistency across replicas. It is the first block after an
/// object's kind tag in the metadata stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaStamp {
	last_check_time: i64,
}

impl MetaStamp {
	pub fn new(last_check_time: i64) -> Self {
		Self {
			last_check_time,
		}
	}

	pub fn last_check_time(&self) -> i64 {
		self.last_check_time
	}

	/// Records a consistency check at `at`. The stamp never moves backwards.
	pub fn mark_checked(&mut self, at: i64) {
		self.last_check_time = self.last_check_time.max(at);
	}

	pub fn encode(&self, writer: &mut Writer) -> Result<()> {
		writer.write_i64(self.last_check_time)
	}

	pub fn decode(reader: &mut Reader<'_>) -> Result<Self> {
		Ok(Self {
			last_check_time: reader.read_i64()?,
		})
	}
}

/// Implemented by catalog objects that carry a [`MetaStamp`].
pub trait Versioned {
	fn stamp(&self) -> &MetaStamp;

	fn stamp_mut(&mut self) -> &mut MetaStamp;
}
