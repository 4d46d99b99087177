// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{encoding::Result, invalid_data};

/// Appends big-endian encoded values to an owned buffer.
#[derive(Debug, Default)]
pub struct Writer {
	output: Vec<u8>,
}

impl Writer {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			output: Vec::with_capacity(capacity),
		}
	}

	pub fn len(&self) -> usize {
		self.output.len()
	}

	pub fn is_empty(&self) -> bool {
		self.output.is_empty()
	}

	pub fn finish(self) -> Vec<u8> {
		self.output
	}

	pub fn write_bool(&mut self, value: bool) -> Result<()> {
		self.output.push(value as u8);
		Ok(())
	}

	pub fn write_u8(&mut self, value: u8) -> Result<()> {
		self.output.push(value);
		Ok(())
	}

	pub fn write_i32(&mut self, value: i32) -> Result<()> {
		self.output.extend_from_slice(&value.to_be_bytes());
		Ok(())
	}

	pub fn write_i64(&mut self, value: i64) -> Result<()> {
		self.output.extend_from_slice(&value.to_be_bytes());
		Ok(())
	}

	pub fn write_u64(&mut self, value: u64) -> Result<()> {
		self.output.extend_from_slice(&value.to_be_bytes());
		Ok(())
	}

	/// Writes a collection size as a non-negative `i32`.
	pub fn write_count(&mut self, count: usize) -> Result<()> {
		let Ok(count) = i32::try_from(count) else {
			return invalid_data!("count {count} does not fit the stream format");
		};
		self.write_i32(count)
	}

	pub fn write_str(&mut self, value: &str) -> Result<()> {
		self.write_bytes(value.as_bytes())
	}

	pub fn write_optional_str(&mut self, value: Option<&str>) -> Result<()> {
		match value {
			Some(value) => {
				self.write_bool(true)?;
				self.write_str(value)
			}
			None => self.write_bool(false),
		}
	}

	/// Writes a length-prefixed byte frame.
	pub fn write_bytes(&mut self, value: &[u8]) -> Result<()> {
		self.write_count(value.len())?;
		self.output.extend_from_slice(value);
		Ok(())
	}
}
