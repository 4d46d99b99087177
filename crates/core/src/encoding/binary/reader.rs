// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{encoding::Result, invalid_data};

/// Reads big-endian encoded values from a fully materialized buffer.
///
/// Every read checks the remaining length first, so a truncated stream is
/// reported as an error instead of a panic.
#[derive(Debug)]
pub struct Reader<'a> {
	input: &'a [u8],
}

impl<'a> Reader<'a> {
	pub fn new(input: &'a [u8]) -> Self {
		Self {
			input,
		}
	}

	pub fn remaining(&self) -> usize {
		self.input.len()
	}

	pub fn is_empty(&self) -> bool {
		self.input.is_empty()
	}

	/// Consumes the reader, failing if any bytes were left unread.
	pub fn finish(self) -> Result<()> {
		if !self.input.is_empty() {
			return invalid_data!("unexpected trailing bytes {:?} at end of stream", self.input);
		}
		Ok(())
	}

	fn take(&mut self, len: usize) -> Result<&'a [u8]> {
		if self.input.len() < len {
			return invalid_data!(
				"unexpected end of stream: wanted {len} bytes, {} remaining",
				self.input.len()
			);
		}
		let (bytes, rest) = self.input.split_at(len);
		self.input = rest;
		Ok(bytes)
	}

	fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let mut buffer = [0u8; N];
		buffer.copy_from_slice(self.take(N)?);
		Ok(buffer)
	}

	/// Skips `len` bytes.
	pub fn skip(&mut self, len: usize) -> Result<()> {
		self.take(len).map(|_| ())
	}

	pub fn read_bool(&mut self) -> Result<bool> {
		match self.read_u8()? {
			0x00 => Ok(false),
			0x01 => Ok(true),
			byte => invalid_data!("invalid boolean byte {byte:#04x}"),
		}
	}

	pub fn read_u8(&mut self) -> Result<u8> {
		Ok(self.take_array::<1>()?[0])
	}

	pub fn read_i32(&mut self) -> Result<i32> {
		Ok(i32::from_be_bytes(self.take_array()?))
	}

	pub fn read_i64(&mut self) -> Result<i64> {
		Ok(i64::from_be_bytes(self.take_array()?))
	}

	pub fn read_u64(&mut self) -> Result<u64> {
		Ok(u64::from_be_bytes(self.take_array()?))
	}

	/// Reads a collection size written by `Writer::write_count`, rejecting
	/// negative sizes and sizes above `max`.
	pub fn read_count(&mut self, what: &str, max: usize) -> Result<usize> {
		let count = self.read_i32()?;
		if count < 0 {
			return invalid_data!("negative {what} count {count}");
		}
		let count = usize::try_from(count)?;
		if count > max {
			return invalid_data!("{what} count {count} exceeds limit of {max}");
		}
		Ok(count)
	}

	fn read_len(&mut self, what: &str) -> Result<usize> {
		let len = self.read_i32()?;
		if len < 0 {
			return invalid_data!("negative {what} length {len}");
		}
		Ok(usize::try_from(len)?)
	}

	pub fn read_string(&mut self) -> Result<String> {
		let len = self.read_len("string")?;
		let bytes = self.take(len)?;
		Ok(String::from_utf8(bytes.to_vec())?)
	}

	pub fn read_optional_string(&mut self) -> Result<Option<String>> {
		if self.read_bool()? {
			Ok(Some(self.read_string()?))
		} else {
			Ok(None)
		}
	}

	/// Reads a length-prefixed byte frame, borrowing from the input.
	pub fn read_bytes(&mut self) -> Result<&'a [u8]> {
		let len = self.read_len("frame")?;
		self.take(len)
	}
}
