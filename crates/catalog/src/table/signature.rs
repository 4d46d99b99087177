// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use xxhash_rust::xxh3::Xxh3;

/// Feeds table structure into an xxh3 digest. Strings are length-prefixed so
/// adjacent fields cannot run into each other.
pub struct SignatureHasher(Xxh3);

impl SignatureHasher {
	pub fn new(version: u32) -> Self {
		let mut hasher = Xxh3::new();
		hasher.update(&version.to_be_bytes());
		Self(hasher)
	}

	pub fn u8(&mut self, value: u8) {
		self.0.update(&[value]);
	}

	pub fn bool(&mut self, value: bool) {
		self.u8(value as u8);
	}

	pub fn u64(&mut self, value: u64) {
		self.0.update(&value.to_be_bytes());
	}

	pub fn str(&mut self, value: &str) {
		self.u64(value.len() as u64);
		self.0.update(value.as_bytes());
	}

	pub fn strs<'a>(&mut self, values: impl IntoIterator<Item = &'a str>) {
		let values: Vec<&str> = values.into_iter().collect();
		self.u64(values.len() as u64);
		for value in values {
			self.str(value);
		}
	}

	pub fn finish(&self) -> u64 {
		self.0.digest()
	}
}
