// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;

#[cfg(test)]
mod tests {
	use super::*;
	use crate::encoding::Result;

	/// Asserts that writing a value yields the expected bytes (hex encoded)
	/// and that reading them back consumes the whole buffer and yields the
	/// original value.
	macro_rules! test_binary {
		( $( $name:ident: $write:ident / $read:ident ( $input:expr ) => $expect:literal, )* ) => {
		$(
			#[test]
			fn $name() {
				let input = $input;
				let mut writer = Writer::new();
				writer.$write(input.clone()).unwrap();
				let output = writer.finish();
				assert_eq!(hex::encode(&output), $expect, "encode failed");

				let mut reader = Reader::new(&output);
				let decoded = reader.$read().unwrap();
				assert_eq!(decoded, input, "decode failed");
				reader.finish().unwrap();
			}
		)*
		};
	}

	test_binary! {
		bool_false: write_bool / read_bool(false) => "00",
		bool_true: write_bool / read_bool(true) => "01",

		u8_max: write_u8 / read_u8(u8::MAX) => "ff",

		i32_zero: write_i32 / read_i32(0i32) => "00000000",
		i32_neg_1: write_i32 / read_i32(-1i32) => "ffffffff",
		i32_65535: write_i32 / read_i32(65535i32) => "0000ffff",

		i64_min: write_i64 / read_i64(i64::MIN) => "8000000000000000",
		i64_1: write_i64 / read_i64(1i64) => "0000000000000001",

		u64_max: write_u64 / read_u64(u64::MAX) => "ffffffffffffffff",
		u64_1: write_u64 / read_u64(1u64) => "0000000000000001",

		string: write_str / read_string("foo") => "00000003666f6f",
		string_empty: write_str / read_string("") => "00000000",
		string_utf8: write_str / read_string("é") => "00000002c3a9",

		bytes: write_bytes / read_bytes([0x00u8, 0x01].as_slice()) => "000000020001",
	}

	#[test]
	fn test_truncated_integer() {
		let mut reader = Reader::new(&[0x00, 0x00, 0x01]);
		let err = reader.read_i32().unwrap_err();
		assert_eq!(err.0, "unexpected end of stream: wanted 4 bytes, 3 remaining");
	}

	#[test]
	fn test_truncated_string() {
		let mut reader = Reader::new(&[0x00, 0x00, 0x00, 0x05, b'a', b'b']);
		assert!(reader.read_string().is_err());
	}

	#[test]
	fn test_negative_length() {
		let mut reader = Reader::new(&[0xff, 0xff, 0xff, 0xfe]);
		let err = reader.read_string().unwrap_err();
		assert_eq!(err.0, "negative string length -2");
	}

	#[test]
	fn test_invalid_bool() {
		let mut reader = Reader::new(&[0x02]);
		let err = reader.read_bool().unwrap_err();
		assert_eq!(err.0, "invalid boolean byte 0x02");
	}

	#[test]
	fn test_invalid_utf8() {
		let mut reader = Reader::new(&[0x00, 0x00, 0x00, 0x01, 0xff]);
		assert!(reader.read_string().is_err());
	}

	#[test]
	fn test_read_count_bounds() -> Result<()> {
		let mut writer = Writer::new();
		writer.write_count(3)?;
		writer.write_i32(-1)?;
		writer.write_i32(10)?;
		let output = writer.finish();

		let mut reader = Reader::new(&output);
		assert_eq!(reader.read_count("column", 5)?, 3);
		assert_eq!(reader.read_count("column", 5).unwrap_err().0, "negative column count -1");
		assert_eq!(reader.read_count("column", 5).unwrap_err().0, "column count 10 exceeds limit of 5");
		Ok(())
	}

	#[test]
	fn test_finish_rejects_trailing_bytes() {
		let reader = Reader::new(&[0x01, 0x02]);
		let err = reader.finish().unwrap_err();
		assert_eq!(err.0, "unexpected trailing bytes [1, 2] at end of stream");
	}

	#[test]
	fn test_optional_string() -> Result<()> {
		let mut writer = Writer::new();
		writer.write_optional_str(Some("x"))?;
		writer.write_optional_str(None)?;
		let output = writer.finish();
		assert_eq!(hex::encode(&output), "01000000017800");

		let mut reader = Reader::new(&output);
		assert_eq!(reader.read_optional_string()?, Some("x".to_string()));
		assert_eq!(reader.read_optional_string()?, None);
		reader.finish()
	}
}
