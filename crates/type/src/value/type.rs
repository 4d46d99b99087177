// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Column data types known to the catalog
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	/// A boolean: true or false.
	Bool,
	/// A 1-byte signed integer
	Int1,
	/// A 2-byte signed integer
	Int2,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// A 16-byte signed integer
	Int16,
	/// A 4-byte floating point
	Float4,
	/// An 8-byte floating point
	Float8,
	/// A fixed point number, see column precision and scale
	Decimal,
	/// A fixed length string, see column length
	Char,
	/// A variable length string bounded by the column length
	Varchar,
	/// A date value (year, month, day)
	Date,
	/// A date and time value
	DateTime,
	/// A HyperLogLog sketch, only valid as an aggregated value column
	Hll,
}

impl Type {
	pub fn is_integer(&self) -> bool {
		matches!(self, Type::Int1 | Type::Int2 | Type::Int4 | Type::Int8 | Type::Int16)
	}

	pub fn is_floating_point(&self) -> bool {
		matches!(self, Type::Float4 | Type::Float8)
	}

	pub fn is_string(&self) -> bool {
		matches!(self, Type::Char | Type::Varchar)
	}

	pub fn is_temporal(&self) -> bool {
		matches!(self, Type::Date | Type::DateTime)
	}
}

impl Type {
	pub fn to_u8(&self) -> u8 {
		match self {
			Type::Bool => 0x01,
			Type::Int1 => 0x02,
			Type::Int2 => 0x03,
			Type::Int4 => 0x04,
			Type::Int8 => 0x05,
			Type::Int16 => 0x06,
			Type::Float4 => 0x07,
			Type::Float8 => 0x08,
			Type::Decimal => 0x09,
			Type::Char => 0x0A,
			Type::Varchar => 0x0B,
			Type::Date => 0x0C,
			Type::DateTime => 0x0D,
			Type::Hll => 0x0E,
		}
	}

	pub fn from_u8(value: u8) -> Option<Self> {
		Some(match value {
			0x01 => Type::Bool,
			0x02 => Type::Int1,
			0x03 => Type::Int2,
			0x04 => Type::Int4,
			0x05 => Type::Int8,
			0x06 => Type::Int16,
			0x07 => Type::Float4,
			0x08 => Type::Float8,
			0x09 => Type::Decimal,
			0x0A => Type::Char,
			0x0B => Type::Varchar,
			0x0C => Type::Date,
			0x0D => Type::DateTime,
			0x0E => Type::Hll,
			_ => return None,
		})
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Bool => f.write_str("BOOLEAN"),
			Type::Int1 => f.write_str("TINYINT"),
			Type::Int2 => f.write_str("SMALLINT"),
			Type::Int4 => f.write_str("INT"),
			Type::Int8 => f.write_str("BIGINT"),
			Type::Int16 => f.write_str("LARGEINT"),
			Type::Float4 => f.write_str("FLOAT"),
			Type::Float8 => f.write_str("DOUBLE"),
			Type::Decimal => f.write_str("DECIMAL"),
			Type::Char => f.write_str("CHAR"),
			Type::Varchar => f.write_str("VARCHAR"),
			Type::Date => f.write_str("DATE"),
			Type::DateTime => f.write_str("DATETIME"),
			Type::Hll => f.write_str("HLL"),
		}
	}
}
