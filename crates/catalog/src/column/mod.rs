// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use tabula_core::{
	encoding,
	encoding::binary::{Reader, Writer},
	invalid_data,
};
use tabula_type::Type;
use tracing::trace;

use crate::table::{
	ddl::{quote, string_literal},
	signature::SignatureHasher,
};

/// How a value column of an aggregate-keyed table combines rows that share a
/// key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AggregationKind {
	Sum,
	Min,
	Max,
	Replace,
	HllUnion,
}

impl AggregationKind {
	pub fn to_u8(&self) -> u8 {
		match self {
			AggregationKind::Sum => 0x01,
			AggregationKind::Min => 0x02,
			AggregationKind::Max => 0x03,
			AggregationKind::Replace => 0x04,
			AggregationKind::HllUnion => 0x05,
		}
	}

	pub fn from_u8(value: u8) -> Option<Self> {
		Some(match value {
			0x01 => AggregationKind::Sum,
			0x02 => AggregationKind::Min,
			0x03 => AggregationKind::Max,
			0x04 => AggregationKind::Replace,
			0x05 => AggregationKind::HllUnion,
			_ => return None,
		})
	}
}

impl Display for AggregationKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			AggregationKind::Sum => f.write_str("SUM"),
			AggregationKind::Min => f.write_str("MIN"),
			AggregationKind::Max => f.write_str("MAX"),
			AggregationKind::Replace => f.write_str("REPLACE"),
			AggregationKind::HllUnion => f.write_str("HLL_UNION"),
		}
	}
}

/// A column of a table schema.
///
/// The table logic only looks at the name and the key flag; everything else
/// travels with the column through its own frame in the metadata stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
	pub name: String,
	pub ty: Type,
	/// Declared length of `CHAR`/`VARCHAR` columns, zero otherwise.
	pub length: u32,
	pub precision: u8,
	pub scale: u8,
	pub is_key: bool,
	pub nullable: bool,
	pub aggregation: Option<AggregationKind>,
	pub default_value: Option<String>,
	pub comment: String,
}

impl Column {
	pub fn new(name: impl Into<String>, ty: Type) -> Self {
		Self {
			name: name.into(),
			ty,
			length: 0,
			precision: 0,
			scale: 0,
			is_key: false,
			nullable: false,
			aggregation: None,
			default_value: None,
			comment: String::new(),
		}
	}

	pub fn key(mut self) -> Self {
		self.is_key = true;
		self
	}

	pub fn nullable(mut self) -> Self {
		self.nullable = true;
		self
	}

	pub fn with_length(mut self, length: u32) -> Self {
		self.length = length;
		self
	}

	pub fn with_precision(mut self, precision: u8, scale: u8) -> Self {
		self.precision = precision;
		self.scale = scale;
		self
	}

	pub fn with_aggregation(mut self, aggregation: AggregationKind) -> Self {
		self.aggregation = Some(aggregation);
		self
	}

	pub fn with_default(mut self, value: impl Into<String>) -> Self {
		self.default_value = Some(value.into());
		self
	}

	pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
		self.comment = comment.into();
		self
	}

	/// Writes the column as a single length-prefixed frame.
	pub fn encode(&self, writer: &mut Writer) -> encoding::Result<()> {
		let mut frame = Writer::with_capacity(32 + self.name.len() + self.comment.len());
		frame.write_str(&self.name)?;
		frame.write_u8(self.ty.to_u8())?;
		frame.write_i32(i32::try_from(self.length)?)?;
		frame.write_u8(self.precision)?;
		frame.write_u8(self.scale)?;
		frame.write_bool(self.is_key)?;
		frame.write_bool(self.nullable)?;
		frame.write_u8(self.aggregation.map_or(0, |aggregation| aggregation.to_u8()))?;
		frame.write_optional_str(self.default_value.as_deref())?;
		frame.write_str(&self.comment)?;
		writer.write_bytes(&frame.finish())
	}

	/// Reads a column frame. Bytes after the known fields belong to newer
	/// writers and are skipped.
	pub fn decode(reader: &mut Reader<'_>) -> encoding::Result<Self> {
		let mut frame = Reader::new(reader.read_bytes()?);

		let name = frame.read_string()?;
		let code = frame.read_u8()?;
		let Some(ty) = Type::from_u8(code) else {
			return invalid_data!("column `{name}` has unknown type code {code:#04x}");
		};
		let length = u32::try_from(frame.read_i32()?)?;
		let precision = frame.read_u8()?;
		let scale = frame.read_u8()?;
		let is_key = frame.read_bool()?;
		let nullable = frame.read_bool()?;
		let aggregation = match frame.read_u8()? {
			0 => None,
			code => match AggregationKind::from_u8(code) {
				Some(aggregation) => Some(aggregation),
				None => return invalid_data!("column `{name}` has unknown aggregation code {code:#04x}"),
			},
		};
		let default_value = frame.read_optional_string()?;
		let comment = frame.read_string()?;

		if !frame.is_empty() {
			trace!(column = %name, skipped = frame.remaining(), "skipping unknown column frame bytes");
		}

		Ok(Self {
			name,
			ty,
			length,
			precision,
			scale,
			is_key,
			nullable,
			aggregation,
			default_value,
			comment,
		})
	}

	/// Renders the column as it appears inside a `CREATE TABLE` column list.
	pub fn to_sql(&self) -> String {
		let mut sql = format!("{} {}", quote(&self.name), self.ty);
		match self.ty {
			Type::Char | Type::Varchar => sql.push_str(&format!("({})", self.length)),
			Type::Decimal => sql.push_str(&format!("({}, {})", self.precision, self.scale)),
			_ => {}
		}
		if let Some(aggregation) = self.aggregation {
			sql.push_str(&format!(" {aggregation}"));
		}
		sql.push_str(if self.nullable {
			" NULL"
		} else {
			" NOT NULL"
		});
		if let Some(default) = &self.default_value {
			sql.push_str(&format!(" DEFAULT {}", string_literal(default)));
		}
		sql.push_str(&format!(" COMMENT {}", string_literal(&self.comment)));
		sql
	}

	pub(crate) fn feed_signature(&self, hasher: &mut SignatureHasher) {
		hasher.str(&self.name);
		hasher.u8(self.ty.to_u8());
		hasher.u64(u64::from(self.length));
		hasher.u8(self.precision);
		hasher.u8(self.scale);
		hasher.bool(self.is_key);
		hasher.bool(self.nullable);
		hasher.u8(self.aggregation.map_or(0, |aggregation| aggregation.to_u8()));
	}
}
