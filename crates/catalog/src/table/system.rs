// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{fmt, fmt::Display};

use serde::{Deserialize, Serialize};
use tabula_core::{
	MetaStamp,
	encoding,
	encoding::binary::{Reader, Writer},
	interface::catalog::TableId,
	invalid_data,
};
use tabula_type::Type;

use crate::{
	codec::CodecConfig,
	column::Column,
	descriptor::DescriptorDetail,
	index::ColumnIndex,
	table::{SqlTableType, Table, TableBehavior, TableKind},
};

/// The in-memory catalog listing a system view table is backed by.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemSource {
	Schemata,
	#[default]
	Tables,
	Columns,
	Views,
}

impl SystemSource {
	pub const ALL: [SystemSource; 4] =
		[SystemSource::Schemata, SystemSource::Tables, SystemSource::Columns, SystemSource::Views];

	pub fn as_str(&self) -> &'static str {
		match self {
			SystemSource::Schemata => "SCHEMATA",
			SystemSource::Tables => "TABLES",
			SystemSource::Columns => "COLUMNS",
			SystemSource::Views => "VIEWS",
		}
	}

	pub fn from_name(value: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|source| source.as_str() == value)
	}

	/// The fixed `information_schema` layout of this source.
	pub fn columns(&self) -> Vec<Column> {
		let varchar = |name: &str, length: u32| Column::new(name, Type::Varchar).with_length(length);
		match self {
			SystemSource::Schemata => vec![
				varchar("CATALOG_NAME", 512),
				varchar("SCHEMA_NAME", 64),
				varchar("DEFAULT_CHARACTER_SET_NAME", 32),
				varchar("DEFAULT_COLLATION_NAME", 32),
				varchar("SQL_PATH", 512).nullable(),
			],
			SystemSource::Tables => vec![
				varchar("TABLE_CATALOG", 512),
				varchar("TABLE_SCHEMA", 64),
				varchar("TABLE_NAME", 64),
				varchar("TABLE_TYPE", 64),
				varchar("ENGINE", 64).nullable(),
				Column::new("VERSION", Type::Int8).nullable(),
				Column::new("TABLE_ROWS", Type::Int8).nullable(),
				Column::new("CREATE_TIME", Type::DateTime).nullable(),
				varchar("TABLE_COMMENT", 2048),
			],
			SystemSource::Columns => vec![
				varchar("TABLE_SCHEMA", 64),
				varchar("TABLE_NAME", 64),
				varchar("COLUMN_NAME", 64),
				Column::new("ORDINAL_POSITION", Type::Int8),
				varchar("COLUMN_DEFAULT", 1024).nullable(),
				varchar("IS_NULLABLE", 3),
				varchar("DATA_TYPE", 64),
				varchar("COLUMN_TYPE", 32),
				varchar("COLUMN_KEY", 3),
				varchar("COLUMN_COMMENT", 1024),
			],
			SystemSource::Views => vec![
				varchar("TABLE_CATALOG", 512),
				varchar("TABLE_SCHEMA", 64),
				varchar("TABLE_NAME", 64),
				varchar("VIEW_DEFINITION", 8096),
				varchar("CHECK_OPTION", 8),
				varchar("IS_UPDATABLE", 3),
			],
		}
	}
}

impl Display for SystemSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A read-only table whose rows are produced from the catalog itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemViewSourceTable {
	pub source: SystemSource,
}

impl SystemViewSourceTable {
	pub fn new(source: SystemSource) -> Self {
		Self {
			source,
		}
	}

	/// The built-in table for `source`, named after it and carrying its
	/// fixed layout.
	pub fn builtin(id: TableId, source: SystemSource) -> Table {
		Table {
			id,
			name: source.as_str().to_lowercase(),
			stamp: MetaStamp::default(),
			columns: ColumnIndex::from(source.columns()),
			variant: Self::new(source).into(),
		}
	}
}

impl TableBehavior for SystemViewSourceTable {
	fn kind(&self) -> TableKind {
		TableKind::SystemViewSource
	}

	fn engine(&self) -> Option<&'static str> {
		Some("MEMORY")
	}

	fn sql_table_type(&self) -> SqlTableType {
		SqlTableType::BaseTable
	}

	fn comment(&self) -> &str {
		""
	}

	fn descriptor_detail(&self) -> Option<DescriptorDetail> {
		Some(DescriptorDetail::SystemViewSource {
			source: self.source,
		})
	}

	fn encode_properties(&self, writer: &mut Writer) -> encoding::Result<()> {
		writer.write_str(self.source.as_str())
	}

	fn decode_properties(&mut self, reader: &mut Reader<'_>, _config: &CodecConfig) -> encoding::Result<()> {
		let name = reader.read_string()?;
		let Some(source) = SystemSource::from_name(&name) else {
			return invalid_data!("unknown system source `{name}`");
		};
		self.source = source;
		Ok(())
	}
}
