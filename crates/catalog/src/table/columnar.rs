// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_core::{
	encoding,
	encoding::binary::{Reader, Writer},
};

use crate::{
	codec::CodecConfig,
	descriptor::DescriptorDetail,
	table::{
		DefinitionStatement, SqlTableType, StructuralSignature, Table, TableBehavior, TableKind, ddl,
		signature::SignatureHasher,
		variant::{read_strings, write_strings},
	},
};

/// A table backed by a remote columnar store reached through its masters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FederatedColumnarTable {
	pub master_addresses: Vec<String>,
	pub table_name: String,
	/// Identifier the remote store assigned to the table.
	pub table_id: String,
	pub range_columns: Vec<String>,
}

impl FederatedColumnarTable {
	pub fn new(master_addresses: Vec<String>, table_name: impl Into<String>, table_id: impl Into<String>) -> Self {
		Self {
			master_addresses,
			table_name: table_name.into(),
			table_id: table_id.into(),
			range_columns: Vec::new(),
		}
	}

	pub fn with_range_columns(mut self, columns: Vec<String>) -> Self {
		self.range_columns = columns;
		self
	}
}

impl TableBehavior for FederatedColumnarTable {
	fn kind(&self) -> TableKind {
		TableKind::FederatedColumnar
	}

	fn engine(&self) -> Option<&'static str> {
		None
	}

	fn sql_table_type(&self) -> SqlTableType {
		SqlTableType::BaseTable
	}

	fn comment(&self) -> &str {
		""
	}

	fn is_partitioned(&self) -> bool {
		!self.range_columns.is_empty()
	}

	fn descriptor_detail(&self) -> Option<DescriptorDetail> {
		Some(DescriptorDetail::FederatedColumnar {
			master_addresses: self.master_addresses.clone(),
			table_name: self.table_name.clone(),
			table_id: self.table_id.clone(),
		})
	}

	fn encode_properties(&self, writer: &mut Writer) -> encoding::Result<()> {
		write_strings(writer, &self.master_addresses)?;
		writer.write_str(&self.table_name)?;
		writer.write_str(&self.table_id)?;
		write_strings(writer, &self.range_columns)
	}

	fn decode_properties(&mut self, reader: &mut Reader<'_>, config: &CodecConfig) -> encoding::Result<()> {
		self.master_addresses = read_strings(reader, "master address", config.max_entries)?;
		self.table_name = reader.read_string()?;
		self.table_id = reader.read_string()?;
		self.range_columns = read_strings(reader, "range column", config.max_entries)?;
		Ok(())
	}
}

impl DefinitionStatement for FederatedColumnarTable {
	fn definition_statement(&self, table: &Table, namespace: &str) -> String {
		let masters = self.master_addresses.join(",");
		let properties = ddl::properties(
			"PROPERTIES",
			[("master_addresses", masters.as_str()), ("table_name", self.table_name.as_str())],
		);
		let mut sql = format!("{} ENGINE=KUDU\n", ddl::create_table(table, namespace));
		if !self.range_columns.is_empty() {
			let columns = self.range_columns.iter().map(String::as_str);
			sql.push_str(&format!("PARTITION BY RANGE({})\n", ddl::quoted_list(columns)));
		}
		sql.push_str(&properties);
		sql
	}
}

impl StructuralSignature for FederatedColumnarTable {
	fn feed_signature(&self, hasher: &mut SignatureHasher) {
		hasher.strs(self.master_addresses.iter().map(String::as_str));
		hasher.str(&self.table_name);
		hasher.str(&self.table_id);
		hasher.strs(self.range_columns.iter().map(String::as_str));
	}
}

#[cfg(test)]
mod tests {
	use tabula_core::interface::catalog::TableId;
	use tabula_type::Type;

	use super::*;
	use crate::column::Column;

	fn remote() -> FederatedColumnarTable {
		FederatedColumnarTable::new(
			vec!["m1:7051".to_string(), "m2:7051".to_string()],
			"impala::metrics",
			"a1b2c3",
		)
	}

	#[test]
	fn test_is_partitioned() {
		assert!(!remote().is_partitioned());
		assert!(remote().with_range_columns(vec!["ts".to_string()]).is_partitioned());
	}

	#[test]
	fn test_properties_round_trip() {
		let table = remote().with_range_columns(vec!["ts".to_string()]);
		let mut writer = Writer::new();
		table.encode_properties(&mut writer).unwrap();
		let bytes = writer.finish();

		let mut decoded = FederatedColumnarTable::default();
		let mut reader = Reader::new(&bytes);
		decoded.decode_properties(&mut reader, &CodecConfig::default()).unwrap();
		reader.finish().unwrap();
		assert_eq!(decoded, table);
	}

	#[test]
	fn test_definition_statement() {
		let table = Table::new(
			TableId(3),
			"metrics",
			Some(vec![Column::new("ts", Type::DateTime).key()]),
			remote().with_range_columns(vec!["ts".to_string()]),
		)
		.unwrap();
		assert_eq!(
			table.definition_statement("ops").unwrap(),
			"CREATE TABLE `ops`.`metrics` (\n  `ts` DATETIME NOT NULL COMMENT \"\"\n) ENGINE=KUDU\nPARTITION BY RANGE(`ts`)\nPROPERTIES (\n  \"master_addresses\" = \"m1:7051,m2:7051\",\n  \"table_name\" = \"impala::metrics\"\n)"
		);
	}
}
