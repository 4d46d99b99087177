// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::BTreeMap;

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

/// Files in an object store read through a named broker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FederatedObjectStoreTable {
	pub broker_name: String,
	pub paths: Vec<String>,
	pub column_separator: String,
	pub line_delimiter: String,
	/// Broker specific settings such as credentials.
	pub properties: BTreeMap<String, String>,
}

impl Default for FederatedObjectStoreTable {
	fn default() -> Self {
		Self {
			broker_name: String::new(),
			paths: Vec::new(),
			column_separator: "\t".to_string(),
			line_delimiter: "\n".to_string(),
			properties: BTreeMap::new(),
		}
	}
}

impl FederatedObjectStoreTable {
	pub fn new(broker_name: impl Into<String>, paths: Vec<String>) -> Self {
		Self {
			broker_name: broker_name.into(),
			paths,
			..Self::default()
		}
	}

	pub fn with_separators(mut self, column_separator: impl Into<String>, line_delimiter: impl Into<String>) -> Self {
		self.column_separator = column_separator.into();
		self.line_delimiter = line_delimiter.into();
		self
	}

	pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.properties.insert(key.into(), value.into());
		self
	}
}

impl TableBehavior for FederatedObjectStoreTable {
	fn kind(&self) -> TableKind {
		TableKind::FederatedObjectStore
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

	fn descriptor_detail(&self) -> Option<DescriptorDetail> {
		Some(DescriptorDetail::FederatedObjectStore {
			broker_name: self.broker_name.clone(),
			paths: self.paths.clone(),
			column_separator: self.column_separator.clone(),
			line_delimiter: self.line_delimiter.clone(),
		})
	}

	fn encode_properties(&self, writer: &mut Writer) -> encoding::Result<()> {
		writer.write_str(&self.broker_name)?;
		write_strings(writer, &self.paths)?;
		writer.write_str(&self.column_separator)?;
		writer.write_str(&self.line_delimiter)?;

		writer.write_count(self.properties.len())?;
		for (key, value) in &self.properties {
			writer.write_str(key)?;
			writer.write_str(value)?;
		}
		Ok(())
	}

	fn decode_properties(&mut self, reader: &mut Reader<'_>, config: &CodecConfig) -> encoding::Result<()> {
		self.broker_name = reader.read_string()?;
		self.paths = read_strings(reader, "path", config.max_entries)?;
		self.column_separator = reader.read_string()?;
		self.line_delimiter = reader.read_string()?;

		let count = reader.read_count("broker property", config.max_entries)?;
		self.properties = BTreeMap::new();
		for _ in 0..count {
			let key = reader.read_string()?;
			let value = reader.read_string()?;
			self.properties.insert(key, value);
		}
		Ok(())
	}
}

impl DefinitionStatement for FederatedObjectStoreTable {
	fn definition_statement(&self, table: &Table, namespace: &str) -> String {
		let paths = self.paths.join(",");
		let properties = ddl::properties(
			"PROPERTIES",
			[
				("broker_name", self.broker_name.as_str()),
				("path", paths.as_str()),
				("column_separator", self.column_separator.as_str()),
				("line_delimiter", self.line_delimiter.as_str()),
			],
		);
		let mut sql = format!("{} ENGINE=BROKER\n{properties}", ddl::create_table(table, namespace));
		if !self.properties.is_empty() {
			let broker =
				ddl::properties("BROKER PROPERTIES", self.properties.iter().map(|(k, v)| (k.as_str(), v.as_str())));
			sql.push('\n');
			sql.push_str(&broker);
		}
		sql
	}
}

impl StructuralSignature for FederatedObjectStoreTable {
	fn feed_signature(&self, hasher: &mut SignatureHasher) {
		hasher.str(&self.broker_name);
		hasher.strs(self.paths.iter().map(String::as_str));
		hasher.str(&self.column_separator);
		hasher.str(&self.line_delimiter);
		hasher.u64(self.properties.len() as u64);
		for (key, value) in &self.properties {
			hasher.str(key);
			hasher.str(value);
		}
	}
}

#[cfg(test)]
mod tests {
	use tabula_core::interface::catalog::TableId;
	use tabula_type::Type;

	use super::*;
	use crate::column::Column;

	#[test]
	fn test_default_separators() {
		let table = FederatedObjectStoreTable::new("hdfs_broker", vec!["hdfs://n1/data/*".to_string()]);
		assert_eq!(table.column_separator, "\t");
		assert_eq!(table.line_delimiter, "\n");
	}

	#[test]
	fn test_properties_round_trip() {
		let table = FederatedObjectStoreTable::new("hdfs_broker", vec!["hdfs://n1/a".to_string(), "hdfs://n1/b".to_string()])
			.with_separators(",", "\r\n")
			.with_property("username", "etl")
			.with_property("password", "pw");

		let mut writer = Writer::new();
		table.encode_properties(&mut writer).unwrap();
		let bytes = writer.finish();

		let mut decoded = FederatedObjectStoreTable::default();
		let mut reader = Reader::new(&bytes);
		decoded.decode_properties(&mut reader, &CodecConfig::default()).unwrap();
		reader.finish().unwrap();
		assert_eq!(decoded, table);
	}

	#[test]
	fn test_definition_statement() {
		let table = Table::new(
			TableId(4),
			"logs",
			Some(vec![Column::new("line", Type::Varchar).with_length(256).nullable()]),
			FederatedObjectStoreTable::new("broker0", vec!["s3://logs/2025/*".to_string()])
				.with_separators(",", "\n")
				.with_property("region", "eu"),
		)
		.unwrap();
		assert_eq!(
			table.definition_statement("raw").unwrap(),
			"CREATE TABLE `raw`.`logs` (\n  `line` VARCHAR(256) NULL COMMENT \"\"\n) ENGINE=BROKER\nPROPERTIES (\n  \"broker_name\" = \"broker0\",\n  \"path\" = \"s3://logs/2025/*\",\n  \"column_separator\" = \",\",\n  \"line_delimiter\" = \"\\n\"\n)\nBROKER PROPERTIES (\n  \"region\" = \"eu\"\n)"
		);
	}

	#[test]
	fn test_signature_tracks_broker_properties() {
		let table = |region: &str| {
			Table::new(
				TableId(4),
				"logs",
				Some(vec![]),
				FederatedObjectStoreTable::new("broker0", vec!["s3://logs/*".to_string()]).with_property("region", region),
			)
			.unwrap()
		};

		assert_eq!(table("eu").signature(1).unwrap(), table("eu").signature(1).unwrap());
		assert_ne!(table("eu").signature(1).unwrap(), table("us").signature(1).unwrap());
	}
}
