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
	},
};

/// A table whose rows are read from a remote relational database.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FederatedRdbmsTable {
	pub host: String,
	pub port: u16,
	pub user: String,
	pub password: String,
	pub database: String,
	pub table: String,
}

impl FederatedRdbmsTable {
	pub fn new(host: impl Into<String>, port: u16, database: impl Into<String>, table: impl Into<String>) -> Self {
		Self {
			host: host.into(),
			port,
			database: database.into(),
			table: table.into(),
			..Self::default()
		}
	}

	pub fn with_credentials(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
		self.user = user.into();
		self.password = password.into();
		self
	}
}

impl TableBehavior for FederatedRdbmsTable {
	fn kind(&self) -> TableKind {
		TableKind::FederatedRdbms
	}

	fn engine(&self) -> Option<&'static str> {
		Some("MySQL")
	}

	fn sql_table_type(&self) -> SqlTableType {
		SqlTableType::BaseTable
	}

	fn comment(&self) -> &str {
		""
	}

	fn descriptor_detail(&self) -> Option<DescriptorDetail> {
		Some(DescriptorDetail::FederatedRdbms {
			host: self.host.clone(),
			port: self.port,
			user: self.user.clone(),
			password: self.password.clone(),
			database: self.database.clone(),
			table: self.table.clone(),
		})
	}

	fn encode_properties(&self, writer: &mut Writer) -> encoding::Result<()> {
		writer.write_str(&self.host)?;
		writer.write_i32(i32::from(self.port))?;
		writer.write_str(&self.user)?;
		writer.write_str(&self.password)?;
		writer.write_str(&self.database)?;
		writer.write_str(&self.table)
	}

	fn decode_properties(&mut self, reader: &mut Reader<'_>, _config: &CodecConfig) -> encoding::Result<()> {
		self.host = reader.read_string()?;
		self.port = u16::try_from(reader.read_i32()?)?;
		self.user = reader.read_string()?;
		self.password = reader.read_string()?;
		self.database = reader.read_string()?;
		self.table = reader.read_string()?;
		Ok(())
	}
}

impl DefinitionStatement for FederatedRdbmsTable {
	fn definition_statement(&self, table: &Table, namespace: &str) -> String {
		let port = self.port.to_string();
		let properties = ddl::properties(
			"PROPERTIES",
			[
				("host", self.host.as_str()),
				("port", port.as_str()),
				("user", self.user.as_str()),
				("password", ""),
				("database", self.database.as_str()),
				("table", self.table.as_str()),
			],
		);
		format!("{} ENGINE=MYSQL\n{properties}", ddl::create_table(table, namespace))
	}
}

impl StructuralSignature for FederatedRdbmsTable {
	fn feed_signature(&self, hasher: &mut SignatureHasher) {
		hasher.str(&self.host);
		hasher.u64(u64::from(self.port));
		hasher.str(&self.user);
		hasher.str(&self.password);
		hasher.str(&self.database);
		hasher.str(&self.table);
	}
}

#[cfg(test)]
mod tests {
	use tabula_core::interface::catalog::TableId;
	use tabula_type::Type;

	use super::*;
	use crate::column::Column;

	fn remote() -> FederatedRdbmsTable {
		FederatedRdbmsTable::new("db1.internal", 3306, "shop", "orders").with_credentials("reader", "s3cret")
	}

	#[test]
	fn test_properties_round_trip() {
		let mut writer = Writer::new();
		remote().encode_properties(&mut writer).unwrap();
		let bytes = writer.finish();

		let mut decoded = FederatedRdbmsTable::default();
		let mut reader = Reader::new(&bytes);
		decoded.decode_properties(&mut reader, &CodecConfig::default()).unwrap();
		reader.finish().unwrap();
		assert_eq!(decoded, remote());
	}

	#[test]
	fn test_port_out_of_range() {
		let mut writer = Writer::new();
		writer.write_str("h").unwrap();
		writer.write_i32(70_000).unwrap();
		let bytes = writer.finish();

		let mut decoded = FederatedRdbmsTable::default();
		assert!(decoded.decode_properties(&mut Reader::new(&bytes), &CodecConfig::default()).is_err());
	}

	#[test]
	fn test_definition_statement_masks_password() {
		let table = Table::new(TableId(2), "orders", Some(vec![Column::new("id", Type::Int8)]), remote()).unwrap();
		let sql = table.definition_statement("shop").unwrap();

		assert!(!sql.contains("s3cret"));
		assert_eq!(
			sql,
			"CREATE TABLE `shop`.`orders` (\n  `id` BIGINT NOT NULL COMMENT \"\"\n) ENGINE=MYSQL\nPROPERTIES (\n  \"host\" = \"db1.internal\",\n  \"port\" = \"3306\",\n  \"user\" = \"reader\",\n  \"password\" = \"\",\n  \"database\" = \"shop\",\n  \"table\" = \"orders\"\n)"
		);
	}

	#[test]
	fn test_signature_tracks_connection() {
		let first = Table::new(TableId(2), "orders", Some(vec![]), remote()).unwrap();
		let mut moved = remote();
		moved.host = "db2.internal".to_string();
		let second = Table::new(TableId(2), "orders", Some(vec![]), moved).unwrap();
		assert_ne!(first.signature(1).unwrap(), second.signature(1).unwrap());
	}
}
