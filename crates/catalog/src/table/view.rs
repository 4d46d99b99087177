// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_core::{
	encoding,
	encoding::binary::{Reader, Writer},
};

use crate::{
	codec::CodecConfig,
	resolve::{QueryResolver, ResolveError, ResolvedQuery},
	table::{DefinitionStatement, SqlTableType, Table, TableBehavior, TableKind, ddl},
};

/// A stored query presented as a table.
///
/// Only the definition text and the SQL mode it was written under are
/// persisted. The resolved query is rebuilt after every load.
#[derive(Debug, Clone, Default)]
pub struct View {
	pub definition: String,
	pub sql_mode: i64,
	resolved: Option<ResolvedQuery>,
}

impl View {
	pub fn new(definition: impl Into<String>) -> Self {
		Self {
			definition: definition.into(),
			sql_mode: 0,
			resolved: None,
		}
	}

	pub fn with_sql_mode(mut self, sql_mode: i64) -> Self {
		self.sql_mode = sql_mode;
		self
	}

	/// Resolves the definition and keeps the result. A failed resolution
	/// leaves any earlier result untouched.
	pub fn resolve(&mut self, resolver: &dyn QueryResolver) -> Result<&ResolvedQuery, ResolveError> {
		let resolved = resolver.resolve(&self.definition, self.sql_mode)?;
		Ok(self.resolved.insert(resolved))
	}

	pub fn query(&self) -> Option<&ResolvedQuery> {
		self.resolved.as_ref()
	}

	pub fn is_resolved(&self) -> bool {
		self.resolved.is_some()
	}
}

impl PartialEq for View {
	fn eq(&self, other: &Self) -> bool {
		self.definition == other.definition && self.sql_mode == other.sql_mode
	}
}

impl TableBehavior for View {
	fn kind(&self) -> TableKind {
		TableKind::View
	}

	fn engine(&self) -> Option<&'static str> {
		None
	}

	fn sql_table_type(&self) -> SqlTableType {
		SqlTableType::View
	}

	fn comment(&self) -> &str {
		"VIEW"
	}

	fn encode_properties(&self, writer: &mut Writer) -> encoding::Result<()> {
		writer.write_str(&self.definition)?;
		writer.write_i64(self.sql_mode)
	}

	fn decode_properties(&mut self, reader: &mut Reader<'_>, _config: &CodecConfig) -> encoding::Result<()> {
		self.definition = reader.read_string()?;
		self.sql_mode = reader.read_i64()?;
		self.resolved = None;
		Ok(())
	}
}

impl DefinitionStatement for View {
	fn definition_statement(&self, table: &Table, namespace: &str) -> String {
		let mut sql = format!("CREATE VIEW {}.{}", ddl::quote(namespace), ddl::quote(table.name()));
		if !table.schema().is_empty() {
			let columns = table.schema().iter().map(|column| column.name.as_str());
			sql.push_str(&format!(" ({})", ddl::quoted_list(columns)));
		}
		sql.push_str(" AS ");
		sql.push_str(&self.definition);
		sql
	}
}

#[cfg(test)]
mod tests {
	use tabula_core::interface::catalog::TableId;
	use tabula_type::Type;

	use super::*;
	use crate::{column::Column, resolve::SyntacticResolver};

	#[test]
	fn test_resolve_keeps_result() {
		let mut view = View::new("SELECT id FROM orders");
		assert!(!view.is_resolved());

		let resolved = view.resolve(&SyntacticResolver).unwrap();
		assert_eq!(resolved.statement, "SELECT id FROM orders");
		assert!(view.is_resolved());
	}

	#[test]
	fn test_failed_resolve_keeps_previous_result() {
		let mut view = View::new("SELECT 1");
		view.resolve(&SyntacticResolver).unwrap();

		view.definition = "DROP TABLE orders".to_string();
		let err = view.resolve(&SyntacticResolver).unwrap_err();
		assert_eq!(err.to_string(), "view definition must be a SELECT or WITH query, found `DROP`");
		assert_eq!(view.query().map(|query| query.statement.as_str()), Some("SELECT 1"));
	}

	#[test]
	fn test_equality_ignores_resolution() {
		let mut resolved = View::new("SELECT 1").with_sql_mode(4);
		resolved.resolve(&SyntacticResolver).unwrap();
		assert_eq!(resolved, View::new("SELECT 1").with_sql_mode(4));
		assert_ne!(resolved, View::new("SELECT 1"));
	}

	#[test]
	fn test_decode_clears_resolution() {
		let mut view = View::new("SELECT 1");
		view.resolve(&SyntacticResolver).unwrap();

		let mut writer = Writer::new();
		View::new("SELECT 2").with_sql_mode(1).encode_properties(&mut writer).unwrap();
		let bytes = writer.finish();

		view.decode_properties(&mut Reader::new(&bytes), &CodecConfig::default()).unwrap();
		assert_eq!(view.definition, "SELECT 2");
		assert_eq!(view.sql_mode, 1);
		assert!(!view.is_resolved());
	}

	#[test]
	fn test_definition_statement() {
		let without_columns = Table::new(TableId(5), "v", None, View::new("SELECT 1")).unwrap();
		assert_eq!(without_columns.definition_statement("ns").unwrap(), "CREATE VIEW `ns`.`v` AS SELECT 1");

		let with_columns = Table::new(
			TableId(5),
			"v",
			Some(vec![Column::new("a", Type::Int4), Column::new("b", Type::Varchar)]),
			View::new("SELECT x, y FROM t"),
		)
		.unwrap();
		assert_eq!(
			with_columns.definition_statement("ns").unwrap(),
			"CREATE VIEW `ns`.`v` (`a`, `b`) AS SELECT x, y FROM t"
		);
	}
}
