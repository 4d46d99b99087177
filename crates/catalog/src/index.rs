// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::BTreeMap;

use crate::column::Column;

/// The ordered column list of a table together with a case-insensitive
/// name lookup over it.
///
/// Both halves live in one value so a schema replacement is a single
/// assignment of a freshly built index. Names are folded to lower case for
/// the lookup key while the stored column keeps its original spelling. When
/// two columns fold to the same name the later one wins the lookup.
#[derive(Debug, Clone, Default)]
pub struct ColumnIndex {
	columns: Vec<Column>,
	by_name: BTreeMap<String, usize>,
}

fn fold(name: &str) -> String {
	name.to_lowercase()
}

impl ColumnIndex {
	pub fn new() -> Self {
		Self::default()
	}

	/// Finds a column by name, ignoring case.
	pub fn lookup(&self, name: &str) -> Option<&Column> {
		self.by_name.get(&fold(name)).map(|&position| &self.columns[position])
	}

	/// Replaces the whole schema. The new index is built aside and swapped in.
	pub fn rebuild(&mut self, columns: Vec<Column>) {
		*self = Self::from(columns);
	}

	/// Appends a column read from a metadata stream to both the schema and
	/// the lookup.
	pub fn append_decoded(&mut self, column: Column) {
		self.by_name.insert(fold(&column.name), self.columns.len());
		self.columns.push(column);
	}

	pub fn columns(&self) -> &[Column] {
		&self.columns
	}

	pub fn len(&self) -> usize {
		self.columns.len()
	}

	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}

	/// Column names in case-insensitive order, one per distinct folded name.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.by_name.values().map(|&position| self.columns[position].name.as_str())
	}
}

impl From<Vec<Column>> for ColumnIndex {
	fn from(columns: Vec<Column>) -> Self {
		let by_name = columns.iter().enumerate().map(|(position, column)| (fold(&column.name), position)).collect();
		Self {
			columns,
			by_name,
		}
	}
}

impl PartialEq for ColumnIndex {
	fn eq(&self, other: &Self) -> bool {
		self.columns == other.columns
	}
}

#[cfg(test)]
mod tests {
	use tabula_type::Type;

	use super::*;

	fn user_columns() -> Vec<Column> {
		vec![
			Column::new("UserId", Type::Int8).key(),
			Column::new("email", Type::Varchar).with_length(255),
			Column::new("Created", Type::DateTime),
		]
	}

	#[test]
	fn test_lookup_ignores_case() {
		let index = ColumnIndex::from(user_columns());

		let expected = &index.columns()[0];
		assert_eq!(index.lookup("userid"), Some(expected));
		assert_eq!(index.lookup("USERID"), Some(expected));
		assert_eq!(index.lookup("UserId"), Some(expected));
		assert_eq!(index.lookup("UserId").unwrap().name, "UserId");
	}

	#[test]
	fn test_missing_name_is_none() {
		let index = ColumnIndex::from(user_columns());
		assert_eq!(index.lookup("unknown"), None);
		assert_eq!(ColumnIndex::new().lookup("UserId"), None);
	}

	#[test]
	fn test_rebuild_drops_old_names() {
		let mut index = ColumnIndex::from(user_columns());
		index.rebuild(vec![Column::new("tenant", Type::Int4).key(), Column::new("EMAIL", Type::Varchar)]);

		assert_eq!(index.len(), 2);
		assert_eq!(index.lookup("UserId"), None);
		assert_eq!(index.lookup("created"), None);
		assert_eq!(index.lookup("Tenant").unwrap().name, "tenant");
		assert_eq!(index.lookup("email").unwrap().name, "EMAIL");
	}

	#[test]
	fn test_append_decoded_keeps_schema_order() {
		let mut index = ColumnIndex::new();
		for column in user_columns() {
			index.append_decoded(column);
		}

		let names: Vec<_> = index.columns().iter().map(|column| column.name.as_str()).collect();
		assert_eq!(names, vec!["UserId", "email", "Created"]);
		assert_eq!(index, ColumnIndex::from(user_columns()));
		assert!(index.lookup("CREATED").is_some());
	}

	#[test]
	fn test_names_are_ordered_case_insensitively() {
		let index = ColumnIndex::from(user_columns());
		let names: Vec<_> = index.names().collect();
		assert_eq!(names, vec!["Created", "email", "UserId"]);
	}

	#[test]
	fn test_colliding_names_last_writer_wins() {
		let index = ColumnIndex::from(vec![Column::new("a", Type::Int4), Column::new("A", Type::Int8)]);
		assert_eq!(index.len(), 2);
		assert_eq!(index.lookup("a").unwrap().ty, Type::Int8);
		assert_eq!(index.names().count(), 1);
	}
}
