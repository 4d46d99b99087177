// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::table::Table;

pub(crate) fn quote(identifier: &str) -> String {
	format!("`{}`", identifier.replace('`', "``"))
}

pub(crate) fn string_literal(value: &str) -> String {
	let mut literal = String::with_capacity(value.len() + 2);
	literal.push('"');
	for c in value.chars() {
		match c {
			'"' => literal.push_str("\\\""),
			'\\' => literal.push_str("\\\\"),
			'\t' => literal.push_str("\\t"),
			'\n' => literal.push_str("\\n"),
			c => literal.push(c),
		}
	}
	literal.push('"');
	literal
}

pub(crate) fn quoted_list<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
	names.into_iter().map(quote).collect::<Vec<_>>().join(", ")
}

/// `CREATE TABLE ns.name (columns...)` without the trailing clauses.
pub(crate) fn create_table(table: &Table, namespace: &str) -> String {
	let columns: Vec<String> = table.schema().iter().map(|column| format!("  {}", column.to_sql())).collect();
	format!("CREATE TABLE {}.{} (\n{}\n)", quote(namespace), quote(table.name()), columns.join(",\n"))
}

pub(crate) fn properties<'a>(name: &str, entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
	let entries: Vec<String> = entries
		.into_iter()
		.map(|(key, value)| format!("  {} = {}", string_literal(key), string_literal(value)))
		.collect();
	format!("{name} (\n{}\n)", entries.join(",\n"))
}
