// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Ready-made tables of every kind for tests.

use tabula_core::interface::catalog::{PartitionId, TableId};
use tabula_type::Type;

use crate::{
	column::{AggregationKind, Column},
	partition::Partition,
	table::{
		Distribution, FederatedColumnarTable, FederatedObjectStoreTable, FederatedRdbmsTable, KeysKind,
		NativeStorageTable, Partitioning, SystemSource, SystemViewSourceTable, Table, View,
	},
};

pub fn create_native_table(id: u64, name: &str) -> Table {
	let columns = vec![
		Column::new("order_id", Type::Int8).key(),
		Column::new("order_date", Type::Date).key(),
		Column::new("amount", Type::Decimal).with_precision(18, 2).with_aggregation(AggregationKind::Sum),
		Column::new("note", Type::Varchar)
			.with_length(128)
			.nullable()
			.with_aggregation(AggregationKind::Replace)
			.with_default("")
			.with_comment("free text"),
	];
	let native = NativeStorageTable::new(
		KeysKind::Aggregate,
		Partitioning::Range {
			columns: vec!["order_date".to_string()],
		},
		Distribution::Hash {
			columns: vec!["order_id".to_string()],
			buckets: 8,
		},
	)
	.with_partition(Partition::new(PartitionId(id * 100 + 1), "p202501"))
	.with_partition(Partition::new(PartitionId(id * 100 + 2), "p202502"));

	Table::new(TableId(id), name, Some(columns), native).unwrap()
}

pub fn create_rdbms_table(id: u64, name: &str) -> Table {
	let columns = vec![Column::new("id", Type::Int8).key(), Column::new("email", Type::Varchar).with_length(255)];
	let remote = FederatedRdbmsTable::new("mysql.internal", 3306, "crm", name).with_credentials("reader", "secret");
	Table::new(TableId(id), name, Some(columns), remote).unwrap()
}

pub fn create_view(id: u64, name: &str, definition: &str) -> Table {
	Table::new(TableId(id), name, None, View::new(definition).with_sql_mode(2)).unwrap()
}

pub fn create_view_with_columns(id: u64, name: &str, definition: &str, columns: Vec<Column>) -> Table {
	Table::new(TableId(id), name, Some(columns), View::new(definition).with_sql_mode(2)).unwrap()
}

pub fn create_columnar_table(id: u64, name: &str) -> Table {
	let columns = vec![
		Column::new("ts", Type::DateTime).key(),
		Column::new("host", Type::Varchar).with_length(64).key(),
		Column::new("value", Type::Float8).nullable(),
	];
	let remote = FederatedColumnarTable::new(vec!["kudu-m1:7051".to_string(), "kudu-m2:7051".to_string()], name, "f00d")
		.with_range_columns(vec!["ts".to_string()]);
	Table::new(TableId(id), name, Some(columns), remote).unwrap()
}

pub fn create_object_store_table(id: u64, name: &str) -> Table {
	let columns = vec![Column::new("line", Type::Varchar).with_length(1024).nullable()];
	let remote = FederatedObjectStoreTable::new("broker0", vec!["s3://bucket/logs/*".to_string()])
		.with_separators("|", "\n")
		.with_property("fs.s3a.endpoint", "s3.eu-west-1.amazonaws.com");
	Table::new(TableId(id), name, Some(columns), remote).unwrap()
}

pub fn create_system_table(id: u64, source: SystemSource) -> Table {
	SystemViewSourceTable::builtin(TableId(id), source)
}

/// One table of every kind, in [`crate::TableKind::ALL`] order.
pub fn all_tables() -> Vec<Table> {
	vec![
		create_native_table(1, "orders"),
		create_rdbms_table(2, "customers"),
		create_system_table(3, SystemSource::Tables),
		create_view(4, "recent_orders", "SELECT order_id FROM orders WHERE order_date > '2025-01-01'"),
		create_columnar_table(5, "metrics"),
		create_object_store_table(6, "access_logs"),
	]
}
