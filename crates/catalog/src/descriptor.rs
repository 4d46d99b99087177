// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};
use tabula_core::interface::catalog::TableId;

use crate::table::{KeysKind, SystemSource, TableKind};

/// Describes a table to the execution engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDescriptor {
	pub id: TableId,
	pub name: String,
	pub kind: TableKind,
	pub column_count: usize,
	pub key_count: usize,
	pub detail: DescriptorDetail,
}

/// The part of a [`TableDescriptor`] that depends on where the rows live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DescriptorDetail {
	NativeStorage {
		keys: KeysKind,
		partition_count: usize,
		bucket_count: u32,
	},
	FederatedRdbms {
		host: String,
		port: u16,
		user: String,
		password: String,
		database: String,
		table: String,
	},
	FederatedColumnar {
		master_addresses: Vec<String>,
		table_name: String,
		table_id: String,
	},
	FederatedObjectStore {
		broker_name: String,
		paths: Vec<String>,
		column_separator: String,
		line_delimiter: String,
	},
	SystemViewSource {
		source: SystemSource,
	},
}
