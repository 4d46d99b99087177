// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The closed set of table kinds. The tag of a kind is the first thing
/// written for a table and the only thing a reader dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableKind {
	NativeStorage,
	FederatedRdbms,
	SystemViewSource,
	View,
	FederatedColumnar,
	FederatedObjectStore,
}

impl TableKind {
	pub const ALL: [TableKind; 6] = [
		TableKind::NativeStorage,
		TableKind::FederatedRdbms,
		TableKind::SystemViewSource,
		TableKind::View,
		TableKind::FederatedColumnar,
		TableKind::FederatedObjectStore,
	];

	pub fn as_tag(&self) -> &'static str {
		match self {
			TableKind::NativeStorage => "NATIVE_STORAGE",
			TableKind::FederatedRdbms => "FEDERATED_RDBMS",
			TableKind::SystemViewSource => "SYSTEM_VIEW_SOURCE",
			TableKind::View => "VIEW",
			TableKind::FederatedColumnar => "FEDERATED_COLUMNAR",
			TableKind::FederatedObjectStore => "FEDERATED_OBJECT_STORE",
		}
	}

	/// Matches a tag exactly; tags are case-sensitive.
	pub fn from_tag(tag: &str) -> Option<Self> {
		Some(match tag {
			"NATIVE_STORAGE" => TableKind::NativeStorage,
			"FEDERATED_RDBMS" => TableKind::FederatedRdbms,
			"SYSTEM_VIEW_SOURCE" => TableKind::SystemViewSource,
			"VIEW" => TableKind::View,
			"FEDERATED_COLUMNAR" => TableKind::FederatedColumnar,
			"FEDERATED_OBJECT_STORE" => TableKind::FederatedObjectStore,
			_ => return None,
		})
	}
}

impl Display for TableKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_tag())
	}
}

/// The value a table reports as its SQL `TABLE_TYPE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlTableType {
	BaseTable,
	View,
}

impl SqlTableType {
	pub fn as_str(&self) -> &'static str {
		match self {
			SqlTableType::BaseTable => "BASE TABLE",
			SqlTableType::View => "VIEW",
		}
	}
}

impl Display for SqlTableType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
