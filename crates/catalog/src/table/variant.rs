// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Debug;

use tabula_core::{
	encoding,
	encoding::binary::{Reader, Writer},
};

use crate::{
	codec::CodecConfig,
	descriptor::DescriptorDetail,
	partition::Partition,
	table::{
		SqlTableType, Table, TableKind,
		columnar::FederatedColumnarTable,
		native::NativeStorageTable,
		object_store::FederatedObjectStoreTable,
		rdbms::FederatedRdbmsTable,
		signature::SignatureHasher,
		system::SystemViewSourceTable,
		view::View,
	},
};

/// Behaviour every table variant answers for itself.
pub trait TableBehavior: Debug + Send + Sync {
	fn kind(&self) -> TableKind;

	/// Storage engine label shown to clients, if the variant has one.
	fn engine(&self) -> Option<&'static str>;

	fn sql_table_type(&self) -> SqlTableType;

	fn comment(&self) -> &str;

	fn is_partitioned(&self) -> bool {
		false
	}

	fn partition(&self, _name: &str) -> Option<&Partition> {
		None
	}

	/// Variant part of the execution descriptor. Variants without storage
	/// have none.
	fn descriptor_detail(&self) -> Option<DescriptorDetail> {
		None
	}

	/// Writes the state that follows the common table fields.
	fn encode_properties(&self, writer: &mut Writer) -> encoding::Result<()>;

	/// Reads what [`TableBehavior::encode_properties`] wrote.
	fn decode_properties(&mut self, reader: &mut Reader<'_>, config: &CodecConfig) -> encoding::Result<()>;
}

/// Variants that can reproduce their own DDL.
pub trait DefinitionStatement {
	fn definition_statement(&self, table: &Table, namespace: &str) -> String;
}

/// Variants that contribute to the cross-replica structural signature.
pub trait StructuralSignature {
	fn feed_signature(&self, hasher: &mut SignatureHasher);
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableVariant {
	NativeStorage(NativeStorageTable),
	FederatedRdbms(FederatedRdbmsTable),
	SystemViewSource(SystemViewSourceTable),
	View(View),
	FederatedColumnar(FederatedColumnarTable),
	FederatedObjectStore(FederatedObjectStoreTable),
}

impl TableVariant {
	/// The unpopulated variant for `kind`, as the decoder constructs it
	/// before reading any field.
	pub fn empty(kind: TableKind) -> Self {
		match kind {
			TableKind::NativeStorage => Self::NativeStorage(NativeStorageTable::default()),
			TableKind::FederatedRdbms => Self::FederatedRdbms(FederatedRdbmsTable::default()),
			TableKind::SystemViewSource => Self::SystemViewSource(SystemViewSourceTable::default()),
			TableKind::View => Self::View(View::default()),
			TableKind::FederatedColumnar => Self::FederatedColumnar(FederatedColumnarTable::default()),
			TableKind::FederatedObjectStore => Self::FederatedObjectStore(FederatedObjectStoreTable::default()),
		}
	}

	pub fn kind(&self) -> TableKind {
		self.behavior().kind()
	}

	pub fn behavior(&self) -> &dyn TableBehavior {
		match self {
			Self::NativeStorage(table) => table,
			Self::FederatedRdbms(table) => table,
			Self::SystemViewSource(table) => table,
			Self::View(view) => view,
			Self::FederatedColumnar(table) => table,
			Self::FederatedObjectStore(table) => table,
		}
	}

	pub fn behavior_mut(&mut self) -> &mut dyn TableBehavior {
		match self {
			Self::NativeStorage(table) => table,
			Self::FederatedRdbms(table) => table,
			Self::SystemViewSource(table) => table,
			Self::View(view) => view,
			Self::FederatedColumnar(table) => table,
			Self::FederatedObjectStore(table) => table,
		}
	}

	pub fn as_definition(&self) -> Option<&dyn DefinitionStatement> {
		match self {
			Self::NativeStorage(table) => Some(table),
			Self::FederatedRdbms(table) => Some(table),
			Self::View(view) => Some(view),
			Self::FederatedColumnar(table) => Some(table),
			Self::FederatedObjectStore(table) => Some(table),
			Self::SystemViewSource(_) => None,
		}
	}

	pub fn as_signature(&self) -> Option<&dyn StructuralSignature> {
		match self {
			Self::NativeStorage(table) => Some(table),
			Self::FederatedRdbms(table) => Some(table),
			Self::FederatedColumnar(table) => Some(table),
			Self::FederatedObjectStore(table) => Some(table),
			Self::View(_) | Self::SystemViewSource(_) => None,
		}
	}

	pub fn as_view(&self) -> Option<&View> {
		match self {
			Self::View(view) => Some(view),
			_ => None,
		}
	}

	pub fn as_view_mut(&mut self) -> Option<&mut View> {
		match self {
			Self::View(view) => Some(view),
			_ => None,
		}
	}
}

macro_rules! impl_from_variant {
	($($variant:ident($ty:ty)),* $(,)?) => {
		$(
			impl From<$ty> for TableVariant {
				fn from(value: $ty) -> Self {
					Self::$variant(value)
				}
			}
		)*
	};
}

impl_from_variant! {
	NativeStorage(NativeStorageTable),
	FederatedRdbms(FederatedRdbmsTable),
	SystemViewSource(SystemViewSourceTable),
	View(View),
	FederatedColumnar(FederatedColumnarTable),
	FederatedObjectStore(FederatedObjectStoreTable),
}

pub(crate) fn write_strings(writer: &mut Writer, values: &[String]) -> encoding::Result<()> {
	writer.write_count(values.len())?;
	for value in values {
		writer.write_str(value)?;
	}
	Ok(())
}

pub(crate) fn read_strings(reader: &mut Reader<'_>, what: &str, max: usize) -> encoding::Result<Vec<String>> {
	let count = reader.read_count(what, max)?;
	let mut values = Vec::with_capacity(count);
	for _ in 0..count {
		values.push(reader.read_string()?);
	}
	Ok(values)
}
