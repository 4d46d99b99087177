// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_core::{
	MetaStamp, Versioned,
	encoding::binary::{Reader, Writer},
	interface::catalog::TableId,
};
use tracing::debug;

pub use columnar::FederatedColumnarTable;
pub use kind::{SqlTableType, TableKind};
pub use native::{Distribution, KeysKind, NativeStorageTable, Partitioning};
pub use object_store::FederatedObjectStoreTable;
pub use rdbms::FederatedRdbmsTable;
pub use system::{SystemSource, SystemViewSourceTable};
pub use variant::{DefinitionStatement, StructuralSignature, TableBehavior, TableVariant};
pub use view::View;

use crate::{
	CatalogError,
	codec::CodecConfig,
	column::Column,
	descriptor::TableDescriptor,
	index::ColumnIndex,
	partition::Partition,
	table::signature::SignatureHasher,
};

mod columnar;
pub(crate) mod ddl;
mod kind;
mod native;
mod object_store;
mod rdbms;
pub mod signature;
mod system;
mod variant;
mod view;

/// A table as the catalog persists it: the fields every kind shares plus the
/// state of exactly one variant.
///
/// Two tables are equal when everything that is persisted is equal. The
/// column lookup and a view's resolved query are derived and not compared.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
	id: TableId,
	name: String,
	stamp: MetaStamp,
	columns: ColumnIndex,
	variant: TableVariant,
}

impl Table {
	/// Creates a table. Only views may be created without a schema.
	pub fn new(
		id: TableId,
		name: impl Into<String>,
		schema: Option<Vec<Column>>,
		variant: impl Into<TableVariant>,
	) -> crate::Result<Self> {
		let variant = variant.into();
		let columns = match schema {
			Some(columns) => ColumnIndex::from(columns),
			None if variant.kind() == TableKind::View => ColumnIndex::new(),
			None => {
				return Err(CatalogError::SchemaRequired {
					kind: variant.kind(),
				}
				.into());
			}
		};

		Ok(Self {
			id,
			name: name.into(),
			stamp: MetaStamp::default(),
			columns,
			variant,
		})
	}

	/// An unpopulated table of `kind`, filled in by [`Table::read_fields`].
	pub(crate) fn empty(kind: TableKind) -> Self {
		Self {
			id: TableId::default(),
			name: String::new(),
			stamp: MetaStamp::default(),
			columns: ColumnIndex::new(),
			variant: TableVariant::empty(kind),
		}
	}

	pub fn id(&self) -> TableId {
		self.id
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn kind(&self) -> TableKind {
		self.variant.kind()
	}

	pub fn variant(&self) -> &TableVariant {
		&self.variant
	}

	pub fn variant_mut(&mut self) -> &mut TableVariant {
		&mut self.variant
	}

	pub fn schema(&self) -> &[Column] {
		self.columns.columns()
	}

	pub fn column_index(&self) -> &ColumnIndex {
		&self.columns
	}

	/// Number of columns, or of key columns only.
	pub fn column_count(&self, keys_only: bool) -> usize {
		if keys_only {
			self.schema().iter().filter(|column| column.is_key).count()
		} else {
			self.schema().len()
		}
	}

	/// Replaces the schema and rebuilds the column lookup from it.
	pub fn replace_schema(&mut self, columns: Vec<Column>) {
		debug!(table = %self.name, old = self.columns.len(), new = columns.len(), "replacing table schema");
		self.columns.rebuild(columns);
	}

	pub fn column(&self, name: &str) -> Option<&Column> {
		self.columns.lookup(name)
	}

	pub fn is_partitioned(&self) -> bool {
		self.variant.behavior().is_partitioned()
	}

	pub fn partition(&self, name: &str) -> Option<&Partition> {
		self.variant.behavior().partition(name)
	}

	pub fn engine(&self) -> Option<&'static str> {
		self.variant.behavior().engine()
	}

	pub fn sql_table_type(&self) -> SqlTableType {
		self.variant.behavior().sql_table_type()
	}

	pub fn comment(&self) -> &str {
		self.variant.behavior().comment()
	}

	pub fn descriptor(&self) -> Option<TableDescriptor> {
		let detail = self.variant.behavior().descriptor_detail()?;
		Some(TableDescriptor {
			id: self.id,
			name: self.name.clone(),
			kind: self.kind(),
			column_count: self.column_count(false),
			key_count: self.column_count(true),
			detail,
		})
	}

	pub fn supports_definition_statement(&self) -> bool {
		self.variant.as_definition().is_some()
	}

	/// Rebuilds DDL that would create an equivalent table in `namespace`.
	pub fn definition_statement(&self, namespace: &str) -> crate::Result<String> {
		let Some(definition) = self.variant.as_definition() else {
			return Err(CatalogError::UnsupportedOperation {
				operation: "definition statement",
				kind: self.kind(),
			}
			.into());
		};
		Ok(definition.definition_statement(self, namespace))
	}

	pub fn supports_signature(&self) -> bool {
		self.variant.as_signature().is_some()
	}

	/// Fingerprint of the table structure used to compare replicas.
	pub fn signature(&self, version: u32) -> crate::Result<u64> {
		let Some(signature) = self.variant.as_signature() else {
			return Err(CatalogError::UnsupportedOperation {
				operation: "structural signature",
				kind: self.kind(),
			}
			.into());
		};

		let mut hasher = SignatureHasher::new(version);
		hasher.str(self.kind().as_tag());
		hasher.str(&self.name);
		hasher.u64(self.schema().len() as u64);
		for column in self.schema() {
			column.feed_signature(&mut hasher);
		}
		signature.feed_signature(&mut hasher);
		Ok(hasher.finish())
	}

	/// Writes everything after the kind tag.
	pub(crate) fn write_fields(&self, writer: &mut Writer) -> crate::Result<()> {
		self.stamp.encode(writer)?;
		writer.write_u64(*self.id)?;
		writer.write_str(&self.name)?;

		writer.write_count(self.columns.len())?;
		for column in self.schema() {
			column.encode(writer)?;
		}

		self.variant.behavior().encode_properties(writer)?;
		Ok(())
	}

	/// Populates an [`Table::empty`] table from the fields after the kind tag.
	pub(crate) fn read_fields(&mut self, reader: &mut Reader<'_>, config: &CodecConfig) -> crate::Result<()> {
		self.stamp = MetaStamp::decode(reader)?;
		self.id = TableId(reader.read_u64()?);
		self.name = reader.read_string()?;

		let count = reader.read_count("column", config.max_columns)?;
		for _ in 0..count {
			self.columns.append_decoded(Column::decode(reader)?);
		}

		self.variant.behavior_mut().decode_properties(reader, config)?;
		Ok(())
	}
}

impl Versioned for Table {
	fn stamp(&self) -> &MetaStamp {
		&self.stamp
	}

	fn stamp_mut(&mut self) -> &mut MetaStamp {
		&mut self.stamp
	}
}
