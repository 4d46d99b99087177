// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The persisted form of a [`Table`].
//!
//! A record starts with the kind tag, which selects the variant, followed by
//! the fields shared by every table and finally the variant's own
//! properties. Records carry no terminator, so several of them can be
//! written back to back into one checkpoint image and read with
//! [`TableCodec::decode_from`].

use std::sync::Arc;

pub use config::{CodecConfig, DEFAULT_MAX_COLUMNS, DEFAULT_MAX_ENTRIES};
use tabula_core::encoding::binary::{Reader, Writer};
use tracing::{debug, instrument, warn};

use crate::{
	CatalogError,
	resolve::{QueryResolver, SyntacticResolver},
	table::{Table, TableKind},
};

mod config;

/// Encodes and decodes tables with a fixed configuration and view resolver.
#[derive(Clone)]
pub struct TableCodec {
	config: CodecConfig,
	resolver: Arc<dyn QueryResolver>,
}

impl Default for TableCodec {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for TableCodec {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TableCodec").field("config", &self.config).finish_non_exhaustive()
	}
}

impl TableCodec {
	pub fn new() -> Self {
		Self::builder().build()
	}

	pub fn builder() -> TableCodecBuilder {
		TableCodecBuilder::new()
	}

	pub fn config(&self) -> &CodecConfig {
		&self.config
	}

	#[instrument(name = "catalog::codec::encode", level = "trace", skip(self, table), fields(table = %table.name()))]
	pub fn encode(&self, table: &Table) -> crate::Result<Vec<u8>> {
		let mut writer = Writer::new();
		self.encode_into(table, &mut writer)?;
		Ok(writer.finish())
	}

	/// Appends one record to `writer`.
	#[instrument(name = "catalog::codec::encode_into", level = "trace", skip(self, table, writer), fields(table = %table.name()))]
	pub fn encode_into(&self, table: &Table, writer: &mut Writer) -> crate::Result<()> {
		writer.write_str(table.kind().as_tag())?;
		table.write_fields(writer)
	}

	/// Decodes exactly one record; bytes left over afterwards are an error.
	#[instrument(name = "catalog::codec::decode", level = "trace", skip(self, bytes), fields(len = bytes.len()))]
	pub fn decode(&self, bytes: &[u8]) -> crate::Result<Table> {
		let mut reader = Reader::new(bytes);
		let table = self.decode_from(&mut reader)?;
		reader.finish()?;
		Ok(table)
	}

	/// Decodes the next record of a stream, leaving the reader positioned
	/// after it.
	#[instrument(name = "catalog::codec::decode_from", level = "trace", skip(self, reader))]
	pub fn decode_from(&self, reader: &mut Reader<'_>) -> crate::Result<Table> {
		let tag = reader.read_string()?;
		let Some(kind) = TableKind::from_tag(&tag) else {
			warn!(%tag, "unknown table kind in metadata stream");
			return Err(CatalogError::UnknownTableKind {
				tag,
			}
			.into());
		};

		let mut table = Table::empty(kind);
		table.read_fields(reader, &self.config)?;

		let failure = table.variant_mut().as_view_mut().and_then(|view| view.resolve(self.resolver.as_ref()).err());
		if let Some(source) = failure {
			warn!(view = %table.name(), error = %source, "view definition does not resolve");
			return Err(CatalogError::ResolutionFailure {
				view: table.name().to_string(),
				source,
			}
			.into());
		}

		debug!(id = %table.id(), name = %table.name(), %kind, columns = table.column_count(false), "decoded table");
		Ok(table)
	}
}

/// Builder for configuring a [`TableCodec`].
pub struct TableCodecBuilder {
	config: CodecConfig,
	resolver: Arc<dyn QueryResolver>,
}

impl Default for TableCodecBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl TableCodecBuilder {
	pub fn new() -> Self {
		Self {
			config: CodecConfig::default(),
			resolver: Arc::new(SyntacticResolver),
		}
	}

	pub fn with_config(mut self, config: CodecConfig) -> Self {
		self.config = config;
		self
	}

	pub fn max_columns(mut self, max_columns: usize) -> Self {
		self.config.max_columns = max_columns;
		self
	}

	pub fn max_entries(mut self, max_entries: usize) -> Self {
		self.config.max_entries = max_entries;
		self
	}

	/// Resolver used for views after they are decoded.
	pub fn resolver(mut self, resolver: impl QueryResolver + 'static) -> Self {
		self.resolver = Arc::new(resolver);
		self
	}

	pub fn build(self) -> TableCodec {
		TableCodec {
			config: self.config,
			resolver: self.resolver,
		}
	}
}
