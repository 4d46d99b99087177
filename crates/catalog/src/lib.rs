// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use codec::{CodecConfig, TableCodec, TableCodecBuilder};
pub use column::{AggregationKind, Column};
pub use descriptor::{DescriptorDetail, TableDescriptor};
pub use error::CatalogError;
pub use index::ColumnIndex;
pub use partition::Partition;
pub use resolve::{QueryResolver, ResolveError, ResolvedQuery, SyntacticResolver};
pub use table::{SqlTableType, Table, TableKind, TableVariant};

pub mod codec;
pub mod column;
pub mod descriptor;
pub mod error;
pub mod index;
pub mod partition;
pub mod resolve;
pub mod table;
pub mod test_utils;

pub type Result<T> = std::result::Result<T, tabula_type::Error>;
