// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{fmt, fmt::Display};

use serde::{Deserialize, Serialize};
use tabula_core::{
	encoding,
	encoding::binary::{Reader, Writer},
	invalid_data,
};

use crate::{
	codec::CodecConfig,
	descriptor::DescriptorDetail,
	partition::Partition,
	table::{
		DefinitionStatement, SqlTableType, StructuralSignature, Table, TableBehavior, TableKind, ddl,
		signature::SignatureHasher,
		variant::{read_strings, write_strings},
	},
};

/// How rows sharing the same key columns are merged.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeysKind {
	Aggregate,
	Unique,
	#[default]
	Duplicate,
}

impl KeysKind {
	pub fn to_u8(&self) -> u8 {
		match self {
			KeysKind::Aggregate => 1,
			KeysKind::Unique => 2,
			KeysKind::Duplicate => 3,
		}
	}

	pub fn from_u8(value: u8) -> Option<Self> {
		match value {
			1 => Some(KeysKind::Aggregate),
			2 => Some(KeysKind::Unique),
			3 => Some(KeysKind::Duplicate),
			_ => None,
		}
	}
}

impl Display for KeysKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			KeysKind::Aggregate => "AGGREGATE KEY",
			KeysKind::Unique => "UNIQUE KEY",
			KeysKind::Duplicate => "DUPLICATE KEY",
		})
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Partitioning {
	#[default]
	Unpartitioned,
	Range {
		columns: Vec<String>,
	},
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Distribution {
	Hash {
		columns: Vec<String>,
		buckets: u32,
	},
	Random {
		buckets: u32,
	},
}

impl Default for Distribution {
	fn default() -> Self {
		Distribution::Random {
			buckets: 1,
		}
	}
}

impl Distribution {
	pub fn buckets(&self) -> u32 {
		match self {
			Distribution::Hash {
				buckets,
				..
			}
			| Distribution::Random {
				buckets,
			} => *buckets,
		}
	}
}

const PARTITIONING_NONE: u8 = 0;
const PARTITIONING_RANGE: u8 = 1;
const DISTRIBUTION_HASH: u8 = 1;
const DISTRIBUTION_RANDOM: u8 = 2;

/// A table whose rows live in the database's own storage engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NativeStorageTable {
	pub keys: KeysKind,
	pub partitioning: Partitioning,
	pub distribution: Distribution,
	pub partitions: Vec<Partition>,
}

impl NativeStorageTable {
	pub fn new(keys: KeysKind, partitioning: Partitioning, distribution: Distribution) -> Self {
		Self {
			keys,
			partitioning,
			distribution,
			partitions: Vec::new(),
		}
	}

	pub fn with_partition(mut self, partition: Partition) -> Self {
		self.partitions.push(partition);
		self
	}
}

impl TableBehavior for NativeStorageTable {
	fn kind(&self) -> TableKind {
		TableKind::NativeStorage
	}

	fn engine(&self) -> Option<&'static str> {
		Some("OLAP")
	}

	fn sql_table_type(&self) -> SqlTableType {
		SqlTableType::BaseTable
	}

	fn comment(&self) -> &str {
		""
	}

	fn is_partitioned(&self) -> bool {
		match &self.partitioning {
			Partitioning::Range {
				..
			} => true,
			Partitioning::Unpartitioned => matches!(self.distribution, Distribution::Hash { .. }),
		}
	}

	fn partition(&self, name: &str) -> Option<&Partition> {
		self.partitions.iter().find(|partition| partition.name == name)
	}

	fn descriptor_detail(&self) -> Option<DescriptorDetail> {
		Some(DescriptorDetail::NativeStorage {
			keys: self.keys,
			partition_count: self.partitions.len(),
			bucket_count: self.distribution.buckets(),
		})
	}

	fn encode_properties(&self, writer: &mut Writer) -> encoding::Result<()> {
		writer.write_u8(self.keys.to_u8())?;

		match &self.partitioning {
			Partitioning::Unpartitioned => writer.write_u8(PARTITIONING_NONE)?,
			Partitioning::Range {
				columns,
			} => {
				writer.write_u8(PARTITIONING_RANGE)?;
				write_strings(writer, columns)?;
			}
		}

		match &self.distribution {
			Distribution::Hash {
				columns,
				buckets,
			} => {
				writer.write_u8(DISTRIBUTION_HASH)?;
				write_strings(writer, columns)?;
				writer.write_i32(i32::try_from(*buckets)?)?;
			}
			Distribution::Random {
				buckets,
			} => {
				writer.write_u8(DISTRIBUTION_RANDOM)?;
				writer.write_i32(i32::try_from(*buckets)?)?;
			}
		}

		writer.write_count(self.partitions.len())?;
		for partition in &self.partitions {
			partition.encode(writer)?;
		}
		Ok(())
	}

	fn decode_properties(&mut self, reader: &mut Reader<'_>, config: &CodecConfig) -> encoding::Result<()> {
		let code = reader.read_u8()?;
		let Some(keys) = KeysKind::from_u8(code) else {
			return invalid_data!("invalid keys kind {code}");
		};
		self.keys = keys;

		self.partitioning = match reader.read_u8()? {
			PARTITIONING_NONE => Partitioning::Unpartitioned,
			PARTITIONING_RANGE => Partitioning::Range {
				columns: read_strings(reader, "partition column", config.max_entries)?,
			},
			code => return invalid_data!("invalid partitioning {code}"),
		};

		self.distribution = match reader.read_u8()? {
			DISTRIBUTION_HASH => {
				let columns = read_strings(reader, "distribution column", config.max_entries)?;
				let buckets = u32::try_from(reader.read_i32()?)?;
				Distribution::Hash {
					columns,
					buckets,
				}
			}
			DISTRIBUTION_RANDOM => Distribution::Random {
				buckets: u32::try_from(reader.read_i32()?)?,
			},
			code => return invalid_data!("invalid distribution {code}"),
		};

		let count = reader.read_count("partition", config.max_entries)?;
		self.partitions = Vec::with_capacity(count);
		for _ in 0..count {
			self.partitions.push(Partition::decode(reader)?);
		}
		Ok(())
	}
}

impl DefinitionStatement for NativeStorageTable {
	fn definition_statement(&self, table: &Table, namespace: &str) -> String {
		let mut sql = ddl::create_table(table, namespace);
		sql.push_str(" ENGINE=OLAP\n");

		let keys: Vec<&str> =
			table.schema().iter().filter(|column| column.is_key).map(|column| column.name.as_str()).collect();
		if !keys.is_empty() {
			sql.push_str(&format!("{}({})\n", self.keys, ddl::quoted_list(keys)));
		}

		if let Partitioning::Range {
			columns,
		} = &self.partitioning
		{
			sql.push_str(&format!("PARTITION BY RANGE({})\n", ddl::quoted_list(columns.iter().map(String::as_str))));
		}

		match &self.distribution {
			Distribution::Hash {
				columns,
				buckets,
			} => sql.push_str(&format!(
				"DISTRIBUTED BY HASH({}) BUCKETS {buckets}",
				ddl::quoted_list(columns.iter().map(String::as_str))
			)),
			Distribution::Random {
				buckets,
			} => sql.push_str(&format!("DISTRIBUTED BY RANDOM BUCKETS {buckets}")),
		}
		sql
	}
}

impl StructuralSignature for NativeStorageTable {
	fn feed_signature(&self, hasher: &mut SignatureHasher) {
		hasher.u8(self.keys.to_u8());
		match &self.partitioning {
			Partitioning::Unpartitioned => hasher.u8(PARTITIONING_NONE),
			Partitioning::Range {
				columns,
			} => {
				hasher.u8(PARTITIONING_RANGE);
				hasher.strs(columns.iter().map(String::as_str));
			}
		}
		match &self.distribution {
			Distribution::Hash {
				columns,
				buckets,
			} => {
				hasher.u8(DISTRIBUTION_HASH);
				hasher.strs(columns.iter().map(String::as_str));
				hasher.u64(u64::from(*buckets));
			}
			Distribution::Random {
				buckets,
			} => {
				hasher.u8(DISTRIBUTION_RANDOM);
				hasher.u64(u64::from(*buckets));
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use tabula_core::interface::catalog::{PartitionId, TableId};
	use tabula_type::Type;

	use super::*;
	use crate::column::{AggregationKind, Column};

	fn hash_distributed() -> NativeStorageTable {
		NativeStorageTable::new(
			KeysKind::Aggregate,
			Partitioning::Unpartitioned,
			Distribution::Hash {
				columns: vec!["k1".to_string()],
				buckets: 8,
			},
		)
	}

	#[test]
	fn test_is_partitioned() {
		assert!(!NativeStorageTable::default().is_partitioned());
		assert!(hash_distributed().is_partitioned());

		let range = NativeStorageTable::new(
			KeysKind::Duplicate,
			Partitioning::Range {
				columns: vec!["day".to_string()],
			},
			Distribution::default(),
		);
		assert!(range.is_partitioned());
	}

	#[test]
	fn test_partition_lookup_is_exact() {
		let table = hash_distributed().with_partition(Partition::new(PartitionId(3), "p2024"));
		assert_eq!(table.partition("p2024").map(|p| p.id), Some(PartitionId(3)));
		assert!(table.partition("P2024").is_none());
		assert!(table.partition("missing").is_none());
	}

	#[test]
	fn test_properties_round_trip() {
		let table = NativeStorageTable::new(
			KeysKind::Unique,
			Partitioning::Range {
				columns: vec!["day".to_string()],
			},
			Distribution::Hash {
				columns: vec!["id".to_string(), "day".to_string()],
				buckets: 16,
			},
		)
		.with_partition(Partition::new(PartitionId(1), "p1"))
		.with_partition(Partition::new(PartitionId(2), "p2"));

		let mut writer = Writer::new();
		table.encode_properties(&mut writer).unwrap();
		let bytes = writer.finish();

		let mut decoded = NativeStorageTable::default();
		let mut reader = Reader::new(&bytes);
		decoded.decode_properties(&mut reader, &CodecConfig::default()).unwrap();
		reader.finish().unwrap();
		assert_eq!(decoded, table);
	}

	#[test]
	fn test_invalid_keys_kind() {
		let mut decoded = NativeStorageTable::default();
		let err = decoded.decode_properties(&mut Reader::new(&[9]), &CodecConfig::default()).unwrap_err();
		assert_eq!(err.to_string(), "invalid keys kind 9");
	}

	#[test]
	fn test_partition_count_limit() {
		let table = hash_distributed()
			.with_partition(Partition::new(PartitionId(1), "p1"))
			.with_partition(Partition::new(PartitionId(2), "p2"));
		let mut writer = Writer::new();
		table.encode_properties(&mut writer).unwrap();
		let bytes = writer.finish();

		let config = CodecConfig {
			max_entries: 1,
			..CodecConfig::default()
		};
		let err = NativeStorageTable::default().decode_properties(&mut Reader::new(&bytes), &config).unwrap_err();
		assert_eq!(err.to_string(), "partition count 2 exceeds limit of 1");
	}

	#[test]
	fn test_definition_statement() {
		let table = Table::new(
			TableId(1),
			"sales",
			Some(vec![
				Column::new("k1", Type::Int4).key(),
				Column::new("v1", Type::Int8).with_aggregation(AggregationKind::Sum),
			]),
			hash_distributed(),
		)
		.unwrap();

		assert_eq!(
			table.definition_statement("shop").unwrap(),
			"CREATE TABLE `shop`.`sales` (\n  `k1` INT NOT NULL COMMENT \"\",\n  `v1` BIGINT SUM NOT NULL COMMENT \"\"\n) ENGINE=OLAP\nAGGREGATE KEY(`k1`)\nDISTRIBUTED BY HASH(`k1`) BUCKETS 8"
		);
	}

	#[test]
	fn test_definition_statement_without_keys() {
		let table = Table::new(
			TableId(2),
			"events",
			Some(vec![Column::new("payload", Type::Varchar).with_length(64)]),
			NativeStorageTable::default(),
		)
		.unwrap();

		assert_eq!(
			table.definition_statement("shop").unwrap(),
			"CREATE TABLE `shop`.`events` (\n  `payload` VARCHAR(64) NOT NULL COMMENT \"\"\n) ENGINE=OLAP\nDISTRIBUTED BY RANDOM BUCKETS 1"
		);
	}

	#[test]
	fn test_definition_statement_with_range() {
		let table = Table::new(
			TableId(3),
			"daily",
			Some(vec![Column::new("day", Type::Date).key(), Column::new("n", Type::Int8)]),
			NativeStorageTable::new(
				KeysKind::Duplicate,
				Partitioning::Range {
					columns: vec!["day".to_string()],
				},
				Distribution::default(),
			),
		)
		.unwrap();

		assert!(table.definition_statement("shop").unwrap().ends_with(
			") ENGINE=OLAP\nDUPLICATE KEY(`day`)\nPARTITION BY RANGE(`day`)\nDISTRIBUTED BY RANDOM BUCKETS 1"
		));
	}

	#[test]
	fn test_descriptor_detail() {
		let detail = hash_distributed().with_partition(Partition::new(PartitionId(1), "p1")).descriptor_detail();
		assert_eq!(
			detail,
			Some(DescriptorDetail::NativeStorage {
				keys: KeysKind::Aggregate,
				partition_count: 1,
				bucket_count: 8,
			})
		);
	}
}
