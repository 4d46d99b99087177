// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_type::{Diagnostic, IntoDiagnostic};

use crate::{resolve::ResolveError, table::TableKind};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
	#[error("unknown table kind `{tag}`")]
	UnknownTableKind {
		tag: String,
	},

	#[error("view `{view}` cannot be resolved: {source}")]
	ResolutionFailure {
		view: String,
		#[source]
		source: ResolveError,
	},

	#[error("{operation} is not supported by {kind} tables")]
	UnsupportedOperation {
		operation: &'static str,
		kind: TableKind,
	},

	#[error("{kind} tables require a schema")]
	SchemaRequired {
		kind: TableKind,
	},
}

impl IntoDiagnostic for CatalogError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			CatalogError::UnknownTableKind {
				tag,
			} => Diagnostic {
				code: "CA_001".to_string(),
				message,
				label: Some(format!("`{tag}` is not a table kind")),
				help: Some(format!("expected one of: {}", TableKind::ALL.map(|kind| kind.as_tag()).join(", "))),
				notes: vec!["the metadata stream was written by a newer version or is corrupt".to_string()],
				cause: None,
			},

			CatalogError::ResolutionFailure {
				view,
				source,
			} => Diagnostic {
				code: "CA_002".to_string(),
				message,
				label: Some("the table decoded but its view definition no longer resolves".to_string()),
				help: Some(format!("recreate view `{view}` or restore the objects it depends on")),
				notes: vec![],
				cause: Some(Box::new(Diagnostic {
					code: "RESOLVE_001".to_string(),
					message: source.to_string(),
					label: None,
					help: None,
					notes: vec![],
					cause: None,
				})),
			},

			CatalogError::UnsupportedOperation {
				..
			} => Diagnostic {
				code: "CA_003".to_string(),
				message,
				label: None,
				help: Some("check the capability on the table before calling".to_string()),
				notes: vec![],
				cause: None,
			},

			CatalogError::SchemaRequired {
				kind,
			} => Diagnostic {
				code: "CA_004".to_string(),
				message,
				label: Some(format!("no column list was given for this {kind} table")),
				help: Some(format!("only {} tables may be created without columns", TableKind::View)),
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<CatalogError> for tabula_type::Error {
	fn from(err: CatalogError) -> Self {
		tabula_type::Error::new(err)
	}
}
