// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{num::TryFromIntError, string::FromUtf8Error};

use tabula_type::{Diagnostic, IntoDiagnostic};

/// A malformed or truncated metadata stream, or a value that cannot be
/// represented in it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct Error(pub String);

#[macro_export]
macro_rules! invalid_data {
	($($args:tt)*) => { Err($crate::encoding::Error(format!($($args)*)).into()) };
}

impl From<FromUtf8Error> for Error {
	fn from(err: FromUtf8Error) -> Self {
		Self(err.to_string())
	}
}

impl From<TryFromIntError> for Error {
	fn from(err: TryFromIntError) -> Self {
		Self(err.to_string())
	}
}

impl IntoDiagnostic for Error {
	fn into_diagnostic(self) -> Diagnostic {
		Diagnostic {
			code: "ENCODING_001".to_string(),
			message: format!("malformed metadata stream: {}", self.0),
			label: None,
			help: Some("the checkpoint or log entry is truncated or was written by an incompatible version"
				.to_string()),
			notes: vec![],
			cause: None,
		}
	}
}

impl From<Error> for tabula_type::Error {
	fn from(err: Error) -> Self {
		tabula_type::Error::new(err)
	}
}
