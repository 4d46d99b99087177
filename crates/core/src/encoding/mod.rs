// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Binary encoding of catalog metadata.
//!
//! The [`binary`] format mirrors the widths of a Java `DataOutput` stream so
//! that checkpoint images stay byte compatible: integers are big-endian,
//! booleans are a single `0x00`/`0x01` byte and strings are an `i32` byte
//! length followed by UTF-8. The format is not self-describing; the reader
//! must know what comes next.

pub use error::Error;

pub mod binary;
mod error;

pub type Result<T> = std::result::Result<T, Error>;
