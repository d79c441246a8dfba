// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Scalar values and the diagnostic error model shared by every rentlens crate.

pub mod error;
pub mod value;

pub use error::{Diagnostic, Error, ErrorKind, IntoDiagnostic};
pub use value::{Decimal, Value, ValueKind};

pub type Result<T> = std::result::Result<T, Error>;
