// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod diagnostic;

use std::fmt::{Display, Formatter};

pub use diagnostic::{Diagnostic, IntoDiagnostic};

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Box<Diagnostic>);

/// Error family, derived from the diagnostic code prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// The source is unreachable, the table is missing or a cell cannot be read.
	Load,
	/// A stage references an absent column or mixes incompatible kinds.
	Schema,
	/// An accumulator could not produce its value.
	Aggregation,
	/// A pipeline was assembled in an order the engine refuses to run.
	Pipeline,
	Internal,
}

impl Display for ErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ErrorKind::Load => f.write_str("load error"),
			ErrorKind::Schema => f.write_str("schema error"),
			ErrorKind::Aggregation => f.write_str("aggregation error"),
			ErrorKind::Pipeline => f.write_str("pipeline error"),
			ErrorKind::Internal => f.write_str("internal error"),
		}
	}
}

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		*self.0
	}

	pub fn code(&self) -> &str {
		&self.0.code
	}

	pub fn kind(&self) -> ErrorKind {
		let code = self.code();
		if code.starts_with("LOAD_") {
			ErrorKind::Load
		} else if code.starts_with("SCHEMA_") {
			ErrorKind::Schema
		} else if code.starts_with("AGGREGATE_") {
			ErrorKind::Aggregation
		} else if code.starts_with("PIPELINE_") {
			ErrorKind::Pipeline
		} else {
			ErrorKind::Internal
		}
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0.render())
	}
}

impl std::error::Error for Error {}

impl From<Diagnostic> for Error {
	fn from(diagnostic: Diagnostic) -> Self {
		Error(Box::new(diagnostic))
	}
}

/// Builds an [`Error`] from a diagnostic.
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::error::Error(Box::new($diagnostic))
	};
}

/// Returns early with an [`Error`] built from a diagnostic.
#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::error!($diagnostic))
	};
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::diagnostic::{aggregate, load, pipeline, schema};

	#[test]
	fn test_kind_follows_code_family() {
		assert_eq!(error!(load::table_not_found("film")).kind(), ErrorKind::Load);
		assert_eq!(error!(schema::column_not_found("title", "film")).kind(), ErrorKind::Schema);
		assert_eq!(error!(aggregate::integer_overflow("amount")).kind(), ErrorKind::Aggregation);
		assert_eq!(error!(pipeline::limit_without_sort(5)).kind(), ErrorKind::Pipeline);
	}

	#[test]
	fn test_display_renders_code_and_help() {
		let err = error!(schema::column_not_found("title", "film"));
		let text = err.to_string();
		assert!(text.starts_with("error[SCHEMA_001]"));
		assert!(text.contains("title"));
		assert!(text.contains("help:"));
	}
}
