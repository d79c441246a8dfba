// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{ValueKind, error::diagnostic::Diagnostic};

/// The data source could not be opened or queried
pub fn source_unreachable(source: impl Into<String>, reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "LOAD_001".to_string(),
		message: format!("data source {} is unreachable: {}", source.into(), reason.into()),
		label: None,
		help: Some("check the connection configuration and that the source is available".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn table_not_found(table: &str) -> Diagnostic {
	Diagnostic {
		code: "LOAD_002".to_string(),
		message: format!("table {table} does not exist in the data source"),
		label: Some(format!("unknown table {table}")),
		help: Some("make sure the rental schema has been created in the source".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// A stored cell cannot be represented as the column's declared kind
pub fn invalid_cell(table: &str, column: &str, kind: ValueKind, reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "LOAD_003".to_string(),
		message: format!("cannot read {table}.{column} as {kind}: {}", reason.into()),
		label: None,
		help: Some("the catalog's declared kind must match what the source stores".to_string()),
		notes: vec!["a different encoding can be declared with Catalog::with_column_kind".to_string()],
		cause: None,
	}
}
