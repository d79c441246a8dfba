// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Display;

use crate::{ValueKind, error::diagnostic::Diagnostic};

pub fn column_not_found(column: &str, relation: &str) -> Diagnostic {
	Diagnostic {
		code: "SCHEMA_001".to_string(),
		message: format!("column {column} not found in relation {relation}"),
		label: Some(format!("unknown column {column}")),
		help: Some("check the column name against the relation's schema".to_string()),
		notes: vec!["columns taken from the right side of a join may be renamed to <relation>_<column>".to_string()],
		cause: None,
	}
}

pub fn duplicate_column(column: &str) -> Diagnostic {
	Diagnostic {
		code: "SCHEMA_002".to_string(),
		message: format!("column {column} appears more than once in the schema"),
		label: None,
		help: Some("column names must be unique within a relation".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn type_mismatch(column: &str, expected: impl Display, actual: ValueKind) -> Diagnostic {
	Diagnostic {
		code: "SCHEMA_003".to_string(),
		message: format!("column {column} has kind {actual}, expected {expected}"),
		label: Some(format!("{column} is {actual}")),
		help: None,
		notes: vec!["INT and DECIMAL are mutually comparable; no other implicit coercion exists".to_string()],
		cause: None,
	}
}

pub fn row_arity_mismatch(relation: &str, expected: usize, actual: usize) -> Diagnostic {
	Diagnostic {
		code: "SCHEMA_004".to_string(),
		message: format!("row in relation {relation} has {actual} values, schema has {expected} columns"),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

pub fn duplicate_primary_key(relation: &str, key: impl Display) -> Diagnostic {
	Diagnostic {
		code: "SCHEMA_005".to_string(),
		message: format!("primary key {key} occurs more than once in relation {relation}"),
		label: None,
		help: Some("the source snapshot violates the declared primary key".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn join_key_arity(left: usize, right: usize) -> Diagnostic {
	Diagnostic {
		code: "SCHEMA_006".to_string(),
		message: format!("join key lists differ in length: {left} left, {right} right"),
		label: None,
		help: Some("pair every left key column with exactly one right key column".to_string()),
		notes: vec![],
		cause: None,
	}
}
