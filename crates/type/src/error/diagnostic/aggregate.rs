// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

pub fn integer_overflow(column: &str) -> Diagnostic {
	Diagnostic {
		code: "AGGREGATE_001".to_string(),
		message: format!("sum over {column} overflows a 64-bit integer"),
		label: None,
		help: Some("declare the column as DECIMAL to sum it with arbitrary precision".to_string()),
		notes: vec![],
		cause: None,
	}
}
