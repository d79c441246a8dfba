// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

pub fn limit_without_sort(limit: usize) -> Diagnostic {
	Diagnostic {
		code: "PIPELINE_001".to_string(),
		message: format!("LIMIT {limit} is not preceded by a SORT"),
		label: Some("limit applied to unordered rows".to_string()),
		help: Some("add a sort stage directly before the limit".to_string()),
		notes: vec![
			"joins, aggregates and windows do not preserve order, so the sort must follow them".to_string(),
		],
		cause: None,
	}
}

pub fn unknown_report(name: &str, known: &[&str]) -> Diagnostic {
	Diagnostic {
		code: "PIPELINE_002".to_string(),
		message: format!("unknown report {name}"),
		label: None,
		help: Some(format!("available reports: {}", known.join(", "))),
		notes: vec![],
		cause: None,
	}
}
