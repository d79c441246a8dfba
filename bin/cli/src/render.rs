// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Display;

use rentlens_core::Relation;
use rentlens_report::Report;
use serde_json::json;

fn heading(report: Report) -> String {
	format!("{}. {} ({})", report.number(), report.title(), report.name())
}

pub fn table(report: Report, relation: &Relation) -> String {
	format!("{}\n{relation}\n({} rows)\n", heading(report), relation.len())
}

/// One JSON document per report, on a single line.
pub fn json(report: Report, relation: &Relation) -> String {
	json!({
		"report": report.name(),
		"title": report.title(),
		"rows": relation,
	})
	.to_string()
}

pub fn explain(report: Report, pipeline: &impl Display) -> String {
	format!("{}\n{pipeline}\n", heading(report))
}
