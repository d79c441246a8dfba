// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rentlens_core::Relation;
use rentlens_engine::{Pipeline, Snapshot};
use rentlens_source::Context;
use rentlens_type::Result;
use tracing::{info, instrument};

use crate::Report;

/// Runs reports against a [`Context`]. Every run loads what it needs afresh
/// and returns a new relation.
#[derive(Clone, Copy)]
pub struct ReportDriver<'a> {
	context: &'a Context,
}

impl<'a> ReportDriver<'a> {
	pub fn new(context: &'a Context) -> Self {
		Self {
			context,
		}
	}

	#[instrument(name = "report::run", level = "debug", skip(self), fields(report = %report))]
	pub fn run(&self, report: Report) -> Result<Relation> {
		let pipeline = report.pipeline(self.context.catalog())?;
		let result = self.execute(&pipeline)?;
		info!(report = %report, rows = result.len(), "report complete");
		Ok(result.renamed(report.name()))
	}

	/// Loads exactly the tables `pipeline` reads, then runs it.
	pub fn execute(&self, pipeline: &Pipeline) -> Result<Relation> {
		let snapshot = pipeline
			.tables()
			.into_iter()
			.map(|table| Ok((table, self.context.load(table)?)))
			.collect::<Result<Snapshot>>()?;
		pipeline.execute(&snapshot)
	}
}
