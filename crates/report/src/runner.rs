// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rayon::{ThreadPool, ThreadPoolBuilder, prelude::*};
use rentlens_core::Relation;
use rentlens_source::Context;
use rentlens_type::{Result, error, error::diagnostic::internal::internal};
use tracing::{instrument, warn};

use crate::{Report, ReportDriver};

/// One report's result. A failed report never affects the others.
#[derive(Debug)]
pub struct ReportOutcome {
	pub report: Report,
	pub result: Result<Relation>,
}

/// Computes several reports in parallel on a dedicated rayon pool.
pub struct ReportRunner {
	pool: ThreadPool,
}

impl ReportRunner {
	/// `threads` defaults to the number of CPUs.
	pub fn new(threads: Option<usize>) -> Result<Self> {
		let threads = threads.filter(|&n| n > 0).unwrap_or_else(num_cpus::get);
		let pool = ThreadPoolBuilder::new()
			.num_threads(threads)
			.thread_name(|i| format!("report-{i}"))
			.build()
			.map_err(|err| error!(internal(format!("failed to build report pool: {err}"))))?;
		Ok(Self {
			pool,
		})
	}

	pub fn threads(&self) -> usize {
		self.pool.current_num_threads()
	}

	/// Runs `reports` and returns their outcomes in the order requested.
	#[instrument(name = "report::runner", level = "debug", skip_all, fields(reports = reports.len(), threads = self.threads()))]
	pub fn run(&self, context: &Context, reports: &[Report]) -> Vec<ReportOutcome> {
		let driver = ReportDriver::new(context);
		self.pool.install(|| {
			reports
				.par_iter()
				.map(|&report| {
					let result = driver.run(report);
					if let Err(err) = &result {
						warn!(report = %report, code = err.code(), "report failed");
					}
					ReportOutcome {
						report,
						result,
					}
				})
				.collect()
		})
	}
}
