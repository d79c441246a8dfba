// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod common;

use common::{memory_context, memory_source};
use rentlens_core::{Catalog, Table};
use rentlens_report::{Report, ReportDriver, ReportRunner};
use rentlens_source::{Context, MemorySource};

#[test]
fn test_parallel_matches_sequential() {
	let context = memory_context();
	let runner = ReportRunner::new(Some(4)).unwrap();
	assert_eq!(runner.threads(), 4);

	let outcomes = runner.run(&context, Report::all());
	assert_eq!(outcomes.iter().map(|o| o.report).collect::<Vec<_>>(), Report::all());

	let driver = ReportDriver::new(&context);
	for outcome in outcomes {
		let expected = driver.run(outcome.report).unwrap();
		assert_eq!(outcome.result.unwrap().rows(), expected.rows());
	}
}

#[test]
fn test_failure_is_isolated() {
	// no payment table, so only the revenue report fails
	let catalog = Catalog::default();
	let mut source = MemorySource::new();
	let full = memory_source();
	for table in [Table::Category, Table::FilmCategory, Table::Film] {
		source.insert(table, Context::new(full.clone(), catalog.clone()).load(table).unwrap());
	}
	let context = Context::new(source, catalog);

	let runner = ReportRunner::new(Some(2)).unwrap();
	let outcomes = runner.run(&context, &[Report::FilmsPerCategory, Report::TopRevenueCategories]);

	assert!(outcomes[0].result.is_ok());
	assert_eq!(outcomes[1].result.as_ref().unwrap_err().code(), "LOAD_002");
}

#[test]
fn test_default_threads() {
	let runner = ReportRunner::new(None).unwrap();
	assert!(runner.threads() >= 1);
}
