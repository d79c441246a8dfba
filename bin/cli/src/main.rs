// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod args;
mod render;

use std::process::ExitCode;

use clap::Parser;
use rentlens_core::{Catalog, Table};
use rentlens_report::ReportRunner;
use rentlens_source::{ConnectionConfig, Context, SqliteConfig};
use rentlens_type::{Result, ValueKind, error::diagnostic::load::source_unreachable, return_error};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::args::Args;

fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.with_writer(std::io::stderr)
		.init();

	let args = Args::parse();
	match run(&args) {
		Ok(true) => ExitCode::SUCCESS,
		Ok(false) => ExitCode::FAILURE,
		Err(err) => {
			eprintln!("{err}");
			ExitCode::FAILURE
		}
	}
}

/// `Ok(false)` when at least one report failed.
fn run(args: &Args) -> Result<bool> {
	let reports = args.reports()?;
	let mut catalog = Catalog::default();
	if args.active_bool {
		catalog = catalog.with_column_kind(Table::Customer, "active", ValueKind::Bool)?;
	}

	if args.explain {
		for report in &reports {
			println!("{}", render::explain(*report, &report.pipeline(&catalog)?));
		}
		return Ok(true);
	}

	let Some(db) = &args.db else {
		return_error!(source_unreachable("sqlite", "no database given, pass --db or set RENTLENS_DB"));
	};
	let context = Context::connect(ConnectionConfig::Sqlite(SqliteConfig::new(db).read_only()), catalog)?;
	let runner = ReportRunner::new(args.threads)?;
	info!(reports = reports.len(), threads = runner.threads(), "running reports");

	let mut succeeded = true;
	for outcome in runner.run(&context, &reports) {
		match outcome.result {
			Ok(relation) if args.json => println!("{}", render::json(outcome.report, &relation)),
			Ok(relation) => println!("{}", render::table(outcome.report, &relation)),
			Err(err) => {
				eprintln!("{} failed:\n{err}", outcome.report);
				succeeded = false;
			}
		}
	}
	Ok(succeeded)
}
