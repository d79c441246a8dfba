// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::path::PathBuf;

use clap::Parser;
use rentlens_report::Report;
use rentlens_type::Result;

#[derive(Parser, Debug)]
#[command(name = "rentlens")]
#[command(about = "Analytics reports over a rental-store database")]
#[command(version)]
pub struct Args {
	/// SQLite database holding the rental schema
	#[arg(long, env = "RENTLENS_DB")]
	pub db: Option<PathBuf>,

	/// Print each report as a JSON document instead of a table
	#[arg(long)]
	pub json: bool,

	/// Worker threads for running reports (default: number of CPUs)
	#[arg(long)]
	pub threads: Option<usize>,

	/// customer.active is stored as a boolean rather than 0/1
	#[arg(long)]
	pub active_bool: bool,

	/// Print the stages of each report without running it
	#[arg(long)]
	pub explain: bool,

	/// Reports to run, by name or number (default: all)
	#[arg(value_name = "REPORT")]
	pub reports: Vec<String>,
}

impl Args {
	pub fn reports(&self) -> Result<Vec<Report>> {
		if self.reports.is_empty() {
			return Ok(Report::all().to_vec());
		}
		self.reports.iter().map(|r| r.parse()).collect()
	}
}
