// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The built-in rental reports and the machinery that runs them.

pub use driver::ReportDriver;
pub use report::Report;
pub use runner::{ReportOutcome, ReportRunner};

mod driver;
mod report;
mod runner;
