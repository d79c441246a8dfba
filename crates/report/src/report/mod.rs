// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod customers_by_city;
mod films_not_in_inventory;
mod films_per_category;
mod rental_duration_by_city;
mod top_actors;
mod top_children_actors;
mod top_revenue_categories;

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use rentlens_core::Catalog;
use rentlens_engine::Pipeline;
use rentlens_type::{Error, Result, error::diagnostic::pipeline::unknown_report, return_error};

/// The built-in reports, numbered as they are usually presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Report {
	FilmsPerCategory,
	TopActors,
	TopRevenueCategories,
	FilmsNotInInventory,
	TopChildrenActors,
	CustomersByCity,
	RentalDurationByCity,
}

impl Report {
	pub const ALL: [Report; 7] = [
		Report::FilmsPerCategory,
		Report::TopActors,
		Report::TopRevenueCategories,
		Report::FilmsNotInInventory,
		Report::TopChildrenActors,
		Report::CustomersByCity,
		Report::RentalDurationByCity,
	];

	pub fn all() -> &'static [Report] {
		&Self::ALL
	}

	pub fn name(&self) -> &'static str {
		match self {
			Report::FilmsPerCategory => "films-per-category",
			Report::TopActors => "top-actors",
			Report::TopRevenueCategories => "top-revenue-categories",
			Report::FilmsNotInInventory => "films-not-in-inventory",
			Report::TopChildrenActors => "top-children-actors",
			Report::CustomersByCity => "customers-by-city",
			Report::RentalDurationByCity => "rental-duration-by-city",
		}
	}

	pub fn title(&self) -> &'static str {
		match self {
			Report::FilmsPerCategory => "Number of films per category",
			Report::TopActors => "Top 10 actors by rentals of their films",
			Report::TopRevenueCategories => "Top 5 categories by total payment amount",
			Report::FilmsNotInInventory => "Films not in inventory",
			Report::TopChildrenActors => "Top 3 actors in Children films",
			Report::CustomersByCity => "Active and inactive customers per city",
			Report::RentalDurationByCity => "Rental duration per category in selected cities",
		}
	}

	/// 1-based position in [`Report::ALL`].
	pub fn number(&self) -> usize {
		Self::ALL.iter().position(|r| r == self).map_or(0, |idx| idx + 1)
	}

	/// The stage list computing this report against `catalog`'s table definitions.
	pub fn pipeline(&self, catalog: &Catalog) -> Result<Pipeline> {
		match self {
			Report::FilmsPerCategory => films_per_category::pipeline(),
			Report::TopActors => top_actors::pipeline(),
			Report::TopRevenueCategories => top_revenue_categories::pipeline(),
			Report::FilmsNotInInventory => films_not_in_inventory::pipeline(),
			Report::TopChildrenActors => top_children_actors::pipeline(),
			Report::CustomersByCity => customers_by_city::pipeline(catalog),
			Report::RentalDurationByCity => rental_duration_by_city::pipeline(),
		}
	}
}

impl Display for Report {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Report {
	type Err = Error;

	/// Accepts the kebab-case name or the report number.
	fn from_str(s: &str) -> Result<Self> {
		let s = s.trim();
		if let Some(report) = Self::ALL.iter().find(|r| r.name().eq_ignore_ascii_case(s)) {
			return Ok(*report);
		}
		if let Some(report) = s.parse::<usize>().ok().and_then(|n| n.checked_sub(1)).and_then(|i| Self::ALL.get(i)) {
			return Ok(*report);
		}
		let known: Vec<&str> = Self::ALL.iter().map(Report::name).collect();
		return_error!(unknown_report(s, &known))
	}
}
