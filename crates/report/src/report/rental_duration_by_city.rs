// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rentlens_core::{SortKey, Table};
use rentlens_engine::{Aggregation, Pipeline, Predicate, Projection, Stage, WindowSpec};
use rentlens_type::Result;

/// `(city, category_id, total_rental_duration, rank)` for cities whose name
/// starts with "a" (any case) or contains "-". Categories are ranked within
/// each city by total rental duration.
pub(super) fn pipeline() -> Result<Pipeline> {
	Pipeline::new(
		Table::FilmCategory,
		vec![
			Stage::inner_join(Table::Film, [("film_id", "film_id")]),
			Stage::inner_join(Table::Inventory, [("film_id", "film_id")]),
			Stage::inner_join(Table::Rental, [("inventory_id", "inventory_id")]),
			Stage::inner_join(Table::Customer, [("customer_id", "customer_id")]),
			Stage::inner_join(Table::Address, [("address_id", "address_id")]),
			Stage::aggregate(
				["city_id", "category_id"],
				[Aggregation::sum("rental_duration", "total_rental_duration")],
			),
			Stage::inner_join(Table::City, [("city_id", "city_id")]),
			Stage::Filter(Predicate::ilike("city", "a%").or(Predicate::like("city", "%-%"))),
			Stage::Window(WindowSpec::new(["city_id"], SortKey::desc("total_rental_duration"), "rank")),
			Stage::sort([SortKey::asc("city"), SortKey::asc("city_id"), SortKey::asc("rank")]),
			Stage::project([
				Projection::column("city"),
				Projection::column("category_id"),
				Projection::column("total_rental_duration"),
				Projection::column("rank"),
			]),
		],
	)
}
