// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rentlens_core::{SortKey, Table};
use rentlens_engine::{Aggregation, Pipeline, Stage};
use rentlens_type::Result;

/// `(first_name, last_name, rental_count)` for the ten actors whose films
/// were rented most. Actors sharing a full name are counted together.
pub(super) fn pipeline() -> Result<Pipeline> {
	Pipeline::new(
		Table::FilmActor,
		vec![
			Stage::inner_join(Table::Film, [("film_id", "film_id")]),
			Stage::inner_join(Table::Inventory, [("film_id", "film_id")]),
			Stage::inner_join(Table::Rental, [("inventory_id", "inventory_id")]),
			Stage::inner_join(Table::Actor, [("actor_id", "actor_id")]),
			Stage::aggregate(["first_name", "last_name"], [Aggregation::count("rental_count")]),
			Stage::sort([SortKey::desc("rental_count"), SortKey::asc("last_name"), SortKey::asc("first_name")]),
			Stage::Limit(10),
		],
	)
}
