// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rentlens_core::{SortKey, Table};
use rentlens_engine::{Aggregation, Pipeline, Stage};
use rentlens_type::Result;

/// `(name, total_amount)` for the five categories with the largest payment
/// total, following category → film → inventory → rental → payment.
pub(super) fn pipeline() -> Result<Pipeline> {
	Pipeline::new(
		Table::Category,
		vec![
			Stage::inner_join(Table::FilmCategory, [("category_id", "category_id")]),
			Stage::inner_join(Table::Film, [("film_id", "film_id")]),
			Stage::inner_join(Table::Inventory, [("film_id", "film_id")]),
			Stage::inner_join(Table::Rental, [("inventory_id", "inventory_id")]),
			Stage::inner_join(Table::Payment, [("rental_id", "rental_id")]),
			Stage::aggregate(["name"], [Aggregation::sum("amount", "total_amount")]),
			Stage::sort([SortKey::desc("total_amount"), SortKey::asc("name")]),
			Stage::Limit(5),
		],
	)
}
