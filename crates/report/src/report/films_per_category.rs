// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rentlens_core::{SortKey, Table};
use rentlens_engine::{Aggregation, Pipeline, Stage};
use rentlens_type::Result;

/// `(name, film_count)`, most films first.
pub(super) fn pipeline() -> Result<Pipeline> {
	Pipeline::new(
		Table::FilmCategory,
		vec![
			Stage::inner_join(Table::Category, [("category_id", "category_id")]),
			Stage::inner_join(Table::Film, [("film_id", "film_id")]),
			Stage::aggregate(["name"], [Aggregation::count("film_count")]),
			Stage::sort([SortKey::desc("film_count"), SortKey::asc("name")]),
		],
	)
}
