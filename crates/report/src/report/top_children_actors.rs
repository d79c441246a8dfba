// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rentlens_core::{SortKey, Table};
use rentlens_engine::{Aggregation, Pipeline, Predicate, Projection, Stage};
use rentlens_type::Result;

const CATEGORY: &str = "Children";

/// `(actor_first_name, actor_last_name, film_count)` for the three actors
/// appearing in the most Children films.
pub(super) fn pipeline() -> Result<Pipeline> {
	Pipeline::new(
		Table::Category,
		vec![
			Stage::Filter(Predicate::eq("name", CATEGORY)),
			Stage::inner_join(Table::FilmCategory, [("category_id", "category_id")]),
			Stage::inner_join(Table::Film, [("film_id", "film_id")]),
			Stage::inner_join(Table::FilmActor, [("film_id", "film_id")]),
			Stage::inner_join(Table::Actor, [("actor_id", "actor_id")]),
			Stage::aggregate(["first_name", "last_name"], [Aggregation::count("film_count")]),
			Stage::sort([SortKey::desc("film_count"), SortKey::asc("last_name"), SortKey::asc("first_name")]),
			Stage::Limit(3),
			Stage::project([
				Projection::column("first_name").with_alias("actor_first_name"),
				Projection::column("last_name").with_alias("actor_last_name"),
				Projection::column("film_count"),
			]),
		],
	)
}
