// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rentlens_core::{SortKey, Table};
use rentlens_engine::{Pipeline, Predicate, Projection, Stage};
use rentlens_type::Result;

/// `(title)` of every film without a single inventory copy.
pub(super) fn pipeline() -> Result<Pipeline> {
	Pipeline::new(
		Table::Film,
		vec![
			Stage::left_join(Table::Inventory, [("film_id", "film_id")]),
			Stage::Filter(Predicate::is_null("inventory_id")),
			Stage::sort([SortKey::asc("title"), SortKey::asc("film_id")]),
			Stage::project([Projection::column("title")]),
		],
	)
}
