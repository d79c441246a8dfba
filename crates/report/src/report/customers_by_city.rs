// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rentlens_core::{Catalog, SortKey, Table};
use rentlens_engine::{Aggregation, Pipeline, Predicate, Stage};
use rentlens_type::{Result, Value, ValueKind};

/// `(city, active_customers, inactive_customers)`, most inactive first.
pub(super) fn pipeline(catalog: &Catalog) -> Result<Pipeline> {
	let (active, inactive) = activity(catalog);
	Pipeline::new(
		Table::Customer,
		vec![
			Stage::inner_join(Table::Address, [("address_id", "address_id")]),
			Stage::inner_join(Table::City, [("city_id", "city_id")]),
			Stage::aggregate(
				["city"],
				[
					Aggregation::count_if(active, "active_customers"),
					Aggregation::count_if(inactive, "inactive_customers"),
				],
			),
			Stage::sort([SortKey::desc("inactive_customers"), SortKey::asc("city")]),
		],
	)
}

/// Predicates for active and inactive customers, matching how the catalog
/// declares `customer.active`. A null flag satisfies neither.
pub(super) fn activity(catalog: &Catalog) -> (Predicate, Predicate) {
	let kind = catalog.definition(Table::Customer).schema.kind_of("active");
	let (yes, no) = match kind {
		Some(ValueKind::Bool) => (Value::Bool(true), Value::Bool(false)),
		_ => (Value::Int(1), Value::Int(0)),
	};
	(Predicate::eq("active", yes), Predicate::eq("active", no))
}
