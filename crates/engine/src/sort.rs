// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use rentlens_core::{Relation, Row, SortDirection, SortKey};
use rentlens_type::Result;
use tracing::{debug, instrument};

/// Orders rows by `keys`, earlier keys taking precedence.
///
/// The sort is stable, so rows tied on every key keep their input order. Nulls
/// compare lowest: first when ascending, last when descending.
#[instrument(name = "engine::sort", level = "trace", skip_all, fields(
	relation = relation.name(),
	rows = relation.len(),
	keys = keys.len()
))]
pub fn sort(relation: &Relation, keys: &[SortKey]) -> Result<Relation> {
	let resolved: Vec<(usize, SortDirection)> = keys
		.iter()
		.map(|key| Ok((relation.column_index(&key.column)?, key.direction)))
		.collect::<Result<_>>()?;

	let mut rows = relation.rows().to_vec();
	rows.sort_by(|l, r| compare(l, r, &resolved));

	debug!(rows = rows.len(), "sort complete");
	Relation::new(relation.name(), relation.schema().clone(), rows)
}

pub(crate) fn compare(l: &Row, r: &Row, keys: &[(usize, SortDirection)]) -> Ordering {
	for &(idx, direction) in keys {
		let ord = direction.apply(l[idx].sort_cmp(&r[idx]));
		if ord != Ordering::Equal {
			return ord;
		}
	}
	Ordering::Equal
}

/// Keeps the first `n` rows.
#[instrument(name = "engine::limit", level = "trace", skip_all, fields(relation = relation.name(), n = n))]
pub fn limit(relation: &Relation, n: usize) -> Relation {
	let result = relation.take(n);
	debug!(rows = result.len(), "limit complete");
	result
}

#[cfg(test)]
mod tests {
	use rentlens_core::{Schema, row};
	use rentlens_type::{Value, ValueKind::*};

	use super::*;

	fn categories() -> Relation {
		let schema = Schema::new([("name", Text), ("film_count", Int)]).unwrap();
		Relation::new(
			"category",
			schema,
			vec![
				row!["Action", 2],
				row!["Children", 3],
				row!["Comedy", None::<i64>],
				row!["Animation", 3],
				row!["Drama", 1],
			],
		)
		.unwrap()
	}

	fn names(relation: &Relation) -> Vec<&str> {
		relation.column("name").unwrap().into_iter().filter_map(Value::as_text).collect()
	}

	#[test]
	fn test_sort_desc_puts_nulls_last() {
		let sorted = sort(&categories(), &[SortKey::desc("film_count")]).unwrap();
		assert_eq!(names(&sorted), vec!["Children", "Animation", "Action", "Drama", "Comedy"]);
	}

	#[test]
	fn test_sort_asc_puts_nulls_first() {
		let sorted = sort(&categories(), &[SortKey::asc("film_count")]).unwrap();
		assert_eq!(names(&sorted), vec!["Comedy", "Drama", "Action", "Children", "Animation"]);
	}

	#[test]
	fn test_secondary_key_breaks_ties() {
		let sorted = sort(&categories(), &[SortKey::desc("film_count"), SortKey::asc("name")]).unwrap();
		assert_eq!(names(&sorted), vec!["Animation", "Children", "Action", "Drama", "Comedy"]);
	}

	#[test]
	fn test_sort_is_ordered() {
		let keys = [SortKey::desc("film_count")];
		let sorted = sort(&categories(), &keys).unwrap();
		let idx = [(1, SortDirection::Desc)];
		for pair in sorted.rows().windows(2) {
			assert_ne!(compare(&pair[0], &pair[1], &idx), Ordering::Greater);
		}
	}

	#[test]
	fn test_sort_unknown_column() {
		let err = sort(&categories(), &[SortKey::asc("rating")]).unwrap_err();
		assert_eq!(err.code(), "SCHEMA_001");
	}

	#[test]
	fn test_limit_is_prefix() {
		let sorted = sort(&categories(), &[SortKey::desc("film_count")]).unwrap();
		for n in 0..7 {
			let limited = limit(&sorted, n);
			assert_eq!(limited.len(), n.min(sorted.len()));
			assert_eq!(limited.rows(), &sorted.rows()[..limited.len()]);
		}
	}
}
