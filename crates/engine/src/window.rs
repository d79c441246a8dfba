// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use rentlens_core::{Relation, Row, Schema, SortKey};
use rentlens_type::{Result, Value, ValueKind};
use tracing::{debug, instrument};

use crate::sort::compare;

/// `row_number() OVER (PARTITION BY .. ORDER BY ..) AS alias`.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSpec {
	pub partition_by: Vec<String>,
	pub order_by: SortKey,
	pub alias: String,
}

impl WindowSpec {
	pub fn new<S: Into<String>>(
		partition_by: impl IntoIterator<Item = S>,
		order_by: SortKey,
		alias: impl Into<String>,
	) -> Self {
		Self {
			partition_by: partition_by.into_iter().map(Into::into).collect(),
			order_by,
			alias: alias.into(),
		}
	}
}

impl Display for WindowSpec {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"row_number() OVER (PARTITION BY {} ORDER BY {}) AS {}",
			self.partition_by.join(", "),
			self.order_by,
			self.alias
		)
	}
}

/// Appends a 1-based row number within each partition, in `order_by` order.
///
/// Ties keep their input order. The output lists partitions in order of first
/// appearance, each partition's rows in rank order.
#[instrument(name = "engine::window", level = "trace", skip_all, fields(
	relation = relation.name(),
	rows = relation.len(),
	alias = %spec.alias
))]
pub fn row_number(relation: &Relation, spec: &WindowSpec) -> Result<Relation> {
	let partition_idx = relation.column_indices(spec.partition_by.as_slice())?;
	let order = [(relation.column_index(&spec.order_by.column)?, spec.order_by.direction)];

	let schema = Schema::new(relation.schema().iter().chain([(spec.alias.as_str(), ValueKind::Int)]))?;

	let mut partitions: IndexMap<Row, Vec<&Row>> = IndexMap::new();
	for row in relation.rows() {
		partitions.entry(row.project(&partition_idx)).or_default().push(row);
	}

	let mut rows = Vec::with_capacity(relation.len());
	for members in partitions.values_mut() {
		members.sort_by(|l, r| compare(l, r, &order));
		for (rank, row) in members.iter().enumerate() {
			rows.push(row.concat([Value::Int(rank as i64 + 1)]));
		}
	}

	debug!(partitions = partitions.len(), "window complete");
	Relation::new(relation.name(), schema, rows)
}
