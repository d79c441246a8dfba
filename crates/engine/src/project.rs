// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use rentlens_core::{Relation, Schema};
use rentlens_type::{Result, ValueKind};
use tracing::{debug, instrument};

/// A column to keep, optionally under a new name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
	pub column: String,
	pub alias: Option<String>,
}

impl Projection {
	pub fn column(column: impl Into<String>) -> Self {
		Self {
			column: column.into(),
			alias: None,
		}
	}

	pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
		self.alias = Some(alias.into());
		self
	}

	pub fn output_name(&self) -> &str {
		self.alias.as_deref().unwrap_or(&self.column)
	}
}

impl Display for Projection {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match &self.alias {
			Some(alias) => write!(f, "{} AS {}", self.column, alias),
			None => f.write_str(&self.column),
		}
	}
}

/// Keeps the listed columns, in the listed order.
#[instrument(name = "engine::project", level = "trace", skip_all, fields(
	relation = relation.name(),
	columns = projections.len()
))]
pub fn project(relation: &Relation, projections: &[Projection]) -> Result<Relation> {
	let mut indices = Vec::with_capacity(projections.len());
	let mut columns: Vec<(&str, ValueKind)> = Vec::with_capacity(projections.len());
	for projection in projections {
		let idx = relation.column_index(&projection.column)?;
		indices.push(idx);
		columns.push((projection.output_name(), relation.schema().kind_at(idx).unwrap_or(ValueKind::Null)));
	}
	let schema = Schema::new(columns)?;

	let rows = relation.rows().iter().map(|row| row.project(&indices)).collect();
	debug!(columns = indices.len(), "project complete");
	Relation::new(relation.name(), schema, rows)
}
