// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::HashSet, sync::Arc};

use rentlens_type::{
	Result, Value,
	error::diagnostic::schema::{column_not_found, duplicate_primary_key, row_arity_mismatch, type_mismatch},
	return_error,
};
use serde::{Serialize, Serializer, ser::SerializeMap, ser::SerializeSeq};

use crate::{Row, Schema};

/// An immutable, fully materialized set of rows sharing one schema.
///
/// Cloning is cheap: schema and rows sit behind `Arc`s and are never mutated.
/// Every row is checked against the schema on construction, so downstream
/// stages can index rows positionally without re-validating.
#[derive(Debug, Clone)]
pub struct Relation {
	name: String,
	schema: Arc<Schema>,
	rows: Arc<[Row]>,
}

impl Relation {
	pub fn new(name: impl Into<String>, schema: Schema, rows: Vec<Row>) -> Result<Self> {
		let name = name.into();
		for row in &rows {
			if row.len() != schema.len() {
				return_error!(row_arity_mismatch(&name, schema.len(), row.len()));
			}
			for (value, (column, kind)) in row.iter().zip(schema.iter()) {
				if !kind.accepts(value) {
					return_error!(type_mismatch(column, kind, value.kind()));
				}
			}
		}
		Ok(Self {
			name,
			schema: Arc::new(schema),
			rows: rows.into(),
		})
	}

	pub fn empty(name: impl Into<String>, schema: Schema) -> Self {
		Self {
			name: name.into(),
			schema: Arc::new(schema),
			rows: Arc::from(Vec::new()),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Same schema and rows under another name.
	pub fn renamed(&self, name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			schema: self.schema.clone(),
			rows: self.rows.clone(),
		}
	}

	/// The first `n` rows, or all of them when there are fewer.
	pub fn take(&self, n: usize) -> Self {
		if n >= self.rows.len() {
			return self.clone();
		}
		Self {
			name: self.name.clone(),
			schema: self.schema.clone(),
			rows: self.rows[..n].into(),
		}
	}

	pub fn schema(&self) -> &Schema {
		&self.schema
	}

	pub fn rows(&self) -> &[Row] {
		&self.rows
	}

	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	pub fn column_index(&self, column: &str) -> Result<usize> {
		match self.schema.index_of(column) {
			Some(idx) => Ok(idx),
			None => return_error!(column_not_found(column, &self.name)),
		}
	}

	pub fn column_indices<S: AsRef<str>>(&self, columns: &[S]) -> Result<Vec<usize>> {
		columns.iter().map(|c| self.column_index(c.as_ref())).collect()
	}

	/// All values of one column, in row order.
	pub fn column(&self, column: &str) -> Result<Vec<&Value>> {
		let idx = self.column_index(column)?;
		Ok(self.rows.iter().map(|row| &row[idx]).collect())
	}

	/// Fails when two rows share the same values on `key`.
	pub fn check_primary_key<S: AsRef<str>>(&self, key: &[S]) -> Result<()> {
		let indices = self.column_indices(key)?;
		let mut seen = HashSet::with_capacity(self.rows.len());
		for row in self.rows.iter() {
			let values = row.project(&indices);
			if !seen.insert(values.clone()) {
				let rendered = values.iter().map(Value::to_string).collect::<Vec<_>>().join(", ");
				return_error!(duplicate_primary_key(&self.name, format!("({rendered})")));
			}
		}
		Ok(())
	}
}

impl Serialize for Relation {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		struct Record<'a>(&'a Schema, &'a Row);

		impl Serialize for Record<'_> {
			fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
				let mut map = serializer.serialize_map(Some(self.0.len()))?;
				for (name, value) in self.0.names().zip(self.1.iter()) {
					map.serialize_entry(name, value)?;
				}
				map.end()
			}
		}

		let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
		for row in self.rows.iter() {
			seq.serialize_element(&Record(&self.schema, row))?;
		}
		seq.end()
	}
}
