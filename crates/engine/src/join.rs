// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	collections::HashMap,
	fmt::{Display, Formatter},
};

use rentlens_core::{Relation, Row, Schema};
use rentlens_type::{
	Result, Value, ValueKind,
	error::diagnostic::schema::{join_key_arity, type_mismatch},
	return_error,
};
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
	Inner,
	LeftOuter,
}

impl Display for JoinKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			JoinKind::Inner => f.write_str("INNER"),
			JoinKind::LeftOuter => f.write_str("LEFT OUTER"),
		}
	}
}

/// Equi-joins `left` and `right` on the paired key columns.
///
/// A hash table is built over the smaller input and probed with the larger one.
/// Keys containing a null never match. Every match is emitted, so a left row
/// with k partners yields k rows; under [`JoinKind::LeftOuter`] a left row with
/// no partner yields one row whose right columns are null. Row order of the
/// result is unspecified.
#[instrument(name = "engine::join", level = "trace", skip_all, fields(
	left = left.name(),
	right = right.name(),
	kind = %kind,
	left_rows = left.len(),
	right_rows = right.len()
))]
pub fn join<L: AsRef<str>, R: AsRef<str>>(
	left: &Relation,
	right: &Relation,
	left_keys: &[L],
	right_keys: &[R],
	kind: JoinKind,
) -> Result<Relation> {
	if left_keys.len() != right_keys.len() {
		return_error!(join_key_arity(left_keys.len(), right_keys.len()));
	}

	let left_idx = left.column_indices(left_keys)?;
	let right_idx = right.column_indices(right_keys)?;

	for (&l, &r) in left_idx.iter().zip(&right_idx) {
		let (left_kind, right_kind) = (kind_at(left.schema(), l), kind_at(right.schema(), r));
		if left_kind != right_kind {
			let column = right.schema().name_at(r).unwrap_or_default();
			return_error!(type_mismatch(column, left_kind, right_kind));
		}
	}

	let layout = resolve_columns(left, right, &left_idx, &right_idx)?;
	let mut rows = Vec::new();

	if left.len() < right.len() {
		let table = build(left, &left_idx);
		let mut matched = vec![false; left.len()];

		for right_row in right.rows() {
			let Some(key) = key_of(right_row, &right_idx) else {
				continue;
			};
			if let Some(partners) = table.get(&key) {
				for &l in partners {
					rows.push(layout.combine(&left.rows()[l], Some(right_row)));
					matched[l] = true;
				}
			}
		}

		if kind == JoinKind::LeftOuter {
			for (l, _) in matched.iter().enumerate().filter(|(_, m)| !**m) {
				rows.push(layout.combine(&left.rows()[l], None));
			}
		}
	} else {
		let table = build(right, &right_idx);

		for left_row in left.rows() {
			let partners = key_of(left_row, &left_idx).and_then(|key| table.get(&key));
			match partners {
				Some(partners) => {
					for &r in partners {
						rows.push(layout.combine(left_row, Some(&right.rows()[r])));
					}
				}
				None if kind == JoinKind::LeftOuter => rows.push(layout.combine(left_row, None)),
				None => {}
			}
		}
	}

	debug!(rows = rows.len(), "join complete");
	Relation::new(left.name(), layout.schema, rows)
}

fn kind_at(schema: &Schema, idx: usize) -> ValueKind {
	schema.kind_at(idx).unwrap_or(ValueKind::Null)
}

/// Join key of a row, `None` when any component is null.
fn key_of(row: &Row, indices: &[usize]) -> Option<Vec<Value>> {
	let mut key = Vec::with_capacity(indices.len());
	for &idx in indices {
		let value = &row[idx];
		if value.is_null() {
			return None;
		}
		key.push(value.clone());
	}
	Some(key)
}

fn build(relation: &Relation, indices: &[usize]) -> HashMap<Vec<Value>, Vec<usize>> {
	let mut table: HashMap<Vec<Value>, Vec<usize>> = HashMap::with_capacity(relation.len());
	for (idx, row) in relation.rows().iter().enumerate() {
		if let Some(key) = key_of(row, indices) {
			table.entry(key).or_default().push(idx);
		}
	}
	table
}

struct JoinLayout {
	schema: Schema,
	right_columns: Vec<usize>,
}

impl JoinLayout {
	fn combine(&self, left: &Row, right: Option<&Row>) -> Row {
		match right {
			Some(right) => left.concat(self.right_columns.iter().map(|&idx| right[idx].clone())),
			None => left.concat(self.right_columns.iter().map(|_| Value::Null)),
		}
	}
}

/// Left columns keep their names. A right key column named like its left
/// partner is dropped; any other clashing right column is prefixed with the
/// right relation's name.
fn resolve_columns(
	left: &Relation,
	right: &Relation,
	left_keys: &[usize],
	right_keys: &[usize],
) -> Result<JoinLayout> {
	let mut columns: Vec<(String, ValueKind)> =
		left.schema().iter().map(|(name, kind)| (name.to_string(), kind)).collect();
	let mut right_columns = Vec::new();

	for (idx, (name, kind)) in right.schema().iter().enumerate() {
		let merged_key = right_keys
			.iter()
			.position(|&r| r == idx)
			.and_then(|pos| left.schema().name_at(left_keys[pos]))
			.is_some_and(|left_name| left_name == name);
		if merged_key {
			continue;
		}

		let taken = |candidate: &str| columns.iter().any(|(existing, _)| existing == candidate);
		let final_name = if !taken(name) {
			name.to_string()
		} else {
			let prefixed = format!("{}_{}", right.name(), name);
			let mut candidate = prefixed.clone();
			let mut counter = 2;
			while taken(&candidate) {
				candidate = format!("{}_{}", prefixed, counter);
				counter += 1;
			}
			candidate
		};

		columns.push((final_name, kind));
		right_columns.push(idx);
	}

	Ok(JoinLayout {
		schema: Schema::new(columns)?,
		right_columns,
	})
}
