// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;
use rentlens_type::{Result, ValueKind, error::diagnostic::schema, return_error};

/// Ordered, uniquely named columns with their kinds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
	columns: IndexMap<String, ValueKind>,
}

impl Schema {
	pub fn new<N: Into<String>>(columns: impl IntoIterator<Item = (N, ValueKind)>) -> Result<Self> {
		let mut result = IndexMap::new();
		for (name, kind) in columns {
			let name = name.into();
			if result.contains_key(&name) {
				return_error!(schema::duplicate_column(&name));
			}
			result.insert(name, kind);
		}
		Ok(Self {
			columns: result,
		})
	}

	pub fn empty() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.columns.len()
	}

	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}

	pub fn contains(&self, name: &str) -> bool {
		self.columns.contains_key(name)
	}

	pub fn index_of(&self, name: &str) -> Option<usize> {
		self.columns.get_index_of(name)
	}

	pub fn kind_of(&self, name: &str) -> Option<ValueKind> {
		self.columns.get(name).copied()
	}

	pub fn kind_at(&self, index: usize) -> Option<ValueKind> {
		self.columns.get_index(index).map(|(_, kind)| *kind)
	}

	pub fn name_at(&self, index: usize) -> Option<&str> {
		self.columns.get_index(index).map(|(name, _)| name.as_str())
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.columns.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, ValueKind)> {
		self.columns.iter().map(|(name, kind)| (name.as_str(), *kind))
	}

	/// Returns a copy of this schema with one column's kind replaced.
	pub fn with_kind(&self, column: &str, kind: ValueKind) -> Result<Self> {
		let mut columns = self.columns.clone();
		match columns.get_mut(column) {
			Some(existing) => *existing = kind,
			None => return_error!(schema::column_not_found(column, "schema")),
		}
		Ok(Self {
			columns,
		})
	}
}
