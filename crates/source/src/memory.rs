// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

use rentlens_core::{Relation, Table, TableDefinition};
use rentlens_type::{
	Result,
	error::diagnostic::{
		load::table_not_found,
		schema::{column_not_found, type_mismatch},
	},
	return_error,
};

use crate::Source;

/// Relations registered up front, keyed by table.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
	tables: HashMap<Table, Relation>,
}

impl MemorySource {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_table(mut self, table: Table, relation: Relation) -> Self {
		self.insert(table, relation);
		self
	}

	pub fn insert(&mut self, table: Table, relation: Relation) {
		self.tables.insert(table, relation);
	}
}

impl Source for MemorySource {
	fn describe(&self) -> String {
		format!("memory ({} tables)", self.tables.len())
	}

	fn load(&self, table: Table, definition: &TableDefinition) -> Result<Relation> {
		let Some(stored) = self.tables.get(&table) else {
			return_error!(table_not_found(table.name()));
		};

		let mut indices = Vec::with_capacity(definition.schema.len());
		for (column, declared) in definition.schema.iter() {
			let Some(idx) = stored.schema().index_of(column) else {
				return_error!(column_not_found(column, table.name()));
			};
			if let Some(actual) = stored.schema().kind_at(idx)
				&& actual != declared
			{
				return_error!(type_mismatch(column, declared, actual));
			}
			indices.push(idx);
		}

		let rows = stored.rows().iter().map(|row| row.project(&indices)).collect();
		Relation::new(table.name(), definition.schema.clone(), rows)
	}
}

#[cfg(test)]
mod tests {
	use rentlens_core::{Catalog, Schema, row};
	use rentlens_type::ValueKind::*;

	use super::*;

	#[test]
	fn test_load_reorders_to_declared_columns() {
		let stored = Relation::new(
			"anything",
			Schema::new([("name", Text), ("extra", Int), ("category_id", Int)]).unwrap(),
			vec![row!["Action", 0, 1]],
		)
		.unwrap();
		let source = MemorySource::new().with_table(Table::Category, stored);
		let catalog = Catalog::default();

		let loaded = source.load(Table::Category, catalog.definition(Table::Category)).unwrap();
		assert_eq!(loaded.name(), "category");
		assert_eq!(loaded.schema().names().collect::<Vec<_>>(), vec!["category_id", "name"]);
		assert_eq!(loaded.rows(), &[row![1, "Action"]]);
	}

	#[test]
	fn test_missing_table() {
		let catalog = Catalog::default();
		let err = MemorySource::new().load(Table::Film, catalog.definition(Table::Film)).unwrap_err();
		assert_eq!(err.code(), "LOAD_002");
	}

	#[test]
	fn test_missing_column() {
		let stored = Relation::new("category", Schema::new([("category_id", Int)]).unwrap(), vec![]).unwrap();
		let source = MemorySource::new().with_table(Table::Category, stored);
		let err = source.load(Table::Category, Catalog::default().definition(Table::Category)).unwrap_err();
		assert_eq!(err.code(), "SCHEMA_001");
	}

	#[test]
	fn test_kind_disagrees_with_catalog() {
		let stored = Relation::new(
			"category",
			Schema::new([("category_id", Text), ("name", Text)]).unwrap(),
			vec![row!["1", "Action"]],
		)
		.unwrap();
		let source = MemorySource::new().with_table(Table::Category, stored);
		let err = source.load(Table::Category, Catalog::default().definition(Table::Category)).unwrap_err();
		assert_eq!(err.code(), "SCHEMA_003");
	}
}
