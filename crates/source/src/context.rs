// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rentlens_core::{Catalog, Relation, Table};
use rentlens_type::Result;
use tracing::{debug, info, instrument};

use crate::{MemorySource, Source, SqliteConfig, SqliteSource};

/// Where relations come from. Owned by the caller and opaque to the engine.
#[derive(Debug, Clone)]
pub enum ConnectionConfig {
	Memory(MemorySource),
	Sqlite(SqliteConfig),
}

/// An open source together with the catalog describing its tables.
///
/// Reports share one context; it is dropped once every report has run.
pub struct Context {
	source: Box<dyn Source>,
	catalog: Catalog,
}

impl Context {
	#[instrument(name = "source::connect", level = "debug", skip_all)]
	pub fn connect(config: ConnectionConfig, catalog: Catalog) -> Result<Self> {
		let source: Box<dyn Source> = match config {
			ConnectionConfig::Memory(source) => Box::new(source),
			ConnectionConfig::Sqlite(config) => Box::new(SqliteSource::open(config)?),
		};
		info!(source = %source.describe(), "connected");
		Ok(Self {
			source,
			catalog,
		})
	}

	pub fn new(source: impl Source + 'static, catalog: Catalog) -> Self {
		Self {
			source: Box::new(source),
			catalog,
		}
	}

	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	/// Materializes `table` and checks its declared primary key.
	#[instrument(name = "source::load", level = "debug", skip(self), fields(rows = tracing::field::Empty))]
	pub fn load(&self, table: Table) -> Result<Relation> {
		let definition = self.catalog.definition(table);
		let relation = self.source.load(table, definition)?;
		relation.check_primary_key(definition.primary_key.as_slice())?;

		tracing::Span::current().record("rows", relation.len());
		debug!(table = %table, rows = relation.len(), "table loaded");
		Ok(relation)
	}
}

#[cfg(test)]
mod tests {
	use rentlens_core::{Schema, row};
	use rentlens_type::ValueKind::*;

	use super::*;

	fn categories(rows: Vec<rentlens_core::Row>) -> MemorySource {
		let relation =
			Relation::new("category", Schema::new([("category_id", Int), ("name", Text)]).unwrap(), rows).unwrap();
		MemorySource::new().with_table(Table::Category, relation)
	}

	#[test]
	fn test_load_through_memory() {
		let source = categories(vec![row![1, "Children"], row![2, "Action"]]);
		let context = Context::connect(ConnectionConfig::Memory(source), Catalog::default()).unwrap();
		assert_eq!(context.load(Table::Category).unwrap().len(), 2);
	}

	#[test]
	fn test_duplicate_primary_key() {
		let source = categories(vec![row![1, "Children"], row![1, "Action"]]);
		let context = Context::new(source, Catalog::default());
		let err = context.load(Table::Category).unwrap_err();
		assert_eq!(err.code(), "SCHEMA_005");
	}

	#[test]
	fn test_connect_sqlite_in_memory() {
		let context = Context::connect(ConnectionConfig::Sqlite(SqliteConfig::in_memory()), Catalog::default()).unwrap();
		let err = context.load(Table::Actor).unwrap_err();
		assert_eq!(err.code(), "LOAD_002");
	}
}
