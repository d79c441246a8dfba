// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Relation model: schemas, rows, immutable relations and the rental catalog.

pub use catalog::{Catalog, Table, TableDefinition};
pub use relation::Relation;
pub use row::Row;
pub use schema::Schema;
pub use sort::{SortDirection, SortKey};

mod catalog;
mod display;
mod relation;
mod row;
mod schema;
mod sort;

#[doc(hidden)]
pub mod __private {
	pub use rentlens_type::Value;
}
