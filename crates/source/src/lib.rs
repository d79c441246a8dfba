// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Relation loading: the [`Source`] abstraction, its in-memory and SQLite
//! implementations, and the [`Context`] reports load through.

pub use context::{ConnectionConfig, Context};
pub use memory::MemorySource;
pub use sqlite::{DbPath, SqliteConfig, SqliteError, SqliteSource};

mod context;
mod memory;
mod sqlite;

use rentlens_core::{Relation, Table, TableDefinition};
use rentlens_type::Result;

/// Somewhere relations can be materialized from.
///
/// A source returns the table's rows under the definition's column order and
/// kinds. It does not check primary keys; [`Context::load`] does.
pub trait Source: Send + Sync {
	/// Short description for logs and diagnostics.
	fn describe(&self) -> String;

	fn load(&self, table: Table, definition: &TableDefinition) -> Result<Relation>;
}
