// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::path::PathBuf;

use parking_lot::Mutex;
use rentlens_core::{Relation, Row, Table, TableDefinition};
use rentlens_type::{
	Decimal, Diagnostic, IntoDiagnostic, Result, Value, ValueKind,
	error,
	error::diagnostic::{
		load::{invalid_cell, source_unreachable, table_not_found},
		schema::column_not_found,
	},
	return_error,
};
use rusqlite::{Connection, OpenFlags, types::ValueRef};
use tracing::{debug, instrument};

use crate::Source;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbPath {
	File(PathBuf),
	Memory,
}

impl std::fmt::Display for DbPath {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			DbPath::File(path) => write!(f, "{}", path.display()),
			DbPath::Memory => f.write_str(":memory:"),
		}
	}
}

#[derive(Debug, Clone)]
pub struct SqliteConfig {
	pub path: DbPath,
	pub flags: OpenFlags,
}

impl SqliteConfig {
	/// Opens an existing database file read-write.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: DbPath::File(path.into()),
			flags: OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX | OpenFlags::SQLITE_OPEN_URI,
		}
	}

	pub fn in_memory() -> Self {
		Self {
			path: DbPath::Memory,
			flags: OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
		}
	}

	pub fn read_only(mut self) -> Self {
		self.flags.remove(OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE);
		self.flags.insert(OpenFlags::SQLITE_OPEN_READ_ONLY);
		self
	}
}

#[derive(Debug, thiserror::Error)]
pub enum SqliteError {
	#[error("cannot open {path}")]
	Open {
		path: String,
		#[source]
		source: rusqlite::Error,
	},

	#[error("reading {table} failed")]
	Query {
		table: String,
		#[source]
		source: rusqlite::Error,
	},
}

impl IntoDiagnostic for SqliteError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			SqliteError::Open {
				path,
				source,
			} => source_unreachable(format!("sqlite {path}"), source.to_string()),
			SqliteError::Query {
				table,
				source,
			} => source_unreachable("sqlite", format!("reading {table}: {source}")),
		}
	}
}

impl From<SqliteError> for rentlens_type::Error {
	fn from(err: SqliteError) -> Self {
		error!(err.into_diagnostic())
	}
}

/// Loads relations from one SQLite connection. Concurrent loads take turns
/// on the connection.
pub struct SqliteSource {
	path: DbPath,
	conn: Mutex<Connection>,
}

impl SqliteSource {
	#[instrument(name = "source::sqlite::open", level = "debug", skip_all, fields(path = %config.path))]
	pub fn open(config: SqliteConfig) -> Result<Self> {
		let conn = match &config.path {
			DbPath::File(path) => Connection::open_with_flags(path, config.flags),
			DbPath::Memory => Connection::open_in_memory_with_flags(config.flags),
		}
		.map_err(|source| SqliteError::Open {
			path: config.path.to_string(),
			source,
		})?;

		Ok(Self {
			path: config.path,
			conn: Mutex::new(conn),
		})
	}

	pub fn in_memory() -> Result<Self> {
		Self::open(SqliteConfig::in_memory())
	}

	/// Runs statements without returning rows, e.g. to create and seed tables.
	pub fn execute_batch(&self, sql: &str) -> Result<()> {
		self.conn.lock().execute_batch(sql).map_err(|source| {
			SqliteError::Query {
				table: "batch".to_string(),
				source,
			}
			.into()
		})
	}

	fn query_error(table: Table) -> impl FnOnce(rusqlite::Error) -> SqliteError {
		move |source| SqliteError::Query {
			table: table.name().to_string(),
			source,
		}
	}
}

impl Source for SqliteSource {
	fn describe(&self) -> String {
		format!("sqlite {}", self.path)
	}

	#[instrument(name = "source::sqlite::load", level = "trace", skip_all, fields(table = %table))]
	fn load(&self, table: Table, definition: &TableDefinition) -> Result<Relation> {
		let conn = self.conn.lock();

		let exists: bool = conn
			.query_row(
				"SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type IN ('table', 'view') AND name = ?1)",
				[table.name()],
				|row| row.get(0),
			)
			.map_err(Self::query_error(table))?;
		if !exists {
			return_error!(table_not_found(table.name()));
		}

		let stored: Vec<String> = {
			let mut stmt = conn
				.prepare(&format!("SELECT name FROM pragma_table_info('{}')", table.name()))
				.map_err(Self::query_error(table))?;
			stmt.query_map([], |row| row.get(0))
				.map_err(Self::query_error(table))?
				.collect::<rusqlite::Result<_>>()
				.map_err(Self::query_error(table))?
		};
		for column in definition.schema.names() {
			if !stored.iter().any(|s| s.eq_ignore_ascii_case(column)) {
				return_error!(column_not_found(column, table.name()));
			}
		}

		let columns = definition.schema.names().map(|c| format!("\"{c}\"")).collect::<Vec<_>>().join(", ");
		let mut stmt = conn
			.prepare(&format!("SELECT {columns} FROM \"{}\"", table.name()))
			.map_err(Self::query_error(table))?;
		let mut cursor = stmt.query([]).map_err(Self::query_error(table))?;

		let kinds: Vec<(&str, ValueKind)> = definition.schema.iter().collect();
		let mut rows = Vec::new();
		while let Some(row) = cursor.next().map_err(Self::query_error(table))? {
			let mut values = Vec::with_capacity(kinds.len());
			for (idx, &(column, kind)) in kinds.iter().enumerate() {
				let cell = row.get_ref(idx).map_err(Self::query_error(table))?;
				values.push(convert(table, column, kind, cell)?);
			}
			rows.push(Row::new(values));
		}

		debug!(rows = rows.len(), "sqlite load complete");
		Relation::new(table.name(), definition.schema.clone(), rows)
	}
}

/// Converts a stored cell into the column's declared kind.
fn convert(table: Table, column: &str, kind: ValueKind, cell: ValueRef<'_>) -> Result<Value> {
	let invalid = |reason: String| error!(invalid_cell(table.name(), column, kind, reason));

	let value = match (kind, cell) {
		(_, ValueRef::Null) => Value::Null,
		(ValueKind::Int, ValueRef::Integer(v)) => Value::Int(v),
		(ValueKind::Int, ValueRef::Text(text)) => {
			let text = utf8(text).map_err(&invalid)?;
			text.trim().parse::<i64>().map(Value::Int).map_err(|err| invalid(format!("{text:?}: {err}")))?
		}
		(ValueKind::Bool, ValueRef::Integer(0)) => Value::Bool(false),
		(ValueKind::Bool, ValueRef::Integer(1)) => Value::Bool(true),
		(ValueKind::Bool, ValueRef::Text(text)) => match utf8(text).map_err(&invalid)? {
			t if t.eq_ignore_ascii_case("true") => Value::Bool(true),
			t if t.eq_ignore_ascii_case("false") => Value::Bool(false),
			t => return Err(invalid(format!("{t:?} is not a boolean"))),
		},
		(ValueKind::Decimal, ValueRef::Integer(v)) => Value::Decimal(Decimal::from(v)),
		// shortest round-trip rendering keeps 2.99 as 2.99
		(ValueKind::Decimal, ValueRef::Real(v)) => Value::Decimal(parse_decimal(&v.to_string()).map_err(&invalid)?),
		(ValueKind::Decimal, ValueRef::Text(text)) => {
			Value::Decimal(parse_decimal(utf8(text).map_err(&invalid)?).map_err(&invalid)?)
		}
		(ValueKind::Text, ValueRef::Text(text)) => Value::Text(utf8(text).map_err(&invalid)?.to_string()),
		(ValueKind::Text, ValueRef::Integer(v)) => Value::Text(v.to_string()),
		(ValueKind::Text, ValueRef::Real(v)) => Value::Text(v.to_string()),
		(_, other) => return Err(invalid(format!("unexpected {:?} value", other.data_type()))),
	};
	Ok(value)
}

fn utf8(bytes: &[u8]) -> std::result::Result<&str, String> {
	std::str::from_utf8(bytes).map_err(|err| err.to_string())
}

fn parse_decimal(text: &str) -> std::result::Result<Decimal, String> {
	text.parse::<Decimal>().map_err(|_| format!("{text:?} is not a decimal"))
}

#[cfg(test)]
mod tests {
	use rentlens_core::{Catalog, row};
	use rentlens_type::ErrorKind;

	use super::*;

	fn seeded(sql: &str) -> SqliteSource {
		let source = SqliteSource::in_memory().unwrap();
		source.execute_batch(sql).unwrap();
		source
	}

	#[test]
	fn test_load_converts_storage_classes() {
		let source = seeded(
			"CREATE TABLE payment (payment_id INTEGER, customer_id INTEGER, staff_id INTEGER, rental_id INTEGER, \
			 amount REAL, payment_date TEXT, last_update TEXT);
			 INSERT INTO payment VALUES (1, 1, 1, 76, 2.99, '2005-05-25 11:30:37', NULL);
			 INSERT INTO payment VALUES (2, 1, 1, NULL, '0.99', '2005-05-28 10:35:23', NULL);",
		);
		let catalog = Catalog::default();
		let loaded = source.load(Table::Payment, catalog.definition(Table::Payment)).unwrap();

		assert_eq!(loaded.len(), 2);
		assert_eq!(
			loaded.rows()[0],
			row![1, 1, 1, 76, Value::decimal("2.99"), "2005-05-25 11:30:37"]
		);
		assert_eq!(loaded.rows()[1][3], Value::Null);
		assert_eq!(loaded.rows()[1][4], Value::decimal("0.99"));
	}

	#[test]
	fn test_bool_column() {
		let source = seeded(
			"CREATE TABLE customer (customer_id INTEGER, store_id INTEGER, first_name TEXT, last_name TEXT, \
			 email TEXT, address_id INTEGER, active INTEGER);
			 INSERT INTO customer VALUES (1, 1, 'MARY', 'SMITH', NULL, 5, 1);
			 INSERT INTO customer VALUES (2, 1, 'PATRICIA', 'JOHNSON', NULL, 6, 0);",
		);
		let catalog = Catalog::default().with_column_kind(Table::Customer, "active", ValueKind::Bool).unwrap();
		let loaded = source.load(Table::Customer, catalog.definition(Table::Customer)).unwrap();
		let active: Vec<&Value> = loaded.column("active").unwrap();
		assert_eq!(active, vec![&Value::Bool(true), &Value::Bool(false)]);
	}

	#[test]
	fn test_missing_table() {
		let source = SqliteSource::in_memory().unwrap();
		let err = source.load(Table::Film, Catalog::default().definition(Table::Film)).unwrap_err();
		assert_eq!(err.code(), "LOAD_002");
		assert_eq!(err.kind(), ErrorKind::Load);
	}

	#[test]
	fn test_missing_column() {
		let source = seeded("CREATE TABLE category (category_id INTEGER);");
		let err = source.load(Table::Category, Catalog::default().definition(Table::Category)).unwrap_err();
		assert_eq!(err.code(), "SCHEMA_001");
	}

	#[test]
	fn test_invalid_cell() {
		let source = seeded(
			"CREATE TABLE category (category_id INTEGER, name TEXT);
			 INSERT INTO category VALUES ('one', 'Action');",
		);
		let err = source.load(Table::Category, Catalog::default().definition(Table::Category)).unwrap_err();
		assert_eq!(err.code(), "LOAD_003");
	}

	#[test]
	fn test_unreachable_file() {
		let config = SqliteConfig::new("/nonexistent/dir/sakila.db").read_only();
		let err = SqliteSource::open(config).err().unwrap();
		assert_eq!(err.code(), "LOAD_001");
	}
}
