// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! A small rental dataset shared by the report tests.
//!
//! Categories: Children holds films 1-3, Action holds films 4-5, Drama holds
//! none, and film 6 has no category. Films 3 and 6 have no inventory copy.
//! Address 4 points at a city that does not exist.

#![allow(dead_code)]

use rentlens_core::{Catalog, Relation, Row, Table, row};
use rentlens_source::{Context, MemorySource, SqliteSource};
use rentlens_type::{Value, ValueKind};

pub fn dataset() -> Vec<(Table, Vec<Row>)> {
	vec![
		(Table::Category, vec![row![1, "Children"], row![2, "Action"], row![3, "Drama"]]),
		(
			Table::Film,
			vec![
				row![1, "ACADEMY DINOSAUR", 2006, 6, Value::decimal("0.99"), 86, "PG"],
				row![2, "ACE GOLDFINGER", 2006, 3, Value::decimal("4.99"), 48, "G"],
				row![3, "ADAPTATION HOLES", 2006, 7, Value::decimal("2.99"), 50, "NC-17"],
				row![4, "AFFAIR PREJUDICE", 2006, 5, Value::decimal("2.99"), 117, "G"],
				row![5, "AGENT TRUMAN", 2006, 3, Value::decimal("2.99"), 169, "PG"],
				row![6, "ALONE TRIP", 2006, 4, Value::decimal("0.99"), 82, "R"],
			],
		),
		(Table::FilmCategory, vec![row![1, 1], row![2, 1], row![3, 1], row![4, 2], row![5, 2]]),
		(
			Table::Inventory,
			vec![row![1, 1, 1], row![2, 1, 2], row![3, 2, 1], row![4, 4, 1], row![5, 5, 2]],
		),
		(
			Table::Actor,
			vec![
				row![1, "PENELOPE", "GUINESS"],
				row![2, "NICK", "WAHLBERG"],
				row![3, "ED", "CHASE"],
				row![4, "JENNIFER", "DAVIS"],
			],
		),
		(
			Table::FilmActor,
			vec![row![1, 1], row![1, 2], row![1, 3], row![2, 1], row![2, 4], row![3, 2], row![3, 3], row![4, 5]],
		),
		(
			Table::City,
			vec![row![1, "Abu Dhabi", 101], row![2, "Lethbridge", 20], row![3, "Jalib al-Shuyukh", 56]],
		),
		(
			Table::Address,
			vec![
				row![1, "47 MySakila Drive", "Alberta", 1, None::<&str>, "14033335568"],
				row![2, "28 MySQL Boulevard", "QLD", 2, None::<&str>, "6172235589"],
				row![3, "23 Workhaven Lane", "Alberta", 3, "52113", "14033335568"],
				row![4, "1411 Lillydale Drive", "QLD", 99, None::<&str>, "6172235589"],
			],
		),
		(
			Table::Customer,
			vec![
				row![1, 1, "MARY", "SMITH", "MARY.SMITH@sakilacustomer.org", 1, 1],
				row![2, 1, "PATRICIA", "JOHNSON", None::<&str>, 1, 0],
				row![3, 1, "LINDA", "WILLIAMS", None::<&str>, 2, 1],
				row![4, 2, "BARBARA", "JONES", None::<&str>, 3, 0],
				row![5, 1, "ELIZABETH", "BROWN", None::<&str>, 3, 0],
				row![6, 2, "JENNIFER", "DAVIS", None::<&str>, 4, 1],
				row![7, 2, "MARIA", "MILLER", None::<&str>, 2, None::<i64>],
			],
		),
		(
			Table::Rental,
			vec![
				row![1, "2005-05-24 22:53:30", 1, 1, "2005-05-26 22:04:30", 1],
				row![2, "2005-05-24 22:54:33", 1, 2, "2005-05-28 19:40:33", 1],
				row![3, "2005-05-24 23:03:39", 2, 3, "2005-06-01 22:12:39", 1],
				row![4, "2005-05-24 23:04:41", 3, 1, None::<&str>, 2],
				row![5, "2005-05-24 23:05:21", 4, 4, "2005-06-02 04:33:21", 1],
				row![6, "2005-05-24 23:08:07", 5, 6, "2005-05-27 01:32:07", 1],
				row![7, "2005-05-24 23:11:53", 3, 5, "2005-05-29 20:34:53", 2],
			],
		),
		(
			Table::Payment,
			vec![
				row![1, 1, 1, 1, Value::decimal("2.99"), "2005-05-25 11:30:37"],
				row![2, 2, 1, 2, Value::decimal("0.99"), "2005-05-28 10:35:23"],
				row![3, 3, 2, 3, Value::decimal("5.99"), "2005-06-15 00:54:12"],
				row![4, 1, 1, 4, Value::decimal("4.99"), "2005-06-15 18:02:53"],
				row![5, 4, 2, 5, Value::decimal("1.99"), "2005-06-15 21:08:46"],
				row![6, 6, 2, 6, Value::decimal("3.99"), "2005-06-16 15:18:57"],
				row![7, 5, 1, 7, Value::decimal("0.99"), "2005-06-18 08:41:48"],
				row![8, 5, 1, 7, Value::decimal("1.00"), "2005-06-18 13:33:59"],
			],
		),
	]
}

pub fn memory_source() -> MemorySource {
	let catalog = Catalog::default();
	dataset().into_iter().fold(MemorySource::new(), |source, (table, rows)| {
		let schema = catalog.definition(table).schema.clone();
		source.with_table(table, Relation::new(table.name(), schema, rows).unwrap())
	})
}

pub fn memory_context() -> Context {
	Context::new(memory_source(), Catalog::default())
}

/// The same dataset stored in an in-memory SQLite database, `active` kept as 0/1.
pub fn sqlite_source() -> SqliteSource {
	let catalog = Catalog::default();
	let source = SqliteSource::in_memory().unwrap();
	let mut sql = String::new();
	for (table, rows) in dataset() {
		let definition = catalog.definition(table);
		let columns: Vec<String> =
			definition.schema.iter().map(|(name, kind)| format!("{name} {}", sql_type(kind))).collect();
		sql.push_str(&format!("CREATE TABLE {table} ({});\n", columns.join(", ")));
		for row in rows {
			let values: Vec<String> = row.iter().map(sql_literal).collect();
			sql.push_str(&format!("INSERT INTO {table} VALUES ({});\n", values.join(", ")));
		}
	}
	source.execute_batch(&sql).unwrap();
	source
}

pub fn sqlite_context(catalog: Catalog) -> Context {
	Context::new(sqlite_source(), catalog)
}

fn sql_type(kind: ValueKind) -> &'static str {
	match kind {
		ValueKind::Int => "INTEGER",
		ValueKind::Decimal => "NUMERIC(5, 2)",
		ValueKind::Bool => "BOOLEAN",
		ValueKind::Text | ValueKind::Null => "TEXT",
	}
}

fn sql_literal(value: &Value) -> String {
	match value {
		Value::Null => "NULL".to_string(),
		Value::Text(text) => format!("'{}'", text.replace('\'', "''")),
		Value::Bool(b) => (*b as i64).to_string(),
		other => other.to_string(),
	}
}

/// Rows of `relation` as strings, for compact assertions.
pub fn rendered(relation: &Relation) -> Vec<Vec<String>> {
	relation.rows().iter().map(|row| row.iter().map(Value::to_string).collect()).collect()
}

pub fn strings(rows: &[&[&str]]) -> Vec<Vec<String>> {
	rows.iter().map(|row| row.iter().map(|s| s.to_string()).collect()).collect()
}
