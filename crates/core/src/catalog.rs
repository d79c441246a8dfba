// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use indexmap::IndexMap;
use rentlens_type::{
	Result,
	ValueKind::{self, Bool, Decimal, Int, Text},
	error::diagnostic::{load::table_not_found, schema::column_not_found},
	return_error,
};

use crate::Schema;

/// The tables of the rental dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Table {
	Actor,
	Address,
	Category,
	City,
	Customer,
	Film,
	FilmActor,
	FilmCategory,
	Inventory,
	Payment,
	Rental,
	Staff,
	Store,
}

impl Table {
	pub const ALL: [Table; 13] = [
		Table::Actor,
		Table::Address,
		Table::Category,
		Table::City,
		Table::Customer,
		Table::Film,
		Table::FilmActor,
		Table::FilmCategory,
		Table::Inventory,
		Table::Payment,
		Table::Rental,
		Table::Staff,
		Table::Store,
	];

	pub fn name(&self) -> &'static str {
		match self {
			Table::Actor => "actor",
			Table::Address => "address",
			Table::Category => "category",
			Table::City => "city",
			Table::Customer => "customer",
			Table::Film => "film",
			Table::FilmActor => "film_actor",
			Table::FilmCategory => "film_category",
			Table::Inventory => "inventory",
			Table::Payment => "payment",
			Table::Rental => "rental",
			Table::Staff => "staff",
			Table::Store => "store",
		}
	}
}

impl Display for Table {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Table {
	type Err = rentlens_type::Error;

	fn from_str(s: &str) -> Result<Self> {
		match Table::ALL.iter().find(|t| t.name() == s) {
			Some(table) => Ok(*table),
			None => return_error!(table_not_found(s)),
		}
	}
}

/// Declared shape of one table: its columns, their kinds and the primary key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDefinition {
	pub table: Table,
	pub schema: Schema,
	pub primary_key: Vec<String>,
}

impl TableDefinition {
	fn new(table: Table, columns: &[(&str, ValueKind)], primary_key: &[&str]) -> Self {
		let schema = Schema::new(columns.iter().copied())
			.unwrap_or_else(|err| unreachable!("static definition of {table} is invalid: {err}"));
		Self {
			table,
			schema,
			primary_key: primary_key.iter().map(|c| c.to_string()).collect(),
		}
	}
}

/// Table definitions the loader materializes relations against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
	tables: IndexMap<Table, TableDefinition>,
}

impl Catalog {
	pub fn definition(&self, table: Table) -> &TableDefinition {
		&self.tables[&table]
	}

	pub fn tables(&self) -> impl Iterator<Item = &TableDefinition> {
		self.tables.values()
	}

	/// Overrides how one column is stored, e.g. `customer.active` as BOOL instead of INT.
	pub fn with_column_kind(mut self, table: Table, column: &str, kind: ValueKind) -> Result<Self> {
		let definition = &mut self.tables[&table];
		if !definition.schema.contains(column) {
			return_error!(column_not_found(column, table.name()));
		}
		definition.schema = definition.schema.with_kind(column, kind)?;
		Ok(self)
	}
}

impl Default for Catalog {
	fn default() -> Self {
		let definitions = [
			TableDefinition::new(
				Table::Actor,
				&[("actor_id", Int), ("first_name", Text), ("last_name", Text)],
				&["actor_id"],
			),
			TableDefinition::new(
				Table::Address,
				&[
					("address_id", Int),
					("address", Text),
					("district", Text),
					("city_id", Int),
					("postal_code", Text),
					("phone", Text),
				],
				&["address_id"],
			),
			TableDefinition::new(Table::Category, &[("category_id", Int), ("name", Text)], &["category_id"]),
			TableDefinition::new(
				Table::City,
				&[("city_id", Int), ("city", Text), ("country_id", Int)],
				&["city_id"],
			),
			TableDefinition::new(
				Table::Customer,
				&[
					("customer_id", Int),
					("store_id", Int),
					("first_name", Text),
					("last_name", Text),
					("email", Text),
					("address_id", Int),
					("active", Int),
				],
				&["customer_id"],
			),
			TableDefinition::new(
				Table::Film,
				&[
					("film_id", Int),
					("title", Text),
					("release_year", Int),
					("rental_duration", Int),
					("rental_rate", Decimal),
					("length", Int),
					("rating", Text),
				],
				&["film_id"],
			),
			TableDefinition::new(
				Table::FilmActor,
				&[("actor_id", Int), ("film_id", Int)],
				&["actor_id", "film_id"],
			),
			TableDefinition::new(
				Table::FilmCategory,
				&[("film_id", Int), ("category_id", Int)],
				&["film_id", "category_id"],
			),
			TableDefinition::new(
				Table::Inventory,
				&[("inventory_id", Int), ("film_id", Int), ("store_id", Int)],
				&["inventory_id"],
			),
			TableDefinition::new(
				Table::Payment,
				&[
					("payment_id", Int),
					("customer_id", Int),
					("staff_id", Int),
					("rental_id", Int),
					("amount", Decimal),
					("payment_date", Text),
				],
				&["payment_id"],
			),
			TableDefinition::new(
				Table::Rental,
				&[
					("rental_id", Int),
					("rental_date", Text),
					("inventory_id", Int),
					("customer_id", Int),
					("return_date", Text),
					("staff_id", Int),
				],
				&["rental_id"],
			),
			TableDefinition::new(
				Table::Staff,
				&[
					("staff_id", Int),
					("first_name", Text),
					("last_name", Text),
					("address_id", Int),
					("store_id", Int),
					("active", Bool),
				],
				&["staff_id"],
			),
			TableDefinition::new(
				Table::Store,
				&[("store_id", Int), ("manager_staff_id", Int), ("address_id", Int)],
				&["store_id"],
			),
		];

		Self {
			tables: definitions.into_iter().map(|d| (d.table, d)).collect(),
		}
	}
}
