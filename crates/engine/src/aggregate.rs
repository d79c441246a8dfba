// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use rentlens_core::{Relation, Row, Schema};
use rentlens_type::{
	Decimal, Result, Value, ValueKind,
	error::diagnostic::{aggregate::integer_overflow, schema::type_mismatch},
	return_error,
};
use tracing::{debug, instrument};

use crate::filter::{BoundPredicate, Predicate};

#[derive(Debug, Clone, PartialEq)]
pub enum Accumulator {
	Count,
	CountIf(Predicate),
	Sum(String),
	SumIf(String, Predicate),
}

impl Display for Accumulator {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Accumulator::Count => f.write_str("count()"),
			Accumulator::CountIf(predicate) => write!(f, "countIf({predicate})"),
			Accumulator::Sum(column) => write!(f, "sum({column})"),
			Accumulator::SumIf(column, predicate) => write!(f, "sumIf({column}, {predicate})"),
		}
	}
}

/// An accumulator and the name of the column it produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
	pub accumulator: Accumulator,
	pub alias: String,
}

impl Aggregation {
	pub fn count(alias: impl Into<String>) -> Self {
		Self {
			accumulator: Accumulator::Count,
			alias: alias.into(),
		}
	}

	pub fn count_if(predicate: Predicate, alias: impl Into<String>) -> Self {
		Self {
			accumulator: Accumulator::CountIf(predicate),
			alias: alias.into(),
		}
	}

	pub fn sum(column: impl Into<String>, alias: impl Into<String>) -> Self {
		Self {
			accumulator: Accumulator::Sum(column.into()),
			alias: alias.into(),
		}
	}

	pub fn sum_if(column: impl Into<String>, predicate: Predicate, alias: impl Into<String>) -> Self {
		Self {
			accumulator: Accumulator::SumIf(column.into(), predicate),
			alias: alias.into(),
		}
	}
}

impl Display for Aggregation {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} AS {}", self.accumulator, self.alias)
	}
}

enum BoundAccumulator {
	Count(Option<BoundPredicate>),
	Sum {
		idx: usize,
		column: String,
		kind: ValueKind,
		condition: Option<BoundPredicate>,
	},
}

impl BoundAccumulator {
	fn bind(accumulator: &Accumulator, relation: &Relation) -> Result<Self> {
		let schema = relation.schema();
		let bind_sum = |column: &str, condition: Option<&Predicate>| -> Result<Self> {
			let idx = relation.column_index(column)?;
			let kind = schema.kind_at(idx).unwrap_or(ValueKind::Null);
			if !kind.is_numeric() {
				return_error!(type_mismatch(column, "INT or DECIMAL", kind));
			}
			Ok(BoundAccumulator::Sum {
				idx,
				column: column.to_string(),
				kind,
				condition: condition.map(|p| p.bind(schema, relation.name())).transpose()?,
			})
		};

		match accumulator {
			Accumulator::Count => Ok(BoundAccumulator::Count(None)),
			Accumulator::CountIf(predicate) => {
				Ok(BoundAccumulator::Count(Some(predicate.bind(schema, relation.name())?)))
			}
			Accumulator::Sum(column) => bind_sum(column, None),
			Accumulator::SumIf(column, predicate) => bind_sum(column, Some(predicate)),
		}
	}

	fn output_kind(&self) -> ValueKind {
		match self {
			BoundAccumulator::Count(_) => ValueKind::Int,
			BoundAccumulator::Sum {
				kind,
				..
			} => *kind,
		}
	}

	fn init(&self) -> State {
		match self {
			BoundAccumulator::Count(_) => State::Int(0),
			BoundAccumulator::Sum {
				kind: ValueKind::Decimal,
				..
			} => State::Decimal(Decimal::zero()),
			BoundAccumulator::Sum {
				..
			} => State::Int(0),
		}
	}

	fn update(&self, state: &mut State, row: &Row) -> Result<()> {
		match self {
			BoundAccumulator::Count(condition) => {
				if condition.as_ref().is_none_or(|c| c.holds(row)) {
					state.add_int(1, "count")?;
				}
			}
			BoundAccumulator::Sum {
				idx,
				column,
				condition,
				..
			} => {
				if condition.as_ref().is_some_and(|c| !c.holds(row)) {
					return Ok(());
				}
				match &row[*idx] {
					Value::Int(v) => state.add_int(*v, column)?,
					Value::Decimal(v) => state.add_decimal(v),
					_ => {}
				}
			}
		}
		Ok(())
	}
}

/// Running value of one accumulator for one group. Rows that contribute
/// nothing leave the initial zero in place.
enum State {
	Int(i64),
	Decimal(Decimal),
}

impl State {
	fn add_int(&mut self, value: i64, column: &str) -> Result<()> {
		match self {
			State::Int(total) => match total.checked_add(value) {
				Some(sum) => *total = sum,
				None => return_error!(integer_overflow(column)),
			},
			State::Decimal(total) => *total += &Decimal::from(value),
		}
		Ok(())
	}

	fn add_decimal(&mut self, value: &Decimal) {
		match self {
			State::Int(total) => {
				let mut promoted = Decimal::from(*total);
				promoted += value;
				*self = State::Decimal(promoted);
			}
			State::Decimal(total) => *total += value,
		}
	}

	fn finish(self) -> Value {
		match self {
			State::Int(v) => Value::Int(v),
			State::Decimal(v) => Value::Decimal(v),
		}
	}
}

/// Groups rows by `group_by` and evaluates each aggregation per group.
///
/// Null group values form their own group. Empty input yields no groups, even
/// without group columns. Groups are emitted in order of first appearance.
#[instrument(name = "engine::aggregate", level = "trace", skip_all, fields(
	relation = relation.name(),
	rows = relation.len(),
	groups = tracing::field::Empty
))]
pub fn aggregate<S: AsRef<str>>(relation: &Relation, group_by: &[S], aggregations: &[Aggregation]) -> Result<Relation> {
	let key_idx = relation.column_indices(group_by)?;
	let accumulators = aggregations
		.iter()
		.map(|a| BoundAccumulator::bind(&a.accumulator, relation))
		.collect::<Result<Vec<_>>>()?;

	let mut columns: Vec<(String, ValueKind)> = key_idx
		.iter()
		.map(|&idx| {
			let name = relation.schema().name_at(idx).unwrap_or_default().to_string();
			(name, relation.schema().kind_at(idx).unwrap_or(ValueKind::Null))
		})
		.collect();
	for (aggregation, accumulator) in aggregations.iter().zip(&accumulators) {
		columns.push((aggregation.alias.clone(), accumulator.output_kind()));
	}
	let schema = Schema::new(columns)?;

	let mut groups: IndexMap<Row, Vec<State>> = IndexMap::new();
	for row in relation.rows() {
		let states = groups
			.entry(row.project(&key_idx))
			.or_insert_with(|| accumulators.iter().map(BoundAccumulator::init).collect());
		for (accumulator, state) in accumulators.iter().zip(states.iter_mut()) {
			accumulator.update(state, row)?;
		}
	}

	tracing::Span::current().record("groups", groups.len());
	debug!(groups = groups.len(), "aggregate complete");

	let rows = groups
		.into_iter()
		.map(|(key, states)| key.concat(states.into_iter().map(State::finish)))
		.collect();
	Relation::new(relation.name(), schema, rows)
}

#[cfg(test)]
mod tests {
	use rentlens_core::{Schema, row};
	use rentlens_type::ValueKind::{Int, Text};

	use super::*;

	fn payments() -> Relation {
		let schema = Schema::new([("customer_id", Int), ("staff_id", Int), ("amount", ValueKind::Decimal)]).unwrap();
		Relation::new(
			"payment",
			schema,
			vec![
				row![1, 1, Value::decimal("2.99")],
				row![1, 2, Value::decimal("0.99")],
				row![2, 1, Value::decimal("5.99")],
				row![2, 1, None::<i64>],
				row![None::<i64>, 2, Value::decimal("1.01")],
			],
		)
		.unwrap()
	}

	fn lookup(relation: &Relation, key: &Value, column: &str) -> Value {
		let key_idx = 0;
		let idx = relation.column_index(column).unwrap();
		relation.rows().iter().find(|r| &r[key_idx] == key).map(|r| r[idx].clone()).unwrap()
	}

	#[test]
	fn test_count_and_sum() {
		let result = aggregate(
			&payments(),
			&["customer_id"],
			&[Aggregation::count("payments"), Aggregation::sum("amount", "total")],
		)
		.unwrap();

		assert_eq!(result.len(), 3);
		assert_eq!(result.schema().names().collect::<Vec<_>>(), vec!["customer_id", "payments", "total"]);
		assert_eq!(result.schema().kind_of("total"), Some(ValueKind::Decimal));
		assert_eq!(lookup(&result, &Value::Int(1), "total"), Value::decimal("3.98"));
		assert_eq!(lookup(&result, &Value::Int(2), "payments"), Value::Int(2));
		assert_eq!(lookup(&result, &Value::Int(2), "total"), Value::decimal("5.99"));
		assert_eq!(lookup(&result, &Value::Null, "total"), Value::decimal("1.01"));
	}

	#[test]
	fn test_sum_if_without_contributions_is_zero() {
		let result = aggregate(
			&payments(),
			&["customer_id"],
			&[Aggregation::sum_if("amount", Predicate::eq("staff_id", 2), "by_staff_2")],
		)
		.unwrap();
		assert_eq!(lookup(&result, &Value::Int(2), "by_staff_2"), Value::decimal("0"));
		assert_eq!(lookup(&result, &Value::Int(1), "by_staff_2"), Value::decimal("0.99"));
	}

	#[test]
	fn test_sum_if_total_matches_grouped_totals() {
		let predicate = Predicate::eq("staff_id", 1);
		let everything = aggregate(
			&payments(),
			&[] as &[&str],
			&[Aggregation::sum_if("amount", predicate.clone(), "total")],
		)
		.unwrap();

		let grouped = aggregate(&payments(), &["staff_id"], &[Aggregation::sum("amount", "total")]).unwrap();
		let staff_1 = crate::filter(&grouped, &predicate).unwrap();

		let expected: Vec<&Value> = staff_1.column("total").unwrap();
		assert_eq!(everything.column("total").unwrap(), expected);
	}

	#[test]
	fn test_count_if() {
		let result = aggregate(
			&payments(),
			&["staff_id"],
			&[
				Aggregation::count_if(Predicate::is_not_null("amount"), "paid"),
				Aggregation::count_if(Predicate::is_null("amount"), "unpaid"),
			],
		)
		.unwrap();
		assert_eq!(lookup(&result, &Value::Int(1), "paid"), Value::Int(2));
		assert_eq!(lookup(&result, &Value::Int(1), "unpaid"), Value::Int(1));
		assert_eq!(lookup(&result, &Value::Int(2), "unpaid"), Value::Int(0));
	}

	#[test]
	fn test_empty_input_has_no_groups() {
		let empty = Relation::empty("payment", payments().schema().clone());
		let grouped = aggregate(&empty, &["customer_id"], &[Aggregation::count("n")]).unwrap();
		assert!(grouped.is_empty());

		let global = aggregate(&empty, &[] as &[&str], &[Aggregation::count("n")]).unwrap();
		assert!(global.is_empty());
	}

	#[test]
	fn test_integer_sum_and_overflow() {
		let schema = Schema::new([("g", Int), ("v", Int)]).unwrap();
		let ok = Relation::new("t", schema.clone(), vec![row![1, 3], row![1, 4]]).unwrap();
		let result = aggregate(&ok, &["g"], &[Aggregation::sum("v", "s")]).unwrap();
		assert_eq!(lookup(&result, &Value::Int(1), "s"), Value::Int(7));

		let overflowing = Relation::new("t", schema, vec![row![1, i64::MAX], row![1, 1i64]]).unwrap();
		let err = aggregate(&overflowing, &["g"], &[Aggregation::sum("v", "s")]).unwrap_err();
		assert_eq!(err.code(), "AGGREGATE_001");
	}

	#[test]
	fn test_sum_of_text_is_rejected() {
		let schema = Schema::new([("name", Text)]).unwrap();
		let relation = Relation::new("t", schema, vec![row!["x"]]).unwrap();
		let err = aggregate(&relation, &[] as &[&str], &[Aggregation::sum("name", "s")]).unwrap_err();
		assert_eq!(err.code(), "SCHEMA_003");
	}

	#[test]
	fn test_missing_group_column() {
		let err = aggregate(&payments(), &["store_id"], &[Aggregation::count("n")]).unwrap_err();
		assert_eq!(err.code(), "SCHEMA_001");
	}
}
