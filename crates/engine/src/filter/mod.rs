// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod like;

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
};

use like::LikePattern;
use rentlens_core::{Relation, Row, Schema};
use rentlens_type::{
	Result, Value, ValueKind,
	error::diagnostic::schema::{column_not_found, type_mismatch},
	return_error,
};
use tracing::{debug, instrument};

/// SQL three-valued truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truth {
	True,
	False,
	Unknown,
}

impl Truth {
	pub fn and(self, other: Truth) -> Truth {
		match (self, other) {
			(Truth::False, _) | (_, Truth::False) => Truth::False,
			(Truth::True, Truth::True) => Truth::True,
			_ => Truth::Unknown,
		}
	}

	pub fn or(self, other: Truth) -> Truth {
		match (self, other) {
			(Truth::True, _) | (_, Truth::True) => Truth::True,
			(Truth::False, Truth::False) => Truth::False,
			_ => Truth::Unknown,
		}
	}

	pub fn negate(self) -> Truth {
		match self {
			Truth::True => Truth::False,
			Truth::False => Truth::True,
			Truth::Unknown => Truth::Unknown,
		}
	}
}

impl From<bool> for Truth {
	fn from(value: bool) -> Self {
		if value { Truth::True } else { Truth::False }
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
	Eq,
	NotEq,
	Lt,
	LtEq,
	Gt,
	GtEq,
}

impl CompareOp {
	fn holds(&self, ord: Ordering) -> bool {
		match self {
			CompareOp::Eq => ord == Ordering::Equal,
			CompareOp::NotEq => ord != Ordering::Equal,
			CompareOp::Lt => ord == Ordering::Less,
			CompareOp::LtEq => ord != Ordering::Greater,
			CompareOp::Gt => ord == Ordering::Greater,
			CompareOp::GtEq => ord != Ordering::Less,
		}
	}
}

impl Display for CompareOp {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			CompareOp::Eq => "=",
			CompareOp::NotEq => "!=",
			CompareOp::Lt => "<",
			CompareOp::LtEq => "<=",
			CompareOp::Gt => ">",
			CompareOp::GtEq => ">=",
		})
	}
}

/// Row-level condition over named columns.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
	Compare {
		column: String,
		op: CompareOp,
		value: Value,
	},
	Like {
		column: String,
		pattern: String,
		case_insensitive: bool,
	},
	IsNull(String),
	IsNotNull(String),
	And(Box<Predicate>, Box<Predicate>),
	Or(Box<Predicate>, Box<Predicate>),
	Not(Box<Predicate>),
}

impl Predicate {
	pub fn compare(column: impl Into<String>, op: CompareOp, value: impl Into<Value>) -> Self {
		Predicate::Compare {
			column: column.into(),
			op,
			value: value.into(),
		}
	}

	pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
		Self::compare(column, CompareOp::Eq, value)
	}

	pub fn not_eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
		Self::compare(column, CompareOp::NotEq, value)
	}

	pub fn lt(column: impl Into<String>, value: impl Into<Value>) -> Self {
		Self::compare(column, CompareOp::Lt, value)
	}

	pub fn lt_eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
		Self::compare(column, CompareOp::LtEq, value)
	}

	pub fn gt(column: impl Into<String>, value: impl Into<Value>) -> Self {
		Self::compare(column, CompareOp::Gt, value)
	}

	pub fn gt_eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
		Self::compare(column, CompareOp::GtEq, value)
	}

	pub fn like(column: impl Into<String>, pattern: impl Into<String>) -> Self {
		Predicate::Like {
			column: column.into(),
			pattern: pattern.into(),
			case_insensitive: false,
		}
	}

	pub fn ilike(column: impl Into<String>, pattern: impl Into<String>) -> Self {
		Predicate::Like {
			column: column.into(),
			pattern: pattern.into(),
			case_insensitive: true,
		}
	}

	pub fn is_null(column: impl Into<String>) -> Self {
		Predicate::IsNull(column.into())
	}

	pub fn is_not_null(column: impl Into<String>) -> Self {
		Predicate::IsNotNull(column.into())
	}

	pub fn and(self, other: Predicate) -> Self {
		Predicate::And(Box::new(self), Box::new(other))
	}

	pub fn or(self, other: Predicate) -> Self {
		Predicate::Or(Box::new(self), Box::new(other))
	}

	pub fn negate(self) -> Self {
		Predicate::Not(Box::new(self))
	}

	/// Resolves column names to positions and checks operand kinds.
	pub fn bind(&self, schema: &Schema, relation: &str) -> Result<BoundPredicate> {
		let resolve = |column: &str| -> Result<(usize, ValueKind)> {
			match (schema.index_of(column), schema.kind_of(column)) {
				(Some(idx), Some(kind)) => Ok((idx, kind)),
				_ => return_error!(column_not_found(column, relation)),
			}
		};

		Ok(match self {
			Predicate::Compare {
				column,
				op,
				value,
			} => {
				let (idx, kind) = resolve(column)?;
				if !kind.is_comparable(value.kind()) {
					return_error!(type_mismatch(column, value.kind(), kind));
				}
				BoundPredicate::Compare {
					idx,
					op: *op,
					value: value.clone(),
				}
			}
			Predicate::Like {
				column,
				pattern,
				case_insensitive,
			} => {
				let (idx, kind) = resolve(column)?;
				if kind != ValueKind::Text {
					return_error!(type_mismatch(column, ValueKind::Text, kind));
				}
				BoundPredicate::Like {
					idx,
					pattern: LikePattern::new(pattern, *case_insensitive),
				}
			}
			Predicate::IsNull(column) => BoundPredicate::IsNull(resolve(column)?.0),
			Predicate::IsNotNull(column) => BoundPredicate::IsNotNull(resolve(column)?.0),
			Predicate::And(l, r) => {
				BoundPredicate::And(Box::new(l.bind(schema, relation)?), Box::new(r.bind(schema, relation)?))
			}
			Predicate::Or(l, r) => {
				BoundPredicate::Or(Box::new(l.bind(schema, relation)?), Box::new(r.bind(schema, relation)?))
			}
			Predicate::Not(inner) => BoundPredicate::Not(Box::new(inner.bind(schema, relation)?)),
		})
	}
}

impl Display for Predicate {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Predicate::Compare {
				column,
				op,
				value,
			} => match value {
				Value::Text(text) => write!(f, "{column} {op} '{text}'"),
				other => write!(f, "{column} {op} {other}"),
			},
			Predicate::Like {
				column,
				pattern,
				case_insensitive: false,
			} => write!(f, "{column} LIKE '{pattern}'"),
			Predicate::Like {
				column,
				pattern,
				case_insensitive: true,
			} => write!(f, "{column} ILIKE '{pattern}'"),
			Predicate::IsNull(column) => write!(f, "{column} IS NULL"),
			Predicate::IsNotNull(column) => write!(f, "{column} IS NOT NULL"),
			Predicate::And(l, r) => write!(f, "({l} AND {r})"),
			Predicate::Or(l, r) => write!(f, "({l} OR {r})"),
			Predicate::Not(inner) => write!(f, "NOT {inner}"),
		}
	}
}

/// A predicate resolved against one schema.
#[derive(Debug, Clone)]
pub enum BoundPredicate {
	Compare {
		idx: usize,
		op: CompareOp,
		value: Value,
	},
	Like {
		idx: usize,
		pattern: LikePattern,
	},
	IsNull(usize),
	IsNotNull(usize),
	And(Box<BoundPredicate>, Box<BoundPredicate>),
	Or(Box<BoundPredicate>, Box<BoundPredicate>),
	Not(Box<BoundPredicate>),
}

impl BoundPredicate {
	pub fn evaluate(&self, row: &Row) -> Truth {
		match self {
			BoundPredicate::Compare {
				idx,
				op,
				value,
			} => match row[*idx].compare(value) {
				Some(ord) => op.holds(ord).into(),
				None => Truth::Unknown,
			},
			BoundPredicate::Like {
				idx,
				pattern,
			} => match &row[*idx] {
				Value::Text(text) => pattern.matches(text).into(),
				_ => Truth::Unknown,
			},
			BoundPredicate::IsNull(idx) => row[*idx].is_null().into(),
			BoundPredicate::IsNotNull(idx) => (!row[*idx].is_null()).into(),
			BoundPredicate::And(l, r) => l.evaluate(row).and(r.evaluate(row)),
			BoundPredicate::Or(l, r) => l.evaluate(row).or(r.evaluate(row)),
			BoundPredicate::Not(inner) => inner.evaluate(row).negate(),
		}
	}

	pub fn holds(&self, row: &Row) -> bool {
		self.evaluate(row) == Truth::True
	}
}

/// Keeps the rows for which `predicate` is true; false and unknown rows are dropped.
/// Surviving rows keep their relative order.
#[instrument(name = "engine::filter", level = "trace", skip_all, fields(
	relation = relation.name(),
	predicate = %predicate,
	rows = relation.len()
))]
pub fn filter(relation: &Relation, predicate: &Predicate) -> Result<Relation> {
	let bound = predicate.bind(relation.schema(), relation.name())?;
	let rows: Vec<Row> = relation.rows().iter().filter(|row| bound.holds(row)).cloned().collect();
	debug!(kept = rows.len(), dropped = relation.len() - rows.len(), "filter complete");
	Relation::new(relation.name(), relation.schema().clone(), rows)
}
