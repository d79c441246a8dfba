// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod decimal;
mod kind;

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
};

pub use decimal::Decimal;
pub use kind::ValueKind;
use serde::Serialize;

/// A single cell, tagged with its kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Value {
	/// Absence of a value; distinct from every other value, including itself under comparison
	Null,
	/// A 64-bit signed integer
	Int(i64),
	/// An exact decimal
	Decimal(Decimal),
	/// A UTF-8 encoded text
	Text(String),
	/// A boolean: true or false.
	Bool(bool),
}

impl Value {
	pub fn text(value: impl Into<String>) -> Self {
		Value::Text(value.into())
	}

	/// Parses an exact decimal, falling back to `Null` when the literal is not a number.
	pub fn decimal(literal: &str) -> Self {
		literal.parse::<Decimal>().map(Value::Decimal).unwrap_or(Value::Null)
	}

	pub fn kind(&self) -> ValueKind {
		ValueKind::from(self)
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	pub fn as_int(&self) -> Option<i64> {
		match self {
			Value::Int(v) => Some(*v),
			_ => None,
		}
	}

	pub fn as_text(&self) -> Option<&str> {
		match self {
			Value::Text(v) => Some(v.as_str()),
			_ => None,
		}
	}

	pub fn as_decimal(&self) -> Option<Decimal> {
		match self {
			Value::Decimal(v) => Some(v.clone()),
			Value::Int(v) => Some(Decimal::from(*v)),
			_ => None,
		}
	}

	/// Comparison under SQL semantics: `None` whenever either side is null or
	/// the kinds are not comparable.
	pub fn compare(&self, other: &Value) -> Option<Ordering> {
		match (self, other) {
			(Value::Int(l), Value::Int(r)) => Some(l.cmp(r)),
			(Value::Decimal(l), Value::Decimal(r)) => Some(l.cmp(r)),
			(Value::Int(l), Value::Decimal(r)) => Some(Decimal::from(*l).cmp(r)),
			(Value::Decimal(l), Value::Int(r)) => Some(l.cmp(&Decimal::from(*r))),
			(Value::Text(l), Value::Text(r)) => Some(l.cmp(r)),
			(Value::Bool(l), Value::Bool(r)) => Some(l.cmp(r)),
			_ => None,
		}
	}

	/// Total order used for sorting: null sorts below every other value,
	/// incomparable kinds fall back to the order of their kinds.
	pub fn sort_cmp(&self, other: &Value) -> Ordering {
		match (self, other) {
			(Value::Null, Value::Null) => Ordering::Equal,
			(Value::Null, _) => Ordering::Less,
			(_, Value::Null) => Ordering::Greater,
			_ => self.compare(other).unwrap_or_else(|| self.kind().cmp(&other.kind())),
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Null => f.write_str("null"),
			Value::Int(value) => Display::fmt(value, f),
			Value::Decimal(value) => Display::fmt(value, f),
			Value::Text(value) => Display::fmt(value, f),
			Value::Bool(true) => f.write_str("true"),
			Value::Bool(false) => f.write_str("false"),
		}
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Int(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Value::Int(value as i64)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Text(value.to_string())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::Text(value)
	}
}

impl From<Decimal> for Value {
	fn from(value: Decimal) -> Self {
		Value::Decimal(value)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map(Into::into).unwrap_or(Value::Null)
	}
}

#[cfg(test)]
mod tests {
	use std::cmp::Ordering::{Equal, Greater, Less};

	use super::*;

	#[test]
	fn test_compare_with_null_is_unknown() {
		assert_eq!(Value::Null.compare(&Value::Int(1)), None);
		assert_eq!(Value::Int(1).compare(&Value::Null), None);
		assert_eq!(Value::Null.compare(&Value::Null), None);
	}

	#[test]
	fn test_compare_promotes_int_to_decimal() {
		assert_eq!(Value::Int(2).compare(&Value::decimal("1.99")), Some(Greater));
		assert_eq!(Value::decimal("2.00").compare(&Value::Int(2)), Some(Equal));
	}

	#[test]
	fn test_compare_incompatible_kinds() {
		assert_eq!(Value::text("1").compare(&Value::Int(1)), None);
		assert_eq!(Value::Bool(true).compare(&Value::Int(1)), None);
	}

	#[test]
	fn test_sort_cmp_puts_null_first() {
		assert_eq!(Value::Null.sort_cmp(&Value::Int(i64::MIN)), Less);
		assert_eq!(Value::text("a").sort_cmp(&Value::Null), Greater);
		assert_eq!(Value::Null.sort_cmp(&Value::Null), Equal);
	}

	#[test]
	fn test_option_into_value() {
		assert_eq!(Value::from(None::<i64>), Value::Null);
		assert_eq!(Value::from(Some("x")), Value::text("x"));
	}

	#[test]
	fn test_serialize_untagged() {
		let json = serde_json::to_string(&vec![
			Value::Int(3),
			Value::text("Action"),
			Value::Null,
			Value::Bool(false),
		])
		.unwrap();
		assert_eq!(json, r#"[3,"Action",null,false]"#);
	}
}
