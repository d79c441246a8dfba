// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::Value;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ValueKind {
	Null,
	Bool,
	Int,
	Decimal,
	Text,
}

impl ValueKind {
	pub fn is_numeric(&self) -> bool {
		matches!(self, ValueKind::Int | ValueKind::Decimal)
	}

	/// Whether a column of this kind may hold `value`.
	pub fn accepts(&self, value: &Value) -> bool {
		value.is_null() || value.kind() == *self
	}

	/// Whether values of the two kinds can be ordered against each other.
	pub fn is_comparable(&self, other: ValueKind) -> bool {
		*self == other || (self.is_numeric() && other.is_numeric()) || *self == ValueKind::Null || other == ValueKind::Null
	}
}

impl Display for ValueKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ValueKind::Null => f.write_str("NULL"),
			ValueKind::Bool => f.write_str("BOOL"),
			ValueKind::Int => f.write_str("INT"),
			ValueKind::Decimal => f.write_str("DECIMAL"),
			ValueKind::Text => f.write_str("TEXT"),
		}
	}
}

impl From<&Value> for ValueKind {
	fn from(value: &Value) -> Self {
		match value {
			Value::Null => ValueKind::Null,
			Value::Bool(_) => ValueKind::Bool,
			Value::Int(_) => ValueKind::Int,
			Value::Decimal(_) => ValueKind::Decimal,
			Value::Text(_) => ValueKind::Text,
		}
	}
}
