// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Deref;

use rentlens_type::Value;
use serde::Serialize;

/// Values positioned by the owning relation's schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Row(Vec<Value>);

impl Row {
	pub fn new(values: Vec<Value>) -> Self {
		Self(values)
	}

	pub fn values(&self) -> &[Value] {
		&self.0
	}

	pub fn into_values(self) -> Vec<Value> {
		self.0
	}

	/// Picks the values at `indices`, in that order.
	pub fn project(&self, indices: &[usize]) -> Row {
		Row(indices.iter().map(|&idx| self.0[idx].clone()).collect())
	}

	/// This row's values followed by `other`'s.
	pub fn concat(&self, other: impl IntoIterator<Item = Value>) -> Row {
		let mut values = self.0.clone();
		values.extend(other);
		Row(values)
	}
}

impl Deref for Row {
	type Target = [Value];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl From<Vec<Value>> for Row {
	fn from(values: Vec<Value>) -> Self {
		Self(values)
	}
}

/// Builds a [`Row`] from expressions convertible into [`Value`].
#[macro_export]
macro_rules! row {
	($($value:expr),* $(,)?) => {
		$crate::Row::new(vec![$($crate::__private::Value::from($value)),*])
	};
}
