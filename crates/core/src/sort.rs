// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
	Asc,
	Desc,
}

impl SortDirection {
	pub fn apply(&self, ord: Ordering) -> Ordering {
		match self {
			SortDirection::Asc => ord,
			SortDirection::Desc => ord.reverse(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
	pub column: String,
	pub direction: SortDirection,
}

impl SortKey {
	pub fn asc(column: impl Into<String>) -> Self {
		Self {
			column: column.into(),
			direction: SortDirection::Asc,
		}
	}

	pub fn desc(column: impl Into<String>) -> Self {
		Self {
			column: column.into(),
			direction: SortDirection::Desc,
		}
	}
}

impl Display for SortKey {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.direction {
			SortDirection::Asc => write!(f, "{} ASC", self.column),
			SortDirection::Desc => write!(f, "{} DESC", self.column),
		}
	}
}
