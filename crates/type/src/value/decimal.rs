// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::{Add, AddAssign},
	str::FromStr,
};

use bigdecimal::{BigDecimal, ParseBigDecimalError};
use num_traits::Zero;
use serde::Serialize;

/// Exact decimal used for every monetary column and sum.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Decimal(BigDecimal);

impl Decimal {
	pub fn new(value: BigDecimal) -> Self {
		Self(value)
	}

	pub fn zero() -> Self {
		Self(BigDecimal::zero())
	}

	pub fn is_zero(&self) -> bool {
		self.0.is_zero()
	}

	pub fn inner(&self) -> &BigDecimal {
		&self.0
	}
}

impl FromStr for Decimal {
	type Err = ParseBigDecimalError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		BigDecimal::from_str(s.trim()).map(Self)
	}
}

impl From<i64> for Decimal {
	fn from(value: i64) -> Self {
		Self(BigDecimal::from(value))
	}
}

impl Add for Decimal {
	type Output = Decimal;

	fn add(self, rhs: Self) -> Self::Output {
		Self(self.0 + rhs.0)
	}
}

impl AddAssign<&Decimal> for Decimal {
	fn add_assign(&mut self, rhs: &Decimal) {
		self.0 += &rhs.0;
	}
}

impl Display for Decimal {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}
