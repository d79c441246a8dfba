// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Relational stages over immutable relations and the pipeline that chains them.
//!
//! Every stage consumes its whole input and produces a fresh [`Relation`];
//! nothing is streamed and nothing is mutated in place.
//!
//! [`Relation`]: rentlens_core::Relation

pub use aggregate::{Accumulator, Aggregation, aggregate};
pub use filter::{BoundPredicate, CompareOp, Predicate, Truth, filter};
pub use join::{JoinKind, join};
pub use pipeline::{Pipeline, Snapshot, Stage};
pub use project::{Projection, project};
pub use sort::{limit, sort};
pub use window::{WindowSpec, row_number};

mod aggregate;
mod filter;
mod join;
mod pipeline;
mod project;
mod sort;
mod window;
