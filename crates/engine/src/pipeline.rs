// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	collections::{BTreeSet, HashMap},
	fmt::{Display, Formatter},
};

use rentlens_core::{Relation, SortKey, Table};
use rentlens_type::{
	Result,
	error::diagnostic::{load::table_not_found, pipeline::limit_without_sort},
	return_error,
};
use tracing::{debug, instrument, trace};

use crate::{
	Aggregation, JoinKind, Predicate, Projection, WindowSpec, aggregate, filter, join, limit, project, row_number,
	sort,
};

/// One step of a [`Pipeline`]. Every stage consumes the relation produced by
/// the previous one.
#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
	/// Joins the current relation with a catalog table on `(left, right)` column pairs.
	Join {
		table: Table,
		on: Vec<(String, String)>,
		kind: JoinKind,
	},
	Filter(Predicate),
	Aggregate {
		group_by: Vec<String>,
		aggregations: Vec<Aggregation>,
	},
	Window(WindowSpec),
	Sort(Vec<SortKey>),
	Limit(usize),
	Project(Vec<Projection>),
}

impl Stage {
	pub fn inner_join<L: Into<String>, R: Into<String>>(table: Table, on: impl IntoIterator<Item = (L, R)>) -> Self {
		Self::join(table, on, JoinKind::Inner)
	}

	pub fn left_join<L: Into<String>, R: Into<String>>(table: Table, on: impl IntoIterator<Item = (L, R)>) -> Self {
		Self::join(table, on, JoinKind::LeftOuter)
	}

	fn join<L: Into<String>, R: Into<String>>(
		table: Table,
		on: impl IntoIterator<Item = (L, R)>,
		kind: JoinKind,
	) -> Self {
		Stage::Join {
			table,
			on: on.into_iter().map(|(l, r)| (l.into(), r.into())).collect(),
			kind,
		}
	}

	pub fn aggregate<S: Into<String>>(
		group_by: impl IntoIterator<Item = S>,
		aggregations: impl IntoIterator<Item = Aggregation>,
	) -> Self {
		Stage::Aggregate {
			group_by: group_by.into_iter().map(Into::into).collect(),
			aggregations: aggregations.into_iter().collect(),
		}
	}

	pub fn sort(keys: impl IntoIterator<Item = SortKey>) -> Self {
		Stage::Sort(keys.into_iter().collect())
	}

	pub fn project(projections: impl IntoIterator<Item = Projection>) -> Self {
		Stage::Project(projections.into_iter().collect())
	}

	fn name(&self) -> &'static str {
		match self {
			Stage::Join {
				..
			} => "join",
			Stage::Filter(_) => "filter",
			Stage::Aggregate {
				..
			} => "aggregate",
			Stage::Window(_) => "window",
			Stage::Sort(_) => "sort",
			Stage::Limit(_) => "limit",
			Stage::Project(_) => "project",
		}
	}
}

fn join_list<T: Display>(items: &[T]) -> String {
	items.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

impl Display for Stage {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Stage::Join {
				table,
				on,
				kind,
			} => {
				let on = on.iter().map(|(l, r)| format!("{l} = {table}.{r}")).collect::<Vec<_>>().join(" AND ");
				write!(f, "{kind} JOIN {table} ON {on}")
			}
			Stage::Filter(predicate) => write!(f, "FILTER {predicate}"),
			Stage::Aggregate {
				group_by,
				aggregations,
			} => {
				if group_by.is_empty() {
					write!(f, "AGGREGATE {}", join_list(aggregations))
				} else {
					write!(f, "AGGREGATE {} BY {}", join_list(aggregations), group_by.join(", "))
				}
			}
			Stage::Window(spec) => write!(f, "WINDOW {spec}"),
			Stage::Sort(keys) => write!(f, "SORT {}", join_list(keys)),
			Stage::Limit(n) => write!(f, "LIMIT {n}"),
			Stage::Project(projections) => write!(f, "PROJECT {}", join_list(projections)),
		}
	}
}

/// A source table followed by the stages applied to it, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipeline {
	source: Table,
	stages: Vec<Stage>,
}

impl Pipeline {
	/// Rejects a `Limit` that does not directly follow a `Sort`. Filters and
	/// projections keep row order and may sit between the two.
	pub fn new(source: Table, stages: Vec<Stage>) -> Result<Self> {
		let mut ordered = false;
		for stage in &stages {
			match stage {
				Stage::Sort(_) => ordered = true,
				Stage::Join {
					..
				}
				| Stage::Aggregate {
					..
				}
				| Stage::Window(_) => ordered = false,
				Stage::Limit(n) if !ordered => return_error!(limit_without_sort(*n)),
				Stage::Limit(_) | Stage::Filter(_) | Stage::Project(_) => {}
			}
		}
		Ok(Self {
			source,
			stages,
		})
	}

	pub fn source(&self) -> Table {
		self.source
	}

	pub fn stages(&self) -> &[Stage] {
		&self.stages
	}

	/// Every table the pipeline reads, without duplicates.
	pub fn tables(&self) -> BTreeSet<Table> {
		let mut tables = BTreeSet::from([self.source]);
		for stage in &self.stages {
			if let Stage::Join {
				table,
				..
			} = stage
			{
				tables.insert(*table);
			}
		}
		tables
	}

	#[instrument(name = "engine::pipeline", level = "trace", skip_all, fields(source = %self.source, stages = self.stages.len()))]
	pub fn execute(&self, snapshot: &Snapshot) -> Result<Relation> {
		let mut current = snapshot.get(self.source)?.clone();
		for stage in &self.stages {
			current = apply(stage, &current, snapshot)?;
			trace!(stage = stage.name(), rows = current.len(), "stage complete");
		}
		debug!(rows = current.len(), "pipeline complete");
		Ok(current)
	}
}

fn apply(stage: &Stage, input: &Relation, snapshot: &Snapshot) -> Result<Relation> {
	match stage {
		Stage::Join {
			table,
			on,
			kind,
		} => {
			let right = snapshot.get(*table)?;
			let left_keys: Vec<&str> = on.iter().map(|(l, _)| l.as_str()).collect();
			let right_keys: Vec<&str> = on.iter().map(|(_, r)| r.as_str()).collect();
			join(input, right, &left_keys, &right_keys, *kind)
		}
		Stage::Filter(predicate) => filter(input, predicate),
		Stage::Aggregate {
			group_by,
			aggregations,
		} => aggregate(input, group_by.as_slice(), aggregations),
		Stage::Window(spec) => row_number(input, spec),
		Stage::Sort(keys) => sort(input, keys),
		Stage::Limit(n) => Ok(limit(input, *n)),
		Stage::Project(projections) => project(input, projections),
	}
}

impl Display for Pipeline {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "FROM {}", self.source)?;
		for stage in &self.stages {
			write!(f, "\n  {stage}")?;
		}
		Ok(())
	}
}

/// The loaded relations a pipeline executes against.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
	relations: HashMap<Table, Relation>,
}

impl Snapshot {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, table: Table, relation: Relation) {
		self.relations.insert(table, relation);
	}

	pub fn get(&self, table: Table) -> Result<&Relation> {
		match self.relations.get(&table) {
			Some(relation) => Ok(relation),
			None => return_error!(table_not_found(table.name())),
		}
	}

	pub fn len(&self) -> usize {
		self.relations.len()
	}

	pub fn is_empty(&self) -> bool {
		self.relations.is_empty()
	}
}

impl FromIterator<(Table, Relation)> for Snapshot {
	fn from_iter<I: IntoIterator<Item = (Table, Relation)>>(iter: I) -> Self {
		Self {
			relations: iter.into_iter().collect(),
		}
	}
}
