// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter, Write};

use crate::Relation;

impl Display for Relation {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let headers: Vec<&str> = self.schema().names().collect();
		let cells: Vec<Vec<String>> =
			self.rows().iter().map(|row| row.iter().map(|v| v.to_string()).collect()).collect();

		let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
		for row in &cells {
			for (idx, cell) in row.iter().enumerate() {
				widths[idx] = widths[idx].max(cell.chars().count());
			}
		}

		let separator = {
			let mut line = String::from("+");
			for width in &widths {
				line.push_str(&"-".repeat(width + 2));
				line.push('+');
			}
			line
		};

		writeln!(f, "{separator}")?;
		write_line(f, headers.iter().copied(), &widths)?;
		writeln!(f, "{separator}")?;
		for row in &cells {
			write_line(f, row.iter().map(String::as_str), &widths)?;
		}
		writeln!(f, "{separator}")
	}
}

fn write_line<'a>(f: &mut Formatter<'_>, cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> std::fmt::Result {
	let mut line = String::from("|");
	for (cell, width) in cells.zip(widths) {
		let padding = width - cell.chars().count();
		write!(line, " {cell}{} |", " ".repeat(padding))?;
	}
	writeln!(f, "{line}")
}
