// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod aggregate;
pub mod internal;
pub mod load;
pub mod pipeline;
pub mod schema;

use std::fmt::Write;

/// Converts a component-specific error into a [`Diagnostic`].
pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Diagnostic {
	pub fn with_cause(mut self, cause: Diagnostic) -> Self {
		self.cause = Some(Box::new(cause));
		self
	}

	pub fn render(&self) -> String {
		let mut out = String::new();
		self.render_into(&mut out, 0);
		out
	}

	fn render_into(&self, out: &mut String, depth: usize) {
		let indent = "  ".repeat(depth);
		let _ = write!(out, "{indent}error[{}]: {}", self.code, self.message);
		if let Some(label) = &self.label {
			let _ = write!(out, "\n{indent}  --> {label}");
		}
		if let Some(help) = &self.help {
			let _ = write!(out, "\n{indent}  help: {help}");
		}
		for note in &self.notes {
			let _ = write!(out, "\n{indent}  note: {note}");
		}
		if let Some(cause) = &self.cause {
			let _ = write!(out, "\n{indent}  caused by:\n");
			cause.render_into(out, depth + 2);
		}
	}
}
