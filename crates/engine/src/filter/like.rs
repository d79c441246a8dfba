// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// A compiled LIKE pattern: `%` matches any run of characters, `_` exactly one,
/// everything else itself. The pattern is anchored at both ends.
#[derive(Debug, Clone)]
pub struct LikePattern {
	tokens: Vec<char>,
	case_insensitive: bool,
}

impl LikePattern {
	pub fn new(pattern: &str, case_insensitive: bool) -> Self {
		let tokens = if case_insensitive {
			pattern.chars().flat_map(char::to_lowercase).collect()
		} else {
			pattern.chars().collect()
		};
		Self {
			tokens,
			case_insensitive,
		}
	}

	pub fn matches(&self, value: &str) -> bool {
		let value: Vec<char> = if self.case_insensitive {
			value.chars().flat_map(char::to_lowercase).collect()
		} else {
			value.chars().collect()
		};
		let pattern = &self.tokens;

		let mut value_pos = 0usize;
		let mut pattern_pos = 0usize;
		let mut star_pattern_pos: Option<usize> = None;
		let mut star_value_pos = 0usize;

		while value_pos < value.len() {
			if pattern_pos < pattern.len() {
				let token = pattern[pattern_pos];
				if token == '%' {
					star_pattern_pos = Some(pattern_pos);
					pattern_pos += 1;
					star_value_pos = value_pos;
					continue;
				}
				if token == '_' || token == value[value_pos] {
					pattern_pos += 1;
					value_pos += 1;
					continue;
				}
			}

			// backtrack: let the last % swallow one more character
			let Some(star_pos) = star_pattern_pos else {
				return false;
			};
			pattern_pos = star_pos + 1;
			star_value_pos += 1;
			value_pos = star_value_pos;
		}

		while pattern_pos < pattern.len() && pattern[pattern_pos] == '%' {
			pattern_pos += 1;
		}
		pattern_pos == pattern.len()
	}
}

#[cfg(test)]
mod tests {
	use super::LikePattern;

	fn like(pattern: &str, value: &str) -> bool {
		LikePattern::new(pattern, false).matches(value)
	}

	#[test]
	fn test_anchored_without_wildcards() {
		assert!(like("Children", "Children"));
		assert!(!like("Child", "Children"));
		assert!(!like("hildren", "Children"));
	}

	#[test]
	fn test_percent() {
		assert!(like("a%", "abu dhabi"));
		assert!(!like("a%", "Abu Dhabi"));
		assert!(like("%-%", "Jalib al-Shuyukh"));
		assert!(!like("%-%", "Lethbridge"));
		assert!(like("%", ""));
		assert!(like("%%", "x"));
	}

	#[test]
	fn test_underscore() {
		assert!(like("_at", "cat"));
		assert!(!like("_at", "at"));
		assert!(!like("_at", "chat"));
		assert!(like("c_t%", "cats"));
	}

	#[test]
	fn test_backtracking() {
		assert!(like("%ab%ab", "xabyabab"));
		assert!(!like("%ab%ab", "xabyab_"));
	}

	#[test]
	fn test_case_insensitive() {
		let pattern = LikePattern::new("a%", true);
		assert!(pattern.matches("Abu Dhabi"));
		assert!(pattern.matches("akishima"));
		assert!(!pattern.matches("Baku"));
	}
}
