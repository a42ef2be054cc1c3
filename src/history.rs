//! The navigation history stack.
//!
//! An ordered list of visited `(route, parameters)` entries with a movable
//! cursor, mirroring browser history semantics: pushing while the cursor sits
//! behind the last entry discards the forward branch, while stepping the
//! cursor never removes entries.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Route parameter values keyed by parameter name.
pub type Params = HashMap<String, String>;

/// One visited transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
	pub name: String,
	pub params: Option<Params>,
}

/// The entry list and cursor owned by a single router instance.
///
/// Invariant: `cursor < entries.len()` whenever `entries` is non-empty.
#[derive(Debug, Default)]
pub(crate) struct HistoryStack {
	entries: Vec<HistoryEntry>,
	cursor: usize,
}

impl HistoryStack {
	pub fn entries(&self) -> &[HistoryEntry] {
		&self.entries
	}

	pub fn cursor(&self) -> usize {
		self.cursor
	}

	/// The entry under the cursor, if any.
	pub fn current(&self) -> Option<&HistoryEntry> {
		self.entries.get(self.cursor)
	}

	/// Whether pushing `(name, params)` would repeat the entry under the
	/// cursor.
	///
	/// When both param sets are present, a single key carried by both sides
	/// with an equal value is enough to count the push as a repeat, even if
	/// every other key differs. When either side has no params, a name match
	/// alone suffices. Kept as-is; materially different navigations can be
	/// swallowed by the one-key rule.
	pub fn is_repeat(&self, name: &str, params: Option<&Params>) -> bool {
		let Some(current) = self.current() else {
			return false;
		};
		if current.name != name {
			return false;
		}
		match (&current.params, params) {
			(Some(current_params), Some(params)) => params
				.iter()
				.any(|(key, value)| current_params.get(key) == Some(value)),
			_ => true,
		}
	}

	/// Appends an entry and moves the cursor onto it.
	///
	/// If the cursor is not already on the last entry, everything after it is
	/// discarded first.
	pub fn push(&mut self, entry: HistoryEntry) {
		if !self.entries.is_empty() && self.cursor != self.entries.len() - 1 {
			self.entries.truncate(self.cursor + 1);
		}
		self.entries.push(entry);
		self.cursor = self.entries.len() - 1;
	}

	/// Moves the cursor `n` entries back.
	///
	/// Returns `false` (nothing to resolve or publish) when fewer than two
	/// entries exist or the cursor already sits at the oldest entry. The
	/// clamp compares `n` against the total entry count rather than the
	/// distance left of the cursor, so an oversized step from a mid-stack
	/// cursor lands on the oldest entry by saturation instead of by the
	/// comparison. Kept as-is.
	pub fn step_back(&mut self, n: u64) -> bool {
		if self.entries.len() < 2 || self.cursor == 0 {
			return false;
		}
		if n as usize > self.entries.len() {
			self.cursor = 0;
		} else {
			self.cursor = self.cursor.saturating_sub(n as usize);
		}
		true
	}

	/// Moves the cursor `n` entries forward, clamping at the newest entry.
	///
	/// Returns `false` only on an empty stack. A forward step at the newest
	/// entry still reports `true` and gets republished, unlike `step_back`.
	/// Kept as-is.
	pub fn step_forward(&mut self, n: u64) -> bool {
		if self.entries.is_empty() {
			return false;
		}
		if self.cursor.saturating_add(n as usize) >= self.entries.len() {
			self.cursor = self.entries.len() - 1;
		} else {
			self.cursor += n as usize;
		}
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn entry(name: &str) -> HistoryEntry {
		HistoryEntry {
			name: name.to_string(),
			params: None,
		}
	}

	fn entry_with(name: &str, pairs: &[(&str, &str)]) -> HistoryEntry {
		let params = pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		HistoryEntry {
			name: name.to_string(),
			params: Some(params),
		}
	}

	#[test]
	fn push_appends_and_moves_cursor() {
		let mut stack = HistoryStack::default();
		stack.push(entry("a"));
		stack.push(entry("b"));
		assert_eq!(stack.entries().len(), 2);
		assert_eq!(stack.cursor(), 1);
		assert_eq!(stack.current().unwrap().name, "b");
	}

	#[test]
	fn push_behind_cursor_discards_forward_branch() {
		let mut stack = HistoryStack::default();
		stack.push(entry("a"));
		stack.push(entry("b"));
		stack.push(entry("c"));
		assert!(stack.step_back(2));
		assert_eq!(stack.cursor(), 0);

		stack.push(entry("d"));
		let names: Vec<&str> = stack.entries().iter().map(|e| e.name.as_str()).collect();
		assert_eq!(names, ["a", "d"]);
		assert_eq!(stack.cursor(), 1);
	}

	#[test]
	fn repeat_requires_only_one_matching_key() {
		let mut stack = HistoryStack::default();
		stack.push(entry_with("a", &[("x", "1")]));

		let incoming = entry_with("a", &[("x", "1"), ("y", "2")]);
		assert!(stack.is_repeat("a", incoming.params.as_ref()));

		let different = entry_with("a", &[("x", "9"), ("y", "2")]);
		assert!(!stack.is_repeat("a", different.params.as_ref()));
	}

	#[test]
	fn repeat_with_absent_params_matches_by_name() {
		let mut stack = HistoryStack::default();
		stack.push(entry("a"));
		assert!(stack.is_repeat("a", None));
		assert!(!stack.is_repeat("b", None));

		let params: Params = [("x".to_string(), "1".to_string())].into_iter().collect();
		assert!(stack.is_repeat("a", Some(&params)));
	}

	#[test]
	fn back_is_a_no_op_below_two_entries() {
		let mut stack = HistoryStack::default();
		assert!(!stack.step_back(1));
		stack.push(entry("a"));
		assert!(!stack.step_back(1));
		assert_eq!(stack.cursor(), 0);
	}

	#[test]
	fn back_clamps_oversized_steps_to_the_oldest_entry() {
		let mut stack = HistoryStack::default();
		for name in ["a", "b", "c"] {
			stack.push(entry(name));
		}
		assert!(stack.step_back(99));
		assert_eq!(stack.cursor(), 0);
	}

	#[test]
	fn back_saturates_when_step_exceeds_distance_but_not_length() {
		let mut stack = HistoryStack::default();
		for name in ["a", "b", "c"] {
			stack.push(entry(name));
		}
		assert!(stack.step_back(1));
		assert_eq!(stack.cursor(), 1);
		// n == 3 equals the entry count, so the total-length clamp does not
		// trigger and the subtraction saturates.
		assert!(stack.step_back(3));
		assert_eq!(stack.cursor(), 0);
	}

	#[test]
	fn forward_clamps_to_the_newest_entry() {
		let mut stack = HistoryStack::default();
		for name in ["a", "b", "c"] {
			stack.push(entry(name));
		}
		assert!(stack.step_back(2));
		assert!(stack.step_forward(99));
		assert_eq!(stack.cursor(), 2);
	}

	#[test]
	fn forward_at_the_newest_entry_still_reports_movement() {
		let mut stack = HistoryStack::default();
		stack.push(entry("a"));
		assert!(stack.step_forward(1));
		assert_eq!(stack.cursor(), 0);
	}

	#[test]
	fn forward_on_empty_stack_is_a_no_op() {
		let mut stack = HistoryStack::default();
		assert!(!stack.step_forward(1));
	}

	#[test]
	fn stepping_never_removes_entries() {
		let mut stack = HistoryStack::default();
		for name in ["a", "b", "c"] {
			stack.push(entry(name));
		}
		stack.step_back(2);
		stack.step_forward(1);
		assert_eq!(stack.entries().len(), 3);
		assert_eq!(stack.current().unwrap().name, "b");
	}
}
