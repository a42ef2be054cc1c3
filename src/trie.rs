//! The route index: a prefix tree over path segments.
//!
//! Static branches are keyed by their exact segment text; every node carries
//! at most one parameter branch, shared by all parameter tokens at that
//! depth. Parameter names are not part of the tree's identity, only segment
//! position is, so two templates that differ only in how a parameter is
//! named collapse onto the same branch. That is a documented routing
//! limitation, not an error.

use std::collections::HashMap;

use crate::template::Token;

#[derive(Debug, Default)]
struct TrieNode {
	static_children: HashMap<String, TrieNode>,
	param_child: Option<Box<TrieNode>>,
	terminal: Option<usize>,
}

/// Prefix tree mapping tokenized paths to registry entry indices.
#[derive(Debug, Default)]
pub(crate) struct RouteTrie {
	root: TrieNode,
}

impl RouteTrie {
	/// Inserts a compiled token sequence terminating at registry entry
	/// `entry`.
	///
	/// A zero-token sequence assigns the root's terminal. When two templates
	/// collapse onto one branch, the later terminal overwrites the earlier
	/// one.
	pub fn insert(&mut self, tokens: &[Token], entry: usize) {
		let mut node = &mut self.root;
		for token in tokens {
			node = if token.is_param {
				&mut **node.param_child.get_or_insert_with(Box::default)
			} else {
				node.static_children.entry(token.text.clone()).or_default()
			};
		}
		node.terminal = Some(entry);
	}

	/// Resolves tokenized path segments to a terminal entry index.
	///
	/// At each level the static child matching the segment text wins;
	/// otherwise the walk descends into the parameter child. `None` means no
	/// branch matched or the final node carries no terminal.
	pub fn resolve(&self, segments: &[String]) -> Option<usize> {
		let mut node = &self.root;
		for segment in segments {
			node = match node.static_children.get(segment.as_str()) {
				Some(child) => child,
				None => node.param_child.as_deref()?,
			};
		}
		node.terminal
	}
}
