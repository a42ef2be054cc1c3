//! Route registry construction.
//!
//! Consumes the declared routes in order, validating names, target
//! exclusivity, and template uniqueness, compiling every template, and
//! filling the route index as it goes. Construction is all-or-nothing: the
//! first failure aborts the build and no partially-filled registry escapes.

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::config::RouteDef;
use crate::error::BuildError;
use crate::template::PathTemplate;
use crate::trie::RouteTrie;

/// One registered route with its compiled template.
#[derive(Debug)]
pub(crate) struct RouteEntry<V> {
	pub name: String,
	pub template: PathTemplate,
	pub view: Option<V>,
	pub redirect: Option<String>,
	pub metadata: HashMap<String, Value>,
}

/// Immutable after construction; addressable by name and by the literal
/// template string.
#[derive(Debug)]
pub(crate) struct RouteRegistry<V> {
	entries: Vec<RouteEntry<V>>,
	by_name: HashMap<String, usize>,
	by_template: HashMap<String, usize>,
}

/// Route names start with a letter; the rest are letters, digits, `-`, `.`,
/// or `_`.
pub(crate) fn validate_route_name(name: &str) -> Result<(), BuildError> {
	let mut chars = name.char_indices();
	let Some((_, first)) = chars.next() else {
		return Err(BuildError::EmptyRouteName);
	};
	if !first.is_ascii_alphabetic() {
		return Err(BuildError::InvalidRouteName {
			name: name.to_string(),
			ch: first,
			at: 0,
		});
	}
	for (at, ch) in chars {
		if !ch.is_ascii_alphanumeric() && !matches!(ch, '-' | '.' | '_') {
			return Err(BuildError::InvalidRouteName {
				name: name.to_string(),
				ch,
				at,
			});
		}
	}
	Ok(())
}

impl<V> RouteRegistry<V> {
	/// Validates and compiles every declared route in declaration order,
	/// inserting each into `trie`.
	pub fn build(
		routes: Vec<(String, RouteDef<V>)>,
		trie: &mut RouteTrie,
	) -> Result<Self, BuildError> {
		let mut registry = Self {
			entries: Vec::new(),
			by_name: HashMap::new(),
			by_template: HashMap::new(),
		};

		for (name, def) in routes {
			validate_route_name(&name)?;

			if registry.by_name.contains_key(&name) {
				return Err(BuildError::DuplicateRoute(name));
			}

			if def.view.is_some() && def.redirect.is_some() {
				return Err(BuildError::AmbiguousTarget(name));
			}

			let template = PathTemplate::parse(&def.path).map_err(|source| BuildError::Template {
				route: name.clone(),
				source,
			})?;

			// Template uniqueness is keyed on the literal string, so two
			// templates differing only in a parameter's name both register
			// and collapse onto one index branch.
			if let Some(&previous) = registry.by_template.get(template.raw()) {
				return Err(BuildError::DuplicateTemplate {
					route: name,
					previous: registry.entries[previous].name.clone(),
					template: template.raw().to_string(),
				});
			}

			let index = registry.entries.len();
			trie.insert(template.tokens(), index);
			debug!(route = %name, template = %template.raw(), "route registered");

			registry.by_name.insert(name.clone(), index);
			registry
				.by_template
				.insert(template.raw().to_string(), index);
			registry.entries.push(RouteEntry {
				name,
				template,
				view: def.view,
				redirect: def.redirect,
				metadata: def.metadata,
			});
		}

		Ok(registry)
	}

	pub fn get(&self, name: &str) -> Option<&RouteEntry<V>> {
		self.by_name.get(name).map(|&index| &self.entries[index])
	}

	pub fn entry(&self, index: usize) -> &RouteEntry<V> {
		&self.entries[index]
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}
}
