//! The router: construction, matching, and navigation.
//!
//! `Router::new` compiles and indexes every declared route up front; a
//! failure there is fatal and nothing of the router survives. At runtime the
//! navigation family (`push`, `back`, `forward`, `name_to_path`) looks
//! routes up by name in the registry, while [`Router::route`] walks the
//! segment trie. The two paths are deliberately separate: trie matching is
//! meant for resolving an externally supplied path (typically the initial
//! load), and its result carries the route's view or redirect target so the
//! embedding layer can feed a `push` by name afterwards.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Value;
use tracing::debug;

use crate::config::{BeforePush, RouterConfig};
use crate::error::{BuildError, RouterError};
use crate::history::{HistoryEntry, HistoryStack, Params};
use crate::location::{HistoryState, LocationSync, NoopLocation};
use crate::path::parse_url_path;
use crate::registry::{RouteEntry, RouteRegistry};
use crate::store::{Store, Subscription};
use crate::trie::RouteTrie;

/// The active transition inside a published snapshot.
#[derive(Debug, Clone)]
pub struct CurrentRoute<V> {
	pub name: String,
	pub params: Option<Params>,
	pub view: Option<V>,
}

/// Snapshot delivered to subscribers on subscribe and after every committed
/// transition.
#[derive(Debug, Clone)]
pub struct RouterState<V> {
	pub history: Vec<HistoryEntry>,
	pub cursor: usize,
	pub current: CurrentRoute<V>,
}

impl<V> RouterState<V> {
	fn initial() -> Self {
		Self {
			history: Vec::new(),
			cursor: 0,
			current: CurrentRoute {
				name: String::new(),
				params: None,
				view: None,
			},
		}
	}
}

/// Result of matching a concrete path against the route index.
///
/// A redirect carries the immediate target name only; chained redirects are
/// left to the caller to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved<'a, V> {
	View(&'a V),
	Redirect(&'a str),
}

/// A client-side navigation router over view handles of type `V`.
///
/// Each instance exclusively owns its history stack; two routers never share
/// navigation state. All operations are synchronous and single-threaded.
pub struct Router<V: Clone + 'static> {
	registry: RouteRegistry<V>,
	trie: RouteTrie,
	history: RefCell<HistoryStack>,
	store: Store<RouterState<V>>,
	location: Rc<dyn LocationSync>,
	fallback: Option<String>,
	before_push: Option<BeforePush>,
}

impl<V: Clone + 'static> Router<V> {
	/// Builds the registry and route index from `config`.
	///
	/// All-or-nothing: the first invalid declaration aborts construction.
	pub fn new(config: RouterConfig<V>) -> Result<Self, BuildError> {
		let mut trie = RouteTrie::default();
		let registry = RouteRegistry::build(config.routes, &mut trie)?;
		debug!(routes = registry.len(), "router constructed");

		Ok(Self {
			registry,
			trie,
			history: RefCell::new(HistoryStack::default()),
			store: Store::new(RouterState::initial()),
			location: config
				.location
				.unwrap_or_else(|| Rc::new(NoopLocation)),
			fallback: config.fallback,
			before_push: config.before_push,
		})
	}

	/// Registers a listener and immediately delivers the current snapshot.
	///
	/// Delivery is synchronous and follows subscription order on every
	/// committed transition.
	pub fn subscribe(&self, listener: impl Fn(&RouterState<V>) + 'static) -> Subscription {
		self.store.subscribe(listener)
	}

	/// Navigates to the route `name`, appending a history entry.
	///
	/// Every parameter the route's template declares must be present in
	/// `params`. A push that repeats the entry under the cursor is silently
	/// dropped: with params on both sides, one key/value pair in common
	/// counts as a repeat; with params absent on either side, the name match
	/// alone does. Pushing while the cursor sits behind the newest entry
	/// discards the forward branch first.
	pub fn push(&self, name: &str, params: Option<Params>) -> Result<(), RouterError> {
		let entry = self.entry(name)?;

		if entry.template.has_params() {
			let Some(values) = params.as_ref() else {
				return Err(RouterError::MissingParams {
					route: name.to_string(),
					expected: entry.template.params().to_vec(),
				});
			};
			for param in entry.template.params() {
				if !values.contains_key(param) {
					return Err(RouterError::MissingParam(param.clone()));
				}
			}
		}

		if self.history.borrow().is_repeat(name, params.as_ref()) {
			debug!(route = name, "push suppressed as repeat of current entry");
			return Ok(());
		}

		let path = entry.template.render(params.as_ref())?;
		self.history.borrow_mut().push(HistoryEntry {
			name: name.to_string(),
			params: params.clone(),
		});
		debug!(route = name, %path, "pushed");

		self.publish(entry, name, params.as_ref(), &path);
		Ok(())
	}

	/// Steps the cursor one entry back. See [`Router::back_by`].
	pub fn back(&self) -> Result<(), RouterError> {
		self.back_by(1)
	}

	/// Steps the cursor `n` entries back without removing anything.
	///
	/// A no-op (nothing published) when fewer than two entries exist or the
	/// cursor is already at the oldest entry. Negative steps are rejected,
	/// not clamped; zero is rejected as an invalid count.
	pub fn back_by(&self, n: i64) -> Result<(), RouterError> {
		let n = step_count(n)?;
		if !self.history.borrow_mut().step_back(n) {
			return Ok(());
		}
		debug!(n, "stepped back");
		self.publish_cursor()
	}

	/// Steps the cursor one entry forward. See [`Router::forward_by`].
	pub fn forward(&self) -> Result<(), RouterError> {
		self.forward_by(1)
	}

	/// Steps the cursor `n` entries forward, clamping at the newest entry.
	///
	/// Publishes even when the cursor was already at the newest entry; only
	/// an empty history makes this a no-op. Negative steps are rejected, not
	/// clamped; zero is rejected as an invalid count.
	pub fn forward_by(&self, n: i64) -> Result<(), RouterError> {
		let n = step_count(n)?;
		if !self.history.borrow_mut().step_forward(n) {
			return Ok(());
		}
		debug!(n, "stepped forward");
		self.publish_cursor()
	}

	/// Renders the path for the route `name` with the given parameter
	/// values.
	pub fn name_to_path(&self, name: &str, params: Option<&Params>) -> Result<String, RouterError> {
		if name.is_empty() {
			return Err(RouterError::InvalidRouteName(name.to_string()));
		}
		let entry = self.entry(name)?;
		entry.template.render(params)
	}

	/// Resolves a concrete path through the route index.
	///
	/// Intended for resolving an externally supplied path, typically the
	/// initial load; committed navigation goes through the registry by name
	/// instead. Redirect terminals are returned as-is, without chasing
	/// chains.
	pub fn route(&self, path: &str) -> Result<Resolved<'_, V>, RouterError> {
		let segments = parse_url_path(path)?;
		let index = self
			.trie
			.resolve(&segments)
			.ok_or_else(|| RouterError::NoRoute(path.to_string()))?;
		let entry = self.registry.entry(index);

		if let Some(view) = &entry.view {
			Ok(Resolved::View(view))
		} else if let Some(target) = &entry.redirect {
			Ok(Resolved::Redirect(target))
		} else {
			Err(RouterError::NoRoute(path.to_string()))
		}
	}

	/// The current snapshot, as a subscriber would receive it.
	pub fn current(&self) -> RouterState<V> {
		self.store.get()
	}

	/// The configured fallback route name.
	///
	/// Stored for the embedding layer; the engine itself never consults it
	/// when matching fails.
	pub fn fallback(&self) -> Option<&str> {
		self.fallback.as_deref()
	}

	/// The configured navigation interception hook.
	///
	/// Stored for the embedding layer; `push`, `back`, and `forward` do not
	/// call it.
	pub fn before_push(&self) -> Option<&BeforePush> {
		self.before_push.as_ref()
	}

	/// Metadata attached to the route `name` at declaration.
	pub fn metadata(&self, name: &str) -> Option<&HashMap<String, Value>> {
		self.registry.get(name).map(|entry| &entry.metadata)
	}

	/// Number of registered routes.
	pub fn route_count(&self) -> usize {
		self.registry.len()
	}

	fn entry(&self, name: &str) -> Result<&RouteEntry<V>, RouterError> {
		self.registry
			.get(name)
			.ok_or_else(|| RouterError::UnknownRoute(name.to_string()))
	}

	/// Resolves the entry under the cursor and publishes it.
	fn publish_cursor(&self) -> Result<(), RouterError> {
		let Some(HistoryEntry { name, params }) = self.history.borrow().current().cloned() else {
			return Ok(());
		};
		let entry = self.entry(&name)?;
		let path = entry.template.render(params.as_ref())?;
		self.publish(entry, &name, params.as_ref(), &path);
		Ok(())
	}

	/// Delivers the snapshot to subscribers, then hands the navigation to
	/// the location collaborator. The location call is fire-and-forget; a
	/// host-side failure leaves the in-memory history already committed.
	fn publish(&self, entry: &RouteEntry<V>, name: &str, params: Option<&Params>, path: &str) {
		let (history, cursor) = {
			let stack = self.history.borrow();
			(stack.entries().to_vec(), stack.cursor())
		};
		self.store.set(RouterState {
			history,
			cursor,
			current: CurrentRoute {
				name: name.to_string(),
				params: params.cloned(),
				view: entry.view.clone(),
			},
		});

		let mut state = HistoryState::new(name);
		if let Some(params) = params {
			state = state.with_params(params.clone());
		}
		self.location.push_state(&state, None, path);
	}
}

impl<V: Clone + 'static> std::fmt::Debug for Router<V> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Router")
			.field("routes", &self.registry.len())
			.field("history_len", &self.history.borrow().entries().len())
			.field("cursor", &self.history.borrow().cursor())
			.field("fallback", &self.fallback)
			.finish()
	}
}

fn step_count(n: i64) -> Result<u64, RouterError> {
	// A zero step is rejected as an invalid count, not treated as a no-op.
	if n == 0 {
		return Err(RouterError::InvalidStep(n));
	}
	if n < 0 {
		return Err(RouterError::UnsupportedStep(n));
	}
	Ok(n as u64)
}
