//! Router construction input.
//!
//! A [`RouterConfig`] is built up with chained calls and consumed once by
//! [`crate::Router::new`]. Routes are kept in declaration order; validation
//! happens at construction, not here.

use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Value;

use crate::history::Params;
use crate::location::LocationSync;

/// Outcome of a [`BeforePush`] hook: the (possibly rewritten) target of a
/// navigation.
#[derive(Debug, Clone)]
pub struct PushIntent {
	pub name: String,
	pub params: Option<Params>,
	pub redirect: bool,
}

/// Interception hook signature accepted by [`RouterConfig::before_push`].
///
/// Reserved for an embedding layer: the engine stores the hook and exposes it
/// through [`crate::Router::before_push`], but `push`, `back`, and `forward`
/// never call it.
pub type BeforePush = Rc<dyn Fn(&str, Option<&Params>) -> PushIntent>;

/// One route declaration: a path template plus either a view handle or a
/// redirect target (never both), and an opaque metadata mapping passed
/// through untouched.
pub struct RouteDef<V> {
	pub(crate) path: String,
	pub(crate) view: Option<V>,
	pub(crate) redirect: Option<String>,
	pub(crate) metadata: HashMap<String, Value>,
}

impl<V> RouteDef<V> {
	/// A route rendering `view`.
	pub fn view(path: impl Into<String>, view: V) -> Self {
		Self {
			path: path.into(),
			view: Some(view),
			redirect: None,
			metadata: HashMap::new(),
		}
	}

	/// A route redirecting to another route by name.
	pub fn redirect(path: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			view: None,
			redirect: Some(target.into()),
			metadata: HashMap::new(),
		}
	}

	/// A route with neither view nor redirect. Its path still occupies a
	/// branch in the route index but resolves to not-found at match time.
	pub fn bare(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			view: None,
			redirect: None,
			metadata: HashMap::new(),
		}
	}

	/// Attaches one metadata key. Metadata is opaque to the engine.
	pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
		self.metadata.insert(key.into(), value);
		self
	}
}

/// Construction input for [`crate::Router`].
pub struct RouterConfig<V> {
	pub(crate) routes: Vec<(String, RouteDef<V>)>,
	pub(crate) fallback: Option<String>,
	pub(crate) before_push: Option<BeforePush>,
	pub(crate) location: Option<Rc<dyn LocationSync>>,
}

impl<V> RouterConfig<V> {
	pub fn new() -> Self {
		Self {
			routes: Vec::new(),
			fallback: None,
			before_push: None,
			location: None,
		}
	}

	/// Declares a named route. Declaration order is preserved and matters
	/// for error attribution during construction.
	pub fn route(mut self, name: impl Into<String>, def: RouteDef<V>) -> Self {
		self.routes.push((name.into(), def));
		self
	}

	/// Names the route an embedding layer should fall back to when matching
	/// fails. Stored and exposed, never consulted by the engine itself.
	pub fn fallback(mut self, name: impl Into<String>) -> Self {
		self.fallback = Some(name.into());
		self
	}

	/// Installs the navigation interception hook. See [`BeforePush`].
	pub fn before_push(
		mut self,
		hook: impl Fn(&str, Option<&Params>) -> PushIntent + 'static,
	) -> Self {
		self.before_push = Some(Rc::new(hook));
		self
	}

	/// Supplies the host location collaborator. Defaults to
	/// [`crate::NoopLocation`].
	pub fn location(mut self, location: Rc<dyn LocationSync>) -> Self {
		self.location = Some(location);
		self
	}
}

impl<V> Default for RouterConfig<V> {
	fn default() -> Self {
		Self::new()
	}
}
