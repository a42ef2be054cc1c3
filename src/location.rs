//! Host location synchronization.
//!
//! The router records every committed navigation with the host environment
//! through [`LocationSync`], mirroring the browser's
//! `history.pushState(state, title, path)` shape. Calls are fire-and-forget:
//! the router does not wait for acknowledgment, retry, or roll back its
//! in-memory history when the host update fails. That gap is accepted, not
//! papered over.

use serde::{Deserialize, Serialize};

use crate::history::Params;

/// State payload recorded with each native history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
	pub route: String,
	pub params: Option<Params>,
}

impl HistoryState {
	pub fn new(route: impl Into<String>) -> Self {
		Self {
			route: route.into(),
			params: None,
		}
	}

	pub fn with_params(mut self, params: Params) -> Self {
		self.params = Some(params);
		self
	}
}

/// Address-bar and native-history collaborator supplied by the host.
pub trait LocationSync {
	/// Records a navigation: `state` is the payload to associate with the
	/// native entry, `title` is the (usually unused) document title, `path`
	/// is the concrete path to display.
	fn push_state(&self, state: &HistoryState, title: Option<&str>, path: &str);
}

/// Default sink that drops every update. Used when no host integration is
/// configured, e.g. in tests or headless embedding.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLocation;

impl LocationSync for NoopLocation {
	fn push_state(&self, _state: &HistoryState, _title: Option<&str>, _path: &str) {}
}
