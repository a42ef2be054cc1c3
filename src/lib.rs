//! Client-side navigation router.
//!
//! Named routes are declared as parameterized path templates and mapped to
//! opaque view handles. Concrete paths resolve against the declarations
//! through a segment trie, and committed navigations accumulate in a linear,
//! cursor-addressable history stack with browser-like push/back/forward
//! semantics.
//!
//! ## Overview
//!
//! - [`PathTemplate`] compiles a template such as `/users/:id` into tokens
//!   and parameter names with precise character-class validation.
//! - [`Router::new`] validates and indexes every declared route up front;
//!   any invalid declaration fails the whole build.
//! - [`Router::push`], [`Router::back`], and [`Router::forward`] drive the
//!   history stack and publish a state snapshot to subscribers and to the
//!   host's [`LocationSync`] collaborator.
//! - [`Router::route`] resolves a concrete path (typically the initial
//!   load) to the matched route's view or redirect target.
//!
//! ## Example
//!
//! ```
//! use wayfarer::{Resolved, RouteDef, Router, RouterConfig};
//!
//! let router = Router::new(
//! 	RouterConfig::new()
//! 		.route("home", RouteDef::view("/home", "home view"))
//! 		.route("user", RouteDef::view("/users/:id", "user view")),
//! )
//! .unwrap();
//!
//! router.push("home", None).unwrap();
//! assert_eq!(router.current().current.name, "home");
//!
//! match router.route("/users/42").unwrap() {
//! 	Resolved::View(view) => assert_eq!(*view, "user view"),
//! 	resolved => panic!("unexpected resolution: {resolved:?}"),
//! }
//! ```

mod config;
mod error;
mod history;
mod location;
mod path;
mod registry;
mod store;
mod template;
mod trie;

mod router;

pub use config::{BeforePush, PushIntent, RouteDef, RouterConfig};
pub use error::{BuildError, PathError, RouterError};
pub use history::{HistoryEntry, Params};
pub use location::{HistoryState, LocationSync, NoopLocation};
pub use path::parse_url_path;
pub use router::{CurrentRoute, Resolved, Router, RouterState};
pub use store::Subscription;
pub use template::{PathTemplate, Token, is_token_char};
