//! Error types for route registration, path grammar, and navigation.
//!
//! Registration failures ([`BuildError`]) are fatal: any one of them aborts
//! router construction and no partially-built router is observable. Grammar
//! failures ([`PathError`]) carry the offending character and its byte
//! offset. Navigation failures ([`RouterError`]) are returned to the caller
//! of the failing operation and never retried internally.

/// Grammar errors shared by the template compiler and the URL tokenizer.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
	#[error("invalid path (empty)")]
	Empty,

	#[error("a path must begin with a slash")]
	NoLeadingSlash,

	#[error("unexpected '{ch}' at {at}")]
	UnexpectedChar { ch: char, at: usize },

	#[error("missing parameter name at {at}")]
	EmptyParam { at: usize },

	#[error("redeclared parameter '{name}' at {at}")]
	DuplicateParam { name: String, at: usize },
}

/// Route registration errors.
///
/// Construction is all-or-nothing: the first of these aborts the build.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
	#[error("invalid route name (empty)")]
	EmptyRouteName,

	#[error("unexpected character '{ch}' in route name '{name}' at {at}")]
	InvalidRouteName { name: String, ch: char, at: usize },

	#[error("redeclaration of route '{0}'")]
	DuplicateRoute(String),

	#[error("route '{0}' defines both a view and a redirect")]
	AmbiguousTarget(String),

	#[error("route '{route}' defines an invalid path template: {source}")]
	Template {
		route: String,
		#[source]
		source: PathError,
	},

	#[error("routes '{route}' and '{previous}' share the same path template '{template}'")]
	DuplicateTemplate {
		route: String,
		previous: String,
		template: String,
	},
}

/// Runtime errors raised by matching and navigation operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
	#[error("route '{0}' not found")]
	UnknownRoute(String),

	#[error("invalid route name '{0}'")]
	InvalidRouteName(String),

	#[error("route '{route}' requires parameters: {expected:?}")]
	MissingParams { route: String, expected: Vec<String> },

	#[error("missing parameter '{0}'")]
	MissingParam(String),

	#[error("expected a value for parameter '{0}'")]
	MissingParamValue(String),

	#[error("path '{0}' doesn't resolve any route")]
	NoRoute(String),

	#[error(transparent)]
	Path(#[from] PathError),

	#[error("invalid step count: {0}")]
	InvalidStep(i64),

	#[error("negative step counts are not supported: {0}")]
	UnsupportedStep(i64),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn path_error_display() {
		assert_eq!(
			PathError::UnexpectedChar { ch: '#', at: 5 }.to_string(),
			"unexpected '#' at 5"
		);
		assert_eq!(
			PathError::DuplicateParam {
				name: "id".to_string(),
				at: 9
			}
			.to_string(),
			"redeclared parameter 'id' at 9"
		);
	}

	#[test]
	fn build_error_display() {
		let err = BuildError::Template {
			route: "home".to_string(),
			source: PathError::Empty,
		};
		assert_eq!(
			err.to_string(),
			"route 'home' defines an invalid path template: invalid path (empty)"
		);

		let err = BuildError::DuplicateTemplate {
			route: "b".to_string(),
			previous: "a".to_string(),
			template: "/x".to_string(),
		};
		assert!(err.to_string().contains("share the same path template"));
	}

	#[test]
	fn router_error_wraps_path_error() {
		let err = RouterError::from(PathError::NoLeadingSlash);
		assert_eq!(err.to_string(), "a path must begin with a slash");
	}
}
