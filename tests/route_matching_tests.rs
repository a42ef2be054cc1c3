//! Trie-based path resolution through `Router::route`.

use wayfarer::{PathError, Resolved, RouteDef, Router, RouterError, RouterConfig};

fn router() -> Router<&'static str> {
	Router::new(
		RouterConfig::new()
			.route("root", RouteDef::view("/", "root view"))
			.route("home", RouteDef::view("/home", "home view"))
			.route("user", RouteDef::view("/test/params/:var", "param view"))
			.route("me", RouteDef::view("/users/me", "me view"))
			.route("profile", RouteDef::view("/users/:id", "profile view"))
			.route("legacy", RouteDef::redirect("/old", "home"))
			.route("hop", RouteDef::redirect("/hop", "legacy"))
			.route("draft", RouteDef::bare("/draft")),
	)
	.unwrap()
}

#[test]
fn resolves_a_static_path_to_its_view() {
	assert_eq!(
		router().route("/home").unwrap(),
		Resolved::View(&"home view")
	);
}

#[test]
fn unmatched_paths_name_the_path_in_the_error() {
	assert_eq!(
		router().route("/unknown").unwrap_err(),
		RouterError::NoRoute("/unknown".to_string())
	);
}

#[test]
fn parameter_branch_matches_any_literal() {
	let router = router();
	assert_eq!(
		router.route("/test/params/42").unwrap(),
		Resolved::View(&"param view")
	);
	assert_eq!(
		router.route("/test/params/forty-two").unwrap(),
		Resolved::View(&"param view")
	);
}

#[test]
fn static_segments_shadow_the_parameter_branch() {
	let router = router();
	assert_eq!(router.route("/users/me").unwrap(), Resolved::View(&"me view"));
	assert_eq!(
		router.route("/users/42").unwrap(),
		Resolved::View(&"profile view")
	);
}

#[test]
fn redirects_return_the_immediate_target_only() {
	let router = router();
	assert_eq!(router.route("/old").unwrap(), Resolved::Redirect("home"));
	// A redirect pointing at another redirect is not chased.
	assert_eq!(router.route("/hop").unwrap(), Resolved::Redirect("legacy"));
}

#[test]
fn a_route_without_view_or_redirect_is_not_found() {
	assert_eq!(
		router().route("/draft").unwrap_err(),
		RouterError::NoRoute("/draft".to_string())
	);
}

#[test]
fn the_root_path_resolves_the_root_terminal() {
	assert_eq!(router().route("/").unwrap(), Resolved::View(&"root view"));
}

#[test]
fn separator_runs_collapse_during_matching() {
	assert_eq!(
		router().route("//home/").unwrap(),
		Resolved::View(&"home view")
	);
}

#[test]
fn grammar_errors_propagate_from_the_tokenizer() {
	let err = router().route("/home?tab=1").unwrap_err();
	assert_eq!(
		err,
		RouterError::Path(PathError::UnexpectedChar { ch: '?', at: 5 })
	);
}

#[test]
fn a_prefix_of_a_longer_route_does_not_match() {
	let router = Router::new(
		RouterConfig::new().route("deep", RouteDef::view("/a/b/c", "deep view")),
	)
	.unwrap();
	assert_eq!(
		router.route("/a/b").unwrap_err(),
		RouterError::NoRoute("/a/b".to_string())
	);
}
