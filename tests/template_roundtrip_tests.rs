//! Property: compiling a template and rendering it with concrete values
//! reproduces the declared segment structure, separator collapsing aside.

use proptest::prelude::*;
use wayfarer::{Params, PathTemplate, parse_url_path};

proptest! {
	#[test]
	fn compile_then_render_reproduces_structure(
		segments in prop::collection::vec(("[a-z][a-z0-9_-]{0,6}", any::<bool>()), 1..6),
	) {
		// Parameter names are made unique by position so the template
		// always compiles.
		let mut template = String::new();
		let mut values = Params::new();
		let mut expected = Vec::new();

		for (index, (text, is_param)) in segments.iter().enumerate() {
			template.push('/');
			if *is_param {
				let name = format!("{text}{index}");
				let value = format!("v{index}");
				template.push(':');
				template.push_str(&name);
				expected.push(value.clone());
				values.insert(name, value);
			} else {
				template.push_str(text);
				expected.push(text.clone());
			}
		}

		let compiled = PathTemplate::parse(&template).unwrap();
		prop_assert_eq!(compiled.tokens().len(), segments.len());

		let rendered = compiled.render(Some(&values)).unwrap();
		let reparsed = parse_url_path(&rendered).unwrap();
		prop_assert_eq!(reparsed, expected);
	}

	#[test]
	fn separator_runs_do_not_change_the_compiled_tokens(
		segments in prop::collection::vec("[a-z][a-z0-9]{0,5}", 1..5),
		extra_slashes in 1usize..3,
	) {
		let plain = format!("/{}", segments.join("/"));
		let padding = "/".repeat(extra_slashes);
		let padded = format!(
			"{}{}{}",
			padding,
			segments.join(&padding),
			padding
		);
		let padded = format!("/{padded}");

		let a = PathTemplate::parse(&plain).unwrap();
		let b = PathTemplate::parse(&padded).unwrap();
		prop_assert_eq!(a.tokens(), b.tokens());
	}
}
