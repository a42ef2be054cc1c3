//! Path template grammar and compilation.
//!
//! A template declares one route pattern as a sequence of segments separated
//! by slashes. A segment starting with `:` declares a named parameter; any
//! other segment is a static literal. Both kinds share one character class
//! ([`is_token_char`]), and both the compiler here and the URL tokenizer in
//! [`crate::path`] reject anything outside it with the offending character
//! and its byte offset.

use crate::error::{PathError, RouterError};
use crate::history::Params;

/// Returns whether `ch` may appear inside a path segment.
///
/// The class covers ASCII letters, digits, and the unreserved plus sub-delim
/// punctuation `! $ & ' ( ) * + , - . ; = @ _ ~`.
pub fn is_token_char(ch: char) -> bool {
	ch.is_ascii_alphanumeric()
		|| matches!(
			ch,
			'!' | '$'
				| '&' | '\''
				| '(' | ')'
				| '*' | '+'
				| ',' | '-'
				| '.' | ';'
				| '=' | '@'
				| '_' | '~'
		)
}

/// One segment of a compiled template: a static literal or a parameter
/// placeholder. For parameters, `text` holds the parameter name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
	pub text: String,
	pub is_param: bool,
}

/// A compiled path template.
///
/// Holds the tokens in declaration order and the parameter names in the
/// order they were declared. Parameter names are unique within a template;
/// the compiler rejects redeclarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
	raw: String,
	tokens: Vec<Token>,
	params: Vec<String>,
}

impl PathTemplate {
	/// Compiles a template string.
	///
	/// The template must be non-empty and begin with a slash. Runs of
	/// consecutive slashes collapse into one separator, and a trailing slash
	/// is ignored. The template `"/"` compiles to zero tokens.
	///
	/// # Examples
	///
	/// ```
	/// use wayfarer::PathTemplate;
	///
	/// let template = PathTemplate::parse("/users/:id/posts").unwrap();
	/// assert_eq!(template.params(), ["id"]);
	/// assert_eq!(template.tokens().len(), 3);
	/// ```
	pub fn parse(template: &str) -> Result<Self, PathError> {
		if template.is_empty() {
			return Err(PathError::Empty);
		}
		if !template.starts_with('/') {
			return Err(PathError::NoLeadingSlash);
		}

		let mut tokens = Vec::new();
		let mut params: Vec<String> = Vec::new();
		// Byte offset and parameter flag of the segment being scanned.
		let mut segment: Option<(usize, bool)> = None;

		for (at, ch) in template.char_indices().skip(1) {
			match segment {
				None => {
					if ch == '/' {
						// Runs of separators collapse.
						continue;
					}
					if ch == ':' {
						segment = Some((at + 1, true));
					} else if is_token_char(ch) {
						segment = Some((at, false));
					} else {
						return Err(PathError::UnexpectedChar { ch, at });
					}
				}
				Some((start, is_param)) => {
					if ch == '/' {
						close_segment(template, start, at, is_param, &mut tokens, &mut params)?;
						segment = None;
					} else if !is_token_char(ch) {
						return Err(PathError::UnexpectedChar { ch, at });
					}
				}
			}
		}

		if let Some((start, is_param)) = segment {
			close_segment(
				template,
				start,
				template.len(),
				is_param,
				&mut tokens,
				&mut params,
			)?;
		}

		Ok(Self {
			raw: template.to_string(),
			tokens,
			params,
		})
	}

	/// The original template string.
	pub fn raw(&self) -> &str {
		&self.raw
	}

	/// The compiled tokens in declaration order.
	pub fn tokens(&self) -> &[Token] {
		&self.tokens
	}

	/// Parameter names in declaration order.
	pub fn params(&self) -> &[String] {
		&self.params
	}

	/// Whether the template declares any parameters.
	pub fn has_params(&self) -> bool {
		!self.params.is_empty()
	}

	/// Renders the template into a concrete path, substituting each
	/// parameter token with its value from `params`.
	///
	/// Fails with [`RouterError::MissingParamValue`] on the first parameter
	/// token without a value, including when `params` is `None`. A template
	/// with zero tokens renders to the empty string.
	pub fn render(&self, params: Option<&Params>) -> Result<String, RouterError> {
		let mut out = String::new();
		for token in &self.tokens {
			out.push('/');
			if token.is_param {
				let value = params
					.and_then(|p| p.get(&token.text))
					.ok_or_else(|| RouterError::MissingParamValue(token.text.clone()))?;
				out.push_str(value);
			} else {
				out.push_str(&token.text);
			}
		}
		Ok(out)
	}
}

impl std::fmt::Display for PathTemplate {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.raw)
	}
}

fn close_segment(
	template: &str,
	start: usize,
	end: usize,
	is_param: bool,
	tokens: &mut Vec<Token>,
	params: &mut Vec<String>,
) -> Result<(), PathError> {
	let text = &template[start..end];
	if is_param {
		if text.is_empty() {
			return Err(PathError::EmptyParam { at: start });
		}
		if params.iter().any(|p| p == text) {
			return Err(PathError::DuplicateParam {
				name: text.to_string(),
				at: start,
			});
		}
		params.push(text.to_string());
	}
	tokens.push(Token {
		text: text.to_string(),
		is_param,
	});
	Ok(())
}
