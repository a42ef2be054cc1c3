//! Concrete URL path tokenization.
//!
//! The same leading-slash and separator-collapsing rules as the template
//! compiler, but without parameter syntax: every segment is a literal run of
//! token characters.

use crate::error::PathError;
use crate::template::is_token_char;

/// Splits a concrete request path into its literal segments.
///
/// Fails on an empty path, a missing leading slash, or any character outside
/// the segment character class. `"/"` tokenizes to zero segments.
pub fn parse_url_path(path: &str) -> Result<Vec<String>, PathError> {
	if path.is_empty() {
		return Err(PathError::Empty);
	}
	if !path.starts_with('/') {
		return Err(PathError::NoLeadingSlash);
	}

	let mut segments = Vec::new();
	// Byte offset of the segment being scanned.
	let mut start: Option<usize> = None;

	for (at, ch) in path.char_indices().skip(1) {
		match start {
			None => {
				if ch == '/' {
					continue;
				}
				if is_token_char(ch) {
					start = Some(at);
				} else {
					return Err(PathError::UnexpectedChar { ch, at });
				}
			}
			Some(begin) => {
				if ch == '/' {
					segments.push(path[begin..at].to_string());
					start = None;
				} else if !is_token_char(ch) {
					return Err(PathError::UnexpectedChar { ch, at });
				}
			}
		}
	}

	if let Some(begin) = start {
		segments.push(path[begin..].to_string());
	}

	Ok(segments)
}
