//! Path patterns for route entries.
//!
//! Patterns are plain segment lists: literal segments must match
//! exactly, `{name}` segments capture one path segment, and the
//! catch-all pattern `*` matches anything. Matching is structural, no
//! regular expressions involved.

use std::collections::HashMap;

/// Extracted path parameters, keyed by capture name.
pub type RouteParams = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
	Literal(String),
	Param(String),
}

/// A parsed path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
	raw: String,
	segments: Vec<Segment>,
	catch_all: bool,
}

impl PathPattern {
	/// Parses a pattern such as `/`, `/login`, `/users/{id}`, or `*`.
	pub fn new(pattern: &str) -> Self {
		let catch_all = pattern == "*";
		let segments = if catch_all {
			Vec::new()
		} else {
			pattern
				.split('/')
				.filter(|s| !s.is_empty())
				.map(|s| {
					if let Some(name) = s.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
						Segment::Param(name.to_string())
					} else {
						Segment::Literal(s.to_string())
					}
				})
				.collect()
		};

		Self {
			raw: pattern.to_string(),
			segments,
			catch_all,
		}
	}

	/// The original pattern text.
	pub fn as_str(&self) -> &str {
		&self.raw
	}

	/// Whether this is the catch-all pattern.
	pub fn is_catch_all(&self) -> bool {
		self.catch_all
	}

	/// Matches a request path against this pattern.
	///
	/// Non-exact patterns match as a prefix of the path (on segment
	/// boundaries); `exact` requires the whole path to be consumed.
	/// Returns the captured parameters on success.
	pub fn matches(&self, path: &str, exact: bool) -> Option<RouteParams> {
		if self.catch_all {
			return Some(RouteParams::new());
		}

		let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

		if self.segments.len() > path_segments.len() {
			return None;
		}
		if exact && self.segments.len() != path_segments.len() {
			return None;
		}

		let mut params = RouteParams::new();
		for (segment, actual) in self.segments.iter().zip(&path_segments) {
			match segment {
				Segment::Literal(expected) if expected == actual => {}
				Segment::Literal(_) => return None,
				Segment::Param(name) => {
					params.insert(name.clone(), (*actual).to_string());
				}
			}
		}

		Some(params)
	}
}
