//! URL pattern text and its OpenAPI-style template form
//!
//! Route nodes carry either a Django-style route (`articles/<int:id>/`) or a
//! raw regular expression (`^articles/(?P<id>\d+)$`). Both are reduced to the
//! same brace template (`articles/{id}/`) when listing routes.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// `<converter:name>` or `<name>` in a route
static ROUTE_PARAMETER: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"<(.*?:)?(?P<name>\w*)>").expect("valid route parameter regex"));

/// `(?P<name>...)` in a regex, up to the first closing parenthesis
static REGEX_GROUP: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"\(\?P<(?P<name>\w*)>.*?\)").expect("valid named group regex")
});

const TEMPLATE_REPLACEMENT: &str = "{${name}}";

/// Pattern attached to a route node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoutePattern {
	/// Route syntax with `<converter:name>` placeholders
	Route(String),
	/// Regular expression with `(?P<name>...)` groups
	Regex(String),
}

impl RoutePattern {
	pub fn route(route: impl Into<String>) -> Self {
		Self::Route(route.into())
	}

	pub fn regex(regex: impl Into<String>) -> Self {
		Self::Regex(regex.into())
	}

	/// Pattern text as written
	pub fn as_str(&self) -> &str {
		match self {
			Self::Route(route) => route,
			Self::Regex(regex) => regex,
		}
	}

	/// Brace template for this pattern, see [`reformat_pattern`]
	pub fn template(&self) -> String {
		reformat_pattern(self)
	}
}

impl fmt::Display for RoutePattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Rewrite a pattern into a `{name}` template
///
/// Route placeholders become `{name}` whatever their converter. For regex
/// patterns the unescaped `^` and `$` anchors are dropped first, then each
/// named group becomes `{name}`. Text outside placeholders is kept as is.
///
/// # Examples
///
/// ```
/// use simple_api_urls::{RoutePattern, reformat_pattern};
///
/// let route = RoutePattern::route("articles/<int:year>/<slug>/");
/// assert_eq!(reformat_pattern(&route), "articles/{year}/{slug}/");
///
/// let regex = RoutePattern::regex(r"^articles/(?P<id>\d+)$");
/// assert_eq!(reformat_pattern(&regex), "articles/{id}");
/// ```
pub fn reformat_pattern(pattern: &RoutePattern) -> String {
	match pattern {
		RoutePattern::Route(route) => ROUTE_PARAMETER
			.replace_all(route, TEMPLATE_REPLACEMENT)
			.into_owned(),
		RoutePattern::Regex(regex) => {
			let unanchored = strip_anchors(regex);
			REGEX_GROUP
				.replace_all(&unanchored, TEMPLATE_REPLACEMENT)
				.into_owned()
		}
	}
}

// A backslash right before the anchor keeps it literal.
fn strip_anchors(regex: &str) -> String {
	let mut stripped = String::with_capacity(regex.len());
	let mut previous = None;
	for ch in regex.chars() {
		if !matches!(ch, '^' | '$') || previous == Some('\\') {
			stripped.push(ch);
		}
		previous = Some(ch);
	}
	stripped
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("articles/", "articles/")]
	#[case("<int:id>/detail", "{id}/detail")]
	#[case("<slug>/", "{slug}/")]
	#[case("<int:year>/<int:month>/", "{year}/{month}/")]
	#[case("files/<path:rest>", "files/{rest}")]
	fn test_reformat_route(#[case] route: &str, #[case] expected: &str) {
		assert_eq!(reformat_pattern(&RoutePattern::route(route)), expected);
	}

	#[rstest]
	#[case(r"^articles/(?P<id>\d+)$", "articles/{id}")]
	#[case(r"^blog/", "blog/")]
	#[case(r"^(?P<year>[0-9]{4})/(?P<slug>[\w-]+)/$", "{year}/{slug}/")]
	#[case(r"^price/\$(?P<amount>\d+)$", r"price/\${amount}")]
	#[case(r"^\^caret/$", r"\^caret/")]
	#[case(r"^static/$", "static/")]
	fn test_reformat_regex(#[case] regex: &str, #[case] expected: &str) {
		assert_eq!(reformat_pattern(&RoutePattern::regex(regex)), expected);
	}

	#[rstest]
	fn test_template_matches_reformat() {
		let pattern = RoutePattern::route("<int:pk>/");

		assert_eq!(pattern.template(), "{pk}/");
		assert_eq!(pattern.to_string(), "<int:pk>/");
	}
}
