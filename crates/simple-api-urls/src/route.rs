//! URL conf tree
//!
//! Mirrors Django's `urlpatterns`: a list of terminal patterns bound to a
//! view and resolvers that nest another list under a common prefix.

use crate::pattern::RoutePattern;
use crate::view::ViewHandler;
use std::sync::Arc;

/// Entry of a URL conf
#[derive(Debug, Clone)]
pub enum RouteNode {
	Pattern(UrlPattern),
	Resolver(UrlResolver),
}

impl RouteNode {
	pub fn pattern(&self) -> &RoutePattern {
		match self {
			Self::Pattern(pattern) => &pattern.pattern,
			Self::Resolver(resolver) => &resolver.pattern,
		}
	}

	/// Name of a terminal pattern; resolvers are never named
	pub fn name(&self) -> Option<&str> {
		match self {
			Self::Pattern(pattern) => pattern.name.as_deref(),
			Self::Resolver(_) => None,
		}
	}

	/// Set the route name of a terminal pattern
	///
	/// Has no effect on resolvers.
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		if let Self::Pattern(pattern) = &mut self {
			pattern.name = Some(name.into());
		}
		self
	}

	/// Set the namespace of a resolver
	///
	/// Has no effect on terminal patterns.
	pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
		if let Self::Resolver(resolver) = &mut self {
			resolver.namespace = Some(namespace.into());
		}
		self
	}
}

/// Terminal pattern bound to a view
#[derive(Debug, Clone)]
pub struct UrlPattern {
	pub pattern: RoutePattern,
	pub callback: Arc<dyn ViewHandler>,
	pub name: Option<String>,
}

impl UrlPattern {
	pub fn new(pattern: RoutePattern, callback: Arc<dyn ViewHandler>) -> Self {
		Self {
			pattern,
			callback,
			name: None,
		}
	}
}

/// Pattern prefixing a nested list of nodes
#[derive(Debug, Clone)]
pub struct UrlResolver {
	pub pattern: RoutePattern,
	pub url_patterns: Vec<RouteNode>,
	pub namespace: Option<String>,
}

impl UrlResolver {
	pub fn new(pattern: RoutePattern, url_patterns: Vec<RouteNode>) -> Self {
		Self {
			pattern,
			url_patterns,
			namespace: None,
		}
	}
}

/// Route-syntax pattern bound to `view`
///
/// # Examples
///
/// ```
/// use simple_api_urls::{FunctionView, path};
///
/// let node = path("articles/<int:id>/", FunctionView::new("article_detail"))
///     .with_name("article-detail");
/// assert_eq!(node.pattern().template(), "articles/{id}/");
/// assert_eq!(node.name(), Some("article-detail"));
/// ```
pub fn path<H>(route: impl Into<String>, view: H) -> RouteNode
where
	H: ViewHandler + 'static,
{
	RouteNode::Pattern(UrlPattern::new(RoutePattern::route(route), Arc::new(view)))
}

/// Regex pattern bound to `view`
pub fn re_path<H>(regex: impl Into<String>, view: H) -> RouteNode
where
	H: ViewHandler + 'static,
{
	RouteNode::Pattern(UrlPattern::new(RoutePattern::regex(regex), Arc::new(view)))
}

/// Nest `url_patterns` under a route-syntax prefix
///
/// # Examples
///
/// ```
/// use simple_api_urls::{FunctionView, include, path, walk_routes};
///
/// let urlpatterns = vec![include(
///     "blog/",
///     vec![path("<slug>/", FunctionView::new("post"))],
/// )];
/// let routes: Vec<String> = walk_routes(&urlpatterns).map(|(route, _)| route).collect();
/// assert_eq!(routes, vec!["blog/{slug}/"]);
/// ```
pub fn include(route: impl Into<String>, url_patterns: Vec<RouteNode>) -> RouteNode {
	RouteNode::Resolver(UrlResolver::new(RoutePattern::route(route), url_patterns))
}

/// Nest `url_patterns` under a regex prefix
pub fn re_include(regex: impl Into<String>, url_patterns: Vec<RouteNode>) -> RouteNode {
	RouteNode::Resolver(UrlResolver::new(RoutePattern::regex(regex), url_patterns))
}
