//! Depth-first listing of a URL conf

use crate::route::RouteNode;
use crate::view::ViewHandler;
use std::slice;
use std::sync::Arc;

/// Iterator over the full routes of a URL conf
///
/// Yields `(route template, view)` for every terminal pattern, in the order
/// a depth-first walk of the tree meets them. Each route is the
/// concatenation of the templates of every resolver above it followed by the
/// pattern's own template.
#[derive(Debug, Clone)]
pub struct Routes<'a> {
	stack: Vec<(String, slice::Iter<'a, RouteNode>)>,
}

impl<'a> Routes<'a> {
	fn new(patterns: &'a [RouteNode]) -> Self {
		Self {
			stack: vec![(String::new(), patterns.iter())],
		}
	}
}

impl Iterator for Routes<'_> {
	type Item = (String, Arc<dyn ViewHandler>);

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			let (prefix, nodes) = self.stack.last_mut()?;
			let Some(node) = nodes.next() else {
				self.stack.pop();
				continue;
			};

			let route = format!("{}{}", prefix, node.pattern().template());
			match node {
				RouteNode::Pattern(pattern) => {
					return Some((route, Arc::clone(&pattern.callback)));
				}
				RouteNode::Resolver(resolver) => {
					tracing::trace!(prefix = %route, "descending into resolver");
					self.stack.push((route, resolver.url_patterns.iter()));
				}
			}
		}
	}
}

/// Walk `patterns` depth-first, see [`Routes`]
///
/// The tree is only borrowed, so calling this again restarts the walk.
///
/// # Examples
///
/// ```
/// use simple_api_urls::{FunctionView, include, path, re_path, walk_routes};
///
/// let urlpatterns = vec![
///     path("", FunctionView::new("index")),
///     include(
///         "blog/",
///         vec![re_path(r"^articles/(?P<id>\d+)$", FunctionView::new("article"))],
///     ),
/// ];
///
/// let routes: Vec<(String, String)> = walk_routes(&urlpatterns)
///     .map(|(route, view)| (route, view.name().to_string()))
///     .collect();
/// assert_eq!(
///     routes,
///     vec![
///         ("".to_string(), "index".to_string()),
///         ("blog/articles/{id}".to_string(), "article".to_string()),
///     ]
/// );
/// ```
pub fn walk_routes(patterns: &[RouteNode]) -> Routes<'_> {
	Routes::new(patterns)
}
