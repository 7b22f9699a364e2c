//! # Simple API URLs
//!
//! Introspection of a Django-style URL conf and small request helpers.
//!
//! - [`walk_routes`] / [`list_routes`] flatten a tree of [`RouteNode`]s into
//!   `(template, view)` pairs, with every pattern rewritten to the
//!   `{name}` form used by OpenAPI paths.
//! - [`merge_query_dict`] flattens multi-valued query parameters.
//! - [`is_class_view`] tells class-based views from plain functions.
//!
//! ## Example
//!
//! ```
//! use simple_api_urls::{FunctionView, View, include, path, re_path, walk_routes};
//!
//! struct ArticleDetail;
//! impl View for ArticleDetail {}
//!
//! let urlpatterns = vec![
//!     path("", FunctionView::new("index")),
//!     include(
//!         "blog/",
//!         vec![re_path(r"^articles/(?P<id>\d+)$", ArticleDetail::as_view())],
//!     ),
//! ];
//!
//! let routes: Vec<String> = walk_routes(&urlpatterns).map(|(route, _)| route).collect();
//! assert_eq!(routes, vec!["", "blog/articles/{id}"]);
//! ```

pub mod conf;
pub mod error;
pub mod pattern;
pub mod query;
pub mod route;
pub mod settings;
pub mod view;
pub mod walk;

pub use conf::{UrlConf, find_urlconf, list_routes, registered_urlconfs, root_urlpatterns};
pub use error::{SettingsError, UrlConfError};
pub use pattern::{RoutePattern, reformat_pattern};
pub use query::{QueryDict, merge_query_dict};
pub use route::{RouteNode, UrlPattern, UrlResolver, include, path, re_include, re_path};
pub use settings::{Settings, configure, settings};
pub use view::{ClassView, FunctionView, View, ViewHandler, is_class_view};
pub use walk::{Routes, walk_routes};

#[doc(hidden)]
pub use inventory;
