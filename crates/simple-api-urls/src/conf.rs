//! URL conf registry
//!
//! Crates declare their `urlpatterns` with [`register_urlconf!`], which
//! submits a [`UrlConf`] to an `inventory` collection at link time. The
//! root URL conf is then picked by module name from
//! [`Settings::root_urlconf`](crate::Settings::root_urlconf) and built once
//! per process.
//!
//! ## Example
//!
//! ```ignore
//! use simple_api_urls::{FunctionView, RouteNode, path, register_urlconf};
//!
//! fn urlpatterns() -> Vec<RouteNode> {
//!     vec![path("", FunctionView::new("index"))]
//! }
//!
//! register_urlconf!("mysite.urls", urlpatterns);
//! ```

use crate::error::UrlConfError;
use crate::route::RouteNode;
use crate::settings::settings;
use crate::walk::{Routes, walk_routes};
use std::sync::OnceLock;

static ROOT_URLPATTERNS: OnceLock<Vec<RouteNode>> = OnceLock::new();

/// Registered URL conf
///
/// Submitted through [`register_urlconf!`](crate::register_urlconf).
#[derive(Debug)]
pub struct UrlConf {
	module: &'static str,
	patterns: fn() -> Vec<RouteNode>,
}

impl UrlConf {
	pub const fn new(module: &'static str, patterns: fn() -> Vec<RouteNode>) -> Self {
		Self { module, patterns }
	}

	/// Module name the settings refer to this URL conf by
	pub fn module(&self) -> &'static str {
		self.module
	}

	/// Build a fresh copy of the URL conf's patterns
	pub fn urlpatterns(&self) -> Vec<RouteNode> {
		(self.patterns)()
	}
}

inventory::collect!(UrlConf);

/// Register a function returning `urlpatterns` under a module name
///
/// ```ignore
/// register_urlconf!("blog.urls", blog_urlpatterns);
/// ```
#[macro_export]
macro_rules! register_urlconf {
	($module:expr, $patterns:path $(,)?) => {
		$crate::inventory::submit! {
			$crate::UrlConf::new($module, $patterns)
		}
	};
}

/// Look up the URL conf registered as `module`
///
/// # Errors
///
/// [`UrlConfError::UnknownUrlConf`] if nothing is registered under `module`,
/// [`UrlConfError::DuplicateUrlConf`] if more than one entry is.
pub fn find_urlconf(module: &str) -> Result<&'static UrlConf, UrlConfError> {
	let mut candidates = inventory::iter::<UrlConf>
		.into_iter()
		.filter(|conf| conf.module == module);

	let found = candidates.next().ok_or_else(|| UrlConfError::UnknownUrlConf {
		module: module.to_string(),
	})?;
	if candidates.next().is_some() {
		return Err(UrlConfError::DuplicateUrlConf {
			module: module.to_string(),
		});
	}
	Ok(found)
}

/// Module names of every registered URL conf, sorted
pub fn registered_urlconfs() -> Vec<&'static str> {
	let mut modules: Vec<&'static str> = inventory::iter::<UrlConf>
		.into_iter()
		.map(UrlConf::module)
		.collect();
	modules.sort_unstable();
	modules
}

/// Patterns of the root URL conf
///
/// Built from the registry on first success and reused afterwards.
///
/// # Errors
///
/// [`UrlConfError::NotConfigured`] if no root URL conf is set, or any error
/// of [`find_urlconf`].
pub fn root_urlpatterns() -> Result<&'static [RouteNode], UrlConfError> {
	if let Some(patterns) = ROOT_URLPATTERNS.get() {
		return Ok(patterns);
	}

	let module = settings().root_urlconf.trim();
	if module.is_empty() {
		return Err(UrlConfError::NotConfigured);
	}

	let conf = find_urlconf(module)?;
	let patterns = ROOT_URLPATTERNS.get_or_init(|| conf.urlpatterns());
	tracing::debug!(module, patterns = patterns.len(), "loaded root URL conf");
	Ok(patterns)
}

/// Every route of the root URL conf with its view
///
/// Same walk as [`walk_routes`] over [`root_urlpatterns`].
pub fn list_routes() -> Result<Routes<'static>, UrlConfError> {
	Ok(walk_routes(root_urlpatterns()?))
}
