//! View handlers attached to URL patterns
//!
//! A handler is either a plain function view or a class-based view produced
//! by [`View::as_view`]. Only the latter carries a view class, which is what
//! [`is_class_view`] looks for.

use std::any::type_name;
use std::fmt;

/// Callable registered on a URL pattern
pub trait ViewHandler: Send + Sync {
	/// Name used when listing routes
	fn name(&self) -> &str;

	/// Type name of the class-based view this handler was built from
	fn view_class(&self) -> Option<&str> {
		None
	}
}

impl fmt::Debug for dyn ViewHandler {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ViewHandler")
			.field("name", &self.name())
			.field("view_class", &self.view_class())
			.finish()
	}
}

/// Function-based view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionView {
	name: String,
}

impl FunctionView {
	/// # Examples
	///
	/// ```
	/// use simple_api_urls::{FunctionView, ViewHandler, is_class_view};
	///
	/// let view = FunctionView::new("blog.views.article_list");
	/// assert_eq!(view.name(), "blog.views.article_list");
	/// assert!(!is_class_view(&view));
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into() }
	}
}

impl ViewHandler for FunctionView {
	fn name(&self) -> &str {
		&self.name
	}
}

/// Handler produced from a class-based view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassView {
	view_class: &'static str,
}

impl ClassView {
	/// Wrap the view type `V`
	pub fn of<V: ?Sized + 'static>() -> Self {
		Self {
			view_class: type_name::<V>(),
		}
	}
}

impl ViewHandler for ClassView {
	fn name(&self) -> &str {
		self.view_class
	}

	fn view_class(&self) -> Option<&str> {
		Some(self.view_class)
	}
}

/// Class-based view
///
/// # Examples
///
/// ```
/// use simple_api_urls::{View, ViewHandler, is_class_view};
///
/// struct ArticleDetail;
/// impl View for ArticleDetail {}
///
/// let handler = ArticleDetail::as_view();
/// assert!(is_class_view(&handler));
/// assert!(handler.name().ends_with("ArticleDetail"));
/// ```
pub trait View: 'static {
	/// Turn the view into a handler that can be routed
	fn as_view() -> ClassView
	where
		Self: Sized,
	{
		ClassView::of::<Self>()
	}
}

/// Whether `handler` was produced from a class-based view
pub fn is_class_view(handler: &dyn ViewHandler) -> bool {
	handler.view_class().is_some()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::sync::Arc;

	struct ArticleList;
	impl View for ArticleList {}

	#[rstest]
	fn test_function_view_is_not_class_view() {
		let view = FunctionView::new("index");

		assert!(!is_class_view(&view));
		assert_eq!(view.view_class(), None);
	}

	#[rstest]
	fn test_as_view_carries_view_class() {
		let handler = ArticleList::as_view();

		assert!(is_class_view(&handler));
		assert_eq!(handler.view_class(), Some(type_name::<ArticleList>()));
		assert_eq!(handler, ClassView::of::<ArticleList>());
	}

	#[rstest]
	fn test_is_class_view_through_trait_object() {
		let handlers: Vec<Arc<dyn ViewHandler>> =
			vec![Arc::new(FunctionView::new("index")), Arc::new(ArticleList::as_view())];

		let flags: Vec<bool> = handlers.iter().map(|h| is_class_view(h.as_ref())).collect();
		assert_eq!(flags, vec![false, true]);
	}

	#[rstest]
	fn test_debug_shows_name() {
		let handler: Arc<dyn ViewHandler> = Arc::new(FunctionView::new("index"));

		assert_eq!(
			format!("{:?}", handler),
			r#"ViewHandler { name: "index", view_class: None }"#
		);
	}
}
