//! # Reinhardt Simple API
//!
//! Helpers for building JSON APIs over a Django-style ORM and URL conf.
//!
//! ## Feature Flags
//!
//! - `full` (default) - Everything below
//! - `serializers` - Query-free model serialization ([`serializers`])
//! - `urls` - URL conf introspection and request helpers ([`urls`])
//!
//! ## Quick Example
//!
//! ```
//! use simple_api::prelude::*;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let meta = Arc::new(ModelMeta::new("blog.Tag").with_field(FieldInfo::scalar("name")));
//! let mut graph = ModelGraph::new();
//! let tag = graph.insert(&meta, json!(1));
//! graph.set_attr(tag, "name", json!("rust"));
//! assert_eq!(graph.object(tag).serialize(&[]).unwrap()["name"], json!("rust"));
//!
//! let urlpatterns = vec![path("tags/<slug:slug>/", FunctionView::new("tag_detail"))];
//! let (route, view) = walk_routes(&urlpatterns).next().unwrap();
//! assert_eq!(route, "tags/{slug}/");
//! assert!(!is_class_view(view.as_ref()));
//! ```

#[cfg(feature = "serializers")]
pub use simple_api_serializers as serializers;
#[cfg(feature = "urls")]
pub use simple_api_urls as urls;

#[cfg(feature = "serializers")]
pub use simple_api_serializers::{
	ModelGraph, ModelMeta, SerializeError, SerializeModel, serialize_model, serialize_queryset,
};
#[cfg(feature = "urls")]
pub use simple_api_urls::{
	QueryDict, RouteNode, Settings, UrlConfError, is_class_view, list_routes, merge_query_dict,
	register_urlconf, walk_routes,
};

/// Common imports
pub mod prelude {
	#[cfg(feature = "serializers")]
	pub use crate::serializers::{
		FieldInfo, FieldKind, HasFieldCache, HasPrefetchCache, Model, ModelGraph, ModelInstance,
		ModelMeta, ModelRef, ObjectId, SerializeError, SerializeModel, serialize_model,
		serialize_queryset,
	};

	#[cfg(feature = "urls")]
	pub use crate::urls::{
		ClassView, FunctionView, QueryDict, RouteNode, RoutePattern, Settings, UrlConfError, View,
		ViewHandler, configure, include, is_class_view, list_routes, merge_query_dict, path,
		re_include, re_path, register_urlconf, walk_routes,
	};
}
