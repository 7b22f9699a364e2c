//! # Simple API serializers
//!
//! Model serialization that never queries the database.
//!
//! The ORM's `select_related` / `prefetch_related` already assemble an
//! in-memory object graph with every needed relation resolved. This crate
//! turns that graph into plain JSON mappings, reading only the relation
//! caches, so a response can be built from one query plus its prefetches
//! instead of one query per related object.
//!
//! ## Examples
//!
//! ```
//! use simple_api_serializers::{FieldInfo, ModelGraph, ModelMeta, serialize_model};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let user_meta = Arc::new(
//!     ModelMeta::new("auth.User")
//!         .with_field(FieldInfo::scalar("id"))
//!         .with_field(FieldInfo::scalar("username")),
//! );
//! let profile_meta = Arc::new(
//!     ModelMeta::new("auth.Profile")
//!         .with_field(FieldInfo::scalar("id"))
//!         .with_field(FieldInfo::one_to_one("user")),
//! );
//!
//! let mut graph = ModelGraph::new();
//! let user = graph.insert(&user_meta, json!(1));
//! graph.set_attr(user, "id", json!(1));
//! graph.set_attr(user, "username", json!("alice"));
//!
//! let profile = graph.insert(&profile_meta, json!(10));
//! graph.set_attr(profile, "id", json!(10));
//! graph.set_attr(profile, "user_id", json!(1));
//!
//! // user.profile and profile.user were both fetched with select_related
//! graph.set_related(user, "profile", Some(profile));
//! graph.set_related(profile, "user", Some(user));
//!
//! let data = serialize_model(&graph.object(user), &[]).unwrap();
//! assert_eq!(
//!     serde_json::Value::Object(data),
//!     json!({
//!         "profile": {"user": 1, "id": 10, "user_id": 1},
//!         "id": 1,
//!         "username": "alice",
//!     })
//! );
//! ```

pub mod context;
pub mod error;
pub mod graph;
pub mod model;
pub mod serialize;

pub use context::SerializationContext;
pub use error::{SerializeError, SerializeResult};
pub use graph::{ModelGraph, ModelRef, ObjectId};
pub use model::{
	FieldInfo, FieldKind, HasFieldCache, HasPrefetchCache, Model, ModelInstance, ModelMeta,
	ObjectKey,
};
pub use serialize::{SerializeModel, serialize_model, serialize_queryset};
