//! Per-call serialization state
//!
//! Tracks which instances a single top-level serialization has already
//! expanded, so one-to-one back-references terminate.

use crate::model::ObjectKey;
use std::collections::HashSet;

/// Visited instances and current nesting depth of one serialization pass
///
/// A context is created for every top-level call and shared by the whole
/// recursive descent of that call, to-one and to-many branches alike. It is
/// never reused across calls.
#[derive(Debug, Clone, Default)]
pub struct SerializationContext {
	/// Current depth level (0 = root)
	current_depth: usize,
	/// Identities of instances already expanded in this pass
	visited: HashSet<ObjectKey>,
}

impl SerializationContext {
	/// Create an empty context
	///
	/// # Examples
	///
	/// ```
	/// use simple_api_serializers::SerializationContext;
	///
	/// let context = SerializationContext::new();
	/// assert_eq!(context.current_depth(), 0);
	/// assert_eq!(context.visited_count(), 0);
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Get the current depth
	pub fn current_depth(&self) -> usize {
		self.current_depth
	}

	/// Number of distinct instances expanded so far
	pub fn visited_count(&self) -> usize {
		self.visited.len()
	}

	/// Mark an instance as visited
	///
	/// Returns `true` the first time a key is seen and `false` afterwards.
	///
	/// # Examples
	///
	/// ```
	/// use simple_api_serializers::{ObjectKey, SerializationContext};
	/// use serde_json::json;
	///
	/// let key = ObjectKey::from_pk("auth.User", &json!(1)).unwrap();
	///
	/// let mut context = SerializationContext::new();
	/// assert!(context.visit(key.clone()));
	/// assert!(!context.visit(key)); // Already visited
	/// ```
	pub fn visit(&mut self, key: ObjectKey) -> bool {
		self.visited.insert(key)
	}

	/// Check whether an instance was already visited
	pub fn is_visited(&self, key: &ObjectKey) -> bool {
		self.visited.contains(key)
	}

	/// Enter one nesting level
	pub fn descend(&mut self) {
		self.current_depth += 1;
	}

	/// Leave one nesting level
	pub fn ascend(&mut self) {
		self.current_depth = self.current_depth.saturating_sub(1);
	}
}
