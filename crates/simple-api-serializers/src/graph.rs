//! In-memory object graph adapter
//!
//! [`ModelGraph`] stores already-loaded instances and the links between
//! them in an arena, the same shape an ORM produces after
//! `select_related` / `prefetch_related`. Instances refer to each other by
//! [`ObjectId`], so cyclic graphs (a user and its profile pointing back at
//! each other) need no reference counting.

use crate::model::{HasFieldCache, HasPrefetchCache, Model, ModelInstance, ModelMeta, ObjectKey};
use serde_json::Value;
use std::sync::Arc;

/// Handle to an instance stored in a [`ModelGraph`]
///
/// Only meaningful for the graph that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(usize);

#[derive(Debug)]
struct ObjectData {
	meta: Arc<ModelMeta>,
	pk: Value,
	attributes: Vec<(String, Value)>,
	buried_fields: Vec<String>,
	fields_cache: Vec<(String, Option<ObjectId>)>,
	prefetched: Vec<(String, Vec<ObjectId>)>,
}

/// Arena of loaded model instances
#[derive(Debug, Default)]
pub struct ModelGraph {
	objects: Vec<ObjectData>,
}

impl ModelGraph {
	/// Create an empty graph
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of stored instances
	pub fn len(&self) -> usize {
		self.objects.len()
	}

	pub fn is_empty(&self) -> bool {
		self.objects.is_empty()
	}

	/// Add an instance of `meta` with primary key `pk`
	///
	/// The instance starts with no loaded attributes and empty caches.
	pub fn insert(&mut self, meta: &Arc<ModelMeta>, pk: Value) -> ObjectId {
		let id = ObjectId(self.objects.len());
		self.objects.push(ObjectData {
			meta: Arc::clone(meta),
			pk,
			attributes: Vec::new(),
			buried_fields: Vec::new(),
			fields_cache: Vec::new(),
			prefetched: Vec::new(),
		});
		id
	}

	/// Set a loaded attribute, replacing a previous value of the same name
	pub fn set_attr(&mut self, id: ObjectId, name: impl Into<String>, value: Value) {
		upsert(&mut self.data_mut(id).attributes, name.into(), value);
	}

	/// Record a resolved to-one relation; `None` records a null relation
	pub fn set_related(
		&mut self,
		id: ObjectId,
		name: impl Into<String>,
		related: Option<ObjectId>,
	) {
		upsert(&mut self.data_mut(id).fields_cache, name.into(), related);
	}

	/// Record a prefetched to-many collection
	pub fn set_prefetched(
		&mut self,
		id: ObjectId,
		name: impl Into<String>,
		members: impl IntoIterator<Item = ObjectId>,
	) {
		let members = members.into_iter().collect();
		upsert(&mut self.data_mut(id).prefetched, name.into(), members);
	}

	/// Mark fields that must never be exposed for this instance
	pub fn set_buried_fields<S: Into<String>>(
		&mut self,
		id: ObjectId,
		fields: impl IntoIterator<Item = S>,
	) {
		self.data_mut(id).buried_fields = fields.into_iter().map(Into::into).collect();
	}

	/// Borrow an instance as a [`Model`]
	///
	/// # Panics
	///
	/// Panics if `id` was not produced by this graph.
	pub fn object(&self, id: ObjectId) -> ModelRef<'_> {
		assert!(
			id.0 < self.objects.len(),
			"object id {} does not belong to this graph",
			id.0
		);
		ModelRef { graph: self, id }
	}

	/// Borrow several instances, e.g. the rows of a queryset
	pub fn objects<'g, I>(&'g self, ids: I) -> impl Iterator<Item = ModelRef<'g>> + 'g
	where
		I: IntoIterator<Item = ObjectId>,
		I::IntoIter: 'g,
	{
		ids.into_iter().map(move |id| self.object(id))
	}

	fn data(&self, id: ObjectId) -> &ObjectData {
		&self.objects[id.0]
	}

	fn data_mut(&mut self, id: ObjectId) -> &mut ObjectData {
		&mut self.objects[id.0]
	}
}

fn upsert<T>(entries: &mut Vec<(String, T)>, name: String, value: T) {
	match entries.iter_mut().find(|(existing, _)| *existing == name) {
		Some(entry) => entry.1 = value,
		None => entries.push((name, value)),
	}
}

/// Borrowed view of one instance in a [`ModelGraph`]
#[derive(Debug, Clone, Copy)]
pub struct ModelRef<'g> {
	graph: &'g ModelGraph,
	id: ObjectId,
}

impl<'g> ModelRef<'g> {
	pub fn id(&self) -> ObjectId {
		self.id
	}

	fn data(&self) -> &'g ObjectData {
		self.graph.data(self.id)
	}
}

impl ModelInstance for ModelRef<'_> {
	fn meta(&self) -> &ModelMeta {
		&self.data().meta
	}

	fn pk(&self) -> Value {
		self.data().pk.clone()
	}

	fn visit_attributes(&self, visitor: &mut dyn FnMut(&str, &Value)) {
		for (name, value) in &self.data().attributes {
			visitor(name, value);
		}
	}

	fn buried_fields(&self) -> &[String] {
		&self.data().buried_fields
	}

	// Views are created on demand, so identity is tied to the arena slot
	// rather than the address of the view.
	fn object_key(&self) -> ObjectKey {
		let graph = self.graph as *const ModelGraph as usize;
		ObjectKey::from_pk(self.meta().label(), &self.data().pk)
			.unwrap_or(ObjectKey::Instance(graph.wrapping_add(self.id.0)))
	}
}

impl HasFieldCache for ModelRef<'_> {
	fn visit_field_cache(&self, visitor: &mut dyn FnMut(&str, Option<&dyn Model>)) {
		for (name, related) in &self.data().fields_cache {
			match related {
				Some(id) => {
					let related = self.graph.object(*id);
					visitor(name, Some(&related));
				}
				None => visitor(name, None),
			}
		}
	}
}

impl HasPrefetchCache for ModelRef<'_> {
	fn visit_prefetch_cache(&self, visitor: &mut dyn FnMut(&str, &[&dyn Model])) {
		for (name, ids) in &self.data().prefetched {
			let members: Vec<ModelRef<'_>> =
				ids.iter().map(|id| self.graph.object(*id)).collect();
			let members: Vec<&dyn Model> =
				members.iter().map(|member| member as &dyn Model).collect();
			visitor(name, &members);
		}
	}
}
