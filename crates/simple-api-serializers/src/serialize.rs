//! Query-free model serialization
//!
//! Converts an instance into a plain JSON mapping using only what the ORM
//! has already loaded. Relations that were not fetched with
//! `select_related` / `prefetch_related` are simply absent from the output,
//! so serializing never triggers an N+1 query pattern.

use crate::context::SerializationContext;
use crate::error::{SerializeError, SerializeResult};
use crate::model::Model;
use serde_json::{Map, Value};

/// Serialize a model instance and its cached relations
///
/// The mapping contains, in order:
///
/// 1. one entry per cached to-one relation, serialized recursively
///    (`{}` when the relation is null);
/// 2. one entry per loaded attribute that is a declared field and not
///    listed in the model's buried fields;
/// 3. one entry per prefetched collection, as a list.
///
/// An instance met a second time during the same call is replaced by its
/// primary key. Keys named in `excludes` are removed from the top-level
/// mapping and from every prefetched member that expands to a mapping;
/// naming a key that is not there is an error.
///
/// # Errors
///
/// Returns [`SerializeError::ExcludedKeyMissing`] if an excluded key is not
/// present in the top-level mapping or in an expanded prefetched member.
///
/// # Examples
///
/// ```
/// use simple_api_serializers::{FieldInfo, ModelGraph, ModelMeta, serialize_model};
/// use serde_json::json;
/// use std::sync::Arc;
///
/// let meta = Arc::new(
///     ModelMeta::new("auth.User")
///         .with_field(FieldInfo::scalar("id"))
///         .with_field(FieldInfo::scalar("username")),
/// );
///
/// let mut graph = ModelGraph::new();
/// let user = graph.insert(&meta, json!(1));
/// graph.set_attr(user, "id", json!(1));
/// graph.set_attr(user, "username", json!("alice"));
///
/// let data = serialize_model(&graph.object(user), &[]).unwrap();
/// assert_eq!(serde_json::Value::Object(data), json!({"id": 1, "username": "alice"}));
/// ```
pub fn serialize_model(
	instance: &dyn Model,
	excludes: &[&str],
) -> SerializeResult<Map<String, Value>> {
	let mut context = SerializationContext::new();
	context.visit(instance.object_key());

	let mut result = serialize_fields(instance, &mut context, excludes)?;
	remove_excludes(instance, &mut result, excludes)?;

	tracing::debug!(
		model = instance.meta().label(),
		visited = context.visited_count(),
		"serialized model instance"
	);

	Ok(result)
}

/// Serialize every instance of a queryset
///
/// Each instance is serialized by its own [`serialize_model`] call, so
/// cycle tracking does not span items: a relation shared by two items is
/// expanded in both.
///
/// # Errors
///
/// Fails on the first item for which [`serialize_model`] fails.
pub fn serialize_queryset<I>(
	queryset: I,
	excludes: &[&str],
) -> SerializeResult<Vec<Map<String, Value>>>
where
	I: IntoIterator,
	I::Item: Model,
{
	queryset
		.into_iter()
		.map(|instance| serialize_model(&instance, excludes))
		.collect()
}

/// Method-call syntax for [`serialize_model`]
///
/// # Examples
///
/// ```
/// use simple_api_serializers::{FieldInfo, ModelGraph, ModelMeta, SerializeModel};
/// use serde_json::json;
/// use std::sync::Arc;
///
/// let meta = Arc::new(ModelMeta::new("auth.Group").with_field(FieldInfo::scalar("name")));
/// let mut graph = ModelGraph::new();
/// let group = graph.insert(&meta, json!(3));
/// graph.set_attr(group, "name", json!("staff"));
///
/// let data = graph.object(group).serialize(&[]).unwrap();
/// assert_eq!(data["name"], json!("staff"));
/// ```
pub trait SerializeModel {
	/// See [`serialize_model`]
	fn serialize(&self, excludes: &[&str]) -> SerializeResult<Map<String, Value>>;
}

impl<T: Model> SerializeModel for T {
	fn serialize(&self, excludes: &[&str]) -> SerializeResult<Map<String, Value>> {
		serialize_model(self, excludes)
	}
}

/// Remove every excluded key from the mapping built for `instance`
fn remove_excludes(
	instance: &dyn Model,
	result: &mut Map<String, Value>,
	excludes: &[&str],
) -> SerializeResult<()> {
	for key in excludes {
		if result.shift_remove(*key).is_none() {
			tracing::warn!(
				model = instance.meta().label(),
				key = *key,
				"excluded key is not present in serialized instance"
			);
			return Err(SerializeError::ExcludedKeyMissing {
				model: instance.meta().label().to_string(),
				key: (*key).to_string(),
			});
		}
	}
	Ok(())
}

/// Serialize a related instance reached through one of the caches
fn serialize_related(
	related: Option<&dyn Model>,
	context: &mut SerializationContext,
	excludes: &[&str],
) -> SerializeResult<Value> {
	let Some(instance) = related else {
		return Ok(Value::Object(Map::new()));
	};

	let key = instance.object_key();
	if !context.visit(key) {
		tracing::trace!(
			model = instance.meta().label(),
			depth = context.current_depth(),
			"instance already serialized, emitting primary key"
		);
		return Ok(instance.pk());
	}

	serialize_fields(instance, context, excludes).map(Value::Object)
}

/// Serialize a prefetched member; an expanded member loses the excluded keys
fn serialize_member(
	member: &dyn Model,
	context: &mut SerializationContext,
	excludes: &[&str],
) -> SerializeResult<Value> {
	match serialize_related(Some(member), context, excludes)? {
		Value::Object(mut map) => {
			remove_excludes(member, &mut map, excludes)?;
			Ok(Value::Object(map))
		}
		pk => Ok(pk),
	}
}

/// Build the mapping for an instance that has just been marked visited
fn serialize_fields(
	instance: &dyn Model,
	context: &mut SerializationContext,
	excludes: &[&str],
) -> SerializeResult<Map<String, Value>> {
	let mut result = Map::new();
	// First failure wins; later relations are skipped.
	let mut failure: Option<SerializeError> = None;
	context.descend();

	instance.visit_field_cache(&mut |name, related| {
		if failure.is_some() {
			return;
		}
		match serialize_related(related, context, excludes) {
			Ok(value) => {
				result.insert(name.to_string(), value);
			}
			Err(err) => failure = Some(err),
		}
	});

	let meta = instance.meta();
	let buried_fields = instance.buried_fields();
	instance.visit_attributes(&mut |name, value| {
		if buried_fields.iter().any(|buried| buried == name) {
			return;
		}
		if meta.get_field(name).is_none() {
			tracing::trace!(
				model = meta.label(),
				attribute = name,
				"skipping non-field attribute"
			);
			return;
		}
		result.insert(name.to_string(), value.clone());
	});

	instance.visit_prefetch_cache(&mut |name, members| {
		if failure.is_some() {
			return;
		}
		let items: SerializeResult<Vec<Value>> = members
			.iter()
			.map(|member| serialize_member(*member, context, excludes))
			.collect();
		match items {
			Ok(items) => {
				result.insert(name.to_string(), Value::Array(items));
			}
			Err(err) => failure = Some(err),
		}
	});

	context.ascend();
	match failure {
		Some(err) => Err(err),
		None => Ok(result),
	}
}
