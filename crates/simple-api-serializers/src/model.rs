//! Capability traits over ORM model instances
//!
//! The serializer never talks to a database. It only reads what the ORM has
//! already materialized on an instance: the loaded attribute set, the to-one
//! relation cache filled by `select_related`, and the to-many cache filled by
//! `prefetch_related`. Each of those is exposed through its own trait so an
//! adapter can be written for any ORM.

use serde_json::Value;
use std::fmt;

/// Kind of a declared model field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
	/// Plain column value
	Scalar,
	/// Many-to-one relation stored under an `<name>_id` attribute
	ForeignKey,
	/// One-to-one relation stored under an `<name>_id` attribute
	OneToOne,
	/// Many-to-many relation (never present in the attribute set)
	ManyToMany,
}

/// Metadata for one declared model field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
	name: String,
	attname: Option<String>,
	kind: FieldKind,
}

impl FieldInfo {
	/// Declares a scalar field
	///
	/// # Examples
	///
	/// ```
	/// use simple_api_serializers::{FieldInfo, FieldKind};
	///
	/// let field = FieldInfo::scalar("title");
	/// assert_eq!(field.name(), "title");
	/// assert_eq!(field.attname(), "title");
	/// assert_eq!(field.kind(), FieldKind::Scalar);
	/// ```
	pub fn scalar(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			attname: None,
			kind: FieldKind::Scalar,
		}
	}

	/// Declares a foreign key, stored on the instance as `<name>_id`
	///
	/// # Examples
	///
	/// ```
	/// use simple_api_serializers::FieldInfo;
	///
	/// let field = FieldInfo::foreign_key("author");
	/// assert_eq!(field.attname(), "author_id");
	/// ```
	pub fn foreign_key(name: impl Into<String>) -> Self {
		Self::relation(name.into(), FieldKind::ForeignKey)
	}

	/// Declares a one-to-one relation, stored on the instance as `<name>_id`
	pub fn one_to_one(name: impl Into<String>) -> Self {
		Self::relation(name.into(), FieldKind::OneToOne)
	}

	/// Declares a many-to-many relation
	pub fn many_to_many(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			attname: None,
			kind: FieldKind::ManyToMany,
		}
	}

	fn relation(name: String, kind: FieldKind) -> Self {
		let attname = format!("{}_id", name);
		Self {
			name,
			attname: Some(attname),
			kind,
		}
	}

	/// Overrides the attribute name the value is stored under
	pub fn with_attname(mut self, attname: impl Into<String>) -> Self {
		self.attname = Some(attname.into());
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Attribute name on the instance; falls back to the field name
	pub fn attname(&self) -> &str {
		self.attname.as_deref().unwrap_or(&self.name)
	}

	/// Kind of the field
	///
	/// Adapter metadata: serialization only relies on the field and
	/// attribute names, adapters use the kind to decide which caches a
	/// field fills.
	///
	/// # Examples
	///
	/// ```
	/// use simple_api_serializers::{FieldInfo, FieldKind};
	///
	/// let tags = FieldInfo::many_to_many("tags");
	/// assert_eq!(tags.kind(), FieldKind::ManyToMany);
	/// assert!(tags.is_relation());
	/// assert!(!FieldInfo::scalar("title").is_relation());
	/// ```
	pub fn kind(&self) -> FieldKind {
		self.kind
	}

	/// Whether the field is filled through a relation cache rather than
	/// a plain column (adapter metadata, see [`FieldInfo::kind`])
	pub fn is_relation(&self) -> bool {
		self.kind != FieldKind::Scalar
	}
}

/// Declared fields of a model
///
/// # Examples
///
/// ```
/// use simple_api_serializers::{FieldInfo, ModelMeta};
///
/// let meta = ModelMeta::new("blog.Article")
///     .with_field(FieldInfo::scalar("id"))
///     .with_field(FieldInfo::foreign_key("author"));
///
/// assert!(meta.get_field("author").is_some());
/// assert!(meta.get_field("author_id").is_some());
/// assert!(meta.get_field("_state").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelMeta {
	label: String,
	fields: Vec<FieldInfo>,
}

impl ModelMeta {
	/// Creates metadata for the model with the given `app.Model` label
	pub fn new(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			fields: Vec::new(),
		}
	}

	/// Adds a declared field
	pub fn with_field(mut self, field: FieldInfo) -> Self {
		self.fields.push(field);
		self
	}

	/// Adds several declared fields
	pub fn with_fields(mut self, fields: impl IntoIterator<Item = FieldInfo>) -> Self {
		self.fields.extend(fields);
		self
	}

	pub fn label(&self) -> &str {
		&self.label
	}

	pub fn fields(&self) -> &[FieldInfo] {
		&self.fields
	}

	/// Looks up a declared field by field name or attribute name
	///
	/// Returns `None` for anything the model does not declare, such as
	/// ORM bookkeeping attributes or annotations.
	pub fn get_field(&self, name: &str) -> Option<&FieldInfo> {
		self.fields
			.iter()
			.find(|field| field.name == name || field.attname() == name)
	}
}

/// Identity of a model instance within one serialization pass
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectKey {
	/// Saved instance: model label plus primary key
	Pk { label: String, pk: String },
	/// Unsaved instance: opaque per-object identity supplied by the adapter
	Instance(usize),
}

impl ObjectKey {
	/// Builds a primary-key identity, or `None` when the key is null
	///
	/// # Examples
	///
	/// ```
	/// use simple_api_serializers::ObjectKey;
	/// use serde_json::json;
	///
	/// let key = ObjectKey::from_pk("auth.User", &json!(1)).unwrap();
	/// assert_eq!(key.to_string(), "auth.User:1");
	/// assert!(ObjectKey::from_pk("auth.User", &json!(null)).is_none());
	/// ```
	pub fn from_pk(label: &str, pk: &Value) -> Option<Self> {
		if pk.is_null() {
			return None;
		}
		Some(Self::Pk {
			label: label.to_string(),
			pk: pk.to_string(),
		})
	}
}

impl fmt::Display for ObjectKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Pk { label, pk } => write!(f, "{}:{}", label, pk),
			Self::Instance(id) => write!(f, "instance@0x{:x}", id),
		}
	}
}

/// Core view of a loaded model instance
pub trait ModelInstance {
	/// Declared fields of the instance's model
	fn meta(&self) -> &ModelMeta;

	/// Primary key value, `Value::Null` when the instance is unsaved
	fn pk(&self) -> Value;

	/// Calls `visitor` for every loaded attribute, in load order
	///
	/// Deferred fields are simply absent. Attributes that are not declared
	/// fields may be reported too; the serializer filters them out.
	fn visit_attributes(&self, visitor: &mut dyn FnMut(&str, &Value));

	/// Field names this model never exposes
	fn buried_fields(&self) -> &[String] {
		&[]
	}

	/// Identity used for cycle detection
	///
	/// Defaults to the model label plus primary key, and to the address of
	/// `self` for unsaved instances.
	fn object_key(&self) -> ObjectKey {
		ObjectKey::from_pk(self.meta().label(), &self.pk())
			.unwrap_or_else(|| ObjectKey::Instance(self as *const Self as *const () as usize))
	}
}

/// Access to the to-one relation cache (`select_related`)
pub trait HasFieldCache {
	/// Calls `visitor` for every resolved to-one relation
	///
	/// `None` means the relation was resolved and is null.
	fn visit_field_cache(&self, visitor: &mut dyn FnMut(&str, Option<&dyn Model>));
}

/// Access to the to-many prefetch cache (`prefetch_related`)
pub trait HasPrefetchCache {
	/// Calls `visitor` for every prefetched collection
	fn visit_prefetch_cache(&self, visitor: &mut dyn FnMut(&str, &[&dyn Model]));
}

/// A model instance exposing every capability the serializer reads
pub trait Model: ModelInstance + HasFieldCache + HasPrefetchCache {}

impl<T> Model for T where T: ModelInstance + HasFieldCache + HasPrefetchCache + ?Sized {}

impl<T: ModelInstance + ?Sized> ModelInstance for &T {
	fn meta(&self) -> &ModelMeta {
		(**self).meta()
	}

	fn pk(&self) -> Value {
		(**self).pk()
	}

	fn visit_attributes(&self, visitor: &mut dyn FnMut(&str, &Value)) {
		(**self).visit_attributes(visitor)
	}

	fn buried_fields(&self) -> &[String] {
		(**self).buried_fields()
	}

	fn object_key(&self) -> ObjectKey {
		(**self).object_key()
	}
}

impl<T: HasFieldCache + ?Sized> HasFieldCache for &T {
	fn visit_field_cache(&self, visitor: &mut dyn FnMut(&str, Option<&dyn Model>)) {
		(**self).visit_field_cache(visitor)
	}
}

impl<T: HasPrefetchCache + ?Sized> HasPrefetchCache for &T {
	fn visit_prefetch_cache(&self, visitor: &mut dyn FnMut(&str, &[&dyn Model])) {
		(**self).visit_prefetch_cache(visitor)
	}
}
