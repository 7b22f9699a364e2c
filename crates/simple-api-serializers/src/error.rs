//! Error types for model serialization

/// Errors returned by [`serialize_model`](crate::serialize_model)
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SerializeError {
	/// A caller-supplied exclusion names a key the serialized mapping lacks
	#[error("Cannot exclude '{key}': key is not present in the serialized '{model}' instance")]
	ExcludedKeyMissing { model: String, key: String },
}

/// Result type for serialization
pub type SerializeResult<T> = Result<T, SerializeError>;
