//! Multi-valued query parameters

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Ordered multi-valued mapping of query parameters
///
/// Every key maps to the list of values it was given, in arrival order.
/// Keys keep the order in which they first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryDict {
	entries: IndexMap<String, Vec<String>>,
}

impl QueryDict {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse an `application/x-www-form-urlencoded` query string
	///
	/// # Examples
	///
	/// ```
	/// use simple_api_urls::QueryDict;
	///
	/// let query = QueryDict::parse("tag=rust&tag=web&page=2").unwrap();
	/// assert_eq!(query.get_list("tag"), ["rust", "web"]);
	/// assert_eq!(query.get("page"), Some("2"));
	/// ```
	pub fn parse(query: &str) -> Result<Self, serde_urlencoded::de::Error> {
		let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)?;
		Ok(pairs.into_iter().collect())
	}

	/// Add `value` to the values of `key`
	pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.entries.entry(key.into()).or_default().push(value.into());
	}

	/// Replace every value of `key`
	///
	/// An empty list keeps the key with no values.
	pub fn set_list<I, S>(&mut self, key: impl Into<String>, values: I)
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.entries
			.insert(key.into(), values.into_iter().map(Into::into).collect());
	}

	/// Last value given for `key`
	pub fn get(&self, key: &str) -> Option<&str> {
		self.entries
			.get(key)
			.and_then(|values| values.last())
			.map(String::as_str)
	}

	/// Every value given for `key`, empty if the key is absent
	pub fn get_list(&self, key: &str) -> &[String] {
		self.entries.get(key).map(Vec::as_slice).unwrap_or_default()
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	/// Number of distinct keys
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
		self.entries
			.iter()
			.map(|(key, values)| (key.as_str(), values.as_slice()))
	}
}

impl<K, V> FromIterator<(K, V)> for QueryDict
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut query = Self::new();
		for (key, value) in iter {
			query.append(key, value);
		}
		query
	}
}

/// Flatten a [`QueryDict`] into a JSON object
///
/// A key with one value maps to that value, a key with several maps to the
/// list of them, and a key with none is left out. Key order is kept.
///
/// # Examples
///
/// ```
/// use simple_api_urls::{QueryDict, merge_query_dict};
/// use serde_json::json;
///
/// let mut query = QueryDict::parse("a=1&b=2&b=3").unwrap();
/// query.set_list("c", Vec::<String>::new());
///
/// assert_eq!(
///     serde_json::Value::Object(merge_query_dict(&query)),
///     json!({"a": "1", "b": ["2", "3"]})
/// );
/// ```
pub fn merge_query_dict(query: &QueryDict) -> Map<String, Value> {
	query
		.iter()
		.filter_map(|(key, values)| {
			let value = match values {
				[] => return None,
				[single] => Value::String(single.clone()),
				many => Value::Array(many.iter().cloned().map(Value::String).collect()),
			};
			Some((key.to_string(), value))
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_parse_decodes_and_groups() {
		let query = QueryDict::parse("q=hello+world&tag=a%26b&tag=c").unwrap();

		assert_eq!(query.get("q"), Some("hello world"));
		assert_eq!(query.get_list("tag"), ["a&b", "c"]);
		assert_eq!(query.len(), 2);
	}

	#[rstest]
	fn test_get_returns_last_value() {
		let query: QueryDict = [("page", "1"), ("page", "2")].into_iter().collect();

		assert_eq!(query.get("page"), Some("2"));
		assert_eq!(query.get("missing"), None);
		assert!(query.get_list("missing").is_empty());
	}

	#[rstest]
	fn test_key_order_follows_first_appearance() {
		let query: QueryDict = [("b", "1"), ("a", "2"), ("b", "3")].into_iter().collect();

		let keys: Vec<&str> = query.iter().map(|(key, _)| key).collect();
		assert_eq!(keys, vec!["b", "a"]);
	}

	#[rstest]
	#[case(&["1"], Some(json!("1")))]
	#[case(&["1", "2"], Some(json!(["1", "2"])))]
	#[case(&[], None)]
	fn test_merge_query_dict_value_shapes(
		#[case] values: &[&str],
		#[case] expected: Option<Value>,
	) {
		let mut query = QueryDict::new();
		query.set_list("a", values.iter().copied());

		let merged = merge_query_dict(&query);
		assert_eq!(merged.get("a").cloned(), expected);
	}

	#[rstest]
	fn test_merge_query_dict_keeps_order() {
		let query = QueryDict::parse("z=1&y=2&y=3&x=4").unwrap();

		let merged = merge_query_dict(&query);
		let keys: Vec<&String> = merged.keys().collect();
		assert_eq!(keys, vec!["z", "y", "x"]);
	}

	#[rstest]
	fn test_merge_empty_query() {
		assert!(merge_query_dict(&QueryDict::new()).is_empty());
	}
}
