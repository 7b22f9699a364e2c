//! Request helper integration tests

use rstest::rstest;
use serde_json::{Value, json};
use simple_api_urls::{
	ClassView, FunctionView, QueryDict, View, ViewHandler, is_class_view, merge_query_dict,
};
use std::sync::Arc;

#[rstest]
#[case("a=1", json!({"a": "1"}))]
#[case("a=1&a=2", json!({"a": ["1", "2"]}))]
#[case("a=1&b=2&a=3", json!({"a": ["1", "3"], "b": "2"}))]
#[case("", json!({}))]
#[case("flag=", json!({"flag": ""}))]
fn test_merge_parsed_query(#[case] query: &str, #[case] expected: Value) {
	// Arrange
	let query = QueryDict::parse(query).unwrap();

	// Act
	let merged = merge_query_dict(&query);

	// Assert
	assert_eq!(Value::Object(merged), expected);
}

#[rstest]
fn test_merge_drops_keys_without_values() {
	// Arrange
	let mut query = QueryDict::new();
	query.append("page", "3");
	query.set_list("tags", Vec::<String>::new());

	// Act
	let merged = merge_query_dict(&query);

	// Assert
	assert!(query.contains_key("tags"));
	assert_eq!(Value::Object(merged), json!({"page": "3"}));
}

struct Dashboard;
impl View for Dashboard {}

struct NamedFunction;
impl ViewHandler for NamedFunction {
	fn name(&self) -> &str {
		"named_function"
	}
}

#[rstest]
#[case(Arc::new(FunctionView::new("index")), false)]
#[case(Arc::new(NamedFunction), false)]
#[case(Arc::new(Dashboard::as_view()), true)]
#[case(Arc::new(ClassView::of::<Dashboard>()), true)]
fn test_is_class_view(#[case] handler: Arc<dyn ViewHandler>, #[case] expected: bool) {
	assert_eq!(is_class_view(handler.as_ref()), expected);
}
