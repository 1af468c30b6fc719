use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde_json::Value as JsonValue;

/// A bind parameter or decoded column value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
	Null,
	Bool(bool),
	Int(i64),
	Float(f64),
	String(String),
	Bytes(Vec<u8>),
	Timestamp(NaiveDateTime),
}

impl QueryValue {
	pub fn is_null(&self) -> bool {
		matches!(self, QueryValue::Null)
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			QueryValue::String(value) => Some(value),
			_ => None,
		}
	}

	pub fn as_i64(&self) -> Option<i64> {
		match self {
			QueryValue::Int(value) => Some(*value),
			QueryValue::Bool(value) => Some(i64::from(*value)),
			_ => None,
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			QueryValue::Bool(value) => Some(*value),
			QueryValue::Int(value) => Some(*value != 0),
			_ => None,
		}
	}

	pub fn as_f64(&self) -> Option<f64> {
		match self {
			QueryValue::Float(value) => Some(*value),
			QueryValue::Int(value) => Some(*value as f64),
			_ => None,
		}
	}

	/// JSON rendering used when rows cross into the admin framework.
	pub fn to_json(&self) -> JsonValue {
		match self {
			QueryValue::Null => JsonValue::Null,
			QueryValue::Bool(value) => JsonValue::Bool(*value),
			QueryValue::Int(value) => JsonValue::from(*value),
			QueryValue::Float(value) => {
				serde_json::Number::from_f64(*value)
					.map(JsonValue::Number)
					.unwrap_or(JsonValue::Null)
			}
			QueryValue::String(value) => JsonValue::String(value.clone()),
			QueryValue::Bytes(value) => {
				JsonValue::String(String::from_utf8_lossy(value).into_owned())
			}
			QueryValue::Timestamp(value) => {
				JsonValue::String(value.format("%Y-%m-%d %H:%M:%S").to_string())
			}
		}
	}
}

impl From<bool> for QueryValue {
	fn from(value: bool) -> Self {
		QueryValue::Bool(value)
	}
}

impl From<i32> for QueryValue {
	fn from(value: i32) -> Self {
		QueryValue::Int(i64::from(value))
	}
}

impl From<i64> for QueryValue {
	fn from(value: i64) -> Self {
		QueryValue::Int(value)
	}
}

impl From<f64> for QueryValue {
	fn from(value: f64) -> Self {
		QueryValue::Float(value)
	}
}

impl From<&str> for QueryValue {
	fn from(value: &str) -> Self {
		QueryValue::String(value.to_string())
	}
}

impl From<String> for QueryValue {
	fn from(value: String) -> Self {
		QueryValue::String(value)
	}
}

impl From<Vec<u8>> for QueryValue {
	fn from(value: Vec<u8>) -> Self {
		QueryValue::Bytes(value)
	}
}

impl From<NaiveDateTime> for QueryValue {
	fn from(value: NaiveDateTime) -> Self {
		QueryValue::Timestamp(value)
	}
}

impl<T> From<Option<T>> for QueryValue
where
	T: Into<QueryValue>,
{
	fn from(value: Option<T>) -> Self {
		value.map(Into::into).unwrap_or(QueryValue::Null)
	}
}

/// One decoded result row.
#[derive(Debug, Clone, Default)]
pub struct Row {
	data: HashMap<String, QueryValue>,
}

impl Row {
	pub fn new(data: HashMap<String, QueryValue>) -> Self {
		Self { data }
	}

	pub fn get(&self, column: &str) -> Option<&QueryValue> {
		self.data.get(column)
	}

	pub fn get_string(&self, column: &str) -> Option<String> {
		self.get(column).and_then(|value| value.as_str()).map(str::to_string)
	}

	pub fn get_i64(&self, column: &str) -> Option<i64> {
		self.get(column).and_then(QueryValue::as_i64)
	}

	pub fn get_bool(&self, column: &str) -> Option<bool> {
		self.get(column).and_then(QueryValue::as_bool)
	}

	pub fn columns(&self) -> impl Iterator<Item = &str> {
		self.data.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn into_json_map(self) -> HashMap<String, JsonValue> {
		self.data
			.into_iter()
			.map(|(column, value)| (column, value.to_json()))
			.collect()
	}
}

/// Outcome of a statement that does not return rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryResult {
	pub rows_affected: u64,
	pub last_insert_id: i64,
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(QueryValue::from(true), QueryValue::Bool(true))]
	#[case(QueryValue::from(42i64), QueryValue::Int(42))]
	#[case(QueryValue::from(7i32), QueryValue::Int(7))]
	#[case(QueryValue::from(1.5f64), QueryValue::Float(1.5))]
	#[case(QueryValue::from("alice"), QueryValue::String("alice".to_string()))]
	#[case(QueryValue::from(Option::<i64>::None), QueryValue::Null)]
	#[case(QueryValue::from(Some("x")), QueryValue::String("x".to_string()))]
	fn test_from_impls(#[case] actual: QueryValue, #[case] expected: QueryValue) {
		assert_eq!(actual, expected);
	}

	#[test]
	fn test_int_coerces_to_bool_and_float() {
		assert_eq!(QueryValue::Int(1).as_bool(), Some(true));
		assert_eq!(QueryValue::Int(0).as_bool(), Some(false));
		assert_eq!(QueryValue::Int(3).as_f64(), Some(3.0));
	}

	#[test]
	fn test_to_json_timestamp_uses_space_separator() {
		let ts: NaiveDateTime = "2026-01-02T03:04:05".parse().unwrap();
		assert_eq!(
			QueryValue::Timestamp(ts).to_json(),
			JsonValue::String("2026-01-02 03:04:05".to_string())
		);
	}

	#[test]
	fn test_row_typed_getters() {
		let mut data = HashMap::new();
		data.insert("id".to_string(), QueryValue::Int(3));
		data.insert("username".to_string(), QueryValue::String("alice".to_string()));
		data.insert("active".to_string(), QueryValue::Bool(true));
		let row = Row::new(data);

		assert_eq!(row.get_i64("id"), Some(3));
		assert_eq!(row.get_string("username"), Some("alice".to_string()));
		assert_eq!(row.get_bool("active"), Some(true));
		assert_eq!(row.get_i64("missing"), None);
	}

	#[test]
	fn test_into_json_map() {
		let mut data = HashMap::new();
		data.insert("id".to_string(), QueryValue::Int(1));
		data.insert("note".to_string(), QueryValue::Null);
		let map = Row::new(data).into_json_map();

		assert_eq!(map.get("id"), Some(&JsonValue::from(1)));
		assert_eq!(map.get("note"), Some(&JsonValue::Null));
	}
}
