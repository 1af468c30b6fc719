//! Bind and decode glue between [`QueryValue`] and the sqlx SQLite driver.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use sqlx::sqlite::{SqliteArguments, SqliteColumn, SqliteRow};
use sqlx::{Column, Row as _};
use sqlx::TypeInfo;

use crate::types::{QueryValue, Row};

pub(crate) type SqliteQuery<'q> = sqlx::query::Query<'q, sqlx::Sqlite, SqliteArguments<'q>>;

pub(crate) fn bind_value<'q>(query: SqliteQuery<'q>, value: &QueryValue) -> SqliteQuery<'q> {
	match value {
		QueryValue::Null => query.bind(Option::<i64>::None),
		QueryValue::Bool(value) => query.bind(*value),
		QueryValue::Int(value) => query.bind(*value),
		QueryValue::Float(value) => query.bind(*value),
		QueryValue::String(value) => query.bind(value.clone()),
		QueryValue::Bytes(value) => query.bind(value.clone()),
		QueryValue::Timestamp(value) => query.bind(*value),
	}
}

pub(crate) fn convert_row(row: &SqliteRow) -> Row {
	let mut data = HashMap::new();
	for column in row.columns() {
		data.insert(column.name().to_string(), convert_value(row, column));
	}
	Row::new(data)
}

fn convert_value(row: &SqliteRow, column: &SqliteColumn) -> QueryValue {
	let index = column.ordinal();

	// NULL decodes as None for any target type; probe with two so both
	// numeric and textual columns are covered.
	if let Ok(None) = row.try_get::<Option<i64>, _>(index) {
		return QueryValue::Null;
	}
	if let Ok(None) = row.try_get::<Option<String>, _>(index) {
		return QueryValue::Null;
	}

	// SQLite stores booleans and timestamps in general storage classes;
	// the declared column type is what tells them apart from plain
	// integers and text.
	let declared = column.type_info().name().to_ascii_uppercase();
	if declared == "BOOLEAN" || declared == "BOOL" {
		if let Ok(value) = row.try_get::<bool, _>(index) {
			return QueryValue::Bool(value);
		}
	}
	if declared.contains("TIMESTAMP") || declared.contains("DATETIME") {
		if let Ok(value) = row.try_get::<NaiveDateTime, _>(index) {
			return QueryValue::Timestamp(value);
		}
	}

	if let Ok(value) = row.try_get::<i64, _>(index) {
		return QueryValue::Int(value);
	}
	if let Ok(value) = row.try_get::<f64, _>(index) {
		return QueryValue::Float(value);
	}
	if let Ok(value) = row.try_get::<String, _>(index) {
		return QueryValue::String(value);
	}
	if let Ok(value) = row.try_get::<Vec<u8>, _>(index) {
		return QueryValue::Bytes(value);
	}
	QueryValue::Null
}
