//! Storage façade for the admin views.
//!
//! SQL is built with `sea-query` and rendered through
//! [`SqliteQueryBuilder`], values inlined, then executed over the shared
//! [`DatabaseConnection`]. Rows travel as [`AdminRecord`] maps so the views
//! stay free of per-model types.

use rampart_db::DatabaseConnection;
use sea_query::{Alias, Asterisk, Expr, ExprTrait, Order, Query, SimpleExpr, SqliteQueryBuilder};
use serde_json::Value as JsonValue;

use crate::error::{AdminError, AdminResult};
use crate::model_admin::InlineRelation;
use crate::types::AdminRecord;

/// Maps a JSON value onto the `sea_query` value it is stored as.
fn sea_value(value: &JsonValue) -> sea_query::Value {
	match value {
		JsonValue::String(text) => text.clone().into(),
		JsonValue::Number(number) => {
			if let Some(int) = number.as_i64() {
				int.into()
			} else if let Some(float) = number.as_f64() {
				float.into()
			} else {
				number.to_string().into()
			}
		}
		JsonValue::Bool(flag) => (*flag).into(),
		JsonValue::Null => sea_query::Value::Int(None),
		other => other.to_string().into(),
	}
}

/// Record keys in sorted order, so generated SQL is stable.
fn sorted_keys(record: &AdminRecord) -> Vec<&String> {
	let mut keys: Vec<&String> = record.keys().collect();
	keys.sort();
	keys
}

#[derive(Clone)]
pub struct AdminDatabase {
	connection: DatabaseConnection,
}

impl AdminDatabase {
	pub fn new(connection: DatabaseConnection) -> Self {
		Self { connection }
	}

	pub fn connection(&self) -> &DatabaseConnection {
		&self.connection
	}

	/// Inserts a record and returns the new primary key.
	pub async fn insert(&self, table: &str, record: &AdminRecord) -> AdminResult<i64> {
		let mut columns = Vec::new();
		let mut values: Vec<SimpleExpr> = Vec::new();
		for key in sorted_keys(record) {
			columns.push(Alias::new(key));
			values.push(sea_value(&record[key]).into());
		}

		let mut query = Query::insert().into_table(Alias::new(table)).to_owned();
		query
			.columns(columns)
			.values(values)
			.map_err(|err| AdminError::QueryBuild(err.to_string()))?;

		let sql = query.to_string(SqliteQueryBuilder);
		let result = self.connection.execute(&sql, Vec::new()).await?;
		Ok(result.last_insert_id)
	}

	pub async fn get(
		&self,
		table: &str,
		pk_field: &str,
		id: i64,
	) -> AdminResult<Option<AdminRecord>> {
		let query = Query::select()
			.from(Alias::new(table))
			.column(Asterisk)
			.and_where(Expr::col(Alias::new(pk_field)).eq(id))
			.to_owned();

		let sql = query.to_string(SqliteQueryBuilder);
		let row = self.connection.fetch_optional(&sql, Vec::new()).await?;
		Ok(row.map(|row| row.into_json_map()))
	}

	/// Lists up to `limit` records from `offset`, selecting `columns` (all
	/// when empty) ordered by `ordering` (leading `-` for descending).
	pub async fn list(
		&self,
		table: &str,
		columns: &[String],
		ordering: &[String],
		limit: u64,
		offset: u64,
	) -> AdminResult<Vec<AdminRecord>> {
		let mut query = Query::select().from(Alias::new(table)).to_owned();
		if columns.is_empty() {
			query.column(Asterisk);
		} else {
			for column in columns {
				query.column(Alias::new(column));
			}
		}
		for order in ordering {
			match order.strip_prefix('-') {
				Some(column) => query.order_by(Alias::new(column), Order::Desc),
				None => query.order_by(Alias::new(order), Order::Asc),
			};
		}
		query.limit(limit).offset(offset);

		let sql = query.to_string(SqliteQueryBuilder);
		let rows = self.connection.fetch_all(&sql, Vec::new()).await?;
		Ok(rows.into_iter().map(|row| row.into_json_map()).collect())
	}

	pub async fn count(&self, table: &str) -> AdminResult<u64> {
		let query = Query::select()
			.from(Alias::new(table))
			.expr_as(Expr::cust("COUNT(*)"), Alias::new("count"))
			.to_owned();

		let sql = query.to_string(SqliteQueryBuilder);
		let row = self.connection.fetch_one(&sql, Vec::new()).await?;
		Ok(row.get_i64("count").unwrap_or(0) as u64)
	}

	/// Updates the named columns of one record; absent columns keep their
	/// stored value. Returns the number of affected rows.
	pub async fn update(
		&self,
		table: &str,
		pk_field: &str,
		id: i64,
		record: &AdminRecord,
	) -> AdminResult<u64> {
		if record.is_empty() {
			return Ok(0);
		}

		let mut query = Query::update().table(Alias::new(table)).to_owned();
		for key in sorted_keys(record) {
			query.value(Alias::new(key), sea_value(&record[key]));
		}
		query.and_where(Expr::col(Alias::new(pk_field)).eq(id));

		let sql = query.to_string(SqliteQueryBuilder);
		let result = self.connection.execute(&sql, Vec::new()).await?;
		Ok(result.rows_affected)
	}

	pub async fn delete(&self, table: &str, pk_field: &str, id: i64) -> AdminResult<u64> {
		let query = Query::delete()
			.from_table(Alias::new(table))
			.and_where(Expr::col(Alias::new(pk_field)).eq(id))
			.to_owned();

		let sql = query.to_string(SqliteQueryBuilder);
		let result = self.connection.execute(&sql, Vec::new()).await?;
		Ok(result.rows_affected)
	}

	/// All `(pk, label)` options for an inline relation, ordered by label.
	pub async fn related_choices(&self, inline: &InlineRelation) -> AdminResult<Vec<(i64, String)>> {
		let query = Query::select()
			.from(Alias::new(&inline.related_table))
			.column(Alias::new(&inline.related_pk))
			.column(Alias::new(&inline.label_field))
			.order_by(Alias::new(&inline.label_field), Order::Asc)
			.to_owned();

		let sql = query.to_string(SqliteQueryBuilder);
		let rows = self.connection.fetch_all(&sql, Vec::new()).await?;
		Ok(rows
			.into_iter()
			.filter_map(|row| {
				let id = row.get_i64(&inline.related_pk)?;
				let label = row.get_string(&inline.label_field)?;
				Some((id, label))
			})
			.collect())
	}

	/// Related primary keys currently joined to `parent_id`.
	pub async fn selected_related(
		&self,
		inline: &InlineRelation,
		parent_id: i64,
	) -> AdminResult<Vec<i64>> {
		let query = Query::select()
			.from(Alias::new(&inline.table))
			.column(Alias::new(&inline.related_fk))
			.and_where(Expr::col(Alias::new(&inline.parent_fk)).eq(parent_id))
			.order_by(Alias::new(&inline.related_fk), Order::Asc)
			.to_owned();

		let sql = query.to_string(SqliteQueryBuilder);
		let rows = self.connection.fetch_all(&sql, Vec::new()).await?;
		Ok(rows
			.into_iter()
			.filter_map(|row| row.get_i64(&inline.related_fk))
			.collect())
	}

	/// Replaces the memberships of `parent_id` with `related_ids`.
	pub async fn set_related(
		&self,
		inline: &InlineRelation,
		parent_id: i64,
		related_ids: &[i64],
	) -> AdminResult<()> {
		let delete = Query::delete()
			.from_table(Alias::new(&inline.table))
			.and_where(Expr::col(Alias::new(&inline.parent_fk)).eq(parent_id))
			.to_owned();
		self.connection
			.execute(&delete.to_string(SqliteQueryBuilder), Vec::new())
			.await?;

		if related_ids.is_empty() {
			return Ok(());
		}

		let mut insert = Query::insert().into_table(Alias::new(&inline.table)).to_owned();
		insert.columns([
			Alias::new(&inline.parent_fk),
			Alias::new(&inline.related_fk),
		]);
		for related_id in related_ids {
			let row: [SimpleExpr; 2] = [
				sea_query::Value::from(parent_id).into(),
				sea_query::Value::from(*related_id).into(),
			];
			insert
				.values(row)
				.map_err(|err| AdminError::QueryBuild(err.to_string()))?;
		}

		let sql = insert.to_string(SqliteQueryBuilder);
		self.connection.execute(&sql, Vec::new()).await?;
		Ok(())
	}
}
