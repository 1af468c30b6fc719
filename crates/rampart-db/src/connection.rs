use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::{DatabaseError, DbResult};
use crate::sqlite;
use crate::types::{QueryResult, QueryValue, Row};

/// Pooled handle to the panel's SQLite database.
///
/// Cloning is cheap; all clones share one pool.
#[derive(Debug, Clone)]
pub struct DatabaseConnection {
	pool: SqlitePool,
}

impl DatabaseConnection {
	/// Opens `url` (for example `sqlite://rampart.db` or `sqlite::memory:`),
	/// creating the database file when it does not exist yet.
	pub async fn connect(url: &str) -> DbResult<Self> {
		let options = SqliteConnectOptions::from_str(url)
			.map_err(|source| DatabaseError::Connection {
				url: url.to_string(),
				source,
			})?
			.create_if_missing(true);

		// An in-memory database lives and dies with its connection, so it
		// must be pinned to exactly one that never gets recycled.
		let memory = url.contains(":memory:");
		let mut pool_options = SqlitePoolOptions::new()
			.max_connections(if memory { 1 } else { 5 });
		if memory {
			pool_options = pool_options.idle_timeout(None).max_lifetime(None);
		}

		let pool = pool_options
			.connect_with(options)
			.await
			.map_err(|source| DatabaseError::Connection {
				url: url.to_string(),
				source,
			})?;
		Ok(Self { pool })
	}

	pub fn from_pool(pool: SqlitePool) -> Self {
		Self { pool }
	}

	pub fn pool(&self) -> &SqlitePool {
		&self.pool
	}

	/// Runs a statement that returns no rows.
	pub async fn execute(&self, sql: &str, params: Vec<QueryValue>) -> DbResult<QueryResult> {
		let mut query = sqlx::query(sql);
		for param in &params {
			query = sqlite::bind_value(query, param);
		}
		let result = query.execute(&self.pool).await?;
		Ok(QueryResult {
			rows_affected: result.rows_affected(),
			last_insert_id: result.last_insert_rowid(),
		})
	}

	pub async fn fetch_all(&self, sql: &str, params: Vec<QueryValue>) -> DbResult<Vec<Row>> {
		let mut query = sqlx::query(sql);
		for param in &params {
			query = sqlite::bind_value(query, param);
		}
		let rows = query.fetch_all(&self.pool).await?;
		Ok(rows.iter().map(sqlite::convert_row).collect())
	}

	pub async fn fetch_optional(&self, sql: &str, params: Vec<QueryValue>) -> DbResult<Option<Row>> {
		let mut query = sqlx::query(sql);
		for param in &params {
			query = sqlite::bind_value(query, param);
		}
		let row = query.fetch_optional(&self.pool).await?;
		Ok(row.as_ref().map(sqlite::convert_row))
	}

	pub async fn fetch_one(&self, sql: &str, params: Vec<QueryValue>) -> DbResult<Row> {
		self.fetch_optional(sql, params)
			.await?
			.ok_or(DatabaseError::RowNotFound)
	}
}
