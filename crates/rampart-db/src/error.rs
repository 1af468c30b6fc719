use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
	#[error("failed to open database {url}: {source}")]
	Connection {
		url: String,
		source: sqlx::Error,
	},

	#[error("query failed: {0}")]
	Query(#[from] sqlx::Error),

	#[error("expected a row but the query returned none")]
	RowNotFound,
}

pub type DbResult<T> = Result<T, DatabaseError>;
