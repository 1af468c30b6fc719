use thiserror::Error;

/// Errors raised while serving or parsing HTTP traffic.
#[derive(Debug, Error)]
pub enum HttpError {
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("connection error: {0}")]
	Connection(#[from] hyper::Error),

	#[error("invalid request body: {0}")]
	InvalidBody(String),
}

pub type HttpResult<T> = Result<T, HttpError>;
