//! Error taxonomy for the admin framework.

use rampart_auth::AuthenticationError;
use rampart_db::DatabaseError;
use thiserror::Error;

/// Everything that can go wrong while serving an admin request.
///
/// The router maps each variant onto an HTTP response; see
/// `router::error_response`. Database and query-construction failures are
/// reported as 500s without leaking detail to the page.
#[derive(Debug, Error)]
pub enum AdminError {
	#[error("no admin registered for model '{0}'")]
	ModelNotRegistered(String),

	#[error("an admin for model '{0}' is already registered")]
	AlreadyRegistered(String),

	#[error("no {model} record with primary key {pk}")]
	RecordNotFound { model: String, pk: String },

	#[error("permission denied")]
	PermissionDenied,

	#[error(transparent)]
	Authentication(#[from] AuthenticationError),

	#[error("{0}")]
	Validation(String),

	#[error("query construction failed: {0}")]
	QueryBuild(String),

	#[error(transparent)]
	Database(#[from] DatabaseError),
}

pub type AdminResult<T> = Result<T, AdminError>;
