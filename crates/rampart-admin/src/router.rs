//! URL dispatch for the panel.
//!
//! Routes under the mount prefix (default `/admin`):
//!
//! ```text
//! GET  /                    dashboard
//! GET  /login/   POST /login/    session login
//! GET  /logout/             session logout
//! GET  /{model}/?page=N     record list
//! GET  /{model}/add/        blank form    POST create
//! GET  /{model}/{pk}/change/ bound form   POST update
//! POST /{model}/{pk}/delete/ delete
//! ```
//!
//! Everything below the login pair requires a session; anonymous requests
//! are redirected to the login form with a `next` parameter. Permission
//! checks live in the views and always run before any data access.

use std::sync::Arc;

use async_trait::async_trait;
use rampart_auth::{PasswordHasher, SessionStore};
use rampart_http::{
	urlencode, Handler, HttpResult, Method, Request, Response, StatusCode,
};
use tracing::{debug, error};

use crate::auth;
use crate::database::AdminDatabase;
use crate::error::AdminError;
use crate::site::AdminSite;
use crate::views::{change, dashboard, delete, list, login, pages};

pub const DEFAULT_COOKIE_NAME: &str = "rampart_session";

/// Shared state every view works against.
pub struct AdminContext {
	pub site: Arc<AdminSite>,
	pub db: Arc<AdminDatabase>,
	pub sessions: Arc<SessionStore>,
	pub hasher: Arc<dyn PasswordHasher>,
	pub cookie_name: String,
	/// Mount prefix without a trailing slash, e.g. `/admin`.
	pub prefix: String,
}

/// The [`Handler`] serving one [`AdminSite`].
pub struct AdminRouter {
	context: AdminContext,
}

impl AdminRouter {
	pub fn new(
		site: Arc<AdminSite>,
		db: Arc<AdminDatabase>,
		sessions: Arc<SessionStore>,
		hasher: Arc<dyn PasswordHasher>,
	) -> Self {
		Self {
			context: AdminContext {
				site,
				db,
				sessions,
				hasher,
				cookie_name: DEFAULT_COOKIE_NAME.to_string(),
				prefix: "/admin".to_string(),
			},
		}
	}

	pub fn with_prefix(mut self, prefix: &str) -> Self {
		self.context.prefix = prefix.trim_end_matches('/').to_string();
		self
	}

	pub fn with_cookie_name(mut self, name: &str) -> Self {
		self.context.cookie_name = name.to_string();
		self
	}

	pub fn context(&self) -> &AdminContext {
		&self.context
	}

	async fn route(&self, request: &Request) -> Result<Response, AdminError> {
		let context = &self.context;
		let path = request.path().to_string();
		let Some(rest) = path.strip_prefix(context.prefix.as_str()) else {
			return Ok(not_found());
		};
		if !rest.is_empty() && !rest.starts_with('/') {
			// `/administrator` is not under `/admin`.
			return Ok(not_found());
		}
		let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();

		// The login pair is the only surface an anonymous client gets.
		match segments.as_slice() {
			["login"] => {
				return if request.method == Method::GET {
					Ok(login::page(context, request))
				} else if request.method == Method::POST {
					login::submit(context, request).await
				} else {
					Ok(Response::method_not_allowed())
				};
			}
			["logout"] => return Ok(login::logout(context, request)),
			_ => {}
		}

		let user =
			auth::request_user(request, &context.cookie_name, &context.sessions, &context.db)
				.await?;
		if !user.is_authenticated() {
			let next = request
				.uri
				.path_and_query()
				.map(|pq| pq.as_str().to_string())
				.unwrap_or(path);
			let target = format!("{}/login/?next={}", context.prefix, urlencode(&next));
			return Ok(Response::see_other(&target));
		}

		match segments.as_slice() {
			[] => dashboard::index(context, &user).await,
			[model] => {
				if request.method == Method::GET {
					list::page(context, request, model, &user).await
				} else {
					Ok(Response::method_not_allowed())
				}
			}
			[model, "add"] => {
				if request.method == Method::GET || request.method == Method::POST {
					change::add(context, request, model, &user).await
				} else {
					Ok(Response::method_not_allowed())
				}
			}
			[model, pk, "change"] => {
				let Ok(pk) = pk.parse::<i64>() else {
					return Ok(not_found());
				};
				if request.method == Method::GET || request.method == Method::POST {
					change::edit(context, request, model, pk, &user).await
				} else {
					Ok(Response::method_not_allowed())
				}
			}
			[model, pk, "delete"] => {
				let Ok(pk) = pk.parse::<i64>() else {
					return Ok(not_found());
				};
				if request.method == Method::POST {
					delete::record(context, model, pk, &user).await
				} else {
					Ok(Response::method_not_allowed())
				}
			}
			_ => Ok(not_found()),
		}
	}
}

#[async_trait]
impl Handler for AdminRouter {
	async fn handle(&self, request: Request) -> HttpResult<Response> {
		let method = request.method.clone();
		let path = request.path().to_string();
		let response = match self.route(&request).await {
			Ok(response) => response,
			Err(err) => error_response(&err),
		};
		debug!(%method, %path, status = %response.status, "admin request");
		Ok(response)
	}
}

fn not_found() -> Response {
	pages::error_page(StatusCode::NOT_FOUND, "The requested page does not exist.")
}

/// Maps an [`AdminError`] onto the page the client sees.
pub(crate) fn error_response(err: &AdminError) -> Response {
	match err {
		AdminError::ModelNotRegistered(_) | AdminError::RecordNotFound { .. } => not_found(),
		AdminError::PermissionDenied => pages::error_page(
			StatusCode::FORBIDDEN,
			"You do not have permission to view this page.",
		),
		AdminError::Authentication(_) => {
			pages::error_page(StatusCode::FORBIDDEN, "Authentication failed.")
		}
		AdminError::Validation(message) => pages::error_page(StatusCode::BAD_REQUEST, message),
		AdminError::AlreadyRegistered(_)
		| AdminError::QueryBuild(_)
		| AdminError::Database(_) => {
			error!(%err, "admin request failed");
			pages::error_page(
				StatusCode::INTERNAL_SERVER_ERROR,
				"Something went wrong handling this request.",
			)
		}
	}
}
