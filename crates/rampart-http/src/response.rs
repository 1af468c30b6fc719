use bytes::Bytes;
use http::header::{CONTENT_TYPE, LOCATION, SET_COOKIE};
use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};

/// An outgoing HTTP response.
///
/// Constructed from a status helper and refined with the chainable `with_*`
/// methods:
///
/// ```
/// use rampart_http::Response;
///
/// let response = Response::ok().with_html("<h1>Dashboard</h1>");
/// assert_eq!(response.status, rampart_http::StatusCode::OK);
/// ```
#[derive(Debug, Clone)]
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Response {
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}

	/// Post/redirect/get redirect to `location`.
	pub fn see_other(location: &str) -> Self {
		Self::new(StatusCode::SEE_OTHER).with_location(location)
	}

	pub fn bad_request() -> Self {
		Self::new(StatusCode::BAD_REQUEST)
	}

	pub fn unauthorized() -> Self {
		Self::new(StatusCode::UNAUTHORIZED)
	}

	pub fn forbidden() -> Self {
		Self::new(StatusCode::FORBIDDEN)
	}

	pub fn not_found() -> Self {
		Self::new(StatusCode::NOT_FOUND)
	}

	pub fn method_not_allowed() -> Self {
		Self::new(StatusCode::METHOD_NOT_ALLOWED)
	}

	pub fn internal_server_error() -> Self {
		Self::new(StatusCode::INTERNAL_SERVER_ERROR)
	}

	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Sets the body and the `text/html` content type in one step.
	pub fn with_html(self, body: impl Into<Bytes>) -> Self {
		self.with_header("content-type", "text/html; charset=utf-8")
			.with_body(body)
	}

	/// Sets (replaces) a header; invalid names or values are ignored.
	pub fn with_header(mut self, name: &str, value: &str) -> Self {
		if let (Ok(name), Ok(value)) = (HeaderName::try_from(name), HeaderValue::try_from(value)) {
			self.headers.insert(name, value);
		}
		self
	}

	pub fn with_location(mut self, location: &str) -> Self {
		if let Ok(value) = HeaderValue::try_from(location) {
			self.headers.insert(LOCATION, value);
		}
		self
	}

	/// Appends a session-style cookie scoped to the whole site.
	pub fn with_cookie(mut self, name: &str, value: &str) -> Self {
		let cookie = format!("{name}={value}; Path=/; HttpOnly; SameSite=Lax");
		if let Ok(value) = HeaderValue::try_from(cookie.as_str()) {
			self.headers.append(SET_COOKIE, value);
		}
		self
	}

	/// Appends a cookie that instructs the client to drop `name`.
	pub fn with_expired_cookie(mut self, name: &str) -> Self {
		let cookie = format!("{name}=; Path=/; HttpOnly; Max-Age=0");
		if let Ok(value) = HeaderValue::try_from(cookie.as_str()) {
			self.headers.append(SET_COOKIE, value);
		}
		self
	}

	pub fn content_type(&self) -> Option<&str> {
		self.headers.get(CONTENT_TYPE).and_then(|value| value.to_str().ok())
	}

	pub fn location(&self) -> Option<&str> {
		self.headers.get(LOCATION).and_then(|value| value.to_str().ok())
	}

	/// Body as UTF-8 text; convenient in handlers and tests.
	pub fn body_text(&self) -> String {
		String::from_utf8_lossy(&self.body).into_owned()
	}
}
