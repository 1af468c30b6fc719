use std::collections::HashMap;
use std::net::SocketAddr;

use bytes::Bytes;
use http::{HeaderMap, Method, Uri, Version};
use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

use crate::error::{HttpError, HttpResult};

/// An incoming HTTP request with its body already collected.
///
/// Handlers receive this instead of hyper's streaming request type: the
/// admin panel only ever deals in small form bodies, so buffering up front
/// keeps every handler synchronous-looking.
#[derive(Debug, Clone)]
pub struct Request {
	pub method: Method,
	pub uri: Uri,
	pub version: Version,
	pub headers: HeaderMap,
	pub body: Bytes,
	pub path_params: HashMap<String, String>,
	pub remote_addr: Option<SocketAddr>,
}

impl Request {
	pub fn builder() -> RequestBuilder {
		RequestBuilder::new()
	}

	/// Path portion of the request URI.
	pub fn path(&self) -> &str {
		self.uri.path()
	}

	/// First value of a header, when it is valid UTF-8.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(name).and_then(|value| value.to_str().ok())
	}

	/// All query parameters, percent-decoded. Repeated keys keep the last value.
	pub fn query_params(&self) -> HashMap<String, String> {
		let mut params = HashMap::new();
		let Some(query) = self.uri.query() else {
			return params;
		};
		for pair in query.split('&').filter(|pair| !pair.is_empty()) {
			let mut parts = pair.splitn(2, '=');
			let name = parts.next().unwrap_or_default();
			let value = parts.next().unwrap_or_default();
			params.insert(decode(name), decode(value));
		}
		params
	}

	pub fn query_param(&self, name: &str) -> Option<String> {
		self.query_params().remove(name)
	}

	/// Value of one cookie from the `Cookie` header.
	pub fn cookie(&self, name: &str) -> Option<String> {
		let header = self.header("cookie")?;
		for entry in header.split(';') {
			let mut parts = entry.trim().splitn(2, '=');
			if parts.next() == Some(name) {
				return Some(parts.next().unwrap_or_default().to_string());
			}
		}
		None
	}

	/// Body parsed as `application/x-www-form-urlencoded`, last value wins
	/// for repeated names.
	pub fn form_data(&self) -> HttpResult<HashMap<String, String>> {
		Ok(self.form_pairs()?.into_iter().collect())
	}

	/// Every submitted name/value pair in order. Multi-valued controls such
	/// as `<select multiple>` submit one pair per selection.
	pub fn form_pairs(&self) -> HttpResult<Vec<(String, String)>> {
		serde_urlencoded::from_bytes(&self.body)
			.map_err(|err| HttpError::InvalidBody(err.to_string()))
	}
}

fn decode(input: &str) -> String {
	percent_decode_str(input).decode_utf8_lossy().into_owned()
}

/// Percent-encodes a value for use inside a query string.
pub fn urlencode(input: &str) -> String {
	utf8_percent_encode(input, NON_ALPHANUMERIC).to_string()
}

/// Builds a [`Request`] piece by piece; used by the server glue and tests.
#[derive(Debug, Default)]
pub struct RequestBuilder {
	method: Method,
	uri: Option<Uri>,
	version: Version,
	headers: HeaderMap,
	body: Bytes,
	path_params: HashMap<String, String>,
	remote_addr: Option<SocketAddr>,
}

impl RequestBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn method(mut self, method: Method) -> Self {
		self.method = method;
		self
	}

	/// Sets the request URI; an unparseable value falls back to `/`.
	pub fn uri(mut self, uri: &str) -> Self {
		self.uri = uri.parse().ok();
		self
	}

	pub fn version(mut self, version: Version) -> Self {
		self.version = version;
		self
	}

	pub fn header(mut self, name: &str, value: &str) -> Self {
		if let (Ok(name), Ok(value)) = (
			http::HeaderName::try_from(name),
			http::HeaderValue::try_from(value),
		) {
			self.headers.append(name, value);
		}
		self
	}

	pub fn body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	pub fn path_param(mut self, name: &str, value: &str) -> Self {
		self.path_params.insert(name.to_string(), value.to_string());
		self
	}

	pub fn remote_addr(mut self, addr: SocketAddr) -> Self {
		self.remote_addr = Some(addr);
		self
	}

	pub fn build(self) -> Request {
		Request {
			method: self.method,
			uri: self.uri.unwrap_or_default(),
			version: self.version,
			headers: self.headers,
			body: self.body,
			path_params: self.path_params,
			remote_addr: self.remote_addr,
		}
	}
}
