use std::collections::HashMap;
use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::Service;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use crate::error::HttpResult;
use crate::request::Request;
use crate::response::Response;

/// Application entry point for a request.
///
/// A handler error is a bug or an infrastructure failure, not a user-facing
/// condition; the server answers it with a bare 500. Expected failures
/// (validation, permissions, missing rows) are regular [`Response`]s.
#[async_trait]
pub trait Handler: Send + Sync + 'static {
	async fn handle(&self, request: Request) -> HttpResult<Response>;
}

/// HTTP/1.1 server that feeds every connection through one [`Handler`].
pub struct HttpServer<H: Handler> {
	handler: Arc<H>,
}

impl<H: Handler> HttpServer<H> {
	pub fn new(handler: H) -> Self {
		Self {
			handler: Arc::new(handler),
		}
	}

	/// Binds `addr` and serves connections until the task is dropped.
	pub async fn listen(&self, addr: SocketAddr) -> HttpResult<()> {
		let listener = TcpListener::bind(addr).await?;
		info!("listening on {addr}");
		loop {
			let (stream, remote_addr) = listener.accept().await?;
			let io = TokioIo::new(stream);
			let service = RequestService {
				handler: Arc::clone(&self.handler),
				remote_addr,
			};
			tokio::task::spawn(async move {
				if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
					debug!("connection closed: {err}");
				}
			});
		}
	}
}

/// Convenience wrapper for the common bind-and-listen case.
pub async fn serve<H: Handler>(addr: SocketAddr, handler: H) -> HttpResult<()> {
	HttpServer::new(handler).listen(addr).await
}

struct RequestService<H: Handler> {
	handler: Arc<H>,
	remote_addr: SocketAddr,
}

impl<H: Handler> Service<hyper::Request<Incoming>> for RequestService<H> {
	type Response = hyper::Response<Full<Bytes>>;
	type Error = hyper::Error;
	type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

	fn call(&self, incoming: hyper::Request<Incoming>) -> Self::Future {
		let handler = Arc::clone(&self.handler);
		let remote_addr = self.remote_addr;
		Box::pin(async move {
			let (parts, body) = incoming.into_parts();
			let body = body.collect().await?.to_bytes();
			let request = Request {
				method: parts.method,
				uri: parts.uri,
				version: parts.version,
				headers: parts.headers,
				body,
				path_params: HashMap::new(),
				remote_addr: Some(remote_addr),
			};
			let response = match handler.handle(request).await {
				Ok(response) => response,
				Err(err) => {
					error!("handler failed: {err}");
					Response::internal_server_error().with_html("<h1>Internal Server Error</h1>")
				}
			};
			Ok(into_hyper(response))
		})
	}
}

fn into_hyper(response: Response) -> hyper::Response<Full<Bytes>> {
	let mut converted = hyper::Response::new(Full::new(response.body));
	*converted.status_mut() = response.status;
	*converted.headers_mut() = response.headers;
	converted
}
