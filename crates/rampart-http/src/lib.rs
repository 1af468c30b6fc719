//! HTTP primitives for the rampart admin panel.
//!
//! The panel speaks plain HTTP/1.1 through hyper. This crate owns the
//! request/response types the handlers work with and the accept loop that
//! feeds them: a [`Request`] carries the already-collected body plus parsed
//! path and query state, a [`Response`] is built through status constructors
//! and chainable `with_*` methods, and [`HttpServer`] drives a [`Handler`]
//! implementation for every incoming connection.

pub mod error;
pub mod request;
pub mod response;
pub mod server;

pub use error::{HttpError, HttpResult};
pub use request::{urlencode, Request, RequestBuilder};
pub use response::Response;
pub use server::{serve, Handler, HttpServer};

// Re-exported so downstream crates do not need their own `http`/`bytes` pins.
pub use bytes::Bytes;
pub use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri, Version};
