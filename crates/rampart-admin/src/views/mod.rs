//! Request handlers for the admin pages.
//!
//! Each view takes the shared [`AdminContext`] plus whatever it pulled out
//! of the URL, checks the relevant permission before touching data, and
//! returns a rendered [`rampart_http::Response`]. Errors bubble to the
//! router, which maps them onto error pages.
//!
//! [`AdminContext`]: crate::router::AdminContext

pub mod change;
pub mod dashboard;
pub mod delete;
pub mod list;
pub mod login;
pub mod pages;
