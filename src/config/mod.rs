//! Deployment wiring: settings, the admin site, and the HTTP router.

pub mod admin;
pub mod settings;
pub mod urls;
