//! Model-centric admin framework.
//!
//! A model is exposed to the back office by implementing [`ModelAdmin`] and
//! registering it on an [`AdminSite`]. The site is served by an
//! [`AdminRouter`], which owns authentication, permission checks and the
//! CRUD views. Storage goes through [`AdminDatabase`], a thin façade over
//! `rampart-db` that builds its SQL with `sea-query`.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use rampart_admin::{AdminDatabase, AdminRouter, AdminSite};
//! use rampart_auth::{Argon2Hasher, SessionStore};
//! use rampart_db::DatabaseConnection;
//!
//! # async fn build() -> Result<(), Box<dyn std::error::Error>> {
//! let connection = DatabaseConnection::connect("sqlite::memory:").await?;
//! let mut site = AdminSite::new("Back Office");
//! // site.register(Arc::new(MyModelAdmin))?;
//! let router = AdminRouter::new(
//!     Arc::new(site),
//!     Arc::new(AdminDatabase::new(connection)),
//!     Arc::new(SessionStore::new()),
//!     Arc::new(Argon2Hasher),
//! );
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod database;
pub mod error;
pub mod model_admin;
pub mod router;
pub mod site;
pub mod types;
mod views;

pub use auth::{authenticate, request_user};
pub use database::AdminDatabase;
pub use error::{AdminError, AdminResult};
pub use model_admin::{default_field, default_scaffold, AdminUser, InlineRelation, ModelAdmin};
pub use router::{AdminContext, AdminRouter, DEFAULT_COOKIE_NAME};
pub use site::AdminSite;
pub use types::{AdminRecord, ColumnKind, ColumnSchema};
