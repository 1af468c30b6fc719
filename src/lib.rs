//! Back-office administration panel for the rampart training range.
//!
//! The generic machinery lives in the workspace crates; this crate is the
//! deployment glue describing one concrete panel. [`apps`] declares the
//! managed models and their admin views, [`config`] turns settings into a
//! ready router, and [`migrations`] prepares and seeds the SQLite schema
//! those views expect.

pub mod apps;
pub mod config;
pub mod migrations;

pub use config::admin::configure_admin;
pub use config::settings::Settings;
pub use config::urls::build_router;
