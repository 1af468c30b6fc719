//! SQLite access layer for the rampart admin panel.
//!
//! Storage here is deliberately dynamic: the admin framework works with
//! rows as maps rather than typed structs, because the set of columns it
//! touches is decided at runtime by each registered model view. This crate
//! provides [`DatabaseConnection`] (a thin pool wrapper), the [`QueryValue`]
//! parameter/result enum, and the SQLite row conversion behind them.

pub mod connection;
pub mod error;
pub mod sqlite;
pub mod types;

pub use connection::DatabaseConnection;
pub use error::{DatabaseError, DbResult};
pub use types::{QueryResult, QueryValue, Row};
