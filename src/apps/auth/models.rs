//! Account and role rows behind the fixed auth tables.

use rampart_admin::{AdminRecord, ColumnKind, ColumnSchema};
use serde::{Deserialize, Serialize};

/// One back-office account. `password` holds the Argon2 PHC string, never a
/// plaintext; an empty string means the account cannot log in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,
	pub username: String,
	pub email: String,
	pub password: String,
	pub active: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub confirmed_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,
	pub name: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}

impl User {
	pub fn to_record(&self) -> AdminRecord {
		crate::apps::to_record(self)
	}
}

impl Role {
	pub fn to_record(&self) -> AdminRecord {
		crate::apps::to_record(self)
	}
}

pub fn user_columns() -> Vec<ColumnSchema> {
	vec![
		ColumnSchema::new("id", ColumnKind::PrimaryKey),
		ColumnSchema::new("username", ColumnKind::Text).required(),
		ColumnSchema::new("email", ColumnKind::Text).required(),
		ColumnSchema::new("password", ColumnKind::Password),
		ColumnSchema::new("active", ColumnKind::Boolean),
		ColumnSchema::new("confirmed_at", ColumnKind::DateTime),
	]
}

pub fn role_columns() -> Vec<ColumnSchema> {
	vec![
		ColumnSchema::new("id", ColumnKind::PrimaryKey),
		ColumnSchema::new("name", ColumnKind::Text).required(),
		ColumnSchema::new("description", ColumnKind::Text),
	]
}
