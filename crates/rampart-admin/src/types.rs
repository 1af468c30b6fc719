//! Column metadata shared by the scaffolding and storage layers.

use std::collections::HashMap;

use serde_json::Value;

/// Broad classification of a table column, used to pick a default form
/// field and widget for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
	/// Auto-incrementing integer primary key. Never scaffolded into forms.
	PrimaryKey,
	/// Free text rendered as a single-line input.
	Text,
	/// Longer text rendered as a textarea.
	LongText,
	Integer,
	Boolean,
	/// Timestamp stored as `YYYY-MM-DD HH:MM:SS`.
	DateTime,
	/// Credential hash. Excluded from forms and never rendered in lists.
	Password,
}

/// Schema entry for one column of an admin-managed table.
#[derive(Debug, Clone)]
pub struct ColumnSchema {
	pub name: String,
	pub kind: ColumnKind,
	pub required: bool,
}

impl ColumnSchema {
	pub fn new(name: &str, kind: ColumnKind) -> Self {
		Self {
			name: name.to_string(),
			kind,
			required: false,
		}
	}

	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}
}

/// A row travelling between forms and the database, keyed by column name.
///
/// Values use the JSON data model: strings, integers, booleans and nulls.
/// Timestamps are carried as their canonical string form.
pub type AdminRecord = HashMap<String, Value>;
