//! Admin views for accounts and roles.
//!
//! Both views demand the `admin` role rather than mere login, and the user
//! form never exposes the stored credential: edits go through a write-only
//! `password2` field that is hashed into the row on save.

use async_trait::async_trait;
use rampart_admin::auth::{ROLE_TABLE, USER_ROLES_TABLE, USER_TABLE};
use rampart_admin::{
	AdminRecord, AdminResult, AdminUser, ColumnSchema, InlineRelation, ModelAdmin,
};
use rampart_auth::{Argon2Hasher, CurrentUser, PasswordHasher, RolesMixin};
use rampart_forms::{CharField, Form, FormField, TextInput};
use serde_json::Value;
use tracing::info;

use super::models::{role_columns, user_columns};

/// Role that unlocks the account-management views.
pub const ADMIN_ROLE: &str = "admin";

fn is_panel_admin(user: &CurrentUser<AdminUser>) -> bool {
	user.user()
		.map(|account| account.has_role(ADMIN_ROLE))
		.unwrap_or(false)
}

/// The user→roles membership select.
pub fn roles_inline() -> InlineRelation {
	InlineRelation {
		name: "roles".to_string(),
		label: "Roles".to_string(),
		table: USER_ROLES_TABLE.to_string(),
		parent_fk: "user_id".to_string(),
		related_fk: "role_id".to_string(),
		related_table: ROLE_TABLE.to_string(),
		related_pk: "id".to_string(),
		label_field: "name".to_string(),
	}
}

/// The role→users membership select, the same join table read from the
/// other side.
pub fn users_inline() -> InlineRelation {
	InlineRelation {
		name: "users".to_string(),
		label: "Users".to_string(),
		table: USER_ROLES_TABLE.to_string(),
		parent_fk: "role_id".to_string(),
		related_fk: "user_id".to_string(),
		related_table: USER_TABLE.to_string(),
		related_pk: "id".to_string(),
		label_field: "username".to_string(),
	}
}

pub struct UserAdmin {
	hasher: Argon2Hasher,
}

impl UserAdmin {
	pub fn new() -> Self {
		Self {
			hasher: Argon2Hasher,
		}
	}
}

impl Default for UserAdmin {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl ModelAdmin for UserAdmin {
	fn model_name(&self) -> &str {
		"user"
	}

	fn table_name(&self) -> &str {
		USER_TABLE
	}

	fn columns(&self) -> Vec<ColumnSchema> {
		user_columns()
	}

	// The Password column kind already keeps the hash out of pages; naming
	// it here keeps that true even if the schema entry ever changes.
	fn list_exclude(&self) -> Vec<String> {
		vec!["password".to_string()]
	}

	fn form_exclude(&self) -> Vec<String> {
		vec!["password".to_string()]
	}

	fn form_override(&self, column: &ColumnSchema) -> Option<Box<dyn FormField>> {
		if column.name == "email" {
			let email = CharField::new("email")
				.required()
				.with_widget(TextInput::email());
			return Some(Box::new(email));
		}
		None
	}

	fn extra_fields(&self) -> Vec<Box<dyn FormField>> {
		// Write-only replacement input. Left blank on an edit it means
		// "keep the stored credential".
		let password2 = CharField::new("password2")
			.with_label("New Password")
			.no_strip()
			.with_widget(TextInput::password());
		vec![Box::new(password2)]
	}

	fn inlines(&self) -> Vec<InlineRelation> {
		vec![roles_inline()]
	}

	async fn is_accessible(&self, user: &CurrentUser<AdminUser>) -> bool {
		is_panel_admin(user)
	}

	async fn on_model_change(
		&self,
		form: &Form,
		record: &mut AdminRecord,
		is_created: bool,
	) -> AdminResult<()> {
		let submitted = form
			.cleaned_value("password2")
			.and_then(|value| value.as_str())
			.unwrap_or_default();
		if !submitted.is_empty() {
			let encoded = self.hasher.hash(submitted)?;
			record.insert("password".to_string(), Value::String(encoded));
			let username = form
				.cleaned_value("username")
				.and_then(|value| value.as_str())
				.unwrap_or("?");
			info!(username, created = is_created, "user credential updated");
		} else if is_created {
			// A blank credential can never verify, so the account starts
			// locked out until a password is set.
			record.insert("password".to_string(), Value::String(String::new()));
		}
		Ok(())
	}
}

pub struct RoleAdmin;

#[async_trait]
impl ModelAdmin for RoleAdmin {
	fn model_name(&self) -> &str {
		"role"
	}

	fn table_name(&self) -> &str {
		ROLE_TABLE
	}

	fn columns(&self) -> Vec<ColumnSchema> {
		role_columns()
	}

	fn inlines(&self) -> Vec<InlineRelation> {
		vec![users_inline()]
	}

	async fn is_accessible(&self, user: &CurrentUser<AdminUser>) -> bool {
		is_panel_admin(user)
	}
}
