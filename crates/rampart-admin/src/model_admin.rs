//! The [`ModelAdmin`] trait and form scaffolding.

use async_trait::async_trait;
use rampart_auth::{BaseUser, CurrentUser, RolesMixin};
use rampart_forms::{
	BooleanField, CharField, DateTimeField, Form, FormField, IntegerField, Media, Textarea,
};

use crate::error::AdminResult;
use crate::types::{AdminRecord, ColumnKind, ColumnSchema};

/// The user record the panel authenticates and authorizes against.
#[derive(Debug, Clone)]
pub struct AdminUser {
	pub id: i64,
	pub username: String,
	pub password_hash: String,
	pub active: bool,
	pub roles: Vec<String>,
}

impl BaseUser for AdminUser {
	fn id(&self) -> i64 {
		self.id
	}

	fn get_username(&self) -> &str {
		&self.username
	}

	fn password_hash(&self) -> &str {
		&self.password_hash
	}

	fn is_active(&self) -> bool {
		self.active
	}
}

impl RolesMixin for AdminUser {
	fn roles(&self) -> &[String] {
		&self.roles
	}
}

/// A many-to-many membership edited alongside its parent record.
///
/// Rendered as a multi-select named `name`, with options read from
/// `related_table` and the chosen set replacing the rows of the join
/// table `table` on save.
#[derive(Debug, Clone)]
pub struct InlineRelation {
	/// Form field name the selections are submitted under.
	pub name: String,
	pub label: String,
	/// Join table holding one row per membership.
	pub table: String,
	/// Join-table column pointing at the edited record.
	pub parent_fk: String,
	/// Join-table column pointing at the related record.
	pub related_fk: String,
	pub related_table: String,
	pub related_pk: String,
	/// Column of the related table shown as the option label.
	pub label_field: String,
}

/// One model's presence in the admin: its table, columns, list options,
/// form scaffolding and permissions.
///
/// Every method has a default, so a minimal implementation only names the
/// model and describes its columns. Permission defaults funnel through
/// [`ModelAdmin::is_accessible`], which admits any authenticated user;
/// override it (or the per-action checks) to tighten access.
#[async_trait]
pub trait ModelAdmin: Send + Sync {
	/// URL segment and registry key, e.g. `user` in `/admin/user/`.
	fn model_name(&self) -> &str;

	fn table_name(&self) -> &str;

	fn pk_field(&self) -> &str {
		"id"
	}

	fn columns(&self) -> Vec<ColumnSchema>;

	/// Columns shown on the list page, in order. Empty means every column
	/// except exclusions.
	fn list_display(&self) -> Vec<String> {
		Vec::new()
	}

	/// Columns hidden from the list page even when `list_display` is empty.
	fn list_exclude(&self) -> Vec<String> {
		Vec::new()
	}

	/// Columns dropped from the scaffolded form.
	fn form_exclude(&self) -> Vec<String> {
		Vec::new()
	}

	/// `ORDER BY` columns for the list page; a leading `-` means descending.
	fn ordering(&self) -> Vec<String> {
		vec![self.pk_field().to_string()]
	}

	fn list_per_page(&self) -> u64 {
		20
	}

	/// Replaces the scaffolded field for one column. Columns that scaffold
	/// to nothing (primary keys, credential hashes) stay out of the form
	/// regardless.
	fn form_override(&self, _column: &ColumnSchema) -> Option<Box<dyn FormField>> {
		None
	}

	/// Fields appended after the column-derived ones, e.g. a password
	/// reset input that has no backing column.
	fn extra_fields(&self) -> Vec<Box<dyn FormField>> {
		Vec::new()
	}

	fn inlines(&self) -> Vec<InlineRelation> {
		Vec::new()
	}

	/// Extra stylesheet URLs for this model's pages.
	fn extra_css(&self) -> Vec<String> {
		Vec::new()
	}

	/// Extra script URLs for this model's pages.
	fn extra_js(&self) -> Vec<String> {
		Vec::new()
	}

	fn media(&self) -> Media {
		let mut media = Media::new();
		for href in self.extra_css() {
			media.add_css(&href);
		}
		for src in self.extra_js() {
			media.add_js(&src);
		}
		media
	}

	fn scaffold_form(&self) -> Form {
		default_scaffold(self)
	}

	/// Gate for every view of this model. The default admits any
	/// authenticated user.
	async fn is_accessible(&self, user: &CurrentUser<AdminUser>) -> bool {
		user.is_authenticated()
	}

	async fn has_view_permission(&self, user: &CurrentUser<AdminUser>) -> bool {
		self.is_accessible(user).await
	}

	async fn has_add_permission(&self, user: &CurrentUser<AdminUser>) -> bool {
		self.is_accessible(user).await
	}

	async fn has_change_permission(&self, user: &CurrentUser<AdminUser>) -> bool {
		self.is_accessible(user).await
	}

	async fn has_delete_permission(&self, user: &CurrentUser<AdminUser>) -> bool {
		self.is_accessible(user).await
	}

	/// Runs after validation and before the record is written. `record`
	/// holds the column values about to be persisted; mutating it changes
	/// what is stored.
	async fn on_model_change(
		&self,
		_form: &Form,
		_record: &mut AdminRecord,
		_is_created: bool,
	) -> AdminResult<()> {
		Ok(())
	}
}

/// Default form field for a column, or `None` for columns that are never
/// edited directly.
pub fn default_field(column: &ColumnSchema) -> Option<Box<dyn FormField>> {
	match column.kind {
		ColumnKind::PrimaryKey | ColumnKind::Password => None,
		ColumnKind::Text => {
			let mut field = CharField::new(&column.name);
			if column.required {
				field = field.required();
			}
			Some(Box::new(field))
		}
		ColumnKind::LongText => {
			let mut field = CharField::new(&column.name).with_widget(Textarea::new());
			if column.required {
				field = field.required();
			}
			Some(Box::new(field))
		}
		ColumnKind::Integer => {
			let mut field = IntegerField::new(&column.name);
			if column.required {
				field = field.required();
			}
			Some(Box::new(field))
		}
		// Unchecked boxes are simply absent from the submission, so a
		// checkbox can never be required.
		ColumnKind::Boolean => Some(Box::new(BooleanField::new(&column.name))),
		ColumnKind::DateTime => {
			let mut field = DateTimeField::new(&column.name);
			if column.required {
				field = field.required();
			}
			Some(Box::new(field))
		}
	}
}

/// Builds the form [`ModelAdmin::scaffold_form`] returns by default:
/// one field per editable column, overrides applied, extra fields appended.
///
/// Kept as a free function so implementations that override
/// `scaffold_form` can start from the same scaffold and extend it.
pub fn default_scaffold(admin: &(impl ModelAdmin + ?Sized)) -> Form {
	let exclude = admin.form_exclude();
	let mut form = Form::new(admin.model_name());
	for column in admin.columns() {
		if exclude.contains(&column.name) {
			continue;
		}
		let field = match admin.form_override(&column) {
			Some(field) => Some(field),
			None => default_field(&column),
		};
		if let Some(field) = field {
			form.add_field(field);
		}
	}
	for field in admin.extra_fields() {
		form.add_field(field);
	}
	form
}
