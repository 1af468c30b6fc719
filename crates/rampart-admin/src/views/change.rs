//! Creating and editing records through the scaffolded form.

use std::collections::HashMap;

use rampart_auth::CurrentUser;
use rampart_forms::{html_escape, humanize, Form, MultipleChoiceField};
use rampart_http::{Method, Request, Response};
use serde_json::Value;
use tracing::info;

use crate::error::{AdminError, AdminResult};
use crate::model_admin::{AdminUser, ModelAdmin};
use crate::router::AdminContext;
use crate::types::{AdminRecord, ColumnSchema};
use crate::views::pages;

/// Collapses submitted pairs into a JSON map, promoting repeated names to
/// arrays so multi-selects survive intact.
pub(crate) fn submitted_values(request: &Request) -> AdminResult<HashMap<String, Value>> {
	let pairs = request
		.form_pairs()
		.map_err(|err| AdminError::Validation(err.to_string()))?;
	let mut data: HashMap<String, Value> = HashMap::new();
	for (name, value) in pairs {
		match data.get_mut(&name) {
			Some(Value::Array(items)) => items.push(Value::String(value)),
			Some(existing) => {
				let first = existing.take();
				*existing = Value::Array(vec![first, Value::String(value)]);
			}
			None => {
				data.insert(name, Value::String(value));
			}
		}
	}
	Ok(data)
}

/// Cleaned values restricted to real table columns. Extra fields (password
/// inputs, inline selections) never reach the row unless a model hook puts
/// them there.
fn record_from_form(form: &Form, schema: &[ColumnSchema]) -> AdminRecord {
	let mut record = AdminRecord::new();
	for column in schema {
		if let Some(value) = form.cleaned_value(&column.name) {
			record.insert(column.name.clone(), value.clone());
		}
	}
	record
}

/// Appends one multi-select per inline relation, choices read from the
/// related table.
async fn attach_inline_fields(
	context: &AdminContext,
	admin: &dyn ModelAdmin,
	form: &mut Form,
) -> AdminResult<()> {
	for inline in admin.inlines() {
		let choices: Vec<(String, String)> = context
			.db
			.related_choices(&inline)
			.await?
			.into_iter()
			.map(|(id, label)| (id.to_string(), label))
			.collect();
		form.add_field(Box::new(
			MultipleChoiceField::new(inline.name.clone(), choices).with_label(inline.label.clone()),
		));
	}
	Ok(())
}

/// Form data for an unsubmitted edit: stored column values plus the
/// current inline selections.
async fn initial_values(
	context: &AdminContext,
	admin: &dyn ModelAdmin,
	form: &Form,
	record: &AdminRecord,
	pk: i64,
) -> AdminResult<HashMap<String, Value>> {
	let mut data = HashMap::new();
	for field in form.fields() {
		if let Some(value) = record.get(field.name()) {
			data.insert(field.name().to_string(), value.clone());
		}
	}
	for inline in admin.inlines() {
		let selected: Vec<Value> = context
			.db
			.selected_related(&inline, pk)
			.await?
			.into_iter()
			.map(|id| Value::String(id.to_string()))
			.collect();
		data.insert(inline.name.clone(), Value::Array(selected));
	}
	Ok(data)
}

/// Replaces each inline relation's memberships with the validated
/// selections.
async fn sync_inlines(
	context: &AdminContext,
	admin: &dyn ModelAdmin,
	form: &Form,
	pk: i64,
) -> AdminResult<()> {
	for inline in admin.inlines() {
		let ids: Vec<i64> = match form.cleaned_value(&inline.name) {
			Some(Value::Array(items)) => items
				.iter()
				.filter_map(|item| item.as_str().and_then(|text| text.parse().ok()))
				.collect(),
			_ => Vec::new(),
		};
		context.db.set_related(&inline, pk, &ids).await?;
	}
	Ok(())
}

fn render(
	context: &AdminContext,
	admin: &dyn ModelAdmin,
	model: &str,
	form: &Form,
	pk: Option<i64>,
) -> Response {
	let action = match pk {
		Some(pk) => format!("{}/{}/{}/change/", context.prefix, model, pk),
		None => format!("{}/{}/add/", context.prefix, model),
	};
	let verb = if pk.is_some() { "Change" } else { "Add" };
	let title = format!("{} {}", verb, humanize(model));
	let body = format!(
		"{header}<main><h1>{heading}</h1>\
		 <form method=\"post\" action=\"{action}\">{fields}\
		 <p><input type=\"submit\" value=\"Save\" /> \
		 <a href=\"{prefix}/{model}/\">Cancel</a></p></form></main>",
		header = pages::site_header(context),
		heading = html_escape(&title),
		fields = pages::render_form(form),
		prefix = context.prefix,
	);
	let page_title = format!("{} | {}", title, context.site.title());
	Response::ok().with_html(pages::base_page(&page_title, &admin.media(), &body))
}

pub(crate) async fn add(
	context: &AdminContext,
	request: &Request,
	model: &str,
	user: &CurrentUser<AdminUser>,
) -> AdminResult<Response> {
	let admin = context.site.get_model_admin(model)?;
	if !admin.has_add_permission(user).await {
		return Err(AdminError::PermissionDenied);
	}

	let mut form = admin.scaffold_form();
	attach_inline_fields(context, admin.as_ref(), &mut form).await?;

	if request.method == Method::POST {
		form.bind(submitted_values(request)?);
		if form.is_valid() {
			let mut record = record_from_form(&form, &admin.columns());
			admin.on_model_change(&form, &mut record, true).await?;
			let pk = context.db.insert(admin.table_name(), &record).await?;
			sync_inlines(context, admin.as_ref(), &form, pk).await?;
			info!(model, pk, "created record");
			return Ok(Response::see_other(&format!("{}/{}/", context.prefix, model)));
		}
	}
	Ok(render(context, admin.as_ref(), model, &form, None))
}

pub(crate) async fn edit(
	context: &AdminContext,
	request: &Request,
	model: &str,
	pk: i64,
	user: &CurrentUser<AdminUser>,
) -> AdminResult<Response> {
	let admin = context.site.get_model_admin(model)?;
	if !admin.has_change_permission(user).await {
		return Err(AdminError::PermissionDenied);
	}

	let Some(stored) = context.db.get(admin.table_name(), admin.pk_field(), pk).await? else {
		return Err(AdminError::RecordNotFound {
			model: model.to_string(),
			pk: pk.to_string(),
		});
	};

	let mut form = admin.scaffold_form();
	attach_inline_fields(context, admin.as_ref(), &mut form).await?;

	if request.method == Method::POST {
		form.bind(submitted_values(request)?);
		if form.is_valid() {
			let mut record = record_from_form(&form, &admin.columns());
			admin.on_model_change(&form, &mut record, false).await?;
			context
				.db
				.update(admin.table_name(), admin.pk_field(), pk, &record)
				.await?;
			sync_inlines(context, admin.as_ref(), &form, pk).await?;
			info!(model, pk, "updated record");
			return Ok(Response::see_other(&format!("{}/{}/", context.prefix, model)));
		}
	} else {
		let initial = initial_values(context, admin.as_ref(), &form, &stored, pk).await?;
		form.bind(initial);
	}
	Ok(render(context, admin.as_ref(), model, &form, Some(pk)))
}
