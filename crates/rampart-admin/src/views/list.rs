//! Paginated table of one model's records.

use rampart_auth::CurrentUser;
use rampart_forms::{html_escape, humanize};
use rampart_http::{Request, Response};
use serde_json::Value;

use crate::error::{AdminError, AdminResult};
use crate::model_admin::{AdminUser, ModelAdmin};
use crate::router::AdminContext;
use crate::types::{AdminRecord, ColumnKind, ColumnSchema};
use crate::views::pages;

/// Columns the list page shows, in display order.
///
/// `list_display` picks and orders columns when set; otherwise every
/// column is shown. Credential columns and `list_exclude` entries are
/// dropped either way.
pub(crate) fn visible_columns(admin: &dyn ModelAdmin) -> Vec<ColumnSchema> {
	let schema = admin.columns();
	let exclude = admin.list_exclude();
	let keep = |column: &ColumnSchema| {
		column.kind != ColumnKind::Password && !exclude.contains(&column.name)
	};

	let display = admin.list_display();
	if display.is_empty() {
		return schema.into_iter().filter(keep).collect();
	}
	display
		.iter()
		.filter_map(|name| schema.iter().find(|column| &column.name == name))
		.filter(|column| keep(column))
		.cloned()
		.collect()
}

fn cell_text(record: &AdminRecord, column: &str) -> String {
	match record.get(column) {
		None | Some(Value::Null) => String::new(),
		Some(Value::String(text)) => text.clone(),
		Some(other) => other.to_string(),
	}
}

pub(crate) async fn page(
	context: &AdminContext,
	request: &Request,
	model: &str,
	user: &CurrentUser<AdminUser>,
) -> AdminResult<Response> {
	let admin = context.site.get_model_admin(model)?;
	if !admin.has_view_permission(user).await {
		return Err(AdminError::PermissionDenied);
	}

	let per_page = admin.list_per_page().max(1);
	let page = request
		.query_param("page")
		.and_then(|value| value.parse::<u64>().ok())
		.unwrap_or(1)
		.max(1);
	let offset = (page - 1) * per_page;

	let columns = visible_columns(admin.as_ref());
	// Always fetch the primary key; change links need it even when it is
	// not displayed.
	let mut select: Vec<String> = columns.iter().map(|column| column.name.clone()).collect();
	let pk_field = admin.pk_field().to_string();
	if admin.list_display().is_empty() {
		select.clear();
	} else if !select.contains(&pk_field) {
		select.insert(0, pk_field.clone());
	}

	let records = context
		.db
		.list(admin.table_name(), &select, &admin.ordering(), per_page, offset)
		.await?;
	let total = context.db.count(admin.table_name()).await?;
	let total_pages = total.div_ceil(per_page).max(1);

	let mut rows = String::new();
	for record in &records {
		rows.push_str("<tr>");
		for (index, column) in columns.iter().enumerate() {
			let text = html_escape(&cell_text(record, &column.name));
			if index == 0 {
				let pk = cell_text(record, &pk_field);
				rows.push_str(&format!(
					"<td><a href=\"{}/{}/{}/change/\">{}</a></td>",
					context.prefix, model, pk, text
				));
			} else {
				rows.push_str(&format!("<td>{text}</td>"));
			}
		}
		let pk = cell_text(record, &pk_field);
		rows.push_str(&format!(
			"<td class=\"actions\"><form method=\"post\" action=\"{}/{}/{}/delete/\">\
			 <input type=\"submit\" value=\"Delete\" /></form></td>",
			context.prefix, model, pk
		));
		rows.push_str("</tr>");
	}

	let mut headers = String::new();
	for column in &columns {
		headers.push_str(&format!("<th>{}</th>", html_escape(&humanize(&column.name))));
	}
	headers.push_str("<th></th>");

	let mut pagination = format!("Page {page} of {total_pages} ({total} records)");
	if page > 1 {
		pagination = format!(
			"<a href=\"{}/{}/?page={}\">Previous</a> {}",
			context.prefix,
			model,
			page - 1,
			pagination
		);
	}
	if page < total_pages {
		pagination = format!(
			"{} <a href=\"{}/{}/?page={}\">Next</a>",
			pagination,
			context.prefix,
			model,
			page + 1
		);
	}

	let title = humanize(model);
	let body = format!(
		"{header}<main><h1>{title}</h1>\
		 <p><a href=\"{prefix}/{model}/add/\">Add {title}</a></p>\
		 <table><thead><tr>{headers}</tr></thead><tbody>{rows}</tbody></table>\
		 <p class=\"pagination\">{pagination}</p></main>",
		header = pages::site_header(context),
		title = html_escape(&title),
		prefix = context.prefix,
	);
	let page_title = format!("{} | {}", title, context.site.title());
	Ok(Response::ok().with_html(pages::base_page(&page_title, &admin.media(), &body)))
}
