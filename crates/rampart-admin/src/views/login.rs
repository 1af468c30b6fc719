//! Session login and logout.

use rampart_forms::{
	html_escape, CharField, Form, HiddenInput, Media, TextInput, Widget, WidgetAttrs,
	ALL_FIELDS_KEY,
};
use rampart_http::{Request, Response};
use serde_json::Value;
use tracing::{info, warn};

use crate::auth;
use crate::error::{AdminError, AdminResult};
use crate::router::AdminContext;
use crate::views::change::submitted_values;
use crate::views::pages;

fn login_form() -> Form {
	Form::new("login")
		.with_field(Box::new(CharField::new("username").required()))
		.with_field(Box::new(
			CharField::new("password")
				.required()
				.no_strip()
				.with_widget(TextInput::password()),
		))
}

fn render(context: &AdminContext, form: &Form, next: &str) -> Response {
	let hidden = HiddenInput.render("next", Some(next), &WidgetAttrs::new());
	let body = format!(
		"<main class=\"login\"><h1>{title}</h1>\
		 <form method=\"post\" action=\"{prefix}/login/\">{fields}{hidden}\
		 <p><input type=\"submit\" value=\"Log in\" /></p></form></main>",
		title = html_escape(context.site.title()),
		prefix = context.prefix,
		fields = pages::render_form(form),
	);
	let title = format!("Log in | {}", context.site.title());
	Response::ok().with_html(pages::base_page(&title, &Media::new(), &body))
}

/// Only same-site paths are honoured as a post-login target.
fn safe_next(next: &str) -> bool {
	next.starts_with('/') && !next.starts_with("//")
}

pub(crate) fn page(context: &AdminContext, request: &Request) -> Response {
	let next = request.query_param("next").unwrap_or_default();
	render(context, &login_form(), &next)
}

pub(crate) async fn submit(context: &AdminContext, request: &Request) -> AdminResult<Response> {
	let data = submitted_values(request)?;
	let next = data
		.get("next")
		.and_then(Value::as_str)
		.unwrap_or_default()
		.to_string();

	let mut form = login_form();
	form.bind(data);
	if form.is_valid() {
		let username = form
			.cleaned_value("username")
			.and_then(Value::as_str)
			.unwrap_or_default()
			.to_string();
		let password = form
			.cleaned_value("password")
			.and_then(Value::as_str)
			.unwrap_or_default()
			.to_string();

		match auth::authenticate(&context.db, context.hasher.as_ref(), &username, &password).await
		{
			Ok(user) => {
				let token = context.sessions.create(user.id);
				info!(username = %user.username, "admin login");
				let target = if safe_next(&next) {
					next
				} else {
					format!("{}/", context.prefix)
				};
				return Ok(Response::see_other(&target)
					.with_cookie(&context.cookie_name, &token));
			}
			Err(AdminError::Authentication(reason)) => {
				warn!(username = %username, %reason, "failed admin login");
				form.add_error(ALL_FIELDS_KEY, "Invalid username or password.");
			}
			Err(other) => return Err(other),
		}
	}
	Ok(render(context, &form, &next))
}

pub(crate) fn logout(context: &AdminContext, request: &Request) -> Response {
	if let Some(token) = request.cookie(&context.cookie_name) {
		context.sessions.remove(&token);
	}
	Response::see_other(&format!("{}/login/", context.prefix))
		.with_expired_cookie(&context.cookie_name)
}
