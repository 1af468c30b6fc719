//! Shared page chrome: the HTML shell, header, form markup and error pages.

use rampart_forms::{html_escape, Form, Media, WidgetAttrs, WidgetType};
use rampart_http::{Response, StatusCode};

use crate::router::AdminContext;

/// Stylesheet inlined into every page.
const BASE_STYLE: &str = "\
body{font-family:sans-serif;margin:0;background:#f6f6f6;color:#222;}\
header{background:#2b3e50;color:#fff;padding:0.6em 1em;display:flex;justify-content:space-between;}\
header a{color:#fff;text-decoration:none;margin-right:1em;}\
main{max-width:60em;margin:1.5em auto;background:#fff;padding:1.5em;border:1px solid #ddd;}\
table{border-collapse:collapse;width:100%;}\
th,td{border-bottom:1px solid #ddd;padding:0.4em 0.6em;text-align:left;}\
.form-row{margin-bottom:1em;}\
.form-row label{display:block;font-weight:bold;margin-bottom:0.2em;}\
.form-control{width:100%;box-sizing:border-box;padding:0.3em;}\
.error{color:#b00020;margin:0.2em 0;}\
.help{color:#666;margin:0.2em 0;font-size:0.9em;}\
.actions form{display:inline;}";

/// Rich-text widgets assume jQuery is on the page before their own script.
const JQUERY_SRC: &str = "//cdnjs.cloudflare.com/ajax/libs/jquery/3.4.1/jquery.min.js";

const SUMMERNOTE_INIT: &str =
	"<script>$(document).ready(function(){$('.summernote').summernote();});</script>\n";

/// Wraps a page body in the shared HTML shell.
///
/// Extra media renders into the head (stylesheets) and the end of the body
/// (scripts). When the scripts include the summernote editor, its
/// activation snippet runs on every element carrying the `summernote`
/// class.
pub(crate) fn base_page(title: &str, media: &Media, body: &str) -> String {
	let mut scripts = String::new();
	if !media.js().is_empty() {
		scripts.push_str(&format!("<script src=\"{JQUERY_SRC}\"></script>\n"));
		scripts.push_str(&media.render_js());
		if media.js().iter().any(|src| src.contains("summernote")) {
			scripts.push_str(SUMMERNOTE_INIT);
		}
	}
	format!(
		"<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
		 <title>{}</title>\n<style>{}</style>\n{}</head>\n<body>\n{}\n{}</body>\n</html>\n",
		html_escape(title),
		BASE_STYLE,
		media.render_css(),
		body,
		scripts
	)
}

/// Header bar with the panel title and a logout link.
pub(crate) fn site_header(context: &AdminContext) -> String {
	format!(
		"<header><a href=\"{prefix}/\">{title}</a>\
		 <nav><a href=\"{prefix}/logout/\">Log out</a></nav></header>",
		prefix = context.prefix,
		title = html_escape(context.site.title()),
	)
}

/// Renders a bound form's rows: label, widget, help text and errors.
///
/// Widgets get a `form-control` base class; hidden inputs render bare.
pub(crate) fn render_form(form: &Form) -> String {
	let mut html = String::new();
	for error in form.form_errors() {
		html.push_str(&format!("<p class=\"error\">{}</p>", html_escape(error)));
	}
	for bound in form.bound_fields() {
		if bound.widget_type() == WidgetType::Hidden {
			html.push_str(&bound.render());
			continue;
		}
		html.push_str("<div class=\"form-row\">");
		let marker = if bound.required() { " *" } else { "" };
		html.push_str(&format!(
			"<label for=\"{}\">{}{}</label>",
			bound.id_for_label(),
			html_escape(&bound.label()),
			marker
		));
		html.push_str(&bound.render_with_attrs(WidgetAttrs::new().class("form-control")));
		if let Some(help) = bound.help_text() {
			html.push_str(&format!("<p class=\"help\">{}</p>", html_escape(help)));
		}
		for error in bound.errors() {
			html.push_str(&format!("<p class=\"error\">{}</p>", html_escape(error)));
		}
		html.push_str("</div>");
	}
	html
}

/// A minimal page for one error status.
pub(crate) fn error_page(status: StatusCode, message: &str) -> Response {
	let title = format!(
		"{} {}",
		status.as_str(),
		status.canonical_reason().unwrap_or("Error")
	);
	let body = format!(
		"<main><h1>{}</h1><p>{}</p></main>",
		html_escape(&title),
		html_escape(message)
	);
	Response::new(status).with_html(base_page(&title, &Media::new(), &body))
}
