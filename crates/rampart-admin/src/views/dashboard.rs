//! The panel index: one link per model the viewer may see.

use rampart_auth::CurrentUser;
use rampart_forms::{html_escape, humanize, Media};
use rampart_http::Response;

use crate::error::AdminResult;
use crate::model_admin::AdminUser;
use crate::router::AdminContext;
use crate::views::pages;

pub(crate) async fn index(
	context: &AdminContext,
	user: &CurrentUser<AdminUser>,
) -> AdminResult<Response> {
	let mut items = String::new();
	for name in context.site.model_names() {
		let admin = context.site.get_model_admin(&name)?;
		// Models the viewer cannot open are not offered at all.
		if !admin.has_view_permission(user).await {
			continue;
		}
		items.push_str(&format!(
			"<li><a href=\"{}/{}/\">{}</a></li>",
			context.prefix,
			name,
			html_escape(&humanize(&name))
		));
	}

	let body = format!(
		"{}<main><h1>Models</h1><ul class=\"models\">{}</ul></main>",
		pages::site_header(context),
		items
	);
	Ok(Response::ok().with_html(pages::base_page(context.site.title(), &Media::new(), &body)))
}
