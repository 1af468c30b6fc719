//! Deleting one record, POST only.

use rampart_auth::CurrentUser;
use rampart_http::Response;
use tracing::info;

use crate::error::{AdminError, AdminResult};
use crate::model_admin::AdminUser;
use crate::router::AdminContext;

pub(crate) async fn record(
	context: &AdminContext,
	model: &str,
	pk: i64,
	user: &CurrentUser<AdminUser>,
) -> AdminResult<Response> {
	let admin = context.site.get_model_admin(model)?;
	if !admin.has_delete_permission(user).await {
		return Err(AdminError::PermissionDenied);
	}

	if context.db.get(admin.table_name(), admin.pk_field(), pk).await?.is_none() {
		return Err(AdminError::RecordNotFound {
			model: model.to_string(),
			pk: pk.to_string(),
		});
	}

	// Memberships go first so no join rows are left dangling.
	for inline in admin.inlines() {
		context.db.set_related(&inline, pk, &[]).await?;
	}
	context.db.delete(admin.table_name(), admin.pk_field(), pk).await?;
	info!(model, pk, "deleted record");
	Ok(Response::see_other(&format!("{}/{}/", context.prefix, model)))
}
