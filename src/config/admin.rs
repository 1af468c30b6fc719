//! Site assembly: which model views the panel serves.

use std::sync::Arc;

use rampart_admin::{AdminResult, AdminSite};

use crate::apps::auth::{RoleAdmin, UserAdmin};
use crate::apps::levels::LevelAdmin;

/// The full back office: level content plus account management.
pub fn configure_admin(title: &str) -> AdminResult<AdminSite> {
	let mut site = AdminSite::new(title);
	site.register(Arc::new(LevelAdmin))?;
	site.register(Arc::new(UserAdmin::new()))?;
	site.register(Arc::new(RoleAdmin))?;
	Ok(site)
}
