//! Router construction.

use std::sync::Arc;

use rampart_admin::{AdminDatabase, AdminRouter, AdminSite};
use rampart_auth::{Argon2Hasher, SessionStore};

use super::settings::Settings;

/// Mounts the admin site at `/admin` with a fresh in-process session store.
pub fn build_router(settings: &Settings, site: AdminSite, db: AdminDatabase) -> AdminRouter {
	AdminRouter::new(
		Arc::new(site),
		Arc::new(db),
		Arc::new(SessionStore::new()),
		Arc::new(Argon2Hasher),
	)
	.with_cookie_name(&settings.session_cookie_name)
}
