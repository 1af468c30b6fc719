//! Loading and verifying the accounts the panel runs as.
//!
//! Accounts live in the `auth_user` table, role names in `auth_role`, and
//! memberships in the `auth_user_roles` join table. These queries go over
//! the raw connection with bound parameters; everything else in the crate
//! goes through [`AdminDatabase`]'s query builder.

use rampart_auth::{AuthenticationError, CurrentUser, PasswordHasher, SessionStore};
use rampart_db::Row;
use rampart_http::Request;

use crate::database::AdminDatabase;
use crate::error::AdminResult;
use crate::model_admin::AdminUser;

pub const USER_TABLE: &str = "auth_user";
pub const ROLE_TABLE: &str = "auth_role";
pub const USER_ROLES_TABLE: &str = "auth_user_roles";

fn user_from_row(row: &Row, roles: Vec<String>) -> Option<AdminUser> {
	Some(AdminUser {
		id: row.get_i64("id")?,
		username: row.get_string("username")?,
		password_hash: row.get_string("password").unwrap_or_default(),
		active: row.get_bool("active").unwrap_or(false),
		roles,
	})
}

async fn load_roles(db: &AdminDatabase, user_id: i64) -> AdminResult<Vec<String>> {
	let sql = format!(
		"SELECT r.name AS name FROM {ROLE_TABLE} r \
		 JOIN {USER_ROLES_TABLE} ur ON ur.role_id = r.id \
		 WHERE ur.user_id = ? ORDER BY r.name"
	);
	let rows = db.connection().fetch_all(&sql, vec![user_id.into()]).await?;
	Ok(rows.into_iter().filter_map(|row| row.get_string("name")).collect())
}

/// Loads one account with its role names.
pub async fn load_user(db: &AdminDatabase, user_id: i64) -> AdminResult<Option<AdminUser>> {
	let sql = format!("SELECT id, username, password, active FROM {USER_TABLE} WHERE id = ?");
	let Some(row) = db
		.connection()
		.fetch_optional(&sql, vec![user_id.into()])
		.await?
	else {
		return Ok(None);
	};
	let Some(user) = user_from_row(&row, Vec::new()) else {
		return Ok(None);
	};
	let roles = load_roles(db, user.id).await?;
	Ok(Some(AdminUser { roles, ..user }))
}

/// Checks a username/password pair against the stored credential.
///
/// An account whose credential was never set stores an empty string, which
/// no submitted password verifies against.
pub async fn authenticate(
	db: &AdminDatabase,
	hasher: &dyn PasswordHasher,
	username: &str,
	password: &str,
) -> AdminResult<AdminUser> {
	let sql = format!("SELECT id, username, password, active FROM {USER_TABLE} WHERE username = ?");
	let row = db
		.connection()
		.fetch_optional(&sql, vec![username.into()])
		.await?;
	let Some(row) = row else {
		// Hash anyway so an unknown username costs the same as a wrong password.
		let _ = hasher.hash(password);
		return Err(AuthenticationError::InvalidCredentials.into());
	};
	let Some(mut user) = user_from_row(&row, Vec::new()) else {
		return Err(AuthenticationError::InvalidCredentials.into());
	};
	if !hasher.verify(password, &user.password_hash) {
		return Err(AuthenticationError::InvalidCredentials.into());
	}
	if !user.active {
		return Err(AuthenticationError::InactiveUser.into());
	}
	user.roles = load_roles(db, user.id).await?;
	Ok(user)
}

/// Resolves the viewer of one request from its session cookie.
///
/// Anything short of a live session for an active account comes back as
/// the anonymous user; a session pointing at a deleted or deactivated
/// account is dropped on the spot.
pub async fn request_user(
	request: &Request,
	cookie_name: &str,
	sessions: &SessionStore,
	db: &AdminDatabase,
) -> AdminResult<CurrentUser<AdminUser>> {
	let Some(token) = request.cookie(cookie_name) else {
		return Ok(CurrentUser::anonymous());
	};
	let Some(user_id) = sessions.get(&token) else {
		return Ok(CurrentUser::anonymous());
	};
	match load_user(db, user_id).await? {
		Some(user) if user.active => Ok(CurrentUser::authenticated(user)),
		_ => {
			sessions.remove(&token);
			Ok(CurrentUser::anonymous())
		}
	}
}
