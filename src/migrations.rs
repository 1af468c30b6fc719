//! Schema setup and first-boot seeding.

use rampart_admin::auth::{ROLE_TABLE, USER_TABLE};
use rampart_admin::{AdminDatabase, AdminResult};
use rampart_auth::PasswordHasher;
use rand::distributions::Alphanumeric;
use rand::Rng;
use tracing::info;

use crate::apps::auth::admin::roles_inline;
use crate::apps::auth::{Role, User};
use crate::apps::levels::{Level, LEVEL_TABLE};

/// Environment variable consulted for the bootstrap admin password.
pub const ADMIN_PASSWORD_ENV: &str = "RAMPART_ADMIN_PASSWORD";

const SCHEMA: &[&str] = &[
	"CREATE TABLE IF NOT EXISTS auth_user (
		id INTEGER PRIMARY KEY AUTOINCREMENT,
		username TEXT NOT NULL UNIQUE,
		email TEXT NOT NULL,
		password TEXT NOT NULL DEFAULT '',
		active BOOLEAN NOT NULL DEFAULT 1,
		confirmed_at TIMESTAMP
	)",
	"CREATE TABLE IF NOT EXISTS auth_role (
		id INTEGER PRIMARY KEY AUTOINCREMENT,
		name TEXT NOT NULL UNIQUE,
		description TEXT
	)",
	"CREATE TABLE IF NOT EXISTS auth_user_roles (
		id INTEGER PRIMARY KEY AUTOINCREMENT,
		user_id INTEGER NOT NULL REFERENCES auth_user (id) ON DELETE CASCADE,
		role_id INTEGER NOT NULL REFERENCES auth_role (id) ON DELETE CASCADE
	)",
	"CREATE TABLE IF NOT EXISTS levels_level (
		id INTEGER PRIMARY KEY AUTOINCREMENT,
		level_no INTEGER NOT NULL,
		level_name TEXT NOT NULL,
		level_instructions TEXT,
		intro_text TEXT,
		hint_1_text TEXT,
		hint_2_text TEXT,
		hint_3_text TEXT,
		hint_4_text TEXT
	)",
];

/// Creates every table the panel manages. Safe to run on every boot.
pub async fn apply(db: &AdminDatabase) -> AdminResult<()> {
	for statement in SCHEMA {
		db.connection().execute(statement, Vec::new()).await?;
	}
	Ok(())
}

/// First-boot content: the `admin` and `player` roles, an administrator
/// account, and the starter levels. Does nothing once any user exists.
pub async fn seed(db: &AdminDatabase, hasher: &dyn PasswordHasher) -> AdminResult<()> {
	if db.count(USER_TABLE).await? > 0 {
		return Ok(());
	}

	let admin_role = Role {
		id: None,
		name: "admin".to_string(),
		description: Some("Full access to the back office".to_string()),
	};
	let player_role = Role {
		id: None,
		name: "player".to_string(),
		description: Some("Range participant".to_string()),
	};
	let admin_role_id = db.insert(ROLE_TABLE, &admin_role.to_record()).await?;
	db.insert(ROLE_TABLE, &player_role.to_record()).await?;

	let password = bootstrap_password();
	let account = User {
		id: None,
		username: "admin".to_string(),
		email: "admin@localhost".to_string(),
		password: hasher.hash(&password)?,
		active: true,
		confirmed_at: None,
	};
	let user_id = db.insert(USER_TABLE, &account.to_record()).await?;
	db.set_related(&roles_inline(), user_id, &[admin_role_id]).await?;
	info!(username = "admin", "created bootstrap administrator");

	if db.count(LEVEL_TABLE).await? == 0 {
		for level in Level::starter_levels() {
			db.insert(LEVEL_TABLE, &level.to_record()).await?;
		}
	}
	Ok(())
}

fn bootstrap_password() -> String {
	match std::env::var(ADMIN_PASSWORD_ENV) {
		Ok(password) if !password.is_empty() => password,
		_ => {
			let generated: String = rand::thread_rng()
				.sample_iter(&Alphanumeric)
				.take(20)
				.map(char::from)
				.collect();
			// Printed exactly once; there is no other way to recover it.
			info!(password = %generated, "generated bootstrap admin password");
			generated
		}
	}
}

#[cfg(test)]
mod tests {
	use rampart_admin::auth::authenticate;
	use rampart_auth::Argon2Hasher;
	use rampart_db::DatabaseConnection;
	use serial_test::serial;

	use super::*;

	async fn fresh_db() -> AdminDatabase {
		let connection = DatabaseConnection::connect("sqlite::memory:").await.unwrap();
		AdminDatabase::new(connection)
	}

	#[tokio::test]
	#[serial]
	async fn test_seed_creates_a_verifiable_administrator() {
		// Arrange
		let db = fresh_db().await;
		apply(&db).await.unwrap();
		unsafe { std::env::set_var(ADMIN_PASSWORD_ENV, "bootstrap-pw") };

		// Act
		seed(&db, &Argon2Hasher).await.unwrap();
		unsafe { std::env::remove_var(ADMIN_PASSWORD_ENV) };

		// Assert
		let admin = authenticate(&db, &Argon2Hasher, "admin", "bootstrap-pw")
			.await
			.unwrap();
		assert!(admin.roles.contains(&"admin".to_string()));
	}

	#[tokio::test]
	#[serial]
	async fn test_seed_generates_a_password_when_none_is_configured() {
		// Arrange
		let db = fresh_db().await;
		apply(&db).await.unwrap();
		unsafe { std::env::remove_var(ADMIN_PASSWORD_ENV) };

		// Act
		seed(&db, &Argon2Hasher).await.unwrap();

		// Assert
		let admin = db.get(USER_TABLE, "id", 1).await.unwrap().unwrap();
		let stored = admin["password"].as_str().unwrap();
		assert!(stored.starts_with("$argon2"));
	}

	#[tokio::test]
	#[serial]
	async fn test_seed_runs_once() {
		let db = fresh_db().await;
		apply(&db).await.unwrap();
		unsafe { std::env::set_var(ADMIN_PASSWORD_ENV, "bootstrap-pw") };

		seed(&db, &Argon2Hasher).await.unwrap();
		seed(&db, &Argon2Hasher).await.unwrap();
		unsafe { std::env::remove_var(ADMIN_PASSWORD_ENV) };

		assert_eq!(db.count(USER_TABLE).await.unwrap(), 1);
		assert_eq!(db.count(ROLE_TABLE).await.unwrap(), 2);
	}

	#[tokio::test]
	#[serial]
	async fn test_seed_loads_the_starter_levels() {
		let db = fresh_db().await;
		apply(&db).await.unwrap();
		unsafe { std::env::set_var(ADMIN_PASSWORD_ENV, "bootstrap-pw") };

		seed(&db, &Argon2Hasher).await.unwrap();
		unsafe { std::env::remove_var(ADMIN_PASSWORD_ENV) };

		let expected = Level::starter_levels().len() as u64;
		assert_eq!(db.count(LEVEL_TABLE).await.unwrap(), expected);
	}

	#[tokio::test]
	async fn test_apply_is_idempotent() {
		let db = fresh_db().await;
		apply(&db).await.unwrap();
		apply(&db).await.unwrap();

		assert_eq!(db.count(USER_TABLE).await.unwrap(), 0);
	}
}
