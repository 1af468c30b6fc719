//! End-to-end fixtures: a fully seeded panel served in memory.
//!
//! [`TestPanel`] boots the real router over an in-memory SQLite database and
//! exposes request helpers; tests drive it exactly the way a browser would,
//! one HTTP exchange at a time.

use http::header::SET_COOKIE;
use rampart::apps::auth::admin::roles_inline;
use rampart::apps::auth::{Role, User};
use rampart::apps::levels::{Level, LEVEL_TABLE};
use rampart::{build_router, configure_admin, migrations, Settings};
use rampart_admin::auth::{ROLE_TABLE, USER_TABLE};
use rampart_admin::{AdminDatabase, AdminRouter};
use rampart_auth::{Argon2Hasher, PasswordHasher};
use rampart_db::DatabaseConnection;
use rampart_http::{Handler, Method, Request, Response, StatusCode};

/// Credentials of the seeded account carrying the `admin` role.
pub const DIRECTOR: (&str, &str) = ("director", "director-pw");
/// Credentials of the seeded account with only the `player` role.
pub const RANGER: (&str, &str) = ("ranger", "ranger-pw");

pub const ADMIN_ROLE_ID: i64 = 1;
pub const PLAYER_ROLE_ID: i64 = 2;
pub const DIRECTOR_ID: i64 = 1;
pub const RANGER_ID: i64 = 2;

/// A panel over an in-memory database, seeded with the two accounts above
/// and the starter levels.
pub struct TestPanel {
	pub db: AdminDatabase,
	pub router: AdminRouter,
}

impl TestPanel {
	pub async fn start() -> Self {
		let connection = DatabaseConnection::connect("sqlite::memory:")
			.await
			.expect("in-memory database");
		let db = AdminDatabase::new(connection);
		migrations::apply(&db).await.expect("schema");
		seed_accounts(&db).await;
		for level in Level::starter_levels() {
			db.insert(LEVEL_TABLE, &level.to_record()).await.expect("level row");
		}

		let site = configure_admin("Rampart Admin").expect("admin site");
		let router = build_router(&Settings::default(), site, db.clone());
		Self { db, router }
	}

	/// Logs `username` in and returns the session cookie value.
	pub async fn login(&self, username: &str, password: &str) -> String {
		let body = format!("username={username}&password={password}");
		let response = self.post_anonymous("/admin/login/", &body).await;
		assert_eq!(
			response.status,
			StatusCode::SEE_OTHER,
			"login failed: {}",
			response.body_text()
		);
		session_cookie(&response).expect("login set no session cookie")
	}

	pub async fn get(&self, path: &str, session: &str) -> Response {
		let request = Request::builder()
			.method(Method::GET)
			.uri(path)
			.header("cookie", &format!("rampart_session={session}"))
			.build();
		self.handle(request).await
	}

	pub async fn get_anonymous(&self, path: &str) -> Response {
		let request = Request::builder().method(Method::GET).uri(path).build();
		self.handle(request).await
	}

	pub async fn post(&self, path: &str, session: &str, body: &str) -> Response {
		let request = Request::builder()
			.method(Method::POST)
			.uri(path)
			.header("content-type", "application/x-www-form-urlencoded")
			.header("cookie", &format!("rampart_session={session}"))
			.body(body.to_string())
			.build();
		self.handle(request).await
	}

	pub async fn post_anonymous(&self, path: &str, body: &str) -> Response {
		let request = Request::builder()
			.method(Method::POST)
			.uri(path)
			.header("content-type", "application/x-www-form-urlencoded")
			.body(body.to_string())
			.build();
		self.handle(request).await
	}

	async fn handle(&self, request: Request) -> Response {
		self.router.handle(request).await.expect("handler never errors")
	}
}

async fn seed_accounts(db: &AdminDatabase) {
	let hasher = Argon2Hasher;

	let admin_role = Role {
		id: None,
		name: "admin".to_string(),
		description: None,
	};
	let player_role = Role {
		id: None,
		name: "player".to_string(),
		description: None,
	};
	let admin_role_id = db
		.insert(ROLE_TABLE, &admin_role.to_record())
		.await
		.expect("admin role");
	let player_role_id = db
		.insert(ROLE_TABLE, &player_role.to_record())
		.await
		.expect("player role");
	assert_eq!((admin_role_id, player_role_id), (ADMIN_ROLE_ID, PLAYER_ROLE_ID));

	let director = User {
		id: None,
		username: DIRECTOR.0.to_string(),
		email: "director@range.test".to_string(),
		password: hasher.hash(DIRECTOR.1).expect("hash"),
		active: true,
		confirmed_at: None,
	};
	let director_id = db
		.insert(USER_TABLE, &director.to_record())
		.await
		.expect("director row");
	db.set_related(&roles_inline(), director_id, &[admin_role_id])
		.await
		.expect("director membership");

	let ranger = User {
		id: None,
		username: RANGER.0.to_string(),
		email: "ranger@range.test".to_string(),
		password: hasher.hash(RANGER.1).expect("hash"),
		active: true,
		confirmed_at: None,
	};
	let ranger_id = db
		.insert(USER_TABLE, &ranger.to_record())
		.await
		.expect("ranger row");
	db.set_related(&roles_inline(), ranger_id, &[player_role_id])
		.await
		.expect("ranger membership");
	assert_eq!((director_id, ranger_id), (DIRECTOR_ID, RANGER_ID));
}

/// The `rampart_session` value from the first `set-cookie` header, if any.
pub fn session_cookie(response: &Response) -> Option<String> {
	let header = response.headers.get(SET_COOKIE)?.to_str().ok()?;
	let pair = header.split(';').next()?;
	pair.strip_prefix("rampart_session=")
		.map(|token| token.to_string())
}
