//! Login, logout and the session round trip, driven over HTTP.

use rampart::{build_router, configure_admin, migrations, Settings};
use rampart_admin::auth::USER_TABLE;
use rampart_admin::{AdminDatabase, AdminRecord};
use rampart_auth::Argon2Hasher;
use rampart_db::DatabaseConnection;
use rampart_http::{Handler, Method, Request, StatusCode};
use rampart_integration_tests::{session_cookie, TestPanel, DIRECTOR, RANGER, RANGER_ID};
use serde_json::Value;
use serial_test::serial;

#[tokio::test]
async fn test_login_page_needs_no_session() {
	let panel = TestPanel::start().await;

	let response = panel.get_anonymous("/admin/login/").await;

	assert_eq!(response.status, StatusCode::OK);
	let body = response.body_text();
	assert!(body.contains("name=\"username\""));
	assert!(body.contains("type=\"password\""));
}

#[tokio::test]
async fn test_login_sets_a_session_and_opens_the_dashboard() {
	let panel = TestPanel::start().await;

	let session = panel.login(DIRECTOR.0, DIRECTOR.1).await;
	let response = panel.get("/admin/", &session).await;

	assert_eq!(response.status, StatusCode::OK);
	assert!(response.body_text().contains("Rampart Admin"));
}

#[tokio::test]
async fn test_wrong_password_redisplays_the_form_without_a_session() {
	let panel = TestPanel::start().await;

	let response = panel
		.post_anonymous("/admin/login/", "username=director&password=wrong")
		.await;

	assert_eq!(response.status, StatusCode::OK);
	assert!(response.body_text().contains("Invalid username or password."));
	assert!(session_cookie(&response).is_none());
}

#[tokio::test]
async fn test_unknown_username_reads_like_a_wrong_password() {
	let panel = TestPanel::start().await;

	let unknown = panel
		.post_anonymous("/admin/login/", "username=nobody&password=x")
		.await;
	let wrong = panel
		.post_anonymous("/admin/login/", "username=director&password=x")
		.await;

	// Neither response says which part was wrong.
	assert!(unknown.body_text().contains("Invalid username or password."));
	assert!(wrong.body_text().contains("Invalid username or password."));
}

#[tokio::test]
async fn test_anonymous_visitor_is_sent_to_login_with_next() {
	let panel = TestPanel::start().await;

	let response = panel.get_anonymous("/admin/level/").await;

	assert_eq!(response.status, StatusCode::SEE_OTHER);
	assert_eq!(
		response.location(),
		Some("/admin/login/?next=%2Fadmin%2Flevel%2F")
	);
}

#[tokio::test]
async fn test_login_returns_to_the_requested_page() {
	let panel = TestPanel::start().await;

	let body = format!(
		"username={}&password={}&next=%2Fadmin%2Flevel%2F",
		DIRECTOR.0, DIRECTOR.1
	);
	let response = panel.post_anonymous("/admin/login/", &body).await;

	assert_eq!(response.status, StatusCode::SEE_OTHER);
	assert_eq!(response.location(), Some("/admin/level/"));
}

#[tokio::test]
async fn test_offsite_next_targets_fall_back_to_the_dashboard() {
	let panel = TestPanel::start().await;

	for next in ["https%3A%2F%2Fevil.test%2F", "%2F%2Fevil.test%2F"] {
		let body = format!(
			"username={}&password={}&next={next}",
			DIRECTOR.0, DIRECTOR.1
		);
		let response = panel.post_anonymous("/admin/login/", &body).await;

		assert_eq!(response.status, StatusCode::SEE_OTHER);
		assert_eq!(response.location(), Some("/admin/"), "next={next}");
	}
}

#[tokio::test]
async fn test_logout_invalidates_the_session() {
	let panel = TestPanel::start().await;
	let session = panel.login(DIRECTOR.0, DIRECTOR.1).await;

	let response = panel.get("/admin/logout/", &session).await;
	assert_eq!(response.status, StatusCode::SEE_OTHER);

	let after = panel.get("/admin/user/", &session).await;
	assert_eq!(after.status, StatusCode::SEE_OTHER);
	assert!(after.location().unwrap().starts_with("/admin/login/"));
}

#[tokio::test]
async fn test_deactivation_evicts_the_session_and_blocks_login() {
	// Arrange
	let panel = TestPanel::start().await;
	let session = panel.login(RANGER.0, RANGER.1).await;

	let mut update = AdminRecord::new();
	update.insert("active".to_string(), Value::Bool(false));
	panel
		.db
		.update(USER_TABLE, "id", RANGER_ID, &update)
		.await
		.unwrap();

	// Act & Assert: the live session stops working at once.
	let evicted = panel.get("/admin/level/", &session).await;
	assert_eq!(evicted.status, StatusCode::SEE_OTHER);

	let retry = panel
		.post_anonymous(
			"/admin/login/",
			&format!("username={}&password={}", RANGER.0, RANGER.1),
		)
		.await;
	assert_eq!(retry.status, StatusCode::OK);
	assert!(retry.body_text().contains("Invalid username or password."));
}

#[tokio::test]
#[serial]
async fn test_bootstrap_admin_can_log_in() {
	// Boot the way the binary does, not through the fixture seeding.
	unsafe { std::env::set_var(migrations::ADMIN_PASSWORD_ENV, "first-boot-pw") };
	let connection = DatabaseConnection::connect("sqlite::memory:").await.unwrap();
	let db = AdminDatabase::new(connection);
	migrations::apply(&db).await.unwrap();
	migrations::seed(&db, &Argon2Hasher).await.unwrap();
	unsafe { std::env::remove_var(migrations::ADMIN_PASSWORD_ENV) };

	let site = configure_admin("Rampart Admin").unwrap();
	let router = build_router(&Settings::default(), site, db);

	let request = Request::builder()
		.method(Method::POST)
		.uri("/admin/login/")
		.header("content-type", "application/x-www-form-urlencoded")
		.body("username=admin&password=first-boot-pw".to_string())
		.build();
	let response = router.handle(request).await.unwrap();

	assert_eq!(response.status, StatusCode::SEE_OTHER);
	assert!(session_cookie(&response).is_some());
}
