//! The credential lifecycle: hashed on save, preserved on blank, never
//! rendered.

use rampart_admin::auth::{authenticate, USER_TABLE};
use rampart_auth::Argon2Hasher;
use rampart_http::StatusCode;
use rampart_integration_tests::{TestPanel, DIRECTOR, RANGER, RANGER_ID};

async fn stored_password(panel: &TestPanel, id: i64) -> String {
	let record = panel.db.get(USER_TABLE, "id", id).await.unwrap().unwrap();
	record["password"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_created_account_stores_an_argon2_hash() {
	// Arrange
	let panel = TestPanel::start().await;
	let session = panel.login(DIRECTOR.0, DIRECTOR.1).await;

	// Act
	let response = panel
		.post(
			"/admin/user/add/",
			&session,
			"username=eve&email=eve%40range.test&password2=eve-pw&active=on",
		)
		.await;

	// Assert
	assert_eq!(response.status, StatusCode::SEE_OTHER);
	let stored = stored_password(&panel, 3).await;
	assert!(stored.starts_with("$argon2"));
	assert_ne!(stored, "eve-pw");
	let account = authenticate(&panel.db, &Argon2Hasher, "eve", "eve-pw")
		.await
		.unwrap();
	assert_eq!(account.username, "eve");
}

#[tokio::test]
async fn test_blank_password_keeps_the_stored_credential() {
	let panel = TestPanel::start().await;
	let session = panel.login(DIRECTOR.0, DIRECTOR.1).await;
	let before = stored_password(&panel, RANGER_ID).await;

	let response = panel
		.post(
			"/admin/user/2/change/",
			&session,
			"username=ranger&email=ranger%40range.test&password2=&active=on&roles=2",
		)
		.await;

	assert_eq!(response.status, StatusCode::SEE_OTHER);
	assert_eq!(stored_password(&panel, RANGER_ID).await, before);
	// The old password still works.
	authenticate(&panel.db, &Argon2Hasher, RANGER.0, RANGER.1)
		.await
		.unwrap();
}

#[tokio::test]
async fn test_new_password_replaces_the_credential() {
	let panel = TestPanel::start().await;
	let session = panel.login(DIRECTOR.0, DIRECTOR.1).await;
	let before = stored_password(&panel, RANGER_ID).await;

	let response = panel
		.post(
			"/admin/user/2/change/",
			&session,
			"username=ranger&email=ranger%40range.test&password2=rotated-pw&active=on&roles=2",
		)
		.await;
	assert_eq!(response.status, StatusCode::SEE_OTHER);

	let after = stored_password(&panel, RANGER_ID).await;
	assert_ne!(after, before);
	assert!(authenticate(&panel.db, &Argon2Hasher, RANGER.0, "rotated-pw")
		.await
		.is_ok());
	assert!(authenticate(&panel.db, &Argon2Hasher, RANGER.0, RANGER.1)
		.await
		.is_err());
}

#[tokio::test]
async fn test_account_created_without_a_password_cannot_log_in() {
	let panel = TestPanel::start().await;
	let session = panel.login(DIRECTOR.0, DIRECTOR.1).await;

	let response = panel
		.post(
			"/admin/user/add/",
			&session,
			"username=ghost&email=ghost%40range.test&password2=&active=on",
		)
		.await;
	assert_eq!(response.status, StatusCode::SEE_OTHER);

	assert_eq!(stored_password(&panel, 3).await, "");
	assert!(authenticate(&panel.db, &Argon2Hasher, "ghost", "")
		.await
		.is_err());
}

#[tokio::test]
async fn test_the_stored_hash_never_appears_in_a_page() {
	let panel = TestPanel::start().await;
	let session = panel.login(DIRECTOR.0, DIRECTOR.1).await;

	let list = panel.get("/admin/user/", &session).await.body_text();
	let form = panel.get("/admin/user/2/change/", &session).await.body_text();

	assert!(!list.contains("$argon2"));
	assert!(!list.contains("<th>Password</th>"));
	assert!(!form.contains("$argon2"));
	// Only the write-only replacement field is rendered.
	assert!(form.contains("name=\"password2\""));
	assert!(!form.contains("name=\"password\""));
	assert!(form.contains("New Password"));
}
