//! Who may open which views.
//!
//! Level views admit any logged-in account; the user and role views demand
//! the `admin` role, and the check runs before any row is read or written.

use rampart_admin::auth::USER_TABLE;
use rampart_http::StatusCode;
use rampart_integration_tests::{TestPanel, DIRECTOR, RANGER};
use rstest::rstest;

#[rstest]
#[case::user_list("/admin/user/")]
#[case::user_add("/admin/user/add/")]
#[case::user_change("/admin/user/1/change/")]
#[case::role_list("/admin/role/")]
#[case::role_change("/admin/role/1/change/")]
#[tokio::test]
async fn test_account_views_are_admin_only(#[case] path: &str) {
	let panel = TestPanel::start().await;
	let session = panel.login(RANGER.0, RANGER.1).await;

	let response = panel.get(path, &session).await;

	assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[rstest]
#[case::user_list("/admin/user/")]
#[case::user_change("/admin/user/2/change/")]
#[case::role_list("/admin/role/")]
#[case::role_change("/admin/role/1/change/")]
#[tokio::test]
async fn test_the_admin_role_unlocks_account_views(#[case] path: &str) {
	let panel = TestPanel::start().await;
	let session = panel.login(DIRECTOR.0, DIRECTOR.1).await;

	let response = panel.get(path, &session).await;

	assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_any_member_may_work_on_levels() {
	let panel = TestPanel::start().await;
	let session = panel.login(RANGER.0, RANGER.1).await;

	for path in ["/admin/level/", "/admin/level/add/", "/admin/level/1/change/"] {
		let response = panel.get(path, &session).await;
		assert_eq!(response.status, StatusCode::OK, "{path}");
	}
}

#[tokio::test]
async fn test_denied_post_writes_nothing() {
	// Arrange
	let panel = TestPanel::start().await;
	let session = panel.login(RANGER.0, RANGER.1).await;
	let before = panel.db.count(USER_TABLE).await.unwrap();

	// Act
	let response = panel
		.post(
			"/admin/user/add/",
			&session,
			"username=mallory&email=mallory%40range.test&password2=pw",
		)
		.await;

	// Assert
	assert_eq!(response.status, StatusCode::FORBIDDEN);
	assert_eq!(panel.db.count(USER_TABLE).await.unwrap(), before);
}

#[tokio::test]
async fn test_unknown_model_is_a_plain_404() {
	let panel = TestPanel::start().await;
	let session = panel.login(DIRECTOR.0, DIRECTOR.1).await;

	let response = panel.get("/admin/flag/", &session).await;

	assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_record_404s_only_after_the_permission_gate() {
	let panel = TestPanel::start().await;

	let director = panel.login(DIRECTOR.0, DIRECTOR.1).await;
	let missing = panel.get("/admin/user/999/change/", &director).await;
	assert_eq!(missing.status, StatusCode::NOT_FOUND);

	// A plain member never learns whether the row exists.
	let ranger = panel.login(RANGER.0, RANGER.1).await;
	let gated = panel.get("/admin/user/999/change/", &ranger).await;
	assert_eq!(gated.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_delete_requires_a_post() {
	let panel = TestPanel::start().await;
	let session = panel.login(DIRECTOR.0, DIRECTOR.1).await;

	let response = panel.get("/admin/user/2/delete/", &session).await;

	assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_dashboard_lists_only_accessible_models() {
	let panel = TestPanel::start().await;

	let ranger = panel.login(RANGER.0, RANGER.1).await;
	let body = panel.get("/admin/", &ranger).await.body_text();
	assert!(body.contains("/admin/level/"));
	assert!(!body.contains("/admin/user/"));
	assert!(!body.contains("/admin/role/"));

	let director = panel.login(DIRECTOR.0, DIRECTOR.1).await;
	let body = panel.get("/admin/", &director).await.body_text();
	assert!(body.contains("/admin/user/"));
	assert!(body.contains("/admin/role/"));
}
