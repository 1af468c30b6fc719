//! Role membership editing through the inline selects on both sides.

use rampart::apps::auth::admin::{roles_inline, users_inline};
use rampart_admin::auth::USER_TABLE;
use rampart_http::StatusCode;
use rampart_integration_tests::{
	TestPanel, ADMIN_ROLE_ID, DIRECTOR, PLAYER_ROLE_ID, RANGER_ID,
};

#[tokio::test]
async fn test_user_form_offers_every_role_with_current_selection() {
	let panel = TestPanel::start().await;
	let session = panel.login(DIRECTOR.0, DIRECTOR.1).await;

	let body = panel.get("/admin/user/2/change/", &session).await.body_text();

	assert!(body.contains("<select name=\"roles\" multiple"));
	assert!(body.contains(">admin</option>"));
	assert!(body.contains("<option value=\"2\" selected>player</option>"));
}

#[tokio::test]
async fn test_adding_a_membership_through_the_user_form() {
	// Arrange
	let panel = TestPanel::start().await;
	let session = panel.login(DIRECTOR.0, DIRECTOR.1).await;

	// Act
	let response = panel
		.post(
			"/admin/user/2/change/",
			&session,
			"username=ranger&email=ranger%40range.test&password2=&active=on&roles=1&roles=2",
		)
		.await;

	// Assert
	assert_eq!(response.status, StatusCode::SEE_OTHER);
	let mut roles = panel
		.db
		.selected_related(&roles_inline(), RANGER_ID)
		.await
		.unwrap();
	roles.sort_unstable();
	assert_eq!(roles, vec![ADMIN_ROLE_ID, PLAYER_ROLE_ID]);
}

#[tokio::test]
async fn test_empty_submission_clears_memberships() {
	let panel = TestPanel::start().await;
	let session = panel.login(DIRECTOR.0, DIRECTOR.1).await;

	// A multi-select with nothing chosen sends no `roles` key at all.
	let response = panel
		.post(
			"/admin/user/2/change/",
			&session,
			"username=ranger&email=ranger%40range.test&password2=&active=on",
		)
		.await;

	assert_eq!(response.status, StatusCode::SEE_OTHER);
	let roles = panel
		.db
		.selected_related(&roles_inline(), RANGER_ID)
		.await
		.unwrap();
	assert!(roles.is_empty());
}

#[tokio::test]
async fn test_role_form_reads_the_join_from_the_other_side() {
	let panel = TestPanel::start().await;
	let session = panel.login(DIRECTOR.0, DIRECTOR.1).await;

	let body = panel.get("/admin/role/1/change/", &session).await.body_text();

	assert!(body.contains("<select name=\"users\" multiple"));
	assert!(body.contains("<option value=\"1\" selected>director</option>"));
	assert!(body.contains(">ranger</option>"));
}

#[tokio::test]
async fn test_assigning_users_from_the_role_side() {
	let panel = TestPanel::start().await;
	let session = panel.login(DIRECTOR.0, DIRECTOR.1).await;

	let response = panel
		.post(
			"/admin/role/2/change/",
			&session,
			"name=player&description=Range+participant&users=1&users=2",
		)
		.await;

	assert_eq!(response.status, StatusCode::SEE_OTHER);
	let mut users = panel
		.db
		.selected_related(&users_inline(), PLAYER_ROLE_ID)
		.await
		.unwrap();
	users.sort_unstable();
	assert_eq!(users, vec![1, 2]);
}

#[tokio::test]
async fn test_deleting_a_user_drops_its_memberships() {
	// Arrange
	let panel = TestPanel::start().await;
	let session = panel.login(DIRECTOR.0, DIRECTOR.1).await;
	assert_eq!(
		panel
			.db
			.selected_related(&roles_inline(), RANGER_ID)
			.await
			.unwrap(),
		vec![PLAYER_ROLE_ID]
	);

	// Act
	let response = panel.post("/admin/user/2/delete/", &session, "").await;

	// Assert
	assert_eq!(response.status, StatusCode::SEE_OTHER);
	assert!(panel
		.db
		.get(USER_TABLE, "id", RANGER_ID)
		.await
		.unwrap()
		.is_none());
	assert!(panel
		.db
		.selected_related(&roles_inline(), RANGER_ID)
		.await
		.unwrap()
		.is_empty());
}
