//! Level CRUD plus the rich-text authoring assets.

use rampart::apps::levels::LEVEL_TABLE;
use rampart_http::StatusCode;
use rampart_integration_tests::{TestPanel, DIRECTOR, RANGER};
use serde_json::Value;

const RICH_TEXT_FIELDS: [&str; 6] = [
	"level_instructions",
	"intro_text",
	"hint_1_text",
	"hint_2_text",
	"hint_3_text",
	"hint_4_text",
];

#[tokio::test]
async fn test_level_form_tags_every_rich_text_field() {
	let panel = TestPanel::start().await;
	let session = panel.login(RANGER.0, RANGER.1).await;

	let body = panel.get("/admin/level/add/", &session).await.body_text();

	assert_eq!(body.matches("form-control summernote").count(), 6);
	for name in RICH_TEXT_FIELDS {
		assert!(body.contains(&format!("name=\"{name}\"")), "missing {name}");
	}
	// The single-line fields keep the plain base class.
	assert!(body.contains("name=\"level_name\""));
	assert!(!body.contains("name=\"level_name\" rows"));
}

#[tokio::test]
async fn test_level_pages_load_the_editor_after_jquery() {
	let panel = TestPanel::start().await;
	let session = panel.login(RANGER.0, RANGER.1).await;

	let body = panel.get("/admin/level/add/", &session).await.body_text();

	let jquery = body.find("jquery.min.js").expect("jquery script");
	let editor = body.find("summernote.js").expect("editor script");
	assert!(jquery < editor);
	assert!(body.contains("summernote.css"));
	assert!(body.contains("$('.summernote').summernote()"));
}

#[tokio::test]
async fn test_forms_without_rich_text_skip_the_editor() {
	let panel = TestPanel::start().await;
	let session = panel.login(DIRECTOR.0, DIRECTOR.1).await;

	let body = panel.get("/admin/user/add/", &session).await.body_text();

	assert!(!body.contains("summernote"));
	assert!(!body.contains("<script"));
}

#[tokio::test]
async fn test_level_list_shows_number_and_name_only() {
	let panel = TestPanel::start().await;
	let session = panel.login(RANGER.0, RANGER.1).await;

	let body = panel.get("/admin/level/", &session).await.body_text();

	assert!(body.contains("<th>Level no</th>"));
	assert!(body.contains("<th>Level name</th>"));
	assert!(!body.contains("<th>Intro text</th>"));
	assert!(body.contains("Reconnaissance"));
	assert!(body.contains("Page 1 of 1 (2 records)"));
}

#[tokio::test]
async fn test_created_level_stores_its_html_verbatim() {
	// Arrange
	let panel = TestPanel::start().await;
	let session = panel.login(RANGER.0, RANGER.1).await;

	// Act
	let response = panel
		.post(
			"/admin/level/add/",
			&session,
			"level_no=3&level_name=Cross-Site+Scripting\
			 &level_instructions=%3Cp%3EFind+the+sink.%3C%2Fp%3E",
		)
		.await;

	// Assert
	assert_eq!(response.status, StatusCode::SEE_OTHER);
	assert_eq!(response.location(), Some("/admin/level/"));
	let record = panel.db.get(LEVEL_TABLE, "id", 3).await.unwrap().unwrap();
	assert_eq!(record["level_no"], Value::from(3));
	assert_eq!(
		record["level_instructions"],
		Value::from("<p>Find the sink.</p>")
	);
}

#[tokio::test]
async fn test_edit_form_is_prefilled_and_saves() {
	let panel = TestPanel::start().await;
	let session = panel.login(RANGER.0, RANGER.1).await;

	let form = panel.get("/admin/level/1/change/", &session).await.body_text();
	assert!(form.contains("value=\"Reconnaissance\""));

	let response = panel
		.post(
			"/admin/level/1/change/",
			&session,
			"level_no=1&level_name=Recon+101&intro_text=%3Cp%3EUpdated.%3C%2Fp%3E",
		)
		.await;
	assert_eq!(response.status, StatusCode::SEE_OTHER);

	let record = panel.db.get(LEVEL_TABLE, "id", 1).await.unwrap().unwrap();
	assert_eq!(record["level_name"], Value::from("Recon 101"));
	assert_eq!(record["intro_text"], Value::from("<p>Updated.</p>"));
}

#[tokio::test]
async fn test_missing_required_fields_redisplay_the_form() {
	let panel = TestPanel::start().await;
	let session = panel.login(RANGER.0, RANGER.1).await;
	let before = panel.db.count(LEVEL_TABLE).await.unwrap();

	let response = panel
		.post("/admin/level/add/", &session, "level_no=4")
		.await;

	assert_eq!(response.status, StatusCode::OK);
	assert!(response.body_text().contains("This field is required."));
	assert_eq!(panel.db.count(LEVEL_TABLE).await.unwrap(), before);
}

#[tokio::test]
async fn test_deleting_a_level() {
	let panel = TestPanel::start().await;
	let session = panel.login(RANGER.0, RANGER.1).await;

	let response = panel.post("/admin/level/2/delete/", &session, "").await;

	assert_eq!(response.status, StatusCode::SEE_OTHER);
	assert!(panel.db.get(LEVEL_TABLE, "id", 2).await.unwrap().is_none());
	assert_eq!(panel.db.count(LEVEL_TABLE).await.unwrap(), 1);
}
