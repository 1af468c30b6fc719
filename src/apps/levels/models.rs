//! Level content rows.

use rampart_admin::{AdminRecord, ColumnKind, ColumnSchema};
use serde::{Deserialize, Serialize};

pub const LEVEL_TABLE: &str = "levels_level";

/// One range level: a numbered challenge whose long-form fields hold HTML
/// authored through the rich-text editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,
	pub level_no: i64,
	pub level_name: String,
	pub level_instructions: Option<String>,
	pub intro_text: Option<String>,
	pub hint_1_text: Option<String>,
	pub hint_2_text: Option<String>,
	pub hint_3_text: Option<String>,
	pub hint_4_text: Option<String>,
}

impl Level {
	pub fn to_record(&self) -> AdminRecord {
		crate::apps::to_record(self)
	}

	/// The levels a fresh install starts with, so the panel has content to
	/// show before any authoring has happened.
	pub fn starter_levels() -> Vec<Level> {
		vec![
			Level {
				id: None,
				level_no: 1,
				level_name: "Reconnaissance".to_string(),
				level_instructions: Some(
					"<p>Map the target without touching it. List every hostname \
					 you can tie to the range network.</p>"
						.to_string(),
				),
				intro_text: Some(
					"<p>Welcome to the range. Look before you leap.</p>".to_string(),
				),
				hint_1_text: Some(
					"<p>Public DNS records are public for a reason.</p>".to_string(),
				),
				hint_2_text: Some(
					"<p>Certificate transparency logs never forget.</p>".to_string(),
				),
				hint_3_text: None,
				hint_4_text: None,
			},
			Level {
				id: None,
				level_no: 2,
				level_name: "Broken Authentication".to_string(),
				level_instructions: Some(
					"<p>The staging portal still runs on a framework default. \
					 Sign in without being given a password.</p>"
						.to_string(),
				),
				intro_text: Some("<p>Defaults ship, defaults stay.</p>".to_string()),
				hint_1_text: Some(
					"<p>Read the deployment guide the vendor publishes.</p>".to_string(),
				),
				hint_2_text: None,
				hint_3_text: None,
				hint_4_text: None,
			},
		]
	}
}

pub fn level_columns() -> Vec<ColumnSchema> {
	vec![
		ColumnSchema::new("id", ColumnKind::PrimaryKey),
		ColumnSchema::new("level_no", ColumnKind::Integer).required(),
		ColumnSchema::new("level_name", ColumnKind::Text).required(),
		ColumnSchema::new("level_instructions", ColumnKind::LongText),
		ColumnSchema::new("intro_text", ColumnKind::LongText),
		ColumnSchema::new("hint_1_text", ColumnKind::LongText),
		ColumnSchema::new("hint_2_text", ColumnKind::LongText),
		ColumnSchema::new("hint_3_text", ColumnKind::LongText),
		ColumnSchema::new("hint_4_text", ColumnKind::LongText),
	]
}
