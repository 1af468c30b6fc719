//! Admin view configuration for range levels.

use async_trait::async_trait;
use rampart_admin::{ColumnSchema, ModelAdmin};
use rampart_forms::{CharField, FormField, Textarea};

use super::models::{level_columns, LEVEL_TABLE};

/// Editor assets, pinned to the build the authoring pages were written
/// against.
pub const SUMMERNOTE_JS: &str =
	"//cdnjs.cloudflare.com/ajax/libs/summernote/0.8.12/summernote.js";
pub const SUMMERNOTE_CSS: &str =
	"//cdnjs.cloudflare.com/ajax/libs/summernote/0.8.12/summernote.css";

/// Columns authored as HTML rather than plain text.
const RICH_TEXT_COLUMNS: &[&str] = &[
	"level_instructions",
	"intro_text",
	"hint_1_text",
	"hint_2_text",
	"hint_3_text",
	"hint_4_text",
];

/// A text field whose textarea carries the editor's marker class on top of
/// whatever classes the rendering layer adds.
fn rich_text_field(name: &str) -> CharField {
	CharField::new(name).with_widget(Textarea::new().with_class("summernote"))
}

pub struct LevelAdmin;

#[async_trait]
impl ModelAdmin for LevelAdmin {
	fn model_name(&self) -> &str {
		"level"
	}

	fn table_name(&self) -> &str {
		LEVEL_TABLE
	}

	fn columns(&self) -> Vec<ColumnSchema> {
		level_columns()
	}

	fn list_display(&self) -> Vec<String> {
		vec!["level_no".to_string(), "level_name".to_string()]
	}

	fn list_per_page(&self) -> u64 {
		50
	}

	fn form_override(&self, column: &ColumnSchema) -> Option<Box<dyn FormField>> {
		if RICH_TEXT_COLUMNS.contains(&column.name.as_str()) {
			return Some(Box::new(rich_text_field(&column.name)));
		}
		None
	}

	fn extra_css(&self) -> Vec<String> {
		vec![SUMMERNOTE_CSS.to_string()]
	}

	fn extra_js(&self) -> Vec<String> {
		vec![SUMMERNOTE_JS.to_string()]
	}
}
