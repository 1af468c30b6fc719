use chrono::NaiveDateTime;
use serde_json::Value;

use crate::field::{FieldError, FieldResult, FormField};
use crate::widgets::{TextInput, Widget};

const ACCEPTED_FORMATS: &[&str] = &[
	"%Y-%m-%dT%H:%M:%S",
	"%Y-%m-%d %H:%M:%S",
	"%Y-%m-%dT%H:%M",
	"%Y-%m-%d %H:%M",
];

/// Date-and-time field rendered as a plain text input.
///
/// A text input round-trips the stored `YYYY-MM-DD HH:MM:SS` value without
/// a browser rejecting its format. Cleaning also accepts the
/// `YYYY-MM-DDTHH:MM` shape and canonicalizes to the space-separated string
/// that SQLite stores.
pub struct DateTimeField {
	name: String,
	label: Option<String>,
	required: bool,
	help_text: Option<String>,
	initial: Option<Value>,
	widget: Box<dyn Widget>,
}

impl DateTimeField {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			required: false,
			help_text: None,
			initial: None,
			widget: Box::new(TextInput::new()),
		}
	}

	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
		self.help_text = Some(help_text.into());
		self
	}
}

fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
	ACCEPTED_FORMATS
		.iter()
		.find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
}

impl FormField for DateTimeField {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> String {
		self.label
			.clone()
			.unwrap_or_else(|| crate::field::humanize(&self.name))
	}

	fn required(&self) -> bool {
		self.required
	}

	fn help_text(&self) -> Option<&str> {
		self.help_text.as_deref()
	}

	fn initial(&self) -> Option<&Value> {
		self.initial.as_ref()
	}

	fn widget(&self) -> &dyn Widget {
		self.widget.as_ref()
	}

	fn clean(&self, value: Option<&Value>) -> FieldResult<Value> {
		let text = match value {
			None | Some(Value::Null) => String::new(),
			Some(Value::String(text)) => text.trim().to_string(),
			Some(other) => other.to_string(),
		};
		if text.is_empty() {
			if self.required {
				return Err(FieldError::Required);
			}
			return Ok(Value::Null);
		}
		let parsed = parse_datetime(&text)
			.ok_or_else(|| FieldError::Validation("Enter a valid date and time.".to_string()))?;
		Ok(Value::String(parsed.format("%Y-%m-%d %H:%M:%S").to_string()))
	}
}
