use serde_json::Value;

use crate::field::{FieldError, FieldResult, FormField};
use crate::widgets::{CheckboxInput, Widget};

/// Checkbox-backed boolean field.
///
/// An unchecked checkbox is simply absent from the submission, so `clean`
/// treats a missing value as `false`. A required boolean field must be
/// checked to validate, matching checkbox semantics in the browser.
pub struct BooleanField {
	name: String,
	label: Option<String>,
	required: bool,
	help_text: Option<String>,
	initial: Option<Value>,
	widget: Box<dyn Widget>,
}

impl BooleanField {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			required: false,
			help_text: None,
			initial: None,
			widget: Box::new(CheckboxInput),
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

	pub fn with_initial(mut self, initial: bool) -> Self {
		self.initial = Some(Value::Bool(initial));
		self
	}
}

impl FormField for BooleanField {
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
		let truthy = match value {
			Some(Value::Bool(flag)) => *flag,
			Some(Value::String(text)) => matches!(text.as_str(), "true" | "1" | "on"),
			Some(Value::Number(number)) => number.as_i64().is_some_and(|n| n != 0),
			_ => false,
		};
		if self.required && !truthy {
			return Err(FieldError::Required);
		}
		Ok(Value::Bool(truthy))
	}
}
