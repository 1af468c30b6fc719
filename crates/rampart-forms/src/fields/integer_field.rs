use serde_json::Value;

use crate::field::{FieldError, FieldResult, FormField};
use crate::widgets::{TextInput, Widget};

/// Whole-number field with optional range limits.
pub struct IntegerField {
	name: String,
	label: Option<String>,
	required: bool,
	help_text: Option<String>,
	initial: Option<Value>,
	min_value: Option<i64>,
	max_value: Option<i64>,
	widget: Box<dyn Widget>,
}

impl IntegerField {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			required: false,
			help_text: None,
			initial: None,
			min_value: None,
			max_value: None,
			widget: Box::new(TextInput::number()),
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

	pub fn with_initial(mut self, initial: i64) -> Self {
		self.initial = Some(Value::from(initial));
		self
	}

	pub fn with_min_value(mut self, min_value: i64) -> Self {
		self.min_value = Some(min_value);
		self
	}

	pub fn with_max_value(mut self, max_value: i64) -> Self {
		self.max_value = Some(max_value);
		self
	}

	fn check_range(&self, number: i64) -> FieldResult<Value> {
		if let Some(min_value) = self.min_value {
			if number < min_value {
				return Err(FieldError::Validation(format!(
					"Ensure this value is greater than or equal to {min_value}."
				)));
			}
		}
		if let Some(max_value) = self.max_value {
			if number > max_value {
				return Err(FieldError::Validation(format!(
					"Ensure this value is less than or equal to {max_value}."
				)));
			}
		}
		Ok(Value::from(number))
	}
}

impl FormField for IntegerField {
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
		let number = match value {
			None | Some(Value::Null) => None,
			Some(Value::Number(number)) => Some(
				number
					.as_i64()
					.ok_or_else(|| FieldError::Validation("Enter a whole number.".to_string()))?,
			),
			Some(Value::String(text)) => {
				let trimmed = text.trim();
				if trimmed.is_empty() {
					None
				} else {
					Some(trimmed.parse::<i64>().map_err(|_| {
						FieldError::Validation("Enter a whole number.".to_string())
					})?)
				}
			}
			Some(_) => {
				return Err(FieldError::Validation("Enter a whole number.".to_string()));
			}
		};

		match number {
			Some(number) => self.check_range(number),
			None if self.required => Err(FieldError::Required),
			None => Ok(Value::Null),
		}
	}
}
