use serde_json::Value;

use crate::field::{FieldError, FieldResult, FormField};
use crate::widgets::{Select, SelectMultiple, Widget};

fn invalid_choice(value: &str) -> FieldError {
	FieldError::Validation(format!(
		"Select a valid choice. {value} is not one of the available choices."
	))
}

fn value_text(value: &Value) -> Option<String> {
	match value {
		Value::String(text) => Some(text.clone()),
		Value::Number(number) => Some(number.to_string()),
		_ => None,
	}
}

/// Single-selection field over `(value, label)` pairs.
pub struct ChoiceField {
	name: String,
	label: Option<String>,
	required: bool,
	help_text: Option<String>,
	initial: Option<Value>,
	choices: Vec<(String, String)>,
	widget: Box<dyn Widget>,
}

impl ChoiceField {
	pub fn new(name: impl Into<String>, choices: Vec<(String, String)>) -> Self {
		let widget = Select::new(choices.clone()).with_empty_label("--------");
		Self {
			name: name.into(),
			label: None,
			required: false,
			help_text: None,
			initial: None,
			choices,
			widget: Box::new(widget),
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

	pub fn with_initial(mut self, initial: impl Into<Value>) -> Self {
		self.initial = Some(initial.into());
		self
	}

	fn is_valid_choice(&self, value: &str) -> bool {
		self.choices.iter().any(|(choice, _)| choice == value)
	}
}

impl FormField for ChoiceField {
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
		let text = value.and_then(value_text).unwrap_or_default();
		if text.is_empty() {
			if self.required {
				return Err(FieldError::Required);
			}
			return Ok(Value::String(String::new()));
		}
		if !self.is_valid_choice(&text) {
			return Err(invalid_choice(&text));
		}
		Ok(Value::String(text))
	}
}

/// Multi-selection field rendered as `<select multiple>`.
///
/// Cleans to an array of choice values; an empty submission cleans to an
/// empty array, which for a membership relation means "remove all".
pub struct MultipleChoiceField {
	name: String,
	label: Option<String>,
	required: bool,
	help_text: Option<String>,
	initial: Option<Value>,
	choices: Vec<(String, String)>,
	widget: Box<dyn Widget>,
}

impl MultipleChoiceField {
	pub fn new(name: impl Into<String>, choices: Vec<(String, String)>) -> Self {
		let widget = SelectMultiple::new(choices.clone());
		Self {
			name: name.into(),
			label: None,
			required: false,
			help_text: None,
			initial: None,
			choices,
			widget: Box::new(widget),
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

	pub fn with_initial(mut self, initial: Vec<String>) -> Self {
		self.initial = Some(Value::Array(initial.into_iter().map(Value::String).collect()));
		self
	}

	fn is_valid_choice(&self, value: &str) -> bool {
		self.choices.iter().any(|(choice, _)| choice == value)
	}
}

impl FormField for MultipleChoiceField {
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
		let submitted: Vec<String> = match value {
			None | Some(Value::Null) => Vec::new(),
			Some(Value::Array(items)) => items.iter().filter_map(value_text).collect(),
			Some(other) => value_text(other).into_iter().collect(),
		};
		if submitted.is_empty() && self.required {
			return Err(FieldError::Required);
		}
		for choice in &submitted {
			if !self.is_valid_choice(choice) {
				return Err(invalid_choice(choice));
			}
		}
		Ok(Value::Array(submitted.into_iter().map(Value::String).collect()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn role_choices() -> Vec<(String, String)> {
		vec![
			("1".to_string(), "admin".to_string()),
			("2".to_string(), "player".to_string()),
		]
	}

	#[test]
	fn test_choice_field_accepts_known_choice() {
		// Arrange
		let field = ChoiceField::new("role", role_choices());

		// Act & Assert
		assert_eq!(field.clean(Some(&json!("2"))).unwrap(), json!("2"));
	}

	#[test]
	fn test_choice_field_rejects_unknown_choice() {
		// Arrange
		let field = ChoiceField::new("role", role_choices());

		// Act & Assert
		assert!(matches!(
			field.clean(Some(&json!("99"))),
			Err(FieldError::Validation(_))
		));
	}

	#[test]
	fn test_choice_field_optional_blank() {
		// Arrange
		let field = ChoiceField::new("role", role_choices());

		// Act & Assert
		assert_eq!(field.clean(None).unwrap(), json!(""));
	}

	#[test]
	fn test_multiple_choice_accepts_subset() {
		// Arrange
		let field = MultipleChoiceField::new("roles", role_choices());

		// Act & Assert
		assert_eq!(
			field.clean(Some(&json!(["1", "2"]))).unwrap(),
			json!(["1", "2"])
		);
	}

	#[test]
	fn test_multiple_choice_single_string_becomes_array() {
		// Arrange
		let field = MultipleChoiceField::new("roles", role_choices());

		// Act & Assert
		assert_eq!(field.clean(Some(&json!("1"))).unwrap(), json!(["1"]));
	}

	#[test]
	fn test_multiple_choice_empty_submission_clears() {
		// Arrange
		let field = MultipleChoiceField::new("roles", role_choices());

		// Act & Assert
		assert_eq!(field.clean(None).unwrap(), json!([]));
	}

	#[test]
	fn test_multiple_choice_rejects_unknown_member() {
		// Arrange
		let field = MultipleChoiceField::new("roles", role_choices());

		// Act & Assert
		assert!(matches!(
			field.clean(Some(&json!(["1", "99"]))),
			Err(FieldError::Validation(_))
		));
	}
}
