use serde_json::Value;

use crate::field::{FieldError, FieldResult, FormField};
use crate::widgets::{TextInput, Widget};

/// Free-text field.
///
/// Cleaning strips surrounding whitespace (unless [`no_strip`] was called),
/// applies the required check against the stripped value, and validates
/// length limits in characters rather than bytes.
///
/// [`no_strip`]: CharField::no_strip
///
/// # Examples
///
/// ```
/// use rampart_forms::{CharField, FormField};
/// use serde_json::json;
///
/// let field = CharField::new("username").required().with_max_length(150);
/// let cleaned = field.clean(Some(&json!("  alice  "))).unwrap();
/// assert_eq!(cleaned, json!("alice"));
/// ```
pub struct CharField {
	name: String,
	label: Option<String>,
	required: bool,
	help_text: Option<String>,
	initial: Option<Value>,
	max_length: Option<usize>,
	min_length: Option<usize>,
	strip: bool,
	empty_value: String,
	widget: Box<dyn Widget>,
}

impl CharField {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			required: false,
			help_text: None,
			initial: None,
			max_length: None,
			min_length: None,
			strip: true,
			empty_value: String::new(),
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

	pub fn with_initial(mut self, initial: impl Into<Value>) -> Self {
		self.initial = Some(initial.into());
		self
	}

	pub fn with_max_length(mut self, max_length: usize) -> Self {
		self.max_length = Some(max_length);
		self
	}

	pub fn with_min_length(mut self, min_length: usize) -> Self {
		self.min_length = Some(min_length);
		self
	}

	/// Keeps submitted whitespace exactly as typed.
	pub fn no_strip(mut self) -> Self {
		self.strip = false;
		self
	}

	/// Value cleaned from an empty optional submission (default `""`).
	pub fn with_empty_value(mut self, empty_value: impl Into<String>) -> Self {
		self.empty_value = empty_value.into();
		self
	}

	pub fn with_widget(mut self, widget: impl Widget + 'static) -> Self {
		self.widget = Box::new(widget);
		self
	}
}

impl FormField for CharField {
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
		let raw = match value {
			Some(Value::String(text)) => text.clone(),
			Some(Value::Null) | None => String::new(),
			Some(other) => other.to_string(),
		};
		let text = if self.strip {
			raw.trim().to_string()
		} else {
			raw
		};

		if text.is_empty() {
			if self.required {
				return Err(FieldError::Required);
			}
			return Ok(Value::String(self.empty_value.clone()));
		}

		let length = text.chars().count();
		if let Some(max_length) = self.max_length {
			if length > max_length {
				return Err(FieldError::Validation(format!(
					"Ensure this value has at most {max_length} characters (it has {length})."
				)));
			}
		}
		if let Some(min_length) = self.min_length {
			if length < min_length {
				return Err(FieldError::Validation(format!(
					"Ensure this value has at least {min_length} characters (it has {length})."
				)));
			}
		}
		Ok(Value::String(text))
	}
}
