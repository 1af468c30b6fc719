use serde_json::Value;
use thiserror::Error;

use crate::widgets::Widget;

/// Validation failure for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
	#[error("This field is required.")]
	Required,

	#[error("{0}")]
	Validation(String),
}

pub type FieldResult<T> = Result<T, FieldError>;

/// One field of a form: validation plus the widget that renders it.
///
/// `clean` receives the bound value (absent when the control was not
/// submitted at all) and returns the normalized value that ends up in the
/// form's cleaned data.
pub trait FormField: Send + Sync {
	fn name(&self) -> &str;

	/// Human-readable label; defaults to the humanized field name.
	fn label(&self) -> String {
		humanize(self.name())
	}

	fn required(&self) -> bool;

	fn help_text(&self) -> Option<&str> {
		None
	}

	fn initial(&self) -> Option<&Value> {
		None
	}

	fn widget(&self) -> &dyn Widget;

	fn clean(&self, value: Option<&Value>) -> FieldResult<Value>;
}

/// `"level_no"` becomes `"Level no"`.
pub fn humanize(name: &str) -> String {
	let mut label = name.replace('_', " ");
	if let Some(first) = label.get_mut(0..1) {
		first.make_ascii_uppercase();
	}
	label
}
