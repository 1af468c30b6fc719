use serde_json::Value;

use crate::field::FormField;
use crate::widgets::{WidgetAttrs, WidgetType};

/// A field paired with its bound value and errors, ready to render.
pub struct BoundField<'a> {
	pub(crate) field: &'a dyn FormField,
	pub(crate) data: Option<&'a Value>,
	pub(crate) errors: &'a [String],
}

impl BoundField<'_> {
	pub fn name(&self) -> &str {
		self.field.name()
	}

	pub fn label(&self) -> String {
		self.field.label()
	}

	pub fn help_text(&self) -> Option<&str> {
		self.field.help_text()
	}

	pub fn required(&self) -> bool {
		self.field.required()
	}

	/// `id` attribute the widget gets and the `for` attribute of its label.
	pub fn id_for_label(&self) -> String {
		format!("id_{}", self.field.name())
	}

	pub fn widget_type(&self) -> WidgetType {
		self.field.widget().widget_type()
	}

	/// Bound data when present, the field's initial value otherwise.
	pub fn value(&self) -> Option<&Value> {
		self.data.or_else(|| self.field.initial())
	}

	pub fn errors(&self) -> &[String] {
		self.errors
	}

	pub fn has_errors(&self) -> bool {
		!self.errors.is_empty()
	}

	pub fn render(&self) -> String {
		self.render_with_attrs(WidgetAttrs::new())
	}

	/// Renders the widget, injecting the label id when the caller did not
	/// set one.
	pub fn render_with_attrs(&self, attrs: WidgetAttrs) -> String {
		let attrs = if attrs.get("id").is_none() {
			attrs.id(&self.id_for_label())
		} else {
			attrs
		};
		let widget = self.field.widget();
		if widget.widget_type() == WidgetType::SelectMultiple {
			return widget.render_multi(self.field.name(), &self.selected_values(), &attrs);
		}
		let value = self.value().and_then(value_as_text);
		widget.render(self.field.name(), value.as_deref(), &attrs)
	}

	fn selected_values(&self) -> Vec<String> {
		match self.value() {
			Some(Value::Array(items)) => items.iter().filter_map(value_as_text).collect(),
			Some(single) => value_as_text(single).into_iter().collect(),
			None => Vec::new(),
		}
	}
}

fn value_as_text(value: &Value) -> Option<String> {
	match value {
		Value::String(text) => Some(text.clone()),
		Value::Bool(flag) => Some(flag.to_string()),
		Value::Number(number) => Some(number.to_string()),
		_ => None,
	}
}
