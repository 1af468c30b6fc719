//! HTML widgets.
//!
//! A widget turns a field name, a bound value and a set of HTML attributes
//! into markup. Attribute maps are rendered in sorted key order so output
//! is deterministic, and every name, value and attribute passes through
//! [`html_escape`].

use std::collections::HashMap;

/// Coarse classification used by form rendering to pick a value shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetType {
	Text,
	Password,
	Hidden,
	Textarea,
	Checkbox,
	Select,
	SelectMultiple,
}

pub trait Widget: Send + Sync {
	fn widget_type(&self) -> WidgetType;

	fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String;

	/// Rendering for multi-valued widgets; single-valued widgets fall back
	/// to `render` with the first selection.
	fn render_multi(&self, name: &str, selected: &[String], attrs: &WidgetAttrs) -> String {
		self.render(name, selected.first().map(String::as_str), attrs)
	}
}

/// HTML attributes for a widget, built up fluently.
///
/// `class` is the one merging attribute: setting it again appends with a
/// space instead of replacing, so decorating widgets can tag extra classes
/// onto whatever the caller already configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetAttrs {
	attrs: HashMap<String, String>,
}

impl WidgetAttrs {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn class(mut self, class: &str) -> Self {
		match self.attrs.get_mut("class") {
			Some(existing) => {
				existing.push(' ');
				existing.push_str(class);
			}
			None => {
				self.attrs.insert("class".to_string(), class.to_string());
			}
		}
		self
	}

	pub fn id(self, id: &str) -> Self {
		self.set("id", id)
	}

	pub fn set(mut self, key: &str, value: &str) -> Self {
		self.attrs.insert(key.to_string(), value.to_string());
		self
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.attrs.get(key).map(String::as_str)
	}

	/// Renders as ` key="value"` pairs, keys sorted.
	pub fn render(&self) -> String {
		let mut keys: Vec<&String> = self.attrs.keys().collect();
		keys.sort();
		let mut out = String::new();
		for key in keys {
			out.push_str(&format!(" {}=\"{}\"", html_escape(key), html_escape(&self.attrs[key])));
		}
		out
	}
}

/// `<input>` for single-line values.
#[derive(Debug, Clone)]
pub struct TextInput {
	input_type: String,
}

impl TextInput {
	pub fn new() -> Self {
		Self {
			input_type: "text".to_string(),
		}
	}

	pub fn password() -> Self {
		Self {
			input_type: "password".to_string(),
		}
	}

	pub fn email() -> Self {
		Self {
			input_type: "email".to_string(),
		}
	}

	pub fn number() -> Self {
		Self {
			input_type: "number".to_string(),
		}
	}
}

impl Default for TextInput {
	fn default() -> Self {
		Self::new()
	}
}

impl Widget for TextInput {
	fn widget_type(&self) -> WidgetType {
		if self.input_type == "password" {
			WidgetType::Password
		} else {
			WidgetType::Text
		}
	}

	fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
		let mut html = format!(
			"<input type=\"{}\" name=\"{}\"",
			html_escape(&self.input_type),
			html_escape(name)
		);
		// Password inputs never echo a value back to the client.
		if self.input_type != "password" {
			if let Some(value) = value {
				if !value.is_empty() {
					html.push_str(&format!(" value=\"{}\"", html_escape(value)));
				}
			}
		}
		html.push_str(&attrs.render());
		html.push_str(" />");
		html
	}
}

/// `<textarea>` for long text.
///
/// An extra class set through [`Textarea::with_class`] is merged into the
/// caller's attributes at render time, so decorated textareas keep whatever
/// base classes the form applies.
#[derive(Debug, Clone)]
pub struct Textarea {
	rows: u32,
	cols: u32,
	class: Option<String>,
}

impl Textarea {
	pub fn new() -> Self {
		Self {
			rows: 10,
			cols: 60,
			class: None,
		}
	}

	pub fn with_rows(mut self, rows: u32) -> Self {
		self.rows = rows;
		self
	}

	pub fn with_class(mut self, class: &str) -> Self {
		self.class = Some(class.to_string());
		self
	}
}

impl Default for Textarea {
	fn default() -> Self {
		Self::new()
	}
}

impl Widget for Textarea {
	fn widget_type(&self) -> WidgetType {
		WidgetType::Textarea
	}

	fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
		let mut attrs = attrs.clone();
		if let Some(class) = &self.class {
			attrs = attrs.class(class);
		}
		format!(
			"<textarea name=\"{}\" rows=\"{}\" cols=\"{}\"{}>{}</textarea>",
			html_escape(name),
			self.rows,
			self.cols,
			attrs.render(),
			html_escape(value.unwrap_or(""))
		)
	}
}

/// `<input type="checkbox">`; checked for the truthy submissions a browser
/// or a bound boolean produces.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckboxInput;

impl Widget for CheckboxInput {
	fn widget_type(&self) -> WidgetType {
		WidgetType::Checkbox
	}

	fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
		let mut html = format!("<input type=\"checkbox\" name=\"{}\"", html_escape(name));
		if matches!(value, Some("true") | Some("1") | Some("on")) {
			html.push_str(" checked");
		}
		html.push_str(&attrs.render());
		html.push_str(" />");
		html
	}
}

/// `<input type="hidden">`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HiddenInput;

impl Widget for HiddenInput {
	fn widget_type(&self) -> WidgetType {
		WidgetType::Hidden
	}

	fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
		format!(
			"<input type=\"hidden\" name=\"{}\" value=\"{}\"{} />",
			html_escape(name),
			html_escape(value.unwrap_or("")),
			attrs.render()
		)
	}
}

/// Single-choice `<select>` over `(value, label)` pairs.
#[derive(Debug, Clone, Default)]
pub struct Select {
	choices: Vec<(String, String)>,
	empty_label: Option<String>,
}

impl Select {
	pub fn new(choices: Vec<(String, String)>) -> Self {
		Self {
			choices,
			empty_label: None,
		}
	}

	pub fn with_empty_label(mut self, label: impl Into<String>) -> Self {
		self.empty_label = Some(label.into());
		self
	}
}

impl Widget for Select {
	fn widget_type(&self) -> WidgetType {
		WidgetType::Select
	}

	fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
		let mut html = format!("<select name=\"{}\"{}>", html_escape(name), attrs.render());
		if let Some(label) = &self.empty_label {
			html.push_str(&format!("<option value=\"\">{}</option>", html_escape(label)));
		}
		for (choice, label) in &self.choices {
			let selected = if value == Some(choice.as_str()) {
				" selected"
			} else {
				""
			};
			html.push_str(&format!(
				"<option value=\"{}\"{}>{}</option>",
				html_escape(choice),
				selected,
				html_escape(label)
			));
		}
		html.push_str("</select>");
		html
	}
}

/// Multi-choice `<select multiple>` over `(value, label)` pairs.
#[derive(Debug, Clone, Default)]
pub struct SelectMultiple {
	choices: Vec<(String, String)>,
}

impl SelectMultiple {
	pub fn new(choices: Vec<(String, String)>) -> Self {
		Self { choices }
	}
}

impl Widget for SelectMultiple {
	fn widget_type(&self) -> WidgetType {
		WidgetType::SelectMultiple
	}

	fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
		let selected: Vec<String> = value.map(|v| vec![v.to_string()]).unwrap_or_default();
		self.render_multi(name, &selected, attrs)
	}

	fn render_multi(&self, name: &str, selected: &[String], attrs: &WidgetAttrs) -> String {
		let mut html = format!(
			"<select name=\"{}\" multiple{}>",
			html_escape(name),
			attrs.render()
		);
		for (choice, label) in &self.choices {
			let marker = if selected.iter().any(|s| s == choice) {
				" selected"
			} else {
				""
			};
			html.push_str(&format!(
				"<option value=\"{}\"{}>{}</option>",
				html_escape(choice),
				marker,
				html_escape(label)
			));
		}
		html.push_str("</select>");
		html
	}
}

/// Escapes the five characters with meaning in HTML text and attributes.
pub fn html_escape(input: &str) -> String {
	let mut escaped = String::with_capacity(input.len());
	for ch in input.chars() {
		match ch {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(ch),
		}
	}
	escaped
}
