use std::collections::HashMap;

use serde_json::Value;

use crate::bound_field::BoundField;
use crate::field::FormField;

/// Error-map key for errors that belong to the form rather than one field.
pub const ALL_FIELDS_KEY: &str = "_all";

/// An ordered collection of fields with binding and validation state.
///
/// Lifecycle: build with [`add_field`], [`bind`] the submitted data, call
/// [`is_valid`], then read [`cleaned_data`] or re-render with
/// [`bound_fields`] when validation failed.
///
/// [`add_field`]: Form::add_field
/// [`bind`]: Form::bind
/// [`is_valid`]: Form::is_valid
/// [`cleaned_data`]: Form::cleaned_data
/// [`bound_fields`]: Form::bound_fields
pub struct Form {
	name: String,
	fields: Vec<Box<dyn FormField>>,
	data: HashMap<String, Value>,
	cleaned: HashMap<String, Value>,
	errors: HashMap<String, Vec<String>>,
	is_bound: bool,
}

impl Form {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			fields: Vec::new(),
			data: HashMap::new(),
			cleaned: HashMap::new(),
			errors: HashMap::new(),
			is_bound: false,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn add_field(&mut self, field: Box<dyn FormField>) {
		self.fields.push(field);
	}

	pub fn with_field(mut self, field: Box<dyn FormField>) -> Self {
		self.add_field(field);
		self
	}

	pub fn fields(&self) -> &[Box<dyn FormField>] {
		&self.fields
	}

	pub fn field(&self, name: &str) -> Option<&dyn FormField> {
		self.fields
			.iter()
			.find(|field| field.name() == name)
			.map(Box::as_ref)
	}

	pub fn is_bound(&self) -> bool {
		self.is_bound
	}

	/// Attaches submitted data; previous validation state is discarded.
	pub fn bind(&mut self, data: HashMap<String, Value>) {
		self.data = data;
		self.cleaned.clear();
		self.errors.clear();
		self.is_bound = true;
	}

	pub fn data_value(&self, name: &str) -> Option<&Value> {
		self.data.get(name)
	}

	/// Cleans every field, collecting errors under the field name.
	pub fn is_valid(&mut self) -> bool {
		self.cleaned.clear();
		self.errors.clear();
		for field in &self.fields {
			match field.clean(self.data.get(field.name())) {
				Ok(value) => {
					self.cleaned.insert(field.name().to_string(), value);
				}
				Err(error) => {
					self.errors
						.entry(field.name().to_string())
						.or_default()
						.push(error.to_string());
				}
			}
		}
		self.errors.is_empty()
	}

	pub fn cleaned_data(&self) -> &HashMap<String, Value> {
		&self.cleaned
	}

	pub fn cleaned_value(&self, name: &str) -> Option<&Value> {
		self.cleaned.get(name)
	}

	pub fn errors(&self) -> &HashMap<String, Vec<String>> {
		&self.errors
	}

	pub fn field_errors(&self, name: &str) -> &[String] {
		self.errors.get(name).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Errors recorded against the form as a whole.
	pub fn form_errors(&self) -> &[String] {
		self.field_errors(ALL_FIELDS_KEY)
	}

	pub fn add_error(&mut self, field: &str, message: impl Into<String>) {
		self.errors
			.entry(field.to_string())
			.or_default()
			.push(message.into());
	}

	pub fn has_errors(&self) -> bool {
		!self.errors.is_empty()
	}

	pub fn bound_fields(&self) -> Vec<BoundField<'_>> {
		self.fields
			.iter()
			.map(|field| BoundField {
				field: field.as_ref(),
				data: self.data.get(field.name()),
				errors: self.field_errors(field.name()),
			})
			.collect()
	}

	pub fn bound_field(&self, name: &str) -> Option<BoundField<'_>> {
		self.bound_fields()
			.into_iter()
			.find(|bound| bound.name() == name)
	}
}
