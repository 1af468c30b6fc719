//! Form handling for the rampart admin panel.
//!
//! The moving parts mirror the usual server-side form lifecycle:
//!
//! - a [`FormField`] validates one submitted value and knows which
//!   [`widgets::Widget`] draws it,
//! - a [`Form`] is an ordered collection of boxed fields that binds raw
//!   submitted data, runs every field's `clean` and collects errors,
//! - a [`BoundField`] pairs a field with its bound value and errors for
//!   rendering,
//! - [`Media`] carries the extra stylesheet/script URLs a page needs.
//!
//! Widgets render plain HTML strings; everything user-provided passes
//! through [`widgets::html_escape`] on the way out.

pub mod bound_field;
pub mod field;
pub mod fields;
pub mod form;
pub mod media;
pub mod widgets;

pub use bound_field::BoundField;
pub use field::{humanize, FieldError, FieldResult, FormField};
pub use fields::{
	BooleanField, CharField, ChoiceField, DateTimeField, IntegerField, MultipleChoiceField,
};
pub use form::{Form, ALL_FIELDS_KEY};
pub use media::Media;
pub use widgets::{
	html_escape, CheckboxInput, HiddenInput, Select, SelectMultiple, TextInput, Textarea, Widget,
	WidgetAttrs, WidgetType,
};
