pub mod boolean_field;
pub mod char_field;
pub mod choice_field;
pub mod datetime_field;
pub mod integer_field;

pub use boolean_field::BooleanField;
pub use char_field::CharField;
pub use choice_field::{ChoiceField, MultipleChoiceField};
pub use datetime_field::DateTimeField;
pub use integer_field::IntegerField;
