//! The panel's managed applications: range levels and account management.

pub mod auth;
pub mod levels;

use rampart_admin::AdminRecord;
use serde::Serialize;
use serde_json::Value;

/// Column map for a model, keyed the way the admin storage layer expects.
/// Fields the model skips during serialization (an unset `id`) stay absent,
/// so inserts leave them to the database.
pub(crate) fn to_record<T: Serialize>(model: &T) -> AdminRecord {
	match serde_json::to_value(model) {
		Ok(Value::Object(map)) => map.into_iter().collect(),
		_ => AdminRecord::new(),
	}
}
