use std::collections::HashMap;

use parking_lot::RwLock;
use uuid::Uuid;

/// In-process map from session token to user id.
///
/// Tokens ride in a cookie; restarting the process forgets every session,
/// which is acceptable for a single-instance back office.
#[derive(Debug, Default)]
pub struct SessionStore {
	sessions: RwLock<HashMap<String, i64>>,
}

impl SessionStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Starts a session for `user_id` and returns its opaque token.
	pub fn create(&self, user_id: i64) -> String {
		let token = Uuid::new_v4().simple().to_string();
		self.sessions.write().insert(token.clone(), user_id);
		token
	}

	pub fn get(&self, token: &str) -> Option<i64> {
		self.sessions.read().get(token).copied()
	}

	pub fn remove(&self, token: &str) -> Option<i64> {
		self.sessions.write().remove(token)
	}

	pub fn len(&self) -> usize {
		self.sessions.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.sessions.read().is_empty()
	}
}
