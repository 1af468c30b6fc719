use crate::user::BaseUser;
use crate::AuthenticationError;

/// The viewer attached to one request: a loaded user or the anonymous one.
#[derive(Debug, Clone)]
pub struct CurrentUser<U: BaseUser> {
	user: Option<U>,
}

impl<U: BaseUser> CurrentUser<U> {
	pub fn authenticated(user: U) -> Self {
		Self { user: Some(user) }
	}

	pub fn anonymous() -> Self {
		Self { user: None }
	}

	pub fn is_authenticated(&self) -> bool {
		self.user.is_some()
	}

	pub fn user(&self) -> Result<&U, AuthenticationError> {
		self.user.as_ref().ok_or(AuthenticationError::NotAuthenticated)
	}

	pub fn id(&self) -> Option<i64> {
		self.user.as_ref().map(BaseUser::id)
	}

	pub fn username(&self) -> Option<&str> {
		self.user.as_ref().map(BaseUser::get_username)
	}
}
