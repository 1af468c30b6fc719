//! Authentication building blocks for the rampart admin panel.
//!
//! Credentials are only ever handled as Argon2 PHC strings via
//! [`PasswordHasher`]; the plaintext a user types exists for the length of
//! one hash or verify call. Identity is modeled by the [`BaseUser`] and
//! [`RolesMixin`] traits, resolved per request into a [`CurrentUser`], with
//! logged-in state kept by the in-process [`SessionStore`].

pub mod current_user;
pub mod hasher;
pub mod session;
pub mod user;

use std::fmt;

pub use current_user::CurrentUser;
pub use hasher::{Argon2Hasher, PasswordHasher};
pub use session::SessionStore;
pub use user::{BaseUser, RolesMixin};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AuthenticationError {
	/// No authenticated user is attached to the request.
	NotAuthenticated,
	/// Unknown username or wrong password; never says which.
	InvalidCredentials,
	/// Credentials matched but the account is deactivated.
	InactiveUser,
	/// Hashing the supplied password failed.
	HashingFailed,
}

impl fmt::Display for AuthenticationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AuthenticationError::NotAuthenticated => write!(f, "not authenticated"),
			AuthenticationError::InvalidCredentials => write!(f, "invalid username or password"),
			AuthenticationError::InactiveUser => write!(f, "this account is inactive"),
			AuthenticationError::HashingFailed => write!(f, "could not hash the password"),
		}
	}
}

impl std::error::Error for AuthenticationError {}
