use argon2::Argon2;
use password_hash::rand_core::OsRng;
use password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};

use crate::AuthenticationError;

/// One-way credential transform.
///
/// `hash` is salted, so hashing the same plaintext twice yields different
/// strings; equality checks must always go through `verify`.
pub trait PasswordHasher: Send + Sync {
	fn hash(&self, plaintext: &str) -> Result<String, AuthenticationError>;

	/// Whether `plaintext` matches `encoded`. Unparseable stored values
	/// (including the empty string) verify as false rather than erroring,
	/// so accounts created without a password simply cannot log in.
	fn verify(&self, plaintext: &str, encoded: &str) -> bool;
}

/// Argon2id with the crate's default parameters, producing PHC strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl PasswordHasher for Argon2Hasher {
	fn hash(&self, plaintext: &str) -> Result<String, AuthenticationError> {
		let salt = SaltString::generate(&mut OsRng);
		Argon2::default()
			.hash_password(plaintext.as_bytes(), &salt)
			.map(|hash| hash.to_string())
			.map_err(|_| AuthenticationError::HashingFailed)
	}

	fn verify(&self, plaintext: &str, encoded: &str) -> bool {
		let Ok(parsed) = PasswordHash::new(encoded) else {
			return false;
		};
		Argon2::default()
			.verify_password(plaintext.as_bytes(), &parsed)
			.is_ok()
	}
}
