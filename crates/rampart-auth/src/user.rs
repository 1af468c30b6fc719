/// Minimal identity contract the panel needs from a user record.
pub trait BaseUser: Send + Sync {
	fn id(&self) -> i64;

	fn get_username(&self) -> &str;

	/// Stored credential in PHC string form; never plaintext.
	fn password_hash(&self) -> &str;

	fn is_active(&self) -> bool;
}

/// Role membership on top of [`BaseUser`].
pub trait RolesMixin: BaseUser {
	fn roles(&self) -> &[String];

	fn has_role(&self, name: &str) -> bool {
		self.roles().iter().any(|role| role == name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct TestUser {
		roles: Vec<String>,
	}

	impl BaseUser for TestUser {
		fn id(&self) -> i64 {
			1
		}

		fn get_username(&self) -> &str {
			"alice"
		}

		fn password_hash(&self) -> &str {
			"$argon2id$stub"
		}

		fn is_active(&self) -> bool {
			true
		}
	}

	impl RolesMixin for TestUser {
		fn roles(&self) -> &[String] {
			&self.roles
		}
	}

	#[test]
	fn test_has_role_checks_membership() {
		let user = TestUser {
			roles: vec!["admin".to_string(), "auditor".to_string()],
		};
		assert!(user.has_role("admin"));
		assert!(user.has_role("auditor"));
		assert!(!user.has_role("player"));
	}

	#[test]
	fn test_no_roles_means_no_membership() {
		let user = TestUser { roles: Vec::new() };
		assert!(!user.has_role("admin"));
	}
}
