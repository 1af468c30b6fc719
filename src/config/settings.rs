//! Runtime configuration.
//!
//! Values come from three layers, each overriding the previous: built-in
//! defaults, an optional TOML file named by `RAMPART_CONFIG`, then the
//! individual `RAMPART_*` environment variables.

use std::env;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Environment variable naming the TOML file to load, if any.
pub const CONFIG_ENV: &str = "RAMPART_CONFIG";

#[derive(Debug, Error)]
pub enum SettingsError {
	#[error("could not read config file {path}: {source}")]
	Read {
		path: String,
		#[source]
		source: std::io::Error,
	},
	#[error("could not parse config file {path}: {source}")]
	Parse {
		path: String,
		#[source]
		source: toml::de::Error,
	},
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
	/// SQLite connection string, e.g. `sqlite://rampart.db?mode=rwc`.
	pub database_url: String,
	pub bind_addr: String,
	pub site_title: String,
	pub session_cookie_name: String,
	pub debug: bool,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			database_url: "sqlite://rampart.db?mode=rwc".to_string(),
			bind_addr: "127.0.0.1:8000".to_string(),
			site_title: "Rampart Admin".to_string(),
			session_cookie_name: rampart_admin::DEFAULT_COOKIE_NAME.to_string(),
			debug: false,
		}
	}
}

impl Settings {
	/// Settings from defaults, the `RAMPART_CONFIG` file when set, and the
	/// environment, in that order.
	pub fn load() -> Result<Self, SettingsError> {
		let mut settings = match env::var(CONFIG_ENV) {
			Ok(path) => Self::from_file(Path::new(&path))?,
			Err(_) => Self::default(),
		};
		settings.apply_env();
		Ok(settings)
	}

	/// Settings from one TOML file; keys it leaves out fall back to the
	/// defaults.
	pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
		let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
			path: path.display().to_string(),
			source,
		})?;
		toml::from_str(&text).map_err(|source| SettingsError::Parse {
			path: path.display().to_string(),
			source,
		})
	}

	fn apply_env(&mut self) {
		if let Ok(value) = env::var("RAMPART_DATABASE_URL") {
			self.database_url = value;
		}
		if let Ok(value) = env::var("RAMPART_BIND_ADDR") {
			self.bind_addr = value;
		}
		if let Ok(value) = env::var("RAMPART_SITE_TITLE") {
			self.site_title = value;
		}
		if let Ok(value) = env::var("RAMPART_SESSION_COOKIE") {
			self.session_cookie_name = value;
		}
		if let Ok(value) = env::var("RAMPART_DEBUG") {
			self.debug = matches!(value.as_str(), "1" | "true" | "yes");
		}
	}
}
