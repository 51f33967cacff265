// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Provider configuration: endpoint and credentials.

use std::fs;
use std::path::Path;

use kuroko2_common_config::{load_env, load_secret_env, SecretString};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const ENDPOINT_ENV: &str = "KUROKO2_ENDPOINT";
pub const USERNAME_ENV: &str = "KUROKO2_USERNAME";
/// Also honoured as `KUROKO2_APIKEY_FILE`.
pub const APIKEY_ENV: &str = "KUROKO2_APIKEY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
	/// Base URL of the kuroko2 API, e.g. `https://kuroko2.example.com/v1`.
	pub endpoint: String,
	pub username: String,
	pub apikey: SecretString,
}

impl ProviderConfig {
	pub fn new(
		endpoint: impl Into<String>,
		username: impl Into<String>,
		apikey: impl Into<SecretString>,
	) -> Self {
		Self {
			endpoint: endpoint.into(),
			username: username.into(),
			apikey: apikey.into(),
		}
	}

	pub fn from_env() -> Result<Self, ConfigError> {
		let endpoint = load_env(ENDPOINT_ENV).ok_or(ConfigError::Missing {
			field: "endpoint",
		})?;
		let username = load_env(USERNAME_ENV).ok_or(ConfigError::Missing {
			field: "username",
		})?;
		let apikey = load_secret_env(APIKEY_ENV)?.ok_or(ConfigError::Missing { field: "apikey" })?;

		let config = Self {
			endpoint,
			username,
			apikey,
		};
		config.validate()?;
		Ok(config)
	}

	pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(content)?;
		config.validate()?;
		Ok(config)
	}

	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&content)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.endpoint.trim().is_empty() {
			return Err(ConfigError::Missing { field: "endpoint" });
		}
		if self.username.is_empty() {
			return Err(ConfigError::Missing { field: "username" });
		}
		if self.apikey.is_empty() {
			return Err(ConfigError::Missing { field: "apikey" });
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;
	use std::sync::Mutex;

	// Environment variables are process-global.
	static ENV_LOCK: Mutex<()> = Mutex::new(());

	fn clear_env() {
		for var in [ENDPOINT_ENV, USERNAME_ENV, APIKEY_ENV, "KUROKO2_APIKEY_FILE"] {
			std::env::remove_var(var);
		}
	}

	#[test]
	fn from_env_reads_all_settings() {
		let _guard = ENV_LOCK.lock().unwrap();
		clear_env();
		std::env::set_var(ENDPOINT_ENV, "https://kuroko2.example.com/v1");
		std::env::set_var(USERNAME_ENV, "deploy");
		std::env::set_var(APIKEY_ENV, "s3cr3t");

		let config = ProviderConfig::from_env().unwrap();
		clear_env();

		assert_eq!(config.endpoint, "https://kuroko2.example.com/v1");
		assert_eq!(config.username, "deploy");
		assert_eq!(config.apikey.expose(), "s3cr3t");
	}

	#[test]
	fn from_env_prefers_apikey_file() {
		let _guard = ENV_LOCK.lock().unwrap();
		clear_env();
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "from-file").unwrap();

		std::env::set_var(ENDPOINT_ENV, "https://kuroko2.example.com/v1");
		std::env::set_var(USERNAME_ENV, "deploy");
		std::env::set_var(APIKEY_ENV, "from-env");
		std::env::set_var("KUROKO2_APIKEY_FILE", file.path());

		let config = ProviderConfig::from_env().unwrap();
		clear_env();

		assert_eq!(config.apikey.expose(), "from-file");
	}

	#[test]
	fn from_env_reports_missing_field() {
		let _guard = ENV_LOCK.lock().unwrap();
		clear_env();
		std::env::set_var(ENDPOINT_ENV, "https://kuroko2.example.com/v1");
		std::env::set_var(USERNAME_ENV, "deploy");

		let err = ProviderConfig::from_env().unwrap_err();
		clear_env();

		assert!(matches!(err, ConfigError::Missing { field: "apikey" }));
	}

	#[test]
	fn from_toml_str_parses_settings() {
		let config = ProviderConfig::from_toml_str(
			r#"
endpoint = "https://kuroko2.example.com/v1"
username = "deploy"
apikey = "s3cr3t"
"#,
		)
		.unwrap();

		assert_eq!(
			config,
			ProviderConfig::new("https://kuroko2.example.com/v1", "deploy", "s3cr3t")
		);
	}

	#[test]
	fn from_toml_str_rejects_empty_username() {
		let err = ProviderConfig::from_toml_str(
			r#"
endpoint = "https://kuroko2.example.com/v1"
username = ""
apikey = "s3cr3t"
"#,
		)
		.unwrap_err();
		assert!(matches!(err, ConfigError::Missing { field: "username" }));
	}

	#[test]
	fn from_toml_str_rejects_missing_key() {
		let err = ProviderConfig::from_toml_str("endpoint = \"https://x\"\n").unwrap_err();
		assert!(matches!(err, ConfigError::Parse(_)));
	}

	#[test]
	fn from_file_reads_toml() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(
			file,
			"endpoint = \"https://kuroko2.example.com/v1\"\nusername = \"deploy\"\napikey = \"s3cr3t\"\n"
		)
		.unwrap();

		let config = ProviderConfig::from_file(file.path()).unwrap();
		assert_eq!(config.username, "deploy");
	}

	#[test]
	fn from_file_missing_path_is_io_error() {
		let dir = tempfile::tempdir().unwrap();
		let err = ProviderConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
		assert!(matches!(err, ConfigError::Io { .. }));
	}

	#[test]
	fn apikey_is_redacted() {
		let config = ProviderConfig::new("https://kuroko2.example.com/v1", "deploy", "s3cr3t");

		assert!(!format!("{config:?}").contains("s3cr3t"));
		assert!(!serde_json::to_string(&config).unwrap().contains("s3cr3t"));
	}
}
