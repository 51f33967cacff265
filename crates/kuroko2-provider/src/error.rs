// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types surfaced to the orchestrator.

use std::fmt;
use std::path::PathBuf;

use kuroko2_client::ClientError;
use kuroko2_common_config::SecretEnvError;
use kuroko2_core::CoreError;
use thiserror::Error;

/// Which API call a [`ResourceError::Api`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
	Create,
	Get,
	Update,
	Delete,
}

impl fmt::Display for Operation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Create => write!(f, "create"),
			Self::Get => write!(f, "get"),
			Self::Update => write!(f, "update"),
			Self::Delete => write!(f, "delete"),
		}
	}
}

#[derive(Debug, Error)]
pub enum ResourceError {
	#[error("Failed to {operation} a job definition: {source}")]
	Api {
		operation: Operation,
		#[source]
		source: ClientError,
	},

	/// kuroko2 and this crate disagree about the shape of a value, or a value
	/// slipped past validation. Never defaulted.
	#[error("internal consistency failure: {0}")]
	InternalConsistency(#[source] CoreError),

	#[error("Failed to import a job definition: {0}")]
	InvalidImportId(#[source] CoreError),

	#[error("invalid configuration: {0}")]
	InvalidConfig(String),
}

impl ResourceError {
	pub(crate) fn api(operation: Operation) -> impl FnOnce(ClientError) -> Self {
		move |source| Self::Api { operation, source }
	}

	/// Short category shown as the diagnostic summary.
	pub fn category(&self) -> &'static str {
		match self {
			Self::Api { .. } => "API Error",
			Self::InternalConsistency(_) => "Internal Error",
			Self::InvalidImportId(_) => "Import Error",
			Self::InvalidConfig(_) => "Invalid Configuration",
		}
	}

	pub fn diagnostic(&self) -> Diagnostic {
		Diagnostic::error(self.category(), self.to_string())
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
	Error,
}

/// What the orchestrator shows the user for a failed operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
	pub severity: Severity,
	pub summary: String,
	pub detail: String,
}

impl Diagnostic {
	pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
		Self {
			severity: Severity::Error,
			summary: summary.into(),
			detail: detail.into(),
		}
	}
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.summary, self.detail)
	}
}

impl From<&ResourceError> for Diagnostic {
	fn from(err: &ResourceError) -> Self {
		err.diagnostic()
	}
}

/// Errors loading provider configuration or configuring the client.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("missing required provider setting: {field}")]
	Missing { field: &'static str },

	#[error(transparent)]
	SecretFile(#[from] SecretEnvError),

	#[error("failed to read provider config at {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse provider config: {0}")]
	Parse(#[from] toml::de::Error),

	#[error("failed to configure kuroko2 client: {0}")]
	Client(#[from] ClientError),
}
