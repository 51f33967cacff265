// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the kuroko2 API client.

use reqwest::Method;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
	/// Connection, TLS, timeout or body-read failure.
	#[error("{method} {url} failed: {source}")]
	Transport {
		method: Method,
		url: String,
		#[source]
		source: reqwest::Error,
	},

	/// Any status other than the single success code of the operation.
	/// Authentication failures (401/403) land here too.
	#[error("{method} {url} returned unexpected status code: {status}")]
	UnexpectedStatus {
		method: Method,
		url: String,
		status: u16,
	},

	#[error("{method} {url} returned an undecodable body: {source}")]
	Decode {
		method: Method,
		url: String,
		#[source]
		source: serde_json::Error,
	},

	#[error("failed to encode request body: {0}")]
	Encode(#[source] serde_json::Error),

	#[error("{method} {url} was cancelled")]
	Cancelled { method: Method, url: String },

	#[error("{method} {url} did not complete before the deadline")]
	DeadlineExceeded { method: Method, url: String },

	#[error("invalid or missing endpoint URL")]
	InvalidBaseUrl,

	#[error("missing username")]
	MissingUsername,

	#[error("missing API key")]
	MissingApiKey,

	#[error("failed to build HTTP client: {0}")]
	Build(#[source] reqwest::Error),
}

impl ClientError {
	/// Status code of an [`ClientError::UnexpectedStatus`] failure.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::UnexpectedStatus { status, .. } => Some(*status),
			_ => None,
		}
	}
}
