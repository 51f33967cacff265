// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! kuroko2 definition API client.

use std::sync::Arc;
use std::time::Duration;

use kuroko2_common_config::SecretString;
use kuroko2_core::{
	Interrupted, JobDefinition, JobDefinitionId, JobDefinitionInput, OperationContext,
};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response, StatusCode};
use tracing::{debug, error, info, instrument};

use crate::error::{ClientError, Result};

/// Builder for constructing a [`Kuroko2Client`].
#[derive(Debug)]
pub struct Kuroko2ClientBuilder {
	endpoint: Option<String>,
	username: Option<String>,
	apikey: Option<SecretString>,
	request_timeout: Duration,
}

impl Kuroko2ClientBuilder {
	pub fn new() -> Self {
		Self {
			endpoint: None,
			username: None,
			apikey: None,
			request_timeout: kuroko2_common_http::DEFAULT_TIMEOUT,
		}
	}

	/// Base URL of the kuroko2 API, e.g. `https://kuroko2.example.com/v1`.
	pub fn endpoint(mut self, url: impl Into<String>) -> Self {
		self.endpoint = Some(url.into());
		self
	}

	pub fn username(mut self, username: impl Into<String>) -> Self {
		self.username = Some(username.into());
		self
	}

	pub fn apikey(mut self, apikey: impl Into<SecretString>) -> Self {
		self.apikey = Some(apikey.into());
		self
	}

	/// Upper bound on a single request, independent of any
	/// [`OperationContext`] deadline.
	pub fn request_timeout(mut self, timeout: Duration) -> Self {
		self.request_timeout = timeout;
		self
	}

	pub fn build(self) -> Result<Kuroko2Client> {
		let endpoint = self
			.endpoint
			.filter(|url| !url.trim().is_empty())
			.ok_or(ClientError::InvalidBaseUrl)?;
		let username = self
			.username
			.filter(|name| !name.is_empty())
			.ok_or(ClientError::MissingUsername)?;
		let apikey = self
			.apikey
			.filter(|key| !key.is_empty())
			.ok_or(ClientError::MissingApiKey)?;

		if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
			return Err(ClientError::InvalidBaseUrl);
		}
		let base_url = endpoint.trim_end_matches('/').to_string();

		let http_client = kuroko2_common_http::builder()
			.timeout(self.request_timeout)
			.build()
			.map_err(ClientError::Build)?;

		info!(base_url = %base_url, username = %username, "kuroko2 client initialized");

		Ok(Kuroko2Client {
			inner: Arc::new(ClientInner {
				base_url,
				username,
				apikey,
				http_client,
			}),
		})
	}
}

impl Default for Kuroko2ClientBuilder {
	fn default() -> Self {
		Self::new()
	}
}

#[derive(Debug)]
struct ClientInner {
	base_url: String,
	username: String,
	apikey: SecretString,
	http_client: Client,
}

/// Client for the kuroko2 definition endpoints.
///
/// Cloning is cheap; clones share the same immutable configuration and
/// connection pool.
///
/// # Example
///
/// ```ignore
/// use kuroko2_client::{Kuroko2Client, OperationContext, JobDefinitionId};
///
/// let client = Kuroko2Client::builder()
///     .endpoint("https://kuroko2.example.com/v1")
///     .username("terraform")
///     .apikey("secret")
///     .build()?;
///
/// let definition = client
///     .get_job_definition(&OperationContext::new(), JobDefinitionId(42))
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct Kuroko2Client {
	inner: Arc<ClientInner>,
}

impl Kuroko2Client {
	pub fn builder() -> Kuroko2ClientBuilder {
		Kuroko2ClientBuilder::new()
	}

	pub fn base_url(&self) -> &str {
		&self.inner.base_url
	}

	/// `GET {base}/definitions/{id}`, expecting 200.
	#[instrument(skip(self, ctx), fields(id = %id))]
	pub async fn get_job_definition(
		&self,
		ctx: &OperationContext,
		id: JobDefinitionId,
	) -> Result<JobDefinition> {
		let url = self.definition_url(id);
		let response = self
			.send(ctx, Method::GET, &url, None, StatusCode::OK)
			.await?;
		self.decode(ctx, Method::GET, &url, response).await
	}

	/// `POST {base}/definitions`, expecting 202 with the stored definition
	/// echoed back.
	#[instrument(skip(self, ctx, input), fields(name = %input.name))]
	pub async fn create_job_definition(
		&self,
		ctx: &OperationContext,
		input: &JobDefinitionInput,
	) -> Result<JobDefinition> {
		let url = self.definitions_url();
		let body = serde_json::to_vec(input).map_err(ClientError::Encode)?;
		let response = self
			.send(ctx, Method::POST, &url, Some(body), StatusCode::ACCEPTED)
			.await?;
		let definition = self.decode(ctx, Method::POST, &url, response).await?;

		info!(id = %definition.id, "job definition created");
		Ok(definition)
	}

	/// `PUT {base}/definitions/{id}`, expecting 204. The response body is
	/// never read.
	#[instrument(skip(self, ctx, input), fields(id = %id))]
	pub async fn update_job_definition(
		&self,
		ctx: &OperationContext,
		id: JobDefinitionId,
		input: &JobDefinitionInput,
	) -> Result<()> {
		let url = self.definition_url(id);
		let body = serde_json::to_vec(input).map_err(ClientError::Encode)?;
		self.send(ctx, Method::PUT, &url, Some(body), StatusCode::NO_CONTENT)
			.await?;

		info!("job definition updated");
		Ok(())
	}

	/// `DELETE {base}/definitions/{id}`, expecting 204.
	#[instrument(skip(self, ctx), fields(id = %id))]
	pub async fn delete_job_definition(
		&self,
		ctx: &OperationContext,
		id: JobDefinitionId,
	) -> Result<()> {
		let url = self.definition_url(id);
		self.send(ctx, Method::DELETE, &url, None, StatusCode::NO_CONTENT)
			.await?;

		info!("job definition deleted");
		Ok(())
	}

	fn definitions_url(&self) -> String {
		format!("{}/definitions", self.inner.base_url)
	}

	fn definition_url(&self, id: JobDefinitionId) -> String {
		format!("{}/definitions/{}", self.inner.base_url, id)
	}

	async fn send(
		&self,
		ctx: &OperationContext,
		method: Method,
		url: &str,
		body: Option<Vec<u8>>,
		expected: StatusCode,
	) -> Result<Response> {
		let mut request = self
			.inner
			.http_client
			.request(method.clone(), url)
			.basic_auth(&self.inner.username, Some(self.inner.apikey.expose()));
		if let Some(body) = body {
			request = request.header(CONTENT_TYPE, "application/json").body(body);
		}

		debug!(method = %method, url = %url, "sending request to kuroko2");

		let response = ctx
			.run(request.send())
			.await
			.map_err(|reason| interrupted(reason, &method, url))?
			.map_err(|source| {
				error!(method = %method, url = %url, error = %source, "kuroko2 request failed");
				ClientError::Transport {
					method: method.clone(),
					url: url.to_string(),
					source,
				}
			})?;

		let status = response.status();
		debug!(status = %status, "received response from kuroko2");

		if status != expected {
			error!(
				method = %method,
				url = %url,
				status = status.as_u16(),
				expected = expected.as_u16(),
				"kuroko2 returned unexpected status"
			);
			return Err(ClientError::UnexpectedStatus {
				method,
				url: url.to_string(),
				status: status.as_u16(),
			});
		}

		Ok(response)
	}

	async fn decode(
		&self,
		ctx: &OperationContext,
		method: Method,
		url: &str,
		response: Response,
	) -> Result<JobDefinition> {
		let body = ctx
			.run(response.bytes())
			.await
			.map_err(|reason| interrupted(reason, &method, url))?
			.map_err(|source| ClientError::Transport {
				method: method.clone(),
				url: url.to_string(),
				source,
			})?;

		let definition: JobDefinition = serde_json::from_slice(&body).map_err(|source| {
			error!(method = %method, url = %url, error = %source, "failed to decode job definition");
			ClientError::Decode {
				method: method.clone(),
				url: url.to_string(),
				source,
			}
		})?;

		Ok(definition.normalized())
	}
}

fn interrupted(reason: Interrupted, method: &Method, url: &str) -> ClientError {
	let (method, url) = (method.clone(), url.to_string());
	match reason {
		Interrupted::Cancelled => ClientError::Cancelled { method, url },
		Interrupted::DeadlineExceeded => ClientError::DeadlineExceeded { method, url },
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn builder() -> Kuroko2ClientBuilder {
		Kuroko2Client::builder()
			.endpoint("https://kuroko2.example.com/v1")
			.username("terraform")
			.apikey("apikey")
	}

	#[test]
	fn builder_success() {
		assert!(builder().build().is_ok());
	}

	#[test]
	fn builder_requires_endpoint() {
		let result = Kuroko2Client::builder()
			.username("terraform")
			.apikey("apikey")
			.build();
		assert!(matches!(result, Err(ClientError::InvalidBaseUrl)));

		let result = builder().endpoint("   ").build();
		assert!(matches!(result, Err(ClientError::InvalidBaseUrl)));
	}

	#[test]
	fn builder_rejects_endpoint_without_scheme() {
		let result = builder().endpoint("kuroko2.example.com").build();
		assert!(matches!(result, Err(ClientError::InvalidBaseUrl)));
	}

	#[test]
	fn builder_requires_credentials() {
		assert!(matches!(
			builder().username("").build(),
			Err(ClientError::MissingUsername)
		));
		assert!(matches!(
			builder().apikey("").build(),
			Err(ClientError::MissingApiKey)
		));
	}

	#[test]
	fn builder_normalizes_base_url() {
		let client = builder()
			.endpoint("https://kuroko2.example.com/v1/")
			.build()
			.unwrap();

		assert_eq!(client.base_url(), "https://kuroko2.example.com/v1");
		assert_eq!(
			client.definitions_url(),
			"https://kuroko2.example.com/v1/definitions"
		);
		assert_eq!(
			client.definition_url(JobDefinitionId(42)),
			"https://kuroko2.example.com/v1/definitions/42"
		);
	}

	#[test]
	fn debug_output_hides_apikey() {
		let client = builder().apikey("very-secret-apikey").build().unwrap();
		let debug = format!("{client:?}");
		assert!(!debug.contains("very-secret-apikey"));
	}
}
