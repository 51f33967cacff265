// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use kuroko2_client::Kuroko2Client;
use tracing::info;

use crate::config::ProviderConfig;
use crate::error::ConfigError;
use crate::job_definition::JobDefinitionResource;
use crate::resource::ManagedResource;
use crate::schema::{Attribute, AttributeType, Schema};

/// Entry point the orchestrator configures once and then asks for resources.
#[derive(Debug, Clone)]
pub struct Kuroko2Provider {
	client: Kuroko2Client,
}

impl Kuroko2Provider {
	pub const TYPE_NAME: &'static str = "kuroko2";

	pub fn schema() -> Schema {
		Schema::new(vec![
			Attribute::required("endpoint", AttributeType::String),
			Attribute::required("username", AttributeType::String),
			Attribute::required("apikey", AttributeType::String).sensitive(),
		])
	}

	pub fn configure(config: &ProviderConfig) -> Result<Self, ConfigError> {
		config.validate()?;

		let client = Kuroko2Client::builder()
			.endpoint(config.endpoint.clone())
			.username(config.username.clone())
			.apikey(config.apikey.clone())
			.build()?;

		info!(endpoint = %client.base_url(), "kuroko2 provider configured");
		Ok(Self { client })
	}

	pub fn client(&self) -> &Kuroko2Client {
		&self.client
	}

	pub fn job_definition(&self) -> JobDefinitionResource<Kuroko2Client> {
		JobDefinitionResource::new(Self::TYPE_NAME, self.client.clone())
	}

	pub fn resource_types(&self) -> Vec<String> {
		vec![self.job_definition().type_name().to_string()]
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use kuroko2_client::ClientError;

	#[test]
	fn configure_builds_client() {
		let provider = Kuroko2Provider::configure(&ProviderConfig::new(
			"https://kuroko2.example.com/v1/",
			"deploy",
			"s3cr3t",
		))
		.unwrap();

		assert_eq!(provider.client().base_url(), "https://kuroko2.example.com/v1");
		assert_eq!(provider.resource_types(), vec!["kuroko2_job_definition"]);
	}

	#[test]
	fn configure_rejects_empty_apikey() {
		let err = Kuroko2Provider::configure(&ProviderConfig::new(
			"https://kuroko2.example.com/v1",
			"deploy",
			"",
		))
		.unwrap_err();
		assert!(matches!(err, ConfigError::Missing { field: "apikey" }));
	}

	#[test]
	fn configure_rejects_non_http_endpoint() {
		let err = Kuroko2Provider::configure(&ProviderConfig::new(
			"ftp://kuroko2.example.com",
			"deploy",
			"s3cr3t",
		))
		.unwrap_err();
		assert!(matches!(err, ConfigError::Client(ClientError::InvalidBaseUrl)));
	}

	#[test]
	fn apikey_is_sensitive() {
		let schema = Kuroko2Provider::schema();
		assert!(schema.attribute("apikey").unwrap().sensitive);
		assert!(!schema.attribute("endpoint").unwrap().sensitive);
	}
}
