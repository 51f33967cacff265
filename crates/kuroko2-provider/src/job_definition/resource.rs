// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use kuroko2_client::{JobDefinitionApi, Kuroko2Client};
use kuroko2_core::{JobDefinitionId, OperationContext, PreventMulti};
use tracing::{info, instrument};

use super::convert::{decode_job_definition, encode_job_definition};
use super::model::{JobDefinitionConfig, JobDefinitionState};
use crate::error::{Operation, ResourceError};
use crate::resource::ManagedResource;
use crate::schema::{Attribute, AttributeDefault, AttributeType, Schema};

/// Reconciles declared job definitions against kuroko2.
pub struct JobDefinitionResource<A = Kuroko2Client> {
	api: A,
	type_name: String,
}

impl<A> JobDefinitionResource<A>
where
	A: JobDefinitionApi,
{
	pub fn new(provider_type_name: &str, api: A) -> Self {
		Self {
			api,
			type_name: format!("{provider_type_name}_job_definition"),
		}
	}
}

#[async_trait]
impl<A> ManagedResource for JobDefinitionResource<A>
where
	A: JobDefinitionApi,
{
	type Config = JobDefinitionConfig;
	type State = JobDefinitionState;

	fn type_name(&self) -> &str {
		&self.type_name
	}

	fn schema(&self) -> Schema {
		let strings = || AttributeType::List(Box::new(AttributeType::String));

		Schema::new(vec![
			Attribute::computed("id", AttributeType::Int64).use_state_for_unknown(),
			Attribute::required("name", AttributeType::String),
			Attribute::required("description", AttributeType::String),
			Attribute::required("script", AttributeType::String),
			Attribute::required("admins", AttributeType::List(Box::new(AttributeType::Int64))),
			Attribute::optional("cron", strings()),
			Attribute::optional("tags", strings()),
			Attribute::optional("notify_cancellation", AttributeType::Bool)
				.with_default(AttributeDefault::Bool(true)),
			Attribute::optional("suspended", AttributeType::Bool)
				.with_default(AttributeDefault::Bool(false)),
			Attribute::optional("prevent_multi", AttributeType::String)
				.with_default(AttributeDefault::String(
					PreventMulti::WorkingOrError.symbol(),
				))
				.one_of(&PreventMulti::SYMBOLS),
			Attribute::optional("slack_channel", AttributeType::String)
				.with_default(AttributeDefault::String("")),
		])
	}

	fn validate(&self, config: &JobDefinitionConfig) -> Result<(), ResourceError> {
		config.validate()
	}

	#[instrument(skip_all, fields(name = %config.name))]
	async fn create(
		&self,
		ctx: &OperationContext,
		config: &JobDefinitionConfig,
	) -> Result<JobDefinitionState, ResourceError> {
		let input = decode_job_definition(config)?;
		let definition = self
			.api
			.create(ctx, &input)
			.await
			.map_err(ResourceError::api(Operation::Create))?;

		let state = encode_job_definition(definition)?;
		info!(id = %state.id, "job definition created");
		Ok(state)
	}

	#[instrument(skip_all, fields(id = %state.id))]
	async fn read(
		&self,
		ctx: &OperationContext,
		state: &JobDefinitionState,
	) -> Result<JobDefinitionState, ResourceError> {
		let definition = self
			.api
			.fetch(ctx, state.id)
			.await
			.map_err(ResourceError::api(Operation::Get))?;

		encode_job_definition(definition)
	}

	/// kuroko2 answers an update with an empty 204, so the new state is the
	/// declared configuration rather than a fresh read.
	#[instrument(skip_all, fields(id = %state.id))]
	async fn update(
		&self,
		ctx: &OperationContext,
		state: &JobDefinitionState,
		config: &JobDefinitionConfig,
	) -> Result<JobDefinitionState, ResourceError> {
		let input = decode_job_definition(config)?;
		self.api
			.update(ctx, state.id, &input)
			.await
			.map_err(ResourceError::api(Operation::Update))?;

		info!("job definition updated");
		Ok(JobDefinitionState {
			id: state.id,
			attributes: Some(config.clone()),
		})
	}

	#[instrument(skip_all, fields(id = %state.id))]
	async fn delete(
		&self,
		ctx: &OperationContext,
		state: &JobDefinitionState,
	) -> Result<(), ResourceError> {
		self.api
			.delete(ctx, state.id)
			.await
			.map_err(ResourceError::api(Operation::Delete))?;

		info!("job definition deleted");
		Ok(())
	}

	fn import(&self, id: &str) -> Result<JobDefinitionState, ResourceError> {
		let id = id
			.parse::<JobDefinitionId>()
			.map_err(ResourceError::InvalidImportId)?;

		info!(id = %id, "job definition imported");
		Ok(JobDefinitionState::imported(id))
	}
}
