// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The job definition API as seen by the reconciler.

use async_trait::async_trait;
use kuroko2_core::{JobDefinition, JobDefinitionId, JobDefinitionInput, OperationContext};

use crate::client::Kuroko2Client;
use crate::error::Result;

/// The four definition endpoints. Each call is one round trip with no retry.
///
/// Responses that carry a definition come back with description and script
/// already normalized to LF.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait JobDefinitionApi: Send + Sync {
	async fn fetch(&self, ctx: &OperationContext, id: JobDefinitionId) -> Result<JobDefinition>;

	async fn create(
		&self,
		ctx: &OperationContext,
		input: &JobDefinitionInput,
	) -> Result<JobDefinition>;

	async fn update(
		&self,
		ctx: &OperationContext,
		id: JobDefinitionId,
		input: &JobDefinitionInput,
	) -> Result<()>;

	async fn delete(&self, ctx: &OperationContext, id: JobDefinitionId) -> Result<()>;
}

#[async_trait]
impl JobDefinitionApi for Kuroko2Client {
	async fn fetch(&self, ctx: &OperationContext, id: JobDefinitionId) -> Result<JobDefinition> {
		self.get_job_definition(ctx, id).await
	}

	async fn create(
		&self,
		ctx: &OperationContext,
		input: &JobDefinitionInput,
	) -> Result<JobDefinition> {
		self.create_job_definition(ctx, input).await
	}

	async fn update(
		&self,
		ctx: &OperationContext,
		id: JobDefinitionId,
		input: &JobDefinitionInput,
	) -> Result<()> {
		self.update_job_definition(ctx, id, input).await
	}

	async fn delete(&self, ctx: &OperationContext, id: JobDefinitionId) -> Result<()> {
		self.delete_job_definition(ctx, id).await
	}
}
