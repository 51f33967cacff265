// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use kuroko2_core::OperationContext;

use crate::error::ResourceError;
use crate::schema::Schema;

/// Lifecycle of a declaratively managed remote object.
///
/// The orchestrator owns both the declared configuration and the persisted
/// state; implementations map between them and the remote API and keep
/// nothing across calls. The orchestrator never runs two of these methods
/// concurrently for the same resource instance.
#[async_trait]
pub trait ManagedResource: Send + Sync {
	/// User-authored desired state.
	type Config: Send + Sync;
	/// Last-known actual state, persisted by the orchestrator.
	type State: Send + Sync;

	fn type_name(&self) -> &str;

	fn schema(&self) -> Schema;

	/// Checks the declared configuration before any API call is planned.
	fn validate(&self, config: &Self::Config) -> Result<(), ResourceError>;

	async fn create(
		&self,
		ctx: &OperationContext,
		config: &Self::Config,
	) -> Result<Self::State, ResourceError>;

	/// Returns the full remote state, replacing whatever `state` held.
	async fn read(
		&self,
		ctx: &OperationContext,
		state: &Self::State,
	) -> Result<Self::State, ResourceError>;

	async fn update(
		&self,
		ctx: &OperationContext,
		state: &Self::State,
		config: &Self::Config,
	) -> Result<Self::State, ResourceError>;

	/// On success the orchestrator drops the resource from its state.
	async fn delete(&self, ctx: &OperationContext, state: &Self::State) -> Result<(), ResourceError>;

	/// Seeds state from an externally supplied identifier; a following
	/// [`ManagedResource::read`] fills in the rest.
	fn import(&self, id: &str) -> Result<Self::State, ResourceError>;
}
