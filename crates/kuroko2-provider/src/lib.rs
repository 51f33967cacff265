// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Declarative management of kuroko2 job definitions.
//!
//! An orchestrator (plan/apply engine) holds declared configuration and
//! persisted state, and drives the lifecycle of each resource through
//! [`ManagedResource`]:
//!
//! ```ignore
//! let provider = Kuroko2Provider::configure(&ProviderConfig::from_env()?)?;
//! let resource = provider.job_definition();
//!
//! resource.validate(&config)?;
//! let state = resource.create(&ctx, &config).await?;
//! let state = resource.read(&ctx, &state).await?;
//! ```
//!
//! The resource owns no state between calls; each call issues at most one
//! request to kuroko2.

pub mod config;
pub mod error;
pub mod job_definition;
pub mod provider;
pub mod resource;
pub mod schema;

pub use config::ProviderConfig;
pub use error::{ConfigError, Diagnostic, Operation, ResourceError, Severity};
pub use job_definition::{
	decode_job_definition, encode_job_definition, JobDefinitionConfig, JobDefinitionResource,
	JobDefinitionState,
};
pub use kuroko2_core::{JobDefinitionId, OperationContext, PreventMulti};
pub use provider::Kuroko2Provider;
pub use resource::ManagedResource;
pub use schema::{Attribute, AttributeDefault, AttributeType, Schema};
