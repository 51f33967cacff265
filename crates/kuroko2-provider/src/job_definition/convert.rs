// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Mapping between the kuroko2 wire model and declared/persisted state.

use kuroko2_core::{JobDefinition, JobDefinitionInput, PreventMulti};

use super::model::{JobDefinitionConfig, JobDefinitionState};
use crate::error::ResourceError;

/// Remote definition to persisted state.
///
/// Empty `cron`/`tags` become `None` so an undeclared list does not show up
/// as a diff against `[]`. `admins` is always materialized.
pub fn encode_job_definition(
	definition: JobDefinition,
) -> Result<JobDefinitionState, ResourceError> {
	let prevent_multi = definition
		.prevent_multi_mode()
		.map_err(ResourceError::InternalConsistency)?;

	Ok(JobDefinitionState {
		id: definition.id,
		attributes: Some(JobDefinitionConfig {
			name: definition.name,
			description: definition.description,
			script: definition.script,
			admins: definition.admins,
			cron: non_empty(definition.cron),
			tags: non_empty(definition.tags),
			notify_cancellation: definition.notify_cancellation,
			suspended: definition.suspended,
			prevent_multi: prevent_multi.symbol().to_string(),
			slack_channel: definition.slack_channel,
		}),
	})
}

/// Declared configuration to the create/update request body.
pub fn decode_job_definition(
	config: &JobDefinitionConfig,
) -> Result<JobDefinitionInput, ResourceError> {
	let prevent_multi = config
		.prevent_multi
		.parse::<PreventMulti>()
		.map_err(ResourceError::InternalConsistency)?;

	Ok(JobDefinitionInput {
		name: config.name.clone(),
		description: config.description.clone(),
		script: config.script.clone(),
		admins: config.admins.clone(),
		cron: config.cron.clone().unwrap_or_default(),
		tags: config.tags.clone().unwrap_or_default(),
		notify_cancellation: config.notify_cancellation,
		suspended: config.suspended,
		prevent_multi,
		slack_channel: config.slack_channel.clone(),
	})
}

fn non_empty(list: Vec<String>) -> Option<Vec<String>> {
	if list.is_empty() {
		None
	} else {
		Some(list)
	}
}
