// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Declared configuration and persisted state of a job definition.

use kuroko2_core::{JobDefinitionId, PreventMulti};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ResourceError;

fn default_notify_cancellation() -> bool {
	true
}

fn default_prevent_multi() -> String {
	PreventMulti::default().symbol().to_string()
}

/// A job definition as the user declares it.
///
/// Omitted optional attributes take the same defaults the schema advertises.
/// `cron` and `tags` stay `None` when undeclared; kuroko2 treats that the
/// same as an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDefinitionConfig {
	pub name: String,
	pub description: String,
	pub script: String,
	pub admins: Vec<i64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub cron: Option<Vec<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tags: Option<Vec<String>>,
	#[serde(default = "default_notify_cancellation")]
	pub notify_cancellation: bool,
	#[serde(default)]
	pub suspended: bool,
	/// One of `NONE`, `WORKING_OR_ERROR`, `WORKING`, `ERROR`.
	#[serde(default = "default_prevent_multi")]
	pub prevent_multi: String,
	#[serde(default)]
	pub slack_channel: String,
}

impl JobDefinitionConfig {
	/// Required attributes only; everything else at its default.
	pub fn new(
		name: impl Into<String>,
		description: impl Into<String>,
		script: impl Into<String>,
		admins: Vec<i64>,
	) -> Self {
		Self {
			name: name.into(),
			description: description.into(),
			script: script.into(),
			admins,
			cron: None,
			tags: None,
			notify_cancellation: default_notify_cancellation(),
			suspended: false,
			prevent_multi: default_prevent_multi(),
			slack_channel: String::new(),
		}
	}

	pub fn validate(&self) -> Result<(), ResourceError> {
		if self.admins.is_empty() {
			return Err(ResourceError::InvalidConfig(
				"admins must contain at least one user id".to_string(),
			));
		}

		if self.prevent_multi.parse::<PreventMulti>().is_err() {
			let allowed = PreventMulti::symbols().collect::<Vec<_>>().join(", ");
			return Err(ResourceError::InvalidConfig(format!(
				"prevent_multi must be one of {allowed}, got {:?}",
				self.prevent_multi
			)));
		}

		Ok(())
	}
}

/// What the orchestrator persists for a job definition.
///
/// Right after import only `id` is known and `attributes` is `None` until
/// the next read. Deserializing yields `None` only when no attribute is
/// present beside `id`; a partial or mistyped attribute set is an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobDefinitionState {
	pub id: JobDefinitionId,
	#[serde(flatten)]
	pub attributes: Option<JobDefinitionConfig>,
}

impl JobDefinitionState {
	pub fn imported(id: JobDefinitionId) -> Self {
		Self {
			id,
			attributes: None,
		}
	}

	pub fn is_hydrated(&self) -> bool {
		self.attributes.is_some()
	}
}

/// Persisted state with every attribute optional, so an id-only record can
/// be told apart from a hydrated one without swallowing type errors.
#[derive(Deserialize)]
struct PersistedState {
	id: JobDefinitionId,
	name: Option<String>,
	description: Option<String>,
	script: Option<String>,
	admins: Option<Vec<i64>>,
	cron: Option<Vec<String>>,
	tags: Option<Vec<String>>,
	notify_cancellation: Option<bool>,
	suspended: Option<bool>,
	prevent_multi: Option<String>,
	slack_channel: Option<String>,
}

impl PersistedState {
	fn has_attributes(&self) -> bool {
		self.name.is_some()
			|| self.description.is_some()
			|| self.script.is_some()
			|| self.admins.is_some()
			|| self.cron.is_some()
			|| self.tags.is_some()
			|| self.notify_cancellation.is_some()
			|| self.suspended.is_some()
			|| self.prevent_multi.is_some()
			|| self.slack_channel.is_some()
	}
}

impl<'de> Deserialize<'de> for JobDefinitionState {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let persisted = PersistedState::deserialize(deserializer)?;
		if !persisted.has_attributes() {
			return Ok(Self::imported(persisted.id));
		}

		let attributes = JobDefinitionConfig {
			name: persisted.name.ok_or_else(|| D::Error::missing_field("name"))?,
			description: persisted
				.description
				.ok_or_else(|| D::Error::missing_field("description"))?,
			script: persisted
				.script
				.ok_or_else(|| D::Error::missing_field("script"))?,
			admins: persisted
				.admins
				.ok_or_else(|| D::Error::missing_field("admins"))?,
			cron: persisted.cron,
			tags: persisted.tags,
			notify_cancellation: persisted
				.notify_cancellation
				.unwrap_or_else(default_notify_cancellation),
			suspended: persisted.suspended.unwrap_or_default(),
			prevent_multi: persisted.prevent_multi.unwrap_or_else(default_prevent_multi),
			slack_channel: persisted.slack_channel.unwrap_or_default(),
		};

		Ok(Self {
			id: persisted.id,
			attributes: Some(attributes),
		})
	}
}
