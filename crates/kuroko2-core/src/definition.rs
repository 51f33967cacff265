// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Job definition wire types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::normalize::normalize_line_endings;
use crate::prevent_multi::PreventMulti;

/// Server-assigned identifier of a job definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobDefinitionId(pub i64);

impl JobDefinitionId {
	pub fn get(self) -> i64 {
		self.0
	}
}

impl fmt::Display for JobDefinitionId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for JobDefinitionId {
	type Err = CoreError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		s.parse::<i64>()
			.map(Self)
			.map_err(|source| CoreError::InvalidId {
				raw: s.to_string(),
				source,
			})
	}
}

impl From<i64> for JobDefinitionId {
	fn from(value: i64) -> Self {
		Self(value)
	}
}

/// A job definition as returned by `GET /definitions/{id}` and
/// `POST /definitions`.
///
/// `prevent_multi` stays the raw wire integer here; use
/// [`JobDefinition::prevent_multi_mode`] to interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDefinition {
	pub id: JobDefinitionId,
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub description: String,
	#[serde(rename = "user_id", default, deserialize_with = "null_as_default")]
	pub admins: Vec<i64>,
	#[serde(default)]
	pub script: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub cron: Vec<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub tags: Vec<String>,
	#[serde(default)]
	pub notify_cancellation: bool,
	#[serde(default)]
	pub suspended: bool,
	#[serde(default)]
	pub prevent_multi: i64,
	#[serde(default, deserialize_with = "null_as_default")]
	pub slack_channel: String,
}

impl JobDefinition {
	/// Rewrites description and script to LF line endings.
	pub fn normalize(&mut self) {
		self.description = normalize_line_endings(&self.description).into_owned();
		self.script = normalize_line_endings(&self.script).into_owned();
	}

	pub fn normalized(mut self) -> Self {
		self.normalize();
		self
	}

	pub fn prevent_multi_mode(&self) -> Result<PreventMulti, CoreError> {
		PreventMulti::from_wire(self.prevent_multi)
	}
}

/// Body of `POST /definitions` and `PUT /definitions/{id}`.
///
/// There is no identifier field: the server assigns it on create and takes
/// it from the URL on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDefinitionInput {
	pub name: String,
	pub description: String,
	pub script: String,
	#[serde(rename = "user_id")]
	pub admins: Vec<i64>,
	pub cron: Vec<String>,
	pub tags: Vec<String>,
	pub notify_cancellation: bool,
	pub suspended: bool,
	pub prevent_multi: PreventMulti,
	pub slack_channel: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de> + Default,
{
	Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn wire_definition() -> serde_json::Value {
		json!({
			"id": 42,
			"name": "nightly-report",
			"description": "Builds the report\r\nand mails it",
			"user_id": [3, 1, 2],
			"script": "env: FOO=bar\r\nexecute: echo hello\r\n",
			"cron": ["0 3 * * *"],
			"tags": ["report", "nightly"],
			"notify_cancellation": true,
			"suspended": false,
			"prevent_multi": 2,
			"slack_channel": "#ops"
		})
	}

	#[test]
	fn decodes_wire_field_names() {
		let definition: JobDefinition = serde_json::from_value(wire_definition()).unwrap();

		assert_eq!(definition.id, JobDefinitionId(42));
		assert_eq!(definition.admins, vec![3, 1, 2]);
		assert_eq!(definition.cron, vec!["0 3 * * *"]);
		assert_eq!(definition.prevent_multi, 2);
		assert_eq!(definition.slack_channel, "#ops");
	}

	#[test]
	fn null_lists_decode_as_empty() {
		let mut value = wire_definition();
		value["cron"] = serde_json::Value::Null;
		value["tags"] = serde_json::Value::Null;
		value.as_object_mut().unwrap().remove("slack_channel");

		let definition: JobDefinition = serde_json::from_value(value).unwrap();
		assert!(definition.cron.is_empty());
		assert!(definition.tags.is_empty());
		assert_eq!(definition.slack_channel, "");
	}

	#[test]
	fn missing_id_is_a_decode_error() {
		let mut value = wire_definition();
		value.as_object_mut().unwrap().remove("id");
		assert!(serde_json::from_value::<JobDefinition>(value).is_err());
	}

	#[test]
	fn normalized_rewrites_text_fields_only() {
		let definition: JobDefinition = serde_json::from_value(wire_definition()).unwrap();
		let normalized = definition.clone().normalized();

		assert_eq!(normalized.description, "Builds the report\nand mails it");
		assert_eq!(normalized.script, "env: FOO=bar\nexecute: echo hello\n");
		assert_eq!(normalized.name, definition.name);
		assert_eq!(normalized.cron, definition.cron);
	}

	#[test]
	fn prevent_multi_mode_interprets_wire_value() {
		let mut definition: JobDefinition = serde_json::from_value(wire_definition()).unwrap();
		assert_eq!(definition.prevent_multi_mode(), Ok(PreventMulti::Working));

		definition.prevent_multi = 4;
		assert_eq!(
			definition.prevent_multi_mode(),
			Err(CoreError::UnknownPreventMultiValue(4))
		);
	}

	#[test]
	fn oversized_prevent_multi_decodes_and_fails_interpretation() {
		let mut value = wire_definition();
		value["prevent_multi"] = json!(4_294_967_297_i64);

		let definition: JobDefinition = serde_json::from_value(value).unwrap();
		assert_eq!(
			definition.prevent_multi_mode(),
			Err(CoreError::UnknownPreventMultiValue(4_294_967_297))
		);
	}

	#[test]
	fn input_serializes_without_id() {
		let input = JobDefinitionInput {
			name: "nightly-report".to_string(),
			description: "Builds the report".to_string(),
			script: "execute: echo hello".to_string(),
			admins: vec![1],
			cron: vec![],
			tags: vec![],
			notify_cancellation: true,
			suspended: false,
			prevent_multi: PreventMulti::WorkingOrError,
			slack_channel: String::new(),
		};

		let value = serde_json::to_value(&input).unwrap();
		assert!(value.get("id").is_none());
		assert_eq!(value["user_id"], json!([1]));
		assert_eq!(value["cron"], json!([]));
		assert_eq!(value["prevent_multi"], json!(1));
	}

	#[test]
	fn id_parses_decimal_i64() {
		assert_eq!("123".parse::<JobDefinitionId>().unwrap(), JobDefinitionId(123));
		assert_eq!(
			"9223372036854775807".parse::<JobDefinitionId>().unwrap().get(),
			i64::MAX
		);
		assert!(matches!(
			"abc".parse::<JobDefinitionId>(),
			Err(CoreError::InvalidId { .. })
		));
		assert!("".parse::<JobDefinitionId>().is_err());
		assert_eq!(JobDefinitionId(7).to_string(), "7");
	}
}
