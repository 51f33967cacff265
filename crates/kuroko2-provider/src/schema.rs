// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Attribute schemas for the provider and its resources.
//!
//! The orchestrator reads these to know which attributes are required, which
//! it may fill in itself, and which values it must keep out of plan output.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeType {
	Int64,
	String,
	Bool,
	List(Box<AttributeType>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeDefault {
	Bool(bool),
	String(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
	pub name: &'static str,
	pub ty: AttributeType,
	pub required: bool,
	pub optional: bool,
	/// Filled in by the provider when not declared.
	pub computed: bool,
	pub sensitive: bool,
	pub default: Option<AttributeDefault>,
	/// Allowed values for string attributes.
	pub one_of: Option<&'static [&'static str]>,
	/// Plan with the prior state value instead of "known after apply".
	pub use_state_for_unknown: bool,
}

impl Attribute {
	fn new(name: &'static str, ty: AttributeType) -> Self {
		Self {
			name,
			ty,
			required: false,
			optional: false,
			computed: false,
			sensitive: false,
			default: None,
			one_of: None,
			use_state_for_unknown: false,
		}
	}

	pub fn required(name: &'static str, ty: AttributeType) -> Self {
		Self {
			required: true,
			..Self::new(name, ty)
		}
	}

	pub fn optional(name: &'static str, ty: AttributeType) -> Self {
		Self {
			optional: true,
			..Self::new(name, ty)
		}
	}

	pub fn computed(name: &'static str, ty: AttributeType) -> Self {
		Self {
			computed: true,
			..Self::new(name, ty)
		}
	}

	/// Optional, and computed from `default` when absent.
	pub fn with_default(mut self, default: AttributeDefault) -> Self {
		self.computed = true;
		self.default = Some(default);
		self
	}

	pub fn one_of(mut self, values: &'static [&'static str]) -> Self {
		self.one_of = Some(values);
		self
	}

	pub fn sensitive(mut self) -> Self {
		self.sensitive = true;
		self
	}

	pub fn use_state_for_unknown(mut self) -> Self {
		self.use_state_for_unknown = true;
		self
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
	pub attributes: Vec<Attribute>,
}

impl Schema {
	pub fn new(attributes: Vec<Attribute>) -> Self {
		Self { attributes }
	}

	pub fn attribute(&self, name: &str) -> Option<&Attribute> {
		self.attributes.iter().find(|attribute| attribute.name == name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn constructors_set_flags() {
		let id = Attribute::computed("id", AttributeType::Int64).use_state_for_unknown();
		assert!(id.computed && id.use_state_for_unknown && !id.required);

		let apikey = Attribute::required("apikey", AttributeType::String).sensitive();
		assert!(apikey.required && apikey.sensitive);

		let suspended = Attribute::optional("suspended", AttributeType::Bool)
			.with_default(AttributeDefault::Bool(false));
		assert!(suspended.optional && suspended.computed);
		assert_eq!(suspended.default, Some(AttributeDefault::Bool(false)));
	}

	#[test]
	fn lookup_by_name() {
		let schema = Schema::new(vec![Attribute::required(
			"admins",
			AttributeType::List(Box::new(AttributeType::Int64)),
		)]);

		assert!(schema.attribute("admins").is_some());
		assert!(schema.attribute("cron").is_none());
	}
}
