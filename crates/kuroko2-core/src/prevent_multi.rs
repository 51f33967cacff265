// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Concurrency-prevention mode of a job definition.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Whether a new run may start while a previous run of the same job is in a
/// given state.
///
/// On the wire this is the integer `prevent_multi` (0-3); in declared
/// configuration it is one of the upper-case symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i32")]
pub enum PreventMulti {
	/// Runs may always overlap.
	None,
	/// Skip while a previous run is working or ended in error.
	#[default]
	WorkingOrError,
	/// Skip while a previous run is working.
	Working,
	/// Skip while a previous run ended in error.
	Error,
}

impl PreventMulti {
	pub const ALL: [PreventMulti; 4] = [
		PreventMulti::None,
		PreventMulti::WorkingOrError,
		PreventMulti::Working,
		PreventMulti::Error,
	];

	/// Declared-configuration names, indexed by wire value.
	pub const SYMBOLS: [&'static str; 4] = ["NONE", "WORKING_OR_ERROR", "WORKING", "ERROR"];

	/// Accepts any wire integer; only 0-3 map to a mode.
	pub fn from_wire(value: i64) -> Result<Self, CoreError> {
		usize::try_from(value)
			.ok()
			.and_then(|index| Self::ALL.get(index).copied())
			.ok_or(CoreError::UnknownPreventMultiValue(value))
	}

	pub fn wire(self) -> i32 {
		match self {
			Self::None => 0,
			Self::WorkingOrError => 1,
			Self::Working => 2,
			Self::Error => 3,
		}
	}

	pub fn symbol(self) -> &'static str {
		Self::SYMBOLS[self.wire() as usize]
	}

	pub fn symbols() -> impl Iterator<Item = &'static str> {
		Self::SYMBOLS.into_iter()
	}
}

impl fmt::Display for PreventMulti {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.symbol())
	}
}

impl FromStr for PreventMulti {
	type Err = CoreError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|mode| mode.symbol() == s)
			.ok_or_else(|| CoreError::UnknownPreventMultiSymbol(s.to_string()))
	}
}

impl TryFrom<i64> for PreventMulti {
	type Error = CoreError;

	fn try_from(value: i64) -> Result<Self, CoreError> {
		Self::from_wire(value)
	}
}

impl From<PreventMulti> for i32 {
	fn from(value: PreventMulti) -> Self {
		value.wire()
	}
}
