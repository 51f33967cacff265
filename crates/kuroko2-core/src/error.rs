// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the job definition model.

use std::num::ParseIntError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
	/// The server sent a `prevent_multi` integer outside 0..=3.
	#[error("unknown prevent_multi value: {0}")]
	UnknownPreventMultiValue(i64),

	/// A `prevent_multi` symbol outside the four known names.
	#[error("unknown prevent_multi symbol: {0:?}")]
	UnknownPreventMultiSymbol(String),

	#[error("invalid job definition id {raw:?}: {source}")]
	InvalidId {
		raw: String,
		#[source]
		source: ParseIntError,
	},
}
