// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for kuroko2 job definitions.
//!
//! This crate holds the wire model shared by the API client and the resource
//! reconciler: the job definition as the server returns it, the input shape
//! sent on create and update, the `prevent_multi` mode mapping, line-ending
//! normalization and the per-operation cancellation context.

pub mod context;
pub mod definition;
pub mod error;
pub mod normalize;
pub mod prevent_multi;

pub use context::{Interrupted, OperationContext};
pub use definition::{JobDefinition, JobDefinitionId, JobDefinitionInput};
pub use error::{CoreError, Result};
pub use normalize::normalize_line_endings;
pub use prevent_multi::PreventMulti;
