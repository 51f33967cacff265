// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The `kuroko2_job_definition` resource.

mod convert;
mod model;
mod resource;

pub use convert::{decode_job_definition, encode_job_definition};
pub use model::{JobDefinitionConfig, JobDefinitionState};
pub use resource::JobDefinitionResource;
